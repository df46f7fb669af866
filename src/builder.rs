//! Builder Module
//!
//! Fluent Builder APIで`TableLoader`を構築し、ワークシートのロード処理を提供する。

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Level;

use crate::api::{ApiKey, DEFAULT_SHEET_NAME};
use crate::coerce::coerce_column;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::TableLoadError;
use crate::parser::WorkbookParser;
use crate::types::{Column, Table};

/// ロード処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct LoadConfig {
    /// 対象のシート名
    pub sheet_name: String,

    /// NAマーカー文字列を欠損値として扱うか
    pub na_filter: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            na_filter: true,
        }
    }
}

/// `TableLoader`を段階的に構築するためのビルダー
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxtable::TableLoader;
///
/// # fn main() -> Result<(), xlsxtable::TableLoadError> {
/// let mut loader = TableLoader::builder("employees.xlsx", "api-key")
///     .with_sheet_name("Staff")
///     .with_na_filter(false)
///     .build()?;
/// loader.load()?;
/// # Ok(())
/// # }
/// ```
pub struct TableLoaderBuilder {
    file_path: PathBuf,
    api_key: ApiKey,
    config: LoadConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl TableLoaderBuilder {
    /// デフォルト設定を持つビルダーを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート名: `"Table 1"`
    /// - NAフィルタ: 有効
    /// - 診断出力: `TracingSink`
    pub fn new(file_path: impl Into<PathBuf>, api_key: impl Into<ApiKey>) -> Self {
        Self {
            file_path: file_path.into(),
            api_key: api_key.into(),
            config: LoadConfig::default(),
            sink: Arc::new(TracingSink),
        }
    }

    /// 対象のシート名を指定する
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.config.sheet_name = sheet_name.into();
        self
    }

    /// NAマーカー文字列（`NA`, `N/A`, `null`など）を欠損値として扱うかを指定する
    pub fn with_na_filter(mut self, na_filter: bool) -> Self {
        self.config.na_filter = na_filter;
        self
    }

    /// 診断出力の送り先を指定する
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// 設定を検証し、`TableLoader`を構築する
    ///
    /// # 戻り値
    ///
    /// * `Ok(TableLoader)` - 設定が有効な場合
    /// * `Err(TableLoadError::InvalidExtension)` - パスが`.xlsx`で終わらない場合
    pub fn build(self) -> Result<TableLoader, TableLoadError> {
        if !self.file_path.to_string_lossy().ends_with(".xlsx") {
            return Err(TableLoadError::InvalidExtension(self.file_path));
        }

        Ok(TableLoader {
            file_path: self.file_path,
            api_key: self.api_key,
            config: self.config,
            sink: self.sink,
            data: None,
        })
    }
}

/// ワークシートを1つロードし、列ごとに型を決定するローダー
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxtable::TableLoader;
///
/// # fn main() -> Result<(), xlsxtable::TableLoadError> {
/// let mut loader = TableLoader::new("employees.xlsx", "api-key")?;
/// if let Some(table) = loader.load()? {
///     println!("{} rows", table.row_count());
/// }
/// # Ok(())
/// # }
/// ```
pub struct TableLoader {
    file_path: PathBuf,
    api_key: ApiKey,
    config: LoadConfig,
    sink: Arc<dyn DiagnosticSink>,
    data: Option<Table>,
}

impl fmt::Debug for TableLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableLoader")
            .field("file_path", &self.file_path)
            .field("api_key", &self.api_key)
            .field("config", &self.config)
            .field("data", &self.data.as_ref().map(|t| t.shape()))
            .finish()
    }
}

impl TableLoader {
    /// デフォルトのシート名（`"Table 1"`）でローダーを構築する
    pub fn new(
        file_path: impl Into<PathBuf>,
        api_key: impl Into<ApiKey>,
    ) -> Result<Self, TableLoadError> {
        TableLoaderBuilder::new(file_path, api_key).build()
    }

    /// ビルダーを生成する
    pub fn builder(
        file_path: impl Into<PathBuf>,
        api_key: impl Into<ApiKey>,
    ) -> TableLoaderBuilder {
        TableLoaderBuilder::new(file_path, api_key)
    }

    /// 入力ファイルのパス
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// 対象のシート名
    pub fn sheet_name(&self) -> &str {
        &self.config.sheet_name
    }

    /// 下流の利用者向けに保持している認証情報
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// 最後にロードしたテーブル
    pub fn table(&self) -> Option<&Table> {
        self.data.as_ref()
    }

    /// テーブルを取り出す（ローダー側は未ロード状態に戻る）
    pub fn take_table(&mut self) -> Option<Table> {
        self.data.take()
    }

    /// シートをロードする
    ///
    /// 以前にロードしたテーブルは、結果に関わらず置き換えられます。
    ///
    /// # 戻り値
    ///
    /// * `Ok(Some(&Table))` - ロードに成功した場合
    /// * `Ok(None)` - シートにデータが存在しない場合
    /// * `Err(TableLoadError)` - それ以外の失敗（診断出力を記録した上で返されます）
    pub fn load(&mut self) -> Result<Option<&Table>, TableLoadError> {
        self.data = None;
        match self.read_table() {
            Ok(table) => {
                self.data = Some(table);
                Ok(self.data.as_ref())
            }
            Err(TableLoadError::EmptyData(_)) => {
                self.sink.log(Level::ERROR, "The Excel file is empty");
                Ok(None)
            }
            Err(e) => {
                self.sink
                    .log(Level::ERROR, &format!("Error reading the Excel file: {}", e));
                Err(e)
            }
        }
    }

    fn read_table(&self) -> Result<Table, TableLoadError> {
        if !self.file_path.exists() {
            return Err(TableLoadError::NotFound(self.file_path.clone()));
        }

        let file = File::open(&self.file_path)?;
        let mut parser = WorkbookParser::open(file)?;

        let sheet_names = parser.get_sheet_names();
        self.sink
            .log(Level::DEBUG, &format!("Available sheets: {:?}", sheet_names));

        let sheet_name = &self.config.sheet_name;
        if !sheet_names.contains(sheet_name) {
            return Err(TableLoadError::SheetNotFound {
                sheet: sheet_name.clone(),
                available: sheet_names,
            });
        }

        let raw = parser.read_sheet(sheet_name, self.config.na_filter)?;
        self.sink.log(
            Level::DEBUG,
            &format!("Data shape: ({}, {})", raw.row_count, raw.headers.len()),
        );

        let columns: Vec<Column> = raw
            .headers
            .into_iter()
            .zip(raw.columns)
            .map(|(name, values)| Column::new(name, coerce_column(values)))
            .collect();

        let types = columns
            .iter()
            .map(|c| format!("{}: {}", c.name(), c.kind()))
            .collect::<Vec<_>>()
            .join(", ");
        self.sink.log(Level::DEBUG, &format!("Data types: {}", types));

        let table = Table::new(raw.row_count, columns);

        self.sink.report(&format!(
            "Successfully loaded {} records from Excel",
            table.row_count()
        ));
        self.sink
            .report(&format!("Columns: {}", table.column_names().join(", ")));

        Ok(table)
    }
}

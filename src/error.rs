//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;
use thiserror::Error;

/// エラーの分類
///
/// 呼び出し側がバリアントの詳細に依存せずに、失敗の種類で分岐するための分類です。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 入力が不正（拡張子が`.xlsx`でない、指定シートが存在しない）
    InvalidInput,
    /// ファイルが存在しない
    NotFound,
    /// シートにデータが存在しない（`load`内で吸収される）
    EmptyData,
    /// 上記以外の失敗（破損ファイル、I/Oエラー、calamine内部エラー）
    Unexpected,
}

/// xlsxtableクレート全体で使用するエラー型
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxtable::{ErrorKind, TableLoader};
///
/// let mut loader = TableLoader::new("data.xlsx", "api-key")?;
/// match loader.load() {
///     Ok(_) => {}
///     Err(e) if e.kind() == ErrorKind::NotFound => eprintln!("missing: {}", e),
///     Err(e) => return Err(e),
/// }
/// # Ok::<(), xlsxtable::TableLoadError>(())
/// ```
#[derive(Error, Debug)]
pub enum TableLoadError {
    /// ファイルパスの拡張子が`.xlsx`でない
    ///
    /// `TableLoader`の構築時に検出され、ファイルアクセスは行われません。
    #[error("File must be an Excel (.xlsx) file: {}", .0.display())]
    InvalidExtension(PathBuf),

    /// 指定されたシートがワークブックに存在しない
    ///
    /// エラーメッセージには、ワークブック内のすべてのシート名が含まれます。
    #[error("Sheet '{sheet}' not found. Available sheets: {available:?}")]
    SheetNotFound {
        /// 要求されたシート名
        sheet: String,
        /// ワークブック内のシート名（元の順序）
        available: Vec<String>,
    },

    /// ファイルが存在しない
    #[error("Excel file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// シートにセルが1つも存在しない
    #[error("Sheet '{0}' contains no data")]
    EmptyData(String),

    /// I/O操作中に発生したエラー
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// calamineがワークブックを解析する際に発生したエラー
    #[error("Failed to parse Excel file: {0}")]
    Parse(#[from] calamine::Error),

    /// XLSX以外のコンテナ形式
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl TableLoadError {
    /// エラーの分類を返す
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableLoadError::InvalidExtension(_) | TableLoadError::SheetNotFound { .. } => {
                ErrorKind::InvalidInput
            }
            TableLoadError::NotFound(_) => ErrorKind::NotFound,
            TableLoadError::EmptyData(_) => ErrorKind::EmptyData,
            TableLoadError::Io(_)
            | TableLoadError::Parse(_)
            | TableLoadError::UnsupportedFormat(_) => ErrorKind::Unexpected,
        }
    }
}

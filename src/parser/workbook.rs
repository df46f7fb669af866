//! Workbook Parser
//!
//! calamineのラッパーとして、ワークブックを開き、シート名の列挙と
//! シートの読み込みを行います。

use calamine::{open_workbook_auto_from_rs, Data, Reader, Sheets, Xlsx};
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};

use crate::error::TableLoadError;
use crate::types::CellValue;

/// 欠損値として扱う文字列（既定のNAマーカー）
pub(crate) const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// 型付け前のシートデータ
///
/// `columns[i]`は`headers[i]`に対応し、すべての列は`row_count`個の値を持ちます。
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawSheet {
    pub headers: Vec<String>,
    pub columns: Vec<Vec<CellValue>>,
    pub row_count: usize,
}

/// ワークブックパーサー
pub(crate) struct WorkbookParser<R: Read + Seek> {
    /// calamineのワークブック（XLSX形式のみサポート）
    workbook: Xlsx<R>,
}

impl WorkbookParser<Cursor<Vec<u8>>> {
    /// ワークブックを開く
    ///
    /// 入力全体をメモリに読み込んでから、calamineで形式を判定して開きます。
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - XLSX形式のワークブックを開けた場合
    /// * `Err(TableLoadError::Parse)` - ワークブックの解析に失敗した場合
    /// * `Err(TableLoadError::UnsupportedFormat)` - XLSX以外の形式の場合
    pub fn open<R: Read>(mut reader: R) -> Result<Self, TableLoadError> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;

        let sheets = open_workbook_auto_from_rs(Cursor::new(buffer))?;
        match sheets {
            Sheets::Xlsx(workbook) => Ok(Self { workbook }),
            _ => Err(TableLoadError::UnsupportedFormat(
                "Only XLSX format is supported".to_string(),
            )),
        }
    }
}

impl<R: Read + Seek> WorkbookParser<R> {
    /// すべてのシート名を取得（ワークブック内の順序）
    pub fn get_sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シートを読み込み、ヘッダー行と列ごとの値を抽出する
    ///
    /// # 引数
    ///
    /// * `sheet_name` - 読み込むシート名
    /// * `na_filter` - NAマーカー文字列を欠損値として扱うか
    ///
    /// # 戻り値
    ///
    /// * `Ok(RawSheet)` - シートの読み込みに成功した場合
    /// * `Err(TableLoadError::EmptyData)` - シートにセルが1つも存在しない場合
    /// * `Err(TableLoadError::Parse)` - シートの解析に失敗した場合
    pub fn read_sheet(
        &mut self,
        sheet_name: &str,
        na_filter: bool,
    ) -> Result<RawSheet, TableLoadError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| TableLoadError::Parse(e.into()))?;

        if range.is_empty() {
            return Err(TableLoadError::EmptyData(sheet_name.to_string()));
        }

        // 使用範囲はA列から始まるとは限らないため、先頭の空列を補完する
        let leading = range.start().map(|(_, col)| col as usize).unwrap_or(0);
        let width = leading + range.width();
        let mut rows = range.rows();

        // 使用範囲の先頭行をヘッダーとする
        let mut header_cells = vec![CellValue::Missing; leading];
        if let Some(row) = rows.next() {
            header_cells.extend(row.iter().map(convert_cell));
        }
        let headers = normalize_headers(&header_cells);

        let mut columns: Vec<Vec<CellValue>> = vec![Vec::new(); width];
        let mut row_count = 0;
        for row in rows {
            for column in columns.iter_mut().take(leading) {
                column.push(CellValue::Missing);
            }
            for (offset, cell) in row.iter().enumerate() {
                let mut value = convert_cell(cell);
                if na_filter && is_na_marker(&value) {
                    value = CellValue::Missing;
                }
                columns[leading + offset].push(value);
            }
            row_count += 1;
        }

        Ok(RawSheet {
            headers,
            columns,
            row_count,
        })
    }
}

/// calamineのセルデータを`CellValue`に変換
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                match dt.as_duration() {
                    Some(d) => CellValue::Text(d.to_string()),
                    None => CellValue::Text(dt.as_f64().to_string()),
                }
            } else {
                match dt.as_datetime() {
                    Some(d) => CellValue::DateTime(d),
                    None => CellValue::Text(dt.as_f64().to_string()),
                }
            }
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
        Data::Empty => CellValue::Missing,
    }
}

fn is_na_marker(value: &CellValue) -> bool {
    match value {
        CellValue::Text(s) => DEFAULT_NA_VALUES.contains(&s.as_str()),
        _ => false,
    }
}

/// ヘッダー行から列名を生成
///
/// 空のヘッダーは`Unnamed: {index}`、重複した名前は`name.1`, `name.2`, ...となります。
fn normalize_headers(cells: &[CellValue]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(cells.len());

    for (idx, cell) in cells.iter().enumerate() {
        let mut name = match cell {
            CellValue::Missing => format!("Unnamed: {}", idx),
            CellValue::Text(s) if s.is_empty() => format!("Unnamed: {}", idx),
            other => other.to_string(),
        };

        let mut count = counts.get(&name).copied().unwrap_or(0);
        while count > 0 {
            counts.insert(name.clone(), count + 1);
            name = format!("{}.{}", name, count);
            count = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), count + 1);
        names.push(name);
    }

    names
}

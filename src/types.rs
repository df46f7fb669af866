//! Types Module
//!
//! ロード結果のテーブルを表現するデータ型を定義するモジュール。

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

use crate::api::ColumnKind;

/// セルの値を表す列挙型
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// 数値（f64）
    Number(f64),

    /// 文字列
    Text(String),

    /// 論理値
    Bool(bool),

    /// 日時
    DateTime(NaiveDateTime),

    /// 欠損値（空セル、NAマーカー）
    Missing,
}

impl CellValue {
    /// 値が欠損かどうかを判定
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Missing => Ok(()),
        }
    }
}

/// 列データ
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum ColumnData {
    /// 数値列（`None`は欠損）
    Numeric(Vec<Option<f64>>),

    /// 元の値を保持する列
    Text(Vec<CellValue>),
}

impl ColumnData {
    /// 行数
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values.len(),
            ColumnData::Text(values) => values.len(),
        }
    }

    /// 行が存在しないかどうか
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 列の型
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Text(_) => ColumnKind::Text,
        }
    }

    /// 数値列であれば値を返す
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match self {
            ColumnData::Numeric(values) => Some(values),
            ColumnData::Text(_) => None,
        }
    }

    /// 文字列列であれば値を返す
    pub fn as_text(&self) -> Option<&[CellValue]> {
        match self {
            ColumnData::Text(values) => Some(values),
            ColumnData::Numeric(_) => None,
        }
    }
}

/// 名前付きの列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    name: String,
    #[serde(flatten)]
    data: ColumnData,
}

impl Column {
    pub(crate) fn new(name: String, data: ColumnData) -> Self {
        Self { name, data }
    }

    /// 列名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 列データ
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// 列の型
    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }
}

/// ロードされたテーブル
///
/// 列の順序と行の順序は元のシートと同じです。すべての列は同じ行数を持ちます。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    row_count: usize,
    columns: Vec<Column>,
}

impl Table {
    /// 列のリストからテーブルを生成
    ///
    /// すべての列は`row_count`個の値を持つ必要があります。
    pub(crate) fn new(row_count: usize, columns: Vec<Column>) -> Self {
        debug_assert!(
            columns.iter().all(|c| c.data.len() == row_count),
            "every column must have {} rows",
            row_count
        );
        Self { row_count, columns }
    }

    /// 行数
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// 列数
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// (行数, 列数)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.columns.len())
    }

    /// すべての列
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// 列名のリスト（元の順序）
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// 名前で列を検索
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

//! Coercion Module
//!
//! 列単位の数値変換を提供するモジュール。
//!
//! 変換は2段階で行われます。
//!
//! 1. 厳密パース: 列のすべての値が数値として解釈できるかを検証する
//! 2. 強制パース: 1が成功した列のみ、値ごとに数値へ変換する（失敗した値は欠損）
//!
//! 1つでも数値として解釈できない値を含む列は、一切変換されずに元の値のまま残ります。

use crate::types::{CellValue, ColumnData};

/// 厳密パースで数値として解釈できなかった値
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NotNumeric;

/// 値を厳密にパースする
///
/// 論理値は`1.0` / `0.0`として扱います。日時は数値として解釈しません。
///
/// # 戻り値
///
/// * `Ok(Some(f64))` - 数値として解釈できた場合
/// * `Ok(None)` - 欠損値の場合
/// * `Err(NotNumeric)` - 数値として解釈できない場合
pub(crate) fn parse_strict(value: &CellValue) -> Result<Option<f64>, NotNumeric> {
    match value {
        CellValue::Missing => Ok(None),
        CellValue::Number(n) => Ok(Some(*n)),
        CellValue::Text(s) => s.trim().parse::<f64>().map(Some).map_err(|_| NotNumeric),
        CellValue::Bool(b) => Ok(Some(if *b { 1.0 } else { 0.0 })),
        CellValue::DateTime(_) => Err(NotNumeric),
    }
}

/// 値を強制パースする（解釈できない値は欠損）
pub(crate) fn parse_coerce(value: &CellValue) -> Option<f64> {
    parse_strict(value).unwrap_or(None)
}

/// 列全体が厳密パースに成功するかを判定
pub(crate) fn is_numeric_column(values: &[CellValue]) -> bool {
    values.iter().all(|v| parse_strict(v).is_ok())
}

/// 列の型を決定し、変換後の列データを返す
pub(crate) fn coerce_column(values: Vec<CellValue>) -> ColumnData {
    if is_numeric_column(&values) {
        ColumnData::Numeric(values.iter().map(parse_coerce).collect())
    } else {
        ColumnData::Text(values)
    }
}

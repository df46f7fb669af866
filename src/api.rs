//! Public API Types
//!
//! 公開APIで使用する値型を定義するモジュール。

use std::fmt;

/// シート名のデフォルト値
pub const DEFAULT_SHEET_NAME: &str = "Table 1";

/// 外部テキスト生成サービスの認証情報
///
/// ローダー自身はこの値を検証も使用もしません。下流の利用者へそのまま引き渡すために
/// 保持されます。`Debug`出力では値がマスクされます。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// 新しい認証情報を生成
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// 生の値を取得
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// 列の型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColumnKind {
    /// すべての値が数値（または欠損）として解釈された列
    Numeric,

    /// 元の値をそのまま保持する列
    Text,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => f.write_str("float64"),
            ColumnKind::Text => f.write_str("object"),
        }
    }
}

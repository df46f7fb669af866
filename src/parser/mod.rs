//! Parser Module
//!
//! calamineを使用したワークシート読み込みの実装。
//! セルは型付け前の`CellValue`として抽出され、列単位の型決定は`coerce`モジュールが行います。

mod workbook;

pub(crate) use workbook::WorkbookParser;

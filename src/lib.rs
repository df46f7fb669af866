//! xlsxtable - Load one Excel worksheet into a typed in-memory table
//!
//! This crate reads a single worksheet from an Excel workbook (XLSX), keeps the
//! header row as column names, and decides per column whether the values are
//! numeric. The loaded table is meant as the input of a downstream LLM
//! text-generation step.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xlsxtable::TableLoader;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Defaults to the sheet named "Table 1"
//!     let mut loader = TableLoader::new("Employee_Data.xlsx", "your-api-key-here")?;
//!
//!     if let Some(table) = loader.load()? {
//!         for column in table.columns() {
//!             println!("{} ({})", column.name(), column.kind());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Column Typing
//!
//! A column becomes numeric only when every non-blank value in it parses as a
//! number. A single non-numeric value keeps the whole column as the original
//! cell values:
//!
//! | cells            | result                        |
//! |------------------|-------------------------------|
//! | `1, 2, 3`        | numeric `[1.0, 2.0, 3.0]`     |
//! | `1, (blank), 3`  | numeric `[1.0, missing, 3.0]` |
//! | `1, "abc", 3`    | text, unchanged               |
//!
//! # Diagnostics
//!
//! Diagnostics go to an injected [`DiagnosticSink`]. The default
//! [`TracingSink`] emits `tracing` events and prints the load summary to
//! standard output; [`MemorySink`] collects everything for inspection.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use xlsxtable::{MemorySink, TableLoader};
//!
//! # fn main() -> Result<(), xlsxtable::TableLoadError> {
//! let sink = Arc::new(MemorySink::new());
//! let mut loader = TableLoader::builder("Employee_Data.xlsx", "key")
//!     .with_sheet_name("Staff")
//!     .with_sink(sink.clone())
//!     .build()?;
//! loader.load()?;
//! for line in sink.reports() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod coerce;
mod diagnostics;
mod error;
mod parser;
mod types;

// 公開API
pub use api::{ApiKey, ColumnKind, DEFAULT_SHEET_NAME};
pub use builder::{TableLoader, TableLoaderBuilder};
pub use diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use error::{ErrorKind, TableLoadError};
pub use types::{CellValue, Column, ColumnData, Table};

/// Re-exported so callers can implement [`DiagnosticSink`] without adding `tracing`.
pub use tracing::Level;

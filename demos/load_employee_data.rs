//! Load Employee Data Example
//!
//! Loads the "Table 1" sheet of an employee workbook and prints the column types.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example load_employee_data
//! ```

use tracing_subscriber::EnvFilter;
use xlsxtable::TableLoader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let file_path = "/home/hadi/Desktop/RAG/Employee_Data.xlsx";
    let api_key = "your-api-key-here";

    let mut loader = TableLoader::new(file_path, api_key)?;
    if let Some(table) = loader.load()? {
        for column in table.columns() {
            println!("  {:<24} {}", column.name(), column.kind());
        }
    }

    Ok(())
}

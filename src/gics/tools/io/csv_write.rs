use std::fs;
use std::path::Path;

use crate::gics::tools::error::Result;
use crate::gics::tools::tables::CsvTable;

/// Writes the provided table as a CSV file inside `dir`, header row first,
/// replacing any previous file of the same name.
pub fn write_table(dir: &Path, table: &CsvTable) -> Result<()> {
    let path = dir.join(&table.file_name);
    if path.exists() {
        fs::remove_file(&path)?;
    }

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::gics::tools::error::Result;
use crate::gics::tools::io::csv_read;
use crate::gics::tools::io::csv_write;
use crate::gics::tools::io::excel_read;
use crate::gics::tools::io::json_write;

/// Extracts the four level tables from the workbook and writes one CSV file
/// per level into `csv_dir`.
#[instrument(
    level = "info",
    skip_all,
    fields(workbook = %workbook.display(), csv_dir = %csv_dir.display())
)]
pub fn extract_to_csv(workbook: &Path, csv_dir: &Path) -> Result<()> {
    let tables = excel_read::read_level_tables(workbook)?;
    info!(table_count = tables.len(), "extracted level tables from workbook");

    fs::create_dir_all(csv_dir)?;
    for table in &tables {
        debug!(
            file = table.file_name.as_str(),
            row_count = table.rows.len(),
            "writing level table"
        );
        csv_write::write_table(csv_dir, table)?;
    }
    Ok(())
}

/// Loads the CSV tables back, assembles the nested sector tree, and writes
/// it out as a single JSON document.
#[instrument(
    level = "info",
    skip_all,
    fields(csv_dir = %csv_dir.display(), output = %output.display())
)]
pub fn assemble_to_json(csv_dir: &Path, output: &Path) -> Result<()> {
    let sectors = csv_read::load_taxonomy(csv_dir)?;
    info!(sector_count = sectors.len(), "assembled taxonomy tree");
    json_write::write_taxonomy(output, &sectors)
}

/// Runs the whole pipeline in fixed order: workbook → CSV tables → JSON.
#[instrument(level = "info", skip_all, fields(workbook = %workbook.display()))]
pub fn run(workbook: &Path, csv_dir: &Path, output: &Path) -> Result<()> {
    extract_to_csv(workbook, csv_dir)?;
    assemble_to_json(csv_dir, output)
}

use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::gics::tools::error::{Result, ToolError};
use crate::gics::tools::tables::{
    CHILD_LEVELS, ChildLevel, CsvTable, MAX_DATA_ROWS, SECTOR_SHEET, SECTORS_FILE,
};

/// Reads the four classification levels from the source workbook, one sheet
/// per level, and returns them as CSV-ready tables in extraction order.
///
/// Data rows start below the header row and end at the first blank leading
/// cell. The three child sheets store `[parent id, own id, name]` and are
/// rearranged to `[own id, parent id, name]` on the way out.
pub fn read_level_tables(path: &Path) -> Result<Vec<CsvTable>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let mut tables = Vec::with_capacity(CHILD_LEVELS.len() + 1);
    tables.push(read_sector_table(&mut workbook)?);
    for level in &CHILD_LEVELS {
        tables.push(read_child_table(&mut workbook, level)?);
    }
    Ok(tables)
}

fn read_sector_table<R: std::io::Read + std::io::Seek>(workbook: &mut Xlsx<R>) -> Result<CsvTable> {
    let range = read_required_sheet(workbook, SECTOR_SHEET)?;

    let mut rows = Vec::new();
    for row in range.rows().skip(1).take(MAX_DATA_ROWS) {
        if cell_to_string(row.first()).is_empty() {
            break;
        }
        let id = cell_to_id(row.first(), "Id")?;
        let name = cell_to_string(row.get(1));
        rows.push(vec![id.to_string(), name]);
    }

    Ok(CsvTable {
        file_name: SECTORS_FILE.to_string(),
        columns: vec!["Id".to_string(), "Name".to_string()],
        rows,
    })
}

fn read_child_table<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    level: &ChildLevel,
) -> Result<CsvTable> {
    let range = read_required_sheet(workbook, level.sheet)?;

    let mut rows = Vec::new();
    for row in range.rows().skip(1).take(MAX_DATA_ROWS) {
        if cell_to_string(row.first()).is_empty() {
            break;
        }
        let parent_id = cell_to_id(row.first(), level.columns[1])?;
        let own_id = cell_to_id(row.get(1), level.columns[0])?;
        let name = cell_to_string(row.get(2));
        rows.push(vec![own_id.to_string(), parent_id.to_string(), name]);
    }

    Ok(CsvTable {
        file_name: level.file_name.to_string(),
        columns: level.columns.iter().map(|column| column.to_string()).collect(),
        rows,
    })
}

fn read_required_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<calamine::Range<DataType>> {
    let range_result = workbook
        .worksheet_range(name)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{name}'")))?;
    let range = range_result.map_err(ToolError::from)?;
    Ok(range)
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Identifier cells arrive as numbers or text depending on how the workbook
/// was authored; both must render as a plain base-10 integer, never `10.0`.
fn cell_to_id(cell: Option<&DataType>, column: &str) -> Result<u32> {
    let parsed = match cell {
        Some(DataType::Int(value)) => u32::try_from(*value).ok(),
        Some(DataType::Float(value))
            if value.fract() == 0.0 && *value >= 0.0 && *value <= f64::from(u32::MAX) =>
        {
            Some(*value as u32)
        }
        Some(DataType::String(value)) => value.trim().parse::<u32>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| ToolError::InvalidLiteral {
        column: column.to_string(),
        value: cell_to_string(cell),
    })
}

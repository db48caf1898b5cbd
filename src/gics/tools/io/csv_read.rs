use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::gics::tools::error::{Result, ToolError};
use crate::gics::tools::model::{EntityId, Industry, IndustryGroup, Sector, SubIndustry};
use crate::gics::tools::tables::{
    INDUSTRIES_FILE, INDUSTRY_GROUPS_FILE, SECTORS_FILE, SUB_INDUSTRIES_FILE,
};

/// Loads the four level tables from `csv_dir` and assembles them bottom-up
/// into the ordered list of fully populated sectors.
///
/// Each loader hands its parent-keyed grouping to the level above, which
/// moves the matching bucket onto the freshly constructed entity. A bucket
/// whose parent id never appears upstream is simply left behind.
pub fn load_taxonomy(csv_dir: &Path) -> Result<Vec<Sector>> {
    let sub_industries = load_sub_industries(&csv_dir.join(SUB_INDUSTRIES_FILE))?;
    let industries = load_industries(&csv_dir.join(INDUSTRIES_FILE), sub_industries)?;
    let groups = load_industry_groups(&csv_dir.join(INDUSTRY_GROUPS_FILE), industries)?;
    load_sectors(&csv_dir.join(SECTORS_FILE), groups)
}

/// Reads the sub-industry table, grouped by parent industry id.
pub fn load_sub_industries(path: &Path) -> Result<HashMap<EntityId, Vec<SubIndustry>>> {
    let mut grouped: HashMap<EntityId, Vec<SubIndustry>> = HashMap::new();

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    for result in reader.records() {
        let record = result?;
        let id = id_field(&record, 0, "Id", path)?;
        let industry_id = id_field(&record, 1, "Industry Id", path)?;
        let name = text_field(&record, 2, path)?;

        grouped
            .entry(industry_id)
            .or_default()
            .push(SubIndustry::new(id, name)?);
    }
    Ok(grouped)
}

/// Reads the industry table, attaching sub-industries and grouping the
/// result by parent industry group id.
pub fn load_industries(
    path: &Path,
    mut sub_industries: HashMap<EntityId, Vec<SubIndustry>>,
) -> Result<HashMap<EntityId, Vec<Industry>>> {
    let mut grouped: HashMap<EntityId, Vec<Industry>> = HashMap::new();

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    for result in reader.records() {
        let record = result?;
        let id = id_field(&record, 0, "Id", path)?;
        let group_id = id_field(&record, 1, "Industry Group Id", path)?;
        let name = text_field(&record, 2, path)?;

        let mut industry = Industry::new(id, name)?;
        industry.items = sub_industries.remove(&id).unwrap_or_default();
        grouped.entry(group_id).or_default().push(industry);
    }
    Ok(grouped)
}

/// Reads the industry group table, attaching industries and grouping the
/// result by parent sector id.
pub fn load_industry_groups(
    path: &Path,
    mut industries: HashMap<EntityId, Vec<Industry>>,
) -> Result<HashMap<EntityId, Vec<IndustryGroup>>> {
    let mut grouped: HashMap<EntityId, Vec<IndustryGroup>> = HashMap::new();

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    for result in reader.records() {
        let record = result?;
        let id = id_field(&record, 0, "Id", path)?;
        let sector_id = id_field(&record, 1, "Sector Id", path)?;
        let name = text_field(&record, 2, path)?;

        let mut group = IndustryGroup::new(id, name)?;
        group.items = industries.remove(&id).unwrap_or_default();
        grouped.entry(sector_id).or_default().push(group);
    }
    Ok(grouped)
}

/// Reads the sector table and attaches industry groups, returning the
/// sectors in CSV row order.
pub fn load_sectors(
    path: &Path,
    mut industry_groups: HashMap<EntityId, Vec<IndustryGroup>>,
) -> Result<Vec<Sector>> {
    let mut sectors = Vec::new();

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    for result in reader.records() {
        let record = result?;
        let id = id_field(&record, 0, "Id", path)?;
        let name = text_field(&record, 1, path)?;

        let mut sector = Sector::new(id, name)?;
        sector.items = industry_groups.remove(&id).unwrap_or_default();
        sectors.push(sector);
    }
    Ok(sectors)
}

fn text_field(record: &StringRecord, index: usize, path: &Path) -> Result<String> {
    record
        .get(index)
        .map(str::to_string)
        .ok_or_else(|| missing_column(record, index, path))
}

fn id_field(record: &StringRecord, index: usize, column: &str, path: &Path) -> Result<EntityId> {
    let raw = record
        .get(index)
        .ok_or_else(|| missing_column(record, index, path))?;
    raw.trim()
        .parse::<EntityId>()
        .map_err(|_| ToolError::InvalidLiteral {
            column: column.to_string(),
            value: raw.to_string(),
        })
}

fn missing_column(record: &StringRecord, index: usize, path: &Path) -> ToolError {
    ToolError::MalformedRecord {
        file: path.display().to_string(),
        reason: format!("expected column {index}, found {} fields", record.len()),
    }
}

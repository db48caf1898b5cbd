/// Sheet name holding the sector rows.
pub const SECTOR_SHEET: &str = "Sector";
/// Sheet name holding the industry group rows.
pub const INDUSTRY_GROUP_SHEET: &str = "Industry Group";
/// Sheet name holding the industry rows.
pub const INDUSTRY_SHEET: &str = "Industry";
/// Sheet name holding the sub-industry rows.
pub const SUB_INDUSTRY_SHEET: &str = "Sub Industry";

/// CSV file receiving the sector table.
pub const SECTORS_FILE: &str = "sectors.csv";
/// CSV file receiving the industry group table.
pub const INDUSTRY_GROUPS_FILE: &str = "industry_groups.csv";
/// CSV file receiving the industry table.
pub const INDUSTRIES_FILE: &str = "industries.csv";
/// CSV file receiving the sub-industry table.
pub const SUB_INDUSTRIES_FILE: &str = "sub_industries.csv";

/// Upper bound on data rows scanned per sheet. Extraction stops at the
/// first blank leading cell; the bound guards against runaway sheets.
pub const MAX_DATA_ROWS: usize = 10_000;

/// A flat table that will be materialised as a CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub file_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Describes how one child level of the workbook maps onto its CSV table.
///
/// The sheet stores `[parent id, own id, name]`; the CSV output rearranges
/// this to `[own id, parent id, name]` under the listed column headers.
#[derive(Debug, Clone, Copy)]
pub struct ChildLevel {
    pub sheet: &'static str,
    pub file_name: &'static str,
    pub columns: [&'static str; 3],
}

/// The three child levels in extraction order.
pub const CHILD_LEVELS: [ChildLevel; 3] = [
    ChildLevel {
        sheet: INDUSTRY_GROUP_SHEET,
        file_name: INDUSTRY_GROUPS_FILE,
        columns: ["Id", "Sector Id", "Name"],
    },
    ChildLevel {
        sheet: INDUSTRY_SHEET,
        file_name: INDUSTRIES_FILE,
        columns: ["Id", "Industry Group Id", "Name"],
    },
    ChildLevel {
        sheet: SUB_INDUSTRY_SHEET,
        file_name: SUB_INDUSTRIES_FILE,
        columns: ["Id", "Industry Id", "Name"],
    },
];

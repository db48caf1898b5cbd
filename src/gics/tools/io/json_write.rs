use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::gics::tools::error::Result;
use crate::gics::tools::model::Sector;

/// Serializes the assembled sector tree to `path` as a JSON array indented
/// with four spaces, replacing any previous file.
pub fn write_taxonomy(path: &Path, sectors: &[Sector]) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }

    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    sectors.serialize(&mut serializer)?;

    fs::write(path, buffer)?;
    Ok(())
}

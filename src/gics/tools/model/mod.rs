use serde::Serialize;

use crate::gics::tools::error::{Result, ToolError};

/// Identifier assigned to a classification entry. It mirrors the numeric
/// codes published in the source workbook and is required to be positive.
pub type EntityId = u32;

/// Leaf of the classification tree. Sub-industries carry no children of
/// their own, so their serialized form is just the scalar fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubIndustry {
    /// Sub-industry code.
    pub id: EntityId,
    /// Display name.
    pub name: String,
}

/// Third level of the tree, grouping sub-industries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Industry {
    pub id: EntityId,
    pub name: String,
    /// Sub-industries in source row order.
    pub items: Vec<SubIndustry>,
}

/// Second level of the tree, grouping industries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryGroup {
    pub id: EntityId,
    pub name: String,
    /// Industries in source row order.
    pub items: Vec<Industry>,
}

/// Root level of the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sector {
    pub id: EntityId,
    pub name: String,
    /// Industry groups in source row order.
    pub items: Vec<IndustryGroup>,
}

impl SubIndustry {
    /// Creates a new sub-industry with the provided identifier and name.
    pub fn new(id: EntityId, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: validate_id("sub-industry", id)?,
            name: name.into(),
        })
    }
}

impl Industry {
    /// Creates a new industry with an empty child list.
    pub fn new(id: EntityId, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: validate_id("industry", id)?,
            name: name.into(),
            items: Vec::new(),
        })
    }
}

impl IndustryGroup {
    /// Creates a new industry group with an empty child list.
    pub fn new(id: EntityId, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: validate_id("industry group", id)?,
            name: name.into(),
            items: Vec::new(),
        })
    }
}

impl Sector {
    /// Creates a new sector with an empty child list.
    pub fn new(id: EntityId, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: validate_id("sector", id)?,
            name: name.into(),
            items: Vec::new(),
        })
    }
}

fn validate_id(entity: &'static str, id: EntityId) -> Result<EntityId> {
    if id == 0 {
        return Err(ToolError::InvalidIdentifier { entity, id });
    }
    Ok(id)
}

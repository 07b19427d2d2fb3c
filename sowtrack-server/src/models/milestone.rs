//! Milestone entity and its payload shapes

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A milestone row as stored and as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: i64,
    pub sow_id: i64,
    pub name: String,
    pub status: String,
}

/// Create payload. All fields required; `id` is generated by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMilestone {
    pub sow_id: i64,
    pub name: String,
    pub status: String,
}

/// Update payload. Only `name` and `status` are mutable; `sow_id` is
/// fixed at creation.
#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneEdit {
    pub name: String,
    pub status: String,
}

/// Columns callers may sort the milestone list by.
///
/// The `sortby` parameter is matched against this list and the query
/// text only ever receives one of these static identifiers. Identifiers
/// cannot be bound the way values are, so caller input never reaches
/// the ORDER BY position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortColumn {
    #[default]
    Id,
    SowId,
    Name,
    Status,
}

impl SortColumn {
    /// Parse a caller-supplied column name against the allow-list.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "id" => Ok(Self::Id),
            "sow_id" => Ok(Self::SowId),
            "name" => Ok(Self::Name),
            "status" => Ok(Self::Status),
            _ => Err(ValidationError::UnsortableColumn {
                value: value.to_owned(),
            }),
        }
    }

    /// The SQL identifier for the ORDER BY clause.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::SowId => "sow_id",
            Self::Name => "name",
            Self::Status => "status",
        }
    }
}

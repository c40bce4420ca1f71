use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use assetdesk_core::Entity;

use crate::ids::{InventoryRecordId, PropertyId};

/// Outcome of a physical inventory check.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Found,
    Missing,
    Damaged,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Found => "found",
            RecordStatus::Missing => "missing",
            RecordStatus::Damaged => "damaged",
        }
    }

    /// Missing or damaged: flagged on the dashboard.
    pub fn needs_attention(&self) -> bool {
        matches!(self, RecordStatus::Missing | RecordStatus::Damaged)
    }
}

impl core::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A dated observation of a property's physical status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: InventoryRecordId,
    pub property_id: PropertyId,
    pub date: NaiveDate,
    pub status: RecordStatus,
    #[serde(default)]
    pub notes: String,
}

impl Entity for InventoryRecord {
    type Id = InventoryRecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Inventory check submitted by the record form (no id yet).
///
/// Every field is either typed or optional, so there is no required-field
/// check to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecordDraft {
    pub property_id: PropertyId,
    pub date: NaiveDate,
    pub status: RecordStatus,
    #[serde(default)]
    pub notes: String,
}

impl InventoryRecordDraft {
    pub fn into_record(self, id: InventoryRecordId) -> InventoryRecord {
        InventoryRecord {
            id,
            property_id: self.property_id,
            date: self.date,
            status: self.status,
            notes: self.notes,
        }
    }
}

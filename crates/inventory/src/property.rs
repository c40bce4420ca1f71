use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use assetdesk_core::{DomainResult, Entity, Money, error::require_non_blank};

use crate::ids::{DepartmentId, PropertyId};

/// Lifecycle status of a property.
///
/// Declaration order is the order used when reporting status distributions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    Available,
    InUse,
    Maintenance,
    Retired,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 4] = [
        PropertyStatus::Available,
        PropertyStatus::InUse,
        PropertyStatus::Maintenance,
        PropertyStatus::Retired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::InUse => "in-use",
            PropertyStatus::Maintenance => "maintenance",
            PropertyStatus::Retired => "retired",
        }
    }
}

impl core::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A trackable physical asset owned by a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub department_id: DepartmentId,
    pub serial_number: String,
    pub purchase_date: NaiveDate,
    pub status: PropertyStatus,
    pub last_inventory_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    pub value: Money,
}

impl Property {
    /// Required-field check for the edit form.
    pub fn validate(&self) -> DomainResult<()> {
        require_non_blank("name", &self.name)?;
        require_non_blank("serial_number", &self.serial_number)
    }

    /// Case-insensitive match on name or serial number.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.serial_number.to_lowercase().contains(&needle)
    }
}

impl Entity for Property {
    type Id = PropertyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Property payload submitted by the add form (no id yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub name: String,
    pub department_id: DepartmentId,
    pub serial_number: String,
    pub purchase_date: NaiveDate,
    pub status: PropertyStatus,
    pub last_inventory_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    pub value: Money,
}

impl PropertyDraft {
    pub fn validate(&self) -> DomainResult<()> {
        require_non_blank("name", &self.name)?;
        require_non_blank("serial_number", &self.serial_number)
    }

    pub fn into_property(self, id: PropertyId) -> Property {
        Property {
            id,
            name: self.name,
            department_id: self.department_id,
            serial_number: self.serial_number,
            purchase_date: self.purchase_date,
            status: self.status,
            last_inventory_date: self.last_inventory_date,
            notes: self.notes,
            value: self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdesk_core::{DomainError, EntityId};
    use uuid::Uuid;

    fn draft() -> PropertyDraft {
        PropertyDraft {
            name: "ThinkPad X1".to_string(),
            department_id: DepartmentId::new(EntityId::from_uuid(Uuid::from_u128(1))),
            serial_number: "TP-0001".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            status: PropertyStatus::Available,
            last_inventory_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            notes: String::new(),
            value: Money::from_major(1799),
        }
    }

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&PropertyStatus::InUse).unwrap();
        assert_eq!(json, "\"in-use\"");
        let parsed: PropertyStatus = serde_json::from_str("\"maintenance\"").unwrap();
        assert_eq!(parsed, PropertyStatus::Maintenance);
    }

    #[test]
    fn draft_requires_serial_number() {
        let mut d = draft();
        d.serial_number = String::new();
        match d.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("serial_number")),
            _ => panic!("Expected Validation error for missing serial number"),
        }
    }

    #[test]
    fn into_property_keeps_every_field() {
        let d = draft();
        let id = PropertyId::new(EntityId::from_uuid(Uuid::from_u128(9)));
        let p = d.clone().into_property(id);
        assert_eq!(p.id, id);
        assert_eq!(p.name, d.name);
        assert_eq!(p.serial_number, d.serial_number);
        assert_eq!(p.value, d.value);
        assert_eq!(p.last_inventory_date, d.last_inventory_date);
    }

    #[test]
    fn matches_name_or_serial_case_insensitively() {
        let p = draft().into_property(PropertyId::new(EntityId::from_uuid(Uuid::from_u128(9))));
        assert!(p.matches("thinkpad"));
        assert!(p.matches("tp-00"));
        assert!(p.matches(""));
        assert!(!p.matches("macbook"));
    }
}

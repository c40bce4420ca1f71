//! Stats aggregation over departments, properties and inventory records.

use std::collections::BTreeMap;

use serde::Serialize;

use assetdesk_core::Money;
use assetdesk_inventory::{Department, DepartmentId, InventoryRecord, Property, PropertyStatus};

/// How many inventory records the recent-activity panel shows.
pub const RECENT_INVENTORY_LIMIT: usize = 5;

/// Total asset value owned by one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentValue {
    pub department_id: DepartmentId,
    pub name: String,
    pub value: Money,
}

/// Aggregate snapshot rendered by the dashboard.
///
/// - `status_distribution` only contains statuses that occur; iteration
///   follows [`PropertyStatus`] declaration order.
/// - `department_values` follows department-list order, one entry per
///   department (zero when it owns nothing).
/// - `recent_inventory` holds at most [`RECENT_INVENTORY_LIMIT`] records,
///   newest first; records sharing a date keep their list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_value: Money,
    pub total_items: usize,
    pub available_items: usize,
    pub department_count: usize,
    pub status_distribution: BTreeMap<PropertyStatus, usize>,
    pub department_values: Vec<DepartmentValue>,
    pub recent_inventory: Vec<InventoryRecord>,
}

impl DashboardStats {
    /// Share of all items in `status` (0.0..=1.0); 0.0 when there are no items.
    pub fn status_share(&self, status: PropertyStatus) -> f64 {
        if self.total_items == 0 {
            return 0.0;
        }
        let count = self.status_distribution.get(&status).copied().unwrap_or(0);
        count as f64 / self.total_items as f64
    }
}

/// Compute dashboard statistics. Pure; inputs are not modified.
pub fn compute_stats(
    departments: &[Department],
    properties: &[Property],
    inventory_records: &[InventoryRecord],
) -> DashboardStats {
    let total_value: Money = properties.iter().map(|p| p.value).sum();
    let available_items = properties
        .iter()
        .filter(|p| p.status == PropertyStatus::Available)
        .count();

    let mut status_distribution = BTreeMap::new();
    for property in properties {
        *status_distribution.entry(property.status).or_insert(0) += 1;
    }

    let department_values = departments
        .iter()
        .map(|department| DepartmentValue {
            department_id: department.id,
            name: department.name.clone(),
            value: properties
                .iter()
                .filter(|p| p.department_id == department.id)
                .map(|p| p.value)
                .sum(),
        })
        .collect();

    let mut recent: Vec<&InventoryRecord> = inventory_records.iter().collect();
    // Stable: equal dates keep list order.
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    let recent_inventory = recent
        .into_iter()
        .take(RECENT_INVENTORY_LIMIT)
        .cloned()
        .collect();

    DashboardStats {
        total_value,
        total_items: properties.len(),
        available_items,
        department_count: departments.len(),
        status_distribution,
        department_values,
        recent_inventory,
    }
}

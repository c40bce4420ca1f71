//! In-memory entity store with cascade rules.

use std::collections::HashSet;

use assetdesk_core::{Entity, IdGenerator, UuidV7Generator};

use crate::department::{Department, DepartmentDraft};
use crate::ids::{DepartmentId, InventoryRecordId, PropertyId};
use crate::property::{Property, PropertyDraft, PropertyStatus};
use crate::record::{InventoryRecord, InventoryRecordDraft, RecordStatus};

/// Counts of entities removed by a delete (all zero for an unknown id).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CascadeSummary {
    pub departments: usize,
    pub properties: usize,
    pub records: usize,
}

impl CascadeSummary {
    pub fn is_empty(&self) -> bool {
        self.departments == 0 && self.properties == 0 && self.records == 0
    }
}

/// Departments, properties and inventory records held in insertion order.
///
/// Operations are total: editing or deleting an unknown id is a silent
/// no-op. Every mutation takes `&mut self` and completes before returning, so
/// readers never observe a half-applied cascade.
#[derive(Debug, Clone)]
pub struct EntityStore<G = UuidV7Generator> {
    departments: Vec<Department>,
    properties: Vec<Property>,
    records: Vec<InventoryRecord>,
    ids: G,
}

impl Default for EntityStore<UuidV7Generator> {
    fn default() -> Self {
        Self::new(UuidV7Generator)
    }
}

impl<G: IdGenerator> EntityStore<G> {
    /// Empty store.
    pub fn new(ids: G) -> Self {
        Self::from_parts(ids, Vec::new(), Vec::new(), Vec::new())
    }

    /// Store pre-populated with the given collections (taken as-is).
    pub fn from_parts(
        ids: G,
        departments: Vec<Department>,
        properties: Vec<Property>,
        records: Vec<InventoryRecord>,
    ) -> Self {
        Self {
            departments,
            properties,
            records,
            ids,
        }
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn inventory_records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn property(&self, id: PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    // -------------------------
    // Departments
    // -------------------------

    pub fn add_department(&mut self, draft: DepartmentDraft) -> DepartmentId {
        let id = DepartmentId::new(self.ids.next_id());
        tracing::debug!(department_id = %id, name = %draft.name, "department added");
        self.departments.push(draft.into_department(id));
        id
    }

    /// Replace the department with the same id. Returns whether one matched.
    pub fn edit_department(&mut self, department: Department) -> bool {
        let id = department.id;
        let replaced = replace_by_id(&mut self.departments, department);
        if !replaced {
            tracing::debug!(department_id = %id, "edit ignored: unknown department");
        }
        replaced
    }

    /// Remove a department, its properties and their inventory records.
    pub fn delete_department(&mut self, id: DepartmentId) -> CascadeSummary {
        let before = self.departments.len();
        self.departments.retain(|d| d.id != id);

        let owned: HashSet<PropertyId> = self
            .properties
            .iter()
            .filter(|p| p.department_id == id)
            .map(|p| p.id)
            .collect();

        let mut summary = self.remove_properties(&owned);
        summary.departments = before - self.departments.len();

        if summary.is_empty() {
            tracing::debug!(department_id = %id, "delete ignored: unknown department");
        } else {
            tracing::info!(
                department_id = %id,
                properties = summary.properties,
                records = summary.records,
                "department deleted"
            );
        }
        summary
    }

    // -------------------------
    // Properties
    // -------------------------

    pub fn add_property(&mut self, draft: PropertyDraft) -> PropertyId {
        let id = PropertyId::new(self.ids.next_id());
        tracing::debug!(property_id = %id, department_id = %draft.department_id, "property added");
        self.properties.push(draft.into_property(id));
        id
    }

    /// Replace the property with the same id. Returns whether one matched.
    pub fn edit_property(&mut self, property: Property) -> bool {
        let id = property.id;
        let replaced = replace_by_id(&mut self.properties, property);
        if !replaced {
            tracing::debug!(property_id = %id, "edit ignored: unknown property");
        }
        replaced
    }

    /// Remove a property and its inventory records.
    pub fn delete_property(&mut self, id: PropertyId) -> CascadeSummary {
        let summary = self.remove_properties(&HashSet::from([id]));
        if summary.is_empty() {
            tracing::debug!(property_id = %id, "delete ignored: unknown property");
        } else {
            tracing::info!(property_id = %id, records = summary.records, "property deleted");
        }
        summary
    }

    fn remove_properties(&mut self, ids: &HashSet<PropertyId>) -> CascadeSummary {
        if ids.is_empty() {
            return CascadeSummary::default();
        }

        let properties_before = self.properties.len();
        self.properties.retain(|p| !ids.contains(&p.id));

        let records_before = self.records.len();
        self.records.retain(|r| !ids.contains(&r.property_id));

        CascadeSummary {
            departments: 0,
            properties: properties_before - self.properties.len(),
            records: records_before - self.records.len(),
        }
    }

    // -------------------------
    // Inventory records
    // -------------------------

    /// Record an inventory check and stamp it onto the checked property.
    ///
    /// The property's `last_inventory_date` always becomes the record date;
    /// its status becomes `maintenance` only when the record is `missing`.
    pub fn add_inventory_record(&mut self, draft: InventoryRecordDraft) -> InventoryRecordId {
        let id = InventoryRecordId::new(self.ids.next_id());
        let record = draft.into_record(id);

        if let Some(property) = self.properties.iter_mut().find(|p| p.id == record.property_id) {
            property.last_inventory_date = record.date;
            if record.status == RecordStatus::Missing {
                property.status = PropertyStatus::Maintenance;
            }
        } else {
            tracing::debug!(property_id = %record.property_id, "inventory record for unknown property");
        }

        tracing::debug!(record_id = %id, property_id = %record.property_id, status = %record.status, "inventory record added");
        self.records.push(record);
        id
    }

    // -------------------------
    // Read helpers
    // -------------------------

    /// Name of a department, if the id resolves.
    pub fn department_name(&self, id: DepartmentId) -> Option<&str> {
        self.department(id).map(|d| d.name.as_str())
    }

    /// Properties whose name or serial number contains `term` (case-insensitive).
    pub fn search_properties(&self, term: &str) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.matches(term)).collect()
    }

    /// Records for one property, in insertion order.
    pub fn records_for(&self, property_id: PropertyId) -> Vec<&InventoryRecord> {
        self.records
            .iter()
            .filter(|r| r.property_id == property_id)
            .collect()
    }

    /// Most recent record for a property by date; the later insertion wins a tie.
    pub fn latest_record_for(&self, property_id: PropertyId) -> Option<&InventoryRecord> {
        self.records
            .iter()
            .filter(|r| r.property_id == property_id)
            .max_by_key(|r| r.date)
    }
}

fn replace_by_id<T: Entity>(items: &mut [T], replacement: T) -> bool {
    match items.iter_mut().find(|item| item.id() == replacement.id()) {
        Some(slot) => {
            *slot = replacement;
            true
        }
        None => false,
    }
}

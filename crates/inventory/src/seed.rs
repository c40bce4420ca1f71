//! Fixed demo dataset loaded on every start.

use assetdesk_core::{EntityId, IdGenerator, Money};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::department::Department;
use crate::ids::{DepartmentId, InventoryRecordId, PropertyId};
use crate::property::{Property, PropertyStatus};
use crate::record::{InventoryRecord, RecordStatus};
use crate::store::EntityStore;

/// Seed ids live in their own range so generated ids never collide with them.
const SEED_BASE: u128 = 0x5eed_0000_0000_0000_0000_0000_0000_0000;

/// Id of the `n`-th seeded entity of a kind (1-based).
pub fn seed_id(n: u128) -> EntityId {
    EntityId::from_uuid(Uuid::from_u128(SEED_BASE + n))
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    // Literal calendar dates below; all valid.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn departments() -> Vec<Department> {
    [
        (1, "IT Department", "Information Technology and Systems"),
        (2, "Marketing", "Marketing and Communications"),
        (3, "Engineering", "Product Engineering and Development"),
    ]
    .into_iter()
    .map(|(n, name, description)| Department {
        id: DepartmentId::new(seed_id(n)),
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn properties() -> Vec<Property> {
    let checked = day(2024, 2, 1);
    [
        (1, "MacBook Pro 16\"", 1, "MBP2023001", day(2023, 1, 15), PropertyStatus::InUse, "Assigned to Development Team Lead", 2499),
        (2, "Dell XPS 15", 1, "XPS2023002", day(2023, 2, 20), PropertyStatus::Available, "Backup development machine", 1899),
        (3, "Canon EOS R5", 2, "CAN2023003", day(2023, 3, 10), PropertyStatus::InUse, "Primary camera for product shoots", 3899),
        (4, "Oscilloscope", 3, "OSC2023004", day(2023, 4, 5), PropertyStatus::Maintenance, "Needs calibration", 5999),
    ]
    .into_iter()
    .map(|(n, name, department, serial, purchased, status, notes, value)| Property {
        id: PropertyId::new(seed_id(n)),
        name: name.to_string(),
        department_id: DepartmentId::new(seed_id(department)),
        serial_number: serial.to_string(),
        purchase_date: purchased,
        status,
        last_inventory_date: checked,
        notes: notes.to_string(),
        value: Money::from_major(value),
    })
    .collect()
}

pub fn inventory_records() -> Vec<InventoryRecord> {
    [
        (1, RecordStatus::Found, "Regular inventory check"),
        (2, RecordStatus::Found, "Regular inventory check"),
        (3, RecordStatus::Found, "Regular inventory check"),
        (4, RecordStatus::Damaged, "Calibration required"),
    ]
    .into_iter()
    .map(|(n, status, notes)| InventoryRecord {
        id: InventoryRecordId::new(seed_id(n)),
        property_id: PropertyId::new(seed_id(n)),
        date: day(2024, 2, 1),
        status,
        notes: notes.to_string(),
    })
    .collect()
}

impl<G: IdGenerator> EntityStore<G> {
    /// Store initialised with the seed dataset.
    pub fn seeded(ids: G) -> Self {
        Self::from_parts(ids, departments(), properties(), inventory_records())
    }
}

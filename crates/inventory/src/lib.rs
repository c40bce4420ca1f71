//! Inventory domain module.
//!
//! Departments, the properties (physical assets) they own and the inventory
//! checks recorded against those properties, held in an in-memory
//! [`EntityStore`] that enforces the cascade rules between them. Pure domain
//! logic: no IO, no persistence.

pub mod department;
pub mod ids;
pub mod property;
pub mod record;
pub mod seed;
pub mod store;

pub use department::{Department, DepartmentDraft};
pub use ids::{DepartmentId, InventoryRecordId, PropertyId};
pub use property::{Property, PropertyDraft, PropertyStatus};
pub use record::{InventoryRecord, InventoryRecordDraft, RecordStatus};
pub use store::{CascadeSummary, EntityStore};

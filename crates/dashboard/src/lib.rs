//! Dashboard statistics.
//!
//! A derived, read-only snapshot computed from the live inventory
//! collections. Disposable: recompute it after every mutation.

pub mod stats;

pub use stats::{DashboardStats, DepartmentValue, RECENT_INVENTORY_LIMIT, compute_stats};

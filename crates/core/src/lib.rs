//! `assetdesk-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory
//! store, the dashboard aggregator and the application shell.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{EntityId, IdGenerator, SequentialIdGenerator, UuidV7Generator};
pub use value_object::{Money, ValueObject};

//! Identifiers and the id-generation capability.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a stored entity.
///
/// Domain crates wrap this in their own typed ids so a `PropertyId` can never
/// be passed where a `DepartmentId` is expected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for EntityId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<EntityId> for Uuid {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("EntityId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Source of fresh entity identifiers.
///
/// The store owns one generator and asks it for an id on every add.
pub trait IdGenerator {
    fn next_id(&mut self) -> EntityId;
}

/// Production generator: UUIDv7 (time-ordered, random tail).
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&mut self) -> EntityId {
        EntityId(Uuid::now_v7())
    }
}

/// Deterministic generator for tests: yields `start`, `start + 1`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl SequentialIdGenerator {
    pub fn new(start: u128) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> EntityId {
        let id = EntityId(Uuid::from_u128(self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_generator_is_deterministic() {
        let mut a = SequentialIdGenerator::new(7);
        let mut b = SequentialIdGenerator::new(7);

        assert_eq!(a.next_id(), b.next_id());
        assert_eq!(a.next_id().as_uuid(), &Uuid::from_u128(8));
    }

    #[test]
    fn v7_generator_yields_distinct_ids() {
        let mut generator = UuidV7Generator;
        let first = generator.next_id();
        let second = generator.next_id();
        assert_ne!(first, second);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not-a-uuid".parse::<EntityId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let id = EntityId::from_uuid(Uuid::from_u128(42));
        let parsed: EntityId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}

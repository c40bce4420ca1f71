//! Typed identifiers for the inventory entities.

use core::str::FromStr;

use assetdesk_core::{DomainError, EntityId};
use serde::{Deserialize, Serialize};

macro_rules! typed_entity_id {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(pub EntityId);

        impl $t {
            pub fn new(id: EntityId) -> Self {
                Self(id)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<EntityId> for $t {
            fn from(value: EntityId) -> Self {
                Self(value)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(EntityId::from_str(s)?))
            }
        }
    };
}

typed_entity_id!(
    /// Department identifier.
    DepartmentId
);
typed_entity_id!(
    /// Property (physical asset) identifier.
    PropertyId
);
typed_entity_id!(
    /// Inventory record identifier.
    InventoryRecordId
);

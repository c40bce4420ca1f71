use serde::{Deserialize, Serialize};

use assetdesk_core::{DomainResult, Entity, error::require_non_blank};

use crate::ids::DepartmentId;

/// Organizational unit owning properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub description: String,
}

impl Department {
    /// Required-field check for the edit form.
    pub fn validate(&self) -> DomainResult<()> {
        require_non_blank("name", &self.name)
    }
}

impl Entity for Department {
    type Id = DepartmentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Department payload submitted by the add form (no id yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl DepartmentDraft {
    pub fn validate(&self) -> DomainResult<()> {
        require_non_blank("name", &self.name)
    }

    pub fn into_department(self, id: DepartmentId) -> Department {
        Department {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

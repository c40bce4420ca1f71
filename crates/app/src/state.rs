//! Application state and the UI action dispatcher.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use assetdesk_core::{DomainError, IdGenerator, UuidV7Generator};
use assetdesk_dashboard::{DashboardStats, compute_stats};
use assetdesk_inventory::{
    Department, DepartmentDraft, DepartmentId, EntityStore, InventoryRecordDraft, Property,
    PropertyDraft, PropertyId,
};

use crate::preferences::{JsonFilePreferences, PreferenceError, PreferenceStore};
use crate::theme::Theme;

/// Navigation tabs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Dashboard,
    Departments,
    Properties,
    Inventory,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Departments, Tab::Properties, Tab::Inventory];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Departments => "Departments",
            Tab::Properties => "Properties",
            Tab::Inventory => "Inventory",
        }
    }
}

/// A single UI event.
///
/// On the wire: `{"action": "add_department", "name": "Legal"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    SelectTab { tab: Tab },
    ToggleTheme,
    /// Filter for the inventory tab (name or serial number).
    Search { term: String },
    AddDepartment(DepartmentDraft),
    EditDepartment(Department),
    DeleteDepartment { id: DepartmentId },
    AddProperty(PropertyDraft),
    EditProperty(Property),
    DeleteProperty { id: PropertyId },
    AddInventoryRecord(InventoryRecordDraft),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectTab { .. } => "select_tab",
            Action::ToggleTheme => "toggle_theme",
            Action::Search { .. } => "search",
            Action::AddDepartment(_) => "add_department",
            Action::EditDepartment(_) => "edit_department",
            Action::DeleteDepartment { .. } => "delete_department",
            Action::AddProperty(_) => "add_property",
            Action::EditProperty(_) => "edit_property",
            Action::DeleteProperty { .. } => "delete_property",
            Action::AddInventoryRecord(_) => "add_inventory_record",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Preferences(#[from] PreferenceError),
}

/// Serializable view of the state for machine-readable output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub theme: Theme,
    pub active_tab: Tab,
    pub stats: DashboardStats,
}

/// Everything the UI shows, owned by the driver loop.
#[derive(Debug)]
pub struct AppState<G = UuidV7Generator, P = JsonFilePreferences> {
    theme: Theme,
    active_tab: Tab,
    search_term: String,
    store: EntityStore<G>,
    preferences: P,
}

impl<G: IdGenerator, P: PreferenceStore> AppState<G, P> {
    /// Build the state, reading the theme from `preferences`.
    ///
    /// An unreadable preference store is logged and treated as empty.
    pub fn load(store: EntityStore<G>, preferences: P, prefers_dark: bool) -> Self {
        let theme = Theme::load(&preferences, prefers_dark).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring unreadable theme preference");
            Theme::resolve(None, prefers_dark)
        });
        tracing::info!(%theme, "application state loaded");

        Self {
            theme,
            active_tab: Tab::default(),
            search_term: String::new(),
            store,
            preferences,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn store(&self) -> &EntityStore<G> {
        &self.store
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    /// Recompute dashboard statistics from the current collections.
    pub fn stats(&self) -> DashboardStats {
        compute_stats(
            self.store.departments(),
            self.store.properties(),
            self.store.inventory_records(),
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            theme: self.theme,
            active_tab: self.active_tab,
            stats: self.stats(),
        }
    }

    /// Flip the theme and persist it.
    pub fn toggle_theme(&mut self) -> Result<Theme, PreferenceError> {
        self.set_theme(self.theme.toggled())
    }

    /// Persist `theme`, then apply it. On a save failure the current theme
    /// is kept.
    pub fn set_theme(&mut self, theme: Theme) -> Result<Theme, PreferenceError> {
        theme.persist(&mut self.preferences)?;
        self.theme = theme;
        tracing::info!(%theme, "theme preference saved");
        Ok(theme)
    }

    fn require_department(&self, id: DepartmentId) -> Result<(), DomainError> {
        if self.store.department(id).is_none() {
            return Err(DomainError::validation(format!("unknown department {id}")));
        }
        Ok(())
    }

    fn require_property(&self, id: PropertyId) -> Result<(), DomainError> {
        if self.store.property(id).is_none() {
            return Err(DomainError::validation(format!("unknown property {id}")));
        }
        Ok(())
    }

    /// Apply one UI event.
    ///
    /// Form payloads get their required-field check here, and references must
    /// resolve to a live department or property; the store itself accepts
    /// anything. Nothing is mutated when validation fails.
    pub fn dispatch(&mut self, action: Action) -> Result<(), AppError> {
        tracing::debug!(action = action.name(), "dispatch");

        match action {
            Action::SelectTab { tab } => self.active_tab = tab,
            Action::ToggleTheme => {
                self.toggle_theme()?;
            }
            Action::Search { term } => self.search_term = term,
            Action::AddDepartment(draft) => {
                draft.validate()?;
                self.store.add_department(draft);
            }
            Action::EditDepartment(department) => {
                department.validate()?;
                self.store.edit_department(department);
            }
            Action::DeleteDepartment { id } => {
                self.store.delete_department(id);
            }
            Action::AddProperty(draft) => {
                draft.validate()?;
                self.require_department(draft.department_id)?;
                self.store.add_property(draft);
            }
            Action::EditProperty(property) => {
                property.validate()?;
                self.require_department(property.department_id)?;
                self.store.edit_property(property);
            }
            Action::DeleteProperty { id } => {
                self.store.delete_property(id);
            }
            Action::AddInventoryRecord(draft) => {
                self.require_property(draft.property_id)?;
                self.store.add_inventory_record(draft);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::InMemoryPreferences;
    use assetdesk_core::SequentialIdGenerator;

    fn test_state() -> AppState<SequentialIdGenerator, InMemoryPreferences> {
        AppState::load(
            EntityStore::seeded(SequentialIdGenerator::default()),
            InMemoryPreferences::new(),
            false,
        )
    }

    #[test]
    fn starts_on_dashboard_with_system_theme() {
        let state = test_state();
        assert_eq!(state.active_tab(), Tab::Dashboard);
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.search_term(), "");
    }

    #[test]
    fn action_wire_format_is_internally_tagged() {
        let action: Action =
            serde_json::from_str(r#"{"action":"add_department","name":"Legal","description":"Contracts"}"#)
                .unwrap();
        assert_eq!(
            action,
            Action::AddDepartment(DepartmentDraft {
                name: "Legal".to_string(),
                description: "Contracts".to_string(),
            })
        );

        let action: Action = serde_json::from_str(r#"{"action":"select_tab","tab":"inventory"}"#).unwrap();
        assert_eq!(action, Action::SelectTab { tab: Tab::Inventory });

        let action: Action = serde_json::from_str(r#"{"action":"toggle_theme"}"#).unwrap();
        assert_eq!(action.name(), "toggle_theme");
    }

    #[test]
    fn invalid_draft_is_rejected_without_mutation() {
        let mut state = test_state();
        let err = state
            .dispatch(Action::AddDepartment(DepartmentDraft {
                name: "  ".to_string(),
                description: String::new(),
            }))
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::Validation(_))));
        assert_eq!(state.store().departments().len(), 3);
    }

    #[test]
    fn toggle_theme_persists_preference() {
        let mut state = test_state();
        state.dispatch(Action::ToggleTheme).unwrap();

        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(
            state.preferences().get(crate::theme::THEME_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }

    /// Store whose writes always fail.
    struct ReadOnlyPreferences;

    impl PreferenceStore for ReadOnlyPreferences {
        fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Io {
                path: std::path::PathBuf::from("/read-only/preferences.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn failed_theme_save_keeps_current_theme() {
        let mut state = AppState::load(
            EntityStore::seeded(SequentialIdGenerator::default()),
            ReadOnlyPreferences,
            false,
        );

        let err = state.dispatch(Action::ToggleTheme).unwrap_err();

        assert!(matches!(err, AppError::Preferences(PreferenceError::Io { .. })));
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn stored_theme_is_loaded() {
        let mut prefs = InMemoryPreferences::new();
        Theme::Dark.persist(&mut prefs).unwrap();

        let state = AppState::load(EntityStore::seeded(SequentialIdGenerator::default()), prefs, false);
        assert_eq!(state.theme(), Theme::Dark);
    }
}

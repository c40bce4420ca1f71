//! `assetdesk-app`
//!
//! **Responsibility:** the application shell around the inventory store.
//!
//! This crate provides:
//! - Explicit application state (theme, active tab, search term, store)
//! - A UI action dispatcher with form-boundary validation
//! - Theme persistence through a small key-value preference store
//! - Text views of each tab
//! - Environment-driven configuration

pub mod config;
pub mod preferences;
pub mod state;
pub mod theme;
pub mod view;

pub use config::{AppConfig, ConfigError};
pub use preferences::{InMemoryPreferences, JsonFilePreferences, PreferenceError, PreferenceStore};
pub use state::{Action, AppError, AppState, Snapshot, Tab};
pub use theme::Theme;
pub use view::View;

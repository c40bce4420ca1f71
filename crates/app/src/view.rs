//! Plain-text rendering of the active tab.

use core::fmt;

use assetdesk_core::IdGenerator;
use assetdesk_dashboard::DashboardStats;
use assetdesk_inventory::{EntityStore, PropertyStatus};

use crate::preferences::PreferenceStore;
use crate::state::{AppState, Tab};

const BAR_WIDTH: usize = 20;

/// Renders the header plus whichever tab is active.
pub struct View<'a, G, P> {
    state: &'a AppState<G, P>,
}

impl<'a, G, P> View<'a, G, P> {
    pub fn new(state: &'a AppState<G, P>) -> Self {
        Self { state }
    }
}

impl<G: IdGenerator, P: PreferenceStore> fmt::Display for View<'_, G, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;

        let tabs: Vec<String> = Tab::ALL
            .iter()
            .map(|tab| {
                if *tab == state.active_tab() {
                    format!("[{}]", tab.label())
                } else {
                    tab.label().to_string()
                }
            })
            .collect();
        writeln!(f, "{}    theme: {}", tabs.join("  "), state.theme())?;
        writeln!(f)?;

        let store = state.store();
        match state.active_tab() {
            Tab::Dashboard => render_dashboard(f, &state.stats(), store),
            Tab::Departments => render_departments(f, store),
            Tab::Properties => render_properties(f, store),
            Tab::Inventory => render_inventory(f, store, state.search_term()),
        }
    }
}

/// Dashboard panels for a stats snapshot.
pub struct DashboardView<'a, G> {
    stats: &'a DashboardStats,
    store: &'a EntityStore<G>,
}

impl<'a, G> DashboardView<'a, G> {
    pub fn new(stats: &'a DashboardStats, store: &'a EntityStore<G>) -> Self {
        Self { stats, store }
    }
}

impl<G: IdGenerator> fmt::Display for DashboardView<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_dashboard(f, self.stats, self.store)
    }
}

fn render_dashboard<G: IdGenerator>(
    f: &mut fmt::Formatter<'_>,
    stats: &DashboardStats,
    store: &EntityStore<G>,
) -> fmt::Result {
    writeln!(f, "Total value:      {}", stats.total_value)?;
    writeln!(f, "Total items:      {}", stats.total_items)?;
    writeln!(f, "Available items:  {}", stats.available_items)?;
    writeln!(f, "Departments:      {}", stats.department_count)?;

    writeln!(f)?;
    writeln!(f, "Status distribution")?;
    for (status, count) in &stats.status_distribution {
        let share = stats.status_share(*status);
        let filled = (share * BAR_WIDTH as f64).round() as usize;
        writeln!(
            f,
            "  {:<12} {:>3}  {}{}  {:>3.0}%",
            status.as_str(),
            count,
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH.saturating_sub(filled)),
            share * 100.0
        )?;
    }

    writeln!(f)?;
    writeln!(f, "Recent inventory")?;
    if stats.recent_inventory.is_empty() {
        writeln!(f, "  (none)")?;
    }
    for record in &stats.recent_inventory {
        let marker = if record.status.needs_attention() { "!" } else { " " };
        let property = store
            .property(record.property_id)
            .map(|p| p.name.as_str())
            .unwrap_or("");
        writeln!(
            f,
            "  {marker} {}  {:<8} {:<20} {}",
            record.date, record.status, property, record.notes
        )?;
    }

    writeln!(f)?;
    writeln!(f, "Department values")?;
    for department in &stats.department_values {
        writeln!(f, "  {:<24} {:>12}", department.name, department.value.to_string())?;
    }
    Ok(())
}

fn render_departments<G: IdGenerator>(f: &mut fmt::Formatter<'_>, store: &EntityStore<G>) -> fmt::Result {
    writeln!(f, "Departments ({})", store.departments().len())?;
    for department in store.departments() {
        let owned = store
            .properties()
            .iter()
            .filter(|p| p.department_id == department.id)
            .count();
        writeln!(f, "  {}  {} ({})", department.id, department.name, count_label(owned))?;
        if !department.description.is_empty() {
            writeln!(f, "      {}", department.description)?;
        }
    }
    Ok(())
}

fn render_properties<G: IdGenerator>(f: &mut fmt::Formatter<'_>, store: &EntityStore<G>) -> fmt::Result {
    writeln!(f, "Properties ({})", store.properties().len())?;
    for property in store.properties() {
        writeln!(
            f,
            "  {}  {} [{}] {}",
            property.id,
            property.name,
            property.serial_number,
            status_badge(property.status)
        )?;
        writeln!(
            f,
            "      department: {}  value: {}  purchased: {}  last inventory: {}",
            store.department_name(property.department_id).unwrap_or(""),
            property.value,
            property.purchase_date,
            property.last_inventory_date
        )?;
        if !property.notes.is_empty() {
            writeln!(f, "      {}", property.notes)?;
        }
    }
    Ok(())
}

fn render_inventory<G: IdGenerator>(
    f: &mut fmt::Formatter<'_>,
    store: &EntityStore<G>,
    term: &str,
) -> fmt::Result {
    let matches = store.search_properties(term);
    if term.is_empty() {
        writeln!(f, "Inventory ({})", count_label(matches.len()))?;
    } else {
        writeln!(f, "Inventory matching \"{term}\" ({})", count_label(matches.len()))?;
    }

    for property in matches {
        writeln!(
            f,
            "  {}  {} [{}] {}  last inventory: {}",
            property.id,
            property.name,
            property.serial_number,
            status_badge(property.status),
            property.last_inventory_date
        )?;
        match store.latest_record_for(property.id) {
            Some(record) => writeln!(f, "      latest check: {} {} {}", record.date, record.status, record.notes)?,
            None => writeln!(f, "      latest check: none")?,
        }
    }
    Ok(())
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 property".to_string()
    } else {
        format!("{count} properties")
    }
}

fn status_badge(status: PropertyStatus) -> String {
    format!("<{status}>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::InMemoryPreferences;
    use crate::state::Action;
    use assetdesk_core::SequentialIdGenerator;

    fn seeded_state() -> AppState<SequentialIdGenerator, InMemoryPreferences> {
        AppState::load(
            EntityStore::seeded(SequentialIdGenerator::default()),
            InMemoryPreferences::new(),
            false,
        )
    }

    #[test]
    fn dashboard_shows_totals_and_department_values() {
        let state = seeded_state();
        let out = View::new(&state).to_string();

        assert!(out.contains("[Dashboard]"));
        assert!(out.contains("theme: light"));
        assert!(out.contains("Total value:      $14,296"));
        assert!(out.contains("in-use"));
        assert!(out.contains("IT Department"));
        assert!(out.contains("$4,398"));
        assert!(out.contains("Calibration required"));
        assert!(!out.contains("retired"));
    }

    #[test]
    fn properties_tab_joins_department_names() {
        let mut state = seeded_state();
        state.dispatch(Action::SelectTab { tab: Tab::Properties }).unwrap();
        let out = View::new(&state).to_string();

        assert!(out.contains("[Properties]"));
        assert!(out.contains("Canon EOS R5"));
        assert!(out.contains("department: Marketing"));
    }

    #[test]
    fn inventory_tab_honours_search_term() {
        let mut state = seeded_state();
        state.dispatch(Action::SelectTab { tab: Tab::Inventory }).unwrap();
        state.dispatch(Action::Search { term: "osc".to_string() }).unwrap();
        let out = View::new(&state).to_string();

        assert!(out.contains("(1 property)"));
        assert!(out.contains("Oscilloscope"));
        assert!(!out.contains("MacBook"));
        assert!(out.contains("latest check: 2024-02-01 damaged"));
    }

    #[test]
    fn count_label_pluralises() {
        assert_eq!(count_label(0), "0 properties");
        assert_eq!(count_label(1), "1 property");
        assert_eq!(count_label(2), "2 properties");
    }

    #[test]
    fn departments_tab_counts_owned_properties() {
        let mut state = seeded_state();
        state.dispatch(Action::SelectTab { tab: Tab::Departments }).unwrap();
        let out = View::new(&state).to_string();

        assert!(out.contains("IT Department (2 properties)"));
        assert!(out.contains("Engineering (1 property)"));
    }
}

use crate::engine::availability::TimeFilter;
use crate::engine::collectable::{Collectable, CollectableKind};
use crate::engine::storage::SelectionStore;
use log::warn;
use std::collections::HashMap;

/// Startup lifecycle of one kind's panel. Persistence writes are only
/// allowed in Ready, so a transient empty selection before the real catalog
/// is known can never clobber previously persisted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Nothing restored yet. `seed` moves straight past this.
    #[allow(dead_code)]
    Uninitialized,
    /// Persisted selections restored; waiting on the first real catalog.
    AwaitingCatalog,
    /// Catalog known; toggles persist.
    Ready,
}

struct SelectionPanel {
    state: PanelState,
    items: Vec<Collectable>,
}

/// The user's per-kind collected sets. Entries are identified by name, not
/// object identity; duplicate names in a persisted set are tolerated and
/// collapse on the next toggle.
pub struct Selections {
    store: SelectionStore,
    panels: HashMap<CollectableKind, SelectionPanel>,
}

impl Selections {
    /// Restore all three sets from the store.
    pub fn seed(store: SelectionStore) -> Self {
        let mut panels = HashMap::new();
        for kind in CollectableKind::ALL {
            panels.insert(
                kind,
                SelectionPanel {
                    state: PanelState::AwaitingCatalog,
                    items: store.load(kind),
                },
            );
        }
        Self { store, panels }
    }

    pub fn state(&self, kind: CollectableKind) -> PanelState {
        self.panels[&kind].state
    }

    /// A catalog landed for this kind. An empty catalog (failed load or a
    /// still-default value) does not open the persistence gate.
    pub fn catalog_arrived(&mut self, kind: CollectableKind, catalog: &[Collectable]) {
        if catalog.is_empty() {
            return;
        }
        if let Some(panel) = self.panels.get_mut(&kind) {
            if panel.state == PanelState::AwaitingCatalog {
                panel.state = PanelState::Ready;
            }
        }
    }

    pub fn selected(&self, kind: CollectableKind) -> &[Collectable] {
        &self.panels[&kind].items
    }

    pub fn is_selected(&self, kind: CollectableKind, collectable: &Collectable) -> bool {
        self.panels[&kind]
            .items
            .iter()
            .any(|sel| sel.name == collectable.name)
    }

    /// Add or remove one record from the kind's collected set, then persist
    /// if the panel is past its startup gate. Toggling twice restores the
    /// original set.
    pub fn toggle(&mut self, kind: CollectableKind, collectable: &Collectable) {
        let panel = match self.panels.get_mut(&kind) {
            Some(panel) => panel,
            None => return,
        };
        let had = panel.items.iter().any(|sel| sel.name == collectable.name);
        if had {
            panel.items.retain(|sel| sel.name != collectable.name);
        } else {
            panel.items.push(collectable.clone());
        }

        if panel.state == PanelState::Ready {
            if let Err(e) = self.store.save(kind, &panel.items) {
                warn!("Failed to persist {} selections: {:#}", kind.name(), e);
            }
        }
    }

    /// The rows to actually display: the available set minus collected ones
    /// (when only-missing is on) and minus rain-dependent ones (when it's
    /// raining). The rain rule is kind-specific and leaves sea creatures
    /// untouched.
    pub fn filtered_display(
        &self,
        kind: CollectableKind,
        available: &[Collectable],
        show_only_missing: bool,
        its_raining: bool,
    ) -> Vec<Collectable> {
        available
            .iter()
            .filter(|c| !(show_only_missing && self.is_selected(kind, c)))
            .filter(|c| !(its_raining && hides_in_rain(kind, c)))
            .cloned()
            .collect()
    }

    /// One-sentence progress blurb for the panel header.
    pub fn summary_text(
        &self,
        kind: CollectableKind,
        available: &[Collectable],
        show_only_missing: bool,
        filter: TimeFilter,
    ) -> String {
        let noun = kind.noun();
        let time = filter.phrase();

        if show_only_missing {
            let missing = available
                .iter()
                .filter(|c| !self.is_selected(kind, c))
                .count();
            format!(
                "There are {} {} available {} that you have not caught yet.",
                missing, noun, time
            )
        } else {
            let caught = available
                .iter()
                .filter(|c| self.is_selected(kind, c))
                .count();
            format!(
                "There are {} {} available {}. You have caught {} of them.",
                available.len(),
                noun,
                time,
                caught
            )
        }
    }
}

// Bugs advertise rain in their weather text, fish in their notes. Sea
// creatures have no rain-dependent entries, so the toggle is a no-op there.
fn hides_in_rain(kind: CollectableKind, collectable: &Collectable) -> bool {
    match kind {
        CollectableKind::Bug => {
            collectable.weather.starts_with("Any except rain")
                || collectable.weather.starts_with("Rain only")
        }
        CollectableKind::Fish => collectable.notes.starts_with("Rain"),
        CollectableKind::SeaCreature => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::collectable::Month;

    fn critter(kind: CollectableKind, name: &str) -> Collectable {
        Collectable {
            kind,
            name: name.to_string(),
            sell_price: 0,
            location: String::new(),
            weather: String::new(),
            shadow_size: String::new(),
            time_start: 0,
            time_end: 0,
            second_time_start: None,
            second_time_end: None,
            months_northern: vec![Month::Jun],
            notes: String::new(),
            months: String::new(),
            is_last_month: false,
        }
    }

    fn ready_selections(dir: &std::path::Path) -> Selections {
        let mut selections = Selections::seed(SelectionStore::new(dir));
        let catalog = vec![critter(CollectableKind::Bug, "Ant")];
        for kind in CollectableKind::ALL {
            selections.catalog_arrived(kind, &catalog);
        }
        selections
    }

    #[test]
    fn toggle_twice_restores_the_original_set() {
        let dir = tempfile::tempdir().unwrap();
        let mut selections = ready_selections(dir.path());
        let ant = critter(CollectableKind::Bug, "Ant");

        selections.toggle(CollectableKind::Bug, &ant);
        assert!(selections.is_selected(CollectableKind::Bug, &ant));
        selections.toggle(CollectableKind::Bug, &ant);
        assert!(!selections.is_selected(CollectableKind::Bug, &ant));
        assert!(selections.selected(CollectableKind::Bug).is_empty());
    }

    #[test]
    fn toggles_persist_and_reseed() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut selections = ready_selections(dir.path());
            selections.toggle(CollectableKind::Bug, &critter(CollectableKind::Bug, "Ant"));
        }

        let reseeded = Selections::seed(SelectionStore::new(dir.path()));
        let names: Vec<&str> = reseeded
            .selected(CollectableKind::Bug)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ant"]);
    }

    #[test]
    fn no_store_write_before_catalog_arrives() {
        let dir = tempfile::tempdir().unwrap();
        let store = SelectionStore::new(dir.path());
        store
            .save(CollectableKind::Bug, &[critter(CollectableKind::Bug, "Bee")])
            .unwrap();

        let mut selections = Selections::seed(SelectionStore::new(dir.path()));
        assert_eq!(selections.state(CollectableKind::Bug), PanelState::AwaitingCatalog);

        // gate is still closed: this toggle must not rewrite the document
        selections.toggle(CollectableKind::Bug, &critter(CollectableKind::Bug, "Ant"));

        let on_disk = SelectionStore::new(dir.path()).load(CollectableKind::Bug);
        let names: Vec<&str> = on_disk.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bee"]);
    }

    #[test]
    fn empty_catalog_does_not_open_the_gate() {
        let dir = tempfile::tempdir().unwrap();
        let mut selections = Selections::seed(SelectionStore::new(dir.path()));
        selections.catalog_arrived(CollectableKind::Bug, &[]);
        assert_eq!(selections.state(CollectableKind::Bug), PanelState::AwaitingCatalog);

        selections.catalog_arrived(CollectableKind::Bug, &[critter(CollectableKind::Bug, "Ant")]);
        assert_eq!(selections.state(CollectableKind::Bug), PanelState::Ready);
    }

    #[test]
    fn only_missing_never_shows_a_collected_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut selections = ready_selections(dir.path());
        let ant = critter(CollectableKind::Bug, "Ant");
        let bee = critter(CollectableKind::Bug, "Bee");
        selections.toggle(CollectableKind::Bug, &ant);

        let available = vec![ant.clone(), bee.clone()];
        let displayed =
            selections.filtered_display(CollectableKind::Bug, &available, true, false);
        let names: Vec<&str> = displayed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bee"]);

        let summary =
            selections.summary_text(CollectableKind::Bug, &available, true, TimeFilter::RightNow);
        assert_eq!(
            summary,
            "There are 1 bugs available right now that you have not caught yet."
        );
    }

    #[test]
    fn summary_reports_total_and_caught() {
        let dir = tempfile::tempdir().unwrap();
        let mut selections = ready_selections(dir.path());
        let ant = critter(CollectableKind::Bug, "Ant");
        selections.toggle(CollectableKind::Bug, &ant);

        let available = vec![ant.clone(), critter(CollectableKind::Bug, "Bee")];
        let summary =
            selections.summary_text(CollectableKind::Bug, &available, false, TimeFilter::ThisMonth);
        assert_eq!(
            summary,
            "There are 2 bugs available this month. You have caught 1 of them."
        );
    }

    #[test]
    fn rain_filter_is_kind_specific() {
        let dir = tempfile::tempdir().unwrap();
        let selections = ready_selections(dir.path());

        let mut fair_weather_bug = critter(CollectableKind::Bug, "Common Butterfly");
        fair_weather_bug.weather = "Any except rain".to_string();
        let mut rain_bug = critter(CollectableKind::Bug, "Snail");
        rain_bug.weather = "Rain only".to_string();
        let mut any_bug = critter(CollectableKind::Bug, "Ant");
        any_bug.weather = "Any weather".to_string();

        let displayed = selections.filtered_display(
            CollectableKind::Bug,
            &[fair_weather_bug, rain_bug, any_bug],
            false,
            true,
        );
        let names: Vec<&str> = displayed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ant"]);

        let mut rain_fish = critter(CollectableKind::Fish, "Coelacanth");
        rain_fish.notes = "Rain (any season)".to_string();
        let displayed =
            selections.filtered_display(CollectableKind::Fish, &[rain_fish], false, true);
        assert!(displayed.is_empty());

        // same note on a sea creature is deliberately not filtered
        let mut rain_noted_creature = critter(CollectableKind::SeaCreature, "Sea Pig");
        rain_noted_creature.notes = "Rain (any season)".to_string();
        let displayed = selections.filtered_display(
            CollectableKind::SeaCreature,
            &[rain_noted_creature],
            false,
            true,
        );
        assert_eq!(displayed.len(), 1);
    }

    #[test]
    fn duplicate_persisted_names_do_not_break_membership() {
        let dir = tempfile::tempdir().unwrap();
        let store = SelectionStore::new(dir.path());
        let ant = critter(CollectableKind::Bug, "Ant");
        store
            .save(CollectableKind::Bug, &[ant.clone(), ant.clone()])
            .unwrap();

        let mut selections = Selections::seed(SelectionStore::new(dir.path()));
        assert!(selections.is_selected(CollectableKind::Bug, &ant));

        // removing collapses every copy of the name
        selections.catalog_arrived(CollectableKind::Bug, &[ant.clone()]);
        selections.toggle(CollectableKind::Bug, &ant);
        assert!(!selections.is_selected(CollectableKind::Bug, &ant));
    }
}

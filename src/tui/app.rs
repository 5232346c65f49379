use crate::config::Config;
use crate::engine::availability::{available_at, TimeFilter};
use crate::engine::collectable::{Collectable, CollectableKind};
use crate::engine::selection::Selections;
use chrono::Local;
use ratatui::widgets::TableState;
use std::collections::HashMap;

pub struct App {
    pub config: Config,
    pub tabs: Vec<String>,
    pub tab_index: usize,
    pub time_filter: TimeFilter,
    pub show_only_missing: bool,
    pub its_raining: bool,
    pub catalogs: HashMap<CollectableKind, Vec<Collectable>>,
    pub pending_loads: usize,
    pub selections: Selections,
    pub displayed: Vec<Collectable>,
    pub summary: String,
    pub table_state: TableState,
    pub logs: Vec<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, selections: Selections) -> Self {
        let mut tabs: Vec<String> = CollectableKind::ALL
            .iter()
            .map(|k| k.name().to_string())
            .collect();
        tabs.push("Activity".to_string());

        let mut app = Self {
            time_filter: config.display.time_filter,
            show_only_missing: config.display.show_only_missing,
            its_raining: config.display.its_raining,
            config,
            tabs,
            tab_index: 0,
            catalogs: HashMap::new(),
            pending_loads: CollectableKind::ALL.len(),
            selections,
            displayed: Vec::new(),
            summary: String::new(),
            table_state: TableState::default(),
            logs: Vec::new(),
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Kind shown on the active tab; None on the Activity tab.
    pub fn kind(&self) -> Option<CollectableKind> {
        CollectableKind::ALL.get(self.tab_index).copied()
    }

    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }

    /// Recompute everything derived from the current inputs: the available
    /// set for the active tab, the display filtering on top of it, and the
    /// summary sentence. Called after every mutation, so every draw sees one
    /// settled snapshot.
    pub fn refresh(&mut self) {
        let kind = match self.kind() {
            Some(kind) => kind,
            None => return,
        };
        let catalog = self
            .catalogs
            .get(&kind)
            .map(|c| c.as_slice())
            .unwrap_or(&[]);

        let available = available_at(catalog, self.time_filter, Local::now());
        self.summary = self.selections.summary_text(
            kind,
            &available,
            self.show_only_missing,
            self.time_filter,
        );
        self.displayed = self.selections.filtered_display(
            kind,
            &available,
            self.show_only_missing,
            self.its_raining,
        );

        if self.displayed.is_empty() {
            self.table_state.select(None);
        } else {
            let row = self
                .table_state
                .selected()
                .unwrap_or(0)
                .min(self.displayed.len() - 1);
            self.table_state.select(Some(row));
        }
    }

    /// A loader task finished for one kind.
    pub fn install_catalog(&mut self, kind: CollectableKind, records: Vec<Collectable>) {
        if self.pending_loads > 0 {
            self.pending_loads -= 1;
        }
        self.selections.catalog_arrived(kind, &records);
        self.add_log(format!("{} catalog: {} entries", kind.name(), records.len()));
        self.catalogs.insert(kind, records);
        self.refresh();
    }

    pub fn add_log(&mut self, message: String) {
        self.logs.push(message);
        if self.logs.len() > 100 {
            self.logs.remove(0);
        }
    }

    pub fn next_tab(&mut self) {
        self.tab_index = (self.tab_index + 1) % self.tabs.len();
        self.refresh();
    }

    pub fn previous_tab(&mut self) {
        if self.tab_index > 0 {
            self.tab_index -= 1;
        } else {
            self.tab_index = self.tabs.len() - 1;
        }
        self.refresh();
    }

    pub fn next_row(&mut self) {
        if self.displayed.is_empty() {
            return;
        }
        let row = match self.table_state.selected() {
            Some(row) if row + 1 < self.displayed.len() => row + 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(row));
    }

    pub fn previous_row(&mut self) {
        if self.displayed.is_empty() {
            return;
        }
        let row = match self.table_state.selected() {
            Some(0) | None => self.displayed.len() - 1,
            Some(row) => row - 1,
        };
        self.table_state.select(Some(row));
    }

    pub fn toggle_selected_row(&mut self) {
        let kind = match self.kind() {
            Some(kind) => kind,
            None => return,
        };
        let picked = self
            .table_state
            .selected()
            .and_then(|row| self.displayed.get(row))
            .cloned();
        if let Some(collectable) = picked {
            self.selections.toggle(kind, &collectable);
            let verb = if self.selections.is_selected(kind, &collectable) {
                "Caught"
            } else {
                "Released"
            };
            self.add_log(format!("{} {}", verb, collectable.name));
            self.refresh();
        }
    }

    pub fn cycle_time_filter(&mut self) {
        self.time_filter = self.time_filter.next();
        self.refresh();
    }

    pub fn toggle_only_missing(&mut self) {
        self.show_only_missing = !self.show_only_missing;
        self.refresh();
    }

    pub fn toggle_raining(&mut self) {
        self.its_raining = !self.its_raining;
        self.refresh();
    }
}

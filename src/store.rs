//! Meal Table Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ActionError, MealForm, MealRow, RefreshState};
use crate::table::TableView;

/// Everything the meal page renders from
#[derive(Clone, Debug, Default, Store)]
pub struct MealTableState {
    /// Rows in display order, replaced wholesale by each refresh
    pub rows: Vec<MealRow>,
    /// Idle / Refreshing / Failed
    pub refresh: RefreshState,
    /// Meal open in the editor (None = editor closed)
    pub editing: Option<MealForm>,
    /// Last save error shown inside the editor
    pub editor_error: Option<String>,
    /// Failed row action, shown apart from refresh failures
    pub action_error: Option<ActionError>,
}

/// Type alias for the store
pub type MealStore = Store<MealTableState>;

/// Refresher target that writes into the store
#[derive(Clone, Copy)]
pub struct StoreTable {
    store: MealStore,
}

impl StoreTable {
    pub fn new(store: MealStore) -> Self {
        Self { store }
    }
}

impl TableView for StoreTable {
    fn replace_rows(&self, rows: Vec<MealRow>) {
        *self.store.rows().write() = rows;
    }

    fn update_rows(&self, f: &dyn Fn(&mut [MealRow])) {
        f(&mut self.store.rows().write());
    }

    fn set_state(&self, state: RefreshState) {
        *self.store.refresh().write() = state;
    }
}

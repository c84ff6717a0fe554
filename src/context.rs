//! Application Context
//!
//! Shared meal-page actions provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info, warn};

use crate::api::{self, HttpMealSource};
use crate::config::MealsConfig;
use crate::filter::{DomFilterForm, FilterCriteria, FilterSource};
use crate::models::{ActionError, MealForm};
use crate::refresher::{rendered_rows, MealListRefresher};
use crate::store::{MealStore, MealTableStateStoreFields, StoreTable};
use crate::table::EditableRows;

pub type AppRefresher = MealListRefresher<HttpMealSource, StoreTable>;

/// Page-wide handles; cheap to clone into event handlers
#[derive(Clone)]
pub struct MealsContext {
    pub config: Arc<MealsConfig>,
    pub store: MealStore,
    refresher: AppRefresher,
    filter: DomFilterForm,
}

impl MealsContext {
    pub fn new(config: MealsConfig, store: MealStore) -> Self {
        let config = Arc::new(config);
        let refresher = MealListRefresher::new(
            Arc::clone(&config),
            HttpMealSource::new(&config),
            StoreTable::new(store),
            Arc::new(EditableRows),
        );
        let filter = DomFilterForm::new(config.filter_form_id.clone());
        Self { config, store, refresher, filter }
    }

    fn spawn_refresh(&self, query: Option<FilterCriteria>) {
        let refresher = self.refresher.clone();
        spawn_local(async move {
            let outcome = refresher.refresh(query).await;
            if let Some(rows) = rendered_rows(&outcome) {
                info!("[Meals] Table shows {} rows", rows);
            }
        });
    }

    /// Refresh with the current filter form contents
    pub fn update_table(&self) {
        match self.filter.read() {
            Ok(criteria) => self.spawn_refresh(Some(criteria)),
            Err(e) => {
                error!("[Meals] Cannot read filter form: {}", e);
                self.refresher.fail(&e);
            }
        }
    }

    /// Refresh with no filter parameters
    pub fn refresh_unfiltered(&self) {
        self.spawn_refresh(None);
    }

    /// Reset the filter form, then refresh unfiltered
    pub fn clear_filter(&self) {
        if let Err(e) = self.filter.reset() {
            warn!("[Meals] Filter reset failed: {}", e);
        }
        self.refresh_unfiltered();
    }

    pub fn delete_meal(&self, id: u32) {
        let ctx = self.clone();
        spawn_local(async move {
            match api::delete_meal(&ctx.config, id).await {
                Ok(()) => {
                    info!("[Meals] Deleted meal {}", id);
                    ctx.dismiss_action_error();
                    ctx.update_table();
                }
                Err(e) => {
                    error!("[Meals] Delete of {} failed: {}", id, e);
                    *ctx.store.action_error().write() = Some(ActionError::delete(id, &e));
                }
            }
        });
    }

    pub fn dismiss_action_error(&self) {
        *self.store.action_error().write() = None;
    }

    pub fn open_editor(&self, form: MealForm) {
        *self.store.editor_error().write() = None;
        *self.store.editing().write() = Some(form);
    }

    pub fn close_editor(&self) {
        *self.store.editing().write() = None;
        *self.store.editor_error().write() = None;
    }

    /// Create or update, then close the editor and refresh
    pub fn save_meal(&self, form: MealForm) {
        let ctx = self.clone();
        spawn_local(async move {
            match api::save_meal(&ctx.config, &form).await {
                Ok(()) => {
                    info!("[Meals] Saved meal {:?}", form.id);
                    ctx.close_editor();
                    ctx.update_table();
                }
                Err(e) => {
                    error!("[Meals] Save failed: {}", e);
                    *ctx.store.editor_error().write() = Some(e.to_string());
                }
            }
        });
    }
}

/// Get the meals context
pub fn use_meals() -> MealsContext {
    expect_context::<MealsContext>()
}

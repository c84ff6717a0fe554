//! Meal List Refresher
//!
//! Fetch-and-redraw cycle behind page load, filter submit and filter clear.
//! Every request gets a sequence number; only the latest issued one may
//! touch the table.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, info};

use crate::config::MealsConfig;
use crate::error::{MealsError, MealsResult};
use crate::filter::FilterCriteria;
use crate::models::{MealRow, MealTo, RefreshState};
use crate::table::{build_rows, PostRenderHook, TableView};

/// Read side of the meals endpoint
#[async_trait(?Send)]
pub trait MealSource {
    async fn fetch_meals(&self, query: Option<&str>) -> MealsResult<Vec<MealTo>>;
}

/// What happened to one refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Rows replaced and affordances reattached
    Rendered { rows: usize },
    /// A newer refresh was issued while this one was in flight
    Superseded,
}

pub struct MealListRefresher<S, V> {
    config: Arc<MealsConfig>,
    source: S,
    view: V,
    hook: Arc<dyn PostRenderHook>,
    issued: Arc<AtomicU64>,
}

impl<S: Clone, V: Clone> Clone for MealListRefresher<S, V> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            source: self.source.clone(),
            view: self.view.clone(),
            hook: Arc::clone(&self.hook),
            issued: Arc::clone(&self.issued),
        }
    }
}

impl<S: MealSource, V: TableView> MealListRefresher<S, V> {
    pub fn new(config: Arc<MealsConfig>, source: S, view: V, hook: Arc<dyn PostRenderHook>) -> Self {
        Self {
            config,
            source,
            view,
            hook,
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.issued.load(Ordering::SeqCst) == seq
    }

    /// Record a failure that happened before a request could be issued
    ///
    /// Counts as a newer refresh, so anything still in flight is dropped
    /// instead of overwriting the error with `Idle`.
    pub fn fail(&self, err: &MealsError) {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        error!("[Refresher] #{} failed before issue: {}", seq, err);
        self.view.set_state(RefreshState::Failed(err.to_string()));
    }

    /// Fetch with `query` (None = unfiltered) and replace the whole table
    pub async fn refresh(&self, query: Option<FilterCriteria>) -> MealsResult<RefreshOutcome> {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let query = query.map(|q| q.to_query());
        debug!("[Refresher] #{} GET {:?}", seq, query);
        self.view.set_state(RefreshState::Refreshing);

        let result = self.source.fetch_meals(query.as_deref()).await;

        if !self.is_latest(seq) {
            debug!("[Refresher] #{} superseded, dropping response", seq);
            return Ok(RefreshOutcome::Superseded);
        }

        match result {
            Ok(meals) => {
                let rows = build_rows(meals, &self.config.columns, &self.config.order);
                let count = rows.len();
                self.view.replace_rows(rows);
                self.view.update_rows(&|rows: &mut [MealRow]| self.hook.after_render(rows));
                self.view.set_state(RefreshState::Idle);
                info!("[Refresher] #{} rendered {} meals", seq, count);
                Ok(RefreshOutcome::Rendered { rows: count })
            }
            Err(err) => {
                error!("[Refresher] #{} failed: {}", seq, err);
                self.view.set_state(RefreshState::Failed(err.to_string()));
                Err(err)
            }
        }
    }
}

/// Row count when the refresh actually redrew the table
pub fn rendered_rows(outcome: &MealsResult<RefreshOutcome>) -> Option<usize> {
    match outcome {
        Ok(RefreshOutcome::Rendered { rows }) => Some(*rows),
        _ => None,
    }
}

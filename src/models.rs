//! Frontend Models
//!
//! Data structures matching the meals endpoint payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::MealsError;

/// Formats the server is known to emit for `dateTime`
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Display format for the date/time column
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Meal record as returned by the meals endpoint
///
/// Only `dateTime` and `description` are guaranteed; the rest default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealTo {
    #[serde(default)]
    pub id: Option<u32>,
    pub date_time: String,
    pub description: String,
    #[serde(default)]
    pub calories: i32,
    #[serde(default)]
    pub excess: bool,
}

impl MealTo {
    /// Parsed `dateTime`, `None` when the server sent something unexpected
    pub fn parsed_date_time(&self) -> Option<NaiveDateTime> {
        parse_date_time(&self.date_time)
    }

    /// `yyyy-MM-dd HH:mm`, or the raw value if it does not parse
    pub fn display_date_time(&self) -> String {
        self.parsed_date_time()
            .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
            .unwrap_or_else(|| self.date_time.clone())
    }
}

pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Per-row interactive controls, inert until the post-render hook binds them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowAffordances {
    pub edit: bool,
    pub delete: bool,
}

/// One displayed table row
#[derive(Debug, Clone, PartialEq)]
pub struct MealRow {
    pub meal: MealTo,
    pub affordances: RowAffordances,
}

impl MealRow {
    pub fn new(meal: MealTo) -> Self {
        Self {
            meal,
            affordances: RowAffordances::default(),
        }
    }
}

/// Observable state of the meal table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RefreshState {
    /// Last successful data rendered
    #[default]
    Idle,
    /// Request in flight
    Refreshing,
    /// Latest request failed; rows are stale
    Failed(String),
}

impl RefreshState {
    pub fn is_refreshing(&self) -> bool {
        matches!(self, RefreshState::Refreshing)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RefreshState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Editor form contents for creating or updating a meal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealForm {
    pub id: Option<u32>,
    /// `datetime-local` input value (`yyyy-MM-ddTHH:mm`)
    pub date_time: String,
    pub description: String,
    pub calories: String,
}

impl MealForm {
    pub fn from_meal(meal: &MealTo) -> Self {
        let date_time = meal
            .parsed_date_time()
            .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
            .unwrap_or_else(|| meal.date_time.clone());
        Self {
            id: meal.id,
            date_time,
            description: meal.description.clone(),
            calories: meal.calories.to_string(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

/// A row action that failed; unrelated to the refresh state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionError {
    pub meal_id: u32,
    pub message: String,
}

impl ActionError {
    pub fn delete(meal_id: u32, err: &MealsError) -> Self {
        Self { meal_id, message: err.to_string() }
    }

    pub fn summary(&self) -> String {
        format!("Could not delete meal {}: {}", self.meal_id, self.message)
    }
}

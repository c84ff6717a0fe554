//! UI Components
//!
//! Leptos components of the meal page.

pub(crate) mod delete_confirm_button;
mod filter_form;
mod log_panel;
mod meal_editor;
mod meal_table;
mod refresh_status;

pub use filter_form::FilterForm;
pub use log_panel::LogPanel;
pub use meal_editor::MealEditor;
pub use meal_table::MealTable;
pub use refresh_status::RefreshStatus;

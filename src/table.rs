//! Table Utilities
//!
//! Row ordering, the view seam the refresher writes into, and the
//! post-render hook that binds edit/delete affordances.

use std::cmp::Ordering;

use crate::config::{ColumnData, ColumnDef, SortOrder};
use crate::models::{MealRow, MealTo, RefreshState};

/// Destination of refresh results
pub trait TableView {
    /// Replace the whole row set
    fn replace_rows(&self, rows: Vec<MealRow>);

    /// Mutate the current rows in place
    fn update_rows(&self, f: &dyn Fn(&mut [MealRow]));

    fn set_state(&self, state: RefreshState);
}

/// Invoked after every full row replacement
pub trait PostRenderHook: Send + Sync {
    fn after_render(&self, rows: &mut [MealRow]);
}

impl<F> PostRenderHook for F
where
    F: Fn(&mut [MealRow]) + Send + Sync,
{
    fn after_render(&self, rows: &mut [MealRow]) {
        self(rows)
    }
}

/// Enables edit/delete on every row that has a server id
#[derive(Debug, Clone, Copy, Default)]
pub struct EditableRows;

impl PostRenderHook for EditableRows {
    fn after_render(&self, rows: &mut [MealRow]) {
        for row in rows.iter_mut() {
            let bound = row.meal.id.is_some();
            row.affordances.edit = bound;
            row.affordances.delete = bound;
        }
    }
}

/// Sort key column; action columns and out-of-range indexes fall back to date/time
fn sort_column(columns: &[ColumnDef], order: &SortOrder) -> ColumnData {
    columns
        .get(order.column)
        .filter(|c| c.orderable)
        .and_then(|c| c.data_kind())
        .unwrap_or(ColumnData::DateTime)
}

fn compare_by(column: ColumnData, a: &MealTo, b: &MealTo) -> Ordering {
    match column {
        // Unparseable timestamps order below every real one
        ColumnData::DateTime => (a.parsed_date_time(), &a.date_time).cmp(&(b.parsed_date_time(), &b.date_time)),
        ColumnData::Description => a.description.cmp(&b.description),
        ColumnData::Calories => a.calories.cmp(&b.calories),
    }
}

/// Order fresh records into inert rows, largest sort key first
pub fn build_rows(meals: Vec<MealTo>, columns: &[ColumnDef], order: &SortOrder) -> Vec<MealRow> {
    let column = sort_column(columns, order);
    let mut meals = meals;
    meals.sort_by(|a, b| compare_by(column, b, a));
    meals.into_iter().map(MealRow::new).collect()
}

/// Text for a data cell
pub fn cell_text(meal: &MealTo, data: ColumnData) -> String {
    match data {
        ColumnData::DateTime => meal.display_date_time(),
        ColumnData::Description => meal.description.clone(),
        ColumnData::Calories => meal.calories.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_columns;

    fn meal(id: Option<u32>, date_time: &str, description: &str) -> MealTo {
        MealTo {
            id,
            date_time: date_time.to_string(),
            description: description.to_string(),
            calories: 0,
            excess: false,
        }
    }

    fn by_date_time() -> SortOrder {
        SortOrder { column: 0 }
    }

    fn descriptions(rows: &[MealRow]) -> Vec<&str> {
        rows.iter().map(|r| r.meal.description.as_str()).collect()
    }

    #[test]
    fn test_breakfast_above_lunch() {
        let rows = build_rows(
            vec![
                meal(None, "2024-01-01T08:00", "Lunch"),
                meal(None, "2024-01-02T08:00", "Breakfast"),
            ],
            &default_columns(),
            &by_date_time(),
        );
        assert_eq!(descriptions(&rows), vec!["Breakfast", "Lunch"]);
    }

    #[test]
    fn test_sort_uses_time_not_text() {
        // As text, "2020-01-30T10:00" sorts above "2020-01-30 11:00"
        let rows = build_rows(
            vec![
                meal(None, "2020-01-30T10:00", "early"),
                meal(None, "2020-01-30 11:00", "late"),
                meal(None, "2020-01-30T09:00:00.500", "earliest"),
            ],
            &default_columns(),
            &by_date_time(),
        );
        assert_eq!(descriptions(&rows), vec!["late", "early", "earliest"]);
    }

    #[test]
    fn test_unparseable_timestamps_sink() {
        let rows = build_rows(
            vec![
                meal(None, "soon", "unknown"),
                meal(None, "2020-01-30T10:00:00", "known"),
            ],
            &default_columns(),
            &by_date_time(),
        );
        assert_eq!(descriptions(&rows), vec!["known", "unknown"]);
    }

    #[test]
    fn test_action_column_order_falls_back_to_date_time() {
        let rows = build_rows(
            vec![
                meal(None, "2020-01-30T10:00:00", "a"),
                meal(None, "2020-01-31T10:00:00", "b"),
            ],
            &default_columns(),
            &SortOrder { column: 2 },
        );
        assert_eq!(descriptions(&rows), vec!["b", "a"]);
    }

    #[test]
    fn test_rows_start_inert_and_hook_binds_saved_ones() {
        let mut rows = build_rows(
            vec![meal(Some(1), "2020-01-30T10:00:00", "saved"), meal(None, "2020-01-29T10:00:00", "draft")],
            &default_columns(),
            &by_date_time(),
        );
        assert!(rows.iter().all(|r| !r.affordances.edit && !r.affordances.delete));

        EditableRows.after_render(&mut rows);
        assert!(rows[0].affordances.edit && rows[0].affordances.delete);
        assert!(!rows[1].affordances.edit && !rows[1].affordances.delete);
    }

    #[test]
    fn test_cell_text() {
        let m = MealTo { calories: 410, ..meal(None, "2020-01-31T20:00:00", "Ужин") };
        assert_eq!(cell_text(&m, ColumnData::DateTime), "2020-01-31 20:00");
        assert_eq!(cell_text(&m, ColumnData::Description), "Ужин");
        assert_eq!(cell_text(&m, ColumnData::Calories), "410");
    }
}

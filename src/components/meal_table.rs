//! Meal Table Component
//!
//! Renders the configured columns over the store's rows. The whole body is
//! rebuilt whenever the refresher replaces the row set.

use leptos::prelude::*;

use crate::components::delete_confirm_button::{delete_prompt, DeleteConfirmButton};
use crate::config::{ColumnDef, ColumnKind};
use crate::context::use_meals;
use crate::models::{MealForm, MealRow};
use crate::store::MealTableStateStoreFields;
use crate::table::cell_text;

#[component]
pub fn MealTable() -> impl IntoView {
    let ctx = use_meals();
    let store = ctx.store;
    let columns = ctx.config.columns.clone();
    let table_id = ctx.config.table_id.clone();

    let header = columns
        .iter()
        .map(|col| {
            let class = if col.orderable { "sortable" } else { "actions" };
            view! { <th class=class>{col.title}</th> }
        })
        .collect_view();

    let body = move || {
        let columns = columns.clone();
        store
            .rows()
            .get()
            .into_iter()
            .map(|row| view! { <MealRowView row=row columns=columns.clone() /> })
            .collect_view()
    };

    let row_count = move || store.rows().read().len();
    let is_empty = move || row_count() == 0 && !store.refresh().read().is_refreshing();

    view! {
        <table id=table_id class="meal-table">
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
        <Show when=is_empty>
            <p class="empty-note">"No meals found"</p>
        </Show>
        <p class="meal-count">{move || format!("Showing {} meals", row_count())}</p>
    }
}

/// One table row; edit/delete are live only when the row's affordances are bound
#[component]
pub fn MealRowView(row: MealRow, columns: Vec<ColumnDef>) -> impl IntoView {
    let ctx = use_meals();
    let meal = row.meal;
    let affordances = row.affordances;
    let row_class = if meal.excess { "meal-row excess" } else { "meal-row normal" };

    let cells = columns
        .into_iter()
        .map(|col| {
            let label = col.default_content.unwrap_or_default();
            match col.kind {
                ColumnKind::Data(data) => view! { <td>{cell_text(&meal, data)}</td> }.into_any(),
                ColumnKind::Edit if affordances.edit => {
                    let ctx = ctx.clone();
                    let form = MealForm::from_meal(&meal);
                    view! {
                        <td>
                            <button
                                class="edit-btn"
                                on:click=move |_| ctx.open_editor(form.clone())
                            >
                                {label}
                            </button>
                        </td>
                    }
                    .into_any()
                }
                ColumnKind::Delete if affordances.delete => match meal.id {
                    Some(id) => {
                        let ctx = ctx.clone();
                        view! {
                            <td>
                                <DeleteConfirmButton
                                    label=label
                                    prompt=delete_prompt(&meal)
                                    on_confirm=Callback::new(move |_| ctx.delete_meal(id))
                                />
                            </td>
                        }
                        .into_any()
                    }
                    None => view! { <td class="placeholder">{label}</td> }.into_any(),
                },
                ColumnKind::Edit | ColumnKind::Delete => {
                    view! { <td class="placeholder">{label}</td> }.into_any()
                }
            }
        })
        .collect_view();

    view! {
        <tr class=row_class data-meal-excess=meal.excess.to_string()>
            {cells}
        </tr>
    }
}

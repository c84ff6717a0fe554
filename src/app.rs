//! Meals Frontend App
//!
//! Filter form, status banner, meal table and editor on one page.

use console_logger::ConsoleLogger;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterForm, LogPanel, MealEditor, MealTable, RefreshStatus};
use crate::config::MealsConfig;
use crate::context::MealsContext;
use crate::models::MealForm;
use crate::store::MealTableState;

#[component]
pub fn App(config: MealsConfig, logger: Option<&'static ConsoleLogger>) -> impl IntoView {
    let store = Store::new(MealTableState::default());
    let ctx = MealsContext::new(config, store);

    provide_context(ctx.clone());

    // Initial load: no filter parameters
    {
        let ctx = ctx.clone();
        Effect::new(move |_| ctx.refresh_unfiltered());
    }

    view! {
        <main class="meals-page">
            <h2>"Meals"</h2>

            <FilterForm />

            <RefreshStatus />

            {logger.map(|logger| view! { <LogPanel logger=logger /> })}

            <button class="add-btn" on:click=move |_| ctx.open_editor(MealForm::default())>
                "Add meal"
            </button>

            <MealTable />

            <MealEditor />
        </main>
    }
}

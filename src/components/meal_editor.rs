//! Meal Editor Component
//!
//! Modal form for adding a meal or editing an existing one.

use leptos::prelude::*;

use crate::context::use_meals;
use crate::models::MealForm;
use crate::store::MealTableStateStoreFields;

/// Shown while the store has a meal open for editing
#[component]
pub fn MealEditor() -> impl IntoView {
    let store = use_meals().store;

    move || {
        store
            .editing()
            .get()
            .map(|form| view! { <MealEditorForm form=form /> })
    }
}

#[component]
fn MealEditorForm(form: MealForm) -> impl IntoView {
    let ctx = use_meals();
    let store = ctx.store;
    let id = form.id;
    let title = if form.is_new() { "Add meal" } else { "Edit meal" };

    let (date_time, set_date_time) = signal(form.date_time);
    let (description, set_description) = signal(form.description);
    let (calories, set_calories) = signal(form.calories);

    let on_submit = {
        let ctx = ctx.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            ctx.save_meal(MealForm {
                id,
                date_time: date_time.get(),
                description: description.get(),
                calories: calories.get(),
            });
        }
    };

    view! {
        <div class="modal-backdrop">
            <form class="meal-editor" on:submit=on_submit>
                <h3>{title}</h3>
                <label>
                    "Date/Time"
                    <input
                        type="datetime-local"
                        name="dateTime"
                        prop:value=move || date_time.get()
                        on:input=move |ev| set_date_time.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <input
                        type="text"
                        name="description"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Calories"
                    <input
                        type="number"
                        name="calories"
                        prop:value=move || calories.get()
                        on:input=move |ev| set_calories.set(event_target_value(&ev))
                    />
                </label>
                {move || store.editor_error().get().map(|msg| view! { <p class="editor-error">{msg}</p> })}
                <div class="editor-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.close_editor()>
                        "Cancel"
                    </button>
                    <button type="submit" class="save-btn">"Save"</button>
                </div>
            </form>
        </div>
    }
}

//! Delete Confirm Button Component
//!
//! Row delete action that asks about the specific meal before firing.

use leptos::prelude::*;

use crate::models::MealTo;

/// Confirmation prompt naming the meal, e.g. `Delete "Обед" of 2020-01-30 13:00?`
pub fn delete_prompt(meal: &MealTo) -> String {
    format!("Delete \"{}\" of {}?", meal.description, meal.display_date_time())
}

/// Delete cell: the label until clicked, then the meal prompt with Yes/No
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || {
                let label = label.clone();
                view! {
                    <button class="delete-btn" on:click=move |_| set_asking.set(true)>
                        {label}
                    </button>
                }
            }
        >
            <span class="delete-confirm" role="alertdialog">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button class="cancel-btn" on:click=move |_| set_asking.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}

//! Filter Form Component
//!
//! Date/time range form read by the refresher; Filter and Cancel buttons.

use leptos::prelude::*;

use crate::context::use_meals;

/// Uncontrolled filter inputs; their values are read from the DOM on submit
#[component]
pub fn FilterForm() -> impl IntoView {
    let ctx = use_meals();
    let form_id = ctx.config.filter_form_id.clone();

    let on_submit = {
        let ctx = ctx.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            ctx.update_table();
        }
    };

    view! {
        <form id=form_id class="filter-form" on:submit=on_submit>
            <div class="filter-row">
                <label>
                    "From date"
                    <input type="date" name="startDate" />
                </label>
                <label>
                    "To date"
                    <input type="date" name="endDate" />
                </label>
                <label>
                    "From time"
                    <input type="time" name="startTime" />
                </label>
                <label>
                    "To time"
                    <input type="time" name="endTime" />
                </label>
            </div>
            <div class="filter-actions">
                <button type="button" class="cancel-btn" on:click=move |_| ctx.clear_filter()>
                    "Cancel"
                </button>
                <button type="submit" class="filter-btn">"Filter"</button>
            </div>
        </form>
    }
}

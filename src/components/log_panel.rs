//! Log Panel Component
//!
//! Collapsible view of the logger's recent lines, below the status banners.

use console_logger::ConsoleLogger;
use leptos::prelude::*;

#[component]
pub fn LogPanel(logger: &'static ConsoleLogger) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let snapshot = move || set_lines.set(logger.recent().iter().map(|l| l.render()).collect());

    view! {
        <div class="log-panel">
            <button
                class="log-toggle"
                on:click=move |_| {
                    if !open.get() {
                        snapshot();
                    }
                    set_open.update(|o| *o = !*o);
                }
            >
                {move || if open.get() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=move || open.get()>
                <button class="log-reload" on:click=move |_| snapshot()>"Reload"</button>
                <pre class="log-lines">
                    {move || lines.get().join("\n")}
                </pre>
            </Show>
        </div>
    }
}

//! Settings Screen
//!
//! Theme switch, list ordering, remote backend and a log viewer.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::RemoteConfigForm;
use crate::context::use_settings;
use crate::models::SortOrder;

#[component]
pub fn SettingsScreen() -> impl IntoView {
    let settings = use_settings();

    view! {
        <div class="settings-screen">
            <header class="screen-header">
                <h1>"Settings"</h1>
            </header>

            <section class="settings-section">
                <label class="switch-row">
                    <span>"Dark mode"</span>
                    <input
                        type="checkbox"
                        class="switch"
                        prop:checked=move || settings.is_dark_mode()
                        on:change=move |ev| settings.set_dark_mode(event_target_checked(&ev))
                    />
                </label>
            </section>

            <section class="settings-section">
                <h2>"Sort by"</h2>
                {SortOrder::ALL.into_iter().map(|order| view! {
                    <button
                        class=move || if settings.sort_order() == order { "sort-option active" } else { "sort-option" }
                        on:click=move |_| settings.set_sort_order(order)
                    >
                        {order.label()}
                    </button>
                }).collect_view()}
            </section>

            <section class="settings-section">
                <h2>"Backend"</h2>
                <RemoteConfigForm />
            </section>

            <LogViewer />
        </div>
    }
}

/// Newest backend log lines, fetched when opened
#[component]
fn LogViewer() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let toggle = move |_| {
        let opening = !open.get();
        set_open.set(opening);
        if opening {
            spawn_local(async move {
                match commands::recent_logs().await {
                    Ok(loaded) => set_lines.set(loaded),
                    Err(e) => set_lines.set(vec![e]),
                }
            });
        }
    };

    view! {
        <section class="settings-section">
            <button class="log-toggle" on:click=toggle>
                {move || if open.get() { "Hide logs" } else { "Show logs" }}
            </button>
            <Show when=move || open.get()>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </Show>
        </section>
    }
}

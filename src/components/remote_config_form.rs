//! Remote Config Form Component
//!
//! URL, API key and table of the hosted pantry table. The stored key comes
//! back masked; submitting it unchanged keeps the stored one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::RemoteConfig;
use crate::store::{store_set_items, use_pantry_store};

#[component]
pub fn RemoteConfigForm() -> impl IntoView {
    let store = use_pantry_store();

    let (url, set_url) = signal(String::new());
    let (api_key, set_api_key) = signal(String::new());
    let (table, set_table) = signal(String::new());
    let (status, set_status) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    // Prefill from the stored config
    spawn_local(async move {
        match commands::get_remote_config().await {
            Ok(Some(RemoteConfig { url, api_key, table })) => {
                set_url.set(url);
                set_api_key.set(api_key);
                set_table.set(table);
            }
            Ok(None) => set_status.set(Some("Not connected".to_string())),
            Err(e) => set_status.set(Some(e)),
        }
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (u, k, t) = (url.get(), api_key.get(), table.get());
        set_saving.set(true);
        set_status.set(Some("Checking connection...".to_string()));
        spawn_local(async move {
            match commands::save_remote_config(&u, &k, &t).await {
                Ok(items) => {
                    set_status.set(Some(format!("Connected, {} items", items.len())));
                    store_set_items(&store, items);
                }
                Err(e) => {
                    set_status.set(None);
                    commands::alert(&e);
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="remote-config-form" on:submit=save>
            <label>
                "Project URL"
                <input
                    type="url"
                    placeholder="https://xyz.supabase.co"
                    prop:value=move || url.get()
                    on:input=move |ev| set_url.set(event_target_value(&ev))
                />
            </label>
            <label>
                "API key"
                <input
                    type="password"
                    prop:value=move || api_key.get()
                    on:input=move |ev| set_api_key.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Table"
                <input
                    type="text"
                    placeholder="itens_despensa"
                    prop:value=move || table.get()
                    on:input=move |ev| set_table.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" disabled=move || saving.get()>"Save"</button>
            {move || status.get().map(|s| view! { <p class="config-status">{s}</p> })}
        </form>
    }
}

//! Pantry Screen
//!
//! Add form on top, grouped list below. Groups are derived from the store's
//! items and the current sort order on every change.

use leptos::prelude::*;

use crate::components::{GroupCard, NewItemForm};
use crate::context::use_settings;
use crate::models::group_items;
use crate::store::{store_fetch_items, store_is_loading, store_is_refreshing, store_items, use_pantry_store};

#[component]
pub fn PantryScreen() -> impl IntoView {
    let store = use_pantry_store();
    let settings = use_settings();

    let groups = Memo::new(move |_| group_items(&store_items(&store), settings.sort_order()));

    view! {
        <div class="pantry-screen">
            <header class="screen-header">
                <h1>"My Pantry"</h1>
                <button
                    class="refresh-btn"
                    title="Refresh"
                    disabled=move || store_is_refreshing(&store)
                    on:click=move |_| store_fetch_items(store, false)
                >
                    {move || if store_is_refreshing(&store) { "…" } else { "⟳" }}
                </button>
            </header>

            <NewItemForm />

            {move || {
                if store_is_loading(&store) {
                    return view! { <p class="loading">"Loading..."</p> }.into_any();
                }
                let current = groups.get();
                if current.is_empty() {
                    return view! { <p class="empty-state">"Your pantry is empty."</p> }.into_any();
                }
                view! {
                    <div class="group-list">
                        {current.into_iter().map(|group| view! { <GroupCard group=group /> }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

//! Group Card Component
//!
//! One card per product name. Tapping the header expands the unit list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::format::display_date;
use crate::models::{status_now, ExpiryPolicy, ItemGroup, ItemId};
use crate::store::{store_is_expanded, store_set_items, store_toggle_expanded, use_pantry_store};

#[component]
pub fn GroupCard(group: ItemGroup) -> impl IntoView {
    let store = use_pantry_store();

    // Wall-clock status; the card is rebuilt on each render of the list
    let status = status_now(group.nearest_expiry, ExpiryPolicy::default());
    let name = group.name.clone();
    let toggle_name = name.clone();
    let is_expanded = move || store_is_expanded(&store, &name);

    let delete_item = move |id: ItemId| {
        spawn_local(async move {
            match commands::delete_item(&id).await {
                Ok(items) => store_set_items(&store, items),
                Err(e) => commands::alert(&e),
            }
        });
    };

    let members = group.members.clone();

    view! {
        <div class="group-card" style=format!("border-left-color: {}", status.color())>
            <div class="group-header" on:click=move |_| store_toggle_expanded(&store, &toggle_name)>
                <div class="group-title">
                    <span class="group-name">{group.name.clone()}</span>
                    <span class="group-qty">{group.quantity_label()}</span>
                </div>
                <div class="group-expiry">
                    <span class=format!("status-dot {}", status.css_class())></span>
                    <span>"Expires " {display_date(group.nearest_expiry)}</span>
                </div>
            </div>
            <Show when=is_expanded>
                <ul class="member-list">
                    {members.iter().map(|item| {
                        let id = item.id.clone();
                        view! {
                            <li class="member-row">
                                <span class="member-date">{display_date(item.expires_on)}</span>
                                <DeleteConfirmButton on_confirm=move |_| delete_item(id.clone()) />
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

//! New Item Form Component
//!
//! Name, expiry date and a quantity stepper. One submit inserts `quantity`
//! identical units.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::format::{parse_input_value, to_input_value, today};
use crate::store::{store_set_items, use_pantry_store};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_pantry_store();

    let (name, set_name) = signal(String::new());
    let (expires_on, set_expires_on) = signal(to_input_value(today()));
    let (quantity, set_quantity) = signal(1u32);
    let (saving, set_saving) = signal(false);

    let reset = move || {
        set_name.set(String::new());
        set_expires_on.set(to_input_value(today()));
        set_quantity.set(1);
    };

    let add_items = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let text = name.get();
        if text.trim().is_empty() {
            commands::alert("Enter a product name.");
            return;
        }
        let Some(date) = parse_input_value(&expires_on.get()) else {
            commands::alert("Pick an expiry date.");
            return;
        };
        let count = quantity.get();

        set_saving.set(true);
        spawn_local(async move {
            match commands::add_items(&text, date, count).await {
                Ok(items) => {
                    store_set_items(&store, items);
                    reset();
                }
                Err(e) => commands::alert(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="new-item-form" on:submit=add_items>
            <input
                type="text"
                class="name-input"
                placeholder="Product name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <div class="new-item-row">
                <input
                    type="date"
                    class="date-input"
                    prop:value=move || expires_on.get()
                    on:input=move |ev| set_expires_on.set(event_target_value(&ev))
                />
                <div class="qty-stepper">
                    <button
                        type="button"
                        class="qty-btn"
                        disabled=move || quantity.get() <= 1
                        on:click=move |_| set_quantity.update(|q| *q = (*q).saturating_sub(1).max(1))
                    >
                        "−"
                    </button>
                    <span class="qty-value">{move || quantity.get()}</span>
                    <button
                        type="button"
                        class="qty-btn"
                        on:click=move |_| set_quantity.update(|q| *q += 1)
                    >
                        "+"
                    </button>
                </div>
            </div>
            <button type="submit" class="add-btn" disabled=move || saving.get()>
                {move || if saving.get() { "Adding..." } else { "Add" }}
            </button>
        </form>
    }
}

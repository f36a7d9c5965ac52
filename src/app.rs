//! Pantry Frontend App
//!
//! Mobile layout: one scrolling screen plus a bottom navigation bar.

use leptos::prelude::*;

use crate::components::{BottomNav, PantryScreen, SettingsScreen};
use crate::context::{NavContext, SettingsContext};
use crate::models::{MobileView, Preferences};
use crate::store::{store_fetch_items, PantryState, PantryStore};

#[component]
pub fn App() -> impl IntoView {
    let prefs = signal(Preferences::default());
    let current_view = signal(MobileView::Pantry);
    let store: PantryStore = PantryStore::new(PantryState::default());

    let settings = SettingsContext::new(prefs);
    let nav = NavContext::new(current_view);

    // Provide context to all children
    provide_context(settings);
    provide_context(nav);
    provide_context(store);

    // Initial load: preferences and items are independent
    settings.load();
    store_fetch_items(store, true);

    let theme_class = move || {
        if settings.is_dark_mode() {
            "app-container dark"
        } else {
            "app-container light"
        }
    };

    view! {
        <div class=theme_class>
            <main class="app-content">
                {move || match nav.current_view.get() {
                    MobileView::Pantry => view! { <PantryScreen /> }.into_any(),
                    MobileView::Settings => view! { <SettingsScreen /> }.into_any(),
                }}
            </main>
            <BottomNav />
        </div>
    }
}

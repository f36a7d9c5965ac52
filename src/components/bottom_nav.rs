use leptos::prelude::*;

use crate::context::use_nav;
use crate::models::MobileView;

const TABS: &[(MobileView, &str, &str)] = &[
    (MobileView::Pantry, "🥫", "Pantry"),
    (MobileView::Settings, "⚙", "Settings"),
];

#[component]
pub fn BottomNav() -> impl IntoView {
    let nav = use_nav();

    view! {
        <nav class="mobile-bottom-nav">
            {TABS.iter().map(|&(view_id, icon, label)| {
                view! {
                    <button
                        class=move || if nav.current_view.get() == view_id { "mobile-nav-item active" } else { "mobile-nav-item" }
                        on:click=move |_| nav.show(view_id)
                    >
                        <div class="mobile-nav-icon">{icon}</div>
                        <div class="mobile-nav-label">{label}</div>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

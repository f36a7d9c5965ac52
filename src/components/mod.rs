//! UI Components
//!
//! Leptos components for the two screens.

mod bottom_nav;
mod delete_confirm_button;
mod group_card;
mod new_item_form;
mod pantry_screen;
mod remote_config_form;
mod settings_screen;

pub use bottom_nav::BottomNav;
pub use delete_confirm_button::DeleteConfirmButton;
pub use group_card::GroupCard;
pub use new_item_form::NewItemForm;
pub use pantry_screen::PantryScreen;
pub use remote_config_form::RemoteConfigForm;
pub use settings_screen::SettingsScreen;

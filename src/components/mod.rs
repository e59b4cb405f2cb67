//! UI Components
//!
//! Reusable Leptos components.

mod auth_modal;
mod header;
mod item_wizard;
mod wishlist_wizard;

pub use auth_modal::AuthModal;
pub use header::Header;
pub use item_wizard::ItemWizard;
pub use wishlist_wizard::WishlistWizard;

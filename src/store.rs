//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{SessionToken, Wishlist};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current session token, `None` while signed out
    pub session: Option<SessionToken>,
    /// The signed-in user's wishlists (dashboard data)
    pub wishlists: Vec<Wishlist>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the session. Clearing it also drops the cached wishlists so a
/// later sign-in never flashes another account's data.
pub fn store_set_session(store: &AppStore, session: Option<SessionToken>) {
    let signed_out = session.is_none();
    store.session().set(session);
    if signed_out {
        store.wishlists().write().clear();
    }
}

/// Replace the dashboard wishlists wholesale (fresh fetch)
pub fn store_set_wishlists(store: &AppStore, wishlists: Vec<Wishlist>) {
    store.wishlists().set(wishlists);
}

/// Append a freshly created wishlist
pub fn store_append_wishlist(store: &AppStore, wishlist: Wishlist) {
    store.wishlists().write().push(wishlist);
}

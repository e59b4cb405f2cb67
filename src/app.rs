//! Wishnest Frontend App
//!
//! Main application component: boots the session from storage, owns the
//! route signal, and switches pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AuthModal, Header};
use crate::context::AppContext;
use crate::pages::{
    DashboardPage, HomePage, PublicWishlistPage, SsoCallbackPage, WishlistDetailPage,
};
use crate::route::Route;
use crate::store::{AppState, AppStateStoreFields};
use crate::token_store::TokenStore;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (route, set_route) = signal(initial_route());
    let (auth_open, set_auth_open) = signal(false);

    let store = Store::new(AppState::default());
    store.session().set(TokenStore::new().load());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((route, set_route), (auth_open, set_auth_open)));

    view! {
        <div class="app-shell">
            <Header />
            <AuthModal />

            <main class="page-content">
                {move || match route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Route::Wishlist {
                        id,
                        onboarding_items,
                    } => view! {
                        <WishlistDetailPage id=id onboarding_items=onboarding_items />
                    }.into_any(),
                    Route::Public { token } => view! {
                        <PublicWishlistPage token=token />
                    }.into_any(),
                    Route::SsoCallback => view! { <SsoCallbackPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Route of the URL the app booted on
fn initial_route() -> Route {
    let location = window().location();
    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();
    Route::parse(&path, &query)
}

//! Site Header
//!
//! Brand link plus the session controls: sign-in for visitors, dashboard
//! and logout for signed-in users.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::route::Route;
use crate::session;
use crate::store::{store_set_session, use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let is_authenticated = move || store.session().get().is_some();

    let on_logout = move |_| {
        session::logout();
        store_set_session(&store, None);
        ctx.redirect(Route::Home);
    };

    view! {
        <header class="site-header">
            <button class="brand" on:click=move |_| ctx.navigate(Route::Home)>
                "Wishnest"
            </button>
            <nav class="header-nav">
                <Show
                    when=is_authenticated
                    fallback=move || view! {
                        <button class="header-link" on:click=move |_| ctx.open_auth()>
                            "Sign in"
                        </button>
                    }
                >
                    <button
                        class="header-link"
                        on:click=move |_| ctx.navigate(Route::Dashboard)
                    >
                        "Dashboard"
                    </button>
                    <button class="header-link" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}

//! SSO Callback Page
//!
//! Landing point of the Google SSO redirect. The provider's result rides
//! in the URL fragment; it is handled once, synchronously, on mount.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::route::Route;
use crate::session;
use crate::store::{store_set_session, use_app_store};
use crate::token_store::TokenStore;

#[component]
pub fn SsoCallbackPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let fragment = window().location().hash().unwrap_or_default();
        match session::complete_sso_callback(&TokenStore::new(), &fragment) {
            Ok(token) => {
                store_set_session(&store, Some(token));
                ctx.redirect(Route::Dashboard);
            }
            Err(err) => {
                store_set_session(&store, None);
                set_error.set(Some(err.code().to_string()));
            }
        }
    });

    view! {
        <section class="sso-callback">
            {move || match error.get() {
                Some(code) => view! {
                    <div>
                        <h1>"SSO sign-in failed"</h1>
                        <p class="sso-error">{format!("Error: {}", code)}</p>
                        <button on:click=move |_| ctx.redirect(Route::Home)>
                            "Back to home"
                        </button>
                    </div>
                }.into_any(),
                None => view! {
                    <div>
                        <h1>"Signing you in…"</h1>
                        <p>"Please wait."</p>
                    </div>
                }.into_any(),
            }}
        </section>
    }
}

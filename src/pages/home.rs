//! Home Page
//!
//! Landing hero with a sign-in call to action and a static preview card.
//! Visitors who already hold a session go straight to the dashboard.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::route::Route;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    Effect::new(move |_| {
        if store.session().get().is_some() {
            ctx.redirect(Route::Dashboard);
        }
    });

    view! {
        <section class="hero">
            <div class="hero-copy">
                <h1>
                    "Share what you wish for"
                    <span class="hero-highlight">"with the people who care"</span>
                </h1>
                <p class="hero-subtitle">
                    "Collect gift ideas in one place, share a single link with friends
                    and family, and see what has already been taken care of."
                </p>
                <button class="hero-cta" on:click=move |_| ctx.open_auth()>
                    "Get started"
                </button>
                <p class="hero-note">"Free to use. No app to install."</p>
            </div>

            <div class="hero-preview">
                <div class="preview-top">
                    <div>
                        <p class="preview-label">"Preview"</p>
                        <p>"Your wishlist at a glance"</p>
                    </div>
                    <span class="pill">"Private by default"</span>
                </div>
                <div class="preview-row">
                    <div>
                        <p class="preview-name">"Birthday wishlist"</p>
                        <p class="preview-meta">"7 items • 3 reserved"</p>
                    </div>
                    <span class="pill">"Shared"</span>
                </div>
                <div class="preview-row">
                    <div>
                        <p class="preview-name">"Things to read"</p>
                        <p class="preview-meta">"5 items • 1 received"</p>
                    </div>
                    <span class="pill">"In progress"</span>
                </div>
                <div class="preview-hint">
                    "Add anything you'd like to have – links, notes, and more"
                </div>
            </div>
        </section>
    }
}

//! Dashboard Page
//!
//! The signed-in user's wishlists: loaded on mount, created through the
//! wizard, shared via a claimable public link copied to the clipboard.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use step_wizard::Wizard;
use wasm_bindgen_futures::JsFuture;

use crate::api;
use crate::components::WishlistWizard;
use crate::config;
use crate::context::AppContext;
use crate::models::{Wishlist, WishlistDraft};
use crate::route::{public_share_url, Route};
use crate::store::{
    store_append_wishlist, store_set_wishlists, use_app_store, AppStateStoreFields,
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (loading, set_loading) = signal(true);
    let (wizard, set_wizard) = signal(Wizard::<WishlistDraft>::default());
    let (sharing_id, set_sharing_id) = signal(None::<String>);
    let (copied_id, set_copied_id) = signal(None::<String>);

    let signed_in = move || store.session().get().is_some();

    // Reload whenever a session appears (also covers signing in while the
    // page is already open).
    Effect::new(move |_| {
        if !signed_in() {
            set_loading.set(false);
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api::wishlists::fetch_mine().await {
                Ok(wishlists) => store_set_wishlists(&store, wishlists),
                Err(err) => {
                    web_sys::console::error_1(&format!("[Dashboard] load failed: {}", err).into());
                }
            }
            set_loading.try_set(false);
        });
    });

    let on_share = move |id: String| {
        set_sharing_id.set(Some(id.clone()));
        spawn_local(async move {
            let copied = match api::wishlists::create_share(&id, true).await {
                Ok(share) => {
                    let url = public_share_url(&config::page_origin(), &share.token);
                    match copy_to_clipboard(&url).await {
                        Ok(()) => true,
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("[Dashboard] clipboard write failed: {:?}", err).into(),
                            );
                            false
                        }
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[Dashboard] share failed: {}", err).into(),
                    );
                    false
                }
            };

            if copied {
                set_copied_id.try_set(Some(id.clone()));
            }
            set_sharing_id.try_set(None);

            // The copied hint stays up for two seconds, unless another
            // share has claimed it in the meantime.
            if copied {
                gloo_timers::future::sleep(Duration::from_secs(2)).await;
                set_copied_id.try_update(|current| {
                    if current.as_deref() == Some(id.as_str()) {
                        *current = None;
                    }
                });
            }
        });
    };

    view! {
        <section class="dashboard">
            <Show
                when=signed_in
                fallback=move || view! {
                    <div class="signin-prompt">
                        <p>"Sign in to see your wishlists."</p>
                        <button on:click=move |_| ctx.open_auth()>"Sign in"</button>
                    </div>
                }
            >
                <div class="dashboard-top">
                    <h1>"My wishlists"</h1>
                    <button
                        class="new-wishlist-btn"
                        on:click=move |_| set_wizard.update(|w| w.open())
                    >
                        "New wishlist"
                    </button>
                </div>

                {move || if loading.get() {
                    view! { <p>"Loading…"</p> }.into_any()
                } else if store.wishlists().read().is_empty() {
                    view! { <p class="empty-note">"No wishlists yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="wishlist-rows">
                            <For
                                each=move || store.wishlists().get()
                                key=|wl| wl.id.clone()
                                children=move |wl| {
                                    let open_id = wl.id.clone();
                                    let share_id = wl.id.clone();
                                    let busy = {
                                        let row_id = wl.id.clone();
                                        move || sharing_id.get().as_deref() == Some(row_id.as_str())
                                    };
                                    let label = {
                                        let row_id = wl.id.clone();
                                        move || {
                                            if copied_id.get().as_deref() == Some(row_id.as_str()) {
                                                "Link copied"
                                            } else if sharing_id.get().as_deref() == Some(row_id.as_str()) {
                                                "Sharing…"
                                            } else {
                                                "Share link"
                                            }
                                        }
                                    };
                                    view! {
                                        <li class="wishlist-row">
                                            <button
                                                class="wishlist-name"
                                                on:click=move |_| ctx.navigate(Route::Wishlist {
                                                    id: open_id.clone(),
                                                    onboarding_items: false,
                                                })
                                            >
                                                {wl.name.clone()}
                                            </button>
                                            <button
                                                class="share-btn"
                                                disabled=busy
                                                on:click=move |_| on_share(share_id.clone())
                                            >
                                                {label}
                                            </button>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    }.into_any()
                }}
            </Show>

            <WishlistWizard
                wizard=wizard
                set_wizard=set_wizard
                on_created=move |wl: Wishlist| {
                    let id = wl.id.clone();
                    store_append_wishlist(&store, wl);
                    ctx.navigate(Route::Wishlist { id, onboarding_items: true });
                }
            />
        </section>
    }
}

/// Resolves once the text is actually on the clipboard.
async fn copy_to_clipboard(text: &str) -> Result<(), wasm_bindgen::JsValue> {
    let promise = window().navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}

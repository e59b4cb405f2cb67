//! Public Wishlist Page
//!
//! Anonymous view of a shared wishlist, resolved by share token, with a
//! claim action when the share allows it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::PublicWishlist;

#[component]
pub fn PublicWishlistPage(token: String) -> impl IntoView {
    let token = StoredValue::new(token);

    let (data, set_data) = signal(None::<PublicWishlist>);
    let (loading, set_loading) = signal(true);
    let (claiming, set_claiming) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::public::fetch(&token.get_value()).await {
                Ok(res) => {
                    set_data.try_set(Some(res));
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[PublicWishlist] load failed: {}", err).into(),
                    );
                }
            }
            set_loading.try_set(false);
        });
    });

    let on_claim = move |_| {
        if claiming.get() {
            return;
        }
        set_claiming.set(true);
        spawn_local(async move {
            if let Err(err) = api::public::claim(&token.get_value()).await {
                web_sys::console::error_1(
                    &format!("[PublicWishlist] claim failed: {}", err).into(),
                );
            }
            set_claiming.try_set(false);
        });
    };

    view! {
        <section class="public-wishlist">
            {move || {
                if loading.get() {
                    return view! { <p>"Loading…"</p> }.into_any();
                }
                match data.get() {
                    None => view! { <p>"Public wishlist not found."</p> }.into_any(),
                    Some(PublicWishlist {
                        wishlist,
                        share,
                        owner_name,
                    }) => view! {
                        <div class="public-body">
                            <div class="public-top">
                                <div>
                                    <h1>{wishlist.name.clone()}</h1>
                                    {owner_name.map(|owner| view! {
                                        <p class="owner-line">{format!("Wishlist by {}", owner)}</p>
                                    })}
                                    {wishlist.description.clone().map(|desc| view! {
                                        <p class="public-description">{desc}</p>
                                    })}
                                </div>
                                {share.filter(|s| s.is_claimable).map(|_| view! {
                                    <button
                                        class="claim-btn"
                                        disabled=move || claiming.get()
                                        on:click=on_claim
                                    >
                                        {move || if claiming.get() {
                                            "Claiming…"
                                        } else {
                                            "Claim wishlist"
                                        }}
                                    </button>
                                })}
                            </div>

                            <ul class="item-list">
                                {wishlist.items.iter().map(|item| {
                                    let received_line = item.is_received.then(|| {
                                        item.received_note.clone().unwrap_or_else(|| {
                                            "This item has been received as a gift.".to_string()
                                        })
                                    });
                                    view! {
                                        <li class="item-row">
                                            <div class="item-title">{item.title.clone()}</div>
                                            {item.link.clone().map(|link| {
                                                let href = link.clone();
                                                view! {
                                                    <div class="item-link">
                                                        "URL: "
                                                        <a href=href target="_blank" rel="noreferrer">
                                                            {link}
                                                        </a>
                                                    </div>
                                                }
                                            })}
                                            {item.description.clone().map(|d| {
                                                view! { <div class="item-description">{d}</div> }
                                            })}
                                            {received_line.map(|note| {
                                                view! { <div class="item-received">{note}</div> }
                                            })}
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        </div>
                    }.into_any(),
                }
            }}
        </section>
    }
}

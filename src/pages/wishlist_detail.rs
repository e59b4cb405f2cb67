//! Wishlist Detail Page
//!
//! One wishlist with its items: quick-add form, add-item wizard, share
//! link panel, received toggling with an optional note.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use step_wizard::{Step, StepDraft, Wizard};

use crate::api;
use crate::components::ItemWizard;
use crate::config;
use crate::context::AppContext;
use crate::models::{ItemDraft, UpdateItem, Wishlist, WishlistItem};
use crate::route::public_share_url;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WishlistDetailPage(id: String, onboarding_items: bool) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = StoredValue::new(id);

    let (wishlist, set_wishlist) = signal(None::<Wishlist>);
    let (loading, set_loading) = signal(true);
    let (title, set_title) = signal(String::new());
    let (url, set_url) = signal(String::new());
    let (note, set_note) = signal(String::new());
    let (creating, set_creating) = signal(false);
    let (share_link, set_share_link) = signal(None::<String>);
    let (sharing, set_sharing) = signal(false);
    let (editing_note_id, set_editing_note_id) = signal(None::<String>);
    let (note_draft, set_note_draft) = signal(String::new());
    let (toggling, set_toggling) = signal(BusySet::default());
    let (wizard, set_wizard) = signal(Wizard::<ItemDraft>::default());

    let signed_in = move || store.session().get().is_some();

    Effect::new(move |_| {
        if !signed_in() {
            set_loading.set(false);
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api::wishlists::fetch(&id.get_value()).await {
                Ok(wl) => {
                    // Fresh lists arriving through onboarding start in the
                    // wizard right away.
                    let open_wizard = onboarding_items && wl.items.is_empty();
                    set_wishlist.try_set(Some(wl));
                    if open_wizard {
                        set_wizard.try_update(|w| w.open());
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[WishlistDetail] load failed: {}", err).into(),
                    );
                }
            }
            set_loading.try_set(false);
        });
    });

    let on_quick_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if creating.get() {
            return;
        }
        let draft = ItemDraft {
            title: title.get(),
            link: url.get(),
            note: note.get(),
        };
        if draft.validate(Step::Name).is_err() {
            return;
        }
        set_creating.set(true);
        let payload = draft.to_request();
        spawn_local(async move {
            match api::items::add(&id.get_value(), &payload).await {
                Ok(item) => {
                    set_wishlist.try_update(|wl| {
                        if let Some(wl) = wl.as_mut() {
                            wl.items.push(item);
                        }
                    });
                    set_title.try_set(String::new());
                    set_url.try_set(String::new());
                    set_note.try_set(String::new());
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[WishlistDetail] add item failed: {}", err).into(),
                    );
                }
            }
            set_creating.try_set(false);
        });
    };

    let on_share = move |_| {
        if sharing.get() || share_link.read().is_some() {
            return;
        }
        set_sharing.set(true);
        spawn_local(async move {
            match api::wishlists::create_share(&id.get_value(), true).await {
                Ok(share) => {
                    set_share_link
                        .try_set(Some(public_share_url(&config::page_origin(), &share.token)));
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[WishlistDetail] share failed: {}", err).into(),
                    );
                }
            }
            set_sharing.try_set(false);
        });
    };

    let update_received = move |item: WishlistItem, is_received: bool, note: Option<String>| {
        let payload = UpdateItem::for_receipt(&item, is_received, note);
        let item_id = item.id.clone();
        let started = set_toggling
            .try_update(|busy| busy.begin(item.id))
            .unwrap_or(false);
        if !started {
            return;
        }
        spawn_local(async move {
            match api::items::update(&item_id, &payload).await {
                Ok(updated) => {
                    set_wishlist.try_update(|wl| {
                        if let Some(wl) = wl.as_mut() {
                            wl.replace_item(updated);
                        }
                    });
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[WishlistDetail] item update failed: {}", err).into(),
                    );
                }
            }
            set_toggling.try_update(|busy| busy.settle(&item_id));
        });
    };

    view! {
        <section class="wishlist-detail">
            <Show
                when=signed_in
                fallback=move || view! {
                    <div class="signin-prompt">
                        <p>"Sign in to see this wishlist."</p>
                        <button on:click=move |_| ctx.open_auth()>"Sign in"</button>
                    </div>
                }
            >
                {move || if loading.get() {
                    view! { <p>"Loading wishlist…"</p> }.into_any()
                } else if wishlist.read().is_none() {
                    view! { <p>"Wishlist not found."</p> }.into_any()
                } else {
                    view! {
                        <div class="detail-body">
                            <div class="detail-top">
                                <div>
                                    <h1>
                                        {move || wishlist.with(|wl| {
                                            wl.as_ref().map(|w| w.name.clone()).unwrap_or_default()
                                        })}
                                    </h1>
                                    {move || wishlist.with(|wl| {
                                        wl.as_ref().and_then(|w| w.description.clone()).map(|d| {
                                            view! { <p class="detail-description">{d}</p> }
                                        })
                                    })}
                                </div>
                                <div class="detail-actions">
                                    <button
                                        class="add-item-btn"
                                        on:click=move |_| set_wizard.update(|w| w.open())
                                    >
                                        "Add an item"
                                    </button>
                                    <button
                                        class="share-btn"
                                        disabled=move || sharing.get() || share_link.read().is_some()
                                        on:click=on_share
                                    >
                                        {move || if share_link.read().is_some() {
                                            "Public link active"
                                        } else if sharing.get() {
                                            "Sharing…"
                                        } else {
                                            "Share"
                                        }}
                                    </button>
                                    <Show when=move || share_link.read().is_some()>
                                        <button
                                            class="make-private-btn"
                                            on:click=move |_| set_share_link.set(None)
                                        >
                                            "Make private"
                                        </button>
                                    </Show>
                                </div>
                            </div>

                            <Show when=move || share_link.read().is_some()>
                                <div class="share-panel">
                                    "Public link: "
                                    <a href=move || share_link.get().unwrap_or_default()>
                                        {move || share_link.get().unwrap_or_default()}
                                    </a>
                                </div>
                            </Show>

                            <form class="quick-add" on:submit=on_quick_add>
                                <input
                                    type="text"
                                    placeholder="What do you wish for?"
                                    prop:value=move || title.get()
                                    on:input=move |ev| set_title.set(event_target_value(&ev))
                                />
                                <input
                                    type="text"
                                    placeholder="Link (optional)"
                                    prop:value=move || url.get()
                                    on:input=move |ev| set_url.set(event_target_value(&ev))
                                />
                                <textarea
                                    rows="2"
                                    placeholder="Note (optional)"
                                    prop:value=move || note.get()
                                    on:input=move |ev| set_note.set(event_target_value(&ev))
                                ></textarea>
                                <button type="submit" disabled=move || creating.get()>
                                    {move || if creating.get() { "Adding…" } else { "Add item" }}
                                </button>
                            </form>

                            <ul class="item-list">
                                <For
                                    each=move || wishlist.with(|wl| {
                                        wl.as_ref().map(|w| w.items.clone()).unwrap_or_default()
                                    })
                                    key=|item| {
                                        // Key on every rendered field so in-place edits
                                        // (receipt toggles) re-render the row
                                        (
                                            item.id.clone(),
                                            item.title.clone(),
                                            item.link.clone(),
                                            item.description.clone(),
                                            item.is_received,
                                            item.received_note.clone(),
                                        )
                                    }
                                    children=move |item| {
                                        let toggle_item = item.clone();
                                        let editor_item = StoredValue::new(item.clone());
                                        let item_id = item.id.clone();

                                        let row_busy = {
                                            let item_id = item_id.clone();
                                            move || toggling.with(|busy| busy.contains(&item_id))
                                        };
                                        let editor_open = {
                                            let item_id = item_id.clone();
                                            move || {
                                                editing_note_id.get().as_deref()
                                                    == Some(item_id.as_str())
                                            }
                                        };

                                        let on_toggle = move |_| {
                                            if toggle_item.is_received {
                                                update_received(toggle_item.clone(), false, None);
                                            } else {
                                                set_editing_note_id
                                                    .set(Some(toggle_item.id.clone()));
                                                set_note_draft.set(toggle_item.note_seed());
                                            }
                                        };

                                        let on_save_note = move |_| {
                                            set_editing_note_id.set(None);
                                            let note = note_draft.get();
                                            update_received(
                                                editor_item.get_value(),
                                                true,
                                                Some(note),
                                            );
                                            set_note_draft.set(String::new());
                                        };

                                        view! {
                                            <li class="item-row">
                                                <div class="item-main">
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
                                                    {item.is_received.then(|| {
                                                        let note = item
                                                            .received_note
                                                            .clone()
                                                            .unwrap_or_else(|| {
                                                                "This item has been received as a gift."
                                                                    .to_string()
                                                            });
                                                        view! { <div class="item-received">{note}</div> }
                                                    })}
                                                </div>
                                                <div class="item-actions">
                                                    <button
                                                        class="receive-toggle"
                                                        disabled=row_busy
                                                        on:click=on_toggle
                                                    >
                                                        {if item.is_received {
                                                            "Mark as not received"
                                                        } else {
                                                            "Mark as received"
                                                        }}
                                                    </button>
                                                    <Show when={
                                                        let received = item.is_received;
                                                        move || editor_open() && !received
                                                    }>
                                                        <div class="note-editor">
                                                            <textarea
                                                                rows="2"
                                                                placeholder="Add a note (optional)"
                                                                prop:value=move || note_draft.get()
                                                                on:input=move |ev| {
                                                                    set_note_draft
                                                                        .set(event_target_value(&ev));
                                                                }
                                                            ></textarea>
                                                            <div class="note-editor-actions">
                                                                <button
                                                                    type="button"
                                                                    on:click=move |_| {
                                                                        set_editing_note_id.set(None);
                                                                        set_note_draft.set(String::new());
                                                                    }
                                                                >
                                                                    "Cancel"
                                                                </button>
                                                                <button
                                                                    type="button"
                                                                    class="note-save"
                                                                    on:click=on_save_note
                                                                >
                                                                    "Save"
                                                                </button>
                                                            </div>
                                                        </div>
                                                    </Show>
                                                </div>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </div>
                    }.into_any()
                }}
            </Show>

            <ItemWizard
                wishlist_id=id.get_value()
                wizard=wizard
                set_wizard=set_wizard
                on_created=move |item: WishlistItem| {
                    set_wishlist.try_update(|wl| {
                        if let Some(wl) = wl.as_mut() {
                            wl.items.push(item);
                        }
                    });
                }
            />
        </section>
    }
}

/// Item ids with a receipt update in flight. Each row's flag is its own
/// entry, so one item's request never touches another row's button.
#[derive(Default)]
struct BusySet(HashSet<String>);

impl BusySet {
    /// Mark an id busy. Returns false when a request for it is already in
    /// flight; the caller must not issue another.
    fn begin(&mut self, id: String) -> bool {
        self.0.insert(id)
    }

    fn settle(&mut self, id: &str) {
        self.0.remove(id);
    }

    fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::BusySet;

    #[test]
    fn second_toggle_leaves_first_row_busy() {
        let mut busy = BusySet::default();
        assert!(busy.begin("a".to_string()));
        assert!(busy.begin("b".to_string()));
        assert!(busy.contains("a"), "starting b must not release a");
        busy.settle("a");
        assert!(!busy.contains("a"));
        assert!(busy.contains("b"));
    }

    #[test]
    fn duplicate_request_for_same_item_is_refused() {
        let mut busy = BusySet::default();
        assert!(busy.begin("a".to_string()));
        assert!(!busy.begin("a".to_string()));
        busy.settle("a");
        assert!(busy.begin("a".to_string()));
    }

    #[test]
    fn settle_is_idempotent() {
        let mut busy = BusySet::default();
        busy.settle("never-started");
        assert!(!busy.contains("never-started"));
    }
}

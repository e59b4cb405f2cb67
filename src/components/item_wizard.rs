//! Item Wizard
//!
//! Three-step add-item dialog: title, link, note. Shares the state machine
//! with the wishlist wizard, pointed at a different endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;
use step_wizard::{Step, Wizard};

use crate::api;
use crate::models::{ItemDraft, WishlistItem};

#[component]
pub fn ItemWizard(
    wishlist_id: String,
    wizard: ReadSignal<Wizard<ItemDraft>>,
    set_wizard: WriteSignal<Wizard<ItemDraft>>,
    #[prop(into)] on_created: Callback<WishlistItem>,
) -> impl IntoView {
    let wishlist_id = StoredValue::new(wishlist_id);

    let step = move || wizard.with(|w| w.step());
    let submitting = move || wizard.with(|w| w.is_submitting());
    let error_msg = move || wizard.with(|w| w.error().map(str::to_string));

    let on_submit = move |_| {
        let Some(draft) = set_wizard.try_update(|w| w.begin_submit()).flatten() else {
            return;
        };
        let payload = draft.to_request();
        spawn_local(async move {
            match api::items::add(&wishlist_id.get_value(), &payload).await {
                Ok(item) => {
                    set_wizard.try_update(|w| w.submit_succeeded());
                    on_created.try_run(item);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[ItemWizard] create failed: {}", err).into(),
                    );
                    set_wizard.try_update(|w| {
                        w.submit_failed("Something went wrong. Please try again.")
                    });
                }
            }
        });
    };

    view! {
        <Show when=move || wizard.with(|w| w.is_open())>
            <div class="modal-backdrop">
                <div class="modal wizard-modal">
                    <div class="modal-top">
                        <div>
                            <h2>
                                {move || match step() {
                                    Step::Name => "What do you wish for?",
                                    Step::Details => "Add a link",
                                    Step::Confirm => "Anything else?",
                                }}
                            </h2>
                            <p class="wizard-intro">
                                "Add something to your wishlist in three quick steps."
                            </p>
                            <p class="wizard-step-count">
                                {move || format!("Step {} of 3", step().ordinal())}
                            </p>
                        </div>
                        <button
                            type="button"
                            class="modal-close"
                            disabled=submitting
                            on:click=move |_| set_wizard.update(|w| w.close())
                        >
                            "✕"
                        </button>
                    </div>

                    <Show when=move || error_msg().is_some()>
                        <p class="form-error">{move || error_msg().unwrap_or_default()}</p>
                    </Show>

                    {move || match step() {
                        Step::Name => view! {
                            <div class="wizard-step">
                                <label>"Title"</label>
                                <input
                                    type="text"
                                    placeholder="A new book, cozy socks…"
                                    prop:value=move || wizard.with(|w| w.draft().title.clone())
                                    on:input=move |ev| set_wizard.update(|w| {
                                        w.draft_mut().title = event_target_value(&ev);
                                    })
                                    disabled=submitting
                                />
                            </div>
                        }.into_any(),
                        Step::Details => view! {
                            <div class="wizard-step">
                                <label>"Link"</label>
                                <input
                                    type="text"
                                    placeholder="https://…"
                                    prop:value=move || wizard.with(|w| w.draft().link.clone())
                                    on:input=move |ev| set_wizard.update(|w| {
                                        w.draft_mut().link = event_target_value(&ev);
                                    })
                                    disabled=submitting
                                />
                            </div>
                        }.into_any(),
                        Step::Confirm => view! {
                            <div class="wizard-step">
                                <label>"Note"</label>
                                <textarea
                                    rows="3"
                                    placeholder="Size, color, where to find it…"
                                    prop:value=move || wizard.with(|w| w.draft().note.clone())
                                    on:input=move |ev| set_wizard.update(|w| {
                                        w.draft_mut().note = event_target_value(&ev);
                                    })
                                    disabled=submitting
                                ></textarea>
                            </div>
                        }.into_any(),
                    }}

                    <div class="wizard-footer">
                        <button
                            type="button"
                            disabled=move || step() == Step::Name || submitting()
                            on:click=move |_| set_wizard.update(|w| w.go_back())
                        >
                            "Back"
                        </button>
                        {move || if step() == Step::Confirm {
                            view! {
                                <button type="button" disabled=submitting on:click=on_submit>
                                    {move || if submitting() { "Creating…" } else { "Add item" }}
                                </button>
                            }.into_any()
                        } else {
                            view! {
                                <button
                                    type="button"
                                    disabled=submitting
                                    on:click=move |_| set_wizard.update(|w| w.go_next())
                                >
                                    "Next"
                                </button>
                            }.into_any()
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

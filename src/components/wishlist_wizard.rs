//! Wishlist Wizard
//!
//! Three-step create-wishlist dialog: name, description, visibility.
//! The state machine lives in `step_wizard`; this component only renders
//! it and performs the terminal submission.

use leptos::prelude::*;
use leptos::task::spawn_local;
use step_wizard::{Step, Wizard};

use crate::api;
use crate::models::{Visibility, Wishlist, WishlistDraft};

#[component]
pub fn WishlistWizard(
    wizard: ReadSignal<Wizard<WishlistDraft>>,
    set_wizard: WriteSignal<Wizard<WishlistDraft>>,
    #[prop(into)] on_created: Callback<Wishlist>,
) -> impl IntoView {
    let step = move || wizard.with(|w| w.step());
    let submitting = move || wizard.with(|w| w.is_submitting());
    let error_msg = move || wizard.with(|w| w.error().map(str::to_string));

    let on_submit = move |_| {
        let Some(draft) = set_wizard.try_update(|w| w.begin_submit()).flatten() else {
            return;
        };
        let payload = draft.to_request();
        spawn_local(async move {
            match api::wishlists::create(&payload).await {
                Ok(created) => {
                    set_wizard.try_update(|w| w.submit_succeeded());
                    on_created.try_run(created);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[WishlistWizard] create failed: {}", err).into(),
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
                                    Step::Name => "Name your wishlist",
                                    Step::Details => "Add a description",
                                    Step::Confirm => "Who can see it?",
                                }}
                            </h2>
                            <p class="wizard-intro">
                                "Set up a new wishlist in three quick steps."
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
                                <label>"Name"</label>
                                <input
                                    type="text"
                                    placeholder="Birthday wishlist"
                                    prop:value=move || wizard.with(|w| w.draft().name.clone())
                                    on:input=move |ev| set_wizard.update(|w| {
                                        w.draft_mut().name = event_target_value(&ev);
                                    })
                                    disabled=submitting
                                />
                            </div>
                        }.into_any(),
                        Step::Details => view! {
                            <div class="wizard-step">
                                <label>"Description"</label>
                                <textarea
                                    rows="3"
                                    placeholder="What is this wishlist for?"
                                    prop:value=move || wizard.with(|w| w.draft().description.clone())
                                    on:input=move |ev| set_wizard.update(|w| {
                                        w.draft_mut().description = event_target_value(&ev);
                                    })
                                    disabled=submitting
                                ></textarea>
                            </div>
                        }.into_any(),
                        Step::Confirm => view! {
                            <div class="wizard-step">
                                <label>"Visibility"</label>
                                <select
                                    prop:value=move || wizard.with(|w| w.draft().visibility.as_str())
                                    on:change=move |ev| set_wizard.update(|w| {
                                        w.draft_mut().visibility =
                                            Visibility::from_str(&event_target_value(&ev));
                                    })
                                    disabled=submitting
                                >
                                    <option value="private">"Private (only you)"</option>
                                    <option value="public">"Public (anyone with the link)"</option>
                                </select>
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
                                    {move || if submitting() { "Creating…" } else { "Create wishlist" }}
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

//! Auth Modal
//!
//! Login / sign-up dialog with a Google SSO shortcut. Opened from anywhere
//! via `AppContext`; a successful authentication lands in the global store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::session;
use crate::store::{store_set_session, use_app_store};

/// Which form the modal shows
#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    SignUp,
}

#[component]
pub fn AuthModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (mode, set_mode) = signal(AuthMode::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember, set_remember) = signal(true);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Credentials never outlive the dialog.
    let close = move || {
        set_email.set(String::new());
        set_password.set(String::new());
        set_error.set(None);
        ctx.close_auth();
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        set_loading.set(true);
        set_error.set(None);

        let email_value = email.get();
        let password_value = password.get();
        let remember_value = remember.get();
        let auth_mode = mode.get();

        spawn_local(async move {
            let result = match auth_mode {
                AuthMode::Login => {
                    session::login(&email_value, &password_value, remember_value).await
                }
                AuthMode::SignUp => {
                    session::sign_up(&email_value, &password_value, remember_value).await
                }
            };
            match result {
                Ok(token) => {
                    store_set_session(&store, Some(token));
                    close();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[AuthModal] auth failed: {}", err).into());
                    store_set_session(&store, None);
                    set_error.set(Some(err.message().to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let on_google = move |_| {
        if window()
            .location()
            .set_href(&api::auth::sso_start_url())
            .is_err()
        {
            web_sys::console::error_1(&"[AuthModal] SSO navigation failed".into());
        }
    };

    let tab_class = move |tab: AuthMode| {
        if mode.get() == tab {
            "mode-tab active"
        } else {
            "mode-tab"
        }
    };

    view! {
        <Show when=move || ctx.auth_open.get()>
            <div class="modal-backdrop">
                <div class="modal auth-modal">
                    <div class="modal-top">
                        <div class="mode-tabs">
                            <button
                                type="button"
                                class=move || tab_class(AuthMode::Login)
                                on:click=move |_| set_mode.set(AuthMode::Login)
                            >
                                "Login"
                            </button>
                            <button
                                type="button"
                                class=move || tab_class(AuthMode::SignUp)
                                on:click=move |_| set_mode.set(AuthMode::SignUp)
                            >
                                "Sign up"
                            </button>
                        </div>
                        <button type="button" class="modal-close" on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>

                    <h2>
                        {move || match mode.get() {
                            AuthMode::Login => "Welcome back",
                            AuthMode::SignUp => "Create your account",
                        }}
                    </h2>

                    <Show when=move || error.get().is_some()>
                        <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <button type="button" class="google-btn" on:click=on_google>
                        "Continue with Google"
                    </button>

                    <form on:submit=on_submit>
                        <label for="auth-email">"Email"</label>
                        <input
                            id="auth-email"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />

                        <label for="auth-password">"Password"</label>
                        <input
                            id="auth-password"
                            type="password"
                            required
                            minlength="6"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />

                        <label class="remember-row">
                            <input
                                type="checkbox"
                                prop:checked=move || remember.get()
                                on:change=move |ev| set_remember.set(event_target_checked(&ev))
                            />
                            <span>"Remember me"</span>
                        </label>

                        <button type="submit" disabled=move || loading.get()>
                            {move || {
                                if loading.get() {
                                    "Please wait…"
                                } else {
                                    match mode.get() {
                                        AuthMode::Login => "Login",
                                        AuthMode::SignUp => "Sign up",
                                    }
                                }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

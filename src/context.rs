//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::route::Route;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently on screen - read
    pub route: ReadSignal<Route>,
    /// Page currently on screen - write
    set_route: WriteSignal<Route>,
    /// Whether the auth modal is open - read
    pub auth_open: ReadSignal<bool>,
    /// Whether the auth modal is open - write
    set_auth_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        auth_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            auth_open: auth_open.0,
            set_auth_open: auth_open.1,
        }
    }

    /// Go to a page, pushing a history entry
    pub fn navigate(&self, route: Route) {
        push_history(&route, false);
        self.set_route.set(route);
    }

    /// Go to a page, replacing the current history entry. Used when the
    /// current URL should not be reachable via Back (SSO callback, home
    /// redirect).
    pub fn redirect(&self, route: Route) {
        push_history(&route, true);
        self.set_route.set(route);
    }

    /// Open the login / sign-up modal
    pub fn open_auth(&self) {
        self.set_auth_open.set(true);
    }

    /// Close the login / sign-up modal
    pub fn close_auth(&self) {
        self.set_auth_open.set(false);
    }
}

/// Sync the browser URL with the route. History failures (sandboxed
/// iframes) only cost the URL, not the navigation itself.
fn push_history(route: &Route, replace: bool) {
    let path = route.path();
    let history = match window().history() {
        Ok(history) => history,
        Err(_) => return,
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(&path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(&path))
    };
    if result.is_err() {
        web_sys::console::warn_1(&format!("[Router] history update failed for {}", path).into());
    }
}

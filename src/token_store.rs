//! Token Store
//!
//! Single persisted slot for the current session token. The "remember me"
//! choice selects one of two mutually exclusive web-storage scopes; writing
//! either scope clears the other so a stale token can never survive in a
//! second place. Reads prefer the durable scope and purge expired tokens.

#[cfg(test)]
use std::cell::RefCell;

use chrono::{DateTime, Utc};
use gloo_storage::{LocalStorage, SessionStorage, Storage};

use crate::models::SessionToken;

const TOKEN_KEY: &str = "wishnest.auth.v1";

/// Persistence scope for a saved token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Survives the browser session (localStorage)
    Durable,
    /// Dropped when the tab closes (sessionStorage)
    Session,
}

/// Physical storage behind the store. One token slot per scope.
pub trait TokenVault {
    fn get(&self, scope: Scope) -> Option<SessionToken>;
    fn put(&self, scope: Scope, token: &SessionToken);
    fn remove(&self, scope: Scope);
}

/// Browser web storage
#[derive(Clone, Copy, Default)]
pub struct WebVault;

impl TokenVault for WebVault {
    fn get(&self, scope: Scope) -> Option<SessionToken> {
        match scope {
            Scope::Durable => LocalStorage::get(TOKEN_KEY).ok(),
            Scope::Session => SessionStorage::get(TOKEN_KEY).ok(),
        }
    }

    fn put(&self, scope: Scope, token: &SessionToken) {
        // Storage writes only fail when the quota is exhausted; a token is
        // tiny and the next load simply finds no session.
        let _ = match scope {
            Scope::Durable => LocalStorage::set(TOKEN_KEY, token),
            Scope::Session => SessionStorage::set(TOKEN_KEY, token),
        };
    }

    fn remove(&self, scope: Scope) {
        match scope {
            Scope::Durable => LocalStorage::delete(TOKEN_KEY),
            Scope::Session => SessionStorage::delete(TOKEN_KEY),
        }
    }
}

/// The one place session tokens are persisted and read back.
pub struct TokenStore<V = WebVault> {
    vault: V,
}

impl TokenStore<WebVault> {
    pub fn new() -> Self {
        Self { vault: WebVault }
    }
}

impl Default for TokenStore<WebVault> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: TokenVault> TokenStore<V> {
    pub fn with_vault(vault: V) -> Self {
        Self { vault }
    }

    /// Persist a token: remember selects the durable scope, otherwise the
    /// session scope. The other scope is always emptied.
    pub fn save(&self, token: &SessionToken, remember: bool) {
        let (target, other) = if remember {
            (Scope::Durable, Scope::Session)
        } else {
            (Scope::Session, Scope::Durable)
        };
        self.vault.put(target, token);
        self.vault.remove(other);
    }

    /// Current token, durable scope first. An expired token is purged from
    /// both scopes and reported as absent.
    pub fn load(&self) -> Option<SessionToken> {
        let token = self
            .vault
            .get(Scope::Durable)
            .or_else(|| self.vault.get(Scope::Session))?;
        if is_expired(&token) {
            self.clear();
            return None;
        }
        Some(token)
    }

    /// Empty both scopes. Idempotent.
    pub fn clear(&self) {
        self.vault.remove(Scope::Durable);
        self.vault.remove(Scope::Session);
    }
}

/// Only values that parse as RFC 3339 can expire a token. The backend
/// issues RFC 3339; anything else is kept rather than silently ending the
/// session over a format quirk.
fn is_expired(token: &SessionToken) -> bool {
    match DateTime::parse_from_rfc3339(&token.expires_at) {
        Ok(at) => at <= Utc::now(),
        Err(_) => false,
    }
}

/// In-memory vault for host-side tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryVault {
    durable: RefCell<Option<SessionToken>>,
    session: RefCell<Option<SessionToken>>,
}

#[cfg(test)]
impl MemoryVault {
    fn slot(&self, scope: Scope) -> &RefCell<Option<SessionToken>> {
        match scope {
            Scope::Durable => &self.durable,
            Scope::Session => &self.session,
        }
    }
}

#[cfg(test)]
impl TokenVault for MemoryVault {
    fn get(&self, scope: Scope) -> Option<SessionToken> {
        self.slot(scope).borrow().clone()
    }

    fn put(&self, scope: Scope, token: &SessionToken) {
        *self.slot(scope).borrow_mut() = Some(token.clone());
    }

    fn remove(&self, scope: Scope) {
        *self.slot(scope).borrow_mut() = None;
    }
}

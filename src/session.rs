//! Session Lifecycle
//!
//! Login, sign-up and logout glue between the auth endpoints and the token
//! store. Every path that fails leaves no token behind, so the app is
//! always cleanly signed in or cleanly signed out.

use thiserror::Error;

use crate::api::{self, ApiError};
use crate::models::SessionToken;
use crate::token_store::TokenStore;

pub use crate::sso::complete_sso_callback;

/// User-presentable authentication failure
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthError {
    message: String,
}

impl AuthError {
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Prefer the backend's `detail` (wrong password, duplicate email and
    /// the like); anything else collapses to a generic message.
    fn from_api(err: ApiError) -> Self {
        let message = err.detail().unwrap_or("Authentication failed").to_string();
        AuthError { message }
    }
}

/// Log in and persist the token. `remember` picks durable storage over the
/// tab-scoped kind.
pub async fn login(email: &str, password: &str, remember: bool) -> Result<SessionToken, AuthError> {
    let store = TokenStore::new();
    match api::auth::login(email, password).await {
        Ok(token) => {
            store.save(&token, remember);
            Ok(token)
        }
        Err(err) => {
            store.clear();
            Err(AuthError::from_api(err))
        }
    }
}

/// Create an account, then log in with the same credentials. A failure in
/// either step surfaces as one error.
pub async fn sign_up(email: &str, password: &str, remember: bool) -> Result<SessionToken, AuthError> {
    if let Err(err) = api::auth::sign_up(email, password).await {
        TokenStore::new().clear();
        return Err(AuthError::from_api(err));
    }
    login(email, password, remember).await
}

/// Drop the stored token. Purely local; the backend keeps no session state.
pub fn logout() {
    TokenStore::new().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_prefers_backend_detail() {
        let err = AuthError::from_api(ApiError::Status {
            status: 401,
            detail: Some("Incorrect email or password".to_string()),
        });
        assert_eq!(err.message(), "Incorrect email or password");
        assert_eq!(err.to_string(), "Incorrect email or password");
    }

    #[test]
    fn auth_error_falls_back_on_generic_message() {
        let from_status = AuthError::from_api(ApiError::Status {
            status: 500,
            detail: None,
        });
        assert_eq!(from_status.message(), "Authentication failed");

        let from_network = AuthError::from_api(ApiError::Network("offline".to_string()));
        assert_eq!(from_network.message(), "Authentication failed");
    }
}

//! Auth Endpoints
//!
//! Email/password login, sign-up, and the Google SSO entry URL.

use serde::Serialize;

use super::ApiError;
use crate::config;
use crate::models::SessionToken;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// `POST /api/auth/login`: exchange credentials for a session token.
pub async fn login(email: &str, password: &str) -> Result<SessionToken, ApiError> {
    super::post_json("/api/auth/login", &Credentials { email, password }).await
}

/// `POST /api/auth/signup`: create the account. The backend returns the
/// new user profile, which the client has no use for; a follow-up login
/// obtains the token.
pub async fn sign_up(email: &str, password: &str) -> Result<(), ApiError> {
    super::post_unit("/api/auth/signup", &Credentials { email, password }).await
}

/// Entry URL of the Google SSO flow. The browser navigates there; the
/// backend redirects back to `/sso/google/callback` with the result in the
/// URL fragment.
pub fn sso_start_url() -> String {
    format!("{}/api/auth/sso/google/start", config::api_base())
}

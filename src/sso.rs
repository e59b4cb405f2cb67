//! Google SSO callback handling
//!
//! After the provider round-trip the backend redirects the browser to
//! `/sso/google/callback` with the outcome in the URL fragment, which never
//! leaves the browser. A success fragment carries `access_token` and
//! `expires_at`; a failure carries `error=<code>`.

use percent_encoding::percent_decode_str;
use thiserror::Error;

use crate::models::SessionToken;
use crate::token_store::{TokenStore, TokenVault};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SsoError {
    /// Error code forwarded from the provider redirect
    #[error("SSO sign-in failed: {0}")]
    Provider(String),
    /// Fragment lacked a usable token
    #[error("SSO sign-in failed: missing_token")]
    MissingToken,
}

impl SsoError {
    /// Short code shown on the callback page
    pub fn code(&self) -> &str {
        match self {
            SsoError::Provider(code) => code,
            SsoError::MissingToken => "missing_token",
        }
    }
}

/// Decode `%XX` escapes with `+` as space, the encoding the backend uses
/// for fragment values.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Key/value pairs of a URL fragment. A leading `#` is ignored and pairs
/// without `=` decode to an empty value.
pub fn parse_fragment(fragment: &str) -> Vec<(String, String)> {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn fragment_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .filter(|v| !v.is_empty())
}

/// Process the callback URL fragment. On success the token is persisted as
/// a remembered session; on any failure a previously stored token is
/// cleared so the user is never left half signed in.
pub fn complete_sso_callback<V: TokenVault>(
    store: &TokenStore<V>,
    fragment: &str,
) -> Result<SessionToken, SsoError> {
    let pairs = parse_fragment(fragment);

    if let Some(code) = fragment_value(&pairs, "error") {
        store.clear();
        return Err(SsoError::Provider(code));
    }

    let (Some(access_token), Some(expires_at)) = (
        fragment_value(&pairs, "access_token"),
        fragment_value(&pairs, "expires_at"),
    ) else {
        store.clear();
        return Err(SsoError::MissingToken);
    };

    // The fragment never carries a token type; the backend only issues
    // bearer tokens.
    let token = SessionToken {
        access_token,
        token_type: "bearer".to_string(),
        expires_at,
    };
    store.save(&token, true);
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_store::MemoryVault;

    fn store() -> TokenStore<MemoryVault> {
        TokenStore::with_vault(MemoryVault::default())
    }

    fn seeded_store() -> TokenStore<MemoryVault> {
        let store = store();
        let old = SessionToken {
            access_token: "stale".to_string(),
            token_type: "bearer".to_string(),
            expires_at: "123".to_string(),
        };
        store.save(&old, true);
        store
    }

    #[test]
    fn success_fragment_saves_bearer_token() {
        let store = store();
        let token = complete_sso_callback(&store, "#access_token=abc&expires_at=123").unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_at, "123");
        assert_eq!(store.load().map(|t| t.access_token), Some("abc".to_string()));
    }

    #[test]
    fn provider_error_clears_stored_token() {
        let store = seeded_store();
        let err = complete_sso_callback(&store, "#error=access_denied").unwrap_err();
        assert_eq!(err, SsoError::Provider("access_denied".to_string()));
        assert_eq!(err.code(), "access_denied");
        assert!(store.load().is_none());
    }

    #[test]
    fn error_wins_over_token_fields() {
        let store = seeded_store();
        let err =
            complete_sso_callback(&store, "#access_token=abc&expires_at=123&error=denied")
                .unwrap_err();
        assert_eq!(err, SsoError::Provider("denied".to_string()));
        assert!(store.load().is_none());
    }

    #[test]
    fn provider_token_type_is_ignored() {
        let store = store();
        let token =
            complete_sso_callback(&store, "#access_token=abc&expires_at=123&token_type=mac")
                .unwrap();
        assert_eq!(token.token_type, "bearer");
        assert_eq!(
            store.load().map(|t| t.token_type),
            Some("bearer".to_string())
        );
    }

    #[test]
    fn missing_access_token_is_rejected() {
        let store = seeded_store();
        let err = complete_sso_callback(&store, "#expires_at=123").unwrap_err();
        assert_eq!(err, SsoError::MissingToken);
        assert_eq!(err.code(), "missing_token");
        assert!(store.load().is_none());
    }

    #[test]
    fn missing_expires_at_is_rejected() {
        let store = store();
        let err = complete_sso_callback(&store, "#access_token=abc").unwrap_err();
        assert_eq!(err, SsoError::MissingToken);
    }

    #[test]
    fn empty_fragment_is_missing_token() {
        let store = store();
        assert_eq!(
            complete_sso_callback(&store, "").unwrap_err(),
            SsoError::MissingToken
        );
    }

    #[test]
    fn empty_error_value_is_ignored() {
        let store = store();
        let token =
            complete_sso_callback(&store, "#error=&access_token=abc&expires_at=123").unwrap();
        assert_eq!(token.access_token, "abc");
    }

    #[test]
    fn values_are_percent_decoded_with_plus_as_space() {
        let pairs = parse_fragment("#error=email+not%20verified&expires_at=2099-01-01T00%3A00%3A00%2B00%3A00");
        assert_eq!(
            pairs,
            vec![
                ("error".to_string(), "email not verified".to_string()),
                (
                    "expires_at".to_string(),
                    "2099-01-01T00:00:00+00:00".to_string()
                ),
            ]
        );
    }

    #[test]
    fn fragment_without_hash_prefix_parses() {
        let pairs = parse_fragment("access_token=abc");
        assert_eq!(pairs, vec![("access_token".to_string(), "abc".to_string())]);
    }

    #[test]
    fn pair_without_equals_gets_empty_value() {
        let pairs = parse_fragment("#flag&key=value");
        assert_eq!(
            pairs,
            vec![
                ("flag".to_string(), String::new()),
                ("key".to_string(), "value".to_string()),
            ]
        );
    }
}

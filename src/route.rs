//! Route Handling
//!
//! Page selection as a plain enum: parsed once from the location on boot
//! and switched in app state afterwards. Two routes are entry contracts
//! and must keep their exact shapes: the public share link
//! `/public/{token}` and the SSO callback `/sso/google/callback`.

/// The page currently on screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Dashboard,
    Wishlist {
        id: String,
        /// `?onboarding=items`: open the add-item wizard on an empty list
        onboarding_items: bool,
    },
    Public {
        token: String,
    },
    SsoCallback,
}

impl Route {
    /// Parse a location pathname plus query string. Unknown paths land on
    /// the home page.
    pub fn parse(path: &str, query: &str) -> Route {
        let path = path.trim_end_matches('/');
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        match segments.next() {
            None => Route::Home,
            Some("dashboard") => Route::Dashboard,
            Some("wishlists") => match segments.next() {
                Some(id) if segments.next().is_none() => Route::Wishlist {
                    id: id.to_string(),
                    onboarding_items: has_onboarding_items(query),
                },
                _ => Route::Home,
            },
            Some("public") => match segments.next() {
                Some(token) if segments.next().is_none() => Route::Public {
                    token: token.to_string(),
                },
                _ => Route::Home,
            },
            Some("sso") => {
                if segments.next() == Some("google")
                    && segments.next() == Some("callback")
                    && segments.next().is_none()
                {
                    Route::SsoCallback
                } else {
                    Route::Home
                }
            }
            Some(_) => Route::Home,
        }
    }

    /// Pathname (plus query where applicable) for history updates.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Wishlist {
                id,
                onboarding_items,
            } => {
                if *onboarding_items {
                    format!("/wishlists/{}?onboarding=items", id)
                } else {
                    format!("/wishlists/{}", id)
                }
            }
            Route::Public { token } => format!("/public/{}", token),
            Route::SsoCallback => "/sso/google/callback".to_string(),
        }
    }
}

fn has_onboarding_items(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "onboarding=items")
}

/// Public share URL shown to owners: `{origin}/public/{token}`.
pub fn public_share_url(origin: &str, token: &str) -> String {
    format!("{}/public/{}", origin.trim_end_matches('/'), token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_top_level_pages() {
        assert_eq!(Route::parse("/", ""), Route::Home);
        assert_eq!(Route::parse("", ""), Route::Home);
        assert_eq!(Route::parse("/dashboard", ""), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard/", ""), Route::Dashboard);
    }

    #[test]
    fn parses_wishlist_detail_with_onboarding_flag() {
        assert_eq!(
            Route::parse("/wishlists/w42", ""),
            Route::Wishlist {
                id: "w42".to_string(),
                onboarding_items: false,
            }
        );
        assert_eq!(
            Route::parse("/wishlists/w42", "?onboarding=items"),
            Route::Wishlist {
                id: "w42".to_string(),
                onboarding_items: true,
            }
        );
        assert_eq!(
            Route::parse("/wishlists/w42", "?onboarding=profile"),
            Route::Wishlist {
                id: "w42".to_string(),
                onboarding_items: false,
            }
        );
    }

    #[test]
    fn parses_public_share_link() {
        assert_eq!(
            Route::parse("/public/abc123", ""),
            Route::Public {
                token: "abc123".to_string(),
            }
        );
    }

    #[test]
    fn parses_sso_callback() {
        assert_eq!(Route::parse("/sso/google/callback", ""), Route::SsoCallback);
        assert_eq!(Route::parse("/sso/google/callback/", ""), Route::SsoCallback);
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(Route::parse("/profile", ""), Route::Home);
        assert_eq!(Route::parse("/wishlists", ""), Route::Home);
        assert_eq!(Route::parse("/wishlists/a/b", ""), Route::Home);
        assert_eq!(Route::parse("/sso/google", ""), Route::Home);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Home,
            Route::Dashboard,
            Route::Wishlist {
                id: "w1".to_string(),
                onboarding_items: false,
            },
            Route::Wishlist {
                id: "w1".to_string(),
                onboarding_items: true,
            },
            Route::Public {
                token: "tok".to_string(),
            },
            Route::SsoCallback,
        ] {
            let path = route.path();
            let (pathname, query) = match path.split_once('?') {
                Some((p, q)) => (p.to_string(), format!("?{}", q)),
                None => (path.clone(), String::new()),
            };
            assert_eq!(Route::parse(&pathname, &query), route, "path {}", path);
        }
    }

    #[test]
    fn share_url_uses_origin_and_token() {
        assert_eq!(
            public_share_url("https://wishnest.app", "tok123"),
            "https://wishnest.app/public/tok123"
        );
        assert_eq!(
            public_share_url("https://wishnest.app/", "tok123"),
            "https://wishnest.app/public/tok123"
        );
    }
}

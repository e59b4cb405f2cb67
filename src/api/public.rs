//! Public Share Endpoints
//!
//! Anonymous access to a shared wishlist and the claim action.

use super::ApiError;
use crate::models::PublicWishlist;

/// `GET /api/public/{token}`: resolve a share token to its wishlist.
pub async fn fetch(token: &str) -> Result<PublicWishlist, ApiError> {
    super::get_json(&format!("/api/public/{}", token)).await
}

/// `POST /api/public/{token}/claim`: claim a claimable shared wishlist
/// into the caller's account.
pub async fn claim(token: &str) -> Result<(), ApiError> {
    super::post_empty(&format!("/api/public/{}/claim", token)).await
}

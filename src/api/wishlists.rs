//! Wishlist Endpoints
//!
//! CRUD and sharing for the signed-in user's wishlists.

use serde::Serialize;

use super::ApiError;
use crate::models::{CreateWishlist, Share, Wishlist};

#[derive(Serialize)]
struct ShareArgs {
    is_claimable: bool,
}

/// `GET /api/wishlists`: the caller's own wishlists, without items.
pub async fn fetch_mine() -> Result<Vec<Wishlist>, ApiError> {
    super::get_json("/api/wishlists").await
}

/// `POST /api/wishlists`: create a wishlist and return it.
pub async fn create(payload: &CreateWishlist) -> Result<Wishlist, ApiError> {
    super::post_json("/api/wishlists", payload).await
}

/// `GET /api/wishlists/{id}`: one wishlist with its items.
pub async fn fetch(id: &str) -> Result<Wishlist, ApiError> {
    super::get_json(&format!("/api/wishlists/{}", id)).await
}

/// `POST /api/wishlists/{id}/shares`: mint a public share link.
pub async fn create_share(id: &str, is_claimable: bool) -> Result<Share, ApiError> {
    super::post_json(
        &format!("/api/wishlists/{}/shares", id),
        &ShareArgs { is_claimable },
    )
    .await
}

//! Item Endpoints
//!
//! Adding items to a wishlist and patching existing ones.

use super::ApiError;
use crate::models::{CreateItem, UpdateItem, WishlistItem};

/// `POST /api/wishlists/{id}/items`: add an item, returning it with its
/// server-assigned id.
pub async fn add(wishlist_id: &str, payload: &CreateItem) -> Result<WishlistItem, ApiError> {
    super::post_json(&format!("/api/wishlists/{}/items", wishlist_id), payload).await
}

/// `PATCH /api/items/{id}`: update an item, returning the stored state.
pub async fn update(item_id: &str, payload: &UpdateItem) -> Result<WishlistItem, ApiError> {
    super::patch_json(&format!("/api/items/{}", item_id), payload).await
}

//! Pages
//!
//! One component per route; the active one is picked in `app.rs`.

mod dashboard;
mod home;
mod public_wishlist;
mod sso_callback;
mod wishlist_detail;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use public_wishlist::PublicWishlistPage;
pub use sso_callback::SsoCallbackPage;
pub use wishlist_detail::WishlistDetailPage;

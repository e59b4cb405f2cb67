//! Frontend Models
//!
//! Data structures matching backend entities, the request payloads built
//! from them, and the wizard draft types.

use serde::{Deserialize, Serialize};
use step_wizard::{Step, StepDraft};

/// Access token issued by the backend (login and SSO share this shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionToken {
    pub access_token: String,
    pub token_type: String,
    /// RFC 3339 timestamp, stored verbatim as issued
    pub expires_at: String,
}

/// Wishlist visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Public => "public",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "public" => Visibility::Public,
            _ => Visibility::Private,
        }
    }
}

/// Wishlist data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    /// Absent in list responses
    #[serde(default)]
    pub items: Vec<WishlistItem>,
}

impl Wishlist {
    /// Replace the item with the same id, e.g. after a PATCH. Returns false
    /// when the item is no longer present, in which case nothing changes
    /// (late responses against removed state are a no-op).
    pub fn replace_item(&mut self, updated: WishlistItem) -> bool {
        match self.items.iter_mut().find(|i| i.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }
}

/// Wishlist item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: String,
    pub title: String,
    pub link: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
    #[serde(default)]
    pub is_received: bool,
    pub received_note: Option<String>,
}

impl WishlistItem {
    /// Seed for the received-note editor: a note is only meaningful while
    /// the item is received, so anything else starts empty.
    pub fn note_seed(&self) -> String {
        if self.is_received {
            self.received_note.clone().unwrap_or_default()
        } else {
            String::new()
        }
    }
}

/// Public share handle for a wishlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub token: String,
    #[serde(default)]
    pub is_claimable: bool,
}

/// Payload of the anonymous public view
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PublicWishlist {
    pub wishlist: Wishlist,
    pub share: Option<Share>,
    pub owner_name: Option<String>,
}

// ========================
// Request Payloads
// ========================

/// `POST /api/wishlists` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateWishlist {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub visibility: Visibility,
}

/// `POST /api/wishlists/{id}/items` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `PATCH /api/items/{id}` body. The backend expects the full item, so
/// unchanged fields are copied from the current one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    pub is_received: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_note: Option<String>,
}

impl UpdateItem {
    /// Receipt change for an existing item. The note is carried only while
    /// the item becomes received; clearing receipt omits it from the wire
    /// rather than relying on the server to cascade.
    pub fn for_receipt(item: &WishlistItem, is_received: bool, note: Option<String>) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            link: item.link.clone(),
            priority: item.priority,
            is_received,
            received_note: if is_received {
                note.as_deref().and_then(trimmed_opt)
            } else {
                None
            },
        }
    }
}

// ========================
// Wizard Drafts
// ========================

/// Draft behind the create-wishlist wizard (name → description →
/// visibility/confirm)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistDraft {
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
}

impl StepDraft for WishlistDraft {
    fn validate(&self, step: Step) -> Result<(), String> {
        match step {
            Step::Name if self.name.trim().is_empty() => {
                Err("Please enter a name for this wishlist.".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl WishlistDraft {
    /// Trimmed request payload; blank optionals are dropped.
    pub fn to_request(&self) -> CreateWishlist {
        CreateWishlist {
            name: self.name.trim().to_string(),
            description: trimmed_opt(&self.description),
            visibility: self.visibility,
        }
    }
}

/// Draft behind the add-item wizard and the inline quick-add form
/// (title → link → note/confirm)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub title: String,
    pub link: String,
    pub note: String,
}

impl StepDraft for ItemDraft {
    fn validate(&self, step: Step) -> Result<(), String> {
        match step {
            Step::Name if self.title.trim().is_empty() => {
                Err("Please enter a name for this item.".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl ItemDraft {
    /// Trimmed request payload; blank optionals are dropped.
    pub fn to_request(&self) -> CreateItem {
        CreateItem {
            title: self.title.trim().to_string(),
            link: trimmed_opt(&self.link),
            description: trimmed_opt(&self.note),
        }
    }
}

/// Trim a free-text field; empty results are omitted from payloads rather
/// than sent as empty strings.
pub fn trimmed_opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, received: bool, note: Option<&str>) -> WishlistItem {
        WishlistItem {
            id: id.to_string(),
            title: format!("Item {}", id),
            link: None,
            description: None,
            priority: None,
            is_received: received,
            received_note: note.map(str::to_string),
        }
    }

    #[test]
    fn wishlist_deserializes_without_items_or_visibility() {
        let json = r#"{"id":"w1","name":"Birthday","description":null}"#;
        let wl: Wishlist = serde_json::from_str(json).expect("deserialize");
        assert_eq!(wl.name, "Birthday");
        assert_eq!(wl.visibility, Visibility::Private);
        assert!(wl.items.is_empty());
    }

    #[test]
    fn replace_item_swaps_matching_id_only() {
        let mut wl = Wishlist {
            id: "w1".to_string(),
            name: "Birthday".to_string(),
            description: None,
            visibility: Visibility::Private,
            items: vec![item("a", false, None), item("b", false, None)],
        };
        assert!(wl.replace_item(item("b", true, Some("from grandma"))));
        assert!(wl.items[1].is_received);
        assert!(!wl.items[0].is_received);
    }

    #[test]
    fn replace_item_missing_id_is_noop() {
        let mut wl = Wishlist {
            id: "w1".to_string(),
            name: "Birthday".to_string(),
            description: None,
            visibility: Visibility::Private,
            items: vec![item("a", false, None)],
        };
        assert!(!wl.replace_item(item("gone", true, None)));
        assert_eq!(wl.items.len(), 1);
        assert!(!wl.items[0].is_received);
    }

    #[test]
    fn note_seed_ignores_stale_note_on_unreceived_items() {
        // A note can linger on the wire after un-receiving; the editor must
        // not resurrect it.
        assert_eq!(item("a", false, Some("old note")).note_seed(), "");
        assert_eq!(item("a", true, Some("keep me")).note_seed(), "keep me");
        assert_eq!(item("a", true, None).note_seed(), "");
    }

    #[test]
    fn trimmed_opt_drops_blank_fields() {
        assert_eq!(trimmed_opt("  "), None);
        assert_eq!(trimmed_opt(""), None);
        assert_eq!(
            trimmed_opt(" https://example.com "),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn wishlist_draft_requires_name_on_step_one_only() {
        let draft = WishlistDraft::default();
        assert!(draft.validate(Step::Name).is_err());
        assert!(draft.validate(Step::Details).is_ok());
        assert!(draft.validate(Step::Confirm).is_ok());

        let draft = WishlistDraft {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert!(draft.validate(Step::Name).is_err());
    }

    #[test]
    fn wishlist_draft_builds_trimmed_request() {
        let draft = WishlistDraft {
            name: "  Birthday  ".to_string(),
            description: "   ".to_string(),
            visibility: Visibility::Public,
        };
        let req = draft.to_request();
        assert_eq!(req.name, "Birthday");
        assert_eq!(req.description, None);
        assert_eq!(req.visibility, Visibility::Public);
    }

    #[test]
    fn create_wishlist_omits_blank_description() {
        let req = WishlistDraft {
            name: "Birthday".to_string(),
            ..Default::default()
        }
        .to_request();
        let json = serde_json::to_value(&req).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"name": "Birthday", "visibility": "private"})
        );
    }

    #[test]
    fn item_draft_requires_title_on_step_one_only() {
        let draft = ItemDraft::default();
        assert!(draft.validate(Step::Name).is_err());
        assert!(draft.validate(Step::Details).is_ok());
        assert!(draft.validate(Step::Confirm).is_ok());
    }

    #[test]
    fn item_draft_builds_trimmed_request() {
        let draft = ItemDraft {
            title: " Lego set ".to_string(),
            link: " https://example.com/lego ".to_string(),
            note: "".to_string(),
        };
        let req = draft.to_request();
        assert_eq!(req.title, "Lego set");
        assert_eq!(req.link, Some("https://example.com/lego".to_string()));
        assert_eq!(req.description, None);

        let json = serde_json::to_value(&req).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"title": "Lego set", "link": "https://example.com/lego"})
        );
    }

    #[test]
    fn update_for_receipt_keeps_note_only_while_received() {
        let current = item("a", false, None);
        let received = UpdateItem::for_receipt(&current, true, Some(" from grandma ".to_string()));
        assert!(received.is_received);
        assert_eq!(received.received_note, Some("from grandma".to_string()));
        assert_eq!(received.title, current.title);

        let cleared = UpdateItem::for_receipt(&item("a", true, Some("old")), false, None);
        assert!(!cleared.is_received);
        assert_eq!(cleared.received_note, None);
    }

    #[test]
    fn update_for_receipt_omits_cleared_note_from_the_wire() {
        let payload = UpdateItem::for_receipt(&item("a", true, Some("old")), false, None);
        let json = serde_json::to_value(&payload).expect("serialize");
        assert!(json.get("received_note").is_none());
        assert_eq!(json.get("is_received"), Some(&serde_json::json!(false)));
    }

    #[test]
    fn update_for_receipt_drops_blank_note() {
        let payload = UpdateItem::for_receipt(&item("a", false, None), true, Some("   ".to_string()));
        assert!(payload.is_received);
        assert_eq!(payload.received_note, None);
    }
}

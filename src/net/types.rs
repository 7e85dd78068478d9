//! REST DTOs shared by the session layer, pages, and API helpers.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly (camelCase product fields,
//! snake_case profile fields) so serde round-trips stay lossless. Unknown
//! profile fields are preserved in `extra` because the persisted profile is
//! written back verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Highest numbered gallery slot a product record carries (`shoeMainImage9`).
pub const MAX_GALLERY_IMAGES: usize = 9;

/// Server-issued identity profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Login email.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    /// Staff users see the admin console.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_staff: bool,
    /// Remaining profile fields (age, city, state, hobbies, image, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// `"First Last"`, falling back to the username.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.firstname.as_deref(), self.lastname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            return self.username.clone().unwrap_or_default();
        }
        parts.join(" ")
    }

    /// Render an `extra` field as display text.
    pub fn extra_text(&self, key: &str) -> Option<String> {
        match self.extra.get(key)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_owned))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            other => Some(other.to_string()),
        }
    }
}

/// Accept `true`/`false`, `null`, and the strings `"true"`/`"false"`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => Ok(b),
        serde_json::Value::Null => Ok(false),
        serde_json::Value::String(s) => Ok(s == "true"),
        other => Err(D::Error::custom(format!("expected boolean, got {other}"))),
    }
}

/// A product record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shoe {
    pub id: u64,
    pub shoe_name: String,
    #[serde(default)]
    pub shoe_description: String,
    /// Display price; the backend sends either a formatted string or a number.
    #[serde(deserialize_with = "deserialize_price")]
    pub shoe_price: String,
    #[serde(default)]
    pub shoe_inner_description: String,
    #[serde(default)]
    pub shoe_color_name: String,
    #[serde(default)]
    pub shoe_style_name: String,
    #[serde(default)]
    pub shoe_origin_country: String,
    #[serde(default)]
    pub shoe_cover_image: Option<String>,
    #[serde(default)]
    pub shoe_main_image: Option<String>,
    /// Numbered gallery slots `shoeMainImage2` .. `shoeMainImage9` and any
    /// other fields the backend adds.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Shoe {
    /// Gallery image paths in slot order, skipping empty slots.
    pub fn gallery(&self) -> Vec<String> {
        let numbered = (2..=MAX_GALLERY_IMAGES).filter_map(|slot| {
            self.extra
                .get(&format!("shoeMainImage{slot}"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        });
        self.shoe_main_image
            .clone()
            .into_iter()
            .chain(numbered)
            .filter(|path| !path.is_empty())
            .collect()
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected price, got {other}"))),
    }
}

/// Page-number pagination envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { count: 0, next: None, previous: None, results: Vec::new() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful password login.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

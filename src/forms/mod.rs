//! Form models and validation for login, registration, and product editing.
//!
//! DESIGN
//! ======
//! Forms hold raw input strings exactly as typed. `validate` either returns
//! the trimmed payload to send or a map of field name to message, so pages
//! only decide where to render each message.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod login;
pub mod register;
pub mod shoe;

use std::collections::BTreeMap;

use crate::net::error::ApiError;

/// Validation messages keyed by form field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Multipart text fields in submission order.
pub type FormFields = Vec<(&'static str, String)>;

/// Largest accepted upload.
pub const MAX_IMAGE_BYTES: u64 = 15 * 1024 * 1024;

/// Metadata for a file picked in an `<input type="file">`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageMeta {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl ImageMeta {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    pub fn within_size_limit(&self) -> bool {
        self.size <= MAX_IMAGE_BYTES
    }
}

/// Loose `local@domain.tld` check.
pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2
}

/// Backend validation messages for the named form fields.
pub fn server_field_errors(err: &ApiError, fields: &[&'static str]) -> FieldErrors {
    fields
        .iter()
        .filter_map(|field| err.field_error(field).map(|msg| (*field, msg)))
        .collect()
}

/// Record `message` for `field` when `value` is blank. Returns the trimmed value.
pub(crate) fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, message.to_owned());
    }
    trimmed.to_owned()
}

#[cfg(feature = "hydrate")]
impl ImageMeta {
    pub fn from_file(file: &web_sys::File) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = file.size().max(0.0) as u64;
        Self { name: file.name(), size, mime: file.type_() }
    }
}

/// Files chosen in the `<input type="file">` that fired `ev`.
#[cfg(feature = "hydrate")]
pub fn input_files(ev: &leptos::ev::Event) -> Vec<web_sys::File> {
    let input = leptos::prelude::event_target::<web_sys::HtmlInputElement>(ev);
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Object URL for previewing a picked image.
#[cfg(feature = "hydrate")]
pub fn preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

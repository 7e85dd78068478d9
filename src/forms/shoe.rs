//! Product create/edit form shared by the admin screens.

#[cfg(test)]
#[path = "shoe_test.rs"]
mod shoe_test;

use super::{FieldErrors, FormFields, ImageMeta, require};
use crate::net::types::{MAX_GALLERY_IMAGES, Shoe};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShoeFormMode {
    /// New record; images are mandatory.
    Create,
    /// Existing record; images left empty keep the stored ones.
    Edit,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShoeForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub inner_description: String,
    pub color: String,
    pub style: String,
    pub origin: String,
}

/// Files picked for upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageSelection {
    pub cover: Option<ImageMeta>,
    pub main: Vec<ImageMeta>,
}

/// Multipart field name for the `index`-th gallery image (0-based).
pub fn main_image_field(index: usize) -> String {
    if index == 0 {
        "shoeMainImage".to_owned()
    } else {
        format!("shoeMainImage{}", index + 1)
    }
}

/// Strip thousands separators and spaces from a displayed price.
pub fn clean_price(raw: &str) -> String {
    raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect()
}

impl ShoeForm {
    /// Prefill from an existing record for editing.
    pub fn from_shoe(shoe: &Shoe) -> Self {
        Self {
            name: shoe.shoe_name.clone(),
            description: shoe.shoe_description.clone(),
            price: clean_price(&shoe.shoe_price),
            inner_description: shoe.shoe_inner_description.clone(),
            color: shoe.shoe_color_name.clone(),
            style: shoe.shoe_style_name.clone(),
            origin: shoe.shoe_origin_country.clone(),
        }
    }

    /// Validate text fields and image picks for `mode`.
    ///
    /// # Errors
    ///
    /// Returns per-field messages for every invalid field.
    pub fn validate(&self, mode: ShoeFormMode, images: &ImageSelection) -> Result<FormFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = require(&mut errors, "shoeName", &self.name, "Shoe name can't be empty.");
        let description = require(&mut errors, "shoeDescription", &self.description, "Shoe Details can't be empty.");
        let price = require(&mut errors, "shoePrice", &self.price, "Price can't be empty.");
        if !price.is_empty() {
            match price.parse::<f64>() {
                Ok(n) if n.is_finite() && n > 0.0 => {}
                Ok(_) => {
                    errors.insert("shoePrice", "Price must be positive".to_owned());
                }
                Err(_) => {
                    errors.insert("shoePrice", "Price must be a number".to_owned());
                }
            }
        }
        let inner = require(
            &mut errors,
            "shoeInnerDescription",
            &self.inner_description,
            "Shoe Description can't be empty.",
        );
        let color = require(&mut errors, "shoeColorName", &self.color, "Color can't be empty.");
        let style = require(&mut errors, "shoeStyleName", &self.style, "Style Name can't be empty.");
        let origin = require(&mut errors, "shoeOriginCountry", &self.origin, "Origin Country can't be empty.");

        match &images.cover {
            None if mode == ShoeFormMode::Create => {
                errors.insert("shoeCoverImage", "A cover image is required.".to_owned());
            }
            Some(cover) if !cover.within_size_limit() => {
                errors.insert("shoeCoverImage", "Image is too large (max 15MB).".to_owned());
            }
            _ => {}
        }

        if images.main.is_empty() && mode == ShoeFormMode::Create {
            errors.insert("shoeMainImage", "Upload at least one image.".to_owned());
        } else if images.main.len() > MAX_GALLERY_IMAGES {
            errors.insert("shoeMainImage", "You can upload a maximum of 9 main images.".to_owned());
        } else if images.main.iter().any(|img| !img.within_size_limit()) {
            errors.insert("shoeMainImage", "One or more images are too large (max 15MB).".to_owned());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(vec![
            ("shoeName", name),
            ("shoeDescription", description),
            ("shoePrice", price),
            ("shoeInnerDescription", inner),
            ("shoeColorName", color),
            ("shoeStyleName", style),
            ("shoeOriginCountry", origin),
        ])
    }
}

//! Account registration form.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::{FieldErrors, FormFields, ImageMeta, is_valid_email, require};

pub const STATES: [&str; 3] = ["Haryana", "Punjab", "Himachal"];
pub const CITIES: [&str; 3] = ["Panchkula", "Mohali", "Solan"];
/// `(value, label)` pairs for the hobby checkboxes.
pub const HOBBIES: [(&str, &str); 2] = [("singing", "Singing"), ("dancing", "Dancing")];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub age: String,
    pub password: String,
    pub confirmpassword: String,
    pub hobbies: Vec<String>,
    pub state: String,
    pub city: String,
    pub image: Option<ImageMeta>,
}

fn is_name(raw: &str) -> bool {
    raw.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-')
}

impl RegisterForm {
    /// Check or uncheck a hobby, keeping selection order.
    pub fn toggle_hobby(&mut self, hobby: &str, selected: bool) {
        let present = self.hobbies.iter().any(|h| h == hobby);
        if selected && !present {
            self.hobbies.push(hobby.to_owned());
        } else if !selected {
            self.hobbies.retain(|h| h != hobby);
        }
    }

    /// Validate and produce the multipart text fields (the image is attached
    /// separately by the caller).
    ///
    /// # Errors
    ///
    /// Returns per-field messages for every invalid field.
    pub fn validate(&self) -> Result<FormFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        let firstname = require(&mut errors, "firstname", &self.firstname, "Firstname can't be empty.");
        if !firstname.is_empty() && !is_name(&firstname) {
            errors.insert("firstname", "Firstname can only contain letters.".to_owned());
        }
        let lastname = require(&mut errors, "lastname", &self.lastname, "Lastname can't be empty.");
        if !lastname.is_empty() && !is_name(&lastname) {
            errors.insert("lastname", "Lastname can only contain letters.".to_owned());
        }

        let username = require(&mut errors, "username", &self.username, "Email can't be empty.");
        if !username.is_empty() && !is_valid_email(&username) {
            errors.insert("username", "Email must follow proper format.".to_owned());
        }

        let age = require(&mut errors, "age", &self.age, "Age can't be empty.");
        if !age.is_empty() {
            match age.parse::<f64>() {
                Err(_) => {
                    errors.insert("age", "Age must be a number".to_owned());
                }
                Ok(n) if n <= 0.0 => {
                    errors.insert("age", "Age must be positive".to_owned());
                }
                Ok(n) if n.fract() != 0.0 => {
                    errors.insert("age", "Age must be an integer".to_owned());
                }
                Ok(_) => {}
            }
        }

        if self.password.is_empty() {
            errors.insert("password", "Password can't be empty.".to_owned());
        }
        if self.confirmpassword.is_empty() {
            errors.insert("confirmpassword", "Confirm Password can't be empty.".to_owned());
        } else if self.confirmpassword != self.password {
            errors.insert("confirmpassword", "Passwords must match".to_owned());
        }

        if self.hobbies.is_empty() {
            errors.insert("hobbies", "Hobbies must be selected.".to_owned());
        }
        let state = require(&mut errors, "state", &self.state, "State must be selected.");
        let city = require(&mut errors, "city", &self.city, "City must be selected.");

        match &self.image {
            None => {
                errors.insert("image", "An image must be uploaded.".to_owned());
            }
            Some(image) if !image.is_image() => {
                errors.insert("image", "Please select a valid image file.".to_owned());
            }
            Some(_) => {}
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(vec![
            ("firstname", firstname),
            ("lastname", lastname),
            ("username", username),
            ("age", age),
            ("password", self.password.clone()),
            ("hobbies", self.hobbies.join(",")),
            ("state", state),
            ("city", city),
        ])
    }
}

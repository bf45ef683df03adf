use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::booking::FieldError;

/// The signed-in customer's profile, as returned by `GET /api/user`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub google_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `PATCH /api/users/{id}`. The password rides along only when
/// the customer is actually changing it.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct AccountUpdate {
    pub name: String,
    pub username: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub password: Option<String>,
}

impl AccountUpdate {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().len() < 2 {
            errors.push(FieldError {
                field: "name",
                message: "Name must be at least 2 characters".to_string(),
            });
        }

        if !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: "email",
                message: "Invalid email address".to_string(),
            });
        }

        if let Some(password) = &self.password {
            if password.len() < 6 {
                errors.push(FieldError {
                    field: "password",
                    message: "Password must be at least 6 characters".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let re = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    );
    re.unwrap().is_match(email)
}

//! User model and request/response types for registration and login

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lenient::string_or_default;

/// User document as stored in the `users` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub email: String,
    /// Argon2 PHC string, never the plaintext
    #[serde(default, deserialize_with = "string_or_default")]
    pub password: String,
}

/// Registration request. Fields are not validated; missing ones are `""`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "string_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "string_or_default")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub password: String,
}

/// Generic acknowledgment body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

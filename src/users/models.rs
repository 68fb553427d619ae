//! User Models

use mongodb::bson::oid::ObjectId;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// User document as stored in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub address: Option<String>,
    pub is_admin: Option<bool>,
    pub is_blocked: Option<bool>,
}

/// New User Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewUser {
    /// External identifier from the sign-in provider
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub address: Option<String>,
    pub is_admin: Option<bool>,
    pub is_blocked: Option<bool>,
}

impl From<NewUser> for User {
    fn from(user: NewUser) -> Self {
        Self {
            id: None,
            uid: user.uid,
            display_name: user.display_name,
            email: user.email,
            phone: user.phone,
            photo_url: user.photo_url,
            address: user.address,
            is_admin: user.is_admin,
            is_blocked: user.is_blocked,
        }
    }
}

/// User Update Model
///
/// The profile field set is fixed. An update writes every field; anything
/// the payload leaves out is cleared to null, not preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub address: Option<String>,
    pub is_admin: Option<bool>,
    pub is_blocked: Option<bool>,
}

/// Wire representation of a user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserResponse {
    /// Document id as a hex string
    #[serde(rename = "_id")]
    pub id: String,

    /// External identifier from the sign-in provider
    pub uid: String,

    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub address: Option<String>,
    pub is_admin: Option<bool>,
    pub is_blocked: Option<bool>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            uid: user.uid,
            display_name: user.display_name,
            email: user.email,
            phone: user.phone,
            photo_url: user.photo_url,
            address: user.address,
            is_admin: user.is_admin,
            is_blocked: user.is_blocked,
        }
    }
}

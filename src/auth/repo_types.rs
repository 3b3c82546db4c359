use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Biological sex, used only to pick the BMR formula branch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Registered user record held by the store.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub username: String,             // unique key
    #[serde(skip_serializing)]
    pub password_hash: String,        // Argon2 hash, not exposed in JSON
    pub age: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

use serde::{Deserialize, Serialize};

use crate::auth::repo_types::{Sex, UserProfile};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub age: u32,
    #[serde(rename = "gender", alias = "sex")]
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub username: String,
    pub age: u32,
    #[serde(rename = "gender")]
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl From<&UserProfile> for PublicUser {
    fn from(u: &UserProfile) -> Self {
        Self {
            username: u.username.clone(),
            age: u.age,
            sex: u.sex,
            weight_kg: u.weight_kg,
            height_cm: u.height_cm,
        }
    }
}

use lazy_static::lazy_static;
use regex::Regex;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest},
        password::{hash_password_blocking, verify_password_blocking},
        repo_types::UserProfile,
    },
    error::AppError,
    storage::Store,
};

const MIN_PASSWORD_LEN: usize = 8;
const MAX_AGE: u32 = 150;

/// Letters, digits, `_`, `.` and `-`; never the webhook delimiters.
pub(crate) fn is_valid_username(username: &str) -> bool {
    lazy_static! {
        static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_.-]{1,64}$").unwrap();
    }
    USERNAME_RE.is_match(username)
}

fn validate(req: &RegisterRequest) -> Result<(), AppError> {
    if !is_valid_username(&req.username) {
        return Err(AppError::Validation("Invalid username".into()));
    }
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation("Password too short".into()));
    }
    if req.age == 0 || req.age > MAX_AGE {
        return Err(AppError::Validation("Age out of range".into()));
    }
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !positive(req.weight_kg) || !positive(req.height_cm) {
        return Err(AppError::Validation(
            "Weight and height must be positive numbers".into(),
        ));
    }
    Ok(())
}

pub async fn register_user(
    store: &dyn Store,
    req: RegisterRequest,
) -> Result<UserProfile, AppError> {
    validate(&req)?;

    if store.get_user(&req.username).await?.is_some() {
        warn!(username = %req.username, "username already registered");
        return Err(AppError::Conflict("User already exists".into()));
    }

    let user = UserProfile {
        password_hash: hash_password_blocking(req.password).await?,
        username: req.username,
        age: req.age,
        sex: req.sex,
        weight_kg: req.weight_kg,
        height_cm: req.height_cm,
        created_at: OffsetDateTime::now_utc(),
    };

    // A concurrent registration may have won since the lookup above.
    if !store.put_user(user.clone()).await? {
        warn!(username = %user.username, "username already registered");
        return Err(AppError::Conflict("User already exists".into()));
    }

    info!(username = %user.username, "user registered");
    Ok(user)
}

pub async fn login_user(
    store: &dyn Store,
    req: LoginRequest,
) -> Result<UserProfile, AppError> {
    let Some(user) = store.get_user(&req.username).await? else {
        warn!(username = %req.username, "login unknown username");
        return Err(AppError::Unauthorized);
    };

    if !verify_password_blocking(req.password, user.password_hash.clone()).await? {
        warn!(username = %req.username, "login invalid password");
        return Err(AppError::Unauthorized);
    }

    info!(username = %user.username, "user logged in");
    Ok(user)
}

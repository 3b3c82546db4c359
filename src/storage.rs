use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{auth::repo_types::UserProfile, meals::repo_types::MealEntry};

/// User and meal persistence used by the handlers.
#[async_trait]
pub trait Store: Send + Sync {
    async fn get_user(&self, username: &str) -> anyhow::Result<Option<UserProfile>>;
    /// Inserts the profile with an empty meal list. Returns `false` and
    /// leaves existing data alone if the username is taken.
    async fn put_user(&self, user: UserProfile) -> anyhow::Result<bool>;
    /// Returns `false` without storing anything if the owner is unknown.
    async fn append_meal(&self, entry: MealEntry) -> anyhow::Result<bool>;
    /// Entries in insertion order, or `None` for an unknown user.
    async fn list_meals(&self, username: &str) -> anyhow::Result<Option<Vec<MealEntry>>>;
}

#[derive(Default)]
struct Tables {
    users: HashMap<String, UserProfile>,
    meals: HashMap<String, Vec<MealEntry>>,
}

/// Process-lifetime store. Everything is lost on exit.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn get_user(&self, username: &str) -> anyhow::Result<Option<UserProfile>> {
        Ok(self.inner.read().await.users.get(username).cloned())
    }

    async fn put_user(&self, user: UserProfile) -> anyhow::Result<bool> {
        let mut t = self.inner.write().await;
        if t.users.contains_key(&user.username) {
            return Ok(false);
        }
        t.meals.insert(user.username.clone(), Vec::new());
        t.users.insert(user.username.clone(), user);
        Ok(true)
    }

    async fn append_meal(&self, entry: MealEntry) -> anyhow::Result<bool> {
        let mut t = self.inner.write().await;
        if !t.users.contains_key(&entry.username) {
            return Ok(false);
        }
        t.meals
            .entry(entry.username.clone())
            .or_default()
            .push(entry);
        Ok(true)
    }

    async fn list_meals(&self, username: &str) -> anyhow::Result<Option<Vec<MealEntry>>> {
        Ok(self.inner.read().await.meals.get(username).cloned())
    }
}

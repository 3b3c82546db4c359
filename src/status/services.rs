use crate::{
    auth::repo_types::{Sex, UserProfile},
    error::AppError,
    meals::repo_types::MealEntry,
    nutrition::NutrientTotals,
    status::dto::StatusSnapshot,
    storage::Store,
};

/// Mifflin-St Jeor basal metabolic rate in kcal/day.
pub fn calc_bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Sums the totals stored on each entry; food names are not re-resolved.
pub fn compute_status(user: &UserProfile, meals: &[MealEntry]) -> StatusSnapshot {
    let bmr = calc_bmr(user.sex, user.weight_kg, user.height_cm, user.age);
    let mut consumed = NutrientTotals::default();
    for meal in meals {
        consumed += meal.totals;
    }
    StatusSnapshot {
        bmr,
        calories_consumed: consumed.calories,
        calories_remaining: bmr - consumed.calories,
        protein: consumed.protein,
        carbs: consumed.carbs,
        fat: consumed.fat,
    }
}

pub async fn user_status(
    store: &dyn Store,
    username: &str,
) -> Result<StatusSnapshot, AppError> {
    let user = store
        .get_user(username)
        .await?
        .ok_or_else(AppError::user_not_found)?;
    let meals = store.list_meals(username).await?.unwrap_or_default();
    Ok(compute_status(&user, &meals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::{services::register_user, services::tests::register_req},
        meals::{
            dto::MealLogRequest,
            repo_types::{MealItem, MealType},
            services::log_meal,
        },
        storage::InMemoryStore,
    };

    #[test]
    fn bmr_matches_formula() {
        // 650 + 1062.5 - 150 - 161
        assert_eq!(calc_bmr(Sex::Female, 65.0, 170.0, 30), 1401.5);
        // 800 + 1125 - 125 + 5
        assert_eq!(calc_bmr(Sex::Male, 80.0, 180.0, 25), 1805.0);
    }

    #[test]
    fn male_exceeds_female_by_166() {
        for (w, h, a) in [(50.0, 150.0, 20), (72.5, 181.0, 44), (120.0, 200.0, 90)] {
            let m = calc_bmr(Sex::Male, w, h, a);
            let f = calc_bmr(Sex::Female, w, h, a);
            assert!(m > f);
            assert!((m - f - 166.0).abs() < 1e-9);
        }
    }

    #[test]
    fn bmr_is_deterministic() {
        assert_eq!(
            calc_bmr(Sex::Male, 70.0, 175.0, 35),
            calc_bmr(Sex::Male, 70.0, 175.0, 35)
        );
    }

    #[tokio::test]
    async fn remaining_equals_bmr_without_meals() {
        let store = InMemoryStore::new();
        register_user(&store, register_req("alice", Sex::Female))
            .await
            .unwrap();

        let status = user_status(&store, "alice").await.unwrap();
        assert_eq!(status.bmr, 1401.5);
        assert_eq!(status.calories_consumed, 0.0);
        assert_eq!(status.calories_remaining, status.bmr);
    }

    #[tokio::test]
    async fn remaining_tracks_every_logged_meal() {
        let store = InMemoryStore::new();
        register_user(&store, register_req("alice", Sex::Female))
            .await
            .unwrap();

        let meals = [
            vec![("apple", 1.0)],
            vec![("rice", 2.0), ("chicken breast", 1.0)],
            vec![("banana", 3.0), ("nonsense", 1.0)],
        ];
        let mut expected_calories = 0.0;
        for items in meals {
            let entry = log_meal(
                &store,
                MealLogRequest {
                    username: "alice".into(),
                    meal_type: MealType::Lunch,
                    items: items
                        .into_iter()
                        .map(|(name, quantity)| MealItem {
                            name: name.into(),
                            quantity,
                        })
                        .collect(),
                },
            )
            .await
            .unwrap();
            expected_calories += entry.totals.calories;

            let status = user_status(&store, "alice").await.unwrap();
            assert_eq!(status.calories_consumed, expected_calories);
            assert_eq!(status.calories_remaining, status.bmr - expected_calories);
        }

        // 95 + 412 + 165 + 315
        assert_eq!(expected_calories, 987.0);
        let status = user_status(&store, "alice").await.unwrap();
        assert!((status.protein - (0.5 + 8.6 + 31.0 + 3.9)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn surplus_gives_negative_remaining() {
        let store = InMemoryStore::new();
        register_user(&store, register_req("alice", Sex::Female))
            .await
            .unwrap();
        log_meal(
            &store,
            MealLogRequest {
                username: "alice".into(),
                meal_type: MealType::Dinner,
                items: vec![MealItem {
                    name: "rice".into(),
                    quantity: 10.0,
                }],
            },
        )
        .await
        .unwrap();

        let status = user_status(&store, "alice").await.unwrap();
        assert!(status.calories_remaining < 0.0);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let store = InMemoryStore::new();
        let err = user_status(&store, "nobody").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}

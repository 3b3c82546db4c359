use serde::Serialize;

/// Derived on every request; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusSnapshot {
    pub bmr: f64,
    pub calories_consumed: f64,
    /// Negative when the user has eaten more than their BMR.
    pub calories_remaining: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

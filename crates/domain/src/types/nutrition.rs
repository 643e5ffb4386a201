//! Nutrition diary types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged meal. Quantities are kept as the labeled strings the user
/// entered (`"420"`, `"15g"`), matching the persisted format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub id: Uuid,
    pub meal_type: String,
    /// Display time, e.g. `"08:30 AM"`.
    pub time: String,
    pub calories: String,
    pub food_name: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
}

impl MealEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        meal_type: impl Into<String>,
        time: impl Into<String>,
        calories: impl Into<String>,
        food_name: impl Into<String>,
        protein: impl Into<String>,
        carbs: impl Into<String>,
        fats: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            meal_type: meal_type.into(),
            time: time.into(),
            calories: calories.into(),
            food_name: food_name.into(),
            protein: protein.into(),
            carbs: carbs.into(),
            fats: fats.into(),
        }
    }
}

//! Nutrition diary service

pub mod ports;

use std::sync::Arc;

use goalfuel_domain::MealEntry;
use tracing::warn;

use ports::MealRepository;

/// The diary's canonical section order.
pub const MEAL_TYPES: [&str; 4] = ["Breakfast", "Lunch", "Dinner", "Snacks"];

/// CRUD over the meal diary blob.
pub struct MealService {
    repository: Arc<dyn MealRepository>,
}

impl MealService {
    pub fn new(repository: Arc<dyn MealRepository>) -> Self {
        Self { repository }
    }

    /// Load all logged meals. A missing or unreadable blob yields an empty
    /// diary.
    pub async fn load(&self) -> Vec<MealEntry> {
        match self.repository.load_meals().await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "failed to read meal entries, starting empty");
                Vec::new()
            }
        }
    }

    /// Append a meal and persist the whole list.
    pub async fn add(&self, entries: &mut Vec<MealEntry>, entry: MealEntry) {
        entries.push(entry);
        if let Err(err) = self.repository.save_meals(entries).await {
            warn!(error = %err, "failed to persist meal entries, keeping in-memory state");
        }
    }
}

/// Group entries by meal type, sections in `MEAL_TYPES` order.
///
/// Meal types outside the canonical list keep their first-seen order
/// after the known sections. Empty sections are omitted.
pub fn grouped(entries: &[MealEntry]) -> Vec<(String, Vec<MealEntry>)> {
    let mut groups: Vec<(String, Vec<MealEntry>)> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|(meal_type, _)| *meal_type == entry.meal_type) {
            Some((_, section)) => section.push(entry.clone()),
            None => groups.push((entry.meal_type.clone(), vec![entry.clone()])),
        }
    }
    groups.sort_by_key(|(meal_type, _)| {
        MEAL_TYPES.iter().position(|known| known == meal_type).unwrap_or(MEAL_TYPES.len())
    });
    groups
}

/// Case-insensitive food-name search.
pub fn filter_by_name(entries: &[MealEntry], query: &str) -> Vec<MealEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.food_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

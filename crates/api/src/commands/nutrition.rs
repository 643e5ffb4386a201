//! Nutrition diary commands

use std::time::Instant;

use goalfuel_domain::MealEntry;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

pub async fn load_meals(ctx: &AppContext) -> Vec<MealEntry> {
    let start = Instant::now();
    let entries = ctx.meals.load().await;
    log_command_execution("nutrition::load_meals", start.elapsed(), true);
    entries
}

pub async fn add_meal(ctx: &AppContext, entries: &mut Vec<MealEntry>, entry: MealEntry) {
    let start = Instant::now();
    ctx.meals.add(entries, entry).await;
    log_command_execution("nutrition::add_meal", start.elapsed(), true);
}

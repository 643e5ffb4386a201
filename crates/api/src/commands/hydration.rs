//! Hydration commands

use std::time::Instant;

use chrono::{DateTime, Local};
use goalfuel_core::{total_consumed, AddWaterOutcome};
use goalfuel_domain::{HydrationSettings, HydrationSlot};
use uuid::Uuid;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Load today's schedule, generating it on first call of the day, and
/// (re)schedule the matching reminders.
pub async fn load_schedule(ctx: &AppContext) -> Vec<HydrationSlot> {
    let start = Instant::now();
    let slots = ctx.hydration.load().await;
    log_command_execution("hydration::load_schedule", start.elapsed(), true);
    slots
}

/// Mark the given slot completed. Unknown ids are ignored.
pub async fn mark_slot_complete(ctx: &AppContext, slots: &mut [HydrationSlot], id: Uuid) {
    let start = Instant::now();
    ctx.hydration.mark_complete(slots, id).await;
    log_command_execution("hydration::mark_slot_complete", start.elapsed(), true);
}

/// Quick-add intake. `TooEarly` is an ordinary outcome, not a failure.
pub async fn add_water(ctx: &AppContext, slots: &mut Vec<HydrationSlot>) -> AddWaterOutcome {
    let start = Instant::now();
    let outcome = ctx.hydration.add_water(slots).await;
    log_command_execution("hydration::add_water", start.elapsed(), true);
    outcome
}

/// Liters consumed so far against the configured daily goal.
pub async fn daily_progress(ctx: &AppContext, slots: &[HydrationSlot]) -> (f64, f64) {
    let start = Instant::now();
    let consumed = total_consumed(slots);
    let goal = ctx.hydration.load_settings().await.daily_goal;
    log_command_execution("hydration::daily_progress", start.elapsed(), true);
    (consumed, goal)
}

/// Next upcoming slot time, if any remains today.
pub fn next_reminder_time(ctx: &AppContext, slots: &[HydrationSlot]) -> Option<DateTime<Local>> {
    ctx.hydration.next_reminder_time(slots)
}

pub async fn get_settings(ctx: &AppContext) -> HydrationSettings {
    let start = Instant::now();
    let settings = ctx.hydration.load_settings().await;
    log_command_execution("hydration::get_settings", start.elapsed(), true);
    settings
}

/// Persist settings and reschedule reminders so the new lead time and
/// sound preference take effect immediately.
pub async fn update_settings(
    ctx: &AppContext,
    settings: &HydrationSettings,
    slots: &[HydrationSlot],
) {
    let start = Instant::now();
    ctx.hydration.save_settings(settings).await;
    ctx.hydration.reschedule_reminders(slots).await;
    log_command_execution("hydration::update_settings", start.elapsed(), true);
}

//! Daily hydration schedule generation
//!
//! Produces the fixed set of reminder slots for one calendar day. Generation
//! runs at most once per day: callers only invoke it when the stored list
//! for the day is empty (first launch of the day, or after a reset).

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use goalfuel_domain::constants::{LARGE_SLOT_ML, SLOT_HOURS, SMALL_SLOT_ML};
use goalfuel_domain::HydrationSlot;

use super::ports::CompletionBackfill;

/// Generates the day's slot set from the fixed hour list.
pub struct ScheduleGenerator {
    backfill: Arc<dyn CompletionBackfill>,
}

impl ScheduleGenerator {
    pub fn new(backfill: Arc<dyn CompletionBackfill>) -> Self {
        Self { backfill }
    }

    /// Build the slots for `day`.
    ///
    /// Even hours get the large quantity, odd hours the small one. Slots
    /// whose time has already passed at `now` are seeded via the injected
    /// backfill; future slots start incomplete. No persistence happens here.
    pub fn generate_daily_slots(
        &self,
        day: NaiveDate,
        now: DateTime<Local>,
    ) -> Vec<HydrationSlot> {
        let mut slots = Vec::with_capacity(SLOT_HOURS.len());

        for hour in SLOT_HOURS {
            let Some(naive) = day.and_hms_opt(hour, 0, 0) else {
                continue;
            };
            // DST gaps can make a local hour nonexistent; such slots are
            // skipped, matching calendar-based construction.
            let Some(scheduled_time) = Local.from_local_datetime(&naive).earliest() else {
                continue;
            };

            let amount = if hour % 2 == 0 { LARGE_SLOT_ML } else { SMALL_SLOT_ML };
            let mut slot = HydrationSlot::scheduled(amount, scheduled_time);
            if scheduled_time < now {
                slot.is_completed = self.backfill.seed_completed();
            }
            slots.push(slot);
        }

        slots
    }
}

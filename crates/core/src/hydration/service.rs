//! Hydration state engine
//!
//! Owns the day's slot list lifecycle: loading and filtering to "today",
//! first-launch generation, completion flips, the quick-add intake policy
//! and reminder rescheduling. All I/O goes through the injected ports.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local};
use goalfuel_domain::constants::REMINDER_TITLE;
use goalfuel_domain::constants::{EARLY_INTAKE_CUTOFF_MINUTES, QUICK_ADD_WINDOW_SECONDS};
use goalfuel_domain::{HydrationSettings, HydrationSlot, Result};
use tracing::{debug, warn};
use uuid::Uuid;

use super::ports::{
    Clock, CompletionBackfill, NotificationGateway, ReminderRequest, SettingsRepository,
    SlotRepository,
};
use super::schedule::ScheduleGenerator;

/// Tunable thresholds for the quick-add intake policy.
///
/// These approximate "don't log early for a slot far in the future" while
/// tolerating intake slightly off the nominal time. They are heuristics,
/// not domain law.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    /// Reject quick-add when the nearest pending slot is more than this
    /// many minutes away.
    pub early_cutoff_minutes: i64,
    /// A pending slot within this many seconds of now (either direction)
    /// is fulfilled by quick-add instead of creating an ad-hoc record.
    pub quick_add_window_seconds: i64,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            early_cutoff_minutes: EARLY_INTAKE_CUTOFF_MINUTES,
            quick_add_window_seconds: QUICK_ADD_WINDOW_SECONDS,
        }
    }
}

/// Result of the quick-add action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddWaterOutcome {
    /// Intake was recorded (an existing slot fulfilled or an ad-hoc one
    /// appended).
    Accepted,
    /// Too far ahead of the next scheduled intake; nothing changed. The
    /// wait is surfaced to the user as an informational message.
    TooEarly { wait_minutes: i64 },
}

/// Hydration state engine over injected storage, clock and notifications.
pub struct HydrationService {
    slots: Arc<dyn SlotRepository>,
    settings: Arc<dyn SettingsRepository>,
    notifications: Arc<dyn NotificationGateway>,
    clock: Arc<dyn Clock>,
    generator: ScheduleGenerator,
    policy: IntakePolicy,
}

impl HydrationService {
    pub fn new(
        slots: Arc<dyn SlotRepository>,
        settings: Arc<dyn SettingsRepository>,
        notifications: Arc<dyn NotificationGateway>,
        clock: Arc<dyn Clock>,
        backfill: Arc<dyn CompletionBackfill>,
    ) -> Self {
        Self {
            slots,
            settings,
            notifications,
            clock,
            generator: ScheduleGenerator::new(backfill),
            policy: IntakePolicy::default(),
        }
    }

    /// Override the intake policy thresholds.
    pub fn with_policy(mut self, policy: IntakePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Load today's slots, generating the daily schedule when none exist.
    ///
    /// "Today" is local calendar-day equality, not a rolling 24 h window.
    /// A failed read is treated as no prior data. Reminders are rescheduled
    /// for the resulting list.
    pub async fn load(&self) -> Vec<HydrationSlot> {
        let now = self.clock.now();
        let stored = match self.slots.load_slots().await {
            Ok(slots) => slots,
            Err(err) => {
                warn!(error = %err, "failed to read stored hydration slots, starting empty");
                Vec::new()
            }
        };

        let today = now.date_naive();
        let mut todays: Vec<HydrationSlot> = stored
            .into_iter()
            .filter(|slot| slot.scheduled_time.date_naive() == today)
            .collect();

        if todays.is_empty() {
            debug!(%today, "no slots for today, generating daily schedule");
            todays = self.generator.generate_daily_slots(today, now);
            self.persist(&todays).await;
        }

        self.reschedule_reminders(&todays).await;
        todays
    }

    /// Flip a slot to completed. Absent ids are a no-op; marking an
    /// already-completed slot changes nothing observable.
    pub async fn mark_complete(&self, slots: &mut [HydrationSlot], id: Uuid) {
        let Some(slot) = slots.iter_mut().find(|slot| slot.id == id) else {
            return;
        };
        slot.is_completed = true;

        self.persist(slots).await;
        self.reschedule_reminders(slots).await;
    }

    /// Apply the quick-add intake policy.
    ///
    /// The two checks run in this exact order and are deliberately
    /// asymmetric: the early cutoff only inspects the nearest future
    /// pending slot, while the fulfilment window looks both directions.
    pub async fn add_water(&self, slots: &mut Vec<HydrationSlot>) -> AddWaterOutcome {
        let now = self.clock.now();

        if let Some(next_pending) = slots
            .iter()
            .filter(|slot| !slot.is_completed && slot.scheduled_time > now)
            .min_by_key(|slot| slot.scheduled_time)
        {
            let wait_minutes = (next_pending.scheduled_time - now).num_seconds() / 60 + 1;
            if wait_minutes > self.policy.early_cutoff_minutes {
                return AddWaterOutcome::TooEarly { wait_minutes };
            }
        }

        let window = self.policy.quick_add_window_seconds;
        if let Some(slot) = slots.iter_mut().find(|slot| {
            !slot.is_completed && (slot.scheduled_time - now).num_seconds().abs() < window
        }) {
            slot.is_completed = true;
        } else {
            slots.push(HydrationSlot::ad_hoc(now));
        }

        self.persist(slots).await;
        self.reschedule_reminders(slots).await;
        AddWaterOutcome::Accepted
    }

    /// Next upcoming reminder time for the given slots, if any.
    pub fn next_reminder_time(&self, slots: &[HydrationSlot]) -> Option<DateTime<Local>> {
        next_reminder(slots, self.clock.now())
    }

    /// Load settings, falling back to defaults when unreadable.
    pub async fn load_settings(&self) -> HydrationSettings {
        match self.settings.load_settings().await {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, "failed to read hydration settings, using defaults");
                HydrationSettings::default()
            }
        }
    }

    /// Persist settings. Write failures are logged and dropped; the
    /// in-memory value stays authoritative.
    pub async fn save_settings(&self, settings: &HydrationSettings) {
        if let Err(err) = self.settings.save_settings(settings).await {
            warn!(error = %err, "failed to persist hydration settings");
        }
    }

    /// Cancel and re-register every reminder for the given slots.
    ///
    /// Permission denial and gateway failures degrade silently; reminders
    /// are best-effort.
    pub async fn reschedule_reminders(&self, slots: &[HydrationSlot]) {
        if let Err(err) = self.try_reschedule(slots).await {
            warn!(error = %err, "failed to reschedule hydration reminders");
        }
    }

    async fn try_reschedule(&self, slots: &[HydrationSlot]) -> Result<()> {
        let now = self.clock.now();

        self.notifications.cancel_all().await?;
        if !self.notifications.request_permission().await? {
            debug!("notification permission denied, skipping reminder scheduling");
            return Ok(());
        }

        let settings = self.load_settings().await;
        let lead = Duration::minutes(i64::from(settings.reminder_time));

        let mut upcoming: Vec<&HydrationSlot> = slots
            .iter()
            .filter(|slot| !slot.is_completed && slot.scheduled_time > now)
            .collect();
        upcoming.sort_by_key(|slot| slot.scheduled_time);

        for slot in upcoming {
            let fire_at = slot.scheduled_time - lead;
            if fire_at <= now {
                continue;
            }
            self.notifications
                .schedule(ReminderRequest {
                    id: slot.id,
                    fire_at,
                    title: REMINDER_TITLE.to_string(),
                    body: format!("Time to drink {} of water!", slot.amount),
                    sound: settings.sound_notifications,
                })
                .await?;
        }

        Ok(())
    }

    async fn persist(&self, slots: &[HydrationSlot]) {
        if let Err(err) = self.slots.save_slots(slots).await {
            warn!(error = %err, "failed to persist hydration slots, keeping in-memory state");
        }
    }
}

/// Total liters consumed: the sum over completed slots of their parsed
/// amounts. Unparsable labels are skipped.
pub fn total_consumed(slots: &[HydrationSlot]) -> f64 {
    slots
        .iter()
        .filter(|slot| slot.is_completed)
        .filter_map(HydrationSlot::amount_liters)
        .sum()
}

/// Minimum scheduled time strictly after `now` among incomplete slots.
pub fn next_reminder(slots: &[HydrationSlot], now: DateTime<Local>) -> Option<DateTime<Local>> {
    slots
        .iter()
        .filter(|slot| !slot.is_completed && slot.scheduled_time > now)
        .map(|slot| slot.scheduled_time)
        .min()
}

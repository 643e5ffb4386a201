//! Hydration tracking types
//!
//! `HydrationSlot` is one scheduled or ad-hoc intake record. The persisted
//! JSON field names (`time`, `isCompleted`, `dailyGoal`, ...) are kept
//! wire-compatible with the data already on user devices.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    DEFAULT_DAILY_GOAL_LITERS, DEFAULT_REMINDER_LEAD_MINUTES, OVERDUE_GRACE_SECONDS,
    SMALL_SLOT_ML,
};

/// One hydration intake record, scheduled or ad hoc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationSlot {
    pub id: Uuid,
    /// Labeled quantity, e.g. `"300ml"` or `"500ml"`.
    pub amount: String,
    #[serde(rename = "time")]
    pub scheduled_time: DateTime<Local>,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl HydrationSlot {
    /// Create a slot planned for `scheduled_time`, initially incomplete.
    pub fn scheduled(amount_ml: u32, scheduled_time: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount: format_amount(amount_ml),
            scheduled_time,
            is_completed: false,
        }
    }

    /// Create an ad-hoc slot at `now`, already completed (quick-add action).
    pub fn ad_hoc(now: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount: format_amount(SMALL_SLOT_ML),
            scheduled_time: now,
            is_completed: true,
        }
    }

    /// Incomplete and more than one hour past its scheduled time.
    pub fn is_overdue(&self, now: DateTime<Local>) -> bool {
        !self.is_completed
            && now > self.scheduled_time + Duration::seconds(OVERDUE_GRACE_SECONDS)
    }

    /// The scheduled time has arrived.
    pub fn is_active(&self, now: DateTime<Local>) -> bool {
        now >= self.scheduled_time
    }

    /// Parse the labeled amount into liters.
    ///
    /// Takes the numeric magnitude before the `ml` suffix and divides by
    /// 1000. Returns `None` for unparsable labels, which callers skip.
    pub fn amount_liters(&self) -> Option<f64> {
        let magnitude = self.amount.split("ml").next()?;
        magnitude.trim().parse::<f64>().ok().map(|ml| ml / 1000.0)
    }
}

/// Render a milliliter quantity as the stored label.
pub fn format_amount(amount_ml: u32) -> String {
    format!("{amount_ml}ml")
}

/// Per-installation hydration settings, stored as a single blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationSettings {
    /// Daily intake goal in liters.
    #[serde(rename = "dailyGoal", default = "default_daily_goal")]
    pub daily_goal: f64,
    /// Minutes before a slot's scheduled time at which a reminder fires.
    #[serde(rename = "reminderTime", default = "default_reminder_lead")]
    pub reminder_time: u32,
    #[serde(rename = "soundNotifications", default = "default_true")]
    pub sound_notifications: bool,
    #[serde(rename = "vibrationEnabled", default = "default_true")]
    pub vibration_enabled: bool,
}

impl Default for HydrationSettings {
    fn default() -> Self {
        Self {
            daily_goal: DEFAULT_DAILY_GOAL_LITERS,
            reminder_time: DEFAULT_REMINDER_LEAD_MINUTES,
            sound_notifications: true,
            vibration_enabled: true,
        }
    }
}

fn default_daily_goal() -> f64 {
    DEFAULT_DAILY_GOAL_LITERS
}

fn default_reminder_lead() -> u32 {
    DEFAULT_REMINDER_LEAD_MINUTES
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 12, hour, minute, 0).unwrap()
    }

    #[test]
    fn overdue_requires_more_than_one_hour() {
        let slot = HydrationSlot::scheduled(300, at(10, 0));

        assert!(!slot.is_overdue(at(10, 59)));
        assert!(!slot.is_overdue(at(11, 0)));
        assert!(slot.is_overdue(at(11, 1)));
    }

    #[test]
    fn completed_slot_is_never_overdue() {
        let mut slot = HydrationSlot::scheduled(300, at(10, 0));
        slot.is_completed = true;

        assert!(!slot.is_overdue(at(23, 0)));
    }

    #[test]
    fn active_at_scheduled_time() {
        let slot = HydrationSlot::scheduled(500, at(10, 0));

        assert!(!slot.is_active(at(9, 59)));
        assert!(slot.is_active(at(10, 0)));
        assert!(slot.is_active(at(10, 1)));
    }

    #[test]
    fn amount_liters_parses_label() {
        let slot = HydrationSlot::scheduled(500, at(10, 0));
        assert_eq!(slot.amount_liters(), Some(0.5));

        let ad_hoc = HydrationSlot::ad_hoc(at(10, 0));
        assert_eq!(ad_hoc.amount_liters(), Some(0.3));
    }

    #[test]
    fn amount_liters_skips_garbage() {
        let mut slot = HydrationSlot::scheduled(500, at(10, 0));
        slot.amount = "a glass".into();
        assert_eq!(slot.amount_liters(), None);
    }

    #[test]
    fn settings_defaults() {
        let settings = HydrationSettings::default();
        assert_eq!(settings.daily_goal, 3.5);
        assert_eq!(settings.reminder_time, 15);
        assert!(settings.sound_notifications);
        assert!(settings.vibration_enabled);
    }
}

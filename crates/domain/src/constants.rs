//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Daily hydration schedule
pub const SLOT_HOURS: [u32; 9] = [7, 8, 10, 12, 14, 16, 18, 20, 22];
pub const LARGE_SLOT_ML: u32 = 500;
pub const SMALL_SLOT_ML: u32 = 300;

// Intake policy defaults (minutes / seconds)
pub const EARLY_INTAKE_CUTOFF_MINUTES: i64 = 5;
pub const QUICK_ADD_WINDOW_SECONDS: i64 = 1800;
pub const OVERDUE_GRACE_SECONDS: i64 = 3600;

// Hydration settings defaults
pub const DEFAULT_DAILY_GOAL_LITERS: f64 = 3.5;
pub const DEFAULT_REMINDER_LEAD_MINUTES: u32 = 15;

// Persisted blob keys (wire-compatible with the original app data)
pub const KEY_HYDRATION_ENTRIES: &str = "hydrationEntries";
pub const KEY_HYDRATION_SETTINGS: &str = "hydrationSettings";
pub const KEY_MEAL_ENTRIES: &str = "mealEntries";
pub const KEY_SAVED_TRAININGS: &str = "savedTrainings";
pub const KEY_ONBOARDING_COMPLETED: &str = "isOnboardingCompleted";

// Reminder notification content
pub const REMINDER_TITLE: &str = "Hydration Reminder";

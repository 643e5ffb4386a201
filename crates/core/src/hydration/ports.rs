//! Port interfaces for the hydration engine
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use goalfuel_domain::{HydrationSettings, HydrationSlot, Result};
use uuid::Uuid;

/// Trait for persisting the day's hydration slots.
///
/// Lists are saved wholesale on every mutation; there is no partial update.
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Load all stored slots. A missing or unreadable blob yields an empty
    /// list, never an error the user sees.
    async fn load_slots(&self) -> Result<Vec<HydrationSlot>>;

    /// Overwrite the stored slot list.
    async fn save_slots(&self, slots: &[HydrationSlot]) -> Result<()>;
}

/// Trait for persisting the singleton hydration settings blob.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load settings, falling back to defaults when nothing is stored.
    async fn load_settings(&self) -> Result<HydrationSettings>;

    /// Overwrite the stored settings.
    async fn save_settings(&self, settings: &HydrationSettings) -> Result<()>;
}

/// Wall-clock source, injectable so tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Seeding policy for slots already in the past at generation time.
///
/// Production uses a 50% random choice to paint a plausible history on
/// first launch; tests inject a fixed answer.
pub trait CompletionBackfill: Send + Sync {
    fn seed_completed(&self) -> bool;
}

/// One reminder to be delivered by the platform notification center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    /// Keyed by the slot id so rescheduling replaces, never duplicates.
    pub id: Uuid,
    pub fire_at: DateTime<Local>,
    pub title: String,
    pub body: String,
    pub sound: bool,
}

/// Trait over the platform's local notification scheduling.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Ask for notification permission. `false` means reminders silently
    /// degrade to nothing.
    async fn request_permission(&self) -> Result<bool>;

    /// Drop every pending reminder unconditionally.
    async fn cancel_all(&self) -> Result<()>;

    /// Register one reminder.
    async fn schedule(&self, request: ReminderRequest) -> Result<()>;
}

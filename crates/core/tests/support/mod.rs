//! Mock port implementations for testing
//!
//! Provides in-memory mocks for the hydration engine's ports, enabling
//! deterministic unit tests without storage or platform dependencies.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use goalfuel_core::{
    Clock, CompletionBackfill, NotificationGateway, ReminderRequest, SettingsRepository,
    SlotRepository,
};
use goalfuel_domain::{
    GoalFuelError, HydrationSettings, HydrationSlot, Result as DomainResult,
};
use parking_lot::Mutex;

/// In-memory `SlotRepository` recording every save.
#[derive(Default)]
pub struct MemorySlotRepository {
    slots: Mutex<Vec<HydrationSlot>>,
    save_count: Mutex<usize>,
}

impl MemorySlotRepository {
    pub fn new(slots: Vec<HydrationSlot>) -> Self {
        Self { slots: Mutex::new(slots), save_count: Mutex::new(0) }
    }

    pub fn stored(&self) -> Vec<HydrationSlot> {
        self.slots.lock().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.save_count.lock()
    }
}

#[async_trait]
impl SlotRepository for MemorySlotRepository {
    async fn load_slots(&self) -> DomainResult<Vec<HydrationSlot>> {
        Ok(self.slots.lock().clone())
    }

    async fn save_slots(&self, slots: &[HydrationSlot]) -> DomainResult<()> {
        *self.slots.lock() = slots.to_vec();
        *self.save_count.lock() += 1;
        Ok(())
    }
}

/// `SlotRepository` whose reads always fail, for degradation tests.
pub struct FailingSlotRepository;

#[async_trait]
impl SlotRepository for FailingSlotRepository {
    async fn load_slots(&self) -> DomainResult<Vec<HydrationSlot>> {
        Err(GoalFuelError::Storage("disk unavailable".into()))
    }

    async fn save_slots(&self, _slots: &[HydrationSlot]) -> DomainResult<()> {
        Err(GoalFuelError::Storage("disk unavailable".into()))
    }
}

/// In-memory `SettingsRepository`.
#[derive(Default)]
pub struct MemorySettingsRepository {
    settings: Mutex<Option<HydrationSettings>>,
}

impl MemorySettingsRepository {
    pub fn with_settings(settings: HydrationSettings) -> Self {
        Self { settings: Mutex::new(Some(settings)) }
    }
}

#[async_trait]
impl SettingsRepository for MemorySettingsRepository {
    async fn load_settings(&self) -> DomainResult<HydrationSettings> {
        Ok(self.settings.lock().clone().unwrap_or_default())
    }

    async fn save_settings(&self, settings: &HydrationSettings) -> DomainResult<()> {
        *self.settings.lock() = Some(settings.clone());
        Ok(())
    }
}

/// Fixed wall clock.
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Backfill returning a fixed answer.
pub struct FixedBackfill(pub bool);

impl CompletionBackfill for FixedBackfill {
    fn seed_completed(&self) -> bool {
        self.0
    }
}

/// Gateway recording scheduled reminders and cancel calls.
pub struct RecordingGateway {
    granted: bool,
    pending: Mutex<Vec<ReminderRequest>>,
    cancel_count: Mutex<usize>,
}

impl RecordingGateway {
    pub fn granted() -> Arc<Self> {
        Arc::new(Self { granted: true, pending: Mutex::new(Vec::new()), cancel_count: Mutex::new(0) })
    }

    pub fn denied() -> Arc<Self> {
        Arc::new(Self { granted: false, pending: Mutex::new(Vec::new()), cancel_count: Mutex::new(0) })
    }

    pub fn pending(&self) -> Vec<ReminderRequest> {
        self.pending.lock().clone()
    }

    pub fn cancel_count(&self) -> usize {
        *self.cancel_count.lock()
    }
}

#[async_trait]
impl NotificationGateway for RecordingGateway {
    async fn request_permission(&self) -> DomainResult<bool> {
        Ok(self.granted)
    }

    async fn cancel_all(&self) -> DomainResult<()> {
        self.pending.lock().clear();
        *self.cancel_count.lock() += 1;
        Ok(())
    }

    async fn schedule(&self, request: ReminderRequest) -> DomainResult<()> {
        self.pending.lock().push(request);
        Ok(())
    }
}

/// Local time helper for a fixed test date.
pub fn at(hour: u32, minute: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 6, 12, hour, minute, 0).unwrap()
}

/// An incomplete slot at the given time.
pub fn slot_at(hour: u32, minute: u32, amount_ml: u32) -> HydrationSlot {
    HydrationSlot::scheduled(amount_ml, at(hour, minute))
}

/// A completed slot at the given time.
pub fn completed_slot_at(hour: u32, minute: u32, amount_ml: u32) -> HydrationSlot {
    let mut slot = slot_at(hour, minute, amount_ml);
    slot.is_completed = true;
    slot
}

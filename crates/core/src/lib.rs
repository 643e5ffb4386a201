//! # GoalFuel Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The hydration schedule generator and state engine
//! - Nutrition diary and training catalog services
//! - The workout countdown state machine
//! - The reset coordinator and its event bus
//! - Port/adapter interfaces (traits) for storage, clock and notifications
//!
//! ## Architecture Principles
//! - Only depends on `goalfuel-domain`
//! - No file, platform or notification code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod hydration;
pub mod nutrition;
pub mod reset;
pub mod timer;
pub mod training;

// Re-export specific items to avoid ambiguity
pub use hydration::ports::{
    Clock, CompletionBackfill, NotificationGateway, ReminderRequest, SettingsRepository,
    SlotRepository,
};
pub use hydration::schedule::ScheduleGenerator;
pub use hydration::service::{next_reminder, total_consumed, AddWaterOutcome, HydrationService, IntakePolicy};
pub use nutrition::ports::MealRepository;
pub use nutrition::MealService;
pub use reset::events::{AppEvent, EventBus};
pub use reset::ports::DomainStore;
pub use reset::ResetService;
pub use timer::{Countdown, TimerTick};
pub use training::ports::TrainingRepository;
pub use training::TrainingService;

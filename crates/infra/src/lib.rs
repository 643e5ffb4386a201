//! # GoalFuel Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The file-backed JSON blob store and repository implementations
//! - The in-process local notification center
//! - The system clock and random completion backfill
//! - The tokio-driven workout countdown timer
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `goalfuel-core`
//! - Depends on `goalfuel-domain` and `goalfuel-core`
//! - Contains all "impure" code (file I/O, time, randomness)

pub mod backfill;
pub mod clock;
pub mod config;
pub mod errors;
pub mod notifications;
pub mod scheduling;
pub mod storage;

// Re-export commonly used items
pub use backfill::RandomBackfill;
pub use clock::SystemClock;
pub use config::AppConfig;
pub use errors::InfraError;
pub use notifications::LocalNotificationCenter;
pub use scheduling::WorkoutTimer;
pub use storage::{
    FileBlobStore, FileMealRepository, FileSettingsRepository, FileSlotRepository,
    FileTrainingRepository, OnboardingFlag,
};

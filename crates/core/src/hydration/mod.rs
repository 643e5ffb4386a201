//! Hydration scheduling and state engine

pub mod ports;
pub mod schedule;
pub mod service;

pub use schedule::ScheduleGenerator;
pub use service::{AddWaterOutcome, HydrationService, IntakePolicy};

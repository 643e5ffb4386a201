//! # GoalFuel Domain
//!
//! Business domain types and models for GoalFuel.
//!
//! This crate contains:
//! - Domain data types (HydrationSlot, MealEntry, TrainingProgram, ...)
//! - Domain error types and Result definitions
//! - Domain constants (schedule hours, policy thresholds, storage keys)
//!
//! ## Architecture
//! - No dependencies on other GoalFuel crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;

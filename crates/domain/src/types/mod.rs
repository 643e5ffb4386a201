//! Domain data types

pub mod hydration;
pub mod nutrition;
pub mod training;

pub use hydration::{HydrationSettings, HydrationSlot};
pub use nutrition::MealEntry;
pub use training::TrainingProgram;

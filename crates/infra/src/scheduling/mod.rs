//! Background task lifecycles

pub mod workout_timer;

pub use workout_timer::WorkoutTimer;

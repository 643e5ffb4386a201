//! # GoalFuel App
//!
//! Composition layer: wires the infrastructure adapters into the core
//! services and exposes the command surface a UI shell calls into.

pub mod commands;
pub mod context;
pub mod utils;

pub use context::AppContext;

//! Command surface for the UI shell
//!
//! Thin wrappers over the core services: each command resolves its
//! dependencies from the context, executes, and logs the outcome with
//! structured fields.

pub mod hydration;
pub mod nutrition;
pub mod onboarding;
pub mod reset;
pub mod training;

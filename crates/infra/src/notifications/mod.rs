//! Local notification delivery

pub mod center;

pub use center::LocalNotificationCenter;

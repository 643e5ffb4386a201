//! System wall clock

use chrono::{DateTime, Local};
use goalfuel_core::Clock;

/// Production clock reading local wall time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

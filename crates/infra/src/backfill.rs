//! Random completion backfill
//!
//! On first launch the day's past slots are seeded with a coin flip so the
//! history view does not start out uniformly empty.

use goalfuel_core::CompletionBackfill;
use rand::Rng;

/// 50/50 random seeding for past slots.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomBackfill;

impl CompletionBackfill for RandomBackfill {
    fn seed_completed(&self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }
}

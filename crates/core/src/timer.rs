//! Workout countdown state machine
//!
//! Pure seconds-based countdown; the one-second drive loop lives in the
//! infrastructure layer so this stays deterministic under test.

/// Result of advancing the countdown by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    Running { remaining_seconds: u32 },
    Finished,
}

/// Countdown over a fixed workout duration, with pause/resume.
#[derive(Debug, Clone)]
pub struct Countdown {
    duration_seconds: u32,
    remaining_seconds: u32,
    paused: bool,
}

impl Countdown {
    pub fn new(duration_seconds: u32) -> Self {
        Self { duration_seconds, remaining_seconds: duration_seconds, paused: false }
    }

    /// Advance one second. Paused countdowns hold their value.
    pub fn tick(&mut self) -> TimerTick {
        if self.paused {
            return TimerTick::Running { remaining_seconds: self.remaining_seconds };
        }
        if self.remaining_seconds > 1 {
            self.remaining_seconds -= 1;
            TimerTick::Running { remaining_seconds: self.remaining_seconds }
        } else {
            self.remaining_seconds = 0;
            TimerTick::Finished
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// `h:mm:ss` when an hour or more remains, `mm:ss` otherwise.
    pub fn formatted_remaining(&self) -> String {
        let hours = self.remaining_seconds / 3600;
        let minutes = (self.remaining_seconds % 3600) / 60;
        let seconds = self.remaining_seconds % 60;
        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes:02}:{seconds:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_finished() {
        let mut countdown = Countdown::new(3);

        assert_eq!(countdown.tick(), TimerTick::Running { remaining_seconds: 2 });
        assert_eq!(countdown.tick(), TimerTick::Running { remaining_seconds: 1 });
        assert_eq!(countdown.tick(), TimerTick::Finished);
        assert!(countdown.is_finished());
    }

    #[test]
    fn paused_ticks_hold_the_value() {
        let mut countdown = Countdown::new(10);
        countdown.tick();
        countdown.toggle_pause();

        assert_eq!(countdown.tick(), TimerTick::Running { remaining_seconds: 9 });
        assert_eq!(countdown.tick(), TimerTick::Running { remaining_seconds: 9 });

        countdown.toggle_pause();
        assert_eq!(countdown.tick(), TimerTick::Running { remaining_seconds: 8 });
    }

    #[test]
    fn finished_stays_finished() {
        let mut countdown = Countdown::new(1);
        assert_eq!(countdown.tick(), TimerTick::Finished);
        assert_eq!(countdown.tick(), TimerTick::Finished);
        assert_eq!(countdown.remaining_seconds(), 0);
    }

    #[test]
    fn formats_hours_only_when_needed() {
        assert_eq!(Countdown::new(3665).formatted_remaining(), "1:01:05");
        assert_eq!(Countdown::new(65).formatted_remaining(), "01:05");
        assert_eq!(Countdown::new(0).formatted_remaining(), "00:00");
    }
}

//! Loading Progress
//!
//! Fixed-step progress sequence shown before the first fetch.

pub const PROGRESS_COMPLETE: u8 = 100;

/// Circumference of the progress ring (r = 40)
pub const RING_CIRCUMFERENCE: f64 = 251.2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    value: u8,
}

/// Result of advancing the sequence by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Advanced(u8),
    /// Reached 100 on this tick
    Completed,
    /// Already at 100 before this tick
    Idle,
}

impl Progress {
    pub fn value(self) -> u8 {
        self.value
    }

    pub fn is_complete(self) -> bool {
        self.value >= PROGRESS_COMPLETE
    }

    /// Advance by `step` (at least 1), clamped at 100
    pub fn advance(&mut self, step: u8) -> Tick {
        if self.is_complete() {
            return Tick::Idle;
        }
        self.value = self.value.saturating_add(step.max(1)).min(PROGRESS_COMPLETE);
        if self.is_complete() {
            Tick::Completed
        } else {
            Tick::Advanced(self.value)
        }
    }

    /// `stroke-dashoffset` for the ring at the current value
    pub fn dash_offset(self) -> f64 {
        RING_CIRCUMFERENCE - RING_CIRCUMFERENCE * f64::from(self.value) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_steps_of_25_complete() {
        let mut progress = Progress::default();
        assert_eq!(progress.advance(25), Tick::Advanced(25));
        assert_eq!(progress.advance(25), Tick::Advanced(50));
        assert_eq!(progress.advance(25), Tick::Advanced(75));
        assert_eq!(progress.advance(25), Tick::Completed);
        assert_eq!(progress.value(), 100);
    }

    #[test]
    fn test_completes_once() {
        let mut progress = Progress::default();
        for _ in 0..4 {
            progress.advance(25);
        }
        assert_eq!(progress.advance(25), Tick::Idle);
        assert_eq!(progress.advance(25), Tick::Idle);
        assert_eq!(progress.value(), 100);
    }

    #[test]
    fn test_uneven_step_clamps() {
        let mut progress = Progress::default();
        progress.advance(60);
        assert_eq!(progress.advance(60), Tick::Completed);
        assert_eq!(progress.value(), 100);

        let mut overflow = Progress { value: 90 };
        assert_eq!(overflow.advance(u8::MAX), Tick::Completed);
    }

    #[test]
    fn test_dash_offset() {
        let mut progress = Progress::default();
        assert!((progress.dash_offset() - RING_CIRCUMFERENCE).abs() < f64::EPSILON);
        progress.advance(50);
        assert!((progress.dash_offset() - 125.6).abs() < 1e-9);
    }
}

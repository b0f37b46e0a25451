//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Caps the loop at a target frame rate by sleeping out the rest of each
/// frame's budget
#[derive(Debug, Clone)]
pub struct FrameClock {
    budget: Duration,
    last: Option<Instant>,
    frames: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            budget: Duration::from_secs(1) / fps.max(1),
            last: None,
            frames: 0,
        }
    }

    /// Time allotted to one frame
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// How long to wait after a frame that took `elapsed`
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    /// True if a frame took more than twice its budget
    pub fn is_late(&self, dt: Duration) -> bool {
        dt > self.budget * 2
    }

    /// Block until the next frame boundary. Returns the time since the
    /// previous call (zero on the first call).
    pub fn tick(&mut self) -> Duration {
        if let Some(last) = self.last {
            let wait = self.remaining(last.elapsed());
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
        }

        let now = Instant::now();
        let dt = self.last.map(|last| now - last).unwrap_or(Duration::ZERO);
        self.last = Some(now);
        self.frames += 1;
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_for_sixty_fps() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.budget(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_remaining_saturates() {
        let clock = FrameClock::new(100);
        assert_eq!(clock.remaining(Duration::from_millis(4)), Duration::from_millis(6));
        assert_eq!(clock.remaining(Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn test_late_frames() {
        let clock = FrameClock::new(100);
        assert!(!clock.is_late(Duration::from_millis(10)));
        assert!(!clock.is_late(Duration::from_millis(20)));
        assert!(clock.is_late(Duration::from_millis(21)));
    }

    #[test]
    fn test_tick_waits_out_the_budget() {
        let mut clock = FrameClock::new(200);
        assert_eq!(clock.tick(), Duration::ZERO);
        let dt = clock.tick();
        assert!(dt >= clock.budget());
        assert_eq!(clock.frames(), 2);
    }
}

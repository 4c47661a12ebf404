use std::time::Instant;

/// Longest frame delta handed to animations, in seconds.
/// Covers stalls such as a minimized window.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Frame clock - tracks delta time between redraws
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the last tick, capped at `MAX_FRAME_DELTA`
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(MAX_FRAME_DELTA)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009 && delta <= MAX_FRAME_DELTA);
    }

    #[test]
    fn clock_caps_long_stalls() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(150));
        assert_eq!(clock.tick(), MAX_FRAME_DELTA);
    }
}

use super::interpolate::lerp;

/// Seconds each opacity transition takes
pub const DEFAULT_TWEEN_DURATION: f32 = 0.3;

/// Linear tween of a scalar toward a moving target.
///
/// Every new target restarts a `duration`-long linear move from the value
/// currently displayed, so short and long changes take the same time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    current: f32,
    target: f32,
    elapsed: f32,
    duration: f32,
}

impl Tween {
    /// Start at rest on `value`
    pub fn new(value: f32, duration: f32) -> Self {
        Self {
            from: value,
            current: value,
            target: value,
            elapsed: duration.max(0.0),
            duration,
        }
    }

    pub fn retarget(&mut self, target: f32) {
        if target == self.target {
            return;
        }
        self.from = self.current;
        self.target = target;
        self.elapsed = 0.0;
    }

    /// Step toward the target by `delta` seconds and return the new value
    pub fn advance(&mut self, delta: f32) -> f32 {
        if self.duration <= 0.0 {
            self.current = self.target;
            return self.current;
        }

        self.elapsed = (self.elapsed + delta.max(0.0)).min(self.duration);
        self.current = lerp(self.from, self.target, self.elapsed / self.duration);
        self.current
    }
}

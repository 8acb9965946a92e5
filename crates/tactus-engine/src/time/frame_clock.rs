use std::time::{Duration, Instant};

/// Frame stamp shared by every traversal of one logical frame.
///
/// The frame number is the identity that "once per frame" guards compare against.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStamp {
    /// Monotonic frame counter.
    pub frame_number: u64,

    /// Seconds since the clock was created (or last reset).
    pub reference_time: f64,

    /// Accumulated clamped delta time, in seconds.
    pub simulation_time: f64,

    /// Time elapsed since the previous tick, in seconds.
    pub dt: f32,
}

impl FrameStamp {
    /// Stamp for a given frame number with zeroed timing.
    ///
    /// Useful for hosts that drive frame numbers themselves.
    #[inline]
    pub const fn from_frame(frame_number: u64) -> Self {
        Self {
            frame_number,
            reference_time: 0.0,
            simulation_time: 0.0,
            dt: 0.0,
        }
    }
}

impl Default for FrameStamp {
    fn default() -> Self {
        Self::from_frame(0)
    }
}

/// Frame clock producing `FrameStamp` snapshots.
///
/// Delta time is clamped to avoid pathological values when the application is paused
/// by the debugger or stalls inside a blocking device call.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_number: u64,
    simulation_time: f64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    ///
    /// Clamp rationale:
    /// - minimum prevents zero-dt behavior from tight loops on some platforms
    /// - maximum keeps force integration stable after long stalls
    pub fn new() -> Self {
        Self::with_clamps(
            Duration::from_micros(100), // 0.0001s
            Duration::from_millis(250), // 0.25s
        )
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_number: 0,
            simulation_time: 0.0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the timing baseline. Frame numbering continues.
    ///
    /// Frame numbers are never reused, otherwise "once per frame" guards would
    /// swallow the first frame after a reset.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last = now;
        self.simulation_time = 0.0;
    }

    /// Number the next `tick()` will hand out.
    #[inline]
    pub fn next_frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Advances the clock and returns a new `FrameStamp`.
    pub fn tick(&mut self) -> FrameStamp {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;
        self.simulation_time += dt.as_secs_f64();

        let stamp = FrameStamp {
            frame_number: self.frame_number,
            reference_time: now.saturating_duration_since(self.start).as_secs_f64(),
            simulation_time: self.simulation_time,
            dt: dt.as_secs_f32(),
        };

        self.frame_number = self.frame_number.wrapping_add(1);

        stamp
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_numbers_are_consecutive() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        let c = clock.tick();
        assert_eq!((a.frame_number, b.frame_number, c.frame_number), (0, 1, 2));
        assert_eq!(clock.next_frame_number(), 3);
    }

    #[test]
    fn dt_is_clamped_to_minimum() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(5), Duration::from_millis(10));
        let stamp = clock.tick();
        assert!(stamp.dt >= 0.005);
        assert!(stamp.dt <= 0.010);
    }

    #[test]
    fn reset_keeps_frame_numbering() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.reset();
        let stamp = clock.tick();
        assert_eq!(stamp.frame_number, 1);
        assert!(stamp.simulation_time > 0.0);
    }
}

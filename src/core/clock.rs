use std::time::Instant;

/// Frame clock - yields the seconds elapsed between consecutive frames
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    frames: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_tick: start,
            frames: 0,
        }
    }

    /// Get delta time since last tick and advance clock
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`; an instant earlier than the last tick yields zero
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = self.last_tick.max(now);
        self.frames += 1;
        delta
    }

    /// Number of ticks so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Restart timing from the current instant
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

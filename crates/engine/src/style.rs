/// Frame length the legacy read-and-decay path assumes.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Bounded style score that rises with tricks and drains over time.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleMeter {
    value: f32,
    pub gain: f32,
    pub max: f32,
    pub decay_per_sec: f32,
}

impl StyleMeter {
    pub fn new(gain: f32, max: f32, decay_per_sec: f32) -> Self {
        Self {
            value: 0.0,
            gain,
            max,
            decay_per_sec,
        }
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    pub fn bump(&mut self) -> f32 {
        self.value = (self.value + self.gain).min(self.max);
        self.value
    }

    /// Drain for `dt_ms` of elapsed time. Negative or NaN deltas are ignored.
    pub fn advance(&mut self, dt_ms: f64) -> f32 {
        if dt_ms > 0.0 {
            let drained = self.decay_per_sec as f64 * dt_ms / 1000.0;
            self.value = (self.value as f64 - drained).max(0.0) as f32;
        }
        self.value
    }

    pub fn get(&self) -> f32 {
        self.value
    }
}

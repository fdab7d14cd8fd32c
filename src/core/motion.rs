use super::constants::{
    FLOAT_AMPLITUDE_MIN_PX, FLOAT_AMPLITUDE_SPAN_PX, FLOAT_FREQUENCY_MIN, FLOAT_FREQUENCY_SPAN,
    FLOAT_STAGGER_MS, SWAY_AMPLITUDE_RATIO, SWAY_FREQUENCY_DIVISOR,
};
use glam::Vec2;
use rand::Rng;

/// Per-bubble float parameters: a vertical sine bob plus a slower, smaller
/// horizontal cosine sway, phase-shifted by the seed so bubbles drift apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub amplitude: f32,
    pub frequency: f32,
    pub seed: f32,
    /// Timestamp (ms, same clock as `requestAnimationFrame`) the motion is measured from.
    pub start_ms: f64,
}

impl FloatMotion {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, seed: usize, now_ms: f64) -> Self {
        let amplitude =
            rng.gen_range(FLOAT_AMPLITUDE_MIN_PX..FLOAT_AMPLITUDE_MIN_PX + FLOAT_AMPLITUDE_SPAN_PX);
        let frequency =
            rng.gen_range(FLOAT_FREQUENCY_MIN..FLOAT_FREQUENCY_MIN + FLOAT_FREQUENCY_SPAN);
        Self {
            amplitude,
            frequency,
            seed: seed as f32,
            start_ms: now_ms + seed as f64 * FLOAT_STAGGER_MS,
        }
    }

    #[inline]
    pub fn sway_amplitude(&self) -> f32 {
        self.amplitude * SWAY_AMPLITUDE_RATIO
    }

    #[inline]
    pub fn sway_frequency(&self) -> f32 {
        self.frequency / SWAY_FREQUENCY_DIVISOR
    }

    /// Translation at `t_ms`. Pure in elapsed time; negative elapsed time
    /// (frames before a staggered start) is valid.
    pub fn offset(&self, t_ms: f64) -> Vec2 {
        let t = ((t_ms - self.start_ms) / 1000.0) as f32;
        let y = (t * self.frequency + self.seed).sin() * self.amplitude;
        let x = (t * self.sway_frequency() + self.seed).cos() * self.sway_amplitude();
        Vec2::new(x, y)
    }
}

#[inline]
pub fn translate_css(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

//! Injected randomness for episode resets.

/// A source of independent uniform samples.
///
/// Scenarios never own a generator; the host passes one in so that episodes
/// can be replayed from a seed.
pub trait UniformSource {
    /// Draws a sample from the half-open interval `[low, high)`.
    fn uniform(&mut self, low: f32, high: f32) -> f32;
}

impl UniformSource for fastrand::Rng {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.f32()
    }
}

//! Looping scale pulse for decorative accents (leaves, paw print).

use bevy::prelude::*;

/// Component for a gentle, endless size oscillation around a base size.
#[derive(Component, Debug)]
pub struct Pulse {
    /// Resting size in pixels.
    pub base_size: Vec2,
    /// Fraction of the base size the pulse adds/removes (0.1 = +/-10%).
    pub amplitude: f32,
    /// Seconds per full oscillation.
    pub period: f32,
    /// Phase offset in seconds, so neighbors don't pulse in lockstep.
    pub phase: f32,
    elapsed: f32,
}

impl Pulse {
    pub fn new(base_size: Vec2, amplitude: f32, period: f32) -> Self {
        Self {
            base_size,
            amplitude,
            period,
            phase: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    fn scale(&self) -> f32 {
        let angle = std::f32::consts::TAU * (self.elapsed + self.phase) / self.period;
        1.0 + self.amplitude * angle.sin()
    }
}

pub(crate) fn tick_pulse(time: Res<Time>, mut query: Query<(&mut Pulse, &mut Node)>) {
    for (mut pulse, mut node) in &mut query {
        pulse.elapsed += time.delta_secs();
        let scale = pulse.scale();
        node.width = Val::Px(pulse.base_size.x * scale);
        node.height = Val::Px(pulse.base_size.y * scale);
    }
}

#[cfg(test)]
mod tests {
    use super::Pulse;
    use bevy::prelude::*;

    #[test]
    fn test_scale_stays_within_amplitude() {
        let mut pulse = Pulse::new(Vec2::splat(40.0), 0.15, 2.0);
        for step in 0..200 {
            pulse.elapsed = step as f32 * 0.05;
            let scale = pulse.scale();
            assert!((0.85..=1.15).contains(&scale), "scale {} out of band", scale);
        }
    }

    #[test]
    fn test_phase_offsets_the_oscillation() {
        let a = Pulse::new(Vec2::splat(40.0), 0.15, 2.0);
        let b = Pulse::new(Vec2::splat(40.0), 0.15, 2.0).with_phase(0.5);
        assert!((a.scale() - b.scale()).abs() > 1e-3);
    }
}

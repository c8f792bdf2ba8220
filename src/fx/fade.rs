//! Staggered fade-in for screen elements.
//!
//! Each decorated entity ramps its text/background alpha from zero and
//! slides up a few pixels once its delay expires. Carries no semantic
//! state; the component removes itself when the ramp finishes.

use bevy::prelude::*;

/// Component for a one-shot fade-in with an optional start delay.
#[derive(Component, Debug)]
pub struct FadeIn {
    /// Seconds to wait before the ramp starts.
    pub delay: f32,
    /// Seconds the ramp takes.
    pub duration: f32,
    /// Pixels the element rises while fading in.
    pub rise: f32,
    /// Time accumulator.
    pub elapsed: f32,
    /// Target text alpha, captured on first tick.
    text_alpha: Option<f32>,
    /// Target background alpha, captured on first tick.
    bg_alpha: Option<f32>,
}

impl FadeIn {
    pub fn new(delay: f32, duration: f32) -> Self {
        Self {
            delay,
            duration,
            rise: 20.0,
            elapsed: 0.0,
            text_alpha: None,
            bg_alpha: None,
        }
    }

    pub fn with_rise(mut self, rise: f32) -> Self {
        self.rise = rise;
        self
    }
}

/// Normalized ramp position in 0..=1 for the given accumulator.
fn fade_progress(elapsed: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    ((elapsed - delay) / duration).clamp(0.0, 1.0)
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

pub(crate) fn tick_fade_in(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(
        Entity,
        &mut FadeIn,
        &mut Node,
        Option<&mut TextColor>,
        Option<&mut BackgroundColor>,
    )>,
) {
    for (entity, mut fade, mut node, text_color, bg_color) in &mut query {
        fade.elapsed += time.delta_secs();
        let t = ease_out_cubic(fade_progress(fade.elapsed, fade.delay, fade.duration));

        if let Some(mut text_color) = text_color {
            let target = *fade.text_alpha.get_or_insert(text_color.0.alpha());
            text_color.0 = text_color.0.with_alpha(target * t);
        }
        if let Some(mut bg_color) = bg_color {
            let target = *fade.bg_alpha.get_or_insert(bg_color.0.alpha());
            bg_color.0 = bg_color.0.with_alpha(target * t);
        }
        node.top = Val::Px(fade.rise * (1.0 - t));

        if fade.elapsed >= fade.delay + fade.duration {
            node.top = Val::Px(0.0);
            commands.entity(entity).remove::<FadeIn>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ease_out_cubic, fade_progress};

    #[test]
    fn test_progress_waits_out_the_delay() {
        assert_eq!(fade_progress(0.2, 0.5, 1.0), 0.0);
        assert_eq!(fade_progress(0.5, 0.5, 1.0), 0.0);
        assert_eq!(fade_progress(1.0, 0.5, 1.0), 0.5);
        assert_eq!(fade_progress(2.0, 0.5, 1.0), 1.0);
    }

    #[test]
    fn test_progress_clamps_past_the_end() {
        assert_eq!(fade_progress(10.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        assert_eq!(fade_progress(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_ease_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}

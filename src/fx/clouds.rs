//! Drifting clouds for the welcome screen backdrop.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::Rng;

/// How far past the window edge a cloud travels before wrapping.
const WRAP_MARGIN: f32 = 120.0;

/// Component for a cloud node drifting left-to-right.
#[derive(Component, Debug)]
pub struct CloudDrift {
    /// Pixels per second.
    pub speed: f32,
}

/// Spawns a handful of soft white cloud nodes as children of the current
/// screen root. Speeds and vertical placement are jittered so the sky
/// never looks tiled.
pub fn spawn_clouds(parent: &mut ChildSpawnerCommands) {
    let mut rng = rand::rng();

    // (width, base y, alpha) per cloud, roughly matching the three
    // original layers
    let layers = [(80.0, 60.0, 0.8), (60.0, 110.0, 0.6), (70.0, 30.0, 0.7)];

    for (width, base_y, alpha) in layers {
        let speed = rng.random_range(25.0..45.0);
        let start_x = rng.random_range(-WRAP_MARGIN..500.0);
        let y = base_y + rng.random_range(-10.0..10.0);

        parent.spawn((
            CloudDrift { speed },
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(start_x),
                top: Val::Px(y),
                width: Val::Px(width),
                height: Val::Px(width * 0.5),
                border_radius: BorderRadius::MAX,
                ..default()
            },
            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, alpha)),
        ));
    }
}

pub(crate) fn drift_clouds(
    time: Res<Time>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut clouds: Query<(&CloudDrift, &mut Node)>,
) {
    let Ok(window) = window.single() else {
        return;
    };
    let wrap_at = window.width() + WRAP_MARGIN;

    for (drift, mut node) in &mut clouds {
        let Val::Px(x) = node.left else {
            continue;
        };
        let moved = x + drift.speed * time.delta_secs();
        node.left = Val::Px(if moved > wrap_at { -WRAP_MARGIN } else { moved });
    }
}

//! Content domain: character and trait catalogs.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{CharacterDef, TraitDef};
pub use registry::ContentRegistry;
pub use validation::validate_content;

use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::load_all_content;

/// Size of the character catalog; valid ids are `0..CHARACTER_COUNT`.
pub const CHARACTER_COUNT: u32 = 4;

/// Size of the trait catalog; valid ids are `0..TRAIT_COUNT`.
pub const TRAIT_COUNT: u32 = 12;

/// How many traits a cat gets. The customization guard requires exactly
/// this many.
pub const MAX_TRAITS: usize = 3;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CharacterDef>()
            .register_type::<TraitDef>()
            .add_systems(Startup, setup_content);
    }
}

/// Loads the catalogs from assets/data, falling back to the built-in
/// catalog when the files are missing or invalid. Either way the app
/// starts with a usable registry.
fn setup_content(mut commands: Commands) {
    let registry = match load_all_content(Path::new("assets/data")) {
        Ok(registry) => {
            let errors = validate_content(&registry);
            if errors.is_empty() {
                registry
            } else {
                for error in &errors {
                    warn!("{}", error);
                }
                warn!("Catalog data invalid, using built-in catalog");
                builtin_catalog()
            }
        }
        Err(errors) => {
            for error in &errors {
                warn!("{}", error);
            }
            warn!("Catalog files unavailable, using built-in catalog");
            builtin_catalog()
        }
    };

    info!("{}", registry.summary());
    commands.insert_resource(registry);
}

/// The shipped catalog, identical to assets/data/*.ron.
pub fn builtin_catalog() -> ContentRegistry {
    let characters = [
        (0, "strawberry siamese", [0.95, 0.55, 0.60]),
        (1, "peach ragdoll", [1.00, 0.75, 0.55]),
        (2, "apple calico", [0.60, 0.85, 0.50]),
        (3, "blueberry shorthair", [0.55, 0.65, 0.90]),
    ];
    let traits = [
        (0, "creative", [0.9, 0.6, 0.8]),
        (1, "clingy", [0.6, 0.8, 0.9]),
        (2, "friendly", [1.0, 0.8, 0.6]),
        (3, "bubbly", [0.7, 0.9, 0.6]),
        (4, "sneaky", [0.8, 0.7, 0.9]),
        (5, "silly", [1.0, 0.7, 0.7]),
        (6, "curious", [0.6, 0.9, 0.8]),
        (7, "peaceful", [0.8, 0.9, 0.7]),
        (8, "social", [0.9, 0.8, 0.6]),
        (9, "cuddly", [0.7, 0.8, 1.0]),
        (10, "empath", [0.9, 0.7, 0.8]),
        (11, "sleepy", [0.8, 0.8, 0.9]),
    ];

    let mut registry = ContentRegistry::default();
    for (id, name, color) in characters {
        registry.characters.insert(
            id,
            CharacterDef {
                id,
                name: name.to_string(),
                color,
            },
        );
    }
    for (id, name, color) in traits {
        registry.traits.insert(
            id,
            TraitDef {
                id,
                name: name.to_string(),
                color,
            },
        );
    }
    registry
}

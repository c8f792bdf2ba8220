use bevy::asset::Asset;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Wrapper for RON data files: `(items: [ ... ])`.
#[derive(Debug, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub items: Vec<T>,
}

/// A pickable character. Ids are dense, `0..CHARACTER_COUNT`.
#[derive(Asset, Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct CharacterDef {
    pub id: u32,
    pub name: String,
    /// Accent color for the card icon, linear RGB in 0..=1.
    pub color: [f32; 3],
}

/// A personality trait chip. Ids are dense, `0..TRAIT_COUNT`.
#[derive(Asset, Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct TraitDef {
    pub id: u32,
    pub name: String,
    /// Chip fill color when selected, linear RGB in 0..=1.
    pub color: [f32; 3],
}

//! ContentRegistry resource providing id lookups for loaded catalogs.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{CharacterDef, TraitDef};

/// Central registry for the character and trait catalogs.
#[derive(Resource, Debug, Default)]
pub struct ContentRegistry {
    pub characters: HashMap<u32, CharacterDef>,
    pub traits: HashMap<u32, TraitDef>,
}

impl ContentRegistry {
    pub fn character(&self, id: u32) -> Option<&CharacterDef> {
        self.characters.get(&id)
    }

    pub fn trait_def(&self, id: u32) -> Option<&TraitDef> {
        self.traits.get(&id)
    }

    /// Characters in id order, for laying out the selection grid.
    pub fn characters_ordered(&self) -> Vec<&CharacterDef> {
        let mut defs: Vec<_> = self.characters.values().collect();
        defs.sort_by_key(|c| c.id);
        defs
    }

    /// Traits in id order, for laying out the chip grid.
    pub fn traits_ordered(&self) -> Vec<&TraitDef> {
        let mut defs: Vec<_> = self.traits.values().collect();
        defs.sort_by_key(|t| t.id);
        defs
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded: {} characters, {} traits",
            self.characters.len(),
            self.traits.len()
        )
    }
}

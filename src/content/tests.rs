//! Content domain: unit tests for catalog validation.

use super::data::{CharacterDef, TraitDef};
use super::registry::ContentRegistry;
use super::validation::validate_content;
use super::{CHARACTER_COUNT, TRAIT_COUNT, builtin_catalog};

#[test]
fn test_builtin_catalog_is_valid() {
    let registry = builtin_catalog();
    let errors = validate_content(&registry);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(registry.characters.len() as u32, CHARACTER_COUNT);
    assert_eq!(registry.traits.len() as u32, TRAIT_COUNT);
}

#[test]
fn test_ordered_accessors_sort_by_id() {
    let registry = builtin_catalog();
    let ids: Vec<u32> = registry.characters_ordered().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    let trait_ids: Vec<u32> = registry.traits_ordered().iter().map(|t| t.id).collect();
    assert_eq!(trait_ids, (0..TRAIT_COUNT).collect::<Vec<_>>());
}

#[test]
fn test_out_of_range_character_id_is_rejected() {
    let mut registry = builtin_catalog();
    let mut rogue = registry.characters.get(&0).unwrap().clone();
    rogue.id = 7;
    registry.characters.remove(&0);
    registry.characters.insert(7, rogue);

    let errors = validate_content(&registry);
    assert!(errors.iter().any(|e| e.message.contains("out of range")));
}

#[test]
fn test_missing_trait_is_reported() {
    let mut registry = builtin_catalog();
    registry.traits.remove(&5);

    let errors = validate_content(&registry);
    assert!(
        errors
            .iter()
            .any(|e| e.catalog == "trait" && e.message.contains("expected 12"))
    );
}

#[test]
fn test_empty_name_is_reported() {
    let mut registry = ContentRegistry::default();
    for id in 0..CHARACTER_COUNT {
        registry.characters.insert(
            id,
            CharacterDef {
                id,
                name: String::new(),
                color: [0.5, 0.5, 0.5],
            },
        );
    }
    for id in 0..TRAIT_COUNT {
        registry.traits.insert(
            id,
            TraitDef {
                id,
                name: "trait".to_string(),
                color: [0.5, 0.5, 0.5],
            },
        );
    }

    let errors = validate_content(&registry);
    assert_eq!(
        errors
            .iter()
            .filter(|e| e.message.contains("empty name"))
            .count(),
        CHARACTER_COUNT as usize
    );
}

#[test]
fn test_color_out_of_gamut_is_reported() {
    let mut registry = builtin_catalog();
    registry.traits.get_mut(&2).unwrap().color = [1.4, 0.0, 0.0];

    let errors = validate_content(&registry);
    assert!(errors.iter().any(|e| e.message.contains("color component")));
}

//! Validation of catalog invariants after loading.
//!
//! The flow controller trusts that character ids are `0..CHARACTER_COUNT`
//! and trait ids are `0..TRAIT_COUNT`; this is where a data file that
//! breaks that assumption gets caught.

use super::registry::ContentRegistry;
use super::{CHARACTER_COUNT, TRAIT_COUNT};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub catalog: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} catalog: {}", self.catalog, self.message)
    }
}

fn check_catalog<I>(
    errors: &mut Vec<ValidationError>,
    catalog: &'static str,
    expected_count: u32,
    entries: I,
) where
    I: Iterator<Item = (u32, String, [f32; 3])>,
{
    let mut seen = 0u32;
    for (id, name, color) in entries {
        seen += 1;
        if id >= expected_count {
            errors.push(ValidationError {
                catalog,
                message: format!("id {} out of range (expected 0..{})", id, expected_count),
            });
        }
        if name.is_empty() {
            errors.push(ValidationError {
                catalog,
                message: format!("entry {} has an empty name", id),
            });
        }
        if color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            errors.push(ValidationError {
                catalog,
                message: format!("entry {} has a color component outside 0..=1", id),
            });
        }
    }
    if seen != expected_count {
        errors.push(ValidationError {
            catalog,
            message: format!("expected {} entries, found {}", expected_count, seen),
        });
    }
}

/// Validate both catalogs. Returns a list of errors, empty if the data
/// matches what the flow controller assumes.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_catalog(
        &mut errors,
        "character",
        CHARACTER_COUNT,
        registry
            .characters
            .values()
            .map(|c| (c.id, c.name.clone(), c.color)),
    );
    check_catalog(
        &mut errors,
        "trait",
        TRAIT_COUNT,
        registry
            .traits
            .values()
            .map(|t| (t.id, t.name.clone(), t.color)),
    );

    errors
}

//! Loader for RON catalog files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{CharacterDef, DataFile, TraitDef};
use super::registry::ContentRegistry;

/// Error type for catalog loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let data: DataFile<T> = ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Load both catalogs from `<base>/characters.ron` and `<base>/traits.ron`.
pub fn load_all_content(base_path: &Path) -> Result<ContentRegistry, Vec<ContentLoadError>> {
    let mut registry = ContentRegistry::default();
    let mut errors = Vec::new();

    match load_data_file::<CharacterDef>(&base_path.join("characters.ron")) {
        Ok(items) => {
            for item in items {
                registry.characters.insert(item.id, item);
            }
        }
        Err(e) => errors.push(e),
    }

    match load_data_file::<TraitDef>(&base_path.join("traits.ron")) {
        Ok(items) => {
            for item in items {
                registry.traits.insert(item.id, item);
            }
        }
        Err(e) => errors.push(e),
    }

    if errors.is_empty() {
        Ok(registry)
    } else {
        Err(errors)
    }
}

//! Reading YAML source documents.
//!
//! Each loader reads one file and hands the text to the matching
//! `schemegen-core` parser. A missing file is a
//! [`BuildError::MissingInputDocument`], any other read failure a
//! [`BuildError::Read`]; a parse failure is reported against the file it
//! came from.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use schemegen_core::{Palette, StyleMap, ThemeDefinition};
use tracing::debug;

use crate::config::BuildConfig;
use crate::error::BuildError;

/// Reads a source document into a string.
pub fn read_document(path: &Path) -> Result<String, BuildError> {
    debug!(path = %path.display(), "reading source document");
    fs::read_to_string(path).map_err(|source| {
        let path = path.to_path_buf();
        match source.kind() {
            ErrorKind::NotFound => BuildError::MissingInputDocument { path, source },
            _ => BuildError::Read { path, source },
        }
    })
}

/// Loads the palette named `name` from `colors/<name>.yaml`.
pub fn load_palette(config: &BuildConfig, name: &str) -> Result<Palette, BuildError> {
    let path = config.palette_path(name);
    let text = read_document(&path)?;
    Palette::from_yaml(name, &text).map_err(|source| BuildError::Scheme { path, source })
}

/// Loads the style map from `ide.yaml`.
pub fn load_style_map(config: &BuildConfig) -> Result<StyleMap, BuildError> {
    let path = config.style_map_path();
    let text = read_document(&path)?;
    StyleMap::from_yaml(&text).map_err(|source| BuildError::Scheme { path, source })
}

/// Loads the theme definition from `theme.yaml`.
pub fn load_theme(config: &BuildConfig) -> Result<ThemeDefinition, BuildError> {
    let path = config.theme_path();
    let text = read_document(&path)?;
    ThemeDefinition::from_yaml(&text).map_err(|source| BuildError::Scheme { path, source })
}

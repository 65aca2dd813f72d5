//! Named color palettes.
//!
//! A [`Palette`] maps symbolic color names to concrete values. Theme sources
//! refer to colors by name (`foreground: blue`) and the active palette decides
//! what `blue` means for a given variant, so the same theme definition produces
//! a normal and a vivid scheme.
//!
//! # Resolution
//!
//! Resolution never fails. A token the palette does not know is returned
//! unchanged and treated as an already-concrete value, which lets a theme mix
//! symbolic names with inline literals:
//!
//! ```rust
//! use schemegen_core::Palette;
//!
//! let palette = Palette::from_yaml("normal", "blue: 61afef\n").unwrap();
//! assert_eq!(palette.resolve("blue"), "61afef");
//! assert_eq!(palette.resolve("282c34"), "282c34");
//! ```

use indexmap::IndexMap;

use crate::error::SchemeError;
use crate::value::{parse_root, scalar_pairs};

/// Name of the palette that produces un-suffixed output files.
pub const DEFAULT_PALETTE: &str = "normal";

/// Symbolic color name → concrete value, for one palette variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colors: IndexMap<String, String>,
}

impl Palette {
    /// Creates an empty palette with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: IndexMap::new(),
        }
    }

    /// Adds a color, returning `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(name.into(), value.into());
        self
    }

    /// Parses a palette document: a flat mapping of color name to value.
    pub fn from_yaml(name: impl Into<String>, yaml: &str) -> Result<Self, SchemeError> {
        let name = name.into();
        let context = format!("palette '{}'", name);
        let root = parse_root(yaml, &context)?;
        let colors = scalar_pairs(&root, &context)?.into_iter().collect();
        Ok(Self { name, colors })
    }

    /// Returns the palette name (e.g. `normal`, `vivid`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves a color token against this palette.
    ///
    /// Returns the mapped value when `token` names a palette color, otherwise
    /// `token` itself.
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.colors.get(token).map(String::as_str).unwrap_or(token)
    }

    /// Returns true if `token` names a color in this palette.
    pub fn contains(&self, token: &str) -> bool {
        self.colors.contains_key(token)
    }

    /// Number of named colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette defines no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

//! Scheme document assembly.
//!
//! [`Assembler`] combines a [`ThemeDefinition`] with one palette and the style
//! map into a [`SchemeDocument`], the fully concrete tree that the XML renderer
//! writes out.
//!
//! # Ordering
//!
//! The document order is part of the output contract:
//!
//! 1. color options, in the theme definition's declaration order;
//! 2. inherited attributes, in declaration order;
//! 3. resolved attributes, sorted by name (byte order, case-sensitive).
//!
//! Sorting makes the output independent of how the source YAML is arranged, so
//! regenerated files diff cleanly.

use tracing::debug;

use crate::attribute::AttributeResolver;
use crate::definition::ThemeDefinition;
use crate::error::SchemeError;
use crate::palette::Palette;
use crate::style_map::StyleMap;

/// Scheme format version written on every document.
pub const SCHEME_VERSION: &str = "142";

/// A `name`/`value` option pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeOption {
    /// Option name.
    pub name: String,
    /// Concrete value.
    pub value: String,
}

impl SchemeOption {
    fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An attribute that only points at a base attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritedAttribute {
    /// Attribute name.
    pub name: String,
    /// Base attribute it inherits from.
    pub base: String,
}

/// A resolved attribute with normalized option names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBlock {
    /// Attribute name.
    pub name: String,
    /// Options with names such as `FOREGROUND` or `FONT_TYPE`.
    pub options: Vec<SchemeOption>,
}

/// Fully resolved color scheme for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeDocument {
    /// Display name of the scheme.
    pub name: String,
    /// Scheme this one inherits from.
    pub parent_scheme: String,
    /// Scheme format version.
    pub version: &'static str,
    /// Color table.
    pub colors: Vec<SchemeOption>,
    /// Inherited attributes.
    pub inherited: Vec<InheritedAttribute>,
    /// Resolved attributes, sorted by name.
    pub attributes: Vec<AttributeBlock>,
}

/// Converts a sub-option name to its scheme option name: `effect-color` →
/// `EFFECT_COLOR`.
pub fn normalize_option_name(name: &str) -> String {
    name.replace('-', "_").to_uppercase()
}

/// Builds [`SchemeDocument`]s for one palette.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    palette: &'a Palette,
    styles: &'a StyleMap,
}

impl<'a> Assembler<'a> {
    /// Creates an assembler for `palette` using the shared style map.
    pub fn new(palette: &'a Palette, styles: &'a StyleMap) -> Self {
        Self { palette, styles }
    }

    /// Assembles the scheme named `name` for the given italic flag.
    ///
    /// The parent scheme comes from the theme definition.
    ///
    /// # Errors
    ///
    /// Propagates [`SchemeError::MissingStyleEncoding`] from attribute
    /// resolution.
    pub fn assemble(
        &self,
        theme: &ThemeDefinition,
        italic: bool,
        name: &str,
    ) -> Result<SchemeDocument, SchemeError> {
        let resolver = AttributeResolver::new(self.palette, self.styles, italic);

        let colors = theme
            .colors
            .iter()
            .map(|(name, token)| SchemeOption::new(name, resolver.resolve_color(token)))
            .collect();

        let inherited = theme
            .inheriting_attributes
            .iter()
            .map(|(name, base)| InheritedAttribute {
                name: name.clone(),
                base: base.clone(),
            })
            .collect();

        let mut attributes = Vec::with_capacity(theme.attributes.len());
        for (attribute, definition) in &theme.attributes {
            let resolved = resolver.resolve(definition)?;
            let options = resolved
                .iter()
                .map(|(key, value)| SchemeOption::new(normalize_option_name(key), value))
                .collect();
            attributes.push(AttributeBlock {
                name: attribute.clone(),
                options,
            });
        }
        attributes.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(
            scheme = name,
            palette = self.palette.name(),
            italic,
            colors = theme.colors.len(),
            attributes = attributes.len(),
            "assembled scheme"
        );

        Ok(SchemeDocument {
            name: name.to_string(),
            parent_scheme: theme.parent_scheme.clone(),
            version: SCHEME_VERSION,
            colors,
            inherited,
            attributes,
        })
    }
}

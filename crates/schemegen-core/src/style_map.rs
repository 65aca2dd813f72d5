//! IDE style encodings and the option index derived from them.
//!
//! The style map is the IDE-specific half of a theme: it says how an abstract
//! style option (`bold`, `italic`, `underline`) is spelled in the target scheme
//! format, grouped by the output option it sets:
//!
//! ```yaml
//! font-type:
//!   bold: 1
//!   italic: 2
//!   bold-italic: 3
//! effect-type:
//!   underline: 1
//! ```
//!
//! [`StyleMap`] keeps that table and an index from option name to category, so
//! every attribute sub-option is classified with a single lookup into an
//! [`OptionKind`].

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::SchemeError;
use crate::value::{parse_root, scalar, scalar_pairs};

/// Output option carrying bold/italic encodings.
pub const FONT_TYPE: &str = "font-type";

/// Option name of the combined bold+italic encoding inside [`FONT_TYPE`].
pub const BOLD_ITALIC: &str = "bold-italic";

/// How an attribute sub-option is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind<'a> {
    /// A style flag owned by `category`; subject to variant selection.
    StyleFlag {
        /// Style category the flag belongs to (the output key).
        category: &'a str,
    },
    /// Any other sub-option; its value is a color token.
    LiteralColor,
}

/// Style category → abstract option → concrete encoding.
///
/// Immutable once built and shared by every variant of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    categories: IndexMap<String, IndexMap<String, String>>,
    index: HashMap<String, String>,
}

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an encoding, returning `self` for chaining.
    pub fn with(
        mut self,
        category: impl Into<String>,
        option: impl Into<String>,
        encoding: impl Into<String>,
    ) -> Self {
        self.insert(category.into(), option.into(), encoding.into());
        self
    }

    /// Parses a style map document.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemeError> {
        let root = parse_root(yaml, "style map")?;
        let mut map = Self::new();

        for (key, value) in &root {
            let category = scalar(key, "style map")?;
            let context = format!("style category '{}'", category);
            let options = value.as_mapping().ok_or_else(|| {
                SchemeError::malformed(&context, "expected a mapping of option to encoding")
            })?;
            for (option, encoding) in scalar_pairs(options, &context)? {
                map.insert(category.clone(), option, encoding);
            }
        }

        Ok(map)
    }

    // The index follows the table: an option listed under two categories
    // belongs to the one inserted last.
    fn insert(&mut self, category: String, option: String, encoding: String) {
        self.index.insert(option.clone(), category.clone());
        self.categories
            .entry(category)
            .or_default()
            .insert(option, encoding);
    }

    /// Classifies a sub-option name.
    pub fn classify(&self, option: &str) -> OptionKind<'_> {
        match self.index.get(option) {
            Some(category) => OptionKind::StyleFlag { category },
            None => OptionKind::LiteralColor,
        }
    }

    /// Looks up the concrete encoding for `option` within `category`.
    pub fn encoding(&self, category: &str, option: &str) -> Result<&str, SchemeError> {
        self.categories
            .get(category)
            .and_then(|options| options.get(option))
            .map(String::as_str)
            .ok_or_else(|| SchemeError::MissingStyleEncoding {
                category: category.to_string(),
                option: option.to_string(),
            })
    }

    /// The combined bold+italic `font-type` encoding.
    pub fn bold_italic(&self) -> Result<&str, SchemeError> {
        self.encoding(FONT_TYPE, BOLD_ITALIC)
    }

    /// Iterates style categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}

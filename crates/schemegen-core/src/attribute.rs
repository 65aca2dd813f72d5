//! Attribute resolution.
//!
//! [`AttributeResolver`] turns an abstract [`AttributeDefinition`] into the
//! concrete options one variant emits for it.
//!
//! # Rules
//!
//! 1. A shorthand definition resolves to `{foreground: <color>}`.
//! 2. Each sub-option is classified once against the [`StyleMap`]:
//!    - a style flag is emitted under its category, with the encoding from the
//!      style map, only when its condition selects the current variant
//!      (`always`, or `theme` for italic variants);
//!    - anything else is a color option whose condition is resolved through the
//!      [`Palette`].
//! 3. If the definition has both `bold` and `italic`, and `italic` applies,
//!    `font-type` is set to the combined bold-italic encoding.
//!
//! Color options keep their declaration order; style categories follow in the
//! order they were first emitted.
//!
//! # Example
//!
//! ```rust
//! use schemegen_core::{AttributeDefinition, AttributeResolver, Palette, StyleMap, SubOption};
//!
//! let palette = Palette::new("normal").with("accent", "#61AFEF");
//! let styles = StyleMap::new().with("font-type", "bold", "1");
//! let keyword = AttributeDefinition::Options(vec![
//!     SubOption::new("bold", "always"),
//!     SubOption::new("foreground", "accent"),
//! ]);
//!
//! let resolved = AttributeResolver::new(&palette, &styles, false)
//!     .resolve(&keyword)
//!     .unwrap();
//! assert_eq!(resolved.get("foreground"), Some("#61AFEF"));
//! assert_eq!(resolved.get("font-type"), Some("1"));
//! ```

use indexmap::IndexMap;

use crate::definition::{AttributeDefinition, BOLD, ITALIC};
use crate::error::SchemeError;
use crate::palette::Palette;
use crate::style_map::{OptionKind, StyleMap, FONT_TYPE};
use crate::variant::condition_applies;

/// Output key for shorthand definitions.
pub const FOREGROUND: &str = "foreground";

/// Concrete options of one attribute for one variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAttribute {
    options: IndexMap<String, String>,
}

impl ResolvedAttribute {
    /// Creates an empty resolved attribute.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of an output option.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Iterates `(key, value)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of output options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if nothing is emitted for this attribute.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    // Replaces in place if the key exists, appends otherwise.
    fn set(&mut self, key: &str, value: &str) {
        self.options.insert(key.to_string(), value.to_string());
    }
}

/// Resolves attribute definitions for one variant.
#[derive(Debug, Clone, Copy)]
pub struct AttributeResolver<'a> {
    palette: &'a Palette,
    styles: &'a StyleMap,
    italic: bool,
}

impl<'a> AttributeResolver<'a> {
    /// Creates a resolver for the variant described by `palette` and `italic`.
    pub fn new(palette: &'a Palette, styles: &'a StyleMap, italic: bool) -> Self {
        Self {
            palette,
            styles,
            italic,
        }
    }

    /// Resolves a color token through the palette.
    pub fn resolve_color<'t>(&'t self, token: &'t str) -> &'t str {
        self.palette.resolve(token)
    }

    /// Resolves one attribute definition.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::MissingStyleEncoding`] if the bold-italic merge
    /// needs an encoding the style map lacks.
    pub fn resolve(
        &self,
        definition: &AttributeDefinition,
    ) -> Result<ResolvedAttribute, SchemeError> {
        let mut resolved = ResolvedAttribute::new();

        let options = match definition {
            AttributeDefinition::Foreground(token) => {
                resolved.set(FOREGROUND, self.resolve_color(token));
                return Ok(resolved);
            }
            AttributeDefinition::Options(options) => options,
        };

        let mut flags = Vec::new();
        for option in options {
            match self.styles.classify(&option.name) {
                OptionKind::StyleFlag { category } => flags.push((category, option)),
                OptionKind::LiteralColor => {
                    resolved.set(&option.name, self.resolve_color(&option.condition));
                }
            }
        }

        for (category, option) in flags {
            if condition_applies(&option.condition, self.italic) {
                let encoding = self.styles.encoding(category, &option.name)?;
                resolved.set(category, encoding);
            }
        }

        if self.is_bold_italic(definition) {
            resolved.set(FONT_TYPE, self.styles.bold_italic()?);
        }

        Ok(resolved)
    }

    fn is_bold_italic(&self, definition: &AttributeDefinition) -> bool {
        definition.sub_option(BOLD).is_some()
            && definition
                .sub_option(ITALIC)
                .is_some_and(|italic| condition_applies(&italic.condition, self.italic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::SubOption;
    use proptest::prelude::*;

    fn styles() -> StyleMap {
        StyleMap::new()
            .with("font-type", "bold", "1")
            .with("font-type", "italic", "2")
            .with("font-type", "bold-italic", "3")
            .with("effect-type", "underline", "1")
    }

    fn palette() -> Palette {
        Palette::new("normal")
            .with("accent", "#61AFEF")
            .with("purple", "c678dd")
    }

    fn options(pairs: &[(&str, &str)]) -> AttributeDefinition {
        AttributeDefinition::Options(
            pairs
                .iter()
                .map(|(name, condition)| SubOption::new(*name, *condition))
                .collect(),
        )
    }

    fn resolve(def: &AttributeDefinition, italic: bool) -> ResolvedAttribute {
        let (palette, styles) = (palette(), styles());
        AttributeResolver::new(&palette, &styles, italic)
            .resolve(def)
            .unwrap()
    }

    fn pairs(resolved: &ResolvedAttribute) -> Vec<(&str, &str)> {
        resolved.iter().collect()
    }

    // =========================================================================
    // Shorthand
    // =========================================================================

    #[test]
    fn test_shorthand_is_foreground() {
        let def = AttributeDefinition::Foreground("purple".into());
        assert_eq!(pairs(&resolve(&def, false)), vec![("foreground", "c678dd")]);
        assert_eq!(pairs(&resolve(&def, true)), vec![("foreground", "c678dd")]);
    }

    // =========================================================================
    // Style flags
    // =========================================================================

    #[test]
    fn test_always_flag_emitted() {
        let def = options(&[("bold", "always"), ("foreground", "accent")]);
        let resolved = resolve(&def, false);
        assert_eq!(
            pairs(&resolved),
            vec![("foreground", "#61AFEF"), ("font-type", "1")]
        );
        assert_eq!(resolve(&def, true).get("font-type"), Some("1"));
    }

    #[test]
    fn test_theme_flag_only_in_italic() {
        let def = options(&[("italic", "theme"), ("foreground", "accent")]);
        assert_eq!(resolve(&def, false).get("font-type"), None);
        assert_eq!(resolve(&def, true).get("font-type"), Some("2"));
    }

    #[test]
    fn test_unselected_flag_leaves_colors() {
        let def = options(&[("italic", "theme"), ("effect-color", "purple")]);
        let resolved = resolve(&def, false);
        assert_eq!(pairs(&resolved), vec![("effect-color", "c678dd")]);
    }

    #[test]
    fn test_flag_with_literal_condition_is_dropped() {
        let def = options(&[("underline", "accent")]);
        assert!(resolve(&def, true).is_empty());
    }

    #[test]
    fn test_non_selector_condition_is_a_color() {
        let def = options(&[("background", "always")]);
        assert_eq!(resolve(&def, false).get("background"), Some("always"));
    }

    #[test]
    fn test_categories_follow_colors() {
        let def = options(&[
            ("underline", "always"),
            ("bold", "always"),
            ("foreground", "accent"),
            ("effect-color", "purple"),
        ]);
        let resolved = resolve(&def, false);
        assert_eq!(
            pairs(&resolved),
            vec![
                ("foreground", "#61AFEF"),
                ("effect-color", "c678dd"),
                ("effect-type", "1"),
                ("font-type", "1"),
            ]
        );
    }

    // =========================================================================
    // Bold + italic merge
    // =========================================================================

    #[test]
    fn test_bold_italic_merge_in_italic_variant() {
        let def = options(&[("bold", "always"), ("italic", "theme")]);
        assert_eq!(pairs(&resolve(&def, true)), vec![("font-type", "3")]);
    }

    #[test]
    fn test_bold_italic_merge_skipped_without_italic() {
        let def = options(&[("bold", "always"), ("italic", "theme")]);
        assert_eq!(pairs(&resolve(&def, false)), vec![("font-type", "1")]);
    }

    #[test]
    fn test_bold_italic_merge_with_theme_bold() {
        // bold is not selected in the plain variant, but the merge only looks
        // at italic's condition
        let def = options(&[("bold", "theme"), ("italic", "always")]);
        assert_eq!(pairs(&resolve(&def, false)), vec![("font-type", "3")]);
    }

    #[test]
    fn test_bold_italic_merge_missing_encoding() {
        let palette = palette();
        let styles = StyleMap::new()
            .with("font-type", "bold", "1")
            .with("font-type", "italic", "2");
        let def = options(&[("bold", "always"), ("italic", "always")]);
        let err = AttributeResolver::new(&palette, &styles, false)
            .resolve(&def)
            .unwrap_err();
        assert!(matches!(err, SchemeError::MissingStyleEncoding { .. }));
    }

    #[test]
    fn test_end_to_end_keyword() {
        let def = options(&[("bold", "always"), ("foreground", "accent")]);
        let resolved = resolve(&def, false);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.get("font-type"), Some("1"));
        assert_eq!(resolved.get("foreground"), Some("#61AFEF"));
    }

    #[test]
    fn test_definition_is_reusable() {
        let def = options(&[("bold", "always"), ("italic", "theme")]);
        let before = def.clone();
        let _ = resolve(&def, true);
        let _ = resolve(&def, false);
        assert_eq!(def, before);
    }

    proptest! {
        #[test]
        fn prop_shorthand_ignores_italic(token in "[a-z#0-9]{1,10}", italic in any::<bool>()) {
            let palette = palette();
            let def = AttributeDefinition::Foreground(token.clone());
            let resolved = resolve(&def, italic);
            prop_assert_eq!(pairs(&resolved), vec![("foreground", palette.resolve(&token))]);
        }

        #[test]
        fn prop_theme_flag_tracks_italic(italic in any::<bool>()) {
            let def = options(&[("underline", "theme")]);
            let resolved = resolve(&def, italic);
            prop_assert_eq!(resolved.get("effect-type").is_some(), italic);
        }

        #[test]
        fn prop_always_flag_present(italic in any::<bool>()) {
            let def = options(&[("underline", "always"), ("foreground", "accent")]);
            let resolved = resolve(&def, italic);
            prop_assert_eq!(resolved.get("effect-type"), Some("1"));
        }
    }
}

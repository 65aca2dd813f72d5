//! Build variants and variant selection.
//!
//! A scheme family is the cross product of palettes and the italic flag. Each
//! [`Variant`] knows its own output file stem and display name, and
//! [`VariantSelector`] decides whether a conditional style flag applies to it.

use std::fmt;

use crate::palette::DEFAULT_PALETTE;

/// Condition keyword on a style flag.
///
/// `always` applies to every variant; `theme` applies only to italic variants.
/// Any other condition is not a selector and is resolved as a color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantSelector {
    /// Applies regardless of the italic flag.
    Always,
    /// Applies only when the italic flag is set.
    Theme,
}

impl VariantSelector {
    /// Parses a condition string; returns `None` for non-selector values.
    pub fn parse(condition: &str) -> Option<Self> {
        match condition {
            "always" => Some(VariantSelector::Always),
            "theme" => Some(VariantSelector::Theme),
            _ => None,
        }
    }

    /// Returns true if this selector applies under `italic`.
    pub fn applies(self, italic: bool) -> bool {
        match self {
            VariantSelector::Always => true,
            VariantSelector::Theme => italic,
        }
    }
}

/// Returns true if a style flag with `condition` is emitted under `italic`.
pub fn condition_applies(condition: &str, italic: bool) -> bool {
    VariantSelector::parse(condition).is_some_and(|selector| selector.applies(italic))
}

/// One (palette, italic) combination of a scheme family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant {
    palette: String,
    italic: bool,
}

impl Variant {
    /// Creates a variant.
    pub fn new(palette: impl Into<String>, italic: bool) -> Self {
        Self {
            palette: palette.into(),
            italic,
        }
    }

    /// Every combination of `palettes` with the italic flag, palette-major:
    /// `(p0, false), (p0, true), (p1, false), ...`.
    pub fn matrix<I, S>(palettes: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        palettes
            .into_iter()
            .map(Into::into)
            .flat_map(|palette: String| {
                [Self::new(palette.clone(), false), Self::new(palette, true)]
            })
            .collect()
    }

    /// The standard four variants: normal and vivid, each plain and italic.
    pub fn standard() -> Vec<Self> {
        Self::matrix([DEFAULT_PALETTE, "vivid"])
    }

    /// Palette name.
    pub fn palette(&self) -> &str {
        &self.palette
    }

    /// Italic flag.
    pub fn italic(&self) -> bool {
        self.italic
    }

    /// Returns true for the default palette without italics.
    pub fn is_base(&self) -> bool {
        self.palette == DEFAULT_PALETTE && !self.italic
    }

    /// Output file stem: `<base>[_<palette>][_italic]`.
    ///
    /// The palette segment is omitted for the default palette.
    pub fn file_stem(&self, base: &str) -> String {
        let mut stem = base.to_string();
        if self.palette != DEFAULT_PALETTE {
            stem.push('_');
            stem.push_str(&self.palette);
        }
        if self.italic {
            stem.push_str("_italic");
        }
        stem
    }

    /// Scheme display name: `<base>[ <palette>][ italic]`.
    pub fn display_name(&self, base: &str) -> String {
        let mut name = base.to_string();
        if self.palette != DEFAULT_PALETTE {
            name.push(' ');
            name.push_str(&self.palette);
        }
        if self.italic {
            name.push_str(" italic");
        }
        name
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.italic {
            write!(f, "{} (italic)", self.palette)
        } else {
            write!(f, "{}", self.palette)
        }
    }
}

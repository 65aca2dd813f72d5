//! # schemegen-core - Color Scheme Resolution
//!
//! `schemegen-core` turns declarative YAML theme sources into fully concrete
//! editor color scheme documents. It is the resolution half of the `schemegen`
//! generator and performs no file access of its own.
//!
//! ## Core Concepts
//!
//! - [`Palette`]: symbolic color names for one variant (`normal`, `vivid`)
//! - [`StyleMap`]: IDE encodings for abstract style options, plus the option
//!   index used by [`StyleMap::classify`]
//! - [`ThemeDefinition`]: parent scheme, color table, inherited attributes and
//!   [`AttributeDefinition`]s
//! - [`AttributeResolver`]: resolves one attribute for one variant
//! - [`Assembler`]: builds a sorted [`SchemeDocument`]
//! - [`Variant`]: a (palette, italic) combination with its file and display names
//!
//! ## Quick Start
//!
//! ```rust
//! use schemegen_core::{render_xml, Assembler, Palette, StyleMap, ThemeDefinition, Variant};
//!
//! let palette = Palette::from_yaml("normal", "purple: c678dd\n").unwrap();
//! let styles = StyleMap::from_yaml(r#"
//! font-type:
//!   bold: 1
//!   italic: 2
//!   bold-italic: 3
//! "#).unwrap();
//! let theme = ThemeDefinition::from_yaml(r#"
//! parent-scheme: Darcula
//! colors: {}
//! inheriting-attributes: {}
//! attributes:
//!   DEFAULT_KEYWORD:
//!     foreground: purple
//!     bold: always
//!     italic: theme
//! "#).unwrap();
//!
//! let variant = Variant::new("normal", true);
//! let doc = Assembler::new(&palette, &styles)
//!     .assemble(&theme, variant.italic(), &variant.display_name("One Dark"))
//!     .unwrap();
//!
//! let xml = render_xml(&doc).unwrap();
//! assert!(xml.contains(r#"<option name="FONT_TYPE" value="3"/>"#));
//! ```

pub mod attribute;
pub mod definition;
pub mod document;
pub mod error;
pub mod palette;
pub mod style_map;
mod value;
pub mod variant;
pub mod xml;

pub use attribute::{AttributeResolver, ResolvedAttribute, FOREGROUND};
pub use definition::{AttributeDefinition, SubOption, ThemeDefinition};
pub use document::{
    normalize_option_name, Assembler, AttributeBlock, InheritedAttribute, SchemeDocument,
    SchemeOption, SCHEME_VERSION,
};
pub use error::SchemeError;
pub use palette::{Palette, DEFAULT_PALETTE};
pub use style_map::{OptionKind, StyleMap, BOLD_ITALIC, FONT_TYPE};
pub use variant::{condition_applies, Variant, VariantSelector};
pub use xml::render_xml;

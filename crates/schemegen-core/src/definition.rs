//! Theme definition parsing.
//!
//! The theme definition is the IDE-independent source of a scheme. It names the
//! parent scheme, declares the color table, lists attributes that only inherit
//! from another attribute, and describes every styled attribute.
//!
//! # YAML Format
//!
//! ```yaml
//! parent-scheme: Darcula
//!
//! colors:
//!   CARET_COLOR: blue
//!
//! inheriting-attributes:
//!   DEFAULT_CLASS_NAME: DEFAULT_IDENTIFIER
//!
//! attributes:
//!   # Shorthand - a single color token is the foreground
//!   DEFAULT_NUMBER: orange
//!
//!   # Full definition - sub-option to condition or color token
//!   DEFAULT_KEYWORD:
//!     foreground: purple
//!     bold: always
//!     italic: theme
//! ```
//!
//! Parsing only captures structure. Nothing here looks at palettes or the style
//! map; the parsed [`ThemeDefinition`] is immutable and can be resolved for any
//! number of variants.

use serde_yaml::{Mapping, Value};

use crate::error::SchemeError;
use crate::value::{kind, parse_root, scalar, scalar_pairs, section};

/// Sub-option name that marks a bold attribute.
pub const BOLD: &str = "bold";

/// Sub-option name that marks an italic attribute.
pub const ITALIC: &str = "italic";

/// One `name: condition` entry of a full attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubOption {
    /// Sub-option name as written (`foreground`, `bold`, `effect-color`...).
    pub name: String,
    /// Condition keyword or color token.
    pub condition: String,
}

impl SubOption {
    /// Creates a sub-option.
    pub fn new(name: impl Into<String>, condition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            condition: condition.into(),
        }
    }
}

/// Parsed attribute entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeDefinition {
    /// Shorthand: a single color token used as the foreground.
    Foreground(String),
    /// Full definition: sub-options in declaration order.
    Options(Vec<SubOption>),
}

impl AttributeDefinition {
    /// Parses an attribute entry from a YAML value.
    ///
    /// - Scalar → [`AttributeDefinition::Foreground`]
    /// - Mapping → [`AttributeDefinition::Options`]
    pub fn parse(value: &Value, attribute: &str) -> Result<Self, SchemeError> {
        let context = format!("attribute '{}'", attribute);
        match value {
            Value::Mapping(map) => Self::parse_mapping(map, &context),
            Value::Sequence(_) | Value::Null | Value::Tagged(_) => Err(SchemeError::malformed(
                context,
                format!("expected a color token or a mapping, got {}", kind(value)),
            )),
            scalar_value => Ok(AttributeDefinition::Foreground(scalar(
                scalar_value,
                &context,
            )?)),
        }
    }

    fn parse_mapping(map: &Mapping, context: &str) -> Result<Self, SchemeError> {
        let options = scalar_pairs(map, context)?
            .into_iter()
            .map(|(name, condition)| SubOption { name, condition })
            .collect();
        Ok(AttributeDefinition::Options(options))
    }

    /// Returns the sub-option named `name`, if this is a full definition.
    pub fn sub_option(&self, name: &str) -> Option<&SubOption> {
        match self {
            AttributeDefinition::Foreground(_) => None,
            AttributeDefinition::Options(options) => options.iter().find(|o| o.name == name),
        }
    }
}

/// Parsed theme definition document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDefinition {
    /// Scheme the generated schemes inherit from.
    pub parent_scheme: String,
    /// Color table: option name → color token, in declaration order.
    pub colors: Vec<(String, String)>,
    /// Attribute name → base attribute name, in declaration order.
    pub inheriting_attributes: Vec<(String, String)>,
    /// Attribute name → definition, in declaration order.
    pub attributes: Vec<(String, AttributeDefinition)>,
}

impl ThemeDefinition {
    /// Parses a theme definition document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::MalformedSchema`] if a required section is missing
    /// or has the wrong shape, and [`SchemeError::Yaml`] if the text is not YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemeError> {
        let root = parse_root(yaml, "theme definition")?;

        let parent = root.get("parent-scheme").ok_or_else(|| {
            SchemeError::malformed("theme definition", "missing key 'parent-scheme'")
        })?;
        let parent_scheme = scalar(parent, "parent-scheme")?;

        let colors = scalar_pairs(
            section(&root, "colors", "theme definition")?,
            "color table",
        )?;
        let inheriting_attributes = scalar_pairs(
            section(&root, "inheriting-attributes", "theme definition")?,
            "inheriting attributes",
        )?;

        let mut attributes = Vec::new();
        for (key, value) in section(&root, "attributes", "theme definition")? {
            let name = scalar(key, "attributes")?;
            let definition = AttributeDefinition::parse(value, &name)?;
            attributes.push((name, definition));
        }

        Ok(Self {
            parent_scheme,
            colors,
            inheriting_attributes,
            attributes,
        })
    }
}

//! Derived theme JSON files.
//!
//! The IDE theme JSON for the default variant is maintained by hand. Every other
//! variant gets a copy of it with two fields rewritten: `name` becomes the
//! variant's display name and `editorScheme` points at the variant's XML
//! scheme. All other fields, and their order, are kept.

use std::path::PathBuf;

use schemegen_core::{Variant, DEFAULT_PALETTE};
use serde_json::{Map, Value};

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::output::write_file;
use crate::sources::read_document;

/// Theme JSON field holding the display name.
pub const NAME_FIELD: &str = "name";

/// Theme JSON field referencing the editor scheme resource.
pub const EDITOR_SCHEME_FIELD: &str = "editorScheme";

/// Returns a copy of `base` with `name` and `editorScheme` replaced.
pub fn rename_theme(
    base: &Map<String, Value>,
    name: &str,
    editor_scheme: &str,
) -> Map<String, Value> {
    let mut theme = base.clone();
    theme.insert(NAME_FIELD.to_string(), Value::String(name.to_string()));
    theme.insert(
        EDITOR_SCHEME_FIELD.to_string(),
        Value::String(editor_scheme.to_string()),
    );
    theme
}

/// Reads the base theme JSON and writes one renamed copy per non-base variant.
///
/// Returns the paths written, in variant order.
pub fn derive_theme_json(
    config: &BuildConfig,
    variants: &[Variant],
) -> Result<Vec<PathBuf>, BuildError> {
    let base_variant = Variant::new(DEFAULT_PALETTE, false);
    let base_path = config.theme_json_path(&base_variant);

    let text = read_document(&base_path)?;
    let base = match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return Err(BuildError::NotAnObject { path: base_path }),
        Err(source) => {
            return Err(BuildError::Json {
                path: base_path,
                source,
            })
        }
    };

    let mut written = Vec::new();
    for variant in variants.iter().filter(|v| !v.is_base()) {
        let theme = rename_theme(
            &base,
            &variant.display_name(&config.display_name),
            &config.scheme_resource(variant),
        );
        let path = config.theme_json_path(variant);
        let json = serde_json::to_string_pretty(&Value::Object(theme)).map_err(|source| {
            BuildError::Json {
                path: path.clone(),
                source,
            }
        })?;
        write_file(&path, &format!("{}\n", json))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn base_json() -> Value {
        json!({
            "name": "One Dark",
            "dark": true,
            "author": "Mark Skelton",
            "editorScheme": "/themes/one_dark.xml",
            "ui": {"*": {"background": "#21252B"}}
        })
    }

    #[test]
    fn test_rename_theme_keeps_field_order() {
        let base = base_json().as_object().unwrap().clone();
        let renamed = rename_theme(&base, "One Dark vivid", "/themes/one_dark_vivid.xml");
        let keys: Vec<&str> = renamed.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "dark", "author", "editorScheme", "ui"]);
        assert_eq!(renamed["name"], "One Dark vivid");
        assert_eq!(renamed["editorScheme"], "/themes/one_dark_vivid.xml");
        assert_eq!(renamed["ui"], base["ui"]);
    }

    #[test]
    fn test_rename_theme_adds_missing_fields() {
        let base = json!({"dark": true}).as_object().unwrap().clone();
        let renamed = rename_theme(&base, "One Dark italic", "/themes/one_dark_italic.xml");
        let keys: Vec<&str> = renamed.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["dark", "name", "editorScheme"]);
    }

    #[test]
    fn test_derive_writes_three_copies() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::with_dirs(dir.path(), dir.path());
        fs::write(
            dir.path().join("one_dark.theme.json"),
            serde_json::to_string(&base_json()).unwrap(),
        )
        .unwrap();

        let written = derive_theme_json(&config, &Variant::standard()).unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "one_dark_italic.theme.json",
                "one_dark_vivid.theme.json",
                "one_dark_vivid_italic.theme.json"
            ]
        );

        let vivid: Value =
            serde_json::from_str(&fs::read_to_string(&written[2]).unwrap()).unwrap();
        assert_eq!(vivid["name"], "One Dark vivid italic");
        assert_eq!(vivid["editorScheme"], "/themes/one_dark_vivid_italic.xml");
        assert_eq!(vivid["author"], "Mark Skelton");
    }

    #[test]
    fn test_derive_writes_pretty_json_with_newline() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::with_dirs(dir.path(), dir.path());
        fs::write(
            dir.path().join("one_dark.theme.json"),
            serde_json::to_string(&base_json()).unwrap(),
        )
        .unwrap();

        let written = derive_theme_json(&config, &Variant::standard()).unwrap();
        let text = fs::read_to_string(&written[0]).unwrap();
        assert!(text.starts_with("{\n  \"name\": \"One Dark italic\",\n"));
        assert!(text.ends_with("}\n"));
        assert!(!text.ends_with("}\n\n"));
    }

    #[test]
    fn test_derive_missing_base() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::with_dirs(dir.path(), dir.path());
        let err = derive_theme_json(&config, &Variant::standard()).unwrap_err();
        assert!(matches!(err, BuildError::MissingInputDocument { .. }));
    }

    #[test]
    fn test_derive_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::with_dirs(dir.path(), dir.path());
        fs::write(dir.path().join("one_dark.theme.json"), "[1, 2]").unwrap();
        let err = derive_theme_json(&config, &Variant::standard()).unwrap_err();
        assert!(matches!(err, BuildError::NotAnObject { .. }));
    }
}

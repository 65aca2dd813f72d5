//! Build configuration.
//!
//! [`BuildConfig`] says where the YAML sources live, where generated files go
//! and how they are named. The defaults reproduce the standard One Dark layout:
//!
//! ```text
//! scripts/config/colors/normal.yaml     palette per variant
//! scripts/config/colors/vivid.yaml
//! scripts/config/ide.yaml               style map
//! scripts/config/theme.yaml             theme definition
//!
//! src/main/resources/themes/one_dark.xml
//! src/main/resources/themes/one_dark_italic.xml
//! src/main/resources/themes/one_dark_vivid.xml
//! src/main/resources/themes/one_dark_vivid_italic.xml
//! src/main/resources/themes/one_dark.theme.json   (hand-maintained base)
//! src/main/resources/themes/one_dark_*.theme.json (derived)
//! ```

use std::path::PathBuf;

use schemegen_core::{Variant, DEFAULT_PALETTE};

/// Default YAML source directory.
pub const DEFAULT_SOURCE_DIR: &str = "scripts/config";

/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = "src/main/resources/themes";

/// Default output file stem.
pub const DEFAULT_FILE_NAME: &str = "one_dark";

/// Default scheme display name.
pub const DEFAULT_DISPLAY_NAME: &str = "One Dark";

/// Default resource path prefix used in derived JSON `editorScheme` fields.
pub const DEFAULT_SCHEME_PREFIX: &str = "/themes";

/// Where sources are read from and how outputs are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory holding `ide.yaml`, `theme.yaml` and `colors/`.
    pub source_dir: PathBuf,
    /// Directory generated files are written to.
    pub out_dir: PathBuf,
    /// Base output file stem (`one_dark`).
    pub file_name: String,
    /// Base scheme display name (`One Dark`).
    pub display_name: String,
    /// Palettes to build, in order.
    pub palettes: Vec<String>,
    /// Resource path prefix for `editorScheme` in derived JSON files.
    pub scheme_prefix: String,
    /// Whether to derive the per-variant theme JSON files.
    pub derive_json: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            palettes: vec![DEFAULT_PALETTE.to_string(), "vivid".to_string()],
            scheme_prefix: DEFAULT_SCHEME_PREFIX.to_string(),
            derive_json: true,
        }
    }
}

impl BuildConfig {
    /// Default configuration reading from `source_dir` and writing to `out_dir`.
    pub fn with_dirs(source_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    /// Every variant to build, palette-major.
    pub fn variants(&self) -> Vec<Variant> {
        Variant::matrix(self.palettes.iter().cloned())
    }

    /// Path of a palette document.
    pub fn palette_path(&self, palette: &str) -> PathBuf {
        self.source_dir
            .join("colors")
            .join(format!("{}.yaml", palette))
    }

    /// Path of the style map document.
    pub fn style_map_path(&self) -> PathBuf {
        self.source_dir.join("ide.yaml")
    }

    /// Path of the theme definition document.
    pub fn theme_path(&self) -> PathBuf {
        self.source_dir.join("theme.yaml")
    }

    /// Output path of a variant's XML scheme.
    pub fn scheme_path(&self, variant: &Variant) -> PathBuf {
        self.out_dir
            .join(format!("{}.xml", variant.file_stem(&self.file_name)))
    }

    /// Path of a variant's theme JSON.
    pub fn theme_json_path(&self, variant: &Variant) -> PathBuf {
        self.out_dir
            .join(format!("{}.theme.json", variant.file_stem(&self.file_name)))
    }

    /// Resource path of a variant's XML scheme, as referenced from theme JSON.
    pub fn scheme_resource(&self, variant: &Variant) -> String {
        format!(
            "{}/{}.xml",
            self.scheme_prefix.trim_end_matches('/'),
            variant.file_stem(&self.file_name)
        )
    }
}

//! The variant driver.
//!
//! [`Builder`] runs one build: it loads the style map and theme definition,
//! then for each palette loads the palette and writes the plain and italic
//! schemes, and finally derives the theme JSON copies.
//!
//! Variants are built one after another. Nothing computed for one variant is
//! reused by the next except the immutable style map and theme definition, so
//! a build with unchanged sources always produces the same bytes.

use std::path::PathBuf;

use schemegen_core::{render_xml, Assembler, Palette, StyleMap, ThemeDefinition, Variant};
use tracing::info;

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::output::{ensure_dir, write_file};
use crate::sources::{load_palette, load_style_map, load_theme};
use crate::theme_json::derive_theme_json;

/// Files written by a build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// XML schemes, in variant order.
    pub schemes: Vec<PathBuf>,
    /// Derived theme JSON files, in variant order.
    pub theme_json: Vec<PathBuf>,
}

/// Runs every variant of a build.
#[derive(Debug, Clone)]
pub struct Builder {
    config: BuildConfig,
}

impl Builder {
    /// Creates a builder for `config`.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Returns the build configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Builds every variant, then derives the theme JSON files.
    ///
    /// # Errors
    ///
    /// The first failure aborts the build. Files already written stay on disk.
    pub fn run(&self) -> Result<BuildReport, BuildError> {
        ensure_dir(&self.config.out_dir)?;

        let styles = load_style_map(&self.config)?;
        let theme = load_theme(&self.config)?;

        let mut report = BuildReport::default();
        for palette_name in &self.config.palettes {
            let palette = load_palette(&self.config, palette_name)?;
            for italic in [false, true] {
                let variant = Variant::new(palette_name.clone(), italic);
                let path = self.build_variant(&variant, &palette, &styles, &theme)?;
                report.schemes.push(path);
            }
        }

        if self.config.derive_json {
            report.theme_json = derive_theme_json(&self.config, &self.config.variants())?;
        }

        info!(
            schemes = report.schemes.len(),
            theme_json = report.theme_json.len(),
            "build finished"
        );
        Ok(report)
    }

    /// Assembles and writes the scheme for one variant, returning its path.
    pub fn build_variant(
        &self,
        variant: &Variant,
        palette: &Palette,
        styles: &StyleMap,
        theme: &ThemeDefinition,
    ) -> Result<PathBuf, BuildError> {
        let path = self.config.scheme_path(variant);
        let name = variant.display_name(&self.config.display_name);
        info!(%variant, scheme = %name, "building scheme");

        let xml = Assembler::new(palette, styles)
            .assemble(theme, variant.italic(), &name)
            .and_then(|doc| render_xml(&doc))
            .map_err(|source| BuildError::Scheme {
                path: path.clone(),
                source,
            })?;

        write_file(&path, &xml)?;
        Ok(path)
    }
}

//! # schemegen - Color Scheme Family Generator
//!
//! `schemegen` generates every palette/italic variant of an editor color scheme
//! from three kinds of YAML source:
//!
//! - `colors/<palette>.yaml`: one palette per color variant
//! - `ide.yaml`: the IDE encodings for abstract style options
//! - `theme.yaml`: the theme definition
//!
//! Resolution lives in [`schemegen_core`]; this crate adds the file layout
//! ([`BuildConfig`]), source loading, the variant driver ([`Builder`]) and the
//! derived theme JSON step.
//!
//! ## Example
//!
//! ```rust,no_run
//! use schemegen::{BuildConfig, Builder};
//!
//! let config = BuildConfig::with_dirs("scripts/config", "src/main/resources/themes");
//! let report = Builder::new(config).run()?;
//! for path in &report.schemes {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), schemegen::BuildError>(())
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod output;
pub mod sources;
pub mod theme_json;

pub use build::{BuildReport, Builder};
pub use config::BuildConfig;
pub use error::BuildError;
pub use theme_json::{derive_theme_json, rename_theme};

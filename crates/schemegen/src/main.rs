use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use schemegen::config::{
    DEFAULT_DISPLAY_NAME, DEFAULT_FILE_NAME, DEFAULT_OUT_DIR, DEFAULT_SCHEME_PREFIX,
    DEFAULT_SOURCE_DIR,
};
use schemegen::{BuildConfig, Builder};
use tracing::{info, Level};

/// Generate every palette and italic variant of the color scheme.
#[derive(Debug, Parser)]
#[command(name = "schemegen", version, about)]
struct Cli {
    /// Directory containing ide.yaml, theme.yaml and colors/
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SOURCE_DIR)]
    source: PathBuf,

    /// Directory the generated schemes are written to
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Base file name of the generated schemes
    #[arg(long, value_name = "STEM", default_value = DEFAULT_FILE_NAME)]
    file_name: String,

    /// Base display name of the generated schemes
    #[arg(long, value_name = "NAME", default_value = DEFAULT_DISPLAY_NAME)]
    display_name: String,

    /// Palette to build (repeatable)
    #[arg(long = "palette", value_name = "NAME", default_values = ["normal", "vivid"])]
    palettes: Vec<String>,

    /// Resource path prefix written to editorScheme in derived theme JSON
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SCHEME_PREFIX)]
    scheme_prefix: String,

    /// Skip deriving the per-variant theme JSON files
    #[arg(long)]
    skip_json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> BuildConfig {
        BuildConfig {
            source_dir: self.source,
            out_dir: self.out,
            file_name: self.file_name,
            display_name: self.display_name,
            palettes: self.palettes,
            scheme_prefix: self.scheme_prefix,
            derive_json: !self.skip_json,
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.into_config();
    let source = config.source_dir.clone();
    Builder::new(config)
        .run()
        .with_context(|| format!("building schemes from {}", source.display()))?;

    info!("theme files generated");
    println!("Theme files generated!");
    Ok(())
}

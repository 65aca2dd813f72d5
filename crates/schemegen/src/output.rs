//! Writing generated files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::BuildError;

/// Creates `dir` and its parents if they do not exist.
pub fn ensure_dir(dir: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(dir).map_err(|source| BuildError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes `contents` to `path`, replacing any existing file.
///
/// The handle is flushed before returning and closed when it goes out of scope,
/// whether or not the write succeeded.
pub fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    let to_error = |source: std::io::Error| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(to_error)?);
    writer.write_all(contents.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

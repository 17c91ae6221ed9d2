// crates/apply_title/src/lib.rs

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

mod writer;

pub use writer::{FfmpegWriter, MetadataWriter, ToolError};

/// Prefix of the scratch directory created next to each file being retitled.
pub const SCRATCH_PREFIX: &str = ".change-title-";

#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("{} has no file name", .path.display())]
    NoFileName { path: PathBuf },
    #[error("could not prepare a scratch directory for {}: {source}", .path.display())]
    Workspace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{source}")]
    Tool {
        path: PathBuf,
        #[source]
        source: ToolError,
    },
    #[error("rewrote {} but could not replace it: {source}", .path.display())]
    Install {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Sets the title metadata of `path` to `title` and returns the applied title.
///
/// The retitled copy is staged in a scratch directory beside the file and
/// renamed over the original only once the writer succeeded, so the original
/// is either fully replaced or left untouched. The scratch directory is
/// removed on every exit path.
pub fn apply_title<W: MetadataWriter + ?Sized>(
    path: &Path,
    title: &str,
    writer: &W,
) -> Result<String, ApplyError> {
    let file_name = path.file_name().ok_or_else(|| ApplyError::NoFileName {
        path: path.to_path_buf(),
    })?;

    let input = absolute(path).map_err(|source| ApplyError::Workspace {
        path: path.to_path_buf(),
        source,
    })?;
    // Staging in the same directory keeps the final rename on one filesystem.
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let scratch = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir_in(parent)
        .map_err(|source| ApplyError::Workspace {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("Staging {} in {}", path.display(), scratch.path().display());

    let staged = scratch.path().join(file_name);
    writer
        .write_title(&input, &staged, title, scratch.path())
        .map_err(|source| ApplyError::Tool {
            path: path.to_path_buf(),
            source,
        })?;

    copy_permissions(&input, &staged);

    fs::rename(&staged, &input).map_err(|source| ApplyError::Install {
        path: path.to_path_buf(),
        source,
    })?;

    if let Err(err) = scratch.close() {
        log::warn!("Could not remove scratch directory for {}: {}", path.display(), err);
    }
    Ok(title.to_string())
}

fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

fn copy_permissions(from: &Path, to: &Path) {
    let result = fs::metadata(from).and_then(|meta| fs::set_permissions(to, meta.permissions()));
    if let Err(err) = result {
        log::warn!("Could not carry permissions of {} over: {}", from.display(), err);
    }
}

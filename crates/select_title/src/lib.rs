// crates/select_title/src/lib.rs

use std::io;
use std::path::Path;

mod console;

pub use console::{Console, LineConsole};

/// How a new title is chosen for each file of a batch.
///
/// An explicit `title` wins over `filetitle`, which wins over `interactive`.
/// With none of them set, files are left alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TitleSelection {
    /// Title applied verbatim to every file.
    pub title: Option<String>,
    /// Derive the title from the file name.
    pub filetitle: bool,
    /// Ask for each file's title on the console.
    pub interactive: bool,
}

impl TitleSelection {
    /// The explicit title, if one was given. An empty string counts as unset.
    pub fn explicit_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// True when no rule would ever produce a title.
    pub fn is_noop(&self) -> bool {
        self.explicit_title().is_none() && !self.filetitle && !self.interactive
    }
}

/// Picks the new title for `path`.
///
/// Returns `Ok(None)` when nothing was requested for this file. Only the
/// interactive branch touches the console; every other branch is pure.
pub fn select_title<C: Console + ?Sized>(
    path: &Path,
    selection: &TitleSelection,
    console: &mut C,
) -> io::Result<Option<String>> {
    if let Some(title) = selection.explicit_title() {
        return Ok(Some(title.to_string()));
    }

    if selection.filetitle {
        return file_title(path).map(Some).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cannot derive a title from {}", path.display()),
            )
        });
    }

    if selection.interactive {
        let title = console.read_title(path)?;
        log::debug!("Read title {:?} for {}", title, path.display());
        return Ok(Some(title));
    }

    Ok(None)
}

/// File name of `path` without its directory and final extension.
///
/// `videos/My Clip.mkv` gives `My Clip`. Dot-files keep their name.
pub fn file_title(path: &Path) -> Option<String> {
    path.file_stem().map(|stem| stem.to_string_lossy().into_owned())
}

// crates/change_video_title/src/lib.rs

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use apply_title::{apply_title, MetadataWriter};
use select_title::{select_title, Console};

pub mod config;

pub use config::{build_cli, AppConfig};

/// What happened to one file of the batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// The title metadata now holds this value.
    Changed(String),
    /// No title was requested for the file.
    Unchanged,
    /// The file was left as it was; carries the reason.
    Failed(String),
}

impl FileOutcome {
    /// The status line printed for `path`.
    pub fn status_line(&self, path: &Path) -> StatusLine<'_> {
        StatusLine {
            path: path.to_path_buf(),
            outcome: self,
        }
    }
}

pub struct StatusLine<'a> {
    path: PathBuf,
    outcome: &'a FileOutcome,
}

impl fmt::Display for StatusLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match self.outcome {
            FileOutcome::Changed(title) => write!(f, "Title for {} changed to \"{}\".", path, title),
            FileOutcome::Unchanged => write!(f, "Title for {} unchanged.", path),
            FileOutcome::Failed(reason) => write!(f, "Title for {} not changed: {}", path, reason),
        }
    }
}

/// Outcomes of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<(PathBuf, FileOutcome)>,
    /// Set when `--fail-fast` stopped the batch before the end of the list.
    pub aborted: bool,
}

impl BatchReport {
    pub fn changed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Changed(_)))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Unchanged))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    pub fn success(&self) -> bool {
        !self.aborted && self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Selects a title for `path` and, when one was produced, applies it.
pub fn process_file<C, W>(path: &Path, config: &AppConfig, console: &mut C, writer: &W) -> FileOutcome
where
    C: Console + ?Sized,
    W: MetadataWriter + ?Sized,
{
    let title = match select_title(path, &config.selection, console) {
        Ok(Some(title)) => title,
        Ok(None) => return FileOutcome::Unchanged,
        Err(err) => return FileOutcome::Failed(format!("no title selected: {}", err)),
    };

    match apply_title(path, &title, writer) {
        Ok(applied) => FileOutcome::Changed(applied),
        Err(err) => FileOutcome::Failed(err.to_string()),
    }
}

/// Processes `config.files` in order, writing one status line per file to `out`.
///
/// A failed file does not stop the batch unless `config.fail_fast` is set.
/// Only errors writing to `out` or pausing on the console are returned.
pub fn run_batch<C, W, O>(
    config: &AppConfig,
    console: &mut C,
    writer: &W,
    out: &mut O,
) -> io::Result<BatchReport>
where
    C: Console + ?Sized,
    W: MetadataWriter + ?Sized,
    O: Write + ?Sized,
{
    let mut report = BatchReport::default();

    for (index, path) in config.files.iter().enumerate() {
        let outcome = process_file(path, config, console, writer);
        writeln!(out, "{}", outcome.status_line(path))?;
        out.flush()?;

        let failed = matches!(outcome, FileOutcome::Failed(_));
        if let FileOutcome::Failed(reason) = &outcome {
            log::warn!("{}: {}", path.display(), reason);
        }
        report.outcomes.push((path.clone(), outcome));

        if failed && config.fail_fast {
            let remaining = config.files.len() - index - 1;
            if remaining > 0 {
                log::warn!("Stopping early; {} file(s) not processed", remaining);
                report.aborted = true;
            }
            break;
        }
    }

    log::debug!(
        "{} changed, {} unchanged, {} failed",
        report.changed(),
        report.unchanged(),
        report.failed()
    );

    if config.prompt {
        console.pause()?;
    }
    Ok(report)
}

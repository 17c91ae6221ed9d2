// crates/apply_title/src/writer.rs

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// Failure of the external metadata tool.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("could not run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} exited with {status}{}", .program.display(), describe_stderr(.stderr))]
    Failed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
}

fn describe_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Writes a copy of a media file with its title metadata replaced.
pub trait MetadataWriter {
    /// Reads `input` and writes the retitled copy to `output`, running from `workdir`.
    fn write_title(
        &self,
        input: &Path,
        output: &Path,
        title: &str,
        workdir: &Path,
    ) -> Result<(), ToolError>;
}

/// `ffmpeg` in stream-copy mode.
#[derive(Clone, Debug)]
pub struct FfmpegWriter {
    pub program: PathBuf,
}

impl Default for FfmpegWriter {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ffmpeg"),
        }
    }
}

impl FfmpegWriter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for one invocation. Every stream is mapped and copied as-is.
    pub fn args(input: &Path, output: &Path, title: &str) -> Vec<OsString> {
        let mut title_arg = OsString::from("title=");
        title_arg.push(title);
        vec![
            "-nostdin".into(),
            "-loglevel".into(),
            "fatal".into(),
            "-i".into(),
            input.into(),
            "-map".into(),
            "0".into(),
            "-c".into(),
            "copy".into(),
            "-metadata".into(),
            title_arg,
            output.into(),
        ]
    }
}

impl MetadataWriter for FfmpegWriter {
    fn write_title(
        &self,
        input: &Path,
        output: &Path,
        title: &str,
        workdir: &Path,
    ) -> Result<(), ToolError> {
        let args = Self::args(input, output, title);
        log::debug!("Running {} {:?} in {}", self.program.display(), args, workdir.display());

        let out = Command::new(&self.program)
            .args(&args)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ToolError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !out.status.success() {
            return Err(ToolError::Failed {
                program: self.program.clone(),
                status: out.status,
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

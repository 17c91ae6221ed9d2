// crates/select_title/src/console.rs

use std::io::{self, BufRead, Write};
use std::path::Path;

/// Terminal interaction needed while titling a batch of files.
pub trait Console {
    /// Asks for the new title of `path` and returns the line the user entered.
    fn read_title(&mut self, path: &Path) -> io::Result<String>;

    /// Blocks until the user acknowledges the end of the run.
    fn pause(&mut self) -> io::Result<()>;
}

/// Line-oriented console over any reader/writer pair.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the writer, mostly so tests can inspect what was prompted.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_title(&mut self, path: &Path) -> io::Result<String> {
        write!(self.output, "Enter new title for {}: ", path.display())?;
        self.output.flush()?;
        // An empty line is a valid (empty) title; only end of input is an error.
        self.read_line()?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a title was entered",
            )
        })
    }

    fn pause(&mut self) -> io::Result<()> {
        writeln!(self.output, "Press Enter to continue.")?;
        self.output.flush()?;
        self.read_line().map(|_| ())
    }
}

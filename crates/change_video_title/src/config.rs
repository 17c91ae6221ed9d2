// crates/change_video_title/src/config.rs

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use select_title::TitleSelection;

/// Runtime configuration for one invocation, built once from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub selection: TitleSelection,
    /// Wait for Enter before exiting.
    pub prompt: bool,
    /// Stop at the first file that could not be retitled.
    pub fail_fast: bool,
    /// Program used to rewrite the metadata.
    pub ffmpeg: PathBuf,
    pub verbose: bool,
    pub files: Vec<PathBuf>,
}

impl AppConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let flag = |id: &str| matches.get_flag(id);
        Self {
            selection: TitleSelection {
                title: matches.get_one::<String>("title").cloned(),
                filetitle: flag("filetitle"),
                interactive: flag("interactive"),
            },
            prompt: flag("prompt"),
            fail_fast: flag("fail_fast"),
            ffmpeg: matches
                .get_one::<PathBuf>("ffmpeg")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("ffmpeg")),
            verbose: flag("verbose"),
            files: matches
                .get_many::<PathBuf>("FILE")
                .unwrap_or_default()
                .cloned()
                .collect(),
        }
    }
}

pub fn build_cli() -> Command {
    Command::new("change_video_title")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Change title metadata for a specified video file or files using FFmpeg.")
        .arg(
            Arg::new("FILE")
                .required(true)
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Video file(s) to retitle"),
        )
        .arg(
            Arg::new("filetitle")
                .long("filetitle")
                .help("Sets new title based on filename")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interactive")
                .long("interactive")
                .help("Prompt for each file's new title")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .help("Prompt before exiting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .num_args(1)
                .value_name("TITLE")
                .help("Sets new title for every file"),
        )
        .arg(
            Arg::new("fail_fast")
                .long("fail-fast")
                .help("Stop at the first file that could not be changed")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ffmpeg")
                .long("ffmpeg")
                .num_args(1)
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("FFmpeg executable to use [default: ffmpeg from PATH]"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

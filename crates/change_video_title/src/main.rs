// crates/change_video_title/src/main.rs

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use apply_title::FfmpegWriter;
use change_video_title::{build_cli, run_batch, AppConfig};
use log::LevelFilter;
use select_title::LineConsole;

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}

fn run(config: &AppConfig) -> Result<bool> {
    let writer = FfmpegWriter::new(&config.ffmpeg);
    let mut console = LineConsole::stdio();
    let mut stdout = io::stdout();

    if config.selection.is_noop() {
        log::info!("No --title, --filetitle or --interactive given; nothing will change");
    }

    let report = run_batch(config, &mut console, &writer, &mut stdout)
        .context("Failed to report progress")?;
    Ok(report.success())
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    let config = AppConfig::from_matches(&matches);
    init_logging(config.verbose);
    log::debug!("{:?}", config);

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

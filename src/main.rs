use std::process::ExitCode;

use clap::Parser;
use eyre::{Context, Result};
use log::info;

use loopcheck::cli::Cli;
use loopcheck::pipeline;
use loopcheck::report::Palette;

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let palette = if cli.no_color {
        Palette::plain()
    } else {
        Palette::ansi()
    };

    info!("analyzing {}", cli.path.display());
    let mut stdout = std::io::stdout().lock();
    let verdict = pipeline::run(&cli.path, &palette, &mut stdout)
        .context("Failed to write analysis report")?;

    Ok(ExitCode::from(verdict.exit_code()))
}

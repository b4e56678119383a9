use std::io;
use std::process::ExitCode;

use astroguide_cli::{Cli, Context, run};
use astroguide_config::AppConfig;
use clap::Parser;
use log::LevelFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::discover(cli.config.as_deref())?;
    let ctx = Context {
        config,
        json: cli.json,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(cli.command, &ctx, &mut stdin.lock(), &mut stdout.lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

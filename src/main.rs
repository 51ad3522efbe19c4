use anyhow::Result;
use clap::{CommandFactory, Parser};

use dirsnap::cli::{Cli, Command};
use dirsnap::commands;
use dirsnap::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand; no subcommand runs the interactive flow
    match cli.command {
        Some(Command::Print(args)) => {
            tracing::info!(?args, "Printing tree");
            commands::print::run(args)?;
        }
        Some(Command::Export(args)) => {
            tracing::info!(?args, "Exporting tree");
            commands::export::run(args, &config)?;
        }
        Some(Command::Completions(args)) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "dirsnap",
                &mut std::io::stdout(),
            );
        }
        None => {
            tracing::info!("Starting interactive run");
            commands::interactive::run(&config)?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dirsnap={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use hwtelem_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Default log level when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Commands::Sections = command {
        handlers::sections::execute();
        return Ok(());
    }

    let config = CliConfig::from_env(cli.timeout_secs)?;
    let ctx = bootstrap(config);

    match command {
        Commands::Get { section, json } => handlers::get::execute(&ctx, &section, json).await?,
        Commands::All { json } => handlers::all::execute(&ctx, json).await?,
        Commands::Config => handlers::config::execute(&ctx),
        Commands::Sections => handlers::sections::execute(),
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        // Exit without waiting on samples abandoned by a timeout
        std::process::exit(code);
    }
}

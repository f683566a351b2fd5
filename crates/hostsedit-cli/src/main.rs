//! CLI entry point.
//!
//! Wiring happens in `bootstrap` (the composition root); command dispatch
//! routes to handlers which delegate to hostsedit-runtime. Exit codes come
//! from `CliError::exit_code`, so each failure class is scriptable.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hostsedit_cli::{Cli, CliConfig, CliError, Commands, PythonCommand, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // Bootstrap the CLI context (composition root)
    let config = CliConfig::with_defaults(cli.yes, cli.python)?;
    let ctx = bootstrap(config);

    // Dispatch to the appropriate handler; no command means launch
    let Some(command) = cli.command else {
        return handlers::launch::execute(&ctx).await;
    };

    match command {
        Commands::Launch => handlers::launch::execute(&ctx).await,
        Commands::Fetch { url } => handlers::fetch::execute(&ctx, url).await,
        Commands::Python { command } => match command {
            PythonCommand::Install => handlers::python::install(&ctx).await,
            PythonCommand::Status => handlers::python::status(&ctx),
        },
        Commands::Status { json } => handlers::status::execute(&ctx, json),
        Commands::CheckDeps => handlers::check_deps::execute(ctx.probe.as_ref()),
        Commands::Paths => handlers::paths::execute(&ctx),
    }
}

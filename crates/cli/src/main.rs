//! Unitgate CLI - unit conversions behind a paid-plan check

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use unitgate_cli::{commands, Cli, CommandStatus, Commands, Session};

fn setup_logging() {
    use tracing_subscriber::{
        filter::{EnvFilter, LevelFilter},
        fmt,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    setup_logging();
    let cli = Cli::parse();

    if let Some(Commands::Init { path }) = &cli.command {
        commands::init::run(path.as_deref().unwrap_or_else(|| Path::new(".")))?;
        return Ok(ExitCode::SUCCESS);
    }
    if let Some(Commands::Pricing) = &cli.command {
        commands::pricing::run();
        return Ok(ExitCode::SUCCESS);
    }

    let mut session = Session::open(cli.backend.as_deref())?;

    let status = match cli.command {
        Some(Commands::Convert { value, from, to }) => {
            commands::convert::run(&mut session, value, &from, &to).await
        }
        Some(Commands::Units) => commands::units::run(&mut session).await,
        Some(Commands::Verify { license_key }) => {
            commands::license::run_verify(&mut session, &license_key).await?
        }
        Some(Commands::Refresh) => commands::license::run_refresh(&mut session).await,
        Some(Commands::Checkout { interval, no_open }) => {
            commands::checkout::run(&session, interval, no_open).await
        }
        Some(Commands::Status) | None => commands::license::run_status(&mut session).await,
        Some(Commands::Init { .. }) | Some(Commands::Pricing) => CommandStatus::Success,
    };

    Ok(status.into())
}

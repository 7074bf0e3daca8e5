//! Unitgate CLI library: exposed for integration tests

pub mod commands;
pub mod output;
pub mod session;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use unitgate_core::CheckoutInterval;

pub use session::Session;

#[derive(Parser)]
#[command(name = "unitgate")]
#[command(about = "Unit conversions with Free and Pro plans", long_about = None)]
#[command(version = unitgate_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backend base URL (overrides .unitgate.toml and UNITGATE_BACKEND_URL)
    #[arg(long, global = true)]
    pub backend: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a value between two units
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true, value_parser = parse_finite)]
        value: f64,

        /// Source unit (e.g. mi)
        from: String,

        /// Target unit (e.g. km)
        to: String,
    },

    /// List the units your plan offers
    Units,

    /// Show current plan and expiry (default command)
    Status,

    /// Redeem a license key
    Verify {
        /// License key to redeem
        license_key: String,
    },

    /// Renew the stored entitlement now
    Refresh,

    /// Start a Pro checkout in the browser
    Checkout {
        /// Billing interval: monthly or yearly
        #[arg(long, default_value = "monthly")]
        interval: CheckoutInterval,

        /// Print the checkout URL without opening a browser
        #[arg(long)]
        no_open: bool,
    },

    /// Show plans and prices
    Pricing,

    /// Initialize .unitgate.toml configuration
    Init {
        /// Path to initialize (default: current directory)
        path: Option<PathBuf>,
    },
}

/// Parses a conversion value, rejecting NaN and infinities.
pub fn parse_finite(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{raw}' is not a finite number"))
    }
}

/// How a command finished, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// The request failed; the reason was already printed.
    Failed,
    /// The backend requires Pro for this request.
    UpgradeRequired,
}

impl CommandStatus {
    pub fn code(self) -> u8 {
        match self {
            CommandStatus::Success => 0,
            CommandStatus::Failed => 1,
            CommandStatus::UpgradeRequired => 2,
        }
    }
}

impl From<CommandStatus> for ExitCode {
    fn from(status: CommandStatus) -> Self {
        ExitCode::from(status.code())
    }
}

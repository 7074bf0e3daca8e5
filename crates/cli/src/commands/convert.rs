//! Convert command: sends one conversion and renders the paywall outcome

use colored::Colorize;
use unitgate_core::{ConvertError, Plan};

use crate::{CommandStatus, Session};

pub async fn run(session: &mut Session, value: f64, from: &str, to: &str) -> CommandStatus {
    let outcome = session.controller.maybe_refresh().await;
    tracing::debug!(?outcome, "opportunistic refresh");

    let catalog = session.controller.catalog();
    for unit in [from, to] {
        if !catalog.offers(unit) {
            tracing::info!(unit, plan = %catalog.plan, "unit not in local catalog; asking backend anyway");
        }
    }

    let token = session.controller.state().token.clone();
    let status = match session.gateway.convert(value, from, to, &token).await {
        Ok(result) => {
            println!("{} {} = {} {}", value, from, result, to);
            CommandStatus::Success
        }
        Err(ConvertError::Paywall) => {
            eprintln!("  {} {}", "\u{26a1}".yellow(), ConvertError::Paywall);
            eprintln!(
                "  Run '{}' to upgrade or '{}' if you have a key.",
                "unitgate checkout".bold(),
                "unitgate verify <KEY>".bold(),
            );
            CommandStatus::UpgradeRequired
        }
        Err(ConvertError::Request(e)) => {
            eprintln!("  {} {}", "Error:".red().bold(), e);
            CommandStatus::Failed
        }
    };

    if catalog.plan == Plan::Free {
        eprintln!(
            "  {}",
            "Tip: Try converting in\u{2194}cm or mi\u{2194}km after upgrading to Pro.".dimmed()
        );
    }
    status
}

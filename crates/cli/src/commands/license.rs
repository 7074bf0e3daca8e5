//! License commands: redeem a key, show status, renew the entitlement

use anyhow::Result;
use colored::Colorize;
use unitgate_core::{RefreshOutcome, VerifyError};

use crate::output::print_entitlement;
use crate::{CommandStatus, Session};

/// Runs `unitgate verify <KEY>`.
///
/// A rejected key is printed and reported as a failed command; only a
/// store failure after a successful verification is returned as an error.
pub async fn run_verify(session: &mut Session, license_key: &str) -> Result<CommandStatus> {
    eprint!("  Verifying license... ");
    match session.controller.redeem_license(license_key).await {
        Ok(redemption) => {
            eprintln!("{}", "done".green());
            eprintln!("  {} {}", "\u{2713}".green(), redemption.message);
            eprintln!();
            print_entitlement(
                &session.controller.effective(),
                session.controller.state(),
                session.controller.now(),
            );
            Ok(CommandStatus::Success)
        }
        Err(VerifyError::Store(e)) => {
            eprintln!("{}", "failed".red());
            Err(e.into())
        }
        Err(e) => {
            eprintln!("{}", "failed".red());
            eprintln!("  {}", e);
            Ok(CommandStatus::Failed)
        }
    }
}

/// Runs `unitgate status`. Renews the token first if it is close to expiring.
pub async fn run_status(session: &mut Session) -> CommandStatus {
    let outcome = session.controller.maybe_refresh().await;
    tracing::debug!(?outcome, "opportunistic refresh");

    print_entitlement(
        &session.controller.effective(),
        session.controller.state(),
        session.controller.now(),
    );
    CommandStatus::Success
}

/// Runs `unitgate refresh`.
pub async fn run_refresh(session: &mut Session) -> CommandStatus {
    match session.controller.refresh().await {
        RefreshOutcome::Renewed => {
            eprintln!("  {} Entitlement renewed.", "\u{2713}".green());
        }
        RefreshOutcome::NoToken => {
            eprintln!(
                "  Nothing to renew. Run '{}' to redeem a license key.",
                "unitgate verify <KEY>".bold()
            );
        }
        RefreshOutcome::NotDue => {}
        RefreshOutcome::Failed(_) => {
            eprintln!("  {}", "Could not renew right now; keeping current plan.".dimmed());
        }
    }
    eprintln!();
    print_entitlement(
        &session.controller.effective(),
        session.controller.state(),
        session.controller.now(),
    );
    CommandStatus::Success
}

//! Checkout command: opens a payment session in the browser

use colored::Colorize;
use unitgate_core::{CheckoutInterval, UrlOpener};

use crate::{CommandStatus, Session};

/// Opens URLs with the system browser.
pub struct BrowserOpener;

impl UrlOpener for BrowserOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

/// Prints the URL instead of opening it.
pub struct NoopOpener;

impl UrlOpener for NoopOpener {
    fn open(&self, _url: &str) -> std::io::Result<()> {
        Ok(())
    }
}

/// Runs `unitgate checkout`.
///
/// Completion is not tracked: after paying, the user redeems the emailed
/// key with `unitgate verify` or waits for the next refresh.
pub async fn run(session: &Session, interval: CheckoutInterval, no_open: bool) -> CommandStatus {
    eprintln!(
        "{}",
        format!("  Upgrading to Pro ({})...", interval.price_label()).bold()
    );

    let opener: &dyn UrlOpener = if no_open { &NoopOpener } else { &BrowserOpener };
    match session.checkout.initiate(interval, opener).await {
        Ok(url) => {
            eprintln!("  Checkout: {}", url.underline());
            eprintln!();
            eprintln!("  After paying, redeem your license key with:");
            eprintln!("    {}", "unitgate verify <YOUR_KEY>".bold());
            eprintln!();
            CommandStatus::Success
        }
        Err(e) => {
            eprintln!("  {} {}", "Error:".red().bold(), e);
            CommandStatus::Failed
        }
    }
}

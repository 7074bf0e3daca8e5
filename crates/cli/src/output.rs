//! Terminal rendering of entitlement state

use colored::Colorize;
use unitgate_core::{EntitlementState, Plan, UnitCatalog};

/// Prints plan and, for Pro with a known expiry, when it renews.
pub fn print_entitlement(effective: &EntitlementState, stored: &EntitlementState, now: i64) {
    let plan = match effective.plan {
        Plan::Pro => effective.plan.to_string().green().bold(),
        Plan::Free => effective.plan.to_string().cyan(),
    };
    eprintln!("  {}: {}", "Plan".bold(), plan);

    if effective.plan == Plan::Pro && effective.expires_at != 0 {
        eprintln!(
            "  {}: {}",
            "Renews by".bold(),
            describe_expiry(effective.expires_at, now)
        );
    } else if stored.plan == Plan::Pro && effective.plan == Plan::Free {
        eprintln!(
            "  {} Pro expired {}. Run '{}' or '{}'.",
            "\u{26a1}".yellow(),
            describe_expiry(stored.expires_at, now).dimmed(),
            "unitgate refresh".bold(),
            "unitgate verify <KEY>".bold(),
        );
    }
    eprintln!();
}

/// Prints the catalog, one category per line, with an upgrade hint on Free.
pub fn print_catalog(catalog: &UnitCatalog) {
    print_categories(catalog);
    if catalog.plan == Plan::Free {
        eprintln!();
        eprintln!(
            "  {} Imperial, area, volume and time units require {}. Run '{}'.",
            "\u{26a1}".yellow(),
            "Pro".cyan(),
            "unitgate checkout".bold(),
        );
    }
}

pub fn print_categories(catalog: &UnitCatalog) {
    for (category, units) in &catalog.categories {
        eprintln!("  {:<12} {}", category.to_string().bold(), units.join(", "));
    }
}

/// `1999999999 (in 3d 4h)` style description of an epoch timestamp.
pub fn describe_expiry(expires_at: i64, now: i64) -> String {
    let delta = expires_at.saturating_sub(now);
    if delta >= 0 {
        format!("{} (in {})", expires_at, human_duration(delta))
    } else {
        format!("{} ({} ago)", expires_at, human_duration(delta.saturating_neg()))
    }
}

/// Coarse duration: two most significant units.
pub fn human_duration(secs: i64) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    let secs = secs.max(0);
    if secs >= DAY {
        format!("{}d {}h", secs / DAY, (secs % DAY) / HOUR)
    } else if secs >= HOUR {
        format!("{}h {}m", secs / HOUR, (secs % HOUR) / MINUTE)
    } else if secs >= MINUTE {
        format!("{}m {}s", secs / MINUTE, secs % MINUTE)
    } else {
        format!("{}s", secs)
    }
}

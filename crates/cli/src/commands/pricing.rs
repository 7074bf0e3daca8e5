//! Pricing command

use colored::Colorize;
use unitgate_core::catalog::UnitCatalog;
use unitgate_core::checkout::{PRO_MONTHLY_USD, PRO_YEARLY_USD};
use unitgate_core::Plan;

use crate::output::print_categories;

pub fn run() {
    eprintln!("  {}: $0", "Free".cyan().bold());
    print_plan_units(Plan::Free);
    eprintln!();
    eprintln!(
        "  {}: ${}/month or ${}/year",
        "Pro".green().bold(),
        PRO_MONTHLY_USD,
        PRO_YEARLY_USD
    );
    print_plan_units(Plan::Pro);
    eprintln!();
    eprintln!("  Run '{}' to upgrade.", "unitgate checkout --interval yearly".bold());
}

fn print_plan_units(plan: Plan) {
    print_categories(&UnitCatalog::for_plan(plan));
}

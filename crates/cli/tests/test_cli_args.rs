use clap::Parser;
use unitgate_cli::{parse_finite, Cli, CommandStatus, Commands};
use unitgate_core::CheckoutInterval;

#[test]
fn no_subcommand_is_allowed() {
    let cli = Cli::try_parse_from(["unitgate"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.backend.is_none());
}

#[test]
fn convert_parses_value_and_units() {
    let cli = Cli::try_parse_from(["unitgate", "convert", "5", "mi", "km"]).unwrap();
    match cli.command {
        Some(Commands::Convert { value, from, to }) => {
            assert_eq!(value, 5.0);
            assert_eq!(from, "mi");
            assert_eq!(to, "km");
        }
        _ => panic!("expected convert"),
    }
}

#[test]
fn convert_accepts_negative_values() {
    let cli = Cli::try_parse_from(["unitgate", "convert", "-40", "C", "F"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Convert { value, .. }) if value == -40.0));
}

#[test]
fn convert_rejects_non_numeric_value() {
    assert!(Cli::try_parse_from(["unitgate", "convert", "five", "mi", "km"]).is_err());
}

#[test]
fn convert_rejects_non_finite_values() {
    for raw in ["NaN", "inf", "-inf", "infinity"] {
        assert!(
            Cli::try_parse_from(["unitgate", "convert", raw, "m", "km"]).is_err(),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn parse_finite_accepts_ordinary_numbers() {
    assert_eq!(parse_finite("2.5"), Ok(2.5));
    assert_eq!(parse_finite("-40"), Ok(-40.0));
    assert!(parse_finite("1e400").is_err());
    assert!(parse_finite("abc").is_err());
}

#[test]
fn checkout_defaults_to_monthly() {
    let cli = Cli::try_parse_from(["unitgate", "checkout"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Checkout {
            interval: CheckoutInterval::Monthly,
            no_open: false
        })
    ));
}

#[test]
fn checkout_interval_yearly_and_no_open() {
    let cli =
        Cli::try_parse_from(["unitgate", "checkout", "--interval", "yearly", "--no-open"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Checkout {
            interval: CheckoutInterval::Yearly,
            no_open: true
        })
    ));
}

#[test]
fn checkout_rejects_unknown_interval() {
    assert!(Cli::try_parse_from(["unitgate", "checkout", "--interval", "weekly"]).is_err());
}

#[test]
fn backend_flag_is_global() {
    let cli =
        Cli::try_parse_from(["unitgate", "verify", "KEY-1", "--backend", "http://x:1"]).unwrap();
    assert_eq!(cli.backend.as_deref(), Some("http://x:1"));
    assert!(matches!(cli.command, Some(Commands::Verify { ref license_key }) if license_key == "KEY-1"));
}

#[test]
fn command_status_exit_codes() {
    assert_eq!(CommandStatus::Success.code(), 0);
    assert_eq!(CommandStatus::Failed.code(), 1);
    assert_eq!(CommandStatus::UpgradeRequired.code(), 2);
}

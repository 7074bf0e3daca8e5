//! CLI commands

pub mod checkout;
pub mod convert;
pub mod init;
pub mod license;
pub mod pricing;
pub mod units;

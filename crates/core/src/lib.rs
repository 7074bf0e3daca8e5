//! Unitgate Core - Entitlement Lifecycle
//!
//! This crate provides the client-side entitlement core for Unitgate:
//! - Persisted plan/token/expiry state behind an injectable store
//! - Local expiry evaluation against an injectable clock
//! - Background token refresh and license-key redemption
//! - Paywall-aware conversion requests and checkout hand-off
//!
//! Rendering is left to callers; nothing here prints.

pub mod api;
pub mod catalog;
pub mod checkout;
pub mod client;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod state;
pub mod store;

pub use api::ApiClient;
pub use catalog::{UnitCatalog, UnitCategory};
pub use checkout::{CheckoutInitiator, CheckoutInterval, UrlOpener};
pub use client::{AuthorizationService, EntitlementClient};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::UnitgateConfig;
pub use controller::{EntitlementController, Redemption, RefreshOutcome};
pub use error::{ConvertError, RefreshFailure, RequestError, StoreError, VerifyError};
pub use gateway::ConversionGateway;
pub use state::{evaluate_expiry, EntitlementState, Plan};
pub use store::{FileStore, MemoryStore, PersistedStore};

/// Unitgate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Wires configuration, persisted state and backend clients for one run

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use unitgate_core::{
    ApiClient, CheckoutInitiator, ConversionGateway, EntitlementClient, EntitlementController,
    FileStore, PersistedStore, SystemClock, UnitgateConfig,
};

/// Everything a command needs: the entitlement controller and the
/// conversion and checkout clients, all pointed at one backend.
pub struct Session {
    pub config: UnitgateConfig,
    pub controller: EntitlementController,
    pub gateway: ConversionGateway,
    pub checkout: CheckoutInitiator,
}

impl Session {
    /// Loads `.unitgate.toml` from the working directory upward, applies
    /// `UNITGATE_BACKEND_URL` and then `backend`, and opens the store.
    pub fn open(backend: Option<&str>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = resolve_config(&cwd, backend)?;
        Self::from_config(config)
    }

    pub fn from_config(config: UnitgateConfig) -> Result<Self> {
        let store: Box<dyn PersistedStore> = match &config.entitlement.store_path {
            Some(path) => Box::new(FileStore::new(path)),
            None => Box::new(FileStore::open_default()?),
        };
        Self::with_store(config, store)
    }

    pub fn with_store(config: UnitgateConfig, store: Box<dyn PersistedStore>) -> Result<Self> {
        let api = ApiClient::new(&config.backend)?;
        let controller = EntitlementController::new(
            store,
            Arc::new(EntitlementClient::new(api.clone())),
            Arc::new(SystemClock),
        )
        .with_refresh_threshold(config.entitlement.refresh_threshold_secs);

        tracing::debug!(backend = %api.base_url(), "session opened");
        Ok(Self {
            gateway: ConversionGateway::new(api.clone()),
            checkout: CheckoutInitiator::new(api),
            controller,
            config,
        })
    }
}

/// Config file, then environment, then command line.
pub fn resolve_config(start_dir: &Path, backend: Option<&str>) -> Result<UnitgateConfig> {
    let mut config = UnitgateConfig::find_and_load(start_dir)?;
    config.apply_env();
    if let Some(url) = backend {
        config.override_backend(url);
    }
    Ok(config)
}

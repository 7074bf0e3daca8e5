//! Entitlement orchestration: load, expiry evaluation, save and refresh

use std::sync::Arc;

use crate::catalog::UnitCatalog;
use crate::client::AuthorizationService;
use crate::clock::Clock;
use crate::error::{RefreshFailure, StoreError, VerifyError};
use crate::state::{evaluate_expiry, EntitlementState, Plan};
use crate::store::{PersistedStore, EXPIRES_KEY, PLAN_KEY, TOKEN_KEY};

/// Refresh once a token is this many seconds from expiring.
pub const DEFAULT_REFRESH_THRESHOLD_SECS: i64 = 3600;

/// Message shown after a license key is redeemed.
pub const LICENSE_VERIFIED_MESSAGE: &str = "License verified. Pro enabled!";

/// What a refresh attempt did. Callers are free to ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No token stored; the network was not touched.
    NoToken,
    /// Expiry is further away than the threshold.
    NotDue,
    /// The server issued a new entitlement and it was saved.
    Renewed,
    /// The attempt failed; the stored state is unchanged.
    Failed(RefreshFailure),
}

/// Result of a successful license redemption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redemption {
    pub state: EntitlementState,
    pub message: &'static str,
}

/// Owns the session's entitlement and is the only writer of its persisted form.
pub struct EntitlementController {
    store: Box<dyn PersistedStore>,
    service: Arc<dyn AuthorizationService>,
    clock: Arc<dyn Clock>,
    state: EntitlementState,
    refresh_threshold: i64,
}

impl EntitlementController {
    /// Creates a controller and loads the persisted entitlement.
    pub fn new(
        store: Box<dyn PersistedStore>,
        service: Arc<dyn AuthorizationService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let state = read_state(store.as_ref());
        Self {
            store,
            service,
            clock,
            state,
            refresh_threshold: DEFAULT_REFRESH_THRESHOLD_SECS,
        }
    }

    pub fn with_refresh_threshold(mut self, secs: i64) -> Self {
        self.refresh_threshold = secs;
        self
    }

    /// Re-reads the entitlement from the store.
    ///
    /// Missing entries take their defaults and an unparsable expiry reads as 0.
    pub fn load(&mut self) -> &EntitlementState {
        self.state = read_state(self.store.as_ref());
        &self.state
    }

    /// The entitlement as last loaded or saved.
    pub fn state(&self) -> &EntitlementState {
        &self.state
    }

    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// The entitlement used for gating right now.
    pub fn effective(&self) -> EntitlementState {
        evaluate_expiry(&self.state, self.clock.now())
    }

    pub fn effective_plan(&self) -> Plan {
        self.effective().plan
    }

    /// Units to offer under the effective plan.
    pub fn catalog(&self) -> UnitCatalog {
        UnitCatalog::for_plan(self.effective_plan())
    }

    /// Persists all three fields together, then adopts them in memory.
    ///
    /// If the store rejects the write, the in-memory state is left as it was.
    pub fn save(&mut self, state: EntitlementState) -> Result<(), StoreError> {
        let expires = state.expires_at.to_string();
        self.store.set_all(&[
            (TOKEN_KEY, state.token.as_str()),
            (PLAN_KEY, state.plan.as_str()),
            (EXPIRES_KEY, expires.as_str()),
        ])?;
        tracing::info!(plan = %state.plan, expires_at = state.expires_at, "entitlement saved");
        self.state = state;
        Ok(())
    }

    /// Refreshes the token if it expires within the threshold.
    pub async fn maybe_refresh(&mut self) -> RefreshOutcome {
        if !self.state.has_token() {
            return RefreshOutcome::NoToken;
        }
        if self.state.expires_at.saturating_sub(self.clock.now()) >= self.refresh_threshold {
            return RefreshOutcome::NotDue;
        }
        self.refresh().await
    }

    /// Refreshes the token regardless of expiry. Without a token it does nothing.
    ///
    /// Failures never propagate: they are logged and the state is untouched.
    pub async fn refresh(&mut self) -> RefreshOutcome {
        if !self.state.has_token() {
            return RefreshOutcome::NoToken;
        }
        let renewed = match self.service.refresh(&self.state.token).await {
            Ok(state) => state,
            Err(failure) => {
                tracing::warn!(error = %failure, "entitlement refresh failed; keeping current state");
                return RefreshOutcome::Failed(failure);
            }
        };
        match self.save(renewed) {
            Ok(()) => RefreshOutcome::Renewed,
            Err(e) => {
                tracing::warn!(error = %e, "could not persist refreshed entitlement");
                RefreshOutcome::Failed(RefreshFailure::Store(e.to_string()))
            }
        }
    }

    /// Redeems a license key and persists the resulting entitlement.
    pub async fn redeem_license(&mut self, license_key: &str) -> Result<Redemption, VerifyError> {
        let state = self.service.verify(license_key.trim()).await?;
        self.save(state.clone())?;
        Ok(Redemption {
            state,
            message: LICENSE_VERIFIED_MESSAGE,
        })
    }
}

fn read_state(store: &dyn PersistedStore) -> EntitlementState {
    let token = store.get(TOKEN_KEY).unwrap_or_default();
    let plan = store
        .get(PLAN_KEY)
        .map(|p| Plan::parse(&p))
        .unwrap_or_default();
    let expires_at = store
        .get(EXPIRES_KEY)
        .and_then(|e| e.trim().parse::<i64>().ok())
        .unwrap_or(0);
    EntitlementState {
        token,
        plan,
        expires_at,
    }
}

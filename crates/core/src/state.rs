//! Entitlement state: plan tier, credential token and expiry

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
}

impl Plan {
    /// Parses a plan name. Anything other than `pro` is Free.
    pub fn parse(raw: &str) -> Plan {
        if raw.trim().eq_ignore_ascii_case("pro") {
            Plan::Pro
        } else {
            Plan::Free
        }
    }

    /// Lowercase wire/storage form.
    pub fn as_str(self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plan::Free => write!(f, "Free"),
            Plan::Pro => write!(f, "Pro"),
        }
    }
}

/// The single persisted entitlement of an installation.
///
/// An empty `token` means no credential. `expires_at` is Unix epoch seconds,
/// with 0 meaning no expiry is known.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntitlementState {
    pub token: String,
    pub plan: Plan,
    pub expires_at: i64,
}

impl EntitlementState {
    pub fn new(token: impl Into<String>, plan: Plan, expires_at: i64) -> Self {
        Self {
            token: token.into(),
            plan,
            expires_at,
        }
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// True when this is Pro with a known expiry strictly before `now`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.plan == Plan::Pro && self.expires_at != 0 && self.expires_at < now
    }
}

/// Returns the view of `state` used for gating decisions at `now`.
///
/// An expired Pro entitlement is downgraded to Free. The token and expiry are
/// kept so a later refresh can still succeed if the server accepts them.
pub fn evaluate_expiry(state: &EntitlementState, now: i64) -> EntitlementState {
    if state.is_expired_at(now) {
        EntitlementState {
            plan: Plan::Free,
            ..state.clone()
        }
    } else {
        state.clone()
    }
}

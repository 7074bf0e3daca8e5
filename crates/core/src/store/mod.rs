//! Durable key/value storage for the entitlement fields
//!
//! Provides a `PersistedStore` trait so the controller never touches a global
//! store directly. Two implementations:
//! - `MemoryStore`: in-memory, for tests and ephemeral sessions
//! - `FileStore`: a JSON document on disk (`~/.config/unitgate/entitlement.json`)

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// Key holding the opaque entitlement token.
pub const TOKEN_KEY: &str = "entitlement_token";
/// Key holding the plan name (`free` / `pro`).
pub const PLAN_KEY: &str = "entitlement_plan";
/// Key holding the expiry as decimal epoch seconds.
pub const EXPIRES_KEY: &str = "entitlement_expires";

/// String key/value storage that survives across sessions.
///
/// Last write wins. Reads never fail: anything unreadable is absent.
pub trait PersistedStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Writes several entries together. Implementations that can commit
    /// them in one step should override this.
    fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

//! User pin storage.
//!
//! Pins live beside the feature data in the same process but never interact
//! with it. The store is a trait so a remote document database can stand in
//! for the in-memory implementation.

mod memory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use memory::MemoryPinStore;

/// One pin dropped by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinRecord {
    pub user_id: String,
    pub lat: f64,
    pub lon: f64,
    /// Insertion time, used for ordering
    pub timestamp: DateTime<Utc>,
}

impl PinRecord {
    pub fn new(user_id: &str, lat: f64, lon: f64) -> Self {
        Self {
            user_id: user_id.to_string(),
            lat,
            lon,
            timestamp: Utc::now(),
        }
    }
}

/// Storage keyed by user id and pin id
pub trait PinStore: Send + Sync {
    /// Store a pin under the next free `pins-<n>` id for the user, returning that id
    fn add_pin(&self, user_id: &str, lat: f64, lon: f64) -> anyhow::Result<String>;

    /// Every pin of every user, oldest first
    fn list_all_pins(&self) -> anyhow::Result<Vec<PinRecord>>;

    /// Drop all pins stored for the user
    fn clear_pins(&self, user_id: &str) -> anyhow::Result<()>;
}

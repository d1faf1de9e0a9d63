use std::collections::HashMap;
use std::sync::RwLock;

use indexmap::IndexMap;
use tracing::debug;

use super::{PinRecord, PinStore};

/// In-process pin store: user id -> pin id -> record
#[derive(Default)]
pub struct MemoryPinStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<String, IndexMap<String, (u64, PinRecord)>>,
    /// Global insertion counter; orders pins whose timestamps tie
    next_seq: u64,
}

impl MemoryPinStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PinStore for MemoryPinStore {
    fn add_pin(&self, user_id: &str, lat: f64, lon: f64) -> anyhow::Result<String> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| anyhow::anyhow!("pin store lock poisoned"))?;
        let seq = inner.next_seq;
        inner.next_seq += 1;

        let pins = inner.users.entry(user_id.to_string()).or_default();
        let pin_id = format!("pins-{}", pins.len());
        pins.insert(pin_id.clone(), (seq, PinRecord::new(user_id, lat, lon)));

        debug!("Stored {} for user {}", pin_id, user_id);
        Ok(pin_id)
    }

    fn list_all_pins(&self) -> anyhow::Result<Vec<PinRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| anyhow::anyhow!("pin store lock poisoned"))?;

        let mut pins: Vec<&(u64, PinRecord)> =
            inner.users.values().flat_map(|pins| pins.values()).collect();
        pins.sort_by_key(|(seq, _)| *seq);
        Ok(pins.into_iter().map(|(_, pin)| pin.clone()).collect())
    }

    fn clear_pins(&self, user_id: &str) -> anyhow::Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| anyhow::anyhow!("pin store lock poisoned"))?;
        inner.users.remove(user_id);
        Ok(())
    }
}

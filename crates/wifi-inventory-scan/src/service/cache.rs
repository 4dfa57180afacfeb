//! Process-wide BSSID/OUI to vendor-name cache.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::resolver::LOOKUP_FAILED;

/// Mutex-guarded vendor map shared by every resolution task.
///
/// Entries are never evicted. The lock is held only for the map operation
/// itself, never across an await.
#[derive(Debug, Default)]
pub struct VendorCache {
    entries: Mutex<HashMap<String, String>>,
}

impl VendorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached vendor name for `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    /// Store a resolved name. The lookup-failure sentinel is refused.
    pub fn set(&self, key: &str, name: &str) {
        if name == LOOKUP_FAILED {
            tracing::warn!(key, "refusing to cache lookup-failure sentinel");
            return;
        }
        self.entries.lock().insert(key.to_owned(), name.to_owned());
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

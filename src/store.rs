use std::collections::HashMap;

/// Read-only view of a string key-value store such as `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// The browser's `window.localStorage`. Unavailable storage reads as empty.
///
/// Read raw rather than through `use_local_storage`: its codec folds a missing
/// key and an undecodable value into the same default, and callers tell them apart.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = match leptos::prelude::window().local_storage() {
            Ok(Some(storage)) => storage,
            Ok(None) => return None,
            Err(err) => {
                log::error!("couldn't access localStorage: {err:?}");
                return None;
            }
        };
        storage.get_item(key).ok().flatten()
    }
}

use serde_json::Value;
use thiserror::Error;

use crate::{content::Icon, store::KeyValueStore};

pub const PROJECTS_KEY: &str = "projects";
pub const CERTIFICATES_KEY: &str = "certificates";

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Collection `{0}` is not stored")]
    Missing(String),
    #[error("Collection `{key}` is not a JSON list")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub fn read_collection(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<Value>, CollectionError> {
    let raw = store
        .get(key)
        .ok_or_else(|| CollectionError::Missing(key.to_string()))?;
    serde_json::from_str(&raw).map_err(|source| CollectionError::Malformed {
        key: key.to_string(),
        source,
    })
}

/// Number of items stored under `key`. Missing or malformed collections count as empty.
pub fn collection_len(store: &dyn KeyValueStore, key: &str) -> usize {
    match read_collection(store, key) {
        Ok(items) => items.len(),
        Err(CollectionError::Missing(_)) => 0,
        Err(err @ CollectionError::Malformed { .. }) => {
            log::warn!("{err}, counting it as empty");
            0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatisticSummary {
    pub total_projects: usize,
    pub total_certificates: usize,
}

impl StatisticSummary {
    pub fn from_store(store: &dyn KeyValueStore) -> Self {
        Self {
            total_projects: collection_len(store, PROJECTS_KEY),
            total_certificates: collection_len(store, CERTIFICATES_KEY),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub icon: Icon,
    pub gradient: &'static str,
    pub value: usize,
    pub label: &'static str,
    pub description: &'static str,
    /// `data-aos` animation name.
    pub animation: &'static str,
}

pub fn stat_cards(summary: &StatisticSummary) -> Vec<StatCard> {
    vec![
        StatCard {
            icon: Icon::Code,
            gradient: "from-[#850e35] to-[#ee6983]",
            value: summary.total_projects,
            label: "Total Projects",
            description: "Innovative web solutions crafted",
            animation: "fade-right",
        },
        StatCard {
            icon: Icon::Award,
            gradient: "from-[#ee6983] to-[#850e35]",
            value: summary.total_certificates,
            label: "Certificates",
            description: "Professional skills validated",
            animation: "fade-up",
        },
    ]
}

/// Caches one derived value, recomputing it only when its key changes.
#[derive(Debug, Clone)]
pub struct KeyedCache<K, V> {
    entry: Option<(K, V)>,
}

impl<K, V> Default for KeyedCache<K, V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<K: PartialEq, V> KeyedCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        let entry = match self.entry.take() {
            Some((cached, value)) if cached == key => (cached, value),
            _ => {
                let value = compute(&key);
                (key, value)
            }
        };
        &self.entry.insert(entry).1
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

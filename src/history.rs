//! Recent weather searches, persisted in a small key-value file.
//!
//! The file holds a flat JSON object of string values, one of which is the
//! `recentCities` key carrying a JSON-encoded array of city names.

use crate::error::{FinderError, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

pub const RECENT_CITIES_KEY: &str = "recentCities";

/// String key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Key-value store backed by one JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&contents)? {
            Value::Object(map) => Ok(map),
            _ => Err(FinderError::Provider(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.read_map()?;
        Ok(map.get(key).and_then(|v| v.as_str()).map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later write
        let mut map = self.read_map().unwrap_or_else(|e| {
            warn!("Discarding unreadable storage file {}: {}", self.path.display(), e);
            Map::new()
        });
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&Value::Object(map))?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-process store that is not persisted across runs, used by the tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| FinderError::Provider("memory store lock poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| FinderError::Provider("memory store lock poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Unique city names, most recent first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentCities {
    cities: Vec<String>,
    limit: usize,
}

impl RecentCities {
    pub fn new(limit: usize) -> Self {
        Self {
            cities: Vec::new(),
            limit: limit.max(1),
        }
    }

    pub fn from_vec(cities: Vec<String>, limit: usize) -> Self {
        let mut recent = Self::new(limit);
        // Oldest first so the stored head ends up in front again
        for city in cities.into_iter().rev() {
            recent.push(&city);
        }
        recent
    }

    /// Moves `city` to the front, dropping an earlier copy and the oldest overflow.
    pub fn push(&mut self, city: &str) {
        self.cities.retain(|c| c != city);
        self.cities.insert(0, city.to_string());
        self.cities.truncate(self.limit);
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.cities.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

pub struct HistoryStore {
    store: Box<dyn KeyValueStore>,
    limit: usize,
}

impl HistoryStore {
    pub fn new(store: Box<dyn KeyValueStore>, limit: usize) -> Self {
        Self { store, limit }
    }

    /// Loads the stored list. Missing or unreadable data yields an empty list.
    pub fn load(&self) -> RecentCities {
        let raw = match self.store.get(RECENT_CITIES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return RecentCities::new(self.limit),
            Err(e) => {
                warn!("Failed to read recent cities: {}", e);
                return RecentCities::new(self.limit);
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(cities) => RecentCities::from_vec(cities, self.limit),
            Err(e) => {
                warn!("Ignoring malformed recent cities: {}", e);
                RecentCities::new(self.limit)
            }
        }
    }

    pub fn save(&self, recent: &RecentCities) -> Result<()> {
        let encoded = serde_json::to_string(recent.as_slice())?;
        self.store.set(RECENT_CITIES_KEY, &encoded)?;
        debug!(count = recent.len(), "Saved recent cities");
        Ok(())
    }

    /// Loads, pushes `city` to the front and persists the result.
    pub fn record(&self, city: &str) -> Result<RecentCities> {
        let mut recent = self.load();
        recent.push(city);
        self.save(&recent)?;
        Ok(recent)
    }
}

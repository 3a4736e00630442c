//! A labeled store for auxiliary data produced alongside circuit computations.
//!
//! A [`DataGuard`] buffers arbitrary serializable values under string labels and persists them as
//! a single JSON object per file. It is meant for data which must be inspected outside of the
//! proven computation, such as the raw slots and the fingerprint of a
//! [`FixedMap`](miden_circuit_map::FixedMap). Nothing in the map itself depends on it.
//!
//! Instead of a process-wide instance, a guard is constructed once and passed explicitly to the
//! code which needs it.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use miden_circuit_map::{FieldHasher, FieldSerializable, FixedMap};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

mod config;
pub use config::{DATA_GUARD_DIR_ENV, DataGuardConfig};

mod errors;
pub use errors::DataGuardError;

mod snapshot;
pub use snapshot::MapSnapshot;


// DATA GUARD
// ================================================================================================

/// An in-memory cache of labeled JSON values backed by files in a configurable directory.
///
/// Values added under an existing label replace the previous value. Saving writes the whole cache
/// to `<dir>/<name>.json`; reading looks up a single label in such a file.
#[derive(Debug, Clone, Default)]
pub struct DataGuard {
    cache: BTreeMap<String, Value>,
    config: DataGuardConfig,
}

impl DataGuard {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Creates an empty guard with the specified config.
    pub fn new(config: DataGuardConfig) -> Self {
        Self { cache: BTreeMap::new(), config }
    }

    /// Creates an empty guard storing data files in `dir`.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(DataGuardConfig::new(dir))
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    pub fn config(&self) -> &DataGuardConfig {
        &self.config
    }

    /// Returns the directory in which data files are stored.
    pub fn path(&self) -> &Path {
        self.config.dir()
    }

    /// Returns the path of the data file with the given name.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.config.dir().join(format!("{name}.json"))
    }

    /// Returns the labels currently held in the cache, in lexicographic order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.cache.keys().map(String::as_str)
    }

    /// Returns the number of labels in the cache.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if the cache holds no data.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the cached value under `label` deserialized as `T`.
    ///
    /// Returns `None` if the label is absent or the value does not deserialize as `T`.
    pub fn get_data<T: DeserializeOwned>(&self, label: &str) -> Option<T> {
        let value = self.cache.get(label)?;
        T::deserialize(value)
            .inspect_err(|err| tracing::debug!(label, %err, "cached data has unexpected shape"))
            .ok()
    }

    // PUBLIC MUTATORS
    // --------------------------------------------------------------------------------------------

    /// Changes the directory in which data files are stored. The cache is left unchanged.
    pub fn change_path(&mut self, dir: impl Into<PathBuf>) {
        self.config.set_dir(dir.into());
    }

    /// Stores `data` under `label`, replacing any value previously stored under the same label.
    ///
    /// # Errors
    /// Returns an error if `data` cannot be serialized to JSON.
    pub fn add_data<T>(&mut self, label: impl Into<String>, data: &T) -> Result<(), DataGuardError>
    where
        T: Serialize + ?Sized,
    {
        let label = label.into();
        match serde_json::to_value(data) {
            Ok(value) => {
                self.cache.insert(label, value);
                Ok(())
            },
            Err(source) => Err(DataGuardError::SerializeData { label, source }),
        }
    }

    /// Stores a [`MapSnapshot`] of `map` under `label` and returns it.
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be serialized to JSON.
    pub fn record_map<K, V, H>(
        &mut self,
        label: impl Into<String>,
        map: &FixedMap<K, V, H>,
    ) -> Result<MapSnapshot, DataGuardError>
    where
        K: FieldSerializable + Clone,
        V: FieldSerializable + Clone,
        H: FieldHasher,
    {
        let snapshot = MapSnapshot::new(map);
        self.add_data(label, &snapshot)?;
        Ok(snapshot)
    }

    /// Removes the value stored under `label` from the cache and returns it.
    pub fn remove_data(&mut self, label: &str) -> Option<Value> {
        self.cache.remove(label)
    }

    // PERSISTENCE
    // --------------------------------------------------------------------------------------------

    /// Writes all cached data to `<dir>/<name>.json` as a single JSON object keyed by label, and
    /// returns the path of the written file.
    ///
    /// The data directory is created if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the cache cannot be encoded or the file cannot be written.
    pub fn save_data_to_file(&self, name: &str) -> Result<PathBuf, DataGuardError> {
        let path = self.file_path(name);
        let encoded = if self.config.pretty() {
            serde_json::to_string_pretty(&self.cache)
        } else {
            serde_json::to_string(&self.cache)
        }
        .map_err(|source| DataGuardError::EncodeFile { path: path.clone(), source })?;

        fs::create_dir_all(self.config.dir())
            .and_then(|_| fs::write(&path, encoded))
            .map_err(|source| DataGuardError::WriteFile { path: path.clone(), source })?;

        tracing::info!(path = %path.display(), labels = self.cache.len(), "data saved to file");
        Ok(path)
    }

    /// Reads the value stored under `label` in `<dir>/<name>.json`.
    ///
    /// Returns `None` if the file cannot be read or decoded, if it has no such label, or if the
    /// value does not deserialize as `T`. Failures are logged at debug level but not reported.
    pub fn read_data_from_file<T: DeserializeOwned>(&self, name: &str, label: &str) -> Option<T> {
        let mut document = self
            .load_document(name)
            .inspect_err(|err| tracing::debug!(%err, "no persisted data"))
            .ok()?;
        let value = document.remove(label)?;
        serde_json::from_value(value)
            .inspect_err(|err| tracing::debug!(label, %err, "persisted data has unexpected shape"))
            .ok()
    }

    /// Merges all values stored in `<dir>/<name>.json` into the cache, replacing cached values
    /// under the same labels, and returns the number of labels loaded.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not hold a JSON object.
    pub fn load_data_from_file(&mut self, name: &str) -> Result<usize, DataGuardError> {
        let document = self.load_document(name)?;
        let count = document.len();
        self.cache.extend(document);
        tracing::debug!(name, count, "data loaded from file");
        Ok(count)
    }

    // HELPERS
    // --------------------------------------------------------------------------------------------

    fn load_document(&self, name: &str) -> Result<Map<String, Value>, DataGuardError> {
        let path = self.file_path(name);
        let contents = fs::read_to_string(&path)
            .map_err(|source| DataGuardError::ReadFile { path: path.clone(), source })?;
        serde_json::from_str(&contents)
            .map_err(|source| DataGuardError::DecodeFile { path, source })
    }
}

//! JSON file persistence for the registry.

use super::Registry;
use crate::error::ApiError;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

/// Plain JSON file store.
///
/// The whole registry is rewritten on every save, pretty-printed, as one
/// `phone -> {name, email}` object.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the registry from disk.
    ///
    /// A missing file, an unreadable file, or invalid JSON all yield an
    /// empty registry; load failures are logged but never surfaced.
    pub async fn load(&self) -> Registry {
        if !self.path.exists() {
            info!(
                "Registry file not found at {:?}, starting with empty registry",
                self.path
            );
            return Registry::new();
        }

        let data = match fs::read(&self.path).await {
            Ok(d) => d,
            Err(e) => {
                warn!("Failed to read registry file {:?}: {}", self.path, e);
                return Registry::new();
            }
        };

        match serde_json::from_slice::<Registry>(&data) {
            Ok(registry) => {
                info!(
                    "Loaded registry with {} users from {:?}",
                    registry.count(),
                    self.path
                );
                registry
            }
            Err(e) => {
                warn!(
                    "Registry file {:?} is not valid JSON ({}), starting with empty registry",
                    self.path, e
                );
                Registry::new()
            }
        }
    }

    /// Rewrite the backing file with the full registry contents.
    pub async fn save(&self, registry: &Registry) -> Result<(), ApiError> {
        let data = serde_json::to_vec_pretty(registry)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        // Write atomically using temp file + rename
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &data).await?;
        fs::rename(&temp_path, &self.path).await?;

        debug!(
            "Saved registry ({} users, {} bytes) to {:?}",
            registry.count(),
            data.len(),
            self.path
        );
        Ok(())
    }
}

/// In-memory store for tests or deployments with persistence disabled.
pub struct MemoryStore;

impl MemoryStore {
    /// "Save" does nothing for memory store.
    pub async fn save(&self, _registry: &Registry) -> Result<(), ApiError> {
        debug!("Memory store: save is a no-op");
        Ok(())
    }

    /// "Load" returns an empty registry.
    pub async fn load(&self) -> Registry {
        debug!("Memory store: returning empty registry");
        Registry::new()
    }
}

/// Storage backend for the user registry.
pub enum Store {
    /// JSON file on disk
    Json(JsonStore),
    /// In-memory only (no persistence)
    Memory(MemoryStore),
}

impl Store {
    /// File-backed store at the given path.
    pub fn json(path: PathBuf) -> Self {
        Store::Json(JsonStore::new(path))
    }

    /// Memory-only store.
    pub fn memory() -> Self {
        Store::Memory(MemoryStore)
    }

    /// Load the registry.
    pub async fn load(&self) -> Registry {
        match self {
            Store::Json(s) => s.load().await,
            Store::Memory(s) => s.load().await,
        }
    }

    /// Save the registry.
    pub async fn save(&self, registry: &Registry) -> Result<(), ApiError> {
        match self {
            Store::Json(s) => s.save(registry).await,
            Store::Memory(s) => s.save(registry).await,
        }
    }
}

//! Process-lifetime cache for loaded key material.

use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;
use tracing::info;

use crate::errors::DomainError;

use super::loader::KeyStoreLoader;
use super::material::KeyMaterial;

/// Cache holding the current [`KeyMaterial`] behind an atomically swappable
/// reference.
///
/// The container is read once at construction; issuer and exporter calls
/// share the cached immutable material and never touch storage. An explicit
/// [`reload`](Self::reload) re-reads the container for intentional key
/// rotation: readers never block, and a swap is atomic, so an in-flight
/// request observes either the old or the new material, never a mix.
pub struct KeyMaterialCache {
    loader: KeyStoreLoader,
    current: ArcSwap<KeyMaterial>,
    /// Serializes reloads; readers do not take this lock.
    reload_lock: Mutex<()>,
}

impl std::fmt::Debug for KeyMaterialCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterialCache")
            .field("alias", &self.loader.alias())
            .finish()
    }
}

impl KeyMaterialCache {
    /// Loads the container once and caches the result.
    ///
    /// # Returns
    ///
    /// * `Ok(KeyMaterialCache)` - Material loaded and cached
    /// * `Err(DomainError)` - The initial load failed; callers should treat
    ///   this as fatal and abort startup
    pub fn initialize(loader: KeyStoreLoader) -> Result<Self, DomainError> {
        let material = loader.load()?;

        Ok(Self {
            loader,
            current: ArcSwap::from_pointee(material),
            reload_lock: Mutex::new(()),
        })
    }

    /// Returns the currently cached key material.
    pub fn current(&self) -> Arc<KeyMaterial> {
        self.current.load_full()
    }

    /// Re-reads the container and swaps the cached material atomically.
    ///
    /// Concurrent reloads are serialized; a failed reload leaves the cached
    /// material unchanged.
    pub fn reload(&self) -> Result<(), DomainError> {
        let _guard = self
            .reload_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let material = self.loader.load()?;
        self.current.store(Arc::new(material));
        info!(alias = %self.loader.alias(), "key material reloaded");

        Ok(())
    }
}

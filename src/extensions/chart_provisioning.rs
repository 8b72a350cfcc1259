use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{DeckError, DeckResult};

use super::chart_backend::{ChartBackend, ChartHandle};
use super::chart_catalog::ChartName;
use super::library_loader::{LibraryLoader, ResourceFetcher};

/// Owns the chart registry and the one-time library load.
///
/// Navigation never depends on this type; it is driven once at startup and
/// otherwise only asked to tear charts down.
#[derive(Debug)]
pub struct ChartProvisioner<B: ChartBackend> {
    backend: B,
    loader: LibraryLoader,
    registry: IndexMap<ChartName, ChartHandle>,
}

impl<B: ChartBackend> ChartProvisioner<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_loader(backend, LibraryLoader::default())
    }

    #[must_use]
    pub fn with_loader(backend: B, loader: LibraryLoader) -> Self {
        Self {
            backend,
            loader,
            registry: IndexMap::new(),
        }
    }

    pub fn ensure_library_loaded<F: ResourceFetcher>(&mut self, fetcher: &mut F) -> DeckResult<()> {
        self.loader.ensure_loaded(fetcher)
    }

    #[must_use]
    pub fn is_library_loaded(&self) -> bool {
        self.loader.is_loaded()
    }

    /// Builds every configured chart whose mount point exists.
    ///
    /// Existing instances are destroyed first. Charts without a config or a
    /// mount point are skipped, as are charts the backend refuses to create.
    /// Returns the number of charts built.
    pub fn build_all(&mut self) -> DeckResult<usize> {
        if !self.loader.is_loaded() {
            return Err(DeckError::LibraryNotLoaded);
        }
        self.destroy_all();

        for name in ChartName::ALL {
            let Some(spec) = name.spec() else {
                debug!(?name, "chart has no static config; skipping");
                continue;
            };

            let mount_point = name.mount_point();
            if !self.backend.has_mount_point(mount_point) {
                debug!(?name, mount_point, "chart mount point absent; skipping");
                continue;
            }

            match self.backend.create_chart(mount_point, &spec) {
                Ok(handle) => {
                    self.registry.insert(name, handle);
                }
                Err(err) => warn!(?name, error = %err, "chart backend rejected chart"),
            }
        }

        debug!(built = self.registry.len(), "charts provisioned");
        Ok(self.registry.len())
    }

    /// Releases every chart instance; safe on an empty registry.
    pub fn destroy_all(&mut self) {
        for (_, handle) in self.registry.drain(..) {
            self.backend.destroy_chart(handle);
        }
    }

    #[must_use]
    pub fn handle(&self, name: ChartName) -> Option<ChartHandle> {
        self.registry.get(&name).copied()
    }

    #[must_use]
    pub fn chart_names(&self) -> Vec<ChartName> {
        self.registry.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DeckError, DeckResult};

/// A script resource the chart backend depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryResource {
    pub name: &'static str,
    pub url: &'static str,
}

pub const CHART_LIBRARY: LibraryResource = LibraryResource {
    name: "chart.js",
    url: "https://cdn.jsdelivr.net/npm/chart.js@3.9.1/dist/chart.min.js",
};

/// Value-label extension; only loads on top of `CHART_LIBRARY`.
pub const VALUE_LABEL_EXTENSION: LibraryResource = LibraryResource {
    name: "chartjs-plugin-datalabels",
    url: "https://cdn.jsdelivr.net/npm/chartjs-plugin-datalabels@2.1.0/dist/chartjs-plugin-datalabels.min.js",
};

/// Host hook that makes a resource available (script injection, file load...).
pub trait ResourceFetcher {
    fn fetch(&mut self, resource: &LibraryResource) -> DeckResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LibraryLoadState {
    pub base_loaded: bool,
    pub extension_loaded: bool,
}

impl LibraryLoadState {
    #[must_use]
    pub const fn is_ready(self) -> bool {
        self.base_loaded && self.extension_loaded
    }
}

/// Loads the charting library and its extension once, in dependency order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryLoader {
    state: LibraryLoadState,
}

impl LibraryLoader {
    /// Loader for hosts where both resources are already present.
    #[must_use]
    pub const fn preloaded() -> Self {
        Self {
            state: LibraryLoadState {
                base_loaded: true,
                extension_loaded: true,
            },
        }
    }

    #[must_use]
    pub const fn state(self) -> LibraryLoadState {
        self.state
    }

    #[must_use]
    pub const fn is_loaded(self) -> bool {
        self.state.is_ready()
    }

    /// Fetches whatever is still missing: base library first, then the extension.
    ///
    /// There is no retry; a failed resource is attempted again only if the
    /// host calls this again.
    pub fn ensure_loaded<F: ResourceFetcher>(&mut self, fetcher: &mut F) -> DeckResult<()> {
        if self.state.is_ready() {
            return Ok(());
        }

        if !self.state.base_loaded {
            fetch_resource(fetcher, &CHART_LIBRARY)?;
            self.state.base_loaded = true;
        }
        if !self.state.extension_loaded {
            fetch_resource(fetcher, &VALUE_LABEL_EXTENSION)?;
            self.state.extension_loaded = true;
        }
        Ok(())
    }
}

fn fetch_resource<F: ResourceFetcher>(
    fetcher: &mut F,
    resource: &LibraryResource,
) -> DeckResult<()> {
    match fetcher.fetch(resource) {
        Ok(()) => {
            debug!(resource = resource.name, "chart resource loaded");
            Ok(())
        }
        Err(err) => {
            warn!(
                resource = resource.name,
                url = resource.url,
                error = %err,
                "chart resource failed to load"
            );
            Err(match err {
                DeckError::LibraryLoad { .. } => err,
                other => DeckError::LibraryLoad {
                    resource: resource.name.to_owned(),
                    reason: other.to_string(),
                },
            })
        }
    }
}

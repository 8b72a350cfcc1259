use tracing::{info, warn};

use crate::core::Deck;
use crate::error::DeckResult;
use crate::extensions::{ChartBackend, ChartProvisioner, ResourceFetcher};
use crate::render::DeckView;

use super::{DeckConfig, PresentationController};

/// Startup facade tying the navigation controller to chart provisioning.
///
/// Chart failures are logged and swallowed: the deck stays navigable
/// whether or not any chart was drawn.
pub struct Presentation<V: DeckView, B: ChartBackend> {
    controller: PresentationController<V>,
    charts: ChartProvisioner<B>,
}

impl<V: DeckView, B: ChartBackend> Presentation<V, B> {
    pub fn new(
        view: V,
        deck: Deck,
        config: DeckConfig,
        charts: ChartProvisioner<B>,
    ) -> DeckResult<Self> {
        Ok(Self {
            controller: PresentationController::new(view, deck, config)?,
            charts,
        })
    }

    /// Schedules the first slide's entry effects, then loads the chart
    /// library and builds the charts.
    ///
    /// Returns how many charts were built; `0` when provisioning failed.
    pub fn start<F: ResourceFetcher>(&mut self, fetcher: &mut F) -> usize {
        self.controller.start();

        let built = self
            .charts
            .ensure_library_loaded(fetcher)
            .and_then(|()| self.charts.build_all());
        match built {
            Ok(count) => {
                info!(charts = count, slides = self.controller.slide_count(), "presentation ready");
                count
            }
            Err(err) => {
                warn!(error = %err, "charts unavailable; continuing without them");
                0
            }
        }
    }

    #[must_use]
    pub fn controller(&self) -> &PresentationController<V> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PresentationController<V> {
        &mut self.controller
    }

    #[must_use]
    pub fn charts(&self) -> &ChartProvisioner<B> {
        &self.charts
    }

    pub fn charts_mut(&mut self) -> &mut ChartProvisioner<B> {
        &mut self.charts
    }
}

use slide_deck::DeckError;
use slide_deck::api::{DeckConfig, Presentation};
use slide_deck::core::{Deck, Slide};
use slide_deck::extensions::{
    ChartName, ChartProvisioner, LibraryLoader, LibraryResource, NullChartBackend, ResourceFetcher,
};
use slide_deck::render::MemoryView;

struct FailingFetcher;

impl ResourceFetcher for FailingFetcher {
    fn fetch(&mut self, resource: &LibraryResource) -> Result<(), DeckError> {
        Err(DeckError::LibraryLoad {
            resource: resource.name.to_owned(),
            reason: "offline".to_owned(),
        })
    }
}

#[derive(Default)]
struct CountingFetcher {
    calls: usize,
}

impl ResourceFetcher for CountingFetcher {
    fn fetch(&mut self, _resource: &LibraryResource) -> Result<(), DeckError> {
        self.calls += 1;
        Ok(())
    }
}

fn build_deck() -> Deck {
    Deck::new(vec![
        Slide::new("title").with_counter("attendees", "120"),
        Slide::new("energy"),
        Slide::new("summary"),
    ])
    .expect("valid deck")
}

#[test]
fn chart_failure_does_not_block_navigation() {
    let charts = ChartProvisioner::new(NullChartBackend::with_mount_points(["energyChart"]));
    let mut presentation =
        Presentation::new(MemoryView::new(3), build_deck(), DeckConfig::default(), charts)
            .expect("presentation init");

    assert_eq!(presentation.start(&mut FailingFetcher), 0);
    assert!(presentation.charts().is_empty());

    let controller = presentation.controller_mut();
    assert!(controller.is_started());
    assert!(controller.next().expect("next"));
    controller.tick(2_000.0);
    assert_eq!(controller.view().position_label, "2 / 3");
    assert_eq!(controller.view().counter(0, "attendees"), Some("120"));
}

#[test]
fn startup_loads_library_and_builds_charts() {
    let charts = ChartProvisioner::new(NullChartBackend::with_mount_points([
        "energyChart",
        "generationChart",
    ]));
    let mut presentation =
        Presentation::new(MemoryView::new(3), build_deck(), DeckConfig::default(), charts)
            .expect("presentation init");

    let mut fetcher = CountingFetcher::default();
    assert_eq!(presentation.start(&mut fetcher), 2);
    assert_eq!(fetcher.calls, 2);
    assert!(presentation.charts().handle(ChartName::Generation).is_some());
}

#[test]
fn preloaded_library_skips_fetching() {
    let charts = ChartProvisioner::with_loader(
        NullChartBackend::with_mount_points(["polishChart"]),
        LibraryLoader::preloaded(),
    );
    let mut presentation =
        Presentation::new(MemoryView::new(3), build_deck(), DeckConfig::default(), charts)
            .expect("presentation init");

    let mut fetcher = CountingFetcher::default();
    assert_eq!(presentation.start(&mut fetcher), 1);
    assert_eq!(fetcher.calls, 0);

    presentation.charts_mut().destroy_all();
    assert_eq!(presentation.charts().backend().live_count(), 0);
}

use slide_deck::DeckError;
use slide_deck::extensions::{
    CHART_LIBRARY, ChartName, ChartProvisioner, LibraryLoader, LibraryResource, NullChartBackend,
    ResourceFetcher, VALUE_LABEL_EXTENSION,
};

#[derive(Debug, Default)]
struct RecordingFetcher {
    fetched: Vec<&'static str>,
    fail_on: Option<&'static str>,
}

impl ResourceFetcher for RecordingFetcher {
    fn fetch(&mut self, resource: &LibraryResource) -> Result<(), DeckError> {
        self.fetched.push(resource.name);
        if self.fail_on == Some(resource.name) {
            return Err(DeckError::LibraryLoad {
                resource: resource.name.to_owned(),
                reason: "network unreachable".to_owned(),
            });
        }
        Ok(())
    }
}

fn backend_with(mounts: &[&str]) -> NullChartBackend {
    NullChartBackend::with_mount_points(mounts.iter().copied())
}

#[test]
fn library_loads_base_before_extension_exactly_once() {
    let mut provisioner = ChartProvisioner::new(NullChartBackend::default());
    let mut fetcher = RecordingFetcher::default();

    provisioner
        .ensure_library_loaded(&mut fetcher)
        .expect("load succeeds");
    provisioner
        .ensure_library_loaded(&mut fetcher)
        .expect("second load is a no-op");

    assert_eq!(
        fetcher.fetched,
        vec![CHART_LIBRARY.name, VALUE_LABEL_EXTENSION.name]
    );
    assert!(provisioner.is_library_loaded());
}

#[test]
fn base_failure_never_fetches_extension() {
    let mut provisioner = ChartProvisioner::new(NullChartBackend::default());
    let mut fetcher = RecordingFetcher {
        fail_on: Some(CHART_LIBRARY.name),
        ..RecordingFetcher::default()
    };

    let err = provisioner
        .ensure_library_loaded(&mut fetcher)
        .expect_err("base fails");
    assert!(matches!(err, DeckError::LibraryLoad { .. }));
    assert_eq!(fetcher.fetched, vec![CHART_LIBRARY.name]);
    assert!(!provisioner.is_library_loaded());
}

#[test]
fn extension_failure_is_reported_and_later_call_fetches_only_what_is_missing() {
    let mut loader = LibraryLoader::default();
    let mut fetcher = RecordingFetcher {
        fail_on: Some(VALUE_LABEL_EXTENSION.name),
        ..RecordingFetcher::default()
    };

    let err = loader.ensure_loaded(&mut fetcher).expect_err("extension fails");
    match err {
        DeckError::LibraryLoad { resource, .. } => {
            assert_eq!(resource, VALUE_LABEL_EXTENSION.name);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(loader.state().base_loaded);
    assert!(!loader.is_loaded());

    fetcher.fail_on = None;
    fetcher.fetched.clear();
    loader.ensure_loaded(&mut fetcher).expect("retry succeeds");
    assert_eq!(fetcher.fetched, vec![VALUE_LABEL_EXTENSION.name]);
    assert!(loader.is_loaded());
}

#[test]
fn build_all_requires_loaded_library() {
    let mut provisioner = ChartProvisioner::new(backend_with(&["energyChart"]));
    assert!(matches!(
        provisioner.build_all(),
        Err(DeckError::LibraryNotLoaded)
    ));
    assert!(provisioner.is_empty());
}

#[test]
fn build_all_skips_absent_mount_points_and_unconfigured_charts() {
    let backend = backend_with(&["energyChart", "appleChart", "cdprChart", "unrelated"]);
    let mut provisioner = ChartProvisioner::with_loader(backend, LibraryLoader::preloaded());

    let built = provisioner.build_all().expect("build");
    assert_eq!(built, 2);
    assert_eq!(
        provisioner.chart_names(),
        vec![ChartName::Energy, ChartName::Apple]
    );
    assert!(provisioner.handle(ChartName::Polish).is_none());
    assert!(provisioner.handle(ChartName::Cdpr).is_none());

    let energy = provisioner.handle(ChartName::Energy).expect("energy handle");
    assert_eq!(provisioner.backend().mounted_at(energy), Some("energyChart"));
}

#[test]
fn destroy_all_releases_everything_and_is_repeatable() {
    let mounts: Vec<&str> = ChartName::ALL.iter().map(|name| name.mount_point()).collect();
    let mut provisioner =
        ChartProvisioner::with_loader(backend_with(&mounts), LibraryLoader::preloaded());

    assert_eq!(provisioner.build_all().expect("build"), 5);
    provisioner.destroy_all();
    assert!(provisioner.is_empty());
    assert_eq!(provisioner.backend().live_count(), 0);
    assert_eq!(provisioner.backend().destroyed_count, 5);

    provisioner.destroy_all();
    assert_eq!(provisioner.backend().destroyed_count, 5);
}

#[test]
fn rebuilding_replaces_previous_instances() {
    let mut provisioner = ChartProvisioner::with_loader(
        backend_with(&["polishChart", "netguruChart"]),
        LibraryLoader::preloaded(),
    );

    provisioner.build_all().expect("first build");
    provisioner.build_all().expect("second build");

    let backend = provisioner.backend();
    assert_eq!(backend.created_count, 4);
    assert_eq!(backend.destroyed_count, 2);
    assert_eq!(backend.live_count(), 2);
    assert_eq!(provisioner.len(), 2);
}

#[test]
fn energy_chart_value_labels_use_percent_rule() {
    let spec = ChartName::Energy.spec().expect("energy config");
    assert_eq!(
        spec.formatted_value_labels(),
        vec![vec!["7%", "8.5%", "10%", "11.5%", "12.5%", "13%"]]
    );

    let netguru = ChartName::Netguru.spec().expect("netguru config");
    assert_eq!(netguru.formatted_value_labels(), vec![vec!["89.4", "50.9"]]);
}

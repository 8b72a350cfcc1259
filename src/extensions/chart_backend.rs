use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

use super::chart_spec::ChartSpec;

/// Opaque id of a chart instance owned by a `ChartBackend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartHandle(pub u64);

/// Contract implemented by any charting library bridge.
///
/// The backend receives a fully declarative `ChartSpec`; drawing, tooltips
/// and value labels are entirely its concern.
pub trait ChartBackend {
    fn has_mount_point(&self, mount_point: &str) -> bool;

    fn create_chart(&mut self, mount_point: &str, spec: &ChartSpec) -> DeckResult<ChartHandle>;

    fn destroy_chart(&mut self, handle: ChartHandle);
}

/// Headless backend used by tests and hosts without a charting surface.
///
/// It still validates every spec so config mistakes surface before a real
/// backend is wired in.
#[derive(Debug, Default)]
pub struct NullChartBackend {
    mount_points: IndexSet<String>,
    live: IndexMap<ChartHandle, String>,
    next_id: u64,
    pub created_count: usize,
    pub destroyed_count: usize,
}

impl NullChartBackend {
    #[must_use]
    pub fn with_mount_points<I, S>(mount_points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mount_points: mount_points.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn mounted_at(&self, handle: ChartHandle) -> Option<&str> {
        self.live.get(&handle).map(String::as_str)
    }
}

impl ChartBackend for NullChartBackend {
    fn has_mount_point(&self, mount_point: &str) -> bool {
        self.mount_points.contains(mount_point)
    }

    fn create_chart(&mut self, mount_point: &str, spec: &ChartSpec) -> DeckResult<ChartHandle> {
        if !self.has_mount_point(mount_point) {
            return Err(DeckError::InvalidConfig(format!(
                "mount point `{mount_point}` does not exist"
            )));
        }
        spec.validate()?;

        let handle = ChartHandle(self.next_id);
        self.next_id += 1;
        self.live.insert(handle, mount_point.to_owned());
        self.created_count += 1;
        Ok(handle)
    }

    fn destroy_chart(&mut self, handle: ChartHandle) {
        if self.live.shift_remove(&handle).is_some() {
            self.destroyed_count += 1;
        }
    }
}

//! Chart provisioning lives here.
//!
//! Nothing in the navigation core depends on this module; hosts wire it in
//! through `api::Presentation` or drive it directly.

pub mod chart_backend;
pub mod chart_catalog;
pub mod chart_provisioning;
pub mod chart_spec;
pub mod library_loader;

pub use chart_backend::{ChartBackend, ChartHandle, NullChartBackend};
pub use chart_catalog::ChartName;
pub use chart_provisioning::ChartProvisioner;
pub use chart_spec::{
    AxisSpec, ChartKind, ChartSpec, Color, DatasetSpec, LabelAlign, LabelAnchor, LabelFormat,
    LegendPosition, LegendSpec, TitleSpec, ValueLabelSpec,
};
pub use library_loader::{
    CHART_LIBRARY, LibraryLoadState, LibraryLoader, LibraryResource, ResourceFetcher,
    VALUE_LABEL_EXTENSION,
};

//! slide-deck: renderer-agnostic slide presentation controller.
//!
//! The crate keeps navigation, staged entry animations and counter easing in
//! a deterministic, host-clocked state machine. Surfaces plug in through
//! `render::DeckView`; charting libraries through `extensions::ChartBackend`.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DeckConfig, Presentation, PresentationController};
pub use error::{DeckError, DeckResult};

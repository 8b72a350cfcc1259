use serde::{Deserialize, Serialize};

/// Presentation tag carried by every slide.
///
/// Exactly one slide is `Active` outside a transition's grace window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SlideVisualState {
    #[default]
    Inactive,
    Active,
    TransitioningOut,
}

impl SlideVisualState {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

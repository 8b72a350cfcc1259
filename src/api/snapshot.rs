use serde::{Deserialize, Serialize};

use crate::core::SlideVisualState;
use crate::interaction::ControllerMode;

/// Serializable view of controller state for hosts and tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    pub current_index: usize,
    pub slide_count: usize,
    pub mode: ControllerMode,
    pub visual_states: Vec<SlideVisualState>,
    pub progress_percent: f64,
    pub position_label: String,
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub pending_tasks: usize,
    pub pending_cleanups: usize,
    pub running_counters: usize,
    pub clock_ms: f64,
}

impl ControllerSnapshot {
    /// Pretty JSON rendering used by the replay tool.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

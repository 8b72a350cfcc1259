use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// Timing and layout configuration for a `PresentationController`.
///
/// Every field has a serde default so hosts can persist partial configs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Delay before `TransitioningOut` tags are swept from all slides.
    #[serde(default = "default_transition_grace_ms")]
    pub transition_grace_ms: f64,
    /// Delay between resetting and re-asserting entry-element visibility.
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: f64,
    #[serde(default = "default_counter_duration_ms")]
    pub counter_duration_ms: f64,
    /// Delay before the first slide's entry effects run after `start`.
    #[serde(default = "default_startup_delay_ms")]
    pub startup_delay_ms: f64,
    /// Viewports at or below this width render density widgets compact.
    #[serde(default = "default_compact_breakpoint_px")]
    pub compact_breakpoint_px: f64,
    #[serde(default = "default_viewport_width_px")]
    pub viewport_width_px: f64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            transition_grace_ms: default_transition_grace_ms(),
            reveal_delay_ms: default_reveal_delay_ms(),
            counter_duration_ms: default_counter_duration_ms(),
            startup_delay_ms: default_startup_delay_ms(),
            compact_breakpoint_px: default_compact_breakpoint_px(),
            viewport_width_px: default_viewport_width_px(),
        }
    }
}

impl DeckConfig {
    #[must_use]
    pub fn with_transition_grace_ms(mut self, delay_ms: f64) -> Self {
        self.transition_grace_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_reveal_delay_ms(mut self, delay_ms: f64) -> Self {
        self.reveal_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_counter_duration_ms(mut self, duration_ms: f64) -> Self {
        self.counter_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_startup_delay_ms(mut self, delay_ms: f64) -> Self {
        self.startup_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_compact_breakpoint_px(mut self, width_px: f64) -> Self {
        self.compact_breakpoint_px = width_px;
        self
    }

    #[must_use]
    pub fn with_viewport_width_px(mut self, width_px: f64) -> Self {
        self.viewport_width_px = width_px;
        self
    }

    /// Parses a JSON config; missing fields fall back to defaults.
    pub fn from_json(input: &str) -> DeckResult<Self> {
        let config: Self =
            serde_json::from_str(input).map_err(|err| DeckError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(self) -> DeckResult<()> {
        for (name, value) in [
            ("transition_grace_ms", self.transition_grace_ms),
            ("reveal_delay_ms", self.reveal_delay_ms),
            ("startup_delay_ms", self.startup_delay_ms),
            ("compact_breakpoint_px", self.compact_breakpoint_px),
            ("viewport_width_px", self.viewport_width_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DeckError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }

        if !self.counter_duration_ms.is_finite() || self.counter_duration_ms <= 0.0 {
            return Err(DeckError::InvalidConfig(
                "`counter_duration_ms` must be finite and > 0".to_owned(),
            ));
        }

        Ok(())
    }
}

fn default_transition_grace_ms() -> f64 {
    500.0
}

fn default_reveal_delay_ms() -> f64 {
    100.0
}

fn default_counter_duration_ms() -> f64 {
    1_500.0
}

fn default_startup_delay_ms() -> f64 {
    100.0
}

fn default_compact_breakpoint_px() -> f64 {
    768.0
}

fn default_viewport_width_px() -> f64 {
    1_280.0
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::SlideVisualState;
use crate::render::DeckView;

/// One counter text update, kept in write order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterWrite {
    pub slide: usize,
    pub element: String,
    pub text: String,
}

/// Headless view that keeps the last written state in memory.
///
/// Used by tests and the replay tool; it also records every counter write
/// so animation curves can be inspected after the fact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryView {
    pub slide_states: Vec<SlideVisualState>,
    pub element_visibility: IndexMap<String, bool>,
    pub counter_text: IndexMap<String, String>,
    pub counter_history: Vec<CounterWrite>,
    pub compact_layout: IndexMap<String, bool>,
    pub progress_percent: f64,
    pub position_label: String,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl MemoryView {
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_states: vec![SlideVisualState::Inactive; slide_count],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn slide_state(&self, slide: usize) -> SlideVisualState {
        self.slide_states.get(slide).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn active_slides(&self) -> Vec<usize> {
        self.slide_states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_active())
            .map(|(slide, _)| slide)
            .collect()
    }

    /// `None` when the element was never touched.
    #[must_use]
    pub fn is_visible(&self, slide: usize, element: &str) -> Option<bool> {
        self.element_visibility
            .get(&element_key(slide, element))
            .copied()
    }

    #[must_use]
    pub fn counter(&self, slide: usize, element: &str) -> Option<&str> {
        self.counter_text
            .get(&element_key(slide, element))
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_compact(&self, slide: usize, widget: &str) -> Option<bool> {
        self.compact_layout.get(&element_key(slide, widget)).copied()
    }

    /// Counter values written for one element, in order, skipping non-numeric text.
    #[must_use]
    pub fn counter_values(&self, slide: usize, element: &str) -> Vec<i64> {
        self.counter_history
            .iter()
            .filter(|write| write.slide == slide && write.element == element)
            .filter_map(|write| write.text.parse().ok())
            .collect()
    }
}

impl DeckView for MemoryView {
    fn set_slide_state(&mut self, slide: usize, state: SlideVisualState) {
        if slide >= self.slide_states.len() {
            self.slide_states
                .resize(slide + 1, SlideVisualState::Inactive);
        }
        self.slide_states[slide] = state;
    }

    fn set_element_visible(&mut self, slide: usize, element: &str, visible: bool) {
        self.element_visibility
            .insert(element_key(slide, element), visible);
    }

    fn set_counter_text(&mut self, slide: usize, element: &str, text: &str) {
        self.counter_text
            .insert(element_key(slide, element), text.to_owned());
        self.counter_history.push(CounterWrite {
            slide,
            element: element.to_owned(),
            text: text.to_owned(),
        });
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress_percent = percent;
    }

    fn set_position_label(&mut self, label: &str) {
        self.position_label = label.to_owned();
    }

    fn set_navigation_disabled(&mut self, previous: bool, next: bool) {
        self.previous_disabled = previous;
        self.next_disabled = next;
    }

    fn set_compact_layout(&mut self, slide: usize, widget: &str, compact: bool) {
        self.compact_layout
            .insert(element_key(slide, widget), compact);
    }
}

fn element_key(slide: usize, element: &str) -> String {
    format!("{slide}/{element}")
}

mod memory_view;

pub use memory_view::{CounterWrite, MemoryView};

use crate::core::SlideVisualState;

/// Contract implemented by any presentation surface.
///
/// The controller only ever pushes state through this trait, so DOM
/// bridges, terminal front-ends and test recorders stay interchangeable.
/// Slides are addressed by deck position, elements by their manifest id.
pub trait DeckView {
    fn set_slide_state(&mut self, slide: usize, state: SlideVisualState);

    fn set_element_visible(&mut self, slide: usize, element: &str, visible: bool);

    fn set_counter_text(&mut self, slide: usize, element: &str, text: &str);

    /// Progress indicator width in percent, `0..=100`.
    fn set_progress(&mut self, percent: f64);

    fn set_position_label(&mut self, label: &str);

    fn set_navigation_disabled(&mut self, previous: bool, next: bool);

    fn set_compact_layout(&mut self, slide: usize, widget: &str, compact: bool);
}

pub mod deck;
pub mod easing;
pub mod slide_index;
pub mod types;

pub use deck::{CounterElement, Deck, Slide};
pub use easing::{counter_value, ease_out_quart, progress_at};
pub use slide_index::SlideIndex;
pub use types::SlideVisualState;

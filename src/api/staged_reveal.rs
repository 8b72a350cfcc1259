use crate::core::Slide;
use crate::render::DeckView;

/// Phase one: clear `visible` on every entry element so the reveal replays.
pub(crate) fn reset_entry_elements<V: DeckView>(view: &mut V, slide_index: usize, slide: &Slide) {
    for element in &slide.entry_elements {
        view.set_element_visible(slide_index, element, false);
    }
}

/// Phase two: set `visible`, which the host turns into the entry transition.
pub(crate) fn reveal_entry_elements<V: DeckView>(view: &mut V, slide_index: usize, slide: &Slide) {
    for element in &slide.entry_elements {
        view.set_element_visible(slide_index, element, true);
    }
}

/// Applies the compact flag to every density-sensitive widget on the slide.
pub(crate) fn apply_density_layout<V: DeckView>(
    view: &mut V,
    slide_index: usize,
    slide: &Slide,
    compact: bool,
) {
    for widget in &slide.density_widgets {
        view.set_compact_layout(slide_index, widget, compact);
    }
}

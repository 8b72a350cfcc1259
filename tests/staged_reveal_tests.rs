use slide_deck::api::{DeckConfig, PresentationController};
use slide_deck::core::{Deck, Slide};
use slide_deck::render::MemoryView;

fn build_controller() -> PresentationController<MemoryView> {
    let deck = Deck::new(vec![
        Slide::new("intro").with_entry_element("headline"),
        Slide::new("details")
            .with_entry_element("card-a")
            .with_entry_element("card-b"),
        Slide::new("outro"),
    ])
    .expect("valid deck");
    PresentationController::new(MemoryView::new(3), deck, DeckConfig::default())
        .expect("controller init")
}

fn cards_visible(controller: &PresentationController<MemoryView>) -> [Option<bool>; 2] {
    [
        controller.view().is_visible(1, "card-a"),
        controller.view().is_visible(1, "card-b"),
    ]
}

#[test]
fn entry_elements_reset_then_reveal_after_delay() {
    let mut controller = build_controller();

    controller.next().expect("next");
    assert_eq!(cards_visible(&controller), [Some(false), Some(false)]);

    controller.tick(99.0);
    assert_eq!(cards_visible(&controller), [Some(false), Some(false)]);

    controller.tick(100.0);
    assert_eq!(cards_visible(&controller), [Some(true), Some(true)]);
}

#[test]
fn reactivating_a_slide_replays_the_reveal() {
    let mut controller = build_controller();

    controller.next().expect("first visit");
    controller.tick(1_000.0);
    assert_eq!(cards_visible(&controller), [Some(true), Some(true)]);

    controller.previous().expect("back");
    controller.tick(2_000.0);
    controller.next().expect("second visit");
    assert_eq!(cards_visible(&controller), [Some(false), Some(false)]);

    controller.tick(2_100.0);
    assert_eq!(cards_visible(&controller), [Some(true), Some(true)]);
}

#[test]
fn go_to_current_slide_replays_the_reveal() {
    let mut controller = build_controller();
    controller.next().expect("next");
    controller.tick(500.0);

    controller.go_to(1).expect("same slide");
    assert_eq!(cards_visible(&controller), [Some(false), Some(false)]);
    assert_eq!(controller.view().active_slides(), vec![1]);

    controller.tick(600.0);
    assert_eq!(cards_visible(&controller), [Some(true), Some(true)]);
}

#[test]
fn stale_reveal_only_touches_its_own_slide() {
    let mut controller = build_controller();

    controller.next().expect("to details");
    controller.tick(50.0);
    controller.next().expect("to outro before reveal fires");

    controller.tick(100.0);
    // Last write wins: the details cards still get revealed, nothing else changes.
    assert_eq!(cards_visible(&controller), [Some(true), Some(true)]);
    assert_eq!(controller.view().is_visible(0, "headline"), None);
    assert_eq!(controller.view().active_slides(), vec![2]);
}

#[test]
fn start_runs_first_slide_entry_after_startup_delay() {
    let mut controller = build_controller();
    controller.start();
    controller.start();
    assert_eq!(controller.pending_task_count(), 1);

    controller.tick(100.0);
    assert_eq!(controller.view().is_visible(0, "headline"), Some(false));

    controller.tick(200.0);
    assert_eq!(controller.view().is_visible(0, "headline"), Some(true));
}

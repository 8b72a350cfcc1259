use criterion::{Criterion, criterion_group, criterion_main};
use slide_deck::api::{DeckConfig, PresentationController};
use slide_deck::core::{Deck, Slide, counter_value};
use slide_deck::render::MemoryView;
use std::hint::black_box;

fn bench_counter_value_curve(c: &mut Criterion) {
    c.bench_function("counter_value_curve_1k_samples", |b| {
        b.iter(|| {
            let mut last = 0;
            for step in 0..=1_000 {
                let progress = f64::from(step) / 1_000.0;
                last = counter_value(0, black_box(250_000), progress);
            }
            last
        })
    });
}

fn bench_transition_with_counters(c: &mut Criterion) {
    let slides = (0..20)
        .map(|i| {
            (0..8).fold(Slide::new(format!("slide {i}")), |slide, n| {
                slide
                    .with_entry_element(format!("card-{n}"))
                    .with_counter(format!("metric-{n}"), format!("{}", (n + 1) * 100))
            })
        })
        .collect();
    let deck = Deck::new(slides).expect("valid deck");

    c.bench_function("transition_and_animate_20_slides", |b| {
        b.iter(|| {
            let view = MemoryView::new(deck.len());
            let mut controller =
                PresentationController::new(view, deck.clone(), DeckConfig::default())
                    .expect("controller init");
            let mut now = 0.0;
            while controller.next().expect("next") {
                for _ in 0..4 {
                    now += 16.0;
                    controller.tick(now);
                }
            }
            black_box(controller.current_index())
        })
    });
}

criterion_group!(benches, bench_counter_value_curve, bench_transition_with_counters);
criterion_main!(benches);

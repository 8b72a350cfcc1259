use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::{Slide, counter_value, progress_at};
use crate::render::DeckView;

/// One in-flight counter animation, discarded once it reaches its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterRun {
    pub slide: usize,
    pub element: String,
    pub start: i64,
    pub end: i64,
    pub started_at_ms: f64,
    pub duration_ms: f64,
}

impl CounterRun {
    #[must_use]
    pub fn new(
        slide: usize,
        element: impl Into<String>,
        end: i64,
        started_at_ms: f64,
        duration_ms: f64,
    ) -> Self {
        Self {
            slide,
            element: element.into(),
            start: 0,
            end,
            started_at_ms,
            duration_ms,
        }
    }

    /// Returns the value to display at `now_ms` and whether the run is complete.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> (i64, bool) {
        let progress = progress_at(self.started_at_ms, now_ms, self.duration_ms);
        (counter_value(self.start, self.end, progress), progress >= 1.0)
    }
}

/// Builds fresh runs for every counter on `slide`.
///
/// Counters with an unparseable target are skipped; the rest still run.
pub(crate) fn counter_runs_for_slide(
    slide_index: usize,
    slide: &Slide,
    now_ms: f64,
    duration_ms: f64,
) -> SmallVec<[CounterRun; 4]> {
    let mut runs = SmallVec::new();
    for counter in &slide.counters {
        match counter.parse_target() {
            Ok(end) => runs.push(CounterRun::new(
                slide_index,
                counter.element.clone(),
                end,
                now_ms,
                duration_ms,
            )),
            Err(err) => warn!(slide = slide_index, error = %err, "skipping counter animation"),
        }
    }
    runs
}

/// Advances all runs by one frame and drops finished ones.
///
/// Runs are written in start order, so a newer run for the same element
/// overwrites an older one within the frame.
pub(crate) fn step_counter_runs<V: DeckView>(
    runs: &mut Vec<CounterRun>,
    view: &mut V,
    now_ms: f64,
) {
    runs.retain(|run| {
        let (value, finished) = run.sample(now_ms);
        view.set_counter_text(run.slide, &run.element, &value.to_string());
        if finished {
            trace!(slide = run.slide, element = %run.element, value, "counter finished");
        }
        !finished
    });
}

#[cfg(test)]
mod tests {
    use super::{CounterRun, counter_runs_for_slide};
    use crate::core::Slide;

    #[test]
    fn run_lands_exactly_on_target() {
        let run = CounterRun::new(0, "n", 200, 1_000.0, 1_500.0);
        assert_eq!(run.sample(1_000.0), (0, false));
        assert_eq!(run.sample(2_500.0), (200, true));
        assert_eq!(run.sample(9_000.0), (200, true));
    }

    #[test]
    fn invalid_targets_do_not_block_siblings() {
        let slide = Slide::new("metrics")
            .with_counter("a", "12")
            .with_counter("b", "n/a")
            .with_counter("c", "-40");
        let runs = counter_runs_for_slide(3, &slide, 0.0, 1_500.0);
        let ends: Vec<i64> = runs.iter().map(|run| run.end).collect();
        assert_eq!(ends, vec![12, -40]);
        assert!(runs.iter().all(|run| run.slide == 3));
    }
}

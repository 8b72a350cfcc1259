use tracing::{debug, trace};

use crate::core::{Deck, SlideIndex, SlideVisualState};
use crate::error::DeckResult;
use crate::interaction::{ControllerMode, DeckInput, NavigationCommand};
use crate::render::DeckView;

use super::counter_animation::{CounterRun, counter_runs_for_slide, step_counter_runs};
use super::staged_reveal::{apply_density_layout, reset_entry_elements, reveal_entry_elements};
use super::{ControllerSnapshot, DeckConfig, DeckTask, TaskQueue};

/// Slide navigation state machine.
///
/// Owns the slide cursor and drives every visual side effect through the
/// injected `DeckView`. Time only moves when the host calls `tick`; all
/// deferred work sits in a cooperative task queue until then.
pub struct PresentationController<V: DeckView> {
    view: V,
    deck: Deck,
    config: DeckConfig,
    index: SlideIndex,
    mode: ControllerMode,
    visual_states: Vec<SlideVisualState>,
    tasks: TaskQueue<DeckTask>,
    counter_runs: Vec<CounterRun>,
    clock_ms: f64,
    transition_generation: u64,
    viewport_width_px: f64,
    started: bool,
}

impl<V: DeckView> PresentationController<V> {
    /// Builds a controller on slide 0 and paints the initial view state.
    pub fn new(view: V, deck: Deck, config: DeckConfig) -> DeckResult<Self> {
        config.validate()?;
        let index = SlideIndex::new(deck.len())?;

        let mut visual_states = vec![SlideVisualState::Inactive; deck.len()];
        visual_states[0] = SlideVisualState::Active;

        let mut controller = Self {
            view,
            deck,
            config,
            index,
            mode: ControllerMode::Idle,
            visual_states,
            tasks: TaskQueue::new(),
            counter_runs: Vec::new(),
            clock_ms: 0.0,
            transition_generation: 0,
            viewport_width_px: config.viewport_width_px,
            started: false,
        };

        for (slide, state) in controller.visual_states.iter().enumerate() {
            controller.view.set_slide_state(slide, *state);
        }
        controller.refresh_indicators();
        Ok(controller)
    }

    /// Schedules the first slide's entry effects.
    ///
    /// Calling it again is a no-op.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        let slide = self.index.current();
        self.tasks.schedule(
            self.clock_ms + self.config.startup_delay_ms,
            DeckTask::EnterSlide { slide },
        );
        debug!(slide, slide_count = self.index.len(), "presentation started");
    }

    /// Maps host input to a navigation command and executes it.
    ///
    /// Returns `true` when a transition happened.
    pub fn handle_input(&mut self, input: DeckInput) -> DeckResult<bool> {
        match input.command() {
            Some(command) => self.execute(command),
            None => Ok(false),
        }
    }

    /// Executes a navigation command.
    ///
    /// `Previous`/`Next` at a boundary return `Ok(false)`; `GoTo` outside
    /// the deck fails with `OutOfRange` and leaves the state untouched.
    pub fn execute(&mut self, command: NavigationCommand) -> DeckResult<bool> {
        let target = match command {
            NavigationCommand::Previous => {
                if self.index.is_first() {
                    trace!("previous ignored on first slide");
                    return Ok(false);
                }
                self.index.current() - 1
            }
            NavigationCommand::Next => {
                if self.index.is_last() {
                    trace!("next ignored on last slide");
                    return Ok(false);
                }
                self.index.current() + 1
            }
            NavigationCommand::GoTo(index) => self.index.resolve(index)?,
        };

        self.transition_to(target, command)?;
        Ok(true)
    }

    pub fn next(&mut self) -> DeckResult<bool> {
        self.execute(NavigationCommand::Next)
    }

    pub fn previous(&mut self) -> DeckResult<bool> {
        self.execute(NavigationCommand::Previous)
    }

    pub fn go_to(&mut self, index: i64) -> DeckResult<bool> {
        self.execute(NavigationCommand::GoTo(index))
    }

    /// Advances the clock to `now_ms`, runs every task due by then and
    /// renders one animation frame.
    ///
    /// A `now_ms` earlier than the current clock is treated as the current clock.
    pub fn tick(&mut self, now_ms: f64) {
        let now_ms = now_ms.max(self.clock_ms);
        while let Some((due_ms, task)) = self.tasks.pop_due(now_ms) {
            self.clock_ms = self.clock_ms.max(due_ms);
            self.run_task(task);
        }
        self.clock_ms = now_ms;
        self.on_animation_frame();
    }

    /// Updates the viewport width and rechecks density widgets on the current slide.
    pub fn resize(&mut self, width_px: f64) {
        if !width_px.is_finite() || width_px < 0.0 {
            return;
        }
        self.viewport_width_px = width_px;
        self.recheck_layout(self.index.current());
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index.current()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn mode(&self) -> ControllerMode {
        self.mode
    }

    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn visual_state(&self, slide: usize) -> Option<SlideVisualState> {
        self.visual_states.get(slide).copied()
    }

    #[must_use]
    pub fn visual_states(&self) -> &[SlideVisualState] {
        &self.visual_states
    }

    /// Progress indicator width: `(index + 1) / N * 100`.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        (self.index.current() + 1) as f64 / self.index.len() as f64 * 100.0
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index.current() + 1, self.index.len())
    }

    #[must_use]
    pub fn previous_disabled(&self) -> bool {
        self.index.is_first()
    }

    #[must_use]
    pub fn next_disabled(&self) -> bool {
        self.index.is_last()
    }

    #[must_use]
    pub fn pending_task_count(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn running_counter_count(&self) -> usize {
        self.counter_runs.len()
    }

    #[must_use]
    pub fn next_due_ms(&self) -> Option<f64> {
        self.tasks.next_due_ms()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> DeckConfig {
        self.config
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            current_index: self.index.current(),
            slide_count: self.index.len(),
            mode: self.mode,
            visual_states: self.visual_states.clone(),
            progress_percent: self.progress_percent(),
            position_label: self.position_label(),
            previous_disabled: self.previous_disabled(),
            next_disabled: self.next_disabled(),
            pending_tasks: self.tasks.len(),
            pending_cleanups: self
                .tasks
                .count_matching(|task| matches!(task, DeckTask::ClearTransitioningOut { .. })),
            running_counters: self.counter_runs.len(),
            clock_ms: self.clock_ms,
        }
    }

    fn transition_to(&mut self, target: usize, command: NavigationCommand) -> DeckResult<()> {
        let outgoing = self.index.current();
        self.mode = ControllerMode::Transitioning;
        self.set_visual_state(outgoing, SlideVisualState::TransitioningOut);

        self.index.go_to(target as i64)?;
        let incoming = self.index.current();
        self.set_visual_state(incoming, SlideVisualState::Active);

        self.transition_generation += 1;
        self.tasks.schedule(
            self.clock_ms + self.config.transition_grace_ms,
            DeckTask::ClearTransitioningOut {
                generation: self.transition_generation,
            },
        );

        self.refresh_indicators();
        self.enter_slide(incoming);
        self.tasks
            .schedule(self.clock_ms, DeckTask::RecheckLayout { slide: incoming });

        debug!(?command, from = outgoing, to = incoming, "slide transition");
        Ok(())
    }

    fn run_task(&mut self, task: DeckTask) {
        trace!(?task, clock_ms = self.clock_ms, "running deck task");
        match task {
            DeckTask::ClearTransitioningOut { generation } => {
                for slide in 0..self.visual_states.len() {
                    if self.visual_states[slide] == SlideVisualState::TransitioningOut {
                        self.set_visual_state(slide, SlideVisualState::Inactive);
                    }
                }
                if generation == self.transition_generation {
                    self.mode = ControllerMode::Idle;
                }
            }
            DeckTask::RevealEntryElements { slide } => {
                if let Some(content) = self.deck.slide(slide) {
                    reveal_entry_elements(&mut self.view, slide, content);
                }
            }
            DeckTask::EnterSlide { slide } => {
                self.enter_slide(slide);
                self.recheck_layout(slide);
            }
            DeckTask::RecheckLayout { slide } => self.recheck_layout(slide),
        }
    }

    /// Staged reveal phase one plus fresh counter runs; phase two is queued.
    fn enter_slide(&mut self, slide: usize) {
        let Some(content) = self.deck.slide(slide) else {
            return;
        };

        reset_entry_elements(&mut self.view, slide, content);
        if !content.entry_elements.is_empty() {
            self.tasks.schedule(
                self.clock_ms + self.config.reveal_delay_ms,
                DeckTask::RevealEntryElements { slide },
            );
        }

        self.counter_runs.extend(counter_runs_for_slide(
            slide,
            content,
            self.clock_ms,
            self.config.counter_duration_ms,
        ));
    }

    fn recheck_layout(&mut self, slide: usize) {
        let Some(content) = self.deck.slide(slide) else {
            return;
        };
        let compact = self.viewport_width_px <= self.config.compact_breakpoint_px;
        apply_density_layout(&mut self.view, slide, content, compact);
    }

    fn on_animation_frame(&mut self) {
        if self.counter_runs.is_empty() {
            return;
        }
        step_counter_runs(&mut self.counter_runs, &mut self.view, self.clock_ms);
    }

    fn refresh_indicators(&mut self) {
        let percent = self.progress_percent();
        let label = self.position_label();
        let previous_disabled = self.previous_disabled();
        let next_disabled = self.next_disabled();

        self.view.set_progress(percent);
        self.view.set_position_label(&label);
        self.view
            .set_navigation_disabled(previous_disabled, next_disabled);
    }

    fn set_visual_state(&mut self, slide: usize, state: SlideVisualState) {
        if let Some(current) = self.visual_states.get_mut(slide) {
            *current = state;
            self.view.set_slide_state(slide, state);
        }
    }
}

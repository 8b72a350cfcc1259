mod controller;
mod counter_animation;
mod deck_config;
mod presentation;
mod snapshot;
mod staged_reveal;
mod task_queue;

pub use controller::PresentationController;
pub use counter_animation::CounterRun;
pub use deck_config::DeckConfig;
pub use presentation::Presentation;
pub use snapshot::ControllerSnapshot;
pub use task_queue::{DeckTask, TaskQueue};

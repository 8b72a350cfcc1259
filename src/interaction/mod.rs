use serde::{Deserialize, Serialize};

/// Controller lifecycle: `Transitioning` lasts until the newest grace cleanup fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControllerMode {
    #[default]
    Idle,
    Transitioning,
}

/// Serialized navigation intent consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationCommand {
    Previous,
    Next,
    /// Jump to an absolute slide; out-of-range targets are rejected.
    GoTo(i64),
}

/// Keyboard keys the deck reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl DeckKey {
    /// Maps a DOM-style key name (`"ArrowLeft"`, `"ArrowRight"`, ...).
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn command(self) -> Option<NavigationCommand> {
        match self {
            Self::ArrowLeft => Some(NavigationCommand::Previous),
            Self::ArrowRight => Some(NavigationCommand::Next),
            Self::Other => None,
        }
    }
}

/// Where a pointer click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickTarget {
    /// The bare background of a slide.
    SlideBackground,
    /// Anything inside the navigation region (buttons, progress bar).
    Navigation,
    /// Slide content such as text, cards or charts.
    Content,
}

impl ClickTarget {
    #[must_use]
    pub fn command(self) -> Option<NavigationCommand> {
        match self {
            Self::SlideBackground => Some(NavigationCommand::Next),
            Self::Navigation | Self::Content => None,
        }
    }
}

/// Which navigation affordance a button press came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationButton {
    Previous,
    Next,
}

impl NavigationButton {
    #[must_use]
    pub fn command(self) -> NavigationCommand {
        match self {
            Self::Previous => NavigationCommand::Previous,
            Self::Next => NavigationCommand::Next,
        }
    }
}

/// Any host input the controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckInput {
    Button(NavigationButton),
    Key(DeckKey),
    Click(ClickTarget),
    Command(NavigationCommand),
}

impl DeckInput {
    #[must_use]
    pub fn command(self) -> Option<NavigationCommand> {
        match self {
            Self::Button(button) => Some(button.command()),
            Self::Key(key) => key.command(),
            Self::Click(target) => target.command(),
            Self::Command(command) => Some(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClickTarget, DeckInput, DeckKey, NavigationCommand};

    #[test]
    fn arrow_keys_map_to_previous_and_next() {
        assert_eq!(
            DeckKey::from_key_name("ArrowLeft").command(),
            Some(NavigationCommand::Previous)
        );
        assert_eq!(
            DeckKey::from_key_name("ArrowRight").command(),
            Some(NavigationCommand::Next)
        );
        assert_eq!(DeckKey::from_key_name("Enter").command(), None);
    }

    #[test]
    fn only_background_clicks_advance() {
        assert_eq!(
            DeckInput::Click(ClickTarget::SlideBackground).command(),
            Some(NavigationCommand::Next)
        );
        assert_eq!(DeckInput::Click(ClickTarget::Navigation).command(), None);
        assert_eq!(DeckInput::Click(ClickTarget::Content).command(), None);
    }
}

use crate::session::SessionState;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Start,
    Lap,
    Stop,
    Resume,
    Reset,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Start | Action::Resume => "Start",
            Action::Lap => "Lap",
            Action::Stop => "Stop",
            Action::Reset => "Reset",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Button {
    pub action: Action,
    pub enabled: bool,
}

impl Button {
    fn enabled(action: Action) -> Self {
        Self { action, enabled: true }
    }

    fn disabled(action: Action) -> Self {
        Self { action, enabled: false }
    }
}

/// The pair of buttons offered for a session state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Controls {
    pub left: Button,
    pub right: Button,
}

impl Controls {
    pub fn for_state(state: SessionState) -> Self {
        match state {
            SessionState::Idle => Self {
                left: Button::disabled(Action::Lap),
                right: Button::enabled(Action::Start),
            },
            SessionState::Running => Self {
                left: Button::enabled(Action::Lap),
                right: Button::enabled(Action::Stop),
            },
            SessionState::Paused => Self {
                left: Button::enabled(Action::Reset),
                right: Button::enabled(Action::Resume),
            },
        }
    }

    /// True if one of the buttons triggers `action` and is enabled.
    pub fn offers(&self, action: Action) -> bool {
        [self.left, self.right]
            .iter()
            .any(|button| button.enabled && button.action == action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_per_state() {
        let idle = Controls::for_state(SessionState::Idle);
        assert_eq!(idle.left, Button { action: Action::Lap, enabled: false });
        assert_eq!(idle.right, Button { action: Action::Start, enabled: true });

        let running = Controls::for_state(SessionState::Running);
        assert_eq!(running.left.action, Action::Lap);
        assert_eq!(running.right.action, Action::Stop);

        let paused = Controls::for_state(SessionState::Paused);
        assert_eq!(paused.left.action, Action::Reset);
        assert_eq!(paused.right.action, Action::Resume);
    }

    #[test]
    fn test_offers() {
        let idle = Controls::for_state(SessionState::Idle);
        assert!(idle.offers(Action::Start));
        assert!(!idle.offers(Action::Lap)); // shown but disabled
        assert!(!idle.offers(Action::Reset));

        let paused = Controls::for_state(SessionState::Paused);
        assert!(paused.offers(Action::Reset));
        assert!(paused.offers(Action::Resume));
        assert!(!paused.offers(Action::Stop));
    }

    #[test]
    fn test_labels() {
        // Resuming is offered under the same label as starting
        assert_eq!(Action::Resume.label(), "Start");
        assert_eq!(Action::Start.label(), "Start");
        assert_eq!(Action::Reset.label(), "Reset");
    }
}

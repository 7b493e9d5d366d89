use macroquad::prelude::*;
use crate::application::Action;

/// Anything that can answer "is this action's key pressed right now"
pub trait InputSource {
    fn is_pressed(&self, action: Action) -> bool;
}

/// Actions in the order they are checked; the first pressed one wins
pub const ACTION_PRIORITY: [Action; 4] = [
    Action::Quit,
    Action::Pause,
    Action::Resume,
    Action::Restart,
];

/// Poll the input source for at most one action this frame
pub fn poll(source: &impl InputSource) -> Option<Action> {
    ACTION_PRIORITY
        .into_iter()
        .find(|&action| source.is_pressed(action))
}

/// Keyboard bindings: Q quit, A pause, S resume, D restart
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub const fn key_for(action: Action) -> KeyCode {
        match action {
            Action::Quit => KeyCode::Q,
            Action::Pause => KeyCode::A,
            Action::Resume => KeyCode::S,
            Action::Restart => KeyCode::D,
        }
    }
}

impl InputSource for KeyboardInput {
    fn is_pressed(&self, action: Action) -> bool {
        is_key_pressed(Self::key_for(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pressed(Vec<Action>);

    impl InputSource for Pressed {
        fn is_pressed(&self, action: Action) -> bool {
            self.0.contains(&action)
        }
    }

    #[test]
    fn test_nothing_pressed() {
        assert_eq!(poll(&Pressed(vec![])), None);
    }

    #[test]
    fn test_single_action() {
        assert_eq!(poll(&Pressed(vec![Action::Restart])), Some(Action::Restart));
        assert_eq!(poll(&Pressed(vec![Action::Resume])), Some(Action::Resume));
    }

    #[test]
    fn test_priority_order() {
        let all = Pressed(vec![Action::Restart, Action::Resume, Action::Pause, Action::Quit]);
        assert_eq!(poll(&all), Some(Action::Quit));

        let no_quit = Pressed(vec![Action::Restart, Action::Resume, Action::Pause]);
        assert_eq!(poll(&no_quit), Some(Action::Pause));

        let late = Pressed(vec![Action::Restart, Action::Resume]);
        assert_eq!(poll(&late), Some(Action::Resume));
    }

    #[test]
    fn test_key_bindings_are_distinct() {
        for (i, &a) in ACTION_PRIORITY.iter().enumerate() {
            for &b in &ACTION_PRIORITY[i + 1..] {
                assert_ne!(KeyboardInput::key_for(a), KeyboardInput::key_for(b));
            }
        }
    }
}

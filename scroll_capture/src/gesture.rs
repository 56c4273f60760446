//! Raw input as delivered by the browser, and what to do with the event.

/// A wheel event's deltas, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelInput {
    /// Horizontal delta (`deltaX`)
    pub delta_x: f64,
    /// Vertical delta (`deltaY`)
    pub delta_y: f64,
}

impl WheelInput {
    /// Wheel input from both deltas.
    pub fn new(delta_x: f64, delta_y: f64) -> Self {
        Self { delta_x, delta_y }
    }

    /// Plain vertical wheel movement.
    pub fn vertical(delta_y: f64) -> Self {
        Self::new(0.0, delta_y)
    }
}

/// The delta that drives the track.
///
/// Vertical wins ties, so trackpads that report a little sideways drift on a
/// vertical swipe still drive the track by the vertical amount.
pub fn dominant_delta(input: WheelInput) -> f64 {
    if input.delta_y.abs() >= input.delta_x.abs() {
        input.delta_y
    } else {
        input.delta_x
    }
}

/// A keydown event reduced to what the controller inspects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    /// `KeyboardEvent.key`
    pub key: String,
    /// Shift held
    pub shift: bool,
    /// Ctrl, Alt or Meta held
    pub command_modifier: bool,
    /// Event target is a text field, select or contenteditable
    pub editable_target: bool,
}

impl KeyInput {
    /// Unmodified key press on a non-editable target.
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Same key with Shift held.
    pub fn shifted(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shift: true,
            ..Self::default()
        }
    }
}

/// Carousel navigation a key maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// One step towards the end
    StepForward,
    /// One step towards the start
    StepBackward,
    /// One page towards the end
    PageForward,
    /// One page towards the start
    PageBackward,
    /// Jump to the first card
    Start,
    /// Jump to the last card
    End,
}

impl KeyCommand {
    /// Map a key press to a command, `None` for keys the carousel ignores.
    pub fn from_input(input: &KeyInput) -> Option<Self> {
        if input.command_modifier || input.editable_target {
            return None;
        }
        match input.key.as_str() {
            "ArrowDown" => Some(Self::StepForward),
            "ArrowUp" => Some(Self::StepBackward),
            "PageDown" => Some(Self::PageForward),
            "PageUp" => Some(Self::PageBackward),
            " " if input.shift => Some(Self::PageBackward),
            " " => Some(Self::PageForward),
            "Home" => Some(Self::Start),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

/// What the host must do with the event that was just handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disposition {
    /// Call `preventDefault()`
    pub prevent_default: bool,
    /// Call `stopPropagation()`
    pub stop_propagation: bool,
}

impl Disposition {
    /// Leave the event alone; the browser's default behavior runs.
    pub const PASS: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    /// Suppress the default action only.
    pub const PREVENT: Self = Self {
        prevent_default: true,
        stop_propagation: false,
    };

    /// Suppress the default action and keep the event from reaching the page.
    pub const CONSUME: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };

    /// Whether the event was claimed by the carousel.
    pub fn is_handled(&self) -> bool {
        self.prevent_default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_delta_wins_ties() {
        assert_eq!(dominant_delta(WheelInput::new(50.0, -50.0)), -50.0);
        assert_eq!(dominant_delta(WheelInput::vertical(120.0)), 120.0);
    }

    #[test]
    fn horizontal_delta_when_it_dominates() {
        assert_eq!(dominant_delta(WheelInput::new(-80.0, 10.0)), -80.0);
    }

    #[test]
    fn zero_input_stays_zero() {
        assert_eq!(dominant_delta(WheelInput::default()), 0.0);
    }

    #[test]
    fn navigation_keys() {
        let cases = [
            ("ArrowDown", false, Some(KeyCommand::StepForward)),
            ("ArrowUp", false, Some(KeyCommand::StepBackward)),
            ("PageDown", false, Some(KeyCommand::PageForward)),
            ("PageUp", false, Some(KeyCommand::PageBackward)),
            (" ", false, Some(KeyCommand::PageForward)),
            (" ", true, Some(KeyCommand::PageBackward)),
            ("Home", false, Some(KeyCommand::Start)),
            ("End", false, Some(KeyCommand::End)),
            ("ArrowLeft", false, None),
            ("Enter", false, None),
        ];
        for (key, shift, expected) in cases {
            let input = KeyInput {
                key: key.into(),
                shift,
                ..KeyInput::default()
            };
            assert_eq!(KeyCommand::from_input(&input), expected, "key {key:?}");
        }
    }

    #[test]
    fn shift_does_not_flip_arrows() {
        assert_eq!(
            KeyCommand::from_input(&KeyInput::shifted("ArrowDown")),
            Some(KeyCommand::StepForward)
        );
    }

    #[test]
    fn browser_shortcuts_and_text_fields_are_ignored() {
        let ctrl_end = KeyInput {
            command_modifier: true,
            ..KeyInput::plain("End")
        };
        assert_eq!(KeyCommand::from_input(&ctrl_end), None);

        let typing_space = KeyInput {
            editable_target: true,
            ..KeyInput::plain(" ")
        };
        assert_eq!(KeyCommand::from_input(&typing_space), None);
    }
}

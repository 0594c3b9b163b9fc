use macroquad::prelude::*;

use crate::application::InputEvent;

/// Keyboard shortcuts and the events they raise
const KEY_ACTIONS: [(KeyCode, InputEvent); 4] = [
    (KeyCode::Escape, InputEvent::Terminate),
    (KeyCode::Space, InputEvent::TogglePause),
    (KeyCode::R, InputEvent::Randomize),
    (KeyCode::C, InputEvent::Clear),
];

/// Speed units for this frame's wheel motion: rounded notches in the
/// wheel's direction, at least one for any movement
pub fn wheel_to_speed_delta(wheel: f32) -> Option<i32> {
    if wheel == 0.0 || wheel.is_nan() {
        return None;
    }
    let units = (wheel.abs().round() as i32).max(1);
    Some(wheel.signum() as i32 * units)
}

/// Collect this frame's input as controller events, in a fixed order
pub fn collect_events() -> Vec<InputEvent> {
    let (px, py) = mouse_position();

    let mouse = [
        (MouseButton::Left, InputEvent::PrimaryClick { px, py }),
        (MouseButton::Middle, InputEvent::SecondaryClick { px, py }),
        (MouseButton::Right, InputEvent::TogglePause),
    ];

    let wheel = wheel_to_speed_delta(mouse_wheel().1).map(InputEvent::AdjustSpeed);

    wheel
        .into_iter()
        .chain(
            mouse
                .into_iter()
                .filter(|(button, _)| is_mouse_button_pressed(*button))
                .map(|(_, event)| event),
        )
        .chain(
            KEY_ACTIONS
                .into_iter()
                .filter(|(key, _)| is_key_pressed(*key))
                .map(|(_, event)| event),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_to_speed_delta() {
        assert_eq!(wheel_to_speed_delta(0.0), None);
        assert_eq!(wheel_to_speed_delta(1.0), Some(1));
        assert_eq!(wheel_to_speed_delta(-1.0), Some(-1));
        assert_eq!(wheel_to_speed_delta(0.2), Some(1));
        assert_eq!(wheel_to_speed_delta(-0.2), Some(-1));
    }

    #[test]
    fn test_wheel_keeps_several_notches() {
        assert_eq!(wheel_to_speed_delta(3.0), Some(3));
        assert_eq!(wheel_to_speed_delta(-3.5), Some(-4));
        assert_eq!(wheel_to_speed_delta(120.0), Some(120));
    }
}

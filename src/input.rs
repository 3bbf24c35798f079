use powers_core::{Direction, Gesture};

/// `MouseEvent.button` value of the primary button.
pub const PRIMARY_BUTTON: i16 = 0;

/// Arrow keys traverse; the Space key (matched by `code`) toggles the log.
#[inline]
pub fn gesture_for_key(key: &str, code: &str) -> Option<Gesture> {
    match key {
        "ArrowUp" => Some(Gesture::Traverse(Direction::Up)),
        "ArrowDown" => Some(Gesture::Traverse(Direction::Down)),
        _ if code == "Space" => Some(Gesture::ToggleLog),
        _ => None,
    }
}

/// Wheel up (negative `deltaY`) zooms out, anything else zooms in.
#[inline]
pub fn direction_for_wheel(delta_y: f64) -> Direction {
    if delta_y < 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

#[inline]
pub fn gesture_for_click(button: i16) -> Option<Gesture> {
    (button == PRIMARY_BUTTON).then_some(Gesture::CycleMode)
}

/// Keys whose browser default (page scroll) must be suppressed.
#[inline]
pub fn suppresses_default(gesture: Gesture) -> bool {
    matches!(gesture, Gesture::ToggleLog)
}

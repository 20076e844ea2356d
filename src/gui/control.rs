use quicksilver::input::ButtonState;
use quicksilver::lifecycle::Event;

/// Maps raw window events to the single game action. Keys, mouse buttons and taps all count.
pub struct ControlWindow;

impl ControlWindow {
    pub fn is_press(&self, event: &Event) -> bool {
        match event {
            Event::Key(_, ButtonState::Pressed) => true,
            Event::MouseButton(_, ButtonState::Pressed) => true,
            _ => false,
        }
    }
}

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Pixels scrolled per wheel notch or arrow key press
pub const LINE_HEIGHT: f32 = 40.0;

/// Fraction of the viewport scrolled by page keys
const PAGE_FRACTION: f32 = 0.9;

/// Scroll request derived from user input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Relative scroll in pixels (positive = down)
    By(f32),
    ToTop,
    ToBottom,
}

/// Adapter that bridges Winit events to page scroll commands
#[derive(Debug, Clone, Copy)]
pub struct ScrollInput {
    viewport_height: f32,
}

impl ScrollInput {
    pub fn new(viewport_height: f32) -> Self {
        Self { viewport_height }
    }

    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
    }

    /// Translate a Winit WindowEvent, if it scrolls the page
    pub fn process_event(&self, event: &WindowEvent) -> Option<ScrollCommand> {
        match event {
            WindowEvent::MouseWheel { delta, .. } => Some(ScrollCommand::By(wheel_delta(*delta))),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(keycode) => self.key_command(keycode),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            _ => None,
        }
    }

    /// Scroll command for an event the UI overlay has already seen.
    ///
    /// The overlay has no scrollable widgets, so the wheel scrolls the page even
    /// when egui reports the pointer over one of its areas. Keys egui claims stay with egui.
    pub fn route_event(&self, event: &WindowEvent, ui_consumed: bool) -> Option<ScrollCommand> {
        match event {
            WindowEvent::MouseWheel { .. } => self.process_event(event),
            _ if ui_consumed => None,
            _ => self.process_event(event),
        }
    }

    /// Map a pressed key to a scroll command
    pub fn key_command(&self, keycode: KeyCode) -> Option<ScrollCommand> {
        let page = self.viewport_height * PAGE_FRACTION;
        match keycode {
            KeyCode::ArrowDown => Some(ScrollCommand::By(LINE_HEIGHT)),
            KeyCode::ArrowUp => Some(ScrollCommand::By(-LINE_HEIGHT)),
            KeyCode::PageDown | KeyCode::Space => Some(ScrollCommand::By(page)),
            KeyCode::PageUp => Some(ScrollCommand::By(-page)),
            KeyCode::Home => Some(ScrollCommand::ToTop),
            KeyCode::End => Some(ScrollCommand::ToBottom),
            _ => None,
        }
    }
}

/// Wheel delta in page pixels; wheel up scrolls the page up
pub fn wheel_delta(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, lines) => -lines * LINE_HEIGHT,
        MouseScrollDelta::PixelDelta(position) => -position.y as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::event::{DeviceId, TouchPhase};

    // Note: KeyEvent cannot be constructed outside winit, so key handling is
    // covered through key_command

    fn wheel_event(lines: f32) -> WindowEvent {
        WindowEvent::MouseWheel {
            // SAFETY: the dummy id is only compared, never passed back to the platform
            device_id: unsafe { DeviceId::dummy() },
            delta: MouseScrollDelta::LineDelta(0.0, lines),
            phase: TouchPhase::Moved,
        }
    }

    #[test]
    fn wheel_lines_scroll_down() {
        let delta = wheel_delta(MouseScrollDelta::LineDelta(0.0, -2.0));
        assert_eq!(delta, 2.0 * LINE_HEIGHT);
    }

    #[test]
    fn wheel_pixels_follow_touchpad() {
        let delta = wheel_delta(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 35.0)));
        assert_eq!(delta, -35.0);
    }

    #[test]
    fn page_keys_scale_with_viewport() {
        let input = ScrollInput::new(1000.0);
        assert_eq!(input.key_command(KeyCode::PageDown), Some(ScrollCommand::By(900.0)));
        assert_eq!(input.key_command(KeyCode::PageUp), Some(ScrollCommand::By(-900.0)));
    }

    #[test]
    fn jump_keys() {
        let input = ScrollInput::new(600.0);
        assert_eq!(input.key_command(KeyCode::Home), Some(ScrollCommand::ToTop));
        assert_eq!(input.key_command(KeyCode::End), Some(ScrollCommand::ToBottom));
        assert_eq!(input.key_command(KeyCode::KeyW), None);
    }

    #[test]
    fn wheel_scrolls_page_when_ui_has_pointer() {
        let input = ScrollInput::new(800.0);
        let event = wheel_event(-1.0);

        assert_eq!(
            input.route_event(&event, true),
            Some(ScrollCommand::By(LINE_HEIGHT))
        );
        assert_eq!(input.route_event(&event, false), input.process_event(&event));
    }

    #[test]
    fn consumed_non_scroll_events_stay_with_ui() {
        let input = ScrollInput::new(800.0);
        let event = WindowEvent::CursorLeft {
            // SAFETY: see wheel_event
            device_id: unsafe { DeviceId::dummy() },
        };

        assert_eq!(input.route_event(&event, true), None);
        assert_eq!(input.route_event(&event, false), None);
    }
}

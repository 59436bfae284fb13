//! Host input → game commands.
//!
//! Translation is pure: it never touches the world, so the game can apply
//! commands in queue order and tests can check the mapping on its own.

use awareness_engine::{InputEvent, Viewport, PRIMARY_BUTTON};
use glam::Vec2;

use crate::interactive::window_to_scene;
use crate::world::Toggle;

pub const KEY_ESCAPE: u32 = 27;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Zero-based scene index.
    SelectScene(usize),
    Toggle(Toggle),
    KillMosquito,
    Quit,
    /// Pointer moved to this scene-space point.
    Hover(Vec2),
    /// Primary button pressed at this scene-space point.
    Click(Vec2),
}

/// Map a key code to a command. Letters match in either case.
pub fn command_for_key(key_code: u32) -> Option<Command> {
    if key_code == KEY_ESCAPE {
        return Some(Command::Quit);
    }
    let key = char::from_u32(key_code)?.to_ascii_lowercase();
    let command = match key {
        '1'..='9' => Command::SelectScene(key as usize - '1' as usize),
        'm' => Command::Toggle(Toggle::Animation),
        'n' => Command::Toggle(Toggle::DayNight),
        'a' => Command::Toggle(Toggle::Ambulance),
        'e' => Command::Toggle(Toggle::Emergency),
        'i' => Command::Toggle(Toggle::Info),
        'o' => Command::Toggle(Toggle::Options),
        'u' => Command::Toggle(Toggle::Updates),
        'd' => Command::KillMosquito,
        _ => return None,
    };
    Some(command)
}

/// Translates one host event. Resize events update `viewport` in place
/// (zero-sized areas are ignored) and produce no command.
#[derive(Debug, Default)]
pub struct InputController;

impl InputController {
    pub fn translate(&self, event: &InputEvent, viewport: &mut Viewport) -> Option<Command> {
        match *event {
            InputEvent::KeyDown { key_code } => command_for_key(key_code),
            InputEvent::PointerMove { x, y } => window_to_scene(x, y, *viewport).map(Command::Hover),
            InputEvent::PointerDown { x, y, button } if button == PRIMARY_BUTTON => {
                window_to_scene(x, y, *viewport).map(Command::Click)
            }
            InputEvent::Resize { width, height } => {
                let next = Viewport::new(width, height);
                if next.is_valid() {
                    *viewport = next;
                }
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_select_scenes() {
        assert_eq!(command_for_key('1' as u32), Some(Command::SelectScene(0)));
        assert_eq!(command_for_key('3' as u32), Some(Command::SelectScene(2)));
        assert_eq!(command_for_key('9' as u32), Some(Command::SelectScene(8)));
        assert_eq!(command_for_key('0' as u32), None);
    }

    #[test]
    fn letters_are_case_insensitive() {
        for (upper, lower) in [('M', 'm'), ('N', 'n'), ('A', 'a'), ('E', 'e'), ('I', 'i'), ('O', 'o'), ('U', 'u'), ('D', 'd')] {
            assert!(command_for_key(upper as u32).is_some());
            assert_eq!(command_for_key(upper as u32), command_for_key(lower as u32));
        }
        assert_eq!(command_for_key('u' as u32), Some(Command::Toggle(Toggle::Updates)));
        assert_eq!(command_for_key('D' as u32), Some(Command::KillMosquito));
        assert_eq!(command_for_key('x' as u32), None);
    }

    #[test]
    fn escape_quits() {
        assert_eq!(command_for_key(KEY_ESCAPE), Some(Command::Quit));
        assert_eq!(command_for_key(0xD800), None);
    }

    #[test]
    fn pointer_maps_into_scene_space() {
        let input = InputController;
        let mut vp = Viewport::new(1000.0, 500.0);
        let hover = input.translate(&InputEvent::PointerMove { x: 500.0, y: 0.0 }, &mut vp);
        assert_eq!(hover, Some(Command::Hover(Vec2::new(0.0, 5.0))));
        let click = input.translate(&InputEvent::PointerDown { x: 0.0, y: 250.0, button: 0 }, &mut vp);
        assert_eq!(click, Some(Command::Click(Vec2::new(-5.0, 0.0))));
    }

    #[test]
    fn other_buttons_and_releases_are_ignored() {
        let input = InputController;
        let mut vp = Viewport::default();
        assert_eq!(input.translate(&InputEvent::PointerDown { x: 1.0, y: 1.0, button: 2 }, &mut vp), None);
        assert_eq!(input.translate(&InputEvent::PointerUp { x: 1.0, y: 1.0, button: 0 }, &mut vp), None);
        assert_eq!(input.translate(&InputEvent::KeyUp { key_code: 'm' as u32 }, &mut vp), None);
    }

    #[test]
    fn resize_updates_mapping_unless_degenerate() {
        let input = InputController;
        let mut vp = Viewport::new(800.0, 600.0);
        input.translate(&InputEvent::Resize { width: 0.0, height: 300.0 }, &mut vp);
        assert_eq!(vp, Viewport::new(800.0, 600.0));
        input.translate(&InputEvent::Resize { width: 400.0, height: 300.0 }, &mut vp);
        assert_eq!(vp, Viewport::new(400.0, 300.0));
    }
}

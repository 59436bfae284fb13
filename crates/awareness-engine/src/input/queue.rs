/// Mouse/pointer button reported by the host. 0 is the primary button.
pub const PRIMARY_BUTTON: u8 = 0;

/// Input event types the engine understands.
/// Generic — no game-specific semantics. Pointer coordinates are in
/// window space (pixels, origin top-left, y down), exactly as the host
/// reports them; games map them into their own world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button was pressed at window coordinates (x, y).
    PointerDown { x: f32, y: f32, button: u8 },
    /// A button was released at window coordinates (x, y).
    PointerUp { x: f32, y: f32, button: u8 },
    /// The cursor moved to window coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed. Printable keys use their character code,
    /// Escape is 27.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// The drawable area changed size (pixels).
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// The host writes events into the queue between frames; the game reads
/// them at the start of the next tick and the runner drains them after.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0, button: PRIMARY_BUTTON });
        q.push(InputEvent::KeyDown { key_code: 'd' as u32 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn iter_preserves_arrival_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 1.0, y: 2.0 });
        q.push(InputEvent::Resize { width: 800.0, height: 600.0 });
        let kinds: Vec<_> = q.iter().copied().collect();
        assert_eq!(kinds[0], InputEvent::PointerMove { x: 1.0, y: 2.0 });
        assert_eq!(kinds[1], InputEvent::Resize { width: 800.0, height: 600.0 });
        // iter() does not consume
        assert_eq!(q.len(), 2);
    }
}

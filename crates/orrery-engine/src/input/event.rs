/// Input event types the engine understands.
/// Generic: no game-specific semantics. Pointer positions are viewport pixels
/// (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The cursor moved.
    PointerMove { x: f32, y: f32 },
    /// A click/tap completed.
    PointerClick { x: f32, y: f32 },
    /// A drag moved by (dx, dy) pixels. Drives the camera controller.
    Drag { dx: f32, dy: f32 },
    /// Wheel scrolled; negative = towards the scene.
    Wheel { delta: f32 },
    /// A key was pressed. `key_code` is the lower-cased character code.
    KeyDown { key_code: u32 },
    /// A UI control changed. `id` is game-defined; toggles send 0.0 / 1.0.
    Control { id: u32, value: f32 },
    /// The drawable area changed size.
    Resize { width: f32, height: f32 },
}

impl InputEvent {
    /// Build a `KeyDown` from a character, lower-casing it first.
    pub fn key(c: char) -> Self {
        let lower = c.to_lowercase().next().unwrap_or(c);
        InputEvent::KeyDown { key_code: lower as u32 }
    }

    /// The key as a character, if this is a `KeyDown` with a valid code.
    pub fn key_char(&self) -> Option<char> {
        match *self {
            InputEvent::KeyDown { key_code } => char::from_u32(key_code),
            _ => None,
        }
    }
}

//! Keyboard input event types for the phone field.
//!
//! Platform-independent key events, fed by whatever windowing or widget
//! layer hosts the field. Only the keys a single-line numeric field routes
//! are modeled; everything else arrives as [`KeyCode::Unidentified`] with
//! the produced text attached.

/// Type of keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    /// Key was pressed down.
    KeyDown,
    /// Key was released.
    KeyUp,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key is pressed.
    pub shift: bool,
    /// Control key is pressed.
    pub ctrl: bool,
    /// Alt key is pressed.
    pub alt: bool,
    /// Meta/Super key is pressed (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Returns true if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }

    /// Returns true when the event is a shortcut rather than text input.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Physical key codes for keyboard input.
///
/// These represent physical keys on the keyboard, independent of the
/// character they produce (which depends on keyboard layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Numbers
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Editing
    Backspace,
    Delete,
    Enter,

    /// Any other key; the produced text (if any) travels in
    /// [`KeyEvent::text`].
    Unidentified,
}

impl KeyCode {
    /// Key code for a decimal digit value, `None` above 9.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Digit0),
            1 => Some(Self::Digit1),
            2 => Some(Self::Digit2),
            3 => Some(Self::Digit3),
            4 => Some(Self::Digit4),
            5 => Some(Self::Digit5),
            6 => Some(Self::Digit6),
            7 => Some(Self::Digit7),
            8 => Some(Self::Digit8),
            9 => Some(Self::Digit9),
            _ => None,
        }
    }
}

/// A keyboard event delivered to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The physical key that was pressed.
    pub key_code: KeyCode,
    /// The text produced by this key press (may be empty for non-character
    /// keys). This accounts for keyboard layout and modifiers.
    pub text: String,
    /// Current state of modifier keys.
    pub modifiers: Modifiers,
    /// Type of event (down or up).
    pub event_type: KeyEventType,
}

impl KeyEvent {
    /// Creates a new key event.
    pub fn new(
        key_code: KeyCode,
        text: impl Into<String>,
        modifiers: Modifiers,
        event_type: KeyEventType,
    ) -> Self {
        Self {
            key_code,
            text: text.into(),
            modifiers,
            event_type,
        }
    }

    /// Creates a key down event with the given key code and text.
    pub fn key_down(key_code: KeyCode, text: impl Into<String>) -> Self {
        Self::new(key_code, text, Modifiers::NONE, KeyEventType::KeyDown)
    }

    /// Creates a key up event with the given key code.
    pub fn key_up(key_code: KeyCode) -> Self {
        Self::new(key_code, "", Modifiers::NONE, KeyEventType::KeyUp)
    }
}

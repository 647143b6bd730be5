//! Robot typing framework for end-to-end field testing.
//!
//! This module provides a robot-style testing API that drives a real
//! [`PhoneFieldState`] the way a user would:
//! - Type text one synthesized key event at a time
//! - Press backspace, enter, click the field, paste
//! - Assert on the display text, classification, and notification feed
//!
//! # Example
//!
//! ```
//! use telefone_testing::robot::PhoneRobot;
//!
//! let mut robot = PhoneRobot::new();
//! robot.type_text("912345");
//! robot.assert_display("91234-5");
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use telefone_foundation::phone::PhoneClass;
use telefone_ui::{KeyCode, KeyEvent, PhoneFieldState};

/// Drives a [`PhoneFieldState`] with synthesized key events and records
/// every classification-change notification since construction.
pub struct PhoneRobot {
    field: PhoneFieldState,
    events: Rc<RefCell<Vec<PhoneClass>>>,
    listener_id: Option<usize>,
}

impl PhoneRobot {
    /// Creates a robot over an empty field.
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Creates a robot over a field with preset (already formatted)
    /// content. Only notifications after this point are recorded.
    pub fn with_text(initial: impl Into<String>) -> Self {
        let field = PhoneFieldState::with_text(initial);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let listener_id = field
            .formatter()
            .add_listener(move |class| sink.borrow_mut().push(class));
        Self {
            field,
            events,
            listener_id: Some(listener_id),
        }
    }

    /// The field under test.
    pub fn field(&self) -> &PhoneFieldState {
        &self.field
    }

    /// Types text one key event per character. Digit characters press the
    /// matching digit key; anything else arrives as an unidentified key
    /// with its text attached.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            let key_code = ch
                .to_digit(10)
                .and_then(|d| KeyCode::from_digit(d as u8))
                .unwrap_or(KeyCode::Unidentified);
            self.field
                .handle_key(&KeyEvent::key_down(key_code, ch.to_string()));
        }
    }

    /// Presses backspace once.
    pub fn press_backspace(&mut self) {
        self.field
            .handle_key(&KeyEvent::key_down(KeyCode::Backspace, ""));
    }

    /// Presses backspace `count` times.
    pub fn press_backspace_times(&mut self, count: usize) {
        for _ in 0..count {
            self.press_backspace();
        }
    }

    /// Presses enter once.
    pub fn press_enter(&mut self) {
        self.field
            .handle_key(&KeyEvent::key_down(KeyCode::Enter, "\n"));
    }

    /// Clicks the field.
    pub fn click(&mut self) {
        self.field.handle_click();
    }

    /// Pastes text in one edit (no per-character key events).
    pub fn paste(&mut self, text: &str) {
        self.field.insert_text(text);
    }

    /// Stops recording classification notifications.
    pub fn stop_recording(&mut self) {
        if let Some(id) = self.listener_id.take() {
            self.field.formatter().remove_listener(id);
        }
    }

    /// Current display text.
    pub fn display(&self) -> String {
        self.field.text()
    }

    /// Current classification.
    pub fn class(&self) -> PhoneClass {
        self.field.class()
    }

    /// Every classification-change notification recorded so far, oldest
    /// first.
    pub fn classification_events(&self) -> Vec<PhoneClass> {
        self.events.borrow().clone()
    }

    /// Asserts on the current display text.
    ///
    /// # Panics
    ///
    /// Panics when the display text differs from `expected`.
    pub fn assert_display(&self, expected: &str) {
        let actual = self.display();
        assert_eq!(
            actual, expected,
            "expected display {expected:?}, found {actual:?}"
        );
    }

    /// Asserts on the current classification.
    ///
    /// # Panics
    ///
    /// Panics when the classification differs from `expected`.
    pub fn assert_class(&self, expected: PhoneClass) {
        let actual = self.class();
        assert_eq!(
            actual, expected,
            "expected classification {expected:?}, found {actual:?}"
        );
    }
}

impl Default for PhoneRobot {
    fn default() -> Self {
        Self::new()
    }
}

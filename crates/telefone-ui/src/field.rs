//! Observable state holder for a Brazilian phone input field.
//!
//! [`PhoneFieldState`] is the headless equivalent of a phone `EditText`: it
//! owns the display text, the cursor, and a [`PhoneFormatter`], and applies
//! the formatting discipline the widget would - every logical edit runs
//! exactly one formatting pass and writes the result back with the cursor
//! at the end. Because the field has no observer on its own text, the
//! write-back can never re-trigger formatting; hosts embedding the field in
//! a real widget only forward key events and read the text back out.

use crate::key_event::{KeyCode, KeyEvent, KeyEventType};
use crate::range::TextRange;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use telefone_foundation::phone::{strip_non_digits, PhoneClass, PhoneFormatter};

/// Inner state for PhoneFieldState.
struct FieldInner {
    /// Display text: digits plus at most one separator.
    text: String,
    /// Cursor, pinned to end-of-text after every edit.
    cursor: TextRange,
}

/// Observable state holder for a phone input field.
///
/// # Example
///
/// ```
/// use telefone_ui::{KeyCode, KeyEvent, PhoneFieldState};
///
/// let field = PhoneFieldState::new();
/// for (code, text) in [(KeyCode::Digit9, "9"), (KeyCode::Digit1, "1")] {
///     field.handle_key(&KeyEvent::key_down(code, text));
/// }
/// assert_eq!(field.text(), "91");
/// assert!(field.class().is_mobile());
/// ```
///
/// # Thread Safety
///
/// `PhoneFieldState` uses `Rc<RefCell<...>>` internally and is not
/// thread-safe. It should only be used from the thread that owns the input
/// widget.
#[derive(Clone)]
pub struct PhoneFieldState {
    inner: Rc<RefCell<FieldInner>>,
    formatter: PhoneFormatter,
}

impl fmt::Debug for PhoneFieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("PhoneFieldState")
            .field("text", &inner.text)
            .field("class", &self.formatter.class())
            .finish()
    }
}

impl PhoneFieldState {
    /// Creates an empty field.
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Creates a field with preset content.
    ///
    /// The preset text goes through a formatting pass immediately, the way
    /// a widget formats whatever text it was inflated with.
    pub fn with_text(initial: impl Into<String>) -> Self {
        let field = Self {
            inner: Rc::new(RefCell::new(FieldInner {
                text: String::new(),
                cursor: TextRange::zero(),
            })),
            formatter: PhoneFormatter::new(),
        };
        field.apply_format(initial.into());
        field
    }

    /// Returns the current display text.
    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    /// Returns the cursor position (always collapsed, at end-of-text).
    pub fn cursor(&self) -> TextRange {
        self.inner.borrow().cursor
    }

    /// Returns the current classification.
    pub fn class(&self) -> PhoneClass {
        self.formatter.class()
    }

    /// The formatter backing this field, for listener registration.
    pub fn formatter(&self) -> &PhoneFormatter {
        &self.formatter
    }

    /// Handles a click on the field.
    ///
    /// The cursor is pinned to end-of-text; clicking does not move it.
    pub fn handle_click(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.cursor = TextRange::cursor(inner.text.len());
    }

    /// Routes a key event into the field.
    ///
    /// Returns true when the event was consumed, whether or not it changed
    /// the text (a digit rejected by the length cap is still consumed).
    /// Key-up events are never consumed.
    pub fn handle_key(&self, event: &KeyEvent) -> bool {
        if event.event_type != KeyEventType::KeyDown {
            return false;
        }

        match event.key_code {
            KeyCode::Backspace => {
                self.backspace();
                true
            }

            // Cursor is pinned to end-of-text, so forward delete has
            // nothing to remove.
            KeyCode::Delete => false,

            // Single-line field: Enter inserts nothing.
            KeyCode::Enter => false,

            // Character input (most common case)
            _ if !event.text.is_empty() && !event.modifiers.command() => {
                self.insert_text(&event.text);
                true
            }

            _ => false,
        }
    }

    /// Inserts text at the cursor, subject to the per-class digit cap.
    ///
    /// This is also the paste path. An insertion whose digits would push
    /// the field past [`PhoneFormatter::max_digits`] for the classification
    /// in effect before the edit is rejected whole; the cap only applies
    /// once a classification exists, so pasting into an undefined field is
    /// always admitted and the formatter passes the excess through.
    pub fn insert_text(&self, text: &str) {
        let inserted = strip_non_digits(text).len();
        if inserted > 0 {
            if let Some(cap) = self.formatter.max_digits() {
                let current = strip_non_digits(&self.text()).len();
                if current + inserted > cap {
                    log::trace!("rejecting input past the {cap}-digit cap");
                    return;
                }
            }
        }
        let mut next = self.text();
        next.push_str(text);
        self.apply_format(next);
    }

    /// Replaces the field content programmatically.
    ///
    /// The text is reformatted and the cursor moves to the end. The digit
    /// cap is not applied here; like the formatter, this accepts any text.
    pub fn set_text(&self, text: impl Into<String>) {
        self.apply_format(text.into());
    }

    /// Handles a backspace press.
    ///
    /// Offers the edit to the formatter's boundary-delete rule first: when
    /// the cursor sits right after the separator, deleting the separator
    /// character alone would be invisible, so the whole group boundary
    /// collapses instead. Everywhere else the last character is removed and
    /// the text reformatted.
    fn backspace(&self) {
        let current = self.text();
        if let Some(collapsed) = self.formatter.backspace_across_separator(&current) {
            self.write_back(collapsed.text);
            return;
        }
        let mut next = current;
        next.pop();
        self.apply_format(next);
    }

    /// Runs one formatting pass over `raw` and writes the result back.
    ///
    /// Classification listeners fire inside `format`, while the previous
    /// display text is still in place; only the classification itself is
    /// guaranteed fresh to a re-querying listener.
    fn apply_format(&self, raw: String) {
        let formatted = self.formatter.format(&raw);
        self.write_back(formatted.text);
    }

    /// Writes display text back and pins the cursor to the end.
    fn write_back(&self, text: String) {
        let mut inner = self.inner.borrow_mut();
        inner.cursor = TextRange::cursor(text.len());
        inner.text = text;
    }
}

impl Default for PhoneFieldState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(field: &PhoneFieldState, digit: u8) {
        let code = KeyCode::from_digit(digit).expect("digit key");
        field.handle_key(&KeyEvent::key_down(code, digit.to_string()));
    }

    #[test]
    fn preset_text_is_formatted_on_construction() {
        let field = PhoneFieldState::with_text("912345678");
        assert_eq!(field.text(), "91234-5678");
        assert!(field.class().is_mobile());
        assert_eq!(field.cursor(), TextRange::cursor("91234-5678".len()));
    }

    #[test]
    fn typing_digits_formats_live() {
        let field = PhoneFieldState::new();
        for digit in [9, 1, 2, 3] {
            press(&field, digit);
        }
        assert_eq!(field.text(), "9123");
        press(&field, 4);
        assert_eq!(field.text(), "91234-");
        press(&field, 5);
        assert_eq!(field.text(), "91234-5");
    }

    #[test]
    fn landline_formats_after_fourth_digit() {
        let field = PhoneFieldState::new();
        for digit in [2, 1, 2, 3, 4] {
            press(&field, digit);
        }
        assert_eq!(field.text(), "2123-4");
        assert!(field.class().is_landline());
    }

    #[test]
    fn key_up_is_ignored() {
        let field = PhoneFieldState::new();
        assert!(!field.handle_key(&KeyEvent::key_up(KeyCode::Digit9)));
        assert_eq!(field.text(), "");
    }

    #[test]
    fn enter_is_ignored_in_single_line_field() {
        let field = PhoneFieldState::with_text("9123");
        assert!(!field.handle_key(&KeyEvent::key_down(KeyCode::Enter, "\n")));
        assert_eq!(field.text(), "9123");
    }

    #[test]
    fn shortcuts_are_not_text_input() {
        let field = PhoneFieldState::new();
        let mut modifiers = crate::key_event::Modifiers::NONE;
        modifiers.ctrl = true;
        let event = KeyEvent::new(
            KeyCode::Digit9,
            "9",
            modifiers,
            KeyEventType::KeyDown,
        );
        assert!(!field.handle_key(&event));
        assert_eq!(field.text(), "");
    }

    #[test]
    fn eleventh_mobile_digit_is_rejected_but_consumed() {
        let field = PhoneFieldState::new();
        for digit in [9, 1, 2, 3, 4, 5, 6, 7, 8, 9] {
            press(&field, digit);
        }
        assert_eq!(field.text(), "91234-56789");

        let event = KeyEvent::key_down(KeyCode::Digit0, "0");
        assert!(field.handle_key(&event));
        assert_eq!(field.text(), "91234-56789");
    }

    #[test]
    fn tenth_landline_digit_is_rejected() {
        let field = PhoneFieldState::with_text("212345678");
        assert_eq!(field.text(), "2123-45678");
        press(&field, 9);
        assert_eq!(field.text(), "2123-45678");
    }

    #[test]
    fn undefined_class_has_no_cap() {
        let field = PhoneFieldState::new();
        field.insert_text("08001234567890");
        assert_eq!(field.text(), "08001234567890");
        assert!(field.class().is_undefined());
    }

    #[test]
    fn backspace_walks_back_across_the_separator() {
        let field = PhoneFieldState::with_text("912345");
        assert_eq!(field.text(), "91234-5");

        let backspace = KeyEvent::key_down(KeyCode::Backspace, "");
        field.handle_key(&backspace);
        assert_eq!(field.text(), "91234-");
        field.handle_key(&backspace);
        assert_eq!(field.text(), "91234");
        field.handle_key(&backspace);
        assert_eq!(field.text(), "9123");
    }

    #[test]
    fn backspace_on_empty_field_is_harmless() {
        let field = PhoneFieldState::new();
        field.handle_key(&KeyEvent::key_down(KeyCode::Backspace, ""));
        assert_eq!(field.text(), "");
    }

    #[test]
    fn clearing_the_field_resets_classification() {
        let field = PhoneFieldState::with_text("21");
        assert!(field.class().is_landline());
        let backspace = KeyEvent::key_down(KeyCode::Backspace, "");
        field.handle_key(&backspace);
        field.handle_key(&backspace);
        assert_eq!(field.text(), "");
        assert!(field.class().is_undefined());
    }

    #[test]
    fn paste_of_formatted_text_reproduces_display() {
        let field = PhoneFieldState::new();
        field.insert_text("91234-5678");
        assert_eq!(field.text(), "91234-5678");
        assert!(field.class().is_mobile());
    }

    #[test]
    fn click_keeps_cursor_at_end() {
        let field = PhoneFieldState::with_text("912345");
        field.handle_click();
        assert_eq!(field.cursor(), TextRange::cursor(field.text().len()));
    }

    #[test]
    fn set_text_replaces_content() {
        let field = PhoneFieldState::with_text("912345");
        field.set_text("21234");
        assert_eq!(field.text(), "2123-4");
        assert!(field.class().is_landline());
    }

    #[test]
    fn display_text_is_a_formatting_fixed_point() {
        let field = PhoneFieldState::new();
        for digit in [9, 8, 7, 6, 5, 4] {
            press(&field, digit);
            let display = field.text();
            let reformatted = field.formatter().format(&display);
            assert_eq!(reformatted.text, display);
        }
    }
}

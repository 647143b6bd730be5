//! Headless input layer for the Telefone phone field.
//!
//! This crate binds the formatting core from `telefone-foundation` to the
//! contracts an input widget needs: key-event routing (including the
//! backspace-over-the-separator special case), the per-class input-length
//! cap, cursor-to-end placement, and programmatic text updates. It does no
//! rendering; a host widget feeds [`KeyEvent`]s in and reads the display
//! text back out.

pub mod field;
pub mod key_event;
pub mod range;

pub use field::PhoneFieldState;
pub use key_event::{KeyCode, KeyEvent, KeyEventType, Modifiers};
pub use range::TextRange;

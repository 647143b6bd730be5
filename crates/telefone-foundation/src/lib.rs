//! Classification and live formatting core for Brazilian telephone input.
//!
//! This crate is the pure half of Telefone: it turns raw field text into
//! display text with the separator in the right place, tracks whether the
//! number being typed is a mobile or a landline number, and feeds
//! classification changes to subscribed listeners. It knows nothing about
//! widgets, key events, or cursors; see `telefone-ui` for the input layer
//! that drives it.

pub mod phone;

pub use phone::{strip_non_digits, FormattedPhone, PhoneClass, PhoneFormatter};

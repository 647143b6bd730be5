//! Live formatting for Brazilian telephone numbers.
//!
//! # Core Types
//!
//! - [`PhoneClass`] - Mobile vs. landline classification from the leading digit
//! - [`PhoneFormatter`] - Stateful engine that formats raw text and reports
//!   classification changes
//! - [`FormattedPhone`] - Result of one formatting pass
//!
//! # Example
//!
//! ```
//! use telefone_foundation::phone::{PhoneClass, PhoneFormatter};
//!
//! let formatter = PhoneFormatter::new();
//! let result = formatter.format("912345");
//! assert_eq!(result.text, "91234-5");
//! assert_eq!(result.class, PhoneClass::MobilePhone);
//! ```

mod classification;
mod formatter;

pub use classification::{strip_non_digits, PhoneClass};
pub use formatter::{FormattedPhone, PhoneFormatter};

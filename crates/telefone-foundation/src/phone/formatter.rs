//! Stateful live-formatting engine for telephone input.
//!
//! [`PhoneFormatter`] turns the raw text of an input field into display text
//! with the separator placed for the detected [`PhoneClass`], remembers the
//! classification across calls, and notifies subscribed listeners whenever
//! it changes. It performs no I/O and owns no widget state; the input layer
//! calls [`format`](PhoneFormatter::format) once per logical edit and writes
//! the result back into the field.

use super::{strip_non_digits, PhoneClass};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Result of one formatting pass.
///
/// `text` contains only digits and at most one separator; digit order is
/// always the order they appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattedPhone {
    /// Display text to write back into the field.
    pub text: String,
    /// Classification derived from the leading digit.
    pub class: PhoneClass,
    /// True when this pass changed the stored classification.
    pub class_changed: bool,
}

type ClassListener = Rc<dyn Fn(PhoneClass)>;

/// Inner state for PhoneFormatter.
struct FormatterInner {
    /// Classification stored by the last formatting pass.
    class: PhoneClass,
    /// Listeners in subscription order, each with its stable id.
    listeners: SmallVec<[(usize, ClassListener); 2]>,
    /// Next id handed out by `add_listener`.
    next_listener_id: usize,
    /// Flag to prevent re-entrant formatting from a listener.
    is_formatting: bool,
}

/// RAII guard for the is_formatting flag - ensures panic safety.
struct FormatGuard<'a> {
    inner: &'a RefCell<FormatterInner>,
}

impl<'a> FormatGuard<'a> {
    fn new(inner: &'a RefCell<FormatterInner>) -> Result<Self, ()> {
        if inner.borrow().is_formatting {
            return Err(()); // Already formatting
        }
        inner.borrow_mut().is_formatting = true;
        Ok(Self { inner })
    }
}

impl Drop for FormatGuard<'_> {
    fn drop(&mut self) {
        self.inner.borrow_mut().is_formatting = false;
    }
}

/// Stateful formatter for Brazilian telephone input.
///
/// The formatter is total over its input: any finite text value has a
/// well-defined result. Non-digit characters are stripped, empty input maps
/// to an empty display with [`PhoneClass::Undefined`], and input beyond the
/// class digit cap is passed through after the separator unmodified
/// (enforcing the cap is the input layer's job, see
/// [`max_digits`](Self::max_digits)).
///
/// # Example
///
/// ```
/// use telefone_foundation::phone::{PhoneClass, PhoneFormatter};
///
/// let formatter = PhoneFormatter::new();
///
/// let first = formatter.format("9");
/// assert_eq!(first.class, PhoneClass::MobilePhone);
/// assert!(first.class_changed);
///
/// let more = formatter.format("912345");
/// assert_eq!(more.text, "91234-5");
/// assert!(!more.class_changed);
/// ```
///
/// # Thread Safety
///
/// `PhoneFormatter` uses `Rc<RefCell<...>>` internally and is not
/// thread-safe. It should only be used from the thread that owns the input
/// field.
#[derive(Clone)]
pub struct PhoneFormatter {
    inner: Rc<RefCell<FormatterInner>>,
}

impl fmt::Debug for PhoneFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("PhoneFormatter")
            .field("class", &inner.class)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl PhoneFormatter {
    /// Creates a formatter with no recognized classification.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(FormatterInner {
                class: PhoneClass::Undefined,
                listeners: SmallVec::new(),
                next_listener_id: 0,
                is_formatting: false,
            })),
        }
    }

    /// Returns the classification stored by the last formatting pass.
    ///
    /// During listener dispatch this is already the new classification, so a
    /// listener may re-query it safely.
    pub fn class(&self) -> PhoneClass {
        self.inner.borrow().class
    }

    /// Digit cap the input field should enforce for the current
    /// classification, or `None` while it is undefined.
    pub fn max_digits(&self) -> Option<usize> {
        self.class().max_digits()
    }

    /// Adds a listener invoked with the new classification each time a
    /// formatting pass changes it.
    ///
    /// Listeners fire in subscription order; adding the same closure twice
    /// creates two entries. Returns the listener id for removal.
    pub fn add_listener(&self, listener: impl Fn(PhoneClass) + 'static) -> usize {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Removes a previously added listener.
    ///
    /// Returns false (and changes nothing) if the id was never added or was
    /// already removed.
    pub fn remove_listener(&self, id: usize) -> bool {
        let mut inner = self.inner.borrow_mut();
        match inner.listeners.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(index) => {
                inner.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    /// Formats raw field text into display text.
    ///
    /// Strips non-digits, reclassifies from the leading digit, and inserts
    /// the separator once the digit count reaches the class prefix length.
    /// The stored classification is updated before listeners are notified.
    ///
    /// # Panics
    ///
    /// Panics when called re-entrantly from a classification listener.
    pub fn format(&self, raw: &str) -> FormattedPhone {
        let _guard = FormatGuard::new(&self.inner)
            .expect("PhoneFormatter does not support re-entrant formatting");

        let digits = strip_non_digits(raw);
        let class = PhoneClass::classify(&digits);

        let class_changed = {
            let mut inner = self.inner.borrow_mut();
            let changed = class != inner.class;
            if changed {
                log::trace!("phone class {:?} -> {:?}", inner.class, class);
                inner.class = class;
            }
            changed
        };

        // `digits` is ASCII by construction, so byte slicing is safe.
        let text = match class.prefix_len() {
            Some(prefix) if digits.len() >= prefix => {
                format!("{}-{}", &digits[..prefix], &digits[prefix..])
            }
            _ => digits,
        };

        if class_changed {
            self.notify(class);
        }

        FormattedPhone {
            text,
            class,
            class_changed,
        }
    }

    /// Collapses the separator when a backspace lands on it.
    ///
    /// Deleting the separator character leaves the digit-only text
    /// unchanged, so a plain delete followed by a reformat would put the
    /// separator right back and the keystroke would appear to do nothing.
    /// When `raw` carries a separator and its digit count sits exactly at
    /// the stored class's prefix length, this returns the bare prefix
    /// digits (classification unchanged, no change event). Any other digit
    /// count, an undefined classification, or already-bare input returns
    /// `None` and the caller keeps its default delete behavior.
    pub fn backspace_across_separator(&self, raw: &str) -> Option<FormattedPhone> {
        let digits = strip_non_digits(raw);
        let class = self.class();
        let prefix = class.prefix_len()?;
        if digits.len() != prefix || raw == digits {
            return None;
        }
        Some(FormattedPhone {
            text: digits,
            class,
            class_changed: false,
        })
    }

    /// Notifies listeners in subscription order.
    ///
    /// Each entry is looked up and cloned per iteration, so a listener that
    /// adds or removes listeners mid-dispatch cannot invalidate the walk.
    fn notify(&self, class: PhoneClass) {
        let count = self.inner.borrow().listeners.len();
        for i in 0..count {
            let listener = {
                let inner = self.inner.borrow();
                inner.listeners.get(i).map(|(_, l)| Rc::clone(l))
            };
            if let Some(listener) = listener {
                listener(class);
            }
        }
    }
}

impl Default for PhoneFormatter {
    fn default() -> Self {
        Self::new()
    }
}

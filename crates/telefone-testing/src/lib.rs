//! Testing utilities and typing robot for Telefone

pub mod robot;

// Re-export testing utilities
pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use telefone_foundation::phone::PhoneClass;
}

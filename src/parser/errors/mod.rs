//! Parser error handling module
//!
//! Provides the [`SyntaxError`] record that the recipe parser produces for
//! each syntax error it observes. Collecting and rendering the records is
//! left to the caller.

mod error;

pub use error::SyntaxError;

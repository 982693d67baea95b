//! Parser-facing types for the recipe language.
//!
//! The recipe parser itself lives with the caller; this module holds the
//! records it produces.

pub mod errors;

pub use errors::SyntaxError;

//! # recipe-syntax
//!
//! Syntax error records for a line-oriented data-wrangling recipe language.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → SyntaxError records produced while parsing recipes
//!   ↓
//! base      → Primitives (TextSize, LineCol, LineIndex)
//! ```

/// Foundation types: TextSize, line/column conversion
pub mod base;

/// Parser: syntax error records
pub mod parser;

// Re-export commonly needed items
pub use base::{LineCol, LineIndex, TextSize};
pub use parser::SyntaxError;

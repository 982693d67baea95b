//! Foundation types for recipe source handling.
//!
//! - [`TextSize`] - Byte offsets into a recipe
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//!
//! This module has NO dependencies on other crate modules.

mod line_index;

pub use line_index::{LineCol, LineIndex};

// Re-export text-size types for convenience
pub use text_size::{self, TextSize};

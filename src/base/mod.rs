//! Foundation types for the diagram toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//!
//! This module has NO dependencies on other ucdl modules.

mod position;

pub use position::{LineCol, LineIndex};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};

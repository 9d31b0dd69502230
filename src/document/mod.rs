//! Document state management and text utilities.
//!
//! This module provides:
//! - `LineIndex` for byte offset <-> LSP position conversion
//! - Cursor scanning helpers (`word_at`, `word_prefix`, `call_context`)
//! - `DocumentState` and `DocumentStore` for document lifecycle management

mod scan;
mod state;
mod text;

pub use scan::{call_context, word_at, word_prefix, word_range, CallContext};
pub use state::{scan_includes, DocumentState, DocumentStore};
pub use text::LineIndex;

//! LSP protocol feature implementations.
//!
//! This module provides implementations for LSP features:
//! - Hover documentation for built-in functions, macros, keywords and UDFs
//! - Completion driven by the signature catalog
//! - Signature help with the active parameter highlighted

mod completion;
mod hover;
mod signature_help;

pub use completion::completion_at_position;
pub use hover::hover_at_position;
pub use signature_help::signature_help_at_position;

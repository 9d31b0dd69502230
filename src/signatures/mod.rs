//! AutoIt signature knowledge base.
//!
//! This module provides:
//! - `SignatureEntry`, `ParamDoc` and `SignatureTable` record types
//! - The static tables for macros, core functions, keywords and UDF libraries
//! - Formatters turning entries into hover and completion payloads
//! - The `Catalog`, a case-insensitive index over all tables

mod catalog;
mod entry;
mod format;
mod tables;

pub use catalog::{catalog, Catalog, CompletionFilter, Symbol};
pub use entry::{Category, ParamDoc, SignatureEntry, SignatureTable};
pub use format::{
    completion_payload, completion_table, hover_table, hover_table_with_note, hover_text,
    CompletionPayload,
};
pub use tables::{table, TABLES};

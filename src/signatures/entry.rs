//! Signature record types for AutoIt symbols.
//!
//! A `SignatureEntry` is documentation-only: it carries what an editor shows on
//! hover or in the completion list. Nothing here is used to validate calls.

use std::collections::HashSet;
use std::fmt;

use tower_lsp::lsp_types::CompletionItemKind;

/// One documented parameter of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDoc {
    /// Parameter as written in the call syntax (e.g. "$sSound")
    pub label: &'static str,
    /// What the parameter means
    pub documentation: &'static str,
}

/// Definition of an AutoIt symbol with documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureEntry {
    /// Symbol name, unique within its table (e.g. "MsgBox", "@ScriptDir")
    pub name: &'static str,
    /// Description of what the symbol does
    pub documentation: &'static str,
    /// Call syntax shown to the user (e.g. "MsgBox ( flag, "title", "text" )")
    pub label: &'static str,
    /// Ordered parameter docs, empty for macros and keywords
    pub params: &'static [ParamDoc],
}

/// Grouping used for hover headings and completion icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Function,
    Macro,
    Keyword,
}

impl Category {
    pub fn completion_kind(self) -> CompletionItemKind {
        match self {
            Category::Function => CompletionItemKind::FUNCTION,
            Category::Macro => CompletionItemKind::CONSTANT,
            Category::Keyword => CompletionItemKind::KEYWORD,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Function => "Function",
            Category::Macro => "Macro",
            Category::Keyword => "Keyword",
        };
        f.write_str(name)
    }
}

/// A named group of signature entries, usually one AutoIt include file.
#[derive(Debug, Clone, Copy)]
pub struct SignatureTable {
    /// Table name used in settings (e.g. "array")
    pub name: &'static str,
    pub category: Category,
    /// Include file that provides the symbols, `None` for built-ins
    pub include: Option<&'static str>,
    pub entries: &'static [SignatureEntry],
}

impl SignatureTable {
    /// Note appended to hover and completion text for UDF tables.
    pub fn include_note(&self) -> Option<String> {
        self.include
            .map(|file| format!("Requires: `#include <{}>`", file))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names that appear more than once (case-insensitive).
    ///
    /// Keyed lookups keep only one of them, so any result here is a content bug.
    pub fn duplicate_names(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|e| !seen.insert(e.name.to_ascii_lowercase()))
            .map(|e| e.name)
            .collect()
    }
}

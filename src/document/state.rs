//! Document state management for the AutoIt LSP.

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use regex::Regex;
use tower_lsp::lsp_types::Url;

use super::text::LineIndex;

/// `#include <File.au3>` and `#include "File.au3"` directives.
static INCLUDE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?im)^[ \t]*#include[ \t]*[<"']([^>"'\r\n]+)[>"']"#).unwrap()
});

/// State for a single open document.
#[derive(Debug, Clone)]
pub struct DocumentState {
    /// Pre-computed line index, owning the source text.
    pub line_index: LineIndex,
    /// Files named by `#include` directives, in source order.
    pub includes: Vec<String>,
    /// Document version from the client.
    pub version: i32,
}

impl DocumentState {
    pub fn new(source: String, version: i32) -> Self {
        let includes = scan_includes(&source);
        Self {
            line_index: LineIndex::new(source),
            includes,
            version,
        }
    }

    pub fn source(&self) -> &str {
        self.line_index.source()
    }
}

/// Collect the file names of all `#include` directives.
pub fn scan_includes(source: &str) -> Vec<String> {
    INCLUDE_PATTERN
        .captures_iter(source)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Thread-safe storage for open documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, Arc<DocumentState>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Open or replace a document with the given source text.
    pub fn open(&self, uri: Url, source: String, version: i32) -> Arc<DocumentState> {
        let state = Arc::new(DocumentState::new(source, version));
        tracing::debug!(%uri, version, includes = ?state.includes, "document updated");
        self.documents.insert(uri, Arc::clone(&state));
        state
    }

    pub fn close(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    pub fn get(&self, uri: &Url) -> Option<Arc<DocumentState>> {
        self.documents.get(uri).map(|r| Arc::clone(&r))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

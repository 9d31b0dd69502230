//! Process-wide index over every signature table.
//!
//! AutoIt identifiers are case-insensitive, so the index is keyed by the
//! lowercased symbol name. Hover and completion payloads are formatted once
//! when the catalog is built.

use std::collections::HashMap;
use std::sync::LazyLock;

use tower_lsp::lsp_types::CompletionItem;

use super::entry::{Category, SignatureEntry, SignatureTable};
use super::format::{completion_table, hover_table_with_note, CompletionPayload};
use super::tables::TABLES;

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(TABLES));

/// The catalog built from all shipped tables.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// A symbol resolved through the catalog.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub table: &'static SignatureTable,
    pub entry: &'static SignatureEntry,
    /// Hover markdown including the table's include note
    pub hover: String,
}

/// Which completion items the caller wants.
#[derive(Debug, Clone, Copy)]
pub struct CompletionFilter<'a> {
    /// Case-insensitive name prefix; empty matches everything
    pub prefix: &'a str,
    pub categories: &'a [Category],
    /// Include files referenced by the current document
    pub includes: &'a [String],
    /// Offer functions from UDF tables
    pub udfs: bool,
    /// Table names excluded by configuration
    pub disabled_tables: &'a [String],
}

#[derive(Debug)]
pub struct Catalog {
    tables: &'static [SignatureTable],
    symbols: HashMap<String, Symbol>,
    /// Completion payloads per table, aligned with `tables`
    completions: Vec<Vec<CompletionPayload>>,
}

impl Catalog {
    /// Index the given tables. On a name clash the earlier table wins.
    pub fn new(tables: &'static [SignatureTable]) -> Self {
        let mut symbols: HashMap<String, Symbol> = HashMap::new();
        let mut completions = Vec::with_capacity(tables.len());

        for table in tables {
            let mut hovers = hover_table_with_note(table);
            for entry in table.entries {
                let key = entry.name.to_ascii_lowercase();
                if let Some(existing) = symbols.get(&key) {
                    tracing::warn!(
                        symbol = entry.name,
                        table = table.name,
                        kept = existing.table.name,
                        "duplicate symbol ignored"
                    );
                    continue;
                }
                let hover = hovers.remove(entry.name).unwrap_or_default();
                symbols.insert(key, Symbol { table, entry, hover });
            }

            let note = table.include_note();
            completions.push(completion_table(
                table,
                table.category.completion_kind(),
                note.as_deref(),
            ));
        }

        tracing::debug!(
            tables = tables.len(),
            symbols = symbols.len(),
            "signature catalog built"
        );

        Self {
            tables,
            symbols,
            completions,
        }
    }

    /// Registered tables in order.
    pub fn tables(&self) -> &'static [SignatureTable] {
        self.tables
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Case-insensitive lookup of a symbol.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(&name.to_ascii_lowercase())
    }

    /// Precomputed hover markdown for a symbol.
    pub fn hover(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|s| s.hover.as_str())
    }

    /// Completion items matching the filter.
    ///
    /// Built-in symbols and functions from included UDFs sort before UDFs the
    /// document has not included yet.
    pub fn completions(&self, filter: &CompletionFilter<'_>) -> Vec<CompletionItem> {
        let prefix = filter.prefix.to_ascii_lowercase();
        let mut items = Vec::new();

        for (table, payloads) in self.tables.iter().zip(&self.completions) {
            if !filter.categories.contains(&table.category)
                || filter.disabled_tables.iter().any(|d| d == table.name)
            {
                continue;
            }
            let rank = match table.include {
                None => 0,
                Some(_) if !filter.udfs => continue,
                Some(file) if is_included(file, filter.includes) => 0,
                Some(_) => 1,
            };

            for payload in payloads {
                if !payload.name.to_ascii_lowercase().starts_with(&prefix) {
                    continue;
                }
                // Shadowed duplicates are not offered twice.
                let owner = self.lookup(payload.name).map(|s| s.table.name);
                if owner != Some(table.name) {
                    continue;
                }
                let mut item: CompletionItem = payload.clone().into();
                item.sort_text = Some(format!(
                    "{}_{}",
                    rank,
                    payload.name.to_ascii_lowercase()
                ));
                items.push(item);
            }
        }

        items
    }
}

/// Whether an include file is referenced, comparing file names case-insensitively.
fn is_included(file: &str, includes: &[String]) -> bool {
    includes.iter().any(|inc| {
        let name = inc.rsplit(['\\', '/']).next().unwrap_or(inc.as_str());
        name.eq_ignore_ascii_case(file)
    })
}

//! Formatting of signature entries into hover and completion payloads.
//!
//! Both formatters are pure: the same table always produces the same output.

use std::collections::HashMap;

use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, Documentation, MarkupContent, MarkupKind,
};

use super::entry::{Category, ParamDoc, SignatureEntry, SignatureTable};

/// Completion data for one entry, before conversion into an LSP item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionPayload {
    /// Table key, unchanged
    pub name: &'static str,
    pub kind: CompletionItemKind,
    /// The entry's call syntax
    pub signature: &'static str,
    /// Label, documentation and optional suffix as markdown
    pub detail: String,
}

impl From<CompletionPayload> for CompletionItem {
    fn from(payload: CompletionPayload) -> Self {
        CompletionItem {
            label: payload.name.to_string(),
            kind: Some(payload.kind),
            detail: Some(payload.signature.to_string()),
            documentation: Some(Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: payload.detail,
            })),
            ..Default::default()
        }
    }
}

/// Render one parameter as a markdown bullet.
fn format_param(param: &ParamDoc) -> String {
    format!("- `{}` — {}", param.label, param.documentation)
}

/// Format a single entry as hover markdown.
pub fn hover_text(entry: &SignatureEntry, category: Category) -> String {
    let mut doc = format!(
        "*{}*\n\n```autoit\n{}\n```\n\n{}",
        category, entry.label, entry.documentation
    );
    if !entry.params.is_empty() {
        doc.push_str("\n\n**Parameters**\n");
        for param in entry.params {
            doc.push('\n');
            doc.push_str(&format_param(param));
        }
    }
    doc
}

/// Format every entry of a table as hover markdown, keyed by symbol name.
pub fn hover_table(table: &SignatureTable, category: Category) -> HashMap<&'static str, String> {
    table
        .entries
        .iter()
        .map(|entry| (entry.name, hover_text(entry, category)))
        .collect()
}

/// Like `hover_table`, using the table's own category and appending its include note.
pub fn hover_table_with_note(table: &SignatureTable) -> HashMap<&'static str, String> {
    let note = table.include_note();
    table
        .entries
        .iter()
        .map(|entry| {
            let mut text = hover_text(entry, table.category);
            if let Some(note) = &note {
                text.push_str("\n\n");
                text.push_str(note);
            }
            (entry.name, text)
        })
        .collect()
}

/// Build the completion payload for one entry.
pub fn completion_payload(
    entry: &SignatureEntry,
    kind: CompletionItemKind,
    suffix: Option<&str>,
) -> CompletionPayload {
    let mut detail = format!("{}\n\n{}", entry.label, entry.documentation);
    if let Some(suffix) = suffix {
        detail.push_str("\n\n");
        detail.push_str(suffix);
    }
    CompletionPayload {
        name: entry.name,
        kind,
        signature: entry.label,
        detail,
    }
}

/// Build completion payloads for every entry of a table, in table order.
pub fn completion_table(
    table: &SignatureTable,
    kind: CompletionItemKind,
    suffix: Option<&str>,
) -> Vec<CompletionPayload> {
    table
        .entries
        .iter()
        .map(|entry| completion_payload(entry, kind, suffix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAY_SOUND: SignatureEntry = SignatureEntry {
        name: "_WinAPI_PlaySound",
        documentation: "Plays a sound",
        label: "_WinAPI_PlaySound ( $sSound )",
        params: &[ParamDoc {
            label: "$sSound",
            documentation: "The sound to play",
        }],
    };

    const TWO: &[SignatureEntry] = &[
        SignatureEntry {
            name: "Sleep",
            documentation: "Pause script execution.",
            label: "Sleep ( delay )",
            params: &[ParamDoc {
                label: "delay",
                documentation: "Amount of time to pause (in milliseconds).",
            }],
        },
        SignatureEntry {
            name: "@CRLF",
            documentation: "Carriage return and line feed, Chr(13) & Chr(10).",
            label: "@CRLF",
            params: &[],
        },
    ];

    fn table(entries: &'static [SignatureEntry], include: Option<&'static str>) -> SignatureTable {
        SignatureTable {
            name: "test",
            category: Category::Function,
            include,
            entries,
        }
    }

    #[test]
    fn hover_contains_label_docs_and_param() {
        let text = hover_text(&PLAY_SOUND, Category::Function);
        assert!(text.contains("_WinAPI_PlaySound ( $sSound )"));
        assert!(text.contains("Plays a sound"));
        assert!(text.contains("- `$sSound` — The sound to play"));
        assert!(text.starts_with("*Function*"));
    }

    #[test]
    fn hover_without_params_has_no_parameter_section() {
        let text = hover_text(&TWO[1], Category::Macro);
        assert!(!text.contains("**Parameters**"));
        assert!(text.ends_with("Chr(13) & Chr(10)."));
    }

    #[test]
    fn hover_lists_params_in_order() {
        const ORDERED: SignatureEntry = SignatureEntry {
            name: "MsgBox",
            documentation: "Displays a simple message box.",
            label: "MsgBox ( flag, \"title\", \"text\" )",
            params: &[
                ParamDoc { label: "flag", documentation: "first" },
                ParamDoc { label: "title", documentation: "second" },
                ParamDoc { label: "text", documentation: "third" },
            ],
        };
        let text = hover_text(&ORDERED, Category::Function);
        let bullets: Vec<&str> = text.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(
            bullets,
            vec!["- `flag` — first", "- `title` — second", "- `text` — third"]
        );
    }

    #[test]
    fn hover_table_is_keyed_by_name_and_idempotent() {
        let t = table(TWO, None);
        let first = hover_table(&t, Category::Function);
        let second = hover_table(&t, Category::Function);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert!(first["Sleep"].contains("Sleep ( delay )"));
    }

    #[test]
    fn hover_table_with_note_appends_include() {
        let t = table(TWO, Some("Test.au3"));
        let hovers = hover_table_with_note(&t);
        assert!(hovers["Sleep"].ends_with("Requires: `#include <Test.au3>`"));
    }

    #[test]
    fn completion_items_keep_keys_and_kind() {
        let t = table(TWO, None);
        let items = completion_table(&t, CompletionItemKind::FUNCTION, None);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Sleep");
        assert_eq!(items[1].name, "@CRLF");
        assert!(items.iter().all(|i| i.kind == CompletionItemKind::FUNCTION));
    }

    #[test]
    fn completion_detail_includes_suffix() {
        let payload = completion_payload(
            &PLAY_SOUND,
            CompletionItemKind::FUNCTION,
            Some("Requires: `#include <WinAPISys.au3>`"),
        );
        assert_eq!(
            payload.detail,
            "_WinAPI_PlaySound ( $sSound )\n\nPlays a sound\n\nRequires: `#include <WinAPISys.au3>`"
        );

        let item: CompletionItem = payload.into();
        assert_eq!(item.label, "_WinAPI_PlaySound");
        assert_eq!(item.detail.as_deref(), Some("_WinAPI_PlaySound ( $sSound )"));
    }

    #[test]
    fn completion_is_idempotent() {
        let t = table(TWO, Some("Test.au3"));
        let note = t.include_note();
        assert_eq!(
            completion_table(&t, CompletionItemKind::FUNCTION, note.as_deref()),
            completion_table(&t, CompletionItemKind::FUNCTION, note.as_deref()),
        );
    }
}

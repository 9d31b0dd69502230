//! Completion support for AutoIt sources.
//!
//! The partial symbol before the cursor selects which tables are offered:
//! `@` completes macros, `#` completes directives and anything else completes
//! functions and keywords.

use tower_lsp::lsp_types::*;

use crate::document::{word_prefix, DocumentState};
use crate::settings::CompletionSettings;
use crate::signatures::{catalog, Category, CompletionFilter};

/// What kind of completion context we detected.
#[derive(Debug, PartialEq, Eq)]
enum CompletionContext<'a> {
    /// After `@`.
    Macro { prefix: &'a str },
    /// After `#`.
    Directive { prefix: &'a str },
    /// After `$`; variables are not in the catalog.
    Variable,
    /// A bare or partial identifier (may be empty).
    Identifier { prefix: &'a str },
}

fn detect_context(prefix: &str) -> CompletionContext<'_> {
    match prefix.as_bytes().first() {
        Some(b'@') => CompletionContext::Macro { prefix },
        Some(b'#') => CompletionContext::Directive { prefix },
        Some(b'$') => CompletionContext::Variable,
        _ => CompletionContext::Identifier { prefix },
    }
}

/// Generate completions at an LSP position.
pub fn completion_at_position(
    state: &DocumentState,
    position: Position,
    settings: &CompletionSettings,
) -> Option<CompletionResponse> {
    let offset = state.line_index.position_to_offset(position)?;
    let typed = word_prefix(state.source(), offset);

    let mut categories = Vec::new();
    let prefix = match detect_context(typed) {
        CompletionContext::Variable => return None,
        CompletionContext::Macro { prefix } => {
            if settings.macros {
                categories.push(Category::Macro);
            }
            prefix
        }
        CompletionContext::Directive { prefix } => {
            if settings.keywords {
                categories.push(Category::Keyword);
            }
            prefix
        }
        CompletionContext::Identifier { prefix } => {
            categories.push(Category::Function);
            if settings.keywords {
                categories.push(Category::Keyword);
            }
            if prefix.is_empty() && settings.macros {
                categories.push(Category::Macro);
            }
            prefix
        }
    };
    if categories.is_empty() {
        return None;
    }

    let filter = CompletionFilter {
        prefix,
        categories: &categories,
        includes: &state.includes,
        udfs: settings.udfs,
        disabled_tables: &settings.disabled_tables,
    };
    let mut items = catalog().completions(&filter);

    // Replace the typed prefix explicitly; clients disagree on whether `@`
    // and `#` belong to a word.
    let replace = state.line_index.range(offset - prefix.len()..offset);
    for item in &mut items {
        item.text_edit = Some(CompletionTextEdit::Edit(TextEdit {
            range: replace,
            new_text: item.label.clone(),
        }));
    }

    tracing::debug!(prefix, count = items.len(), "completion");
    Some(CompletionResponse::Array(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_completions_with(
        source: &str,
        position: Position,
        settings: &CompletionSettings,
    ) -> Vec<CompletionItem> {
        let state = DocumentState::new(source.to_string(), 0);
        match completion_at_position(&state, position, settings) {
            Some(CompletionResponse::Array(items)) => items,
            Some(_) => panic!("Expected array response"),
            None => Vec::new(),
        }
    }

    fn get_completions(source: &str, position: Position) -> Vec<CompletionItem> {
        get_completions_with(source, position, &CompletionSettings::default())
    }

    fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn detect_context_kinds() {
        assert_eq!(
            detect_context("@Scr"),
            CompletionContext::Macro { prefix: "@Scr" }
        );
        assert_eq!(
            detect_context("#inc"),
            CompletionContext::Directive { prefix: "#inc" }
        );
        assert_eq!(detect_context("$x"), CompletionContext::Variable);
        assert_eq!(
            detect_context(""),
            CompletionContext::Identifier { prefix: "" }
        );
    }

    #[test]
    fn identifier_prefix_completes_functions_and_keywords() {
        let items = get_completions("Str", Position::new(0, 3));
        let names = labels(&items);
        assert!(names.contains(&"StringLen"));
        assert!(names.contains(&"StringSplit"));
        assert!(names.contains(&"String"));
        assert!(!names.contains(&"Sleep"));

        let items = get_completions("Whi", Position::new(0, 3));
        assert!(labels(&items).contains(&"While"));
    }

    #[test]
    fn macro_prefix_completes_only_macros() {
        let items = get_completions("$d = @Desk", Position::new(0, 10));
        let names = labels(&items);
        assert_eq!(names.len(), 3, "{:?}", names);
        assert!(names.contains(&"@DesktopDir"));
        assert!(names.contains(&"@DesktopHeight"));
        assert!(names.contains(&"@DesktopWidth"));
        assert!(items
            .iter()
            .all(|i| i.kind == Some(CompletionItemKind::CONSTANT)));
    }

    #[test]
    fn directive_prefix_completes_directives() {
        let items = get_completions("#incl", Position::new(0, 5));
        let names = labels(&items);
        assert!(names.contains(&"#include"));
        assert!(names.contains(&"#include-once"));
        assert!(!names.contains(&"If"));
    }

    #[test]
    fn variables_get_no_completions() {
        assert!(get_completions("$myVa", Position::new(0, 5)).is_empty());
    }

    #[test]
    fn text_edit_replaces_typed_prefix() {
        let items = get_completions("x = @CR", Position::new(0, 7));
        let crlf = items.iter().find(|i| i.label == "@CRLF").unwrap();
        match crlf.text_edit.as_ref().unwrap() {
            CompletionTextEdit::Edit(edit) => {
                assert_eq!(edit.range.start, Position::new(0, 4));
                assert_eq!(edit.range.end, Position::new(0, 7));
                assert_eq!(edit.new_text, "@CRLF");
            }
            _ => panic!("Expected plain text edit"),
        }
    }

    #[test]
    fn included_udfs_rank_first() {
        let source = "#include <String.au3>\n_";
        let items = get_completions(source, Position::new(1, 1));
        let between = items.iter().find(|i| i.label == "_StringBetween").unwrap();
        let sort = items.iter().find(|i| i.label == "_ArraySort").unwrap();
        assert!(between.sort_text < sort.sort_text);
    }

    #[test]
    fn udf_items_carry_include_note() {
        let items = get_completions("_ArrayDis", Position::new(0, 9));
        assert_eq!(labels(&items), vec!["_ArrayDisplay"]);
        match items[0].documentation.as_ref().unwrap() {
            Documentation::MarkupContent(m) => {
                assert!(m.value.ends_with("Requires: `#include <Array.au3>`"))
            }
            _ => panic!("Expected markup documentation"),
        }
    }

    #[test]
    fn settings_limit_completions() {
        let settings = CompletionSettings {
            macros: false,
            keywords: false,
            udfs: false,
            disabled_tables: Vec::new(),
        };
        assert!(get_completions_with("@", Position::new(0, 1), &settings).is_empty());
        assert!(get_completions_with("#", Position::new(0, 1), &settings).is_empty());

        let items = get_completions_with("", Position::new(0, 0), &settings);
        assert!(!items.is_empty());
        assert!(items
            .iter()
            .all(|i| i.kind == Some(CompletionItemKind::FUNCTION)));
        assert!(items.iter().all(|i| !i.label.starts_with('_')));
    }

    #[test]
    fn empty_prefix_offers_everything_enabled() {
        let items = get_completions("", Position::new(0, 0));
        let names = labels(&items);
        assert!(names.contains(&"MsgBox"));
        assert!(names.contains(&"@CRLF"));
        assert!(names.contains(&"Func"));
        assert!(names.contains(&"_WinAPI_PlaySound"));
    }
}

//! Hover information for AutoIt symbols.

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};

use crate::document::{word_at, DocumentState};
use crate::settings::HoverSettings;
use crate::signatures::{catalog, hover_text};

/// Generate hover information at an LSP position.
///
/// Only symbols known to the signature catalog produce a hover; variables and
/// user functions are left to the editor.
pub fn hover_at_position(
    state: &DocumentState,
    position: Position,
    settings: &HoverSettings,
) -> Option<Hover> {
    let offset = state.line_index.position_to_offset(position)?;
    let (word, range) = word_at(state.source(), offset)?;
    let symbol = catalog().lookup(word)?;

    let value = if settings.include_notes {
        symbol.hover.clone()
    } else {
        hover_text(symbol.entry, symbol.table.category)
    };

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value,
        }),
        range: Some(state.line_index.range(range)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hover(source: &str, position: Position) -> Option<String> {
        hover_with(source, position, &HoverSettings::default())
    }

    fn hover_with(source: &str, position: Position, settings: &HoverSettings) -> Option<String> {
        let state = DocumentState::new(source.to_string(), 0);
        hover_at_position(&state, position, settings).map(|h| match h.contents {
            HoverContents::Markup(m) => m.value,
            _ => panic!("Expected markup content"),
        })
    }

    #[test]
    fn hover_for_builtin_function() {
        let value = hover("MsgBox(0, 'a', 'b')", Position::new(0, 2)).unwrap();
        assert!(value.starts_with("*Function*"));
        assert!(value.contains("Displays a simple message box"));
        assert!(value.contains("- `flag` — "));
    }

    #[test]
    fn hover_is_case_insensitive() {
        let value = hover("msgbox(0, 'a', 'b')", Position::new(0, 0)).unwrap();
        assert!(value.contains("MsgBox ( flag"));
    }

    #[test]
    fn hover_for_macro() {
        let value = hover("ConsoleWrite(@ScriptDir & @CRLF)", Position::new(0, 15)).unwrap();
        assert!(value.starts_with("*Macro*"));
        assert!(value.contains("Directory containing the running script"));
    }

    #[test]
    fn hover_range_covers_symbol() {
        let state = DocumentState::new("Local $a\nSleep(100)".to_string(), 0);
        let hover = hover_at_position(&state, Position::new(1, 3), &HoverSettings::default())
            .unwrap();
        let range = hover.range.unwrap();
        assert_eq!(range.start, Position::new(1, 0));
        assert_eq!(range.end, Position::new(1, 5));
    }

    #[test]
    fn hover_udf_include_note_is_configurable() {
        let source = "_ArraySort($a)";
        let with_note = hover(source, Position::new(0, 3)).unwrap();
        assert!(with_note.ends_with("Requires: `#include <Array.au3>`"));

        let settings = HoverSettings {
            include_notes: false,
        };
        let without = hover_with(source, Position::new(0, 3), &settings).unwrap();
        assert!(!without.contains("Requires:"));
    }

    #[test]
    fn no_hover_for_unknown_symbols() {
        assert!(hover("MyFunc()", Position::new(0, 2)).is_none());
        assert!(hover("Local $var", Position::new(0, 8)).is_none());
        assert!(hover("   ", Position::new(0, 1)).is_none());
        assert!(hover("Exit", Position::new(4, 0)).is_none());
    }
}

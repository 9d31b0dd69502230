//! Lexical scanning around the cursor.
//!
//! These helpers work on raw source text and byte offsets; they do not parse
//! AutoIt. Strings (`"..."` and `'...'`, with doubled quotes as escapes) and
//! `;` comments are skipped when looking for the enclosing call.

use std::ops::Range;

/// Characters that may prefix a symbol: macros, variables and directives.
const SIGILS: &[u8] = b"@$#";

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Directive names may contain dashes (`#include-once`).
fn is_directive_byte(b: u8) -> bool {
    is_ident_byte(b) || b == b'-'
}

/// Start of the run of bytes matching `pred` that ends at `from`.
fn run_start(bytes: &[u8], from: usize, pred: fn(u8) -> bool) -> usize {
    let mut start = from;
    while start > 0 && pred(bytes[start - 1]) {
        start -= 1;
    }
    start
}

/// Byte range of the symbol touching `offset`, including a leading sigil.
pub fn word_range(source: &str, offset: usize) -> Option<Range<usize>> {
    let bytes = source.as_bytes();
    let offset = offset.min(bytes.len());

    // Cursor placed directly on the sigil.
    let anchor = if run_start(bytes, offset, is_ident_byte) == offset
        && bytes.get(offset).is_some_and(|b| SIGILS.contains(b))
    {
        offset + 1
    } else {
        offset
    };

    let directive = run_start(bytes, anchor, is_directive_byte);
    let (start, sigil) = if directive > 0 && bytes[directive - 1] == b'#' {
        (directive - 1, Some(b'#'))
    } else {
        let start = run_start(bytes, anchor, is_ident_byte);
        match start.checked_sub(1).map(|i| bytes[i]) {
            Some(b) if SIGILS.contains(&b) => (start - 1, Some(b)),
            _ => (start, None),
        }
    };

    let continues: fn(u8) -> bool = if sigil == Some(b'#') {
        is_directive_byte
    } else {
        is_ident_byte
    };
    let body = start + usize::from(sigil.is_some());
    let mut end = body;
    while end < bytes.len() && continues(bytes[end]) {
        end += 1;
    }

    (end > body).then_some(start..end)
}

/// The symbol touching `offset`, if any.
pub fn word_at(source: &str, offset: usize) -> Option<(&str, Range<usize>)> {
    let range = word_range(source, offset)?;
    Some((&source[range.clone()], range))
}

/// The partial symbol ending at `offset`, including a leading sigil.
///
/// Returns an empty string when the cursor does not follow a symbol.
pub fn word_prefix(source: &str, offset: usize) -> &str {
    let bytes = source.as_bytes();
    let offset = offset.min(bytes.len());

    let mut start = run_start(bytes, offset, is_directive_byte);
    if start > 0 && SIGILS.contains(&bytes[start - 1]) {
        start -= 1;
    }
    // Dashes only belong to directives.
    if bytes.get(start) != Some(&b'#') {
        while start < offset && bytes[start] == b'-' {
            start += 1;
        }
        if let Some(dash) = source[start..offset].rfind('-') {
            start += dash + 1;
        }
    }
    &source[start..offset]
}

/// The innermost call whose argument list contains the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext<'a> {
    /// Name of the called function
    pub name: &'a str,
    /// Zero-based index of the argument under the cursor
    pub active_parameter: u32,
}

#[derive(Debug)]
struct Frame {
    open: usize,
    is_paren: bool,
    commas: u32,
}

/// Whether the newline at `newline` ends a line continued with ` _`.
fn is_continued(bytes: &[u8], newline: usize) -> bool {
    let start = bytes[..newline]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    let line = &bytes[start..newline];
    let trimmed = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map(|last| &line[..=last])
        .unwrap_or_default();
    match trimmed {
        [.., ws, b'_'] => ws.is_ascii_whitespace(),
        [b'_'] => true,
        _ => false,
    }
}

/// Find the call around `offset`.
///
/// Brackets are tracked so commas inside `$a[1][2]` or `[1, 2]` are not
/// counted. Open frames are discarded at the end of every line that is not
/// continued with ` _`.
pub fn call_context(source: &str, offset: usize) -> Option<CallContext<'_>> {
    let bytes = source.as_bytes();
    let end = offset.min(bytes.len());
    let mut stack: Vec<Frame> = Vec::new();

    let mut i = 0;
    while i < end {
        match bytes[i] {
            quote @ (b'"' | b'\'') => {
                i += 1;
                while i < end && bytes[i] != b'\n' {
                    if bytes[i] == quote {
                        if bytes.get(i + 1) == Some(&quote) {
                            i += 2;
                            continue;
                        }
                        i += 1;
                        break;
                    }
                    i += 1;
                }
                continue;
            }
            b';' => {
                while i < end && bytes[i] != b'\n' {
                    i += 1;
                }
                continue;
            }
            b'\n' => {
                if !is_continued(bytes, i) {
                    stack.clear();
                }
            }
            open @ (b'(' | b'[') => stack.push(Frame {
                open: i,
                is_paren: open == b'(',
                commas: 0,
            }),
            b')' | b']' => {
                stack.pop();
            }
            b',' => {
                if let Some(top) = stack.last_mut() {
                    top.commas += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    stack.iter().rev().filter(|f| f.is_paren).find_map(|frame| {
        let name = callee_before(source, frame.open)?;
        Some(CallContext {
            name,
            active_parameter: frame.commas,
        })
    })
}

/// Identifier immediately before an opening parenthesis, allowing whitespace.
fn callee_before(source: &str, open: usize) -> Option<&str> {
    let bytes = source.as_bytes();
    let mut end = open;
    while end > 0 && matches!(bytes[end - 1], b' ' | b'\t') {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && is_ident_byte(bytes[start - 1]) {
        start -= 1;
    }
    // `$f(...)` calls a variable, `@x(` is not a call.
    if start > 0 && SIGILS.contains(&bytes[start - 1]) {
        return None;
    }
    (start < end && !bytes[start].is_ascii_digit()).then(|| &source[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_cursor(marked: &str) -> (String, usize) {
        let offset = marked.find('|').expect("cursor marker");
        (marked.replacen('|', "", 1), offset)
    }

    fn word(marked: &str) -> Option<String> {
        let (source, offset) = at_cursor(marked);
        word_at(&source, offset).map(|(w, _)| w.to_string())
    }

    fn call(marked: &str) -> Option<(String, u32)> {
        let (source, offset) = at_cursor(marked);
        call_context(&source, offset).map(|c| (c.name.to_string(), c.active_parameter))
    }

    #[test]
    fn word_at_function_name() {
        assert_eq!(word("Msg|Box(0, 'a', 'b')").as_deref(), Some("MsgBox"));
        assert_eq!(word("|MsgBox()").as_deref(), Some("MsgBox"));
        assert_eq!(word("MsgBox|()").as_deref(), Some("MsgBox"));
    }

    #[test]
    fn word_at_includes_sigils() {
        assert_eq!(word("$s = @Script|Dir").as_deref(), Some("@ScriptDir"));
        assert_eq!(word("$s = |@ScriptDir").as_deref(), Some("@ScriptDir"));
        assert_eq!(word("Local $v|ar").as_deref(), Some("$var"));
        assert_eq!(word("#include-o|nce").as_deref(), Some("#include-once"));
    }

    #[test]
    fn word_at_nothing() {
        assert_eq!(word("a = | 1"), None);
        assert_eq!(word("|"), None);
        assert_eq!(word("x = @|"), None);
    }

    #[test]
    fn word_range_bounds() {
        let source = "Sleep(@SEC)";
        assert_eq!(word_range(source, 8), Some(6..10));
        assert_eq!(word_range(source, 2), Some(0..5));
    }

    #[test]
    fn prefix_before_cursor() {
        let (source, offset) = at_cursor("$x = String|");
        assert_eq!(word_prefix(&source, offset), "String");
        let (source, offset) = at_cursor("$x = @Scr|");
        assert_eq!(word_prefix(&source, offset), "@Scr");
        let (source, offset) = at_cursor("#include-|");
        assert_eq!(word_prefix(&source, offset), "#include-");
        let (source, offset) = at_cursor("$a = $b-Str|");
        assert_eq!(word_prefix(&source, offset), "Str");
        let (source, offset) = at_cursor("Sleep( |");
        assert_eq!(word_prefix(&source, offset), "");
    }

    #[test]
    fn call_context_counts_arguments() {
        assert_eq!(call("MsgBox(|"), Some(("MsgBox".to_string(), 0)));
        assert_eq!(call("MsgBox(0, |"), Some(("MsgBox".to_string(), 1)));
        assert_eq!(call("MsgBox (0, 'x', |)"), Some(("MsgBox".to_string(), 2)));
    }

    #[test]
    fn call_context_innermost_call() {
        assert_eq!(
            call("MsgBox(0, StringLeft($s, |), 'b')"),
            Some(("StringLeft".to_string(), 1))
        );
        assert_eq!(
            call("MsgBox(0, StringLeft($s, 2), |"),
            Some(("MsgBox".to_string(), 2))
        );
    }

    #[test]
    fn call_context_skips_strings_and_brackets() {
        assert_eq!(
            call("StringSplit(\"a,b(c\", |"),
            Some(("StringSplit".to_string(), 1))
        );
        assert_eq!(
            call("StringSplit('it''s, ok', |"),
            Some(("StringSplit".to_string(), 1))
        );
        assert_eq!(
            call("_ArrayDisplay($a[1][2], |"),
            Some(("_ArrayDisplay".to_string(), 1))
        );
        assert_eq!(
            call("Foo([1, 2, |"),
            Some(("Foo".to_string(), 0))
        );
    }

    #[test]
    fn call_context_inside_string_argument() {
        assert_eq!(call("MsgBox(0, \"tit|"), Some(("MsgBox".to_string(), 1)));
    }

    #[test]
    fn call_context_ignores_comments() {
        assert_eq!(call("Sleep(10) ; MsgBox(|"), None);
        assert_eq!(call("; Sleep(\nBeep(|"), Some(("Beep".to_string(), 0)));
    }

    #[test]
    fn call_context_line_continuation() {
        assert_eq!(
            call("MsgBox(0, _\n  \"title\", |"),
            Some(("MsgBox".to_string(), 2))
        );
        assert_eq!(call("MsgBox(0,\nSleep|"), None);
    }

    #[test]
    fn blank_line_ends_continuation() {
        assert_eq!(call("MsgBox(0, _\n\n$x = |"), None);
        assert_eq!(call("MsgBox(0, _\n  \n$x = |"), None);
        assert_eq!(
            call("MsgBox(0, _\n1, _\n|"),
            Some(("MsgBox".to_string(), 2))
        );
    }

    #[test]
    fn call_context_outside_calls() {
        assert_eq!(call("Sleep(10)|"), None);
        assert_eq!(call("$x = (1 + |"), None);
        assert_eq!(call("$f(|"), None);
        assert_eq!(call("|"), None);
    }
}

//! Signature help for calls to built-in and UDF functions.

use tower_lsp::lsp_types::{
    Documentation, MarkupContent, MarkupKind, ParameterInformation, ParameterLabel, Position,
    SignatureHelp, SignatureInformation,
};

use crate::document::{call_context, DocumentState};
use crate::signatures::{catalog, Category, ParamDoc, SignatureEntry};

/// Locate each parameter inside the call syntax, searching left to right.
///
/// Offsets are UTF-16 based as the protocol requires. Parameters that cannot
/// be found fall back to a plain label.
fn parameter_labels(label: &str, params: &[ParamDoc]) -> Vec<ParameterLabel> {
    let mut cursor = label.find('(').map_or(0, |i| i + 1);
    params
        .iter()
        .map(|param| match label[cursor..].find(param.label) {
            Some(found) => {
                let start = cursor + found;
                let end = start + param.label.len();
                cursor = end;
                let utf16 = |byte: usize| label[..byte].encode_utf16().count() as u32;
                ParameterLabel::LabelOffsets([utf16(start), utf16(end)])
            }
            None => ParameterLabel::Simple(param.label.to_string()),
        })
        .collect()
}

fn signature_information(entry: &SignatureEntry, active: Option<u32>) -> SignatureInformation {
    let labels = parameter_labels(entry.label, entry.params);
    let parameters = entry
        .params
        .iter()
        .zip(labels)
        .map(|(param, label)| ParameterInformation {
            label,
            documentation: Some(Documentation::String(param.documentation.to_string())),
        })
        .collect();

    SignatureInformation {
        label: entry.label.to_string(),
        documentation: Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: entry.documentation.to_string(),
        })),
        parameters: Some(parameters),
        active_parameter: active,
    }
}

/// Generate signature help at an LSP position.
///
/// The active parameter is clamped to the last documented parameter, so extra
/// arguments of variadic functions keep the final parameter highlighted.
pub fn signature_help_at_position(
    state: &DocumentState,
    position: Position,
) -> Option<SignatureHelp> {
    let offset = state.line_index.position_to_offset(position)?;
    let call = call_context(state.source(), offset)?;
    let symbol = catalog().lookup(call.name)?;
    if symbol.table.category != Category::Function {
        return None;
    }

    let entry = symbol.entry;
    let active = (!entry.params.is_empty())
        .then(|| call.active_parameter.min(entry.params.len() as u32 - 1));

    Some(SignatureHelp {
        signatures: vec![signature_information(entry, active)],
        active_signature: Some(0),
        active_parameter: active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn help(source: &str, position: Position) -> Option<SignatureHelp> {
        let state = DocumentState::new(source.to_string(), 0);
        signature_help_at_position(&state, position)
    }

    fn offsets(label: &ParameterLabel) -> [u32; 2] {
        match label {
            ParameterLabel::LabelOffsets(o) => *o,
            ParameterLabel::Simple(s) => panic!("Expected offsets, got {}", s),
        }
    }

    #[test]
    fn signature_for_msgbox() {
        let help = help("MsgBox(0, ", Position::new(0, 10)).unwrap();
        assert_eq!(help.active_parameter, Some(1));
        let sig = &help.signatures[0];
        assert!(sig.label.starts_with("MsgBox ( flag"));
        assert_eq!(sig.parameters.as_ref().unwrap().len(), 5);
    }

    #[test]
    fn parameter_offsets_point_into_label() {
        let label = "StringLeft ( \"string\", count )";
        let params = [
            ParamDoc {
                label: "string",
                documentation: "a",
            },
            ParamDoc {
                label: "count",
                documentation: "b",
            },
        ];
        let labels = parameter_labels(label, &params);
        let [s, e] = offsets(&labels[0]);
        assert_eq!(&label[s as usize..e as usize], "string");
        assert_eq!(s, 14);
        let [s, e] = offsets(&labels[1]);
        assert_eq!(&label[s as usize..e as usize], "count");
    }

    #[test]
    fn parameter_offsets_search_left_to_right() {
        // "substring" contains "string"; the second parameter must not match it.
        let label = "F ( \"substring\", \"string\" )";
        let params = [
            ParamDoc {
                label: "substring",
                documentation: "a",
            },
            ParamDoc {
                label: "string",
                documentation: "b",
            },
        ];
        let labels = parameter_labels(label, &params);
        assert_eq!(offsets(&labels[0]), [5, 14]);
        assert_eq!(offsets(&labels[1]), [18, 24]);
    }

    #[test]
    fn missing_parameter_falls_back_to_simple_label() {
        let params = [ParamDoc {
            label: "nope",
            documentation: "a",
        }];
        let labels = parameter_labels("F ( x )", &params);
        assert_eq!(labels[0], ParameterLabel::Simple("nope".to_string()));
    }

    #[test]
    fn active_parameter_is_clamped() {
        let help = help("Sleep(1, 2, 3", Position::new(0, 13)).unwrap();
        assert_eq!(help.active_parameter, Some(0));
    }

    #[test]
    fn functions_without_params_have_no_active_parameter() {
        let help = help("TimerInit(", Position::new(0, 10)).unwrap();
        assert_eq!(help.active_parameter, None);
        assert!(help.signatures[0].parameters.as_ref().unwrap().is_empty());
    }

    #[test]
    fn no_help_outside_known_calls() {
        assert!(help("MyFunc(1, ", Position::new(0, 10)).is_none());
        assert!(help("If (", Position::new(0, 4)).is_none());
        assert!(help("Sleep(10)", Position::new(0, 9)).is_none());
    }

    #[test]
    fn udf_signature_help() {
        let help = help("_WinAPI_PlaySound(\"ding.wav\", ", Position::new(0, 30)).unwrap();
        assert_eq!(help.active_parameter, Some(1));
        let params = help.signatures[0].parameters.as_ref().unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(
            params[0].documentation,
            Some(Documentation::String(
                "The string that specifies the sound to play. The maximum length is 255 characters"
                    .to_string()
            ))
        );
    }
}

use crate::signatures::{Category, ParamDoc, SignatureEntry, SignatureTable};

pub const TABLE: SignatureTable = SignatureTable {
    name: "string",
    category: Category::Function,
    include: Some("String.au3"),
    entries: ENTRIES,
};

const ENTRIES: &[SignatureEntry] = &[
    SignatureEntry {
        name: "_StringBetween",
        documentation: "Find strings between two string delimiters",
        label: "_StringBetween ( $sString, $sStart, $sEnd [, $iMode = $STR_ENDISSTART [, $bCase = False]] )",
        params: &[
            ParamDoc {
                label: "$sString",
                documentation: "The string to search",
            },
            ParamDoc {
                label: "$sStart",
                documentation: "The beginning of the string to find. Passing an empty string starts at the beginning",
            },
            ParamDoc {
                label: "$sEnd",
                documentation: "The end of the string to find. Passing an empty string searches from $sStart to end of string",
            },
            ParamDoc {
                label: "$iMode",
                documentation: "[optional] Search mode when $sStart = $sEnd",
            },
            ParamDoc {
                label: "$bCase",
                documentation: "[optional] False (default) = case-insensitive, True = case-sensitive",
            },
        ],
    },
    SignatureEntry {
        name: "_StringExplode",
        documentation: "Splits up a string into substrings depending on the given delimiters as PHP Explode v5",
        label: "_StringExplode ( $sString, $sDelimiter [, $iLimit = 0] )",
        params: &[
            ParamDoc {
                label: "$sString",
                documentation: "String to be split",
            },
            ParamDoc {
                label: "$sDelimiter",
                documentation: "Delimiter to split on (split is performed on entire string, not individual characters)",
            },
            ParamDoc {
                label: "$iLimit",
                documentation: "[optional] Maximum elements to be returned",
            },
        ],
    },
    SignatureEntry {
        name: "_StringRepeat",
        documentation: "Repeats a string a specified number of times",
        label: "_StringRepeat ( $sString, $iRepeatCount )",
        params: &[
            ParamDoc {
                label: "$sString",
                documentation: "String to repeat",
            },
            ParamDoc {
                label: "$iRepeatCount",
                documentation: "Number of times to repeat the string",
            },
        ],
    },
    SignatureEntry {
        name: "_StringReverse",
        documentation: "Reverses the contents of the specified string",
        label: "_StringReverse ( $sString )",
        params: &[ParamDoc {
            label: "$sString",
            documentation: "String to reverse",
        }],
    },
    SignatureEntry {
        name: "_StringTitleCase",
        documentation: "Changes a string to a title case string",
        label: "_StringTitleCase ( $sString )",
        params: &[ParamDoc {
            label: "$sString",
            documentation: "Input string",
        }],
    },
    SignatureEntry {
        name: "_StringToHex",
        documentation: "Convert a string to a hex string",
        label: "_StringToHex ( $sString )",
        params: &[ParamDoc {
            label: "$sString",
            documentation: "String to be converted",
        }],
    },
    SignatureEntry {
        name: "_HexToString",
        documentation: "Convert a hex string to a string",
        label: "_HexToString ( $sHex )",
        params: &[ParamDoc {
            label: "$sHex",
            documentation: "A hexadecimal string",
        }],
    },
];

use crate::signatures::{Category, ParamDoc, SignatureEntry, SignatureTable};

pub const TABLE: SignatureTable = SignatureTable {
    name: "array",
    category: Category::Function,
    include: Some("Array.au3"),
    entries: ENTRIES,
};

const ARRAY: ParamDoc = ParamDoc {
    label: "$aArray",
    documentation: "Array to modify",
};

const ENTRIES: &[SignatureEntry] = &[
    SignatureEntry {
        name: "_ArrayAdd",
        documentation: "Adds a specified value at the end of an existing 1D or 2D array",
        label: "_ArrayAdd ( ByRef $aArray, $vValue [, $iStart = 0 [, $sDelim_Item = \"|\" [, $sDelim_Row = @CRLF [, $iForce = $ARRAYFILL_FORCE_DEFAULT]]]] )",
        params: &[
            ARRAY,
            ParamDoc {
                label: "$vValue",
                documentation: "Value(s) to add - can be a single item, a delimited string or an array",
            },
            ParamDoc {
                label: "$iStart",
                documentation: "[optional] Column in which addition is to begin - 2D arrays only",
            },
            ParamDoc {
                label: "$sDelim_Item",
                documentation: "[optional] Delimiter used to split the items into columns - 2D arrays only",
            },
            ParamDoc {
                label: "$sDelim_Row",
                documentation: "[optional] Delimiter used to split the items into rows",
            },
            ParamDoc {
                label: "$iForce",
                documentation: "[optional] Maintains default behaviour or forces $vValue to be added as a single item",
            },
        ],
    },
    SignatureEntry {
        name: "_ArrayDelete",
        documentation: "Deletes specified element(s) from a 1D or 2D array",
        label: "_ArrayDelete ( ByRef $aArray, $vRange )",
        params: &[
            ARRAY,
            ParamDoc {
                label: "$vRange",
                documentation: "Element(s) to delete - either a single index, a range string or a 1D array with a count in the [0] element",
            },
        ],
    },
    SignatureEntry {
        name: "_ArrayDisplay",
        documentation: "Displays given 1D or 2D array in a ListView",
        label: "_ArrayDisplay ( Const ByRef $aArray [, $sTitle = \"ArrayDisplay\" [, $sArrayRange = \"\" [, $iFlags = 0 [, $vUser_Separator = Default [, $sHeader = Default [, $iMax_ColWidth = Default]]]]]] )",
        params: &[
            ParamDoc {
                label: "$aArray",
                documentation: "Array to display",
            },
            ParamDoc {
                label: "$sTitle",
                documentation: "[optional] Title for dialog. Default = \"ArrayDisplay\".",
            },
            ParamDoc {
                label: "$sArrayRange",
                documentation: "[optional] Range of rows/columns to display. Default (\"\") = entire array.",
            },
            ParamDoc {
                label: "$iFlags",
                documentation: "[optional] Determine UDF options. Add required values together",
            },
            ParamDoc {
                label: "$vUser_Separator",
                documentation: "[optional] Sets column display option when copying data to clipboard",
            },
            ParamDoc {
                label: "$sHeader",
                documentation: "[optional] Column names in header (string of names separated by current separator character)",
            },
            ParamDoc {
                label: "$iMax_ColWidth",
                documentation: "[optional] Set maximum column width in pixels",
            },
        ],
    },
    SignatureEntry {
        name: "_ArraySearch",
        documentation: "Finds an entry within a 1D or 2D array. Similar to _ArrayBinarySearch(), except that the array does not need to be sorted",
        label: "_ArraySearch ( Const ByRef $aArray, $vValue [, $iStart = 0 [, $iEnd = 0 [, $iCase = 0 [, $iCompare = 0 [, $iForward = 1 [, $iSubItem = -1 [, $bRow = False]]]]]]] )",
        params: &[
            ParamDoc {
                label: "$aArray",
                documentation: "The array to search",
            },
            ParamDoc {
                label: "$vValue",
                documentation: "What to search $aArray for",
            },
            ParamDoc {
                label: "$iStart",
                documentation: "[optional] Index of array to start searching at",
            },
            ParamDoc {
                label: "$iEnd",
                documentation: "[optional] Index of array to stop searching at",
            },
            ParamDoc {
                label: "$iCase",
                documentation: "[optional] If set to 1, search is case sensitive",
            },
            ParamDoc {
                label: "$iCompare",
                documentation: "[optional] 0 = variables are compared by value, 1 = executes a partial search, 2 = comparison of variable sub-type and value, 3 = compares using a regular expression pattern",
            },
            ParamDoc {
                label: "$iForward",
                documentation: "[optional] If set to 0, searches the array from end to beginning (instead of beginning to end)",
            },
            ParamDoc {
                label: "$iSubItem",
                documentation: "[optional] Sub-index to search on in 2D arrays",
            },
            ParamDoc {
                label: "$bRow",
                documentation: "[optional] If set to True then $iSubItem sets the row to search - 2D arrays only",
            },
        ],
    },
    SignatureEntry {
        name: "_ArraySort",
        documentation: "Sort a 1D or 2D array on a specific index using the quicksort/insertionsort algorithms",
        label: "_ArraySort ( ByRef $aArray [, $iDescending = 0 [, $iStart = 0 [, $iEnd = 0 [, $iSubItem = 0 [, $iPivot = 0]]]]] )",
        params: &[
            ParamDoc {
                label: "$aArray",
                documentation: "Array to sort",
            },
            ParamDoc {
                label: "$iDescending",
                documentation: "[optional] If set to 1, sort in descending order",
            },
            ParamDoc {
                label: "$iStart",
                documentation: "[optional] Index of array to start sorting at",
            },
            ParamDoc {
                label: "$iEnd",
                documentation: "[optional] Index of array to stop sorting at",
            },
            ParamDoc {
                label: "$iSubItem",
                documentation: "[optional] Sub-index to sort on in 2D arrays",
            },
            ParamDoc {
                label: "$iPivot",
                documentation: "[optional] 1 = Use pivot sort algorithm",
            },
        ],
    },
    SignatureEntry {
        name: "_ArrayToString",
        documentation: "Places the elements of a 1D or 2D array into a single string, separated by the specified delimiters",
        label: "_ArrayToString ( Const ByRef $aArray [, $sDelim_Col = \"|\" [, $iStart_Row = -1 [, $iEnd_Row = -1 [, $sDelim_Row = @CRLF [, $iStart_Col = -1 [, $iEnd_Col = -1]]]]]] )",
        params: &[
            ParamDoc {
                label: "$aArray",
                documentation: "Array to combine",
            },
            ParamDoc {
                label: "$sDelim_Col",
                documentation: "[optional] Delimiter for joined columns",
            },
            ParamDoc {
                label: "$iStart_Row",
                documentation: "[optional] Index of array row to start the combination",
            },
            ParamDoc {
                label: "$iEnd_Row",
                documentation: "[optional] Index of array row to stop the combination",
            },
            ParamDoc {
                label: "$sDelim_Row",
                documentation: "[optional] Delimiter for joined rows - 2D only",
            },
            ParamDoc {
                label: "$iStart_Col",
                documentation: "[optional] Index of array column to start the combination - 2D only",
            },
            ParamDoc {
                label: "$iEnd_Col",
                documentation: "[optional] Index of array column to stop the combination - 2D only",
            },
        ],
    },
    SignatureEntry {
        name: "_ArrayUnique",
        documentation: "Returns the unique elements of a 1D or 2D array column",
        label: "_ArrayUnique ( Const ByRef $aArray [, $iColumn = 0 [, $iBase = 0 [, $iCase = 0 [, $iCount = $ARRAYUNIQUE_COUNT [, $iIntType = $ARRAYUNIQUE_AUTO]]]]] )",
        params: &[
            ParamDoc {
                label: "$aArray",
                documentation: "The Array to use",
            },
            ParamDoc {
                label: "$iColumn",
                documentation: "[optional] 0-based column to be used - default 0 (2D only)",
            },
            ParamDoc {
                label: "$iBase",
                documentation: "[optional] The array is 0-based or 1-based",
            },
            ParamDoc {
                label: "$iCase",
                documentation: "[optional] Flag to indicate if the operations should be case sensitive",
            },
            ParamDoc {
                label: "$iCount",
                documentation: "[optional] Flag to indicate if a count of unique elements is returned in element [0]",
            },
            ParamDoc {
                label: "$iIntType",
                documentation: "[optional] Flag to change how 64-bit integers are handled",
            },
        ],
    },
    SignatureEntry {
        name: "_ArrayReverse",
        documentation: "Takes the given array and reverses the order in which the elements appear in a 1D array",
        label: "_ArrayReverse ( ByRef $aArray [, $iStart = 0 [, $iEnd = 0]] )",
        params: &[
            ARRAY,
            ParamDoc {
                label: "$iStart",
                documentation: "[optional] Index of array to start modifying at",
            },
            ParamDoc {
                label: "$iEnd",
                documentation: "[optional] Index of array to stop modifying at",
            },
        ],
    },
    SignatureEntry {
        name: "_ArrayPop",
        documentation: "Returns the last element of an array, deleting that element from the array at the same time",
        label: "_ArrayPop ( ByRef $aArray )",
        params: &[ParamDoc {
            label: "$aArray",
            documentation: "Array to modify",
        }],
    },
];

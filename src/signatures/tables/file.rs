use crate::signatures::{Category, ParamDoc, SignatureEntry, SignatureTable};

pub const TABLE: SignatureTable = SignatureTable {
    name: "file",
    category: Category::Function,
    include: Some("File.au3"),
    entries: ENTRIES,
};

const FILE_PATH: ParamDoc = ParamDoc {
    label: "$sFilePath",
    documentation: "Path and filename of the file to be read",
};

const ENTRIES: &[SignatureEntry] = &[
    SignatureEntry {
        name: "_FileCountLines",
        documentation: "Returns the number of lines in the specified file",
        label: "_FileCountLines ( $sFilePath )",
        params: &[FILE_PATH],
    },
    SignatureEntry {
        name: "_FileListToArray",
        documentation: "Lists files and\\or folders in a specified folder (Similar to using Dir with the /B Switch)",
        label: "_FileListToArray ( $sFilePath [, $sFilter = \"*\" [, $iFlag = $FLTA_FILESFOLDERS [, $bReturnPath = False]]] )",
        params: &[
            ParamDoc {
                label: "$sFilePath",
                documentation: "Folder to generate filelist for",
            },
            ParamDoc {
                label: "$sFilter",
                documentation: "[optional] the filter to use, default is *. Search the Autoit3 helpfile for the word \"WildCards\" For details",
            },
            ParamDoc {
                label: "$iFlag",
                documentation: "[optional] specifies whether to return files folders or both: 0 = both (default), 1 = files only, 2 = folders only",
            },
            ParamDoc {
                label: "$bReturnPath",
                documentation: "[optional] If True the full path is appended to the file\\folder path",
            },
        ],
    },
    SignatureEntry {
        name: "_FileReadToArray",
        documentation: "Reads the specified file into an array",
        label: "_FileReadToArray ( $sFilePath, ByRef $vReturn [, $iFlags = $FRTA_COUNT [, $sDelimiter = \"\"]] )",
        params: &[
            FILE_PATH,
            ParamDoc {
                label: "$vReturn",
                documentation: "Variable to hold returned data - does not need to be an array",
            },
            ParamDoc {
                label: "$iFlags",
                documentation: "[optional] Add multiple values together as required",
            },
            ParamDoc {
                label: "$sDelimiter",
                documentation: "[optional] Used to further split each line of the file - e.g. reading CSV files into a 2D array",
            },
        ],
    },
    SignatureEntry {
        name: "_FileWriteFromArray",
        documentation: "Writes an array to a specified file",
        label: "_FileWriteFromArray ( $sFilePath, Const ByRef $aArray [, $iBase = Default [, $iUBound = Default [, $sDelimiter = \"|\"]]] )",
        params: &[
            ParamDoc {
                label: "$sFilePath",
                documentation: "Path of the file to write to, or a file handle returned from FileOpen()",
            },
            ParamDoc {
                label: "$aArray",
                documentation: "The array to be written to the file",
            },
            ParamDoc {
                label: "$iBase",
                documentation: "[optional] Start array index for read, normally set to 0 or 1",
            },
            ParamDoc {
                label: "$iUBound",
                documentation: "[optional] Set to the last record you want to write to the File",
            },
            ParamDoc {
                label: "$sDelimiter",
                documentation: "[optional] Delimiter character(s) for 2-dimension arrays",
            },
        ],
    },
    SignatureEntry {
        name: "_FileWriteLog",
        documentation: "Writes current date, time and the specified text to a log file",
        label: "_FileWriteLog ( $sLogPath, $sLogMsg [, $iFlag = -1] )",
        params: &[
            ParamDoc {
                label: "$sLogPath",
                documentation: "Path and filename of the file to be written to, or a file handle returned from FileOpen()",
            },
            ParamDoc {
                label: "$sLogMsg",
                documentation: "Message to be written to the log file",
            },
            ParamDoc {
                label: "$iFlag",
                documentation: "[optional] Flag that defines if $sLogMsg will be written to the end of file, or to the beginning",
            },
        ],
    },
    SignatureEntry {
        name: "_PathSplit",
        documentation: "Splits a path into the drive, directory, file name and file extension parts. An empty string is set if a part is missing",
        label: "_PathSplit ( $sFilePath, ByRef $sDrive, ByRef $sDir, ByRef $sFileName, ByRef $sExtension )",
        params: &[
            ParamDoc {
                label: "$sFilePath",
                documentation: "The path to be split (Can contain a UNC server or drive letter)",
            },
            ParamDoc {
                label: "$sDrive",
                documentation: "String to hold the drive",
            },
            ParamDoc {
                label: "$sDir",
                documentation: "String to hold the directory",
            },
            ParamDoc {
                label: "$sFileName",
                documentation: "String to hold the file name",
            },
            ParamDoc {
                label: "$sExtension",
                documentation: "String to hold the file extension",
            },
        ],
    },
    SignatureEntry {
        name: "_TempFile",
        documentation: "Generate a name for a temporary file. The file is guaranteed not to exist yet",
        label: "_TempFile ( [$sDirectoryName = @TempDir [, $sFilePrefix = \"~\" [, $sFileExtension = \".tmp\" [, $iRandomLength = 7]]]] )",
        params: &[
            ParamDoc {
                label: "$sDirectoryName",
                documentation: "[optional] Directory where the temporary file name should be created",
            },
            ParamDoc {
                label: "$sFilePrefix",
                documentation: "[optional] File prefix",
            },
            ParamDoc {
                label: "$sFileExtension",
                documentation: "[optional] File extension",
            },
            ParamDoc {
                label: "$iRandomLength",
                documentation: "[optional] Number of characters to use to generate a unique name",
            },
        ],
    },
];

//! Core AutoIt built-in functions, available without any include.

use crate::signatures::{Category, ParamDoc, SignatureEntry, SignatureTable};

pub const TABLE: SignatureTable = SignatureTable {
    name: "functions",
    category: Category::Function,
    include: None,
    entries: ENTRIES,
};

const ENTRIES: &[SignatureEntry] = &[
    // ==================== Console & Dialogs ====================
    SignatureEntry {
        name: "ConsoleWrite",
        documentation: "Writes data to the STDOUT stream. Some text editors can read this stream as can other programs which may be expecting data on this stream.",
        label: "ConsoleWrite ( \"data\" )",
        params: &[ParamDoc {
            label: "data",
            documentation: "The data you wish to output. This may either be text or binary.",
        }],
    },
    SignatureEntry {
        name: "ConsoleWriteError",
        documentation: "Writes data to the STDERR stream.",
        label: "ConsoleWriteError ( \"data\" )",
        params: &[ParamDoc {
            label: "data",
            documentation: "The data you wish to output. This may either be text or binary.",
        }],
    },
    SignatureEntry {
        name: "MsgBox",
        documentation: "Displays a simple message box with optional timeout.",
        label: "MsgBox ( flag, \"title\", \"text\" [, timeout = 0 [, hwnd]] )",
        params: &[
            ParamDoc {
                label: "flag",
                documentation: "The flag indicates the type of message box and the possible button combinations.",
            },
            ParamDoc {
                label: "title",
                documentation: "The title of the message box.",
            },
            ParamDoc {
                label: "text",
                documentation: "The text of the message box.",
            },
            ParamDoc {
                label: "timeout",
                documentation: "[optional] Timeout in seconds. After the timeout has elapsed the message box will close automatically. The default is 0, which is no timeout.",
            },
            ParamDoc {
                label: "hwnd",
                documentation: "[optional] The window handle to use as the parent for this dialog.",
            },
        ],
    },
    SignatureEntry {
        name: "InputBox",
        documentation: "Displays an input box to ask the user to enter a string.",
        label: "InputBox ( \"title\", \"prompt\" [, \"default\" [, \"password char\" [, width = -1 [, height = -1 [, left = Default [, top = Default [, timeout = 0 [, hwnd]]]]]]]] )",
        params: &[
            ParamDoc {
                label: "title",
                documentation: "The title of the input box.",
            },
            ParamDoc {
                label: "prompt",
                documentation: "A message to the user indicating what kind of input is expected.",
            },
            ParamDoc {
                label: "default",
                documentation: "[optional] The value that the input box starts with.",
            },
            ParamDoc {
                label: "password char",
                documentation: "[optional] The character to replace all typed characters with.",
            },
            ParamDoc {
                label: "width",
                documentation: "[optional] The width of the window. If defined, height must also be defined. Use -1 for default width.",
            },
            ParamDoc {
                label: "height",
                documentation: "[optional] The height of the window. If defined, width must also be defined. Use -1 for default height.",
            },
            ParamDoc {
                label: "left",
                documentation: "[optional] The left side of the input box. By default, the box is centered.",
            },
            ParamDoc {
                label: "top",
                documentation: "[optional] The top of the input box. By default, the box is centered.",
            },
            ParamDoc {
                label: "timeout",
                documentation: "[optional] How many seconds to wait before automatically canceling the InputBox.",
            },
            ParamDoc {
                label: "hwnd",
                documentation: "[optional] The window handle to use as the parent for this dialog.",
            },
        ],
    },
    SignatureEntry {
        name: "ToolTip",
        documentation: "Creates a tooltip anywhere on the screen.",
        label: "ToolTip ( \"text\" [, x [, y [, \"title\" [, icon = 0 [, options]]]]] )",
        params: &[
            ParamDoc {
                label: "text",
                documentation: "The text of the tooltip. (An empty string clears a displaying tooltip)",
            },
            ParamDoc {
                label: "x",
                documentation: "[optional] The x position of the tooltip.",
            },
            ParamDoc {
                label: "y",
                documentation: "[optional] The y position of the tooltip.",
            },
            ParamDoc {
                label: "title",
                documentation: "[optional] The title for the tooltip.",
            },
            ParamDoc {
                label: "icon",
                documentation: "[optional] Pre-defined icon to show next to the title: 0 = None, 1 = Info, 2 = Warning, 3 = Error.",
            },
            ParamDoc {
                label: "options",
                documentation: "[optional] Sets different options for how the tooltip will be displayed (can be added together).",
            },
        ],
    },
    // ==================== Flow & Script ====================
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
        name: "SetError",
        documentation: "Manually set the value of the @error macro (and optionally @extended, and \"Return Value\").",
        label: "SetError ( code [, extended = 0 [, return value]] )",
        params: &[
            ParamDoc {
                label: "code",
                documentation: "The required value (integer) to set the @error macro to.",
            },
            ParamDoc {
                label: "extended",
                documentation: "[optional] The optional value (integer) to set the @extended macro to.",
            },
            ParamDoc {
                label: "return value",
                documentation: "[optional] Override the default return value and return this parameter.",
            },
        ],
    },
    SignatureEntry {
        name: "SetExtended",
        documentation: "Manually set the value of the @extended macro.",
        label: "SetExtended ( code [, return value] )",
        params: &[
            ParamDoc {
                label: "code",
                documentation: "The required value (integer) to set the @extended macro to.",
            },
            ParamDoc {
                label: "return value",
                documentation: "[optional] Override the default return value and return this parameter.",
            },
        ],
    },
    SignatureEntry {
        name: "Execute",
        documentation: "Execute an expression.",
        label: "Execute ( string )",
        params: &[ParamDoc {
            label: "string",
            documentation: "The string representation of an expression to be evaluated.",
        }],
    },
    SignatureEntry {
        name: "Call",
        documentation: "Calls a user-defined function or built-in function contained in first parameter.",
        label: "Call ( \"function\" [, param1 [, param2 [, paramN]]] )",
        params: &[
            ParamDoc {
                label: "function",
                documentation: "The name of the user-defined function or built-in function to call.",
            },
            ParamDoc {
                label: "param",
                documentation: "[optional] Arguments that will be passed to the function being called.",
            },
        ],
    },
    SignatureEntry {
        name: "HotKeySet",
        documentation: "Sets a hotkey that calls a user function.",
        label: "HotKeySet ( \"key\" [, \"function\"] )",
        params: &[
            ParamDoc {
                label: "key",
                documentation: "The key combination to use as the hotkey. Same format as Send().",
            },
            ParamDoc {
                label: "function",
                documentation: "[optional] The name of the function to call when the key is pressed. Not specifying this parameter will unset a previous hotkey.",
            },
        ],
    },
    SignatureEntry {
        name: "OnAutoItExitRegister",
        documentation: "Registers a function to be called when AutoIt exits.",
        label: "OnAutoItExitRegister ( \"function\" )",
        params: &[ParamDoc {
            label: "function",
            documentation: "The name of the user-defined function to call.",
        }],
    },
    SignatureEntry {
        name: "TimerInit",
        documentation: "Returns a handle that can be passed to TimerDiff() to calculate the difference in milliseconds.",
        label: "TimerInit ( )",
        params: &[],
    },
    SignatureEntry {
        name: "TimerDiff",
        documentation: "Returns the difference in time from a previous call to TimerInit().",
        label: "TimerDiff ( handle )",
        params: &[ParamDoc {
            label: "handle",
            documentation: "Handle as returned from a previous call to TimerInit().",
        }],
    },
    // ==================== Strings ====================
    SignatureEntry {
        name: "StringLen",
        documentation: "Returns the number of characters in a string.",
        label: "StringLen ( \"string\" )",
        params: &[ParamDoc {
            label: "string",
            documentation: "The string to evaluate.",
        }],
    },
    SignatureEntry {
        name: "StringLeft",
        documentation: "Returns a number of characters from the left-hand side of a string.",
        label: "StringLeft ( \"string\", count )",
        params: &[
            ParamDoc {
                label: "string",
                documentation: "The string to evaluate.",
            },
            ParamDoc {
                label: "count",
                documentation: "The number of characters to get.",
            },
        ],
    },
    SignatureEntry {
        name: "StringRight",
        documentation: "Returns a number of characters from the right-hand side of a string.",
        label: "StringRight ( \"string\", count )",
        params: &[
            ParamDoc {
                label: "string",
                documentation: "The string to evaluate.",
            },
            ParamDoc {
                label: "count",
                documentation: "The number of characters to get.",
            },
        ],
    },
    SignatureEntry {
        name: "StringMid",
        documentation: "Extracts a number of characters from a string.",
        label: "StringMid ( \"string\", start [, count = -1] )",
        params: &[
            ParamDoc {
                label: "string",
                documentation: "The string to evaluate.",
            },
            ParamDoc {
                label: "start",
                documentation: "The character position to start. (1 = first character)",
            },
            ParamDoc {
                label: "count",
                documentation: "[optional] The number of characters to extract. By default the entire remainder of the string.",
            },
        ],
    },
    SignatureEntry {
        name: "StringInStr",
        documentation: "Checks if a string contains a given substring.",
        label: "StringInStr ( \"string\", \"substring\" [, casesense = 0 [, occurrence = 1 [, start = 1 [, count]]]] )",
        params: &[
            ParamDoc {
                label: "string",
                documentation: "The string to evaluate.",
            },
            ParamDoc {
                label: "substring",
                documentation: "The substring to search for.",
            },
            ParamDoc {
                label: "casesense",
                documentation: "[optional] Flag to indicate if the operations should be case sensitive. 0 = not case sensitive (default), 1 = case sensitive, 2 = not case sensitive using a basic/faster comparison.",
            },
            ParamDoc {
                label: "occurrence",
                documentation: "[optional] Which occurrence of the substring to find in the string. Use a negative occurrence to search from the right side. The default value is 1.",
            },
            ParamDoc {
                label: "start",
                documentation: "[optional] The starting position of the search.",
            },
            ParamDoc {
                label: "count",
                documentation: "[optional] The number of characters to search. This effectively limits the search to a portion of the full string.",
            },
        ],
    },
    SignatureEntry {
        name: "StringReplace",
        documentation: "Replaces substrings in a string. @extended contains the number of replacements performed.",
        label: "StringReplace ( \"string\", \"searchstring/start\", \"replacestring\" [, occurrence = 0 [, casesense = 0]] )",
        params: &[
            ParamDoc {
                label: "string",
                documentation: "The string to evaluate.",
            },
            ParamDoc {
                label: "searchstring/start",
                documentation: "The substring to search for or the character position to start the replacement.",
            },
            ParamDoc {
                label: "replacestring",
                documentation: "The replacement string.",
            },
            ParamDoc {
                label: "occurrence",
                documentation: "[optional] The number of times to replace the searchstring. Use a negative occurrence to replace from the right side. 0 = all searchstrings will be replaced (default).",
            },
            ParamDoc {
                label: "casesense",
                documentation: "[optional] Flag to indicate if the operations should be case sensitive.",
            },
        ],
    },
    SignatureEntry {
        name: "StringSplit",
        documentation: "Splits up a string into substrings depending on the given delimiters.",
        label: "StringSplit ( \"string\", \"delimiters\" [, flag = 0] )",
        params: &[
            ParamDoc {
                label: "string",
                documentation: "The string to evaluate.",
            },
            ParamDoc {
                label: "delimiters",
                documentation: "One or more characters to use as delimiters (case sensitive).",
            },
            ParamDoc {
                label: "flag",
                documentation: "[optional] Changes how the string split works, flags can be added together: 0 = each character is a delimiter, 1 = the entire delimiter string is needed, 2 = disable the return count in the first element.",
            },
        ],
    },
    SignatureEntry {
        name: "StringFormat",
        documentation: "Returns a formatted string (similar to the C sprintf() function).",
        label: "StringFormat ( \"format control\", var1 [, ... var32] )",
        params: &[
            ParamDoc {
                label: "format control",
                documentation: "Format and flags to use (see Remarks).",
            },
            ParamDoc {
                label: "var1",
                documentation: "Variables that will be output according to the \"Format Control\".",
            },
        ],
    },
    SignatureEntry {
        name: "StringRegExp",
        documentation: "Check if a string fits a given regular expression pattern.",
        label: "StringRegExp ( \"test\", \"pattern\" [, flag = 0 [, offset = 1]] )",
        params: &[
            ParamDoc {
                label: "test",
                documentation: "The subject string to check.",
            },
            ParamDoc {
                label: "pattern",
                documentation: "The regular expression to compare.",
            },
            ParamDoc {
                label: "flag",
                documentation: "[optional] A number to indicate how the function behaves.",
            },
            ParamDoc {
                label: "offset",
                documentation: "[optional] The string position to start the match (starts at 1).",
            },
        ],
    },
    SignatureEntry {
        name: "StringRegExpReplace",
        documentation: "Replace text in a string based on regular expressions.",
        label: "StringRegExpReplace ( \"test\", \"pattern\", \"replace\" [, count = 0] )",
        params: &[
            ParamDoc {
                label: "test",
                documentation: "The string to check.",
            },
            ParamDoc {
                label: "pattern",
                documentation: "The regular expression to compare.",
            },
            ParamDoc {
                label: "replace",
                documentation: "The text to replace the regular expression matching text with.",
            },
            ParamDoc {
                label: "count",
                documentation: "[optional] The number of times to execute the replacement in the string. 0 = global replacement (default).",
            },
        ],
    },
    SignatureEntry {
        name: "StringStripWS",
        documentation: "Strips the white space in a string.",
        label: "StringStripWS ( \"string\", flag )",
        params: &[
            ParamDoc {
                label: "string",
                documentation: "The string to strip.",
            },
            ParamDoc {
                label: "flag",
                documentation: "Flag to indicate the type of stripping that should be performed (add the flags together for multiple operations): 1 = leading, 2 = trailing, 4 = double spaces, 8 = all.",
            },
        ],
    },
    SignatureEntry {
        name: "StringUpper",
        documentation: "Converts a string to uppercase.",
        label: "StringUpper ( \"string\" )",
        params: &[ParamDoc {
            label: "string",
            documentation: "The string to convert.",
        }],
    },
    SignatureEntry {
        name: "StringLower",
        documentation: "Converts a string to lowercase.",
        label: "StringLower ( \"string\" )",
        params: &[ParamDoc {
            label: "string",
            documentation: "The string to convert.",
        }],
    },
    // ==================== Conversion ====================
    SignatureEntry {
        name: "Number",
        documentation: "Returns the numeric representation of an expression.",
        label: "Number ( expression [, flag = 0] )",
        params: &[
            ParamDoc {
                label: "expression",
                documentation: "An expression to convert into a number.",
            },
            ParamDoc {
                label: "flag",
                documentation: "[optional] Defines behavior: 0 = auto, 1 = 32-bit integer, 2 = 64-bit integer, 3 = double.",
            },
        ],
    },
    SignatureEntry {
        name: "String",
        documentation: "Returns the string representation of an expression.",
        label: "String ( expression )",
        params: &[ParamDoc {
            label: "expression",
            documentation: "An expression to convert into a string.",
        }],
    },
    SignatureEntry {
        name: "Int",
        documentation: "Returns the integer (whole number) representation of an expression.",
        label: "Int ( expression [, flag = 0] )",
        params: &[
            ParamDoc {
                label: "expression",
                documentation: "An expression to convert into an integer.",
            },
            ParamDoc {
                label: "flag",
                documentation: "[optional] Defines behavior: 0 = auto, 1 = 32-bit integer, 2 = 64-bit integer.",
            },
        ],
    },
    SignatureEntry {
        name: "Chr",
        documentation: "Returns a character corresponding to an ASCII code.",
        label: "Chr ( ASCIIcode )",
        params: &[ParamDoc {
            label: "ASCIIcode",
            documentation: "An ASCII code in the range 0-255.",
        }],
    },
    SignatureEntry {
        name: "Asc",
        documentation: "Returns the ASCII code of a character.",
        label: "Asc ( \"char\" )",
        params: &[ParamDoc {
            label: "char",
            documentation: "The character to get the code for. If a string is used, the code for the first character is given.",
        }],
    },
    SignatureEntry {
        name: "IsArray",
        documentation: "Checks if a variable is an array type.",
        label: "IsArray ( variable )",
        params: &[ParamDoc {
            label: "variable",
            documentation: "The variable/expression to check.",
        }],
    },
    SignatureEntry {
        name: "UBound",
        documentation: "Returns the size of array dimensions or the number of keys in a map.",
        label: "UBound ( Array [, Dimension = 1] )",
        params: &[
            ParamDoc {
                label: "Array",
                documentation: "An array or map variable.",
            },
            ParamDoc {
                label: "Dimension",
                documentation: "[optional] Which dimension of a multi-dimensioned array to report the size of. 0 = number of subscripts, 1 = first dimension (default).",
            },
        ],
    },
    // ==================== Files ====================
    SignatureEntry {
        name: "FileOpen",
        documentation: "Opens a file for reading or writing.",
        label: "FileOpen ( \"filename\" [, mode = 0] )",
        params: &[
            ParamDoc {
                label: "filename",
                documentation: "Filename of the file to open.",
            },
            ParamDoc {
                label: "mode",
                documentation: "[optional] Mode (read or write) to open the file in: 0 = read, 1 = write (append), 2 = write (erase previous contents). Can be combined with encoding flags.",
            },
        ],
    },
    SignatureEntry {
        name: "FileClose",
        documentation: "Closes a previously opened file.",
        label: "FileClose ( \"filehandle\" )",
        params: &[ParamDoc {
            label: "filehandle",
            documentation: "The handle of a file, as returned by a previous call to FileOpen().",
        }],
    },
    SignatureEntry {
        name: "FileRead",
        documentation: "Read in a number of characters from a previously opened file.",
        label: "FileRead ( \"filehandle/filename\" [, count] )",
        params: &[
            ParamDoc {
                label: "filehandle/filename",
                documentation: "The handle of a file, as returned by a previous call to FileOpen(). Alternatively you may use a string filename as the first parameter.",
            },
            ParamDoc {
                label: "count",
                documentation: "[optional] The number of characters (or bytes) to read.",
            },
        ],
    },
    SignatureEntry {
        name: "FileReadLine",
        documentation: "Read in a line of text from a previously opened text file.",
        label: "FileReadLine ( \"filehandle/filename\" [, line = 1] )",
        params: &[
            ParamDoc {
                label: "filehandle/filename",
                documentation: "The handle of a file, as returned by a previous call to FileOpen(). Alternatively you may use a string filename as the first parameter.",
            },
            ParamDoc {
                label: "line",
                documentation: "[optional] The line number to read. The first line of a text file is line 1 (not zero).",
            },
        ],
    },
    SignatureEntry {
        name: "FileWrite",
        documentation: "Append a text/data to the end of a previously opened file.",
        label: "FileWrite ( \"filehandle/filename\", \"text/data\" )",
        params: &[
            ParamDoc {
                label: "filehandle/filename",
                documentation: "The handle of a file, as returned by a previous call to FileOpen(). Alternatively you may use a string filename as the first parameter.",
            },
            ParamDoc {
                label: "text/data",
                documentation: "The text/data to write to the file. The text is written as is - no @CR or @LF characters are added.",
            },
        ],
    },
    SignatureEntry {
        name: "FileWriteLine",
        documentation: "Append a line of text to the end of a previously opened text file.",
        label: "FileWriteLine ( \"filehandle/filename\", \"line\" )",
        params: &[
            ParamDoc {
                label: "filehandle/filename",
                documentation: "The handle of a file, as returned by a previous call to FileOpen(). Alternatively you may use a string filename as the first parameter.",
            },
            ParamDoc {
                label: "line",
                documentation: "The line of text to write to the text file. If the line does NOT end in @CR or @LF then a DOS linefeed (@CRLF) will be automatically added.",
            },
        ],
    },
    SignatureEntry {
        name: "FileExists",
        documentation: "Checks if a file or directory exists.",
        label: "FileExists ( \"path\" )",
        params: &[ParamDoc {
            label: "path",
            documentation: "The directory or file to check.",
        }],
    },
    SignatureEntry {
        name: "FileDelete",
        documentation: "Delete one or more files.",
        label: "FileDelete ( \"filename\" )",
        params: &[ParamDoc {
            label: "filename",
            documentation: "The filename(s) to delete. Wildcards are supported.",
        }],
    },
    SignatureEntry {
        name: "DirCreate",
        documentation: "Creates a directory/folder.",
        label: "DirCreate ( \"path\" )",
        params: &[ParamDoc {
            label: "path",
            documentation: "Path of the directory to create.",
        }],
    },
    // ==================== Processes & Windows ====================
    SignatureEntry {
        name: "Run",
        documentation: "Runs an external program.",
        label: "Run ( \"program\" [, \"workingdir\" [, show_flag [, opt_flag]]] )",
        params: &[
            ParamDoc {
                label: "program",
                documentation: "The full path of the program (EXE, BAT, COM, or PIF) to run.",
            },
            ParamDoc {
                label: "workingdir",
                documentation: "[optional] The working directory. If not specified, then the value of @WorkingDir will be used.",
            },
            ParamDoc {
                label: "show_flag",
                documentation: "[optional] The \"show\" flag of the executed program: @SW_HIDE, @SW_MINIMIZE, @SW_MAXIMIZE.",
            },
            ParamDoc {
                label: "opt_flag",
                documentation: "[optional] Controls various options related to how the parent and child process interact.",
            },
        ],
    },
    SignatureEntry {
        name: "RunWait",
        documentation: "Runs an external program and pauses script execution until the program finishes.",
        label: "RunWait ( \"program\" [, \"workingdir\" [, show_flag [, opt_flag]]] )",
        params: &[
            ParamDoc {
                label: "program",
                documentation: "The full path of the program (EXE, BAT, COM, PIF) to run.",
            },
            ParamDoc {
                label: "workingdir",
                documentation: "[optional] The working directory. If not specified, then the value of @WorkingDir will be used.",
            },
            ParamDoc {
                label: "show_flag",
                documentation: "[optional] The \"show\" flag of the executed program: @SW_HIDE, @SW_MINIMIZE, @SW_MAXIMIZE.",
            },
            ParamDoc {
                label: "opt_flag",
                documentation: "[optional] Controls various options related to how the parent and child process interact.",
            },
        ],
    },
    SignatureEntry {
        name: "ProcessExists",
        documentation: "Checks to see if a specified process exists.",
        label: "ProcessExists ( \"process\" )",
        params: &[ParamDoc {
            label: "process",
            documentation: "The name or PID of the process to check.",
        }],
    },
    SignatureEntry {
        name: "ProcessClose",
        documentation: "Terminates a named process.",
        label: "ProcessClose ( \"process\" )",
        params: &[ParamDoc {
            label: "process",
            documentation: "The title or PID of the process to terminate.",
        }],
    },
    SignatureEntry {
        name: "Send",
        documentation: "Sends simulated keystrokes to the active window.",
        label: "Send ( \"keys\" [, flag = 0] )",
        params: &[
            ParamDoc {
                label: "keys",
                documentation: "The sequence of keys to send.",
            },
            ParamDoc {
                label: "flag",
                documentation: "[optional] Changes how \"keys\" is processed: 0 = special characters are interpreted, 1 = keys are sent raw.",
            },
        ],
    },
    SignatureEntry {
        name: "WinActivate",
        documentation: "Activates (gives focus to) a window.",
        label: "WinActivate ( \"title\" [, \"text\"] )",
        params: &[
            ParamDoc {
                label: "title",
                documentation: "The title/hWnd/class of the window to activate.",
            },
            ParamDoc {
                label: "text",
                documentation: "[optional] The text of the window to activate.",
            },
        ],
    },
    SignatureEntry {
        name: "WinWaitActive",
        documentation: "Pauses execution of the script until the requested window is active.",
        label: "WinWaitActive ( \"title\" [, \"text\" [, timeout = 0]] )",
        params: &[
            ParamDoc {
                label: "title",
                documentation: "The title/hWnd/class of the window to check.",
            },
            ParamDoc {
                label: "text",
                documentation: "[optional] The text of the window to check.",
            },
            ParamDoc {
                label: "timeout",
                documentation: "[optional] Timeout in seconds if the window is not active.",
            },
        ],
    },
    SignatureEntry {
        name: "WinExists",
        documentation: "Checks to see if a specified window exists.",
        label: "WinExists ( \"title\" [, \"text\"] )",
        params: &[
            ParamDoc {
                label: "title",
                documentation: "The title/hWnd/class of the window to check.",
            },
            ParamDoc {
                label: "text",
                documentation: "[optional] The text of the window to check.",
            },
        ],
    },
    // ==================== Misc ====================
    SignatureEntry {
        name: "Random",
        documentation: "Generates a pseudo-random float-type number.",
        label: "Random ( [Min = 0 [, Max = 1 [, Flag = 0]]] )",
        params: &[
            ParamDoc {
                label: "Min",
                documentation: "[optional] The smallest number to be generated. The default is 0.",
            },
            ParamDoc {
                label: "Max",
                documentation: "[optional] The largest number to be generated. The default is 1.",
            },
            ParamDoc {
                label: "Flag",
                documentation: "[optional] If this is set to 1 then an integer result will be returned.",
            },
        ],
    },
    SignatureEntry {
        name: "Beep",
        documentation: "Plays back a beep to the user.",
        label: "Beep ( [Frequency = 500 [, Duration = 1000]] )",
        params: &[
            ParamDoc {
                label: "Frequency",
                documentation: "[optional] The frequency of the beep in hertz. Can be anywhere from 37 through 32,767 (0x25 through 0x7FFF).",
            },
            ParamDoc {
                label: "Duration",
                documentation: "[optional] The length of the beep in milliseconds.",
            },
        ],
    },
    SignatureEntry {
        name: "ClipGet",
        documentation: "Retrieves text from the clipboard.",
        label: "ClipGet ( )",
        params: &[],
    },
    SignatureEntry {
        name: "ClipPut",
        documentation: "Writes text to the clipboard.",
        label: "ClipPut ( \"value\" )",
        params: &[ParamDoc {
            label: "value",
            documentation: "The text to write to the clipboard.",
        }],
    },
    SignatureEntry {
        name: "EnvGet",
        documentation: "Retrieves an environment variable.",
        label: "EnvGet ( \"envvariable\" )",
        params: &[ParamDoc {
            label: "envvariable",
            documentation: "Name of the environment variable to get such as \"PATH\".",
        }],
    },
    SignatureEntry {
        name: "RegRead",
        documentation: "Reads a value from the registry.",
        label: "RegRead ( \"keyname\", \"valuename\" )",
        params: &[
            ParamDoc {
                label: "keyname",
                documentation: "The registry key to read.",
            },
            ParamDoc {
                label: "valuename",
                documentation: "The value to read.",
            },
        ],
    },
    SignatureEntry {
        name: "IniRead",
        documentation: "Reads a value from a standard format .ini file.",
        label: "IniRead ( \"filename\", \"section\", \"key\", \"default\" )",
        params: &[
            ParamDoc {
                label: "filename",
                documentation: "The filename of the .ini file.",
            },
            ParamDoc {
                label: "section",
                documentation: "The section name in the .ini file.",
            },
            ParamDoc {
                label: "key",
                documentation: "The key name in the .ini file.",
            },
            ParamDoc {
                label: "default",
                documentation: "The default value to return if the requested key is not found.",
            },
        ],
    },
    SignatureEntry {
        name: "IniWrite",
        documentation: "Writes a value to a standard format .ini file.",
        label: "IniWrite ( \"filename\", \"section\", \"key\", \"value\" )",
        params: &[
            ParamDoc {
                label: "filename",
                documentation: "The filename of the .ini file.",
            },
            ParamDoc {
                label: "section",
                documentation: "The section name in the .ini file.",
            },
            ParamDoc {
                label: "key",
                documentation: "The key name in the .ini file.",
            },
            ParamDoc {
                label: "value",
                documentation: "The value to write/change.",
            },
        ],
    },
];

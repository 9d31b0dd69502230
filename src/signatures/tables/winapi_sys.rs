use crate::signatures::{Category, ParamDoc, SignatureEntry, SignatureTable};

pub const TABLE: SignatureTable = SignatureTable {
    name: "winapi_sys",
    category: Category::Function,
    include: Some("WinAPISys.au3"),
    entries: ENTRIES,
};

const ENTRIES: &[SignatureEntry] = &[
    SignatureEntry {
        name: "_WinAPI_PlaySound",
        documentation: "Plays a sound specified by the given file name, resource, or system event",
        label: "_WinAPI_PlaySound ( $sSound [, $iFlags = $SND_SYSTEM_NOSTOP [, $hInstance = 0]] )",
        params: &[
            ParamDoc {
                label: "$sSound",
                documentation: "The string that specifies the sound to play. The maximum length is 255 characters",
            },
            ParamDoc {
                label: "$iFlags",
                documentation: "[optional] The flags for playing the sound",
            },
            ParamDoc {
                label: "$hInstance",
                documentation: "[optional] Handle to the executable file that contains the resource to be loaded",
            },
        ],
    },
    SignatureEntry {
        name: "_WinAPI_GetSystemPowerStatus",
        documentation: "Retrieves the power status of the system",
        label: "_WinAPI_GetSystemPowerStatus ( )",
        params: &[],
    },
    SignatureEntry {
        name: "_WinAPI_GetSystemInfo",
        documentation: "Retrieves information about the current system",
        label: "_WinAPI_GetSystemInfo ( )",
        params: &[],
    },
    SignatureEntry {
        name: "_WinAPI_GetTickCount",
        documentation: "Retrieves the number of milliseconds that have elapsed since the system was started",
        label: "_WinAPI_GetTickCount ( )",
        params: &[],
    },
    SignatureEntry {
        name: "_WinAPI_LockWorkStation",
        documentation: "Locks the workstation's display",
        label: "_WinAPI_LockWorkStation ( )",
        params: &[],
    },
    SignatureEntry {
        name: "_WinAPI_SystemParametersInfo",
        documentation: "Retrieves or sets the value of one of the system-wide parameters",
        label: "_WinAPI_SystemParametersInfo ( $iAction [, $iParam = 0 [, $vParam = 0 [, $iWinIni = 0]]] )",
        params: &[
            ParamDoc {
                label: "$iAction",
                documentation: "The system-wide parameter to be retrieved or set",
            },
            ParamDoc {
                label: "$iParam",
                documentation: "[optional] A parameter whose usage and format depends on the system parameter being queried or set",
            },
            ParamDoc {
                label: "$vParam",
                documentation: "[optional] A parameter whose usage and format depends on the system parameter being queried or set",
            },
            ParamDoc {
                label: "$iWinIni",
                documentation: "[optional] If a system parameter is being set, specifies whether the user profile is to be updated",
            },
        ],
    },
];

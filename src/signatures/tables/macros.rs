//! Built-in read-only `@` macros.

use crate::signatures::{Category, SignatureEntry, SignatureTable};

pub const TABLE: SignatureTable = SignatureTable {
    name: "macros",
    category: Category::Macro,
    include: None,
    entries: ENTRIES,
};

/// Shorthand for a macro entry, whose label is always its name.
macro_rules! au3_macro {
    ($name:literal, $doc:literal) => {
        SignatureEntry {
            name: $name,
            documentation: $doc,
            label: $name,
            params: &[],
        }
    };
}

const ENTRIES: &[SignatureEntry] = &[
    // ==================== Directory ====================
    au3_macro!("@AppDataCommonDir", "Path to Application Data (all users)."),
    au3_macro!("@AppDataDir", "Path to current user's Roaming Application Data."),
    au3_macro!("@CommonFilesDir", "Path to Common Files folder."),
    au3_macro!("@DesktopDir", "Path to current user's Desktop."),
    au3_macro!("@DocumentsCommonDir", "Path to Documents (all users)."),
    au3_macro!("@FavoritesDir", "Path to current user's Favorites."),
    au3_macro!("@HomeDrive", "Drive letter of drive containing current user's home directory."),
    au3_macro!("@HomePath", "Directory part of current user's home directory. To get the full path, use in conjunction with @HomeDrive."),
    au3_macro!("@LocalAppDataDir", "Path to current user's Local Application Data."),
    au3_macro!("@MyDocumentsDir", "Path to My Documents target."),
    au3_macro!("@ProgramFilesDir", "Path to Program Files folder."),
    au3_macro!("@ProgramsDir", "Path to current user's Programs (folder on Start Menu)."),
    au3_macro!("@ScriptDir", "Directory containing the running script. Only includes a trailing backslash when the script is located in the root of a drive."),
    au3_macro!("@ScriptFullPath", "Equivalent to @ScriptDir & \"\\\" & @ScriptName."),
    au3_macro!("@ScriptName", "Filename of the running script."),
    au3_macro!("@ScriptLineNumber", "Line number being executed - useful for debug statements. Only significant in uncompiled scripts."),
    au3_macro!("@StartupDir", "Current user's Startup folder."),
    au3_macro!("@SystemDir", "Path to the Windows' System (or System32) folder."),
    au3_macro!("@TempDir", "Path to the temporary files folder."),
    au3_macro!("@UserProfileDir", "Path to current user's Profile folder."),
    au3_macro!("@WindowsDir", "Path to the Windows folder."),
    au3_macro!("@WorkingDir", "Current/active working directory. Only includes a trailing backslash when the directory is the root of a drive."),
    // ==================== AutoIt Related ====================
    au3_macro!("@AutoItExe", "The full path and filename of the AutoIt executable currently running. For compiled scripts it is the path of the compiled script."),
    au3_macro!("@AutoItPID", "PID of the process running the script."),
    au3_macro!("@AutoItVersion", "Version number of AutoIt such as 3.3.16.1."),
    au3_macro!("@AutoItX64", "Returns 1 if the script is running under the native x64 version of AutoIt."),
    au3_macro!("@Compiled", "Returns 1 if script is a compiled executable or an .a3x file; returns 0 if an .au3 file."),
    au3_macro!("@error", "Status of the error flag. See the function SetError()."),
    au3_macro!("@exitCode", "Exit code as set by Exit statement."),
    au3_macro!("@exitMethod", "Exit method. See the function OnAutoItExitRegister()."),
    au3_macro!("@extended", "Extended function return - used in certain functions such as StringReplace()."),
    au3_macro!("@NumParams", "Number of parameters used in calling the user function."),
    // ==================== Special Characters ====================
    au3_macro!("@CR", "Carriage return, Chr(13). Sometimes used for line breaks."),
    au3_macro!("@CRLF", "= @CR & @LF. Occasionally used for line breaks."),
    au3_macro!("@LF", "Line feed, Chr(10). Typically used for line breaks."),
    au3_macro!("@TAB", "Tab character, Chr(9)."),
    // ==================== Time And Date ====================
    au3_macro!("@HOUR", "Hours value of clock in 24-hour format. Range is 00 to 23."),
    au3_macro!("@MDAY", "Current day of month. Range is 01 to 31."),
    au3_macro!("@MIN", "Minutes value of clock. Range is 00 to 59."),
    au3_macro!("@MON", "Current month. Range is 01 to 12."),
    au3_macro!("@MSEC", "Milliseconds value of clock. Range is 000 to 999."),
    au3_macro!("@SEC", "Seconds value of clock. Range is 00 to 59."),
    au3_macro!("@WDAY", "Numeric day of week. Range is 1 to 7 which corresponds to Sunday through Saturday."),
    au3_macro!("@YDAY", "Current day of year. Range is 001 to 366 (or 001 to 365 if not a leap year)."),
    au3_macro!("@YEAR", "Current four-digit year."),
    // ==================== System Info ====================
    au3_macro!("@ComputerName", "Computer's network name."),
    au3_macro!("@CPUArch", "Returns \"X86\" when the CPU is a 32-bit CPU and \"X64\" when the CPU is 64-bit."),
    au3_macro!("@DesktopHeight", "Height of the primary display in pixels. (Vertical resolution)"),
    au3_macro!("@DesktopWidth", "Width of the primary display in pixels. (Horizontal resolution)"),
    au3_macro!("@IPAddress1", "IP address of first network adapter. Tends to return 127.0.0.1 on some computers."),
    au3_macro!("@OSArch", "Returns one of the following: \"X86\", \"IA64\", \"X64\" - this is the architecture type of the currently running operating system."),
    au3_macro!("@OSBuild", "Returns the OS build number."),
    au3_macro!("@OSVersion", "Returns one of the following: \"WIN_11\", \"WIN_10\", \"WIN_81\", \"WIN_8\", \"WIN_7\", \"WIN_VISTA\", \"WIN_XP\" and the server variants."),
    au3_macro!("@UserName", "ID of the currently logged on user."),
    au3_macro!("@LogonDomain", "Logon domain."),
    // ==================== Control Flow ====================
    au3_macro!("@GUI_CtrlId", "Last click GUI Control identifier. Only valid in an event function. See the GUICtrlSetOnEvent() function."),
    au3_macro!("@GUI_WinHandle", "Last click GUI window handle. Only valid in an event function. See the GUICtrlSetOnEvent() function."),
    au3_macro!("@HotKeyPressed", "Last hotkey pressed. See the HotKeySet() function."),
];

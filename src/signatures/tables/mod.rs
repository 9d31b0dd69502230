//! Signature tables shipped with the server.
//!
//! Built-in tables come first; UDF tables carry the include file that provides
//! their functions.

mod array;
mod file;
mod functions;
mod keywords;
mod macros;
mod string;
mod winapi_sys;

use super::SignatureTable;

/// All tables, in registration order. Earlier tables win on name clashes.
pub static TABLES: &[SignatureTable] = &[
    macros::TABLE,
    functions::TABLE,
    keywords::TABLE,
    array::TABLE,
    string::TABLE,
    file::TABLE,
    winapi_sys::TABLE,
];

/// Find a table by its settings name.
pub fn table(name: &str) -> Option<&'static SignatureTable> {
    TABLES.iter().find(|t| t.name == name)
}

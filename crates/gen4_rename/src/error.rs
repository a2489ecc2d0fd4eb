//! Errors produced while scanning an HDL file.

use std::path::PathBuf;

/// Errors that abort a rename scan. A line that matches nothing is not one.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    /// The input file is missing, unreadable, or not a regular file.
    #[error("cannot read '{}': {source}", path.display())]
    FileAccess {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A port declaration carried a direction other than `in`/`out`/`inout`.
    #[error("line {line}: unrecognized port direction '{token}'")]
    UnrecognizedDirection {
        /// The direction token as written.
        token: String,
        /// 1-based line number of the declaration.
        line: usize,
    },
}

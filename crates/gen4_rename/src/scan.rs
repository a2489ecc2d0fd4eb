//! Whole-file scanning and `sed` directive output.

use serde::Serialize;
use std::path::Path;

use crate::error::RenameError;
use crate::matcher::{convert_line, DeclarationKind};

/// One rename produced by a matching declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameCandidate {
    /// The declared name, case preserved. Used as the search pattern.
    pub original_name: String,
    /// The migrated, fully lower-case name.
    pub converted_name: String,
    /// Which matcher produced the candidate.
    pub kind: DeclarationKind,
    /// 1-based source line.
    pub line: usize,
}

impl RenameCandidate {
    /// Renders the candidate as a global `sed` substitution.
    pub fn sed_directive(&self) -> String {
        format!("s/{}/{}/g", self.original_name, self.converted_name)
    }
}

/// Splits text on `\n`, `\r\n` or a bare `\r`, without the terminators.
///
/// A trailing terminator does not produce an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(pos) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..pos];
        let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + terminator..];
        Some(line)
    })
}

/// Scans HDL text line by line, in order, with no deduplication.
///
/// Any error aborts the scan, so callers never see a partial list.
pub fn scan_str(text: &str) -> Result<Vec<RenameCandidate>, RenameError> {
    let mut candidates = Vec::new();
    for (idx, line) in split_lines(text).enumerate() {
        if let Some(candidate) = convert_line(line, idx + 1)? {
            candidates.push(candidate);
        }
    }
    Ok(candidates)
}

/// Reads `path` in full and scans it.
pub fn scan_file(path: &Path) -> Result<Vec<RenameCandidate>, RenameError> {
    let text = std::fs::read_to_string(path).map_err(|source| RenameError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let candidates = scan_str(&text)?;
    log::info!(
        "{}: {} rename candidate(s)",
        path.display(),
        candidates.len()
    );
    Ok(candidates)
}

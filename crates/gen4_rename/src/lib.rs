//! HDL identifier migration to the `i_`/`o_`/`io_`/`n_` prefix convention.
//!
//! Scans HDL source text for port declarations (`NAME : in|out|inout`) and
//! signal/constant declarations (`signal NAME`, `constant NAME`), and produces
//! one [`RenameCandidate`] per matching line. Each candidate renders as a
//! `sed` substitution (`s/OLD/new/g`) so the result can be fed straight to
//! `sed -f`.

#![warn(missing_docs)]

pub mod direction;
pub mod error;
pub mod matcher;
pub mod scan;

pub use direction::{ParseDirectionError, PortDirection};
pub use error::RenameError;
pub use matcher::{convert_line, convert_port_name, convert_signal_name, DeclarationKind};
pub use scan::{scan_file, scan_str, RenameCandidate};

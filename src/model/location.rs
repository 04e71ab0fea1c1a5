//! Source locations.

use std::fmt;
use std::sync::Arc;

use crate::host::{SemanticHost, SourceHandle};

/// Where a declaration is written.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    /// A file path and a 1-based line number
    File { path: Arc<str>, line: u32 },
    /// The declaration has no source, or its file is not tracked
    NonExistent,
}

impl Location {
    pub fn file(path: impl Into<Arc<str>>, line: u32) -> Self {
        Self::File {
            path: path.into(),
            line,
        }
    }

    pub fn is_non_existent(&self) -> bool {
        matches!(self, Location::NonExistent)
    }

    pub fn line(&self) -> Option<u32> {
        match self {
            Location::File { line, .. } => Some(*line),
            Location::NonExistent => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::File { path, line } => write!(f, "{path}:{line}"),
            Location::NonExistent => f.write_str("<no location>"),
        }
    }
}

/// Resolve a source handle to a location.
///
/// Never fails: a missing handle or a file without a document both yield
/// [`Location::NonExistent`].
pub fn locate<H: SemanticHost + ?Sized>(host: &H, handle: Option<SourceHandle>) -> Location {
    let Some(handle) = handle else {
        return Location::NonExistent;
    };
    let Some(document) = host.document(handle.file) else {
        return Location::NonExistent;
    };
    Location::File {
        path: document.path.clone(),
        line: document.line_index.line_number(handle.offset) + 1,
    }
}

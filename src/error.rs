use std::fmt;

#[derive(Debug)]
pub enum AutofillError {
    /// Snapshot JSON failed to parse
    SnapshotParse { context: String, source: serde_json::Error },

    /// Snapshot parsed but its structure is invalid (e.g. bad parent index)
    SnapshotStructure(String),

    /// Profile file failed to parse (YAML or JSON)
    ProfileParse { path: String, message: String },

    /// File could not be read or written
    Io { path: String, source: std::io::Error },

    /// Profile file extension is not a supported format
    UnsupportedFormat(String),
}

impl fmt::Display for AutofillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutofillError::SnapshotParse { context, source } => {
                write!(f, "Snapshot parse error ({}): {}", context, source)
            }
            AutofillError::SnapshotStructure(msg) => {
                write!(f, "Invalid snapshot structure: {}", msg)
            }
            AutofillError::ProfileParse { path, message } => {
                write!(f, "Failed to parse profile '{}': {}", path, message)
            }
            AutofillError::Io { path, source } => {
                write!(f, "IO error on '{}': {}", path, source)
            }
            AutofillError::UnsupportedFormat(ext) => {
                write!(f, "Unsupported profile format '{}' (expected yaml or json)", ext)
            }
        }
    }
}

impl std::error::Error for AutofillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AutofillError::SnapshotParse { source, .. } => Some(source),
            AutofillError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

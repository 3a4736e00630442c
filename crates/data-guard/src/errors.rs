use std::{io, path::PathBuf};

// DATA GUARD ERROR
// ================================================================================================

#[derive(Debug, thiserror::Error)]
pub enum DataGuardError {
    #[error("failed to serialize data for label '{label}'")]
    SerializeData {
        label: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode data file '{}'", path.display())]
    EncodeFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to decode data file '{}'", path.display())]
    DecodeFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write data file '{}'", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read data file '{}'", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

use std::{io, path::PathBuf};

use crossline_generator::GenerateError;

use crate::state::StateError;

/// Errors reported by the `crossline` binary.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[display("{} is not a valid puzzle file: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("{} is not a valid puzzle file: {source}", path.display())]
    State { path: PathBuf, source: StateError },
    #[display("{} has no layout yet; run `crossline generate` on it first", path.display())]
    NotGenerated { path: PathBuf },
    #[display("failed to encode puzzle: {_0}")]
    #[from]
    Encode(serde_json::Error),
    #[display("{_0}")]
    #[from]
    Generate(GenerateError),
    #[display("terminal I/O failed: {_0}")]
    #[from]
    Io(io::Error),
}

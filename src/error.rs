use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unable to open file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: missing course identifier")]
    MissingIdentifier { line: usize },

    #[error("line {line}: course {identifier} has no title")]
    MissingTitle { line: usize, identifier: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Please enter a password")]
    EmptyPassword,

    #[error("Enter at least one field to generate a wordlist")]
    EmptySeedSet,

    #[error("No wordlist generated yet")]
    NothingToExport,

    #[error("Failed to write wordlist to {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ToolkitError>;

use std::io;
use thiserror::Error;

/// Error type for variant file extraction.
///
/// Only whole-source failures are errors; problems with individual lines
/// are reported as diagnostics on the extraction result.
#[derive(Error, Debug)]
pub enum VcfError {
    /// The variant file does not exist.
    #[error("VCF file not found: {0}")]
    NotFound(String),

    /// The variant file exists but could not be opened.
    #[error("Can't open VCF file: {0}")]
    Unreadable(String),

    /// The source was opened but not a single line could be read.
    #[error("Can't read VCF file: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for pgxrisk-vcf operations.
pub type Result<T> = std::result::Result<T, VcfError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReferenceDataError {
    #[error("Can't read reference data file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("Invalid reference table: {0}")]
    InvalidTable(String),
}

pub type ReferenceDataResult<T> = std::result::Result<T, ReferenceDataError>;

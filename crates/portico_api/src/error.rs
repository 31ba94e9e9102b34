use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("unknown endpoint path: {0}")]
    UnknownEndpoint(String),

    #[error("token lifetime of {0} seconds is out of range")]
    TokenWindowOverflow(u64),
}

pub type Result<T> = std::result::Result<T, ApiError>;

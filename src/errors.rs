use thiserror::Error;

pub type Result<T> = std::result::Result<T, WireError>;

/// WireError represents a failure while encoding or decoding wire bytes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// Fewer bytes remain than the field requires. Recoverable: the caller
    /// may buffer more transport data and retry the decode.
    #[error("Insufficient data: needed {needed} bytes, {available} available")]
    InsufficientData { needed: usize, available: usize },

    /// Bytes are present but malformed for the expected format.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(&'static str),

    /// Header magic does not match any known network constant.
    #[error("Unknown network magic {0:#010x}")]
    UnknownNetwork(u32),

    /// Encode-time: a value does not fit its fixed-width wire field.
    #[error("{field} is {len} bytes, exceeds the {max} byte field")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

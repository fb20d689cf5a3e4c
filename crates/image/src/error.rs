//! Packer error type.

use thiserror::Error;

use crate::signature::ImageFormat;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("unknown or unsupported image format")]
    UnsupportedFormat,
    #[error("image payload exceeds the configured limit of {limit} bytes")]
    TooLarge { limit: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid image data URI: {0}")]
    InvalidDataUri(&'static str),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("data URI declares {declared} but the payload is {detected}")]
    FormatMismatch {
        declared: ImageFormat,
        detected: ImageFormat,
    },
}

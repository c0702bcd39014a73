//! Encoding errors.

use std::io;

/// Misuse of the encoders.
///
/// Malformed headers are never an error: a negative or mismatched declared
/// size is written exactly as requested. Only values that cannot be
/// represented in their wire field are rejected.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Declared chunk size {declared} does not fit in a signed 32-bit field")]
    DeclaredSizeOutOfRange { declared: i64 },
    #[error("Chunk payload of {len} bytes is too large to encode")]
    PayloadTooLarge { len: usize },
    #[error("Frame of {len} bytes does not fit in an unsigned 32-bit size field")]
    FrameTooLarge { len: usize },
    #[error("File of {len} bytes does not fit in an unsigned 32-bit size field")]
    FileTooLarge { len: usize },
    #[error("Image dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: u16, height: u16 },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

//! Error types for the huffpack system.
//!
//! All operations return structured errors rather than panicking.
//! Compression and decompression are all-or-nothing: on any failure the
//! call reports an error and never hands back a partial tree or payload.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Codec: tree/code construction or encode failures
/// - Container: parsing a persisted container
/// - Bit I/O: reading bits from byte buffers
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Codec error (e.g., empty frequency table, unknown symbol)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Container error (e.g., truncated or corrupt persisted container)
    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Codec errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// No symbols with non-zero frequency (cannot build a tree)
    #[error("empty frequency table: cannot build tree")]
    EmptyFrequencyTable,

    /// Encoder was handed a symbol absent from the code table
    #[error("symbol {symbol:#04x} has no code table entry")]
    UnknownSymbol { symbol: u8 },
}

/// Persisted container errors.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Invalid magic number in the header
    #[error("invalid magic number: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Buffer is shorter than the header or the declared section lengths
    #[error("container truncated: need {required} bytes, got {actual}")]
    Truncated { required: usize, actual: usize },

    /// CRC validation failed, indicating corruption
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },

    /// Tree section bits ran out mid pre-order traversal
    #[error("tree section truncated mid-traversal")]
    TruncatedTree,

    /// Tree descent exceeded the depth any byte alphabet can produce
    #[error("tree depth exceeds maximum {limit}")]
    TreeTooDeep { limit: usize },

    /// Payload bytes present but no tree to decode them with
    #[error("payload present without a tree")]
    PayloadWithoutTree,
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the buffer
    #[error("unexpected end of bit stream")]
    UnexpectedEof,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

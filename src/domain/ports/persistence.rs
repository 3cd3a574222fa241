use core::fmt;

/// Error type for encoding and decoding persisted light state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceError {
    /// Output buffer cannot hold the encoded image
    BufferTooSmall,
    /// Image does not start with the expected magic bytes
    BadMagic,
    /// Image was written by an unknown format version
    UnsupportedVersion(u8),
    /// Image ends before the announced record count
    Truncated,
    /// Image holds more records than a controller can have endpoints
    TooManyRecords(u8),
    /// Record names an unknown endpoint kind
    InvalidRecord,
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::BufferTooSmall => write!(f, "Buffer too small"),
            PersistenceError::BadMagic => write!(f, "Bad magic"),
            PersistenceError::UnsupportedVersion(v) => {
                write!(f, "Unsupported format version {}", v)
            }
            PersistenceError::Truncated => write!(f, "Truncated image"),
            PersistenceError::TooManyRecords(n) => write!(f, "Too many records: {}", n),
            PersistenceError::InvalidRecord => write!(f, "Invalid record"),
        }
    }
}

use std::io;

/// The highest archive `version` this parser understands.
///
/// Resolves the open question in the format's design: rather than attempt a
/// best-effort read of an archive from an unknown future version, the parser
/// refuses it outright.
pub const MAX_SUPPORTED_VERSION: u8 = 1;

/// Errors produced while building, emitting, parsing, or unpacking a CAF
/// archive.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CafError {
    /// The byte stream did not match the archive grammar.
    #[error("malformed archive at byte offset {offset}: {message}")]
    Framing {
        /// Byte offset of the cursor when the mismatch was detected.
        offset: usize,
        /// Human-readable description of what was expected.
        message: String,
    },

    /// A name passed to the builder violated the naming rules for archive
    /// entries.
    #[error("invalid name {name:?}: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The archive declares a version newer than this crate understands.
    #[error("unsupported archive version {found} (highest supported is {max_supported})")]
    UnsupportedVersion {
        /// Version byte found in the header.
        found: u8,
        /// Highest version this parser accepts.
        max_supported: u8,
    },

    /// An underlying filesystem or stream operation failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CafError {
    pub(crate) fn framing(offset: usize, message: impl Into<String>) -> Self {
        CafError::Framing {
            offset,
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CafError>;

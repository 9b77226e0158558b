//! Errors raised while decoding a property list or reading values out of it

use super::value::ValueKind;
use thiserror::Error;

/// Result alias for plist decoding and value access
pub type Result<T> = std::result::Result<T, PlistError>;

/// Errors produced by the plist decoder and the typed value accessors
#[derive(Debug, Error)]
pub enum PlistError {
    /// Underlying file read failed
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// The XML is not well-formed or ended before an element was closed
    #[error("malformed document at byte {position}: {message}")]
    MalformedDocument { message: String, position: u64 },

    /// The document has no `plist > dict` root
    #[error("document has no top-level <dict> inside <plist>")]
    MissingRootDict,

    /// A value was not the variant the caller asked for
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },

    /// A dict lacks a key the caller required
    #[error("missing key '{key}'")]
    MissingKey { key: String },

    /// `<integer>` content did not parse as a signed 64-bit number
    #[error("invalid integer '{text}' at byte {position}")]
    InvalidInteger { text: String, position: u64 },

    /// An `<array>` held something other than `<dict>` children
    #[error("unsupported <{tag}> element inside <array>")]
    UnsupportedArrayElement { tag: String },
}

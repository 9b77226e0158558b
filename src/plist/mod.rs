//! Property-list XML decoding
//!
//! Decodes an XML plist into an untyped [`Value`] tree. Only the value
//! kinds a media library export needs are modeled: strings, integers,
//! dicts and arrays of dicts. Anything else is skipped.

mod decoder;
mod error;
mod value;

pub use decoder::{decode_document, decode_document_from_path, Decoder, MAX_DEPTH};
pub use error::{PlistError, Result};
pub use value::{require, string_or, Dict, Value, ValueKind};

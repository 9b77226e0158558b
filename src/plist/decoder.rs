//! Recursive-descent decoder for plist XML
//!
//! A plist dict is a flat run of `<key>` elements, each followed by the
//! element holding its value. The value's type is the tag name of that
//! following sibling, so decoding pairs keys and values by hand while
//! walking the quick-xml event stream.

use super::error::{PlistError, Result};
use super::value::{Dict, Value};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

const PLIST: &[u8] = b"plist";
const DICT: &[u8] = b"dict";
const ARRAY: &[u8] = b"array";
const KEY: &[u8] = b"key";
const STRING: &[u8] = b"string";
const INTEGER: &[u8] = b"integer";

/// Deepest dict/array nesting accepted before the document is rejected
pub const MAX_DEPTH: usize = 128;

/// Decode a whole plist document and return its root dict
pub fn decode_document(xml: &str) -> Result<Value> {
    Decoder::new(xml).decode_document()
}

/// Read a file fully into memory and decode it
pub fn decode_document_from_path(path: &Path) -> Result<Value> {
    let xml = std::fs::read_to_string(path)?;
    decode_document(&xml)
}

/// Pull-based decoder over an in-memory XML document
pub struct Decoder<'a> {
    reader: Reader<&'a [u8]>,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(xml: &'a str) -> Self {
        Self {
            reader: Reader::from_str(xml),
            depth: 0,
        }
    }

    /// Find `<plist>` and decode its first `<dict>` child
    ///
    /// Declarations, DOCTYPE, comments and processing instructions before
    /// the root are ignored.
    pub fn decode_document(&mut self) -> Result<Value> {
        let mut in_plist = false;
        loop {
            match self.reader.read_event().map_err(|e| self.malformed(e))? {
                Event::Start(e) if !in_plist && e.name().as_ref() == PLIST => in_plist = true,
                Event::Start(e) if in_plist && e.name().as_ref() == DICT => {
                    return self.decode_dict();
                }
                Event::Empty(e) if in_plist && e.name().as_ref() == DICT => {
                    return Ok(Value::Dict(Dict::new()));
                }
                Event::Start(e) => self.skip(&e)?,
                Event::End(e) if e.name().as_ref() == PLIST => {
                    return Err(PlistError::MissingRootDict)
                }
                Event::Eof => return Err(PlistError::MissingRootDict),
                _ => {}
            }
        }
    }

    /// Decode a `<dict>` whose start tag has just been consumed
    pub fn decode_dict(&mut self) -> Result<Value> {
        self.enter()?;
        let mut dict = Dict::new();
        let mut pending_key: Option<String> = None;

        loop {
            let value = match self.next_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    KEY => {
                        pending_key = Some(self.read_string()?);
                        continue;
                    }
                    STRING => Value::Str(self.read_string()?),
                    INTEGER => self.read_integer()?,
                    DICT => self.decode_dict()?,
                    ARRAY => self.decode_array()?,
                    _ => {
                        // the key belonged to this unmodeled value
                        pending_key = None;
                        self.skip(&e)?;
                        continue;
                    }
                },
                Event::Empty(e) => match e.name().as_ref() {
                    KEY => {
                        pending_key = Some(String::new());
                        continue;
                    }
                    STRING => Value::Str(String::new()),
                    INTEGER => Value::Int(0),
                    DICT => Value::Dict(Dict::new()),
                    ARRAY => Value::Array(Vec::new()),
                    _ => {
                        pending_key = None;
                        continue;
                    }
                },
                Event::End(e) if e.name().as_ref() == DICT => {
                    self.depth -= 1;
                    return Ok(Value::Dict(dict));
                }
                _ => continue,
            };

            match pending_key.take() {
                Some(key) => {
                    dict.insert(key, value);
                }
                None => log::trace!("Dropping {} value with no preceding <key>", value.kind()),
            }
        }
    }

    /// Decode an `<array>` of `<dict>` children whose start tag has just been consumed
    pub fn decode_array(&mut self) -> Result<Value> {
        self.enter()?;
        let mut items = Vec::new();

        loop {
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == DICT => items.push(self.decode_dict()?),
                Event::Empty(e) if e.name().as_ref() == DICT => {
                    items.push(Value::Dict(Dict::new()))
                }
                Event::Start(e) | Event::Empty(e) => {
                    return Err(PlistError::UnsupportedArrayElement {
                        tag: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    })
                }
                Event::End(e) if e.name().as_ref() == ARRAY => {
                    self.depth -= 1;
                    return Ok(Value::Array(items));
                }
                _ => {}
            }
        }
    }

    /// Collect the text content of the current element up to its end tag
    fn read_string(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next_event()? {
                Event::Text(t) => {
                    let unescaped = t.unescape().map_err(|e| self.malformed(e))?;
                    text.push_str(&unescaped);
                }
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
                Event::Start(e) => self.skip(&e)?,
                Event::End(_) => return Ok(text),
                _ => {}
            }
        }
    }

    fn read_integer(&mut self) -> Result<Value> {
        let position = self.reader.buffer_position() as u64;
        let text = self.read_string()?;
        if text.is_empty() {
            return Ok(Value::Int(0));
        }
        let trimmed = text.trim();
        trimmed
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| PlistError::InvalidInteger {
                text: trimmed.to_string(),
                position,
            })
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.malformed(format!("nesting too deep (limit {MAX_DEPTH})")));
        }
        self.depth += 1;
        Ok(())
    }

    /// Consume an element we do not model, including its whole subtree
    fn skip(&mut self, start: &BytesStart<'_>) -> Result<()> {
        log::trace!(
            "Skipping unsupported <{}> element",
            String::from_utf8_lossy(start.name().as_ref())
        );
        self.reader
            .read_to_end(start.name())
            .map_err(|e| self.malformed(e))?;
        Ok(())
    }

    /// Next event inside an open element; running out of input is an error
    fn next_event(&mut self) -> Result<Event<'a>> {
        match self.reader.read_event().map_err(|e| self.malformed(e))? {
            Event::Eof => Err(self.malformed("unexpected end of document")),
            event => Ok(event),
        }
    }

    fn malformed(&self, message: impl std::fmt::Display) -> PlistError {
        PlistError::MalformedDocument {
            message: message.to_string(),
            position: self.reader.buffer_position() as u64,
        }
    }
}

//! The tokenizer's event vocabulary and error taxonomy.
//!
//! The specification pins exact integer codes for these (`EEOF=-5` through
//! `PIEND=9`) for binary compatibility with downstream, non-Rust consumers.
//! The idiomatic surface here is `Result<Event, TokenizeError>`; `.code()`
//! on both types recovers the exact bit-compatible integer for anyone who
//! needs it.

use thiserror::Error;

/// A single lexical milestone produced by [`Tokenizer::feed`](super::Tokenizer::feed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// No new token this step (e.g. whitespace inside a tag).
    Ok,
    /// A new element was opened; `Tokenizer::element_name()` names it.
    ElemStart,
    /// `Tokenizer::data()` holds a chunk of character content.
    Content,
    /// The innermost open element just closed.
    ElemEnd,
    /// A new attribute was opened; `Tokenizer::attr_name()` names it.
    AttrStart,
    /// `Tokenizer::data()` holds a chunk of the attribute's value.
    AttrVal,
    /// The current attribute closed.
    AttrEnd,
    /// A processing instruction opened; `Tokenizer::pi_target()` names it.
    PiStart,
    /// `Tokenizer::data()` holds a chunk of the PI body.
    PiContent,
    /// The current processing instruction closed.
    PiEnd,
}

impl Event {
    /// The specification's bit-exact integer code for this event.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Event::Ok => 0,
            Event::ElemStart => 1,
            Event::Content => 2,
            Event::ElemEnd => 3,
            Event::AttrStart => 4,
            Event::AttrVal => 5,
            Event::AttrEnd => 6,
            Event::PiStart => 7,
            Event::PiContent => 8,
            Event::PiEnd => 9,
        }
    }
}

/// One of the five tokenizer failure kinds from the specification. Once
/// returned, the tokenizer must be considered poisoned: behaviour of
/// subsequent `feed` calls is undefined until a fresh `Tokenizer` is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// `eof()` was called while the machine was not in the post-root,
    /// whitespace-only trailing state.
    #[error("Unexpected EOF")]
    Eof,
    /// A `&...;` reference was oversized, unknown, or out of range.
    #[error("Invalid character or entity reference (&whatever;)")]
    Ref,
    /// A `</name>` closing tag didn't match the currently open element.
    #[error("Close tag does not match open tag (<Tag> .. </OtherTag>)")]
    Close,
    /// The scratch buffer would overflow.
    #[error("Stack overflow (too deeply nested tags or too long element/attribute name)")]
    Stack,
    /// The current byte is not accepted in the current state.
    #[error("Syntax error (unexpected byte)")]
    Syntax,
}

impl TokenizeError {
    /// The specification's bit-exact integer code for this error.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            TokenizeError::Eof => -5,
            TokenizeError::Ref => -4,
            TokenizeError::Close => -3,
            TokenizeError::Stack => -2,
            TokenizeError::Syntax => -1,
        }
    }
}

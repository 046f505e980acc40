//! `xmltok`: a streaming, byte-at-a-time XML tokenizer with a thin DOM on
//! top.
//!
//! The interesting part of this crate is [`Tokenizer`]: a non-recursive
//! Mealy machine driven one input byte at a time, backed entirely by a
//! caller-provided scratch buffer rather than heap allocation or call-stack
//! recursion — document nesting depth is bounded by that buffer's size, not
//! by the host stack. [`Document`] is the ordinary-Rust convenience layer
//! on top: it owns the scratch buffer, drives the tokenizer across a byte
//! slice, and records the resulting events into an [`Element`] tree.
//!
//! ```
//! use xmltok::Document;
//!
//! let mut doc = Document::new(4096);
//! assert!(doc.parse(br#"<stuff major="lol">hey</stuff>"#));
//! let root = doc.root().unwrap();
//! assert_eq!(root.tag_name(), b"stuff");
//! assert_eq!(root.get_attribute(b"major"), Some(&b"lol"[..]));
//! assert_eq!(root.text_content(), b"hey");
//! ```
//!
//! Reaching for the tokenizer directly is only worthwhile if you need the
//! raw event stream instead of a tree — [`Document`] is the right entry
//! point otherwise.

mod dom;
mod document;
pub mod error;
mod node;
pub mod tokenizer;

pub use document::Document;
pub use error::{DomError, Error, Result};
pub use node::{Attribute, Child, Element};
pub use tokenizer::{Event, TokenizeError, Tokenizer};

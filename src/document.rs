//! [`Document`]: the owner of the tokenizer's scratch buffer and the parsed
//! tree (spec.md §4.4/§6's collaborator, made concrete).
use crate::dom::Dom;
use crate::error::{DomError, Error, Result};
use crate::node::Element;
use crate::tokenizer::Tokenizer;
use std::io::Read;

/// An XML document: owns the scratch buffer the tokenizer nests names into,
/// drives a fresh [`Tokenizer`]/[`Dom`] pair across a byte slice on each
/// [`Document::parse`] call, and holds the resulting tree plus the
/// two-level error surface spec.md §4.4 describes.
///
/// Re-parsing discards whatever tree and error state a previous call left
/// behind — nothing is retried or merged, matching spec.md §7's propagation
/// policy ("nothing is retried").
#[derive(Debug)]
pub struct Document {
    scratch: Vec<u8>,
    root: Option<Element>,
    error: Option<DomError>,
}

impl Document {
    /// Creates an empty document backed by a scratch buffer of `scratch_size`
    /// bytes. This is the crate's only "configuration" surface (spec.md §2
    /// item 5): it simultaneously bounds element/attribute nesting depth and
    /// the longest single name, per the tokenizer's stack-bound property.
    ///
    /// The document starts in the "uninitialised" error state until the
    /// first successful `parse`.
    #[must_use]
    pub fn new(scratch_size: usize) -> Self {
        Self {
            scratch: vec![0; scratch_size],
            root: None,
            error: Some(DomError::Uninitialized),
        }
    }

    /// Parses `bytes` as a complete XML document, replacing any previously
    /// recorded tree and error state. Returns `true` on success.
    ///
    /// Drives the tokenizer one byte at a time, recording each event into a
    /// fresh [`Element`] tree (spec.md §4.4); halts and drops the partial
    /// tree on the tokenizer's first error, or if `eof` rejects the final
    /// state.
    pub fn parse(&mut self, bytes: &[u8]) -> bool {
        let mut tok = Tokenizer::new(&mut self.scratch);
        let mut dom = Dom::new();

        for &byte in bytes {
            match tok.feed(byte) {
                Ok(event) => dom.record(&tok, event),
                Err(source) => {
                    self.root = None;
                    self.error = Some(DomError::Tokenize {
                        source,
                        line: tok.line(),
                        column: tok.column(),
                    });
                    return false;
                }
            }
        }

        if let Err(source) = tok.eof() {
            self.root = None;
            self.error = Some(DomError::Tokenize {
                source,
                line: tok.line(),
                column: tok.column(),
            });
            return false;
        }

        self.root = dom.into_root();
        self.error = None;
        true
    }

    /// Reads `reader` to completion and parses it as a complete XML
    /// document. A convenience wrapper around [`Document::parse`]; any I/O
    /// failure is reported as [`Error::Io`] rather than through the DOM
    /// error surface, since it happens before the tokenizer sees a single
    /// byte.
    ///
    /// # Errors
    /// Returns `Err` only if reading `reader` fails; a malformed document
    /// still returns `Ok(false)` with [`Document::is_error`] set.
    pub fn parse_reader<R: Read>(&mut self, mut reader: R) -> Result<bool> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(Error::Io)?;
        Ok(self.parse(&bytes))
    }

    /// Whether the document is currently in an error state: either nothing
    /// has been parsed yet, or the most recent `parse` call failed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// A human-readable message for the current error state, or `None` if
    /// the most recent `parse` call succeeded.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    /// The root element of the most recently successful parse, or `None`.
    #[must_use]
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialised_before_first_parse() {
        let doc = Document::new(256);
        assert!(doc.is_error());
        assert!(doc.root().is_none());
    }

    #[test]
    fn scenario_nested_self_closing_siblings() {
        let mut doc = Document::new(4096);
        assert!(doc.parse(b"<?xml version=\"1.0\" encoding=\"UTF-8\" ?><root><test /><test/><test><inner></inner></test></root>"));
        assert!(!doc.is_error());
        let root = doc.root().unwrap();
        assert_eq!(root.tag_name(), b"root");
        assert_eq!(root.child_element_count(), 3);
        let third = root.element_children().nth(2).unwrap();
        assert_eq!(third.child_element_count(), 1);
    }

    #[test]
    fn scenario_text_content_across_siblings() {
        let mut doc = Document::new(4096);
        assert!(doc.parse(b"<html>This is text <p>lol</p>content</html>"));
        assert_eq!(doc.root().unwrap().text_content(), b"This is text lolcontent");
    }

    #[test]
    fn scenario_attribute_lookup() {
        let mut doc = Document::new(4096);
        assert!(doc.parse(b"<stuff major=\"lol\">hey</stuff>"));
        let root = doc.root().unwrap();
        assert_eq!(root.tag_name(), b"stuff");
        assert_eq!(root.get_attribute(b"major"), Some(&b"lol"[..]));
        assert_eq!(root.get_attribute(b"nope"), None);
        assert_eq!(root.text_content(), b"hey");
    }

    #[test]
    fn scenario_inner_html() {
        let mut doc = Document::new(4096);
        assert!(doc.parse(b"<html>This is innerHTML <b id=\"lol\">get</b> property</html>"));
        assert_eq!(
            doc.root().unwrap().inner_html(),
            b"This is innerHTML <b id=\"lol\">get</b> property".to_vec()
        );
    }

    #[test]
    fn scenario_xml_declaration_before_first_element() {
        let mut doc = Document::new(4096);
        assert!(doc.parse(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?><results><metric value=\"5.8\" /></results>"
        ));
        let root = doc.root().unwrap();
        let metric = root.element_children().next().unwrap();
        assert_eq!(metric.tag_name(), b"metric");
        assert_eq!(metric.get_attribute(b"value"), Some(&b"5.8"[..]));
    }

    #[test]
    fn scenario_mismatched_close_tag_reports_close_error() {
        let mut doc = Document::new(4096);
        assert!(!doc.parse(b"<a><b></c></a>"));
        assert!(doc.is_error());
        assert_eq!(
            doc.error_message().unwrap(),
            "Close tag does not match open tag (<Tag> .. </OtherTag>) at line 1, column 9"
        );
        assert!(doc.root().is_none());
    }

    #[test]
    fn reparsing_discards_previous_tree_and_error() {
        let mut doc = Document::new(4096);
        assert!(!doc.parse(b"<a><b></c></a>"));
        assert!(doc.is_error());
        assert!(doc.parse(b"<ok/>"));
        assert!(!doc.is_error());
        assert_eq!(doc.root().unwrap().tag_name(), b"ok");
    }

    #[test]
    fn stack_overflow_is_reported_as_a_dom_error() {
        let mut doc = Document::new(4);
        assert!(!doc.parse(b"<abc/>"));
        assert!(doc.is_error());
        assert!(doc.error_message().unwrap().contains("Stack overflow"));
    }
}

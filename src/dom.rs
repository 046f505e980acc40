//! The DOM recorder (spec.md §4.4): drives a [`Tokenizer`] one byte at a
//! time and records its events into an [`Element`] tree.
//!
//! This is deliberately the "mechanical event-to-tree accumulation" spec.md
//! §1 calls out as out of the interesting core — it does no validation of
//! its own beyond what the tokenizer already performs, and ignores the
//! events (`ATTREND`, `PISTART`, `PICONTENT`, `PIEND`) spec.md's table
//! marks as ignored by the default recorder.

use crate::node::{Child, Element};
use crate::tokenizer::{Event, Tokenizer};

/// Builds an [`Element`] tree by recording [`Tokenizer`] events.
///
/// `stack` holds the path of elements still open, root-to-leaf; the
/// innermost (last) entry is the one currently receiving children,
/// attributes, and text. Popping an entry either appends it to its new
/// last element (its parent) or, if the stack is now empty, becomes `root`.
pub(crate) struct Dom {
    root: Option<Element>,
    stack: Vec<Element>,
}

impl Dom {
    pub(crate) fn new() -> Self {
        Self { root: None, stack: Vec::new() }
    }

    /// Feeds one tokenizer event. `tok` must be the same tokenizer that
    /// just produced `event`, so its cursors/data window are still valid.
    pub(crate) fn record(&mut self, tok: &Tokenizer<'_>, event: Event) {
        match event {
            Event::ElemStart => {
                self.stack.push(Element::new(tok.element_name().to_vec()));
            }
            Event::ElemEnd => {
                if let Some(finished) = self.stack.pop() {
                    match self.stack.last_mut() {
                        Some(parent) => parent.push_child(Child::Element(Box::new(finished))),
                        None => self.root = Some(finished),
                    }
                }
            }
            Event::Content => {
                if let Some(current) = self.stack.last_mut() {
                    current.push_text(tok.data());
                }
            }
            Event::AttrStart => {
                if let Some(current) = self.stack.last_mut() {
                    current.push_attribute(tok.attr_name().to_vec());
                }
            }
            Event::AttrVal => {
                if let Some(current) = self.stack.last_mut() {
                    current.push_attr_value(tok.data());
                }
            }
            Event::AttrEnd | Event::PiStart | Event::PiContent | Event::PiEnd | Event::Ok => {}
        }
    }

    /// Consumes the recorder, returning the root element if one was ever
    /// closed (`None` if parsing failed before the root closed, or never
    /// ran at all).
    pub(crate) fn into_root(self) -> Option<Element> {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_all(input: &[u8]) -> Option<Element> {
        let mut scratch = [0u8; 4096];
        let mut tok = Tokenizer::new(&mut scratch);
        let mut dom = Dom::new();
        for &b in input {
            let event = tok.feed(b).expect("unexpected tokenizer error");
            dom.record(&tok, event);
        }
        tok.eof().expect("unexpected trailing input");
        dom.into_root()
    }

    #[test]
    fn builds_sibling_and_nested_children() {
        let root = record_all(
            b"<root><test /><test/><test><inner></inner></test></root>",
        )
        .unwrap();
        assert_eq!(root.tag_name(), b"root");
        assert_eq!(root.child_element_count(), 3);
        let third = root.element_children().nth(2).unwrap();
        assert_eq!(third.child_element_count(), 1);
        assert_eq!(third.element_children().next().unwrap().tag_name(), b"inner");
    }

    #[test]
    fn attribute_values_land_on_the_right_element() {
        let root = record_all(b"<stuff major=\"lol\">hey</stuff>").unwrap();
        assert_eq!(root.get_attribute(b"major"), Some(&b"lol"[..]));
        assert_eq!(root.text_content(), b"hey");
    }
}

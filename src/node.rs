//! The DOM recorder's tree types.
//!
//! [`Element`] and [`Attribute`] are plain owned structures: every byte
//! sequence is copied out of the tokenizer's scratch buffer as the
//! corresponding event arrives (see [`crate::dom`]), so nothing here borrows
//! from the parser or the input. No parent back-reference is stored on
//! [`Element`] itself — only the [`crate::dom::Dom`] recorder needs one
//! while a document is being built, and it keeps that as a stack of owned
//! nodes rather than a permanent link (spec.md §9's "self-referential
//! cursors" advice, applied to the tree as well as the tokenizer).

/// A child of an [`Element`]: either a nested element or a run of character
/// data.
///
/// Character data is lazily merged: consecutive `CONTENT` events (including
/// ones produced by CDATA sections and resolved references) accumulate into
/// a single `Text` child rather than one per tokenizer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// A nested element.
    Element(Box<Element>),
    /// A run of character content.
    Text(Vec<u8>),
}

/// An attribute on an [`Element`]: `name="value"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: Vec<u8>,
    value: Vec<u8>,
}

impl Attribute {
    pub(crate) fn new(name: Vec<u8>) -> Self {
        Self { name, value: Vec::new() }
    }

    pub(crate) fn push_value(&mut self, bytes: &[u8]) {
        self.value.extend_from_slice(bytes);
    }

    /// The attribute's name.
    #[must_use]
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// The attribute's value, with tab/LF already normalised to spaces and
    /// built-in/numeric references already resolved (spec.md §4.1
    /// "Attribute-value normalisation"). Multi-whitespace runs are *not*
    /// collapsed — that simplification is deliberate, not a bug.
    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

/// An element in the parsed tree: a tag name, its attributes, and its
/// ordered children (nested elements interleaved with merged text runs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: Vec<u8>,
    attributes: Vec<Attribute>,
    children: Vec<Child>,
}

impl Element {
    pub(crate) fn new(name: Vec<u8>) -> Self {
        Self { name, attributes: Vec::new(), children: Vec::new() }
    }

    pub(crate) fn push_child(&mut self, child: Child) {
        self.children.push(child);
    }

    /// Appends to the trailing `Text` child, creating one first if the
    /// previous sibling isn't text (spec.md §4.4's "creating one lazily").
    pub(crate) fn push_text(&mut self, bytes: &[u8]) {
        if let Some(Child::Text(buf)) = self.children.last_mut() {
            buf.extend_from_slice(bytes);
        } else {
            self.children.push(Child::Text(bytes.to_vec()));
        }
    }

    pub(crate) fn push_attribute(&mut self, name: Vec<u8>) {
        self.attributes.push(Attribute::new(name));
    }

    pub(crate) fn push_attr_value(&mut self, bytes: &[u8]) {
        if let Some(attr) = self.attributes.last_mut() {
            attr.push_value(bytes);
        }
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag_name(&self) -> &[u8] {
        &self.name
    }

    /// All direct children, in document order.
    #[must_use]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Direct children that are elements, in document order.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Child::Element(e) => Some(e.as_ref()),
            Child::Text(_) => None,
        })
    }

    /// The number of direct children that are elements.
    #[must_use]
    pub fn child_element_count(&self) -> usize {
        self.element_children().count()
    }

    /// This element's attributes, in the order they were parsed.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// The value of the first attribute named `name`, or `None`.
    #[must_use]
    pub fn get_attribute(&self, name: &[u8]) -> Option<&[u8]> {
        self.attributes
            .iter()
            .find(|a| a.name() == name)
            .map(Attribute::value)
    }

    /// The first direct child element named `name`, or `None`.
    #[must_use]
    pub fn child_with_tag(&self, name: &[u8]) -> Option<&Element> {
        self.element_children().find(|e| e.tag_name() == name)
    }

    /// All direct child elements named `name`, in document order.
    pub fn children_with_tag<'a>(&'a self, name: &'a [u8]) -> impl Iterator<Item = &'a Element> {
        self.element_children().filter(move |e| e.tag_name() == name)
    }

    /// The concatenation, in document order, of every descendant text run
    /// (spec.md §6: "concatenation of descendant content in document
    /// order").
    #[must_use]
    pub fn text_content(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut Vec<u8>) {
        for child in &self.children {
            match child {
                Child::Text(bytes) => out.extend_from_slice(bytes),
                Child::Element(e) => e.collect_text(out),
            }
        }
    }

    /// This element's children serialised back to XML-like bytes:
    /// `<tag attr="value" ...>...children...</tag>` for nested elements,
    /// raw bytes for text runs. Attribute values are quoted with `"`;
    /// nothing is escaped (spec.md §6 — a deliberate simplification carried
    /// over unchanged, not a bug to fix).
    #[must_use]
    pub fn inner_html(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for child in &self.children {
            match child {
                Child::Text(bytes) => out.extend_from_slice(bytes),
                Child::Element(e) => e.write_outer(&mut out),
            }
        }
        out
    }

    fn write_outer(&self, out: &mut Vec<u8>) {
        out.push(b'<');
        out.extend_from_slice(&self.name);
        for attr in &self.attributes {
            out.push(b' ');
            out.extend_from_slice(attr.name());
            out.extend_from_slice(b"=\"");
            out.extend_from_slice(attr.value());
            out.push(b'"');
        }
        out.push(b'>');
        for child in &self.children {
            match child {
                Child::Text(bytes) => out.extend_from_slice(bytes),
                Child::Element(e) => e.write_outer(out),
            }
        }
        out.extend_from_slice(b"</");
        out.extend_from_slice(&self.name);
        out.push(b'>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(name: &str) -> Element {
        Element::new(name.as_bytes().to_vec())
    }

    #[test]
    fn text_is_merged_across_pushes() {
        let mut e = el("p");
        e.push_text(b"hel");
        e.push_text(b"lo");
        assert_eq!(e.children().len(), 1);
        assert_eq!(e.text_content(), b"hello");
    }

    #[test]
    fn text_content_descends_through_children() {
        let mut inner = el("b");
        inner.push_text(b"lol");
        let mut root = el("html");
        root.push_text(b"This is text ");
        root.push_child(Child::Element(Box::new(inner)));
        root.push_text(b"content");
        assert_eq!(root.text_content(), b"This is text lolcontent");
    }

    #[test]
    fn inner_html_round_trips_attributes_without_escaping() {
        let mut inner = el("b");
        inner.push_attribute(b"id".to_vec());
        inner.push_attr_value(b"lol");
        inner.push_text(b"get");

        let mut root = el("html");
        root.push_text(b"This is innerHTML ");
        root.push_child(Child::Element(Box::new(inner)));
        root.push_text(b" property");

        assert_eq!(
            root.inner_html(),
            b"This is innerHTML <b id=\"lol\">get</b> property".to_vec()
        );
    }

    #[test]
    fn attribute_lookup_returns_first_match() {
        let mut e = el("stuff");
        e.push_attribute(b"major".to_vec());
        e.push_attr_value(b"lol");
        assert_eq!(e.get_attribute(b"major"), Some(&b"lol"[..]));
        assert_eq!(e.get_attribute(b"nope"), None);
    }

    #[test]
    fn child_with_tag_finds_first_match_only() {
        let mut root = el("root");
        root.push_child(Child::Element(Box::new(el("test"))));
        root.push_child(Child::Element(Box::new(el("test"))));
        assert_eq!(root.child_element_count(), 2);
        assert!(root.child_with_tag(b"test").is_some());
        assert_eq!(root.children_with_tag(b"test").count(), 2);
    }
}

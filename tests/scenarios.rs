//! End-to-end scenarios from spec.md §8, driven through the public
//! `Document`/`Tokenizer` surface rather than internals.
use xmltok::{Document, Event, TokenizeError, Tokenizer};

#[test]
fn three_siblings_with_a_grandchild() {
    let mut doc = Document::new(4096);
    assert!(doc.parse(
        br#"<?xml version="1.0" encoding="UTF-8" ?><root><test /><test/><test><inner></inner></test></root>"#
    ));
    let root = doc.root().unwrap();
    assert_eq!(root.tag_name(), b"root");
    assert_eq!(root.child_element_count(), 3);
    for child in root.element_children() {
        assert_eq!(child.tag_name(), b"test");
    }
    let third = root.element_children().nth(2).unwrap();
    assert_eq!(third.child_element_count(), 1);
    assert_eq!(third.element_children().next().unwrap().tag_name(), b"inner");
}

#[test]
fn text_content_concatenates_across_an_intervening_element() {
    let mut doc = Document::new(4096);
    assert!(doc.parse(b"<html>This is text <p>lol</p>content</html>"));
    assert_eq!(doc.root().unwrap().text_content(), b"This is text lolcontent");
}

#[test]
fn attribute_lookup_and_missing_attribute() {
    let mut doc = Document::new(4096);
    assert!(doc.parse(br#"<stuff major="lol">hey</stuff>"#));
    let root = doc.root().unwrap();
    assert_eq!(root.tag_name(), b"stuff");
    assert_eq!(root.get_attribute(b"major"), Some(&b"lol"[..]));
    assert_eq!(root.get_attribute(b"nope"), None);
    assert_eq!(root.text_content(), b"hey");
}

#[test]
fn inner_html_serialises_children_without_the_root_tag() {
    let mut doc = Document::new(4096);
    assert!(doc.parse(br#"<html>This is innerHTML <b id="lol">get</b> property</html>"#));
    assert_eq!(
        doc.root().unwrap().inner_html(),
        b"This is innerHTML <b id=\"lol\">get</b> property".to_vec()
    );
}

#[test]
fn xml_declaration_is_skipped_and_first_child_is_found() {
    let mut doc = Document::new(4096);
    assert!(doc.parse(
        br#"<?xml version="1.0" encoding="UTF-8"?><results><metric value="5.8" /></results>"#
    ));
    let metric = doc.root().unwrap().element_children().next().unwrap();
    assert_eq!(metric.tag_name(), b"metric");
    assert_eq!(metric.get_attribute(b"value"), Some(&b"5.8"[..]));
}

#[test]
fn mismatched_close_tag_fails_with_close_error() {
    let mut doc = Document::new(4096);
    assert!(!doc.parse(b"<a><b></c></a>"));
    assert!(doc.is_error());
    let message = doc.error_message().unwrap();
    assert!(message.starts_with("Close tag does not match open tag"));
}

#[test]
fn builtin_entities_round_trip() {
    for (input, expected) in [
        (&b"<a>&lt;</a>"[..], &b"<"[..]),
        (&b"<a>&gt;</a>"[..], &b">"[..]),
        (&b"<a>&amp;</a>"[..], &b"&"[..]),
        (&b"<a>&apos;</a>"[..], &b"'"[..]),
        (&b"<a>&quot;</a>"[..], &b"\""[..]),
    ] {
        let mut doc = Document::new(4096);
        assert!(doc.parse(input));
        assert_eq!(doc.root().unwrap().text_content(), expected);
    }
}

#[test]
fn numeric_references_decimal_hex_and_astral() {
    let mut doc = Document::new(4096);
    assert!(doc.parse(b"<a>&#65;</a>"));
    assert_eq!(doc.root().unwrap().text_content(), b"A");

    let mut doc = Document::new(4096);
    assert!(doc.parse(b"<a>&#x41;</a>"));
    assert_eq!(doc.root().unwrap().text_content(), b"A");

    let mut doc = Document::new(4096);
    assert!(doc.parse(b"<a>&#x10348;</a>"));
    assert_eq!(doc.root().unwrap().text_content(), [0xF0, 0x90, 0x8D, 0x88]);
}

#[test]
fn crlf_cr_and_lf_all_normalise_to_the_same_line_count() {
    for input in [&b"<a>x\r\ny</a>"[..], &b"<a>x\ry</a>"[..], &b"<a>x\ny</a>"[..]] {
        let mut scratch = [0u8; 256];
        let mut tok = Tokenizer::new(&mut scratch);
        for &b in input {
            tok.feed(b).unwrap();
        }
        assert!(tok.eof().is_ok());
        assert_eq!(tok.line(), 2);
    }
}

#[test]
fn bom_prefix_does_not_change_the_event_sequence() {
    let plain = b"<a/>";
    let with_bom = b"\xEF\xBB\xBF<a/>";

    // The BOM's own bytes are consumed silently (each produces `Event::Ok`,
    // same as any other no-op byte); idempotence means the *meaningful*
    // events afterwards are unaffected by its presence.
    let run = |input: &[u8]| {
        let mut scratch = [0u8; 256];
        let mut tok = Tokenizer::new(&mut scratch);
        let mut events = Vec::new();
        for &b in input {
            let event = tok.feed(b).unwrap();
            if event != Event::Ok {
                events.push(event);
            }
        }
        assert!(tok.eof().is_ok());
        events
    };

    assert_eq!(run(plain), run(with_bom));
}

#[test]
fn stack_bound_refuses_to_open_beyond_the_floor_formula() {
    // capacity 9 -> floor((9-1)/2) == 4 single-byte names deep.
    let mut scratch = [0u8; 9];
    let mut tok = Tokenizer::new(&mut scratch);
    for &b in b"<a><b><c><d>" {
        tok.feed(b).unwrap();
    }
    let result = tok.feed(b'<').and_then(|_| tok.feed(b'e'));
    assert_eq!(result, Err(TokenizeError::Stack));
}

#[test]
fn attribute_protocol_nests_correctly() {
    let mut scratch = [0u8; 256];
    let mut tok = Tokenizer::new(&mut scratch);
    let mut saw_attr_start_before_elem_start_completed = false;
    let mut open_attr = false;
    for &b in br#"<a x="1" y="2"/>"# {
        match tok.feed(b).unwrap() {
            Event::AttrStart => {
                assert!(!open_attr, "AttrStart while an attribute was already open");
                open_attr = true;
                saw_attr_start_before_elem_start_completed = true;
            }
            Event::AttrEnd => {
                assert!(open_attr, "AttrEnd without a matching AttrStart");
                open_attr = false;
            }
            _ => {}
        }
    }
    assert!(!open_attr);
    assert!(saw_attr_start_before_elem_start_completed);
}

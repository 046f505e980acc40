//! Document Parser Example
//!
//! This example demonstrates how to parse an XML document with `xmltok` and
//! walk the resulting tree.
use xmltok::Document;

const DOCUMENT: &str = include_str!("example.xml");

fn main() {
    //
    // The scratch buffer size is the only thing a caller configures: it
    // bounds both element/attribute nesting depth and the longest single
    // name (see `Document::new`'s docs). 4 KiB is comfortably large for a
    // document like this one.
    let mut document = Document::new(4096);

    //
    // `parse` never panics; a malformed document just returns `false` and
    // leaves the document in its error state, with a message like:
    //
    //     Close tag does not match open tag (<Tag> .. </OtherTag>) at line 7, column 11
    if !document.parse(DOCUMENT.as_bytes()) {
        panic!("error parsing XML document: {}", document.error_message().unwrap());
    }

    let root = document.root().expect("a successful parse always has a root");
    println!("root element: {}", String::from_utf8_lossy(root.tag_name()));

    if let Some(name) = root.get_attribute(b"name") {
        println!("bookstore name: {}", String::from_utf8_lossy(name));
    }

    for book in root.children_with_tag(b"book") {
        let title = book
            .child_with_tag(b"title")
            .map(|t| String::from_utf8_lossy(&t.text_content()).into_owned())
            .unwrap_or_default();
        let category = book.get_attribute(b"category").unwrap_or(b"unknown");
        println!("- {title} ({})", String::from_utf8_lossy(category));
    }
}

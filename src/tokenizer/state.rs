//! The tokenizer's named states.
//!
//! These map onto the specification's state families (`misc{0..3}`,
//! `le{0..3}`, `elem{0..3}`, `attr{0..4}`, `etag{0..2}`, `pi{0..4}`,
//! `cd{0..2}`, `comment{0..2}`, `dt{0..4}`, `string`, `enc{0..3}`,
//! `ver{0..3}`, `std{0..3}`, `xmldecl{0..6}`). A handful of the prose
//! specification's named sub-states turned out, once implemented, to be
//! unreachable refinements of a neighbouring state (e.g. `comment3`/
//! `comment4`, and a fixed 10-state `xmldecl` run that only ever needs 7
//! distinct dispatch points); those are folded into the states below rather
//! than kept as dead variants. See `DESIGN.md` for the full accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Start of document: BOM, leading whitespace, or the first `<`.
    Init,

    /// Before the XML declaration (only reachable once, at the very start).
    Misc0,
    /// After the XML declaration / prolog comments and PIs, root not yet open.
    Misc1,
    /// Inside the root element's character content.
    Misc2,
    /// Resolving a `&...;` reference inside character content.
    Misc2a,
    /// After the root element has closed (trailing whitespace/comments/PIs only).
    Misc3,

    /// `<` seen while in `Misc0` (prolog, XML decl still possible).
    Le0,
    /// `<` seen while in `Misc1` (prolog, XML decl no longer possible).
    Le1,
    /// `<` seen while in `Misc2` (inside root content).
    Le2,
    /// `<` seen while in `Misc3` (epilog).
    Le3,

    /// `<!` seen; disambiguating comment / DOCTYPE / CDATA.
    Lee1,
    /// `<!-` seen; expecting the second `-` of a comment opener.
    Lee2,

    /// `<?` seen; expecting the first byte of a PI/declaration target.
    Leq0,

    /// Reading an element or attribute's starting name byte-by-byte.
    Elem0,
    /// After an element name, expecting whitespace, `/`, or `>`.
    Elem1,
    /// After an attribute closed, expecting more attributes, `/`, or `>`.
    Elem2,
    /// `/` seen in a start tag; expecting `>` to self-close.
    Elem3,

    /// Reading an attribute name.
    Attr0,
    /// Whitespace after an attribute name, before `=`.
    Attr1,
    /// Whitespace after `=`, before the opening quote.
    Attr2,
    /// Inside a quoted attribute value.
    Attr3,
    /// Resolving a `&...;` reference inside an attribute value.
    Attr4,

    /// First byte of a `</name>` closing tag.
    Etag0,
    /// Remaining bytes of a `</name>` closing tag.
    Etag1,
    /// Trailing whitespace after `</name` before `>`.
    Etag2,

    /// First byte of a PI/declaration target was read; reading the rest.
    Pi0,
    /// Target complete; expecting whitespace before the body, or `?>`.
    Pi1,
    /// Reading the PI body.
    Pi2,
    /// A `?` was read inside or after the body; deciding if it closes the PI.
    Pi3,

    /// Reading a CDATA section body.
    Cd0,
    /// One `]` buffered; deciding if `]]>` follows.
    Cd1,
    /// Two `]]` buffered; deciding if `>` follows.
    Cd2,

    /// Reading a comment body.
    Comment0,
    /// One `-` buffered; deciding if `--` follows.
    Comment1,
    /// Two `--` buffered; a `>` must follow immediately.
    Comment2,

    /// `<!DOCTYPE` matched; expecting whitespace then the root name.
    Dt0,
    /// Reading the DOCTYPE root name.
    Dt1,
    /// After the root name: external ID tokens, `[`, or `>`.
    Dt2,
    /// Inside the `[ ... ]` internal subset.
    Dt3,
    /// Inside a quoted literal within the DOCTYPE declaration.
    Dt4,

    /// Matching the current byte against a literal ASCII string
    /// (`Tokenizer::lit`); on exhaustion, control passes to `Tokenizer::next_state`.
    Str,

    /// `encoding` keyword matched; expecting whitespace then `=`.
    Enc0,
    /// Expecting whitespace then the opening quote of the encoding value.
    Enc1,
    /// First byte of the encoding value (must be non-empty).
    Enc2,
    /// Remaining bytes of the encoding value.
    Enc3,

    /// `version` keyword matched; expecting `1`.
    Ver0,
    /// Expecting `.` after `1`.
    Ver1,
    /// Expecting the first minor-version digit.
    Ver2,
    /// Reading further minor-version digits, or the closing quote.
    Ver3,

    /// `standalone` keyword matched; expecting whitespace then `=`.
    Std0,
    /// Expecting whitespace then the opening quote of the standalone value.
    Std1,
    /// Dispatching on `y` (`yes`) or `n` (`no`).
    Std2,
    /// Expecting the closing quote after `yes`/`no`.
    Std3,

    /// `<?xml` matched; expecting whitespace then the `version` keyword.
    XmlDecl0,
    /// `version` keyword matched; expecting whitespace then `=`.
    XmlDecl1,
    /// Whitespace/`=` before the version's opening quote.
    XmlDecl2,
    /// After `version="1.N"`; dispatching on `encoding`, `standalone`, or the
    /// closing `?` (all three still possible).
    XmlDecl3,
    /// After `standalone="yes|no"`; only the closing `?` is valid.
    XmlDecl4,
    /// After `encoding="..."`; dispatching on `standalone` or the closing
    /// `?` (`encoding` may not repeat).
    XmlDecl5,
    /// A `?` was seen; `>` must follow to close the declaration.
    XmlDecl6,
}

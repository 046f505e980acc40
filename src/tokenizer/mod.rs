//! The byte-at-a-time XML tokenizer: a Mealy machine of `(state, byte) ->
//! (state', event)` with no recursion and no heap allocation on the hot
//! path. Nesting depth lives entirely in the caller-provided scratch buffer
//! ([`NameStack`]), not on the Rust call stack, so document depth is bounded
//! only by that buffer's size.

mod classify;
mod event;
mod refs;
mod stack;
mod state;

pub use event::{Event, TokenizeError};
pub use stack::NameStack;
pub use state::State;

/// Which quoted region a `&...;` reference is currently being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefTarget {
    Content,
    Attr,
}

/// Where a `<` was seen, and so what's legal to find after it and where
/// control resumes once the resulting construct (comment / PI / CDATA /
/// DOCTYPE) finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LtCtx {
    /// Before anything at all; a `<?xml` declaration is still possible.
    Prolog,
    /// Before the root element, declaration no longer possible.
    PostDecl,
    /// Inside the root element's content.
    Content,
    /// After the root element has closed.
    Epilog,
}

impl LtCtx {
    fn resume(self) -> State {
        match self {
            LtCtx::Prolog | LtCtx::PostDecl => State::Misc1,
            LtCtx::Content => State::Misc2,
            LtCtx::Epilog => State::Misc3,
        }
    }
}

/// A streaming, non-recursive XML tokenizer driven one byte at a time.
///
/// The name stack it's built on is caller-owned: no allocation happens
/// inside the tokenizer itself, which is what makes it usable from a
/// `no_std`-style fixed-memory caller (not that this crate targets `no_std`
/// directly, but the design carries over).
pub struct Tokenizer<'a> {
    stack: NameStack<'a>,
    state: State,
    /// Resume point after a nested or literal-matched construct finishes:
    /// the specification's `nextstate`.
    next_state: State,
    /// Return point for a quoted literal read inside a DOCTYPE declaration
    /// (distinct from `next_state`, which is reserved for "the declaration
    /// as a whole is done").
    dt_return: State,
    /// Remaining bytes to match against incoming input while in `State::Str`.
    lit: &'static [u8],
    /// The quote byte (`'"'` or `'\''`) that opened the current literal.
    quote: u8,
    /// A byte to silently swallow on the next call (CRLF collapsing); `0`
    /// means "nothing pending" (NUL itself can never reach here, see `feed`).
    ignore: u8,
    ref_target: RefTarget,
    refbuf: [u8; 7],
    reflen: u8,
    /// 1-based byte offset within the currently matched `</name>` tag.
    match_pos: usize,
    /// Whether a `<?xml` target at the current position may be recognised
    /// as the real XML declaration (only true for the very first `<` of
    /// the document).
    decl_allowed: bool,
    standalone_value: bool,

    line: u64,
    column: u64,
    offset: u64,

    elem: usize,
    attr: usize,
    pi: usize,

    data: [u8; 4],
    data_len: u8,
}

impl<'a> Tokenizer<'a> {
    /// Builds a tokenizer backed by `scratch`, which must be at least large
    /// enough to hold the deepest name ever pushed onto it (see
    /// [`NameStack`]'s stack-bound property).
    #[must_use]
    pub fn new(scratch: &'a mut [u8]) -> Self {
        Self {
            stack: NameStack::new(scratch),
            state: State::Init,
            next_state: State::Misc1,
            dt_return: State::Dt2,
            lit: &[],
            quote: 0,
            ignore: 0,
            ref_target: RefTarget::Content,
            refbuf: [0; 7],
            reflen: 0,
            match_pos: 0,
            decl_allowed: false,
            standalone_value: false,
            line: 1,
            column: 0,
            offset: 0,
            elem: 0,
            attr: 0,
            pi: 0,
            data: [0; 4],
            data_len: 0,
        }
    }

    /// Feeds a single byte of input, returning the event it produced.
    ///
    /// Once this returns `Err`, the tokenizer must not be fed further bytes;
    /// build a new one to recover.
    pub fn feed(&mut self, byte: u8) -> Result<Event, TokenizeError> {
        if byte == 0 {
            return Err(TokenizeError::Syntax);
        }
        self.offset += 1;
        match self.normalize_eol(byte) {
            Some(b) => self.dispatch(b),
            None => Ok(Event::Ok),
        }
    }

    /// Must be called once the input is exhausted. `Ok` iff the document
    /// closed its root element and nothing but trailing whitespace,
    /// comments, or PIs followed.
    pub fn eof(&self) -> Result<(), TokenizeError> {
        if self.state == State::Misc3 {
            Ok(())
        } else {
            Err(TokenizeError::Eof)
        }
    }

    #[must_use]
    pub fn line(&self) -> u64 {
        self.line
    }

    #[must_use]
    pub fn column(&self) -> u64 {
        self.column
    }

    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Valid from `ElemStart` until the matching `ElemEnd`.
    #[must_use]
    pub fn element_name(&self) -> &[u8] {
        self.stack.resolve(self.elem)
    }

    /// Valid from `AttrStart` until the matching `AttrEnd`.
    #[must_use]
    pub fn attr_name(&self) -> &[u8] {
        self.stack.resolve(self.attr)
    }

    /// Valid from `PiStart` until the matching `PiEnd`.
    #[must_use]
    pub fn pi_target(&self) -> &[u8] {
        self.stack.resolve(self.pi)
    }

    /// The chunk of content/attribute-value/PI-body data produced by the
    /// most recent `Content`, `AttrVal`, or `PiContent` event.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data[..self.data_len as usize]
    }

    fn set_data(&mut self, bytes: &[u8]) {
        self.data[..bytes.len()].copy_from_slice(bytes);
        self.data_len = bytes.len() as u8;
    }

    /// End-of-line normalisation per XML 1.0 §2.11: CRLF and bare CR both
    /// collapse to a single LF. Returns `None` when `byte` is the half of a
    /// CRLF pair that should be silently dropped.
    fn normalize_eol(&mut self, byte: u8) -> Option<u8> {
        if self.ignore != 0 && byte == self.ignore {
            self.ignore = 0;
            return None;
        }
        self.ignore = 0;
        let out = if byte == b'\r' {
            self.ignore = b'\n';
            self.line += 1;
            self.column = 0;
            b'\n'
        } else if byte == b'\n' {
            self.line += 1;
            self.column = 0;
            b'\n'
        } else {
            byte
        };
        self.column += 1;
        Some(out)
    }

    fn dispatch(&mut self, b: u8) -> Result<Event, TokenizeError> {
        use classify::{is_attr_value, is_char, is_enc_name, is_name, is_name_start, is_num, is_sp};
        use Event::Ok as Noop;

        match self.state {
            State::Init => {
                if b == 0xEF {
                    self.start_literal(&[0xBB, 0xBF], State::Misc0);
                    Ok(Noop)
                } else if is_sp(b) {
                    self.state = State::Misc0;
                    Ok(Noop)
                } else if b == b'<' {
                    self.state = State::Le0;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Misc0 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'<' {
                    self.state = State::Le0;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Misc1 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'<' {
                    self.state = State::Le1;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Misc2 => {
                if b == b'<' {
                    self.state = State::Le2;
                    Ok(Noop)
                } else if b == b'&' {
                    self.reflen = 0;
                    self.ref_target = RefTarget::Content;
                    self.state = State::Misc2a;
                    Ok(Noop)
                } else if is_char(b) {
                    self.set_data(&[b]);
                    Ok(Event::Content)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Misc2a => self.feed_reference(b),
            State::Misc3 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'<' {
                    self.state = State::Le3;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }

            State::Le0 => self.handle_lt(b, LtCtx::Prolog),
            State::Le1 => self.handle_lt(b, LtCtx::PostDecl),
            State::Le2 => self.handle_lt(b, LtCtx::Content),
            State::Le3 => self.handle_lt(b, LtCtx::Epilog),

            State::Lee1 => {
                if b == b'-' {
                    self.state = State::Lee2;
                    Ok(Noop)
                } else if b == b'D' && matches!(self.next_state, State::Misc1) {
                    self.start_literal(b"OCTYPE", State::Dt0);
                    Ok(Noop)
                } else if b == b'[' && matches!(self.next_state, State::Misc2) {
                    self.start_literal(b"CDATA[", State::Cd0);
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Lee2 => {
                if b == b'-' {
                    self.state = State::Comment0;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }

            State::Leq0 => {
                if is_name_start(b) {
                    let cursor = self.stack.push(b)?;
                    self.pi = cursor;
                    self.state = State::Pi0;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Pi0 => {
                if is_name(b) {
                    self.stack.push_cont(b)?;
                    Ok(Noop)
                } else if is_sp(b) || b == b'?' {
                    self.finish_pi_target(b)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Pi1 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'?' {
                    self.state = State::Pi3;
                    Ok(Noop)
                } else if is_char(b) {
                    self.set_data(&[b]);
                    self.state = State::Pi2;
                    Ok(Event::PiContent)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Pi2 => {
                if b == b'?' {
                    self.state = State::Pi3;
                    Ok(Noop)
                } else if is_char(b) {
                    self.set_data(&[b]);
                    Ok(Event::PiContent)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Pi3 => {
                if b == b'>' {
                    self.stack.pop();
                    self.pi = 0;
                    self.state = self.next_state;
                    Ok(Event::PiEnd)
                } else if is_char(b) {
                    self.set_data(&[b'?', b]);
                    self.state = State::Pi2;
                    Ok(Event::PiContent)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }

            State::Elem0 => {
                if is_name(b) {
                    self.stack.push_cont(b)?;
                    Ok(Noop)
                } else if is_sp(b) {
                    self.state = State::Elem1;
                    Ok(Event::ElemStart)
                } else if b == b'/' {
                    self.state = State::Elem3;
                    Ok(Event::ElemStart)
                } else if b == b'>' {
                    self.state = State::Misc2;
                    Ok(Event::ElemStart)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Elem1 | State::Elem2 => self.elem_attr_dispatch(b),
            State::Elem3 => {
                if b == b'>' {
                    self.close_element()
                } else {
                    Err(TokenizeError::Syntax)
                }
            }

            State::Attr0 => {
                if is_name(b) {
                    self.stack.push_cont(b)?;
                    Ok(Noop)
                } else if is_sp(b) {
                    self.state = State::Attr1;
                    Ok(Event::AttrStart)
                } else if b == b'=' {
                    self.state = State::Attr2;
                    Ok(Event::AttrStart)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Attr1 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'=' {
                    self.state = State::Attr2;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Attr2 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'"' || b == b'\'' {
                    self.quote = b;
                    self.state = State::Attr3;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Attr3 => {
                if b == self.quote {
                    self.stack.pop();
                    self.attr = 0;
                    self.state = State::Elem2;
                    Ok(Event::AttrEnd)
                } else if b == b'&' {
                    self.reflen = 0;
                    self.ref_target = RefTarget::Attr;
                    self.state = State::Attr4;
                    Ok(Noop)
                } else if b == b'\t' || b == b'\n' {
                    self.set_data(&[b' ']);
                    Ok(Event::AttrVal)
                } else if is_attr_value(b) {
                    self.set_data(&[b]);
                    Ok(Event::AttrVal)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Attr4 => self.feed_reference(b),

            State::Etag0 => {
                if is_name_start(b) {
                    let name = self.stack.resolve(self.elem);
                    if name.first() == Some(&b) {
                        self.match_pos = 1;
                        self.state = State::Etag1;
                        Ok(Noop)
                    } else {
                        Err(TokenizeError::Close)
                    }
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Etag1 => {
                let name = self.stack.resolve(self.elem);
                if is_name(b) {
                    if name.get(self.match_pos) == Some(&b) {
                        self.match_pos += 1;
                        Ok(Noop)
                    } else {
                        Err(TokenizeError::Close)
                    }
                } else if is_sp(b) {
                    if self.match_pos == name.len() {
                        self.state = State::Etag2;
                        Ok(Noop)
                    } else {
                        Err(TokenizeError::Close)
                    }
                } else if b == b'>' {
                    if self.match_pos == name.len() {
                        self.close_element()
                    } else {
                        Err(TokenizeError::Close)
                    }
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Etag2 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'>' {
                    self.close_element()
                } else {
                    Err(TokenizeError::Syntax)
                }
            }

            State::Cd0 => {
                if b == b']' {
                    self.state = State::Cd1;
                    Ok(Noop)
                } else if is_char(b) {
                    self.set_data(&[b]);
                    Ok(Event::Content)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Cd1 => {
                if b == b']' {
                    self.state = State::Cd2;
                    Ok(Noop)
                } else if is_char(b) {
                    self.set_data(&[b']', b]);
                    self.state = State::Cd0;
                    Ok(Event::Content)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Cd2 => {
                if b == b'>' {
                    self.state = self.next_state;
                    Ok(Noop)
                } else if b == b']' {
                    self.set_data(&[b']']);
                    Ok(Event::Content)
                } else if is_char(b) {
                    self.set_data(&[b']', b']', b]);
                    self.state = State::Cd0;
                    Ok(Event::Content)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }

            State::Comment0 => {
                if b == b'-' {
                    self.state = State::Comment1;
                    Ok(Noop)
                } else if is_char(b) {
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Comment1 => {
                if b == b'-' {
                    self.state = State::Comment2;
                    Ok(Noop)
                } else if is_char(b) {
                    self.state = State::Comment0;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Comment2 => {
                if b == b'>' {
                    self.state = self.next_state;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }

            State::Dt0 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if is_name_start(b) {
                    self.state = State::Dt1;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Dt1 => {
                if is_name(b) {
                    Ok(Noop)
                } else if is_sp(b) {
                    self.state = State::Dt2;
                    Ok(Noop)
                } else if b == b'[' {
                    self.state = State::Dt3;
                    Ok(Noop)
                } else if b == b'>' {
                    self.state = self.next_state;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Dt2 => {
                if is_sp(b) || is_name(b) {
                    Ok(Noop)
                } else if b == b'[' {
                    self.state = State::Dt3;
                    Ok(Noop)
                } else if b == b'"' || b == b'\'' {
                    self.quote = b;
                    self.dt_return = State::Dt2;
                    self.state = State::Dt4;
                    Ok(Noop)
                } else if b == b'>' {
                    self.state = self.next_state;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Dt3 => {
                if b == b']' {
                    self.state = State::Dt2;
                    Ok(Noop)
                } else if b == b'"' || b == b'\'' {
                    self.quote = b;
                    self.dt_return = State::Dt3;
                    self.state = State::Dt4;
                    Ok(Noop)
                } else if is_char(b) {
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Dt4 => {
                if b == self.quote {
                    self.state = self.dt_return;
                    Ok(Noop)
                } else if is_char(b) {
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }

            State::Str => {
                let (&want, rest) = self.lit.split_first().ok_or(TokenizeError::Syntax)?;
                if b != want {
                    return Err(TokenizeError::Syntax);
                }
                self.lit = rest;
                if self.lit.is_empty() {
                    self.state = self.next_state;
                }
                Ok(Noop)
            }

            State::Enc0 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'=' {
                    self.state = State::Enc1;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Enc1 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'"' || b == b'\'' {
                    self.quote = b;
                    self.state = State::Enc2;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Enc2 => {
                if b == self.quote {
                    Err(TokenizeError::Syntax)
                } else if is_enc_name(b) {
                    self.state = State::Enc3;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Enc3 => {
                if b == self.quote {
                    self.state = State::XmlDecl5;
                    Ok(Noop)
                } else if is_enc_name(b) {
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }

            State::Ver0 => {
                if b == b'1' {
                    self.state = State::Ver1;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Ver1 => {
                if b == b'.' {
                    self.state = State::Ver2;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Ver2 => {
                if is_num(b) {
                    self.state = State::Ver3;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Ver3 => {
                if is_num(b) {
                    Ok(Noop)
                } else if b == self.quote {
                    self.state = State::XmlDecl3;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }

            State::Std0 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'=' {
                    self.state = State::Std1;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Std1 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'"' || b == b'\'' {
                    self.quote = b;
                    self.state = State::Std2;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Std2 => {
                if b == b'y' {
                    self.standalone_value = true;
                    self.start_literal(b"es", State::Std3);
                    Ok(Noop)
                } else if b == b'n' {
                    self.standalone_value = false;
                    self.start_literal(b"o", State::Std3);
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::Std3 => {
                if b == self.quote {
                    self.state = State::XmlDecl4;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }

            State::XmlDecl0 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'v' {
                    self.start_literal(b"ersion", State::XmlDecl1);
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::XmlDecl1 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'=' {
                    self.state = State::XmlDecl2;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::XmlDecl2 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'"' || b == b'\'' {
                    self.quote = b;
                    self.state = State::Ver0;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::XmlDecl3 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'e' {
                    self.start_literal(b"ncoding", State::Enc0);
                    Ok(Noop)
                } else if b == b's' {
                    self.start_literal(b"tandalone", State::Std0);
                    Ok(Noop)
                } else if b == b'?' {
                    self.state = State::XmlDecl6;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::XmlDecl4 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b'?' {
                    self.state = State::XmlDecl6;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::XmlDecl5 => {
                if is_sp(b) {
                    Ok(Noop)
                } else if b == b's' {
                    self.start_literal(b"tandalone", State::Std0);
                    Ok(Noop)
                } else if b == b'?' {
                    self.state = State::XmlDecl6;
                    Ok(Noop)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
            State::XmlDecl6 => {
                if b == b'>' {
                    self.state = self.next_state;
                    Ok(Event::Ok)
                } else {
                    Err(TokenizeError::Syntax)
                }
            }
        }
    }

    fn handle_lt(&mut self, b: u8, ctx: LtCtx) -> Result<Event, TokenizeError> {
        match b {
            b'?' => {
                self.decl_allowed = ctx == LtCtx::Prolog;
                self.next_state = ctx.resume();
                self.state = State::Leq0;
                Ok(Event::Ok)
            }
            b'!' => {
                self.next_state = ctx.resume();
                self.state = State::Lee1;
                Ok(Event::Ok)
            }
            b'/' => {
                if ctx != LtCtx::Content {
                    return Err(TokenizeError::Syntax);
                }
                self.match_pos = 0;
                self.state = State::Etag0;
                Ok(Event::Ok)
            }
            _ if classify::is_name_start(b) => {
                if ctx == LtCtx::Epilog {
                    return Err(TokenizeError::Syntax);
                }
                let cursor = self.stack.push(b)?;
                self.elem = cursor;
                self.state = State::Elem0;
                Ok(Event::Ok)
            }
            _ => Err(TokenizeError::Syntax),
        }
    }

    fn elem_attr_dispatch(&mut self, b: u8) -> Result<Event, TokenizeError> {
        if classify::is_sp(b) {
            Ok(Event::Ok)
        } else if classify::is_name_start(b) {
            let cursor = self.stack.push(b)?;
            self.attr = cursor;
            self.state = State::Attr0;
            Ok(Event::Ok)
        } else if b == b'/' {
            self.state = State::Elem3;
            Ok(Event::Ok)
        } else if b == b'>' {
            self.state = State::Misc2;
            Ok(Event::Ok)
        } else {
            Err(TokenizeError::Syntax)
        }
    }

    fn close_element(&mut self) -> Result<Event, TokenizeError> {
        self.stack.pop();
        self.elem = self.stack.top();
        self.state = if self.stack.len() == 0 {
            State::Misc3
        } else {
            State::Misc2
        };
        Ok(Event::ElemEnd)
    }

    fn start_literal(&mut self, lit: &'static [u8], resume: State) {
        self.lit = lit;
        self.next_state = resume;
        self.state = State::Str;
    }

    /// Shared accumulate-then-resolve logic for `&...;` references, used by
    /// both character content (`Misc2a`) and attribute values (`Attr4`).
    fn feed_reference(&mut self, b: u8) -> Result<Event, TokenizeError> {
        if b == b';' {
            let (bytes, len) = refs::resolve(&self.refbuf[..self.reflen as usize])?;
            self.set_data(&bytes[..len]);
            match self.ref_target {
                RefTarget::Content => {
                    self.state = State::Misc2;
                    Ok(Event::Content)
                }
                RefTarget::Attr => {
                    self.state = State::Attr3;
                    Ok(Event::AttrVal)
                }
            }
        } else if classify::is_ref(b) && (self.reflen as usize) < self.refbuf.len() {
            self.refbuf[self.reflen as usize] = b;
            self.reflen += 1;
            Ok(Event::Ok)
        } else {
            Err(TokenizeError::Ref)
        }
    }

    /// The PI/declaration target name is complete (terminated by whitespace
    /// or an immediate `?`). Decides whether it's the genuine XML
    /// declaration, a reserved-but-illegal impersonation of one, or an
    /// ordinary processing instruction.
    fn finish_pi_target(&mut self, terminator: u8) -> Result<Event, TokenizeError> {
        let target = self.stack.resolve(self.pi).to_vec();
        let is_xml_like = target.eq_ignore_ascii_case(b"xml");
        if is_xml_like {
            if self.decl_allowed && target == b"xml" {
                self.stack.pop();
                self.pi = 0;
                self.state = State::XmlDecl0;
                if terminator == b'?' {
                    return self.dispatch(terminator);
                }
                Ok(Event::Ok)
            } else {
                Err(TokenizeError::Syntax)
            }
        } else {
            self.state = if terminator == b'?' { State::Pi3 } else { State::Pi1 };
            Ok(Event::PiStart)
        }
    }
}

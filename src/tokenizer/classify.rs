//! Byte-level character classifiers used by the state machine.
//!
//! Each predicate operates on a single already-widened byte (0..=255) and
//! mirrors one of the named predicates from the specification: `isSP`,
//! `isAlpha`, `isNum`, `isHex`, `isEncName`, `isNameStart`, `isName`,
//! `isAttValue`, `isRef`, `isChar`.

/// XML whitespace: space, tab, CR, LF.
#[inline]
#[must_use]
pub fn is_sp(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// ASCII letters.
#[inline]
#[must_use]
pub fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// ASCII digits.
#[inline]
#[must_use]
pub fn is_num(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Hex digits, for `&#xN;` references.
#[inline]
#[must_use]
pub fn is_hex(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Bytes allowed inside an `encoding="..."` value: letters, digits, `.`, `_`, `-`.
#[inline]
#[must_use]
pub fn is_enc_name(b: u8) -> bool {
    is_alpha(b) || is_num(b) || matches!(b, b'.' | b'_' | b'-')
}

/// Bytes that may start an element/attribute/PI-target name.
///
/// ASCII letters, `_`, `:`, and any non-ASCII byte (treated as an opaque
/// UTF-8 continuation/lead byte — this crate performs no Unicode-aware name
/// validation beyond that, matching the distilled specification).
#[inline]
#[must_use]
pub fn is_name_start(b: u8) -> bool {
    is_alpha(b) || b == b'_' || b == b':' || b >= 0x80
}

/// Bytes that may continue (but not start) a name: start-bytes plus digits,
/// `-`, and `.`.
#[inline]
#[must_use]
pub fn is_name(b: u8) -> bool {
    is_name_start(b) || is_num(b) || matches!(b, b'-' | b'.')
}

/// Bytes allowed verbatim inside a quoted attribute value (i.e. not the
/// quote character, not `<`, not `&`; those are handled by the state
/// machine directly). This predicate covers "everything else", including
/// tab/LF which get normalised to a single space by the caller.
#[inline]
#[must_use]
pub fn is_attr_value(b: u8) -> bool {
    b != b'<' && b != b'&' && is_char(b)
}

/// Bytes allowed inside a `&...;` reference body (name or numeric digits).
#[inline]
#[must_use]
pub fn is_ref(b: u8) -> bool {
    is_alpha(b) || is_num(b) || b == b'#'
}

/// Any byte acceptable as XML character data. XML 1.0 forbids the C0
/// control range except tab/CR/LF; NUL is already rejected earlier in the
/// pipeline, so this predicate only needs to reject the remaining C0 range.
#[inline]
#[must_use]
pub fn is_char(b: u8) -> bool {
    b >= 0x20 || matches!(b, b'\t' | b'\r' | b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace() {
        assert!(is_sp(b' '));
        assert!(is_sp(b'\t'));
        assert!(is_sp(b'\r'));
        assert!(is_sp(b'\n'));
        assert!(!is_sp(b'a'));
    }

    #[test]
    fn name_classes() {
        assert!(is_name_start(b'a'));
        assert!(is_name_start(b'_'));
        assert!(is_name_start(b':'));
        assert!(!is_name_start(b'0'));
        assert!(is_name(b'0'));
        assert!(is_name(b'-'));
        assert!(is_name(b'.'));
        assert!(!is_name(b' '));
    }

    #[test]
    fn control_bytes_rejected() {
        assert!(!is_char(0x00));
        assert!(!is_char(0x01));
        assert!(is_char(b'\t'));
        assert!(is_char(b'\n'));
        assert!(is_char(b'\r'));
        assert!(is_char(b' '));
    }

    #[test]
    fn attr_value_excludes_markup() {
        assert!(!is_attr_value(b'<'));
        assert!(!is_attr_value(b'&'));
        assert!(is_attr_value(b'"'));
        assert!(is_attr_value(b'\''));
    }
}

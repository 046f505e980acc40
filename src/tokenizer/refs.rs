//! Resolution of `&...;` character references (the five built-in named
//! entities, plus decimal and hexadecimal numeric references) to their
//! UTF-8 encoding.

use super::event::TokenizeError;

/// Resolves the bytes between `&` and `;` (exclusive) to a UTF-8 byte
/// sequence. Returns the encoded bytes and how many of them are valid.
pub fn resolve(body: &[u8]) -> Result<([u8; 4], usize), TokenizeError> {
    if body.is_empty() {
        return Err(TokenizeError::Ref);
    }
    if body[0] == b'#' {
        resolve_numeric(&body[1..])
    } else {
        resolve_named(body)
    }
}

fn resolve_named(name: &[u8]) -> Result<([u8; 4], usize), TokenizeError> {
    let ch = match name {
        b"lt" => b'<',
        b"gt" => b'>',
        b"amp" => b'&',
        b"apos" => b'\'',
        b"quot" => b'"',
        _ => return Err(TokenizeError::Ref),
    };
    Ok(([ch, 0, 0, 0], 1))
}

fn resolve_numeric(digits: &[u8]) -> Result<([u8; 4], usize), TokenizeError> {
    let scalar = match digits.split_first() {
        Some((b'x' | b'X', hex)) => parse_radix(hex, 16)?,
        _ => parse_radix(digits, 10)?,
    };
    if scalar == 0
        || scalar > 0x0010_FFFF
        || scalar == 0xFFFE
        || scalar == 0xFFFF
        || (0xD800..=0xDFFF).contains(&scalar)
    {
        return Err(TokenizeError::Ref);
    }
    let ch = char::from_u32(scalar).ok_or(TokenizeError::Ref)?;
    let mut buf = [0u8; 4];
    let len = ch.encode_utf8(&mut buf).len();
    Ok((buf, len))
}

fn parse_radix(digits: &[u8], radix: u32) -> Result<u32, TokenizeError> {
    if digits.is_empty() {
        return Err(TokenizeError::Ref);
    }
    let mut value: u32 = 0;
    for &b in digits {
        let digit = (b as char).to_digit(radix).ok_or(TokenizeError::Ref)?;
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or(TokenizeError::Ref)?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(body: &[u8]) -> String {
        let (buf, len) = resolve(body).unwrap();
        String::from_utf8(buf[..len].to_vec()).unwrap()
    }

    #[test]
    fn builtin_entities() {
        assert_eq!(resolved(b"lt"), "<");
        assert_eq!(resolved(b"gt"), ">");
        assert_eq!(resolved(b"amp"), "&");
        assert_eq!(resolved(b"apos"), "'");
        assert_eq!(resolved(b"quot"), "\"");
    }

    #[test]
    fn decimal_and_hex_numeric() {
        assert_eq!(resolved(b"#65"), "A");
        assert_eq!(resolved(b"#x41"), "A");
        assert_eq!(resolved(b"#x10348"), "\u{10348}");
    }

    #[test]
    fn rejects_invalid_scalars() {
        assert!(resolve(b"#0").is_err());
        assert!(resolve(b"#xD800").is_err());
        assert!(resolve(b"#xFFFE").is_err());
        assert!(resolve(b"#x110000").is_err());
        assert!(resolve(b"bogus").is_err());
        assert!(resolve(b"").is_err());
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
enum EscapeErrorKind {
    ExpectedSurrogatePair(String),
    InvalidEscapeCharacter(char),
    InvalidSurrogatePair(u16, u16),
    InvalidUnicodeEscape(String),
    UnexpectedEndOfString,
}

#[derive(Debug, PartialEq, Eq)]
pub struct EscapeError {
    kind: EscapeErrorKind,
}

impl std::error::Error for EscapeError {}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EscapeErrorKind::*;
        match &self.kind {
            ExpectedSurrogatePair(low) => write!(
                f,
                "expected a UTF-16 surrogate pair, but got {} as the low word",
                low
            ),
            InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{}", chr),
            InvalidSurrogatePair(high, low) => {
                write!(f, "invalid surrogate pair: \\u{:04X}\\u{:04X}", high, low)
            }
            InvalidUnicodeEscape(escape) => write!(f, "invalid JSON Unicode escape: \\u{}", escape),
            UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

impl From<EscapeErrorKind> for EscapeError {
    fn from(kind: EscapeErrorKind) -> Self {
        Self { kind }
    }
}

/// Escapes a string for embedding in a JSON string value.
pub fn escape_string(value: &str) -> Cow<str> {
    match value.find(|c: char| c < '\u{20}' || c == '"' || c == '\\') {
        None => Cow::Borrowed(value),
        Some(first) => {
            let mut escaped = String::with_capacity(value.len() + 8);
            escaped.push_str(&value[..first]);
            for chr in value[first..].chars() {
                match chr {
                    '"' => escaped.push_str("\\\""),
                    '\\' => escaped.push_str("\\\\"),
                    '\u{08}' => escaped.push_str("\\b"),
                    '\u{0C}' => escaped.push_str("\\f"),
                    '\n' => escaped.push_str("\\n"),
                    '\r' => escaped.push_str("\\r"),
                    '\t' => escaped.push_str("\\t"),
                    '\u{00}'..='\u{1F}' => {
                        escaped.push_str(&format!("\\u{:04x}", chr as u32));
                    }
                    _ => escaped.push(chr),
                }
            }
            Cow::Owned(escaped)
        }
    }
}

/// Unescapes a JSON-escaped string.
/// If there are no escape sequences, it directly returns the reference.
pub fn unescape_string(value: &str) -> Result<Cow<str>, EscapeError> {
    let first = match value.find('\\') {
        None => return Ok(Cow::Borrowed(value)),
        Some(index) => index,
    };
    let mut unescaped = String::with_capacity(value.len());
    unescaped.push_str(&value[..first]);

    let mut rest = &value[first..];
    while let Some(index) = rest.find('\\') {
        unescaped.push_str(&rest[..index]);
        rest = &rest[index + 1..];
        let escape = rest
            .chars()
            .next()
            .ok_or(EscapeErrorKind::UnexpectedEndOfString)?;
        rest = &rest[escape.len_utf8()..];
        match escape {
            '\\' => unescaped.push('\\'),
            '/' => unescaped.push('/'),
            '"' => unescaped.push('"'),
            'b' => unescaped.push('\u{08}'),
            'f' => unescaped.push('\u{0C}'),
            'n' => unescaped.push('\n'),
            'r' => unescaped.push('\r'),
            't' => unescaped.push('\t'),
            'u' => {
                let (chr, consumed) = read_unicode_escape(rest)?;
                unescaped.push(chr);
                rest = &rest[consumed..];
            }
            other => return Err(EscapeErrorKind::InvalidEscapeCharacter(other).into()),
        }
    }
    unescaped.push_str(rest);
    Ok(Cow::Owned(unescaped))
}

fn read_hex_word(rest: &str) -> Result<u16, EscapeError> {
    let word = rest
        .get(0..4)
        .ok_or(EscapeErrorKind::UnexpectedEndOfString)?;
    // from_str_radix would otherwise accept a leading `+`
    if !word.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EscapeErrorKind::InvalidUnicodeEscape(word.into()).into());
    }
    u16::from_str_radix(word, 16).map_err(|_| EscapeErrorKind::InvalidUnicodeEscape(word.into()).into())
}

/// Reads the hex digits following `\u`, and the low word when the first is a high surrogate.
/// Returns the character along with how many bytes after the `u` were consumed.
fn read_unicode_escape(rest: &str) -> Result<(char, usize), EscapeError> {
    let high = read_hex_word(rest)?;
    if high & 0xFC00 != 0xD800 {
        let chr = std::char::from_u32(high as u32)
            .ok_or_else(|| EscapeErrorKind::InvalidUnicodeEscape(rest[0..4].into()))?;
        return Ok((chr, 4));
    }
    let low_escape = rest.get(4..10).ok_or(EscapeErrorKind::UnexpectedEndOfString)?;
    if !low_escape.starts_with("\\u") {
        return Err(EscapeErrorKind::ExpectedSurrogatePair(low_escape.into()).into());
    }
    let low = read_hex_word(&low_escape[2..])?;
    if low & 0xFC00 != 0xDC00 {
        return Err(EscapeErrorKind::InvalidSurrogatePair(high, low).into());
    }
    let codepoint = 0x10000 + (high as u32 - 0xD800) * 0x400 + (low as u32 - 0xDC00);
    let chr = std::char::from_u32(codepoint).ok_or(EscapeErrorKind::InvalidSurrogatePair(high, low))?;
    Ok((chr, 10))
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape_string, EscapeErrorKind};
    use std::borrow::Cow;

    #[test]
    fn escape() {
        assert_eq!("", escape_string("").as_ref());
        assert_eq!("foo", escape_string("foo").as_ref());
        assert_eq!("foo\\r\\nbar", escape_string("foo\r\nbar").as_ref());
        assert_eq!(r#"\\foobar"#, escape_string(r#"\foobar"#).as_ref());
        assert_eq!(
            r#"\bf\fo\to\r\n"#,
            escape_string("\u{08}f\u{0C}o\to\r\n").as_ref()
        );
        assert_eq!("\\\"s3://bucket\\\"", escape_string("\"s3://bucket\"").as_ref());
        assert_eq!("\\u0000", escape_string("\u{0}").as_ref());
        assert_eq!("\\u001f", escape_string("\u{1f}").as_ref());
        assert_eq!("caf\u{e9}\\n", escape_string("caf\u{e9}\n").as_ref());
    }

    #[test]
    fn unescape_no_escapes() {
        let unescaped = unescape_string("Assets per revision").unwrap();
        assert_eq!("Assets per revision", unescaped);
        assert!(matches!(unescaped, Cow::Borrowed(_)));
    }

    #[test]
    fn unescape() {
        assert_eq!(
            "\x08f\x0Co\to\r\n",
            unescape_string(r#"\bf\fo\to\r\n"#).unwrap()
        );
        assert_eq!("\"test\"", unescape_string(r#"\"test\""#).unwrap());
        assert_eq!("a/b", unescape_string(r#"a\/b"#).unwrap());
        assert_eq!("\x00", unescape_string("\\u0000").unwrap());
        assert_eq!("\u{e9}t\u{e9}", unescape_string("\\u00e9t\\u00E9").unwrap());
        assert_eq!("\u{10437}", unescape_string("\\uD801\\uDC37").unwrap());

        assert_eq!(
            Err(EscapeErrorKind::UnexpectedEndOfString.into()),
            unescape_string("\\")
        );
        assert_eq!(
            Err(EscapeErrorKind::UnexpectedEndOfString.into()),
            unescape_string("\\u00")
        );
        assert_eq!(
            Err(EscapeErrorKind::InvalidEscapeCharacter('z').into()),
            unescape_string("\\z")
        );
        assert_eq!(
            Err(EscapeErrorKind::InvalidUnicodeEscape("+00A".into()).into()),
            unescape_string("\\u+00A")
        );
        assert_eq!(
            Err(EscapeErrorKind::ExpectedSurrogatePair("abcdef".into()).into()),
            unescape_string("\\uD801abcdef")
        );
        assert_eq!(
            Err(EscapeErrorKind::InvalidSurrogatePair(0xD801, 0x0041).into()),
            unescape_string("\\uD801\\u0041")
        );
        assert_eq!(
            Err(EscapeErrorKind::InvalidUnicodeEscape("DC37".into()).into()),
            unescape_string("\\uDC37")
        );
    }

    use proptest::proptest;
    proptest! {
        #[test]
        fn matches_serde_json(s in ".*") {
            assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!(r#""{}""#, escape_string(&s))
            )
        }

        #[test]
        fn unescape_inverts_escape(s in ".*") {
            assert_eq!(s.as_str(), unescape_string(&escape_string(&s)).unwrap());
        }
    }
}

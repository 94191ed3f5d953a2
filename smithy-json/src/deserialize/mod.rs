/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserialize::error::ErrorReason::*;
use smithy_types::Number;

mod error;
pub mod token;

pub use error::{Error, ErrorReason};
pub use token::{EscapeError, EscapedStr, Offset, Token};

/// Returns an Iterator of `Result<Token, Error>` over a slice of bytes.
///
/// Several top-level values may follow one another; iteration ends when the input is exhausted
/// outside of any object or array. Malformed input produces an error, after which the iterator
/// is fused.
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: Vec::new(),
        failed: false,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
}

/// Pull tokenizer for JSON documents, created by [`json_token_iter`].
pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
    failed: bool,
}

impl<'a> JsonTokenIterator<'a> {
    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    fn discard_whitespace(&mut self) {
        while let Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') = self.peek_byte() {
            self.index += 1;
        }
    }

    fn error_at(&self, offset: usize, reason: ErrorReason) -> Error {
        Error::new(reason, Some(offset))
    }

    fn unexpected(&self, expected: &'static str) -> Error {
        match self.peek_byte() {
            Some(byte) => self.error_at(self.index, UnexpectedToken(byte as char, expected)),
            None => self.error_at(self.index, UnexpectedEos),
        }
    }

    fn replace_state(&mut self, state: State) {
        if let Some(top) = self.state_stack.last_mut() {
            *top = state;
        }
    }

    fn read_value(&mut self) -> Result<Token<'a>, Error> {
        let offset = Offset(self.index);
        match self.peek_byte() {
            Some(b'{') => {
                self.index += 1;
                self.state_stack.push(State::ObjectFirstKeyOrEnd);
                Ok(Token::StartObject { offset })
            }
            Some(b'[') => {
                self.index += 1;
                self.state_stack.push(State::ArrayFirstValueOrEnd);
                Ok(Token::StartArray { offset })
            }
            Some(b'"') => Ok(Token::ValueString {
                offset,
                value: self.read_string()?,
            }),
            Some(b'n') => {
                self.read_literal(b"null")?;
                Ok(Token::ValueNull { offset })
            }
            Some(b't') => {
                self.read_literal(b"true")?;
                Ok(Token::ValueBool {
                    offset,
                    value: true,
                })
            }
            Some(b'f') => {
                self.read_literal(b"false")?;
                Ok(Token::ValueBool {
                    offset,
                    value: false,
                })
            }
            Some(b'-') | Some(b'0'..=b'9') => Ok(Token::ValueNumber {
                offset,
                value: self.read_number()?,
            }),
            _ => Err(self.unexpected("'{', '[', '\"', 'null', 'true', 'false', <number>")),
        }
    }

    fn read_literal(&mut self, literal: &'static [u8]) -> Result<(), Error> {
        if self.input[self.index..].starts_with(literal) {
            self.index += literal.len();
            Ok(())
        } else {
            Err(self.error_at(
                self.index,
                ExpectedLiteral(String::from_utf8_lossy(literal).into()),
            ))
        }
    }

    /// Reads a string starting at the opening quote. The returned value is still escaped.
    fn read_string(&mut self) -> Result<EscapedStr<'a>, Error> {
        let start = self.index + 1;
        let mut end = start;
        loop {
            match self.input.get(end) {
                None => return Err(self.error_at(end, UnexpectedEos)),
                Some(b'"') => break,
                Some(b'\\') => end += 2,
                Some(&byte) if byte < 0x20 => {
                    return Err(self.error_at(end, UnexpectedControlCharacter(byte)))
                }
                Some(_) => end += 1,
            }
        }
        let input: &'a [u8] = self.input;
        let value = std::str::from_utf8(&input[start..end])
            .map_err(|err| self.error_at(start, err.into()))?;
        self.index = end + 1;
        Ok(EscapedStr::new(value))
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.index;
        while let Some(b'0'..=b'9') = self.peek_byte() {
            self.index += 1;
        }
        self.index - start
    }

    /// Consumes `-? (0 | [1-9][0-9]*) (.[0-9]+)? ([eE][+-]?[0-9]+)?`
    fn scan_number(&mut self) -> Option<()> {
        if self.peek_byte() == Some(b'-') {
            self.index += 1;
        }
        match self.peek_byte() {
            Some(b'0') => self.index += 1,
            Some(b'1'..=b'9') => {
                self.skip_digits();
            }
            _ => return None,
        }
        if self.peek_byte() == Some(b'.') {
            self.index += 1;
            if self.skip_digits() == 0 {
                return None;
            }
        }
        if let Some(b'e') | Some(b'E') = self.peek_byte() {
            self.index += 1;
            if let Some(b'+') | Some(b'-') = self.peek_byte() {
                self.index += 1;
            }
            if self.skip_digits() == 0 {
                return None;
            }
        }
        match self.peek_byte() {
            Some(b'0'..=b'9') | Some(b'.') | Some(b'e') | Some(b'E') | Some(b'+')
            | Some(b'-') => None,
            _ => Some(()),
        }
    }

    fn read_number(&mut self) -> Result<Number, Error> {
        let start = self.index;
        let invalid = || Error::new(InvalidNumber, Some(start));
        self.scan_number().ok_or_else(invalid)?;
        let text = std::str::from_utf8(&self.input[start..self.index]).map_err(|_| invalid())?;
        let is_float = text.contains(|c: char| c == '.' || c == 'e' || c == 'E');
        let parse_float = || match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Number::Float(value)),
            _ => Err(invalid()),
        };
        if is_float {
            parse_float()
        } else if text.starts_with('-') {
            text.parse::<i64>()
                .map(Number::NegInt)
                .or_else(|_| parse_float())
        } else {
            text.parse::<u64>()
                .map(Number::PosInt)
                .or_else(|_| parse_float())
        }
    }

    fn read_object_key(&mut self) -> Result<Token<'a>, Error> {
        let offset = Offset(self.index);
        if self.peek_byte() != Some(b'"') {
            return Err(self.unexpected("'\"'"));
        }
        let key = self.read_string()?;
        self.discard_whitespace();
        if self.peek_byte() != Some(b':') {
            return Err(self.unexpected("':'"));
        }
        self.index += 1;
        Ok(Token::ObjectKey { offset, key })
    }

    fn read_next(&mut self) -> Option<Result<Token<'a>, Error>> {
        self.discard_whitespace();
        let state = match self.state_stack.last() {
            Some(state) => *state,
            None if self.index >= self.input.len() => return None,
            None => return Some(self.read_value()),
        };
        if self.index >= self.input.len() {
            return Some(Err(self.error_at(self.index, UnexpectedEos)));
        }
        let offset = Offset(self.index);
        let token = match (state, self.peek_byte()) {
            (State::ArrayFirstValueOrEnd, Some(b']'))
            | (State::ArrayNextValueOrEnd, Some(b']')) => {
                self.index += 1;
                self.state_stack.pop();
                Ok(Token::EndArray { offset })
            }
            (State::ArrayFirstValueOrEnd, _) => {
                self.replace_state(State::ArrayNextValueOrEnd);
                self.read_value()
            }
            (State::ArrayNextValueOrEnd, Some(b',')) => {
                self.index += 1;
                self.discard_whitespace();
                self.read_value()
            }
            (State::ArrayNextValueOrEnd, _) => Err(self.unexpected("']', ','")),
            (State::ObjectFirstKeyOrEnd, Some(b'}'))
            | (State::ObjectNextKeyOrEnd, Some(b'}')) => {
                self.index += 1;
                self.state_stack.pop();
                Ok(Token::EndObject { offset })
            }
            (State::ObjectFirstKeyOrEnd, _) => {
                self.replace_state(State::ObjectFieldValue);
                self.read_object_key()
            }
            (State::ObjectNextKeyOrEnd, Some(b',')) => {
                self.index += 1;
                self.discard_whitespace();
                self.replace_state(State::ObjectFieldValue);
                self.read_object_key()
            }
            (State::ObjectNextKeyOrEnd, _) => Err(self.unexpected("'}', ','")),
            (State::ObjectFieldValue, _) => {
                self.replace_state(State::ObjectNextKeyOrEnd);
                self.read_value()
            }
        };
        Some(token)
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.read_next();
        if let Some(Err(_)) = result {
            self.failed = true;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::error::{Error, ErrorReason::*};
    use super::json_token_iter;
    use crate::deserialize::token::test::{
        end_array, end_object, object_key, start_array, start_object, value_bool, value_null,
        value_number, value_string,
    };
    use proptest::prelude::*;
    use smithy_types::Number;

    #[test]
    fn test_empty() {
        assert_eq!(None, json_token_iter(b"").next());
        assert_eq!(None, json_token_iter(b" \t\r\n").next());
    }

    #[test]
    fn test_empty_object() {
        let mut iter = json_token_iter(b"{ }");
        assert_eq!(start_object(0), iter.next());
        assert_eq!(end_object(2), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_empty_array() {
        let mut iter = json_token_iter(b"[]");
        assert_eq!(start_array(0), iter.next());
        assert_eq!(end_array(1), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_scalars() {
        assert_eq!(value_null(1), json_token_iter(b" null ").next());
        assert_eq!(value_bool(0, true), json_token_iter(b"true").next());
        assert_eq!(value_bool(0, false), json_token_iter(b"false").next());
        assert_eq!(
            value_string(0, "Assets per revision"),
            json_token_iter(br#""Assets per revision""#).next()
        );
        assert_eq!(
            value_string(0, r#"esc\"aped"#),
            json_token_iter(br#""esc\"aped""#).next()
        );
    }

    #[test]
    fn test_numbers() {
        let number = |input: &'static [u8]| json_token_iter(input).next();
        assert_eq!(value_number(0, Number::PosInt(5)), number(b"5"));
        assert_eq!(value_number(0, Number::NegInt(-5)), number(b"-5"));
        assert_eq!(value_number(0, Number::Float(1.5)), number(b"1.5"));
        assert_eq!(value_number(0, Number::Float(1e10)), number(b"1e10"));
        assert_eq!(value_number(0, Number::Float(-2.5e-3)), number(b"-2.5E-3"));
        assert_eq!(
            value_number(0, Number::Float(18446744073709551616.0)),
            number(b"18446744073709551616")
        );
        assert_eq!(Some(Err(Error::new(InvalidNumber, Some(0)))), number(b"-"));
        assert_eq!(Some(Err(Error::new(InvalidNumber, Some(0)))), number(b"1e999"));
        assert_eq!(value_number(0, Number::PosInt(0)), number(b"0"));
        assert_eq!(value_number(0, Number::Float(0.5)), number(b"0.5"));
        assert_eq!(value_number(0, Number::Float(-1e2)), number(b"-1e+2"));
    }

    #[test]
    fn non_json_numerals_are_rejected() {
        for input in &[
            &b"01"[..],
            b"-01",
            b"1.",
            b"1.e5",
            b"-.5",
            b"1e",
            b"1e+",
            b"1.5.2",
            b"1-2",
            b"--1",
        ] {
            assert_eq!(
                Some(Err(Error::new(InvalidNumber, Some(0)))),
                json_token_iter(input).next(),
                "{}",
                String::from_utf8_lossy(input)
            );
        }
        let mut iter = json_token_iter(br#"{"bitrate": 012}"#);
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(1, "bitrate"), iter.next());
        assert_eq!(Some(Err(Error::new(InvalidNumber, Some(12)))), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_object_with_nested_values() {
        let mut iter = json_token_iter(
            br#"{"Bucket": "b", "Size": 12.5, "Finalized": true, "Errors": [null, {}]}"#,
        );
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(1, "Bucket"), iter.next());
        assert_eq!(value_string(11, "b"), iter.next());
        assert_eq!(object_key(16, "Size"), iter.next());
        assert_eq!(value_number(24, Number::Float(12.5)), iter.next());
        assert_eq!(object_key(30, "Finalized"), iter.next());
        assert_eq!(value_bool(43, true), iter.next());
        assert_eq!(object_key(49, "Errors"), iter.next());
        assert_eq!(start_array(59), iter.next());
        assert_eq!(value_null(60), iter.next());
        assert_eq!(start_object(66), iter.next());
        assert_eq!(end_object(67), iter.next());
        assert_eq!(end_array(68), iter.next());
        assert_eq!(end_object(69), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_errors() {
        let first_error = |input: &[u8]| {
            json_token_iter(input)
                .find_map(|token| token.err())
                .expect("input should fail to tokenize")
        };
        assert_eq!(
            Error::new(UnexpectedEos, Some(1)),
            first_error(b"[")
        );
        assert_eq!(
            Error::new(UnexpectedEos, Some(5)),
            first_error(br#""open"#)
        );
        assert_eq!(
            Error::new(UnexpectedToken('2', "']', ','"), Some(3)),
            first_error(b"[1 2]")
        );
        assert_eq!(
            Error::new(UnexpectedToken(':', "'\"'"), Some(1)),
            first_error(b"{:1}")
        );
        assert_eq!(
            Error::new(UnexpectedToken('1', "':'"), Some(5)),
            first_error(br#"{"a" 1}"#)
        );
        assert_eq!(
            Error::new(ExpectedLiteral("null".into()), Some(0)),
            first_error(b"nul")
        );
        assert_eq!(
            Error::new(UnexpectedControlCharacter(b'\n'), Some(2)),
            first_error(b"\"a\nb\"")
        );
        assert_eq!(
            Error::new(InvalidUtf8, Some(1)),
            first_error(b"\"\xff\"")
        );
    }

    #[test]
    fn fused_after_error() {
        let mut iter = json_token_iter(b"[1 2] true");
        assert_eq!(start_array(0), iter.next());
        assert_eq!(value_number(1, Number::PosInt(1)), iter.next());
        assert!(matches!(iter.next(), Some(Err(_))));
        assert_eq!(None, iter.next());
    }

    proptest! {
        #[test]
        fn string_tokens_match_serde_json(s in ".*") {
            let json = serde_json::to_string(&s).unwrap();
            let token = json_token_iter(json.as_bytes()).next().unwrap().unwrap();
            match token {
                super::Token::ValueString { value, .. } => {
                    prop_assert_eq!(value.to_unescaped().unwrap(), s.as_str())
                }
                other => prop_assert!(false, "unexpected token {:?}", other),
            }
        }

        #[test]
        fn integer_tokens(value: i64) {
            let text = value.to_string();
            let expected = if value < 0 { Number::NegInt(value) } else { Number::PosInt(value as u64) };
            prop_assert_eq!(value_number(0, expected), json_token_iter(text.as_bytes()).next());
        }
    }
}

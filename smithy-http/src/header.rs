/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for reading and writing HTTP headers

use http::header::{HeaderName, HeaderValue};
use std::convert::TryFrom;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
#[error("failed to parse header `{header}`")]
pub struct ParseError {
    header: String,
}

impl ParseError {
    fn new(header: &str) -> Self {
        ParseError {
            header: header.to_string(),
        }
    }
}

/// Read many comma / header delimited values from HTTP headers for `FromStr` types
pub fn read_many<T>(headers: &http::HeaderMap, key: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
{
    let mut out = vec![];
    for header in headers.get_all(key).iter() {
        let header = header.to_str().map_err(|_| ParseError::new(key))?;
        for value in header.split(',') {
            out.push(T::from_str(value.trim()).map_err(|_| ParseError::new(key))?);
        }
    }
    Ok(out)
}

/// Read exactly one or none from a headers iterator
///
/// This function does not perform comma splitting like `read_many`
pub fn one_or_none<T>(headers: &http::HeaderMap, key: &str) -> Result<Option<T>, ParseError>
where
    T: FromStr,
{
    let mut values = headers.get_all(key).iter();
    let first = match values.next() {
        Some(value) => value,
        None => return Ok(None),
    };
    if values.next().is_some() {
        return Err(ParseError::new(key));
    }
    let value = first.to_str().map_err(|_| ParseError::new(key))?;
    T::from_str(value.trim())
        .map(Some)
        .map_err(|_| ParseError::new(key))
}

/// Sets `key` on the request builder unless a value is already present.
pub fn set_header_if_absent<V>(
    request: http::request::Builder,
    key: HeaderName,
    value: V,
) -> http::request::Builder
where
    HeaderValue: TryFrom<V>,
    <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
{
    if !request
        .headers_ref()
        .map(|map| map.contains_key(&key))
        .unwrap_or(false)
    {
        request.header(key, value)
    } else {
        request
    }
}

#[cfg(test)]
mod test {
    use super::{one_or_none, read_many, set_header_if_absent, ParseError};
    use http::header::CONTENT_TYPE;

    #[test]
    fn read_many_splits_on_commas() {
        let request = http::Request::builder()
            .header("x-ids", "1, 2,3")
            .header("x-ids", "4")
            .body(())
            .unwrap();
        let ids: Vec<u32> = read_many(request.headers(), "x-ids").unwrap();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(
            read_many::<u32>(request.headers(), "x-missing").unwrap(),
            Vec::<u32>::new()
        );
        let request = http::Request::builder()
            .header("x-ids", "1,a")
            .body(())
            .unwrap();
        assert_eq!(
            read_many::<u32>(request.headers(), "x-ids"),
            Err(ParseError::new("x-ids"))
        );
    }

    #[test]
    fn one_or_none_rejects_repeats() {
        let request = http::Request::builder()
            .header("x-amzn-requestid", "abc")
            .header("x-twice", "1")
            .header("x-twice", "2")
            .body(())
            .unwrap();
        assert_eq!(
            one_or_none::<String>(request.headers(), "x-amzn-requestid").unwrap(),
            Some("abc".to_string())
        );
        assert_eq!(
            one_or_none::<String>(request.headers(), "x-absent").unwrap(),
            None
        );
        assert!(one_or_none::<String>(request.headers(), "x-twice").is_err());
    }

    #[test]
    fn set_if_absent_keeps_existing() {
        let builder = http::Request::builder().header(CONTENT_TYPE, "text/plain");
        let builder = set_header_if_absent(builder, CONTENT_TYPE, "application/json");
        let request = builder.body(()).unwrap();
        assert_eq!(request.headers()[CONTENT_TYPE], "text/plain");

        let builder = set_header_if_absent(http::Request::builder(), CONTENT_TYPE, "application/json");
        assert_eq!(builder.body(()).unwrap().headers()[CONTENT_TYPE], "application/json");
    }
}

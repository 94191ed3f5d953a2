/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for writing Smithy values into a query string.
//!
//! Formatting values into the query string as specified in
//! [httpQuery](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httpquery-trait)

use crate::label::UNRESERVED;
use percent_encoding::utf8_percent_encode;

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), UNRESERVED).to_string()
}

pub fn fmt_integer(value: i64) -> String {
    value.to_string()
}

/// Appends `key=value` pairs to a URI, starting the query string on first use.
///
/// Keys and values are written as given; encode them with [`fmt_string`] first.
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        let prefix = if out.contains('?') { '&' } else { '?' };
        Writer { out, prefix }
    }

    pub fn push_kv(&mut self, k: &str, v: &str) {
        self.out.push(self.prefix);
        self.out.push_str(k);
        self.out.push('=');
        self.out.push_str(v);
        self.prefix = '&';
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_integer, fmt_string, Writer};

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=").as_str(), "%26%3D");
        assert_eq!(fmt_integer(-25), "-25");
    }

    #[test]
    fn writer_starts_and_continues_query() {
        let mut uri = String::from("/v1/jobs");
        let mut writer = Writer::new(&mut uri);
        writer.push_kv("dataSetId", &fmt_string("ds 1"));
        writer.push_kv("maxResults", &fmt_integer(10));
        assert_eq!(uri, "/v1/jobs?dataSetId=ds%201&maxResults=10");

        let mut uri = String::from("/tags/arn?existing=1");
        Writer::new(&mut uri).push_kv("tagKeys", "a");
        assert_eq!(uri, "/tags/arn?existing=1&tagKeys=a");
    }
}

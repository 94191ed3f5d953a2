/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as Smithy
//! [httpLabel](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httplabel-trait)

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters is encoded
pub(crate) const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const GREEDY: &AsciiSet = &UNRESERVED.remove(b'/');

/// Percent-encodes `value` for substitution into a URI path segment.
///
/// Greedy labels may span several segments, so `/` is left as is.
pub fn fmt_string<T: AsRef<str>>(value: T, greedy: bool) -> String {
    let set = if greedy { GREEDY } else { UNRESERVED };
    utf8_percent_encode(value.as_ref(), set).to_string()
}

#[cfg(test)]
mod test {
    use crate::label::fmt_string;

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(fmt_string("a-b_c.d~e", false), "a-b_c.d~e");
        assert_eq!(
            fmt_string("arn:aws:dataexchange:us-east-1:123456789012:data-sets/abc", false),
            "arn%3Aaws%3Adataexchange%3Aus-east-1%3A123456789012%3Adata-sets%2Fabc"
        );
        assert_eq!(fmt_string("my queue", false), "my%20queue");
        assert_eq!(fmt_string("caf\u{e9}", false), "caf%C3%A9");
    }

    #[test]
    fn greedy_keeps_slashes() {
        assert_eq!(fmt_string("path/to my/key", true), "path/to%20my/key");
    }
}

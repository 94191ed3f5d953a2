/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::assert_json_eq_no_panic;
use http::{Request, Uri};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("missing query param: expected `{expected}`, found {found:?}")]
    MissingQueryParam {
        expected: String,
        found: Vec<String>,
    },
    #[error("forbidden query param present: `{expected}`")]
    ForbiddenQueryParam { expected: String },
    #[error("required query param missing: `{expected}`")]
    RequiredQueryParam { expected: String },

    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("header `{forbidden}` was not expected but was present with value `{found}`")]
    ForbiddenHeader { forbidden: String, found: String },

    #[error("body did not match. Hint:\n{hint}")]
    BodyDidNotMatch { expected: String, found: String, hint: String },
    #[error("expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

#[derive(Eq, PartialEq, Hash)]
struct QueryParam<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> QueryParam<'a> {
    fn parse(s: &'a str) -> Self {
        let mut parsed = s.splitn(2, '=');
        QueryParam {
            key: parsed.next().unwrap_or_default(),
            value: parsed.next(),
        }
    }
}

fn extract_params(uri: &Uri) -> HashSet<&str> {
    uri.query()
        .unwrap_or_default()
        .split('&')
        .filter(|param| !param.is_empty())
        .collect()
}

fn extract_keys(uri: &Uri) -> HashSet<&str> {
    extract_params(uri)
        .iter()
        .map(|param| QueryParam::parse(param).key)
        .collect()
}

pub fn validate_query_string<B>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_params = extract_params(request.uri());
    for param in expected_params {
        if !actual_params.contains(param) {
            return Err(ProtocolTestFailure::MissingQueryParam {
                expected: param.to_string(),
                found: actual_params.iter().map(|s| s.to_string()).collect(),
            });
        }
    }
    Ok(())
}

pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys = extract_keys(request.uri());
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::ForbiddenQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn require_query_params<B>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys = extract_keys(request.uri());
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::RequiredQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

fn header_value<B>(request: &Request<B>, key: &str) -> String {
    // Protocol tests store header lists as comma-delimited
    request
        .headers()
        .get_all(key)
        .iter()
        .map(|hv| String::from_utf8_lossy(hv.as_bytes()).into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value = header_value(request, key);
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
                found: header_value(request, key),
            });
        }
    }
    Ok(())
}

pub fn require_headers<B>(
    request: &Request<B>,
    required_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in required_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// Json media types are deserialized and compared
    Json,
    /// Other media types are compared literally
    Other,
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        match inp.as_ref() {
            "application/json" => MediaType::Json,
            _ => MediaType::Other,
        }
    }
}

/// Validate a request body against an expected body
///
/// JSON bodies are compared structurally so that key order and whitespace don't matter.
pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let actual_body = String::from_utf8_lossy(actual_body.as_ref());
    match media_type {
        MediaType::Json => try_json_eq(&actual_body, expected_body),
        MediaType::Other => {
            if actual_body == expected_body {
                Ok(())
            } else {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    expected: expected_body.to_string(),
                    found: actual_body.to_string(),
                    hint: "bodies are compared byte for byte".to_string(),
                })
            }
        }
    }
}

fn try_json_eq(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let expected_json: serde_json::Value =
        serde_json::from_str(expected).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{} (expected body)", e),
        })?;
    let actual_json: serde_json::Value =
        serde_json::from_str(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{}: {}", e, actual),
        })?;
    assert_json_eq_no_panic(&actual_json, &expected_json).map_err(|hint| {
        ProtocolTestFailure::BodyDidNotMatch {
            expected: expected.to_string(),
            found: actual.to_string(),
            hint,
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_headers, forbid_query_params, require_headers, require_query_params,
        validate_body, validate_headers, validate_query_string, MediaType, ProtocolTestFailure,
    };
    use http::Request;

    #[test]
    fn test_validate_empty_query_string() {
        let request = Request::builder().uri("/foo").body(()).unwrap();
        validate_query_string(&request, &[]).expect("no required params should pass");
        validate_query_string(&request, &["a"])
            .err()
            .expect("no params provided");
    }

    #[test]
    fn test_validate_query_string() {
        let request = Request::builder()
            .uri("/v1/jobs?dataSetId=a%20b&maxResults=10&flag")
            .body(())
            .unwrap();
        validate_query_string(&request, &["maxResults=10"]).expect("in the query string");
        validate_query_string(&request, &["flag", "dataSetId=a%20b"])
            .expect("both params are in the query string");
        validate_query_string(&request, &[]).expect("no required params should pass");

        validate_query_string(&request, &["maxResults"]).expect_err("no parameter should match");
        validate_query_string(&request, &["maxResults=1"]).expect_err("no parameter should match");
        validate_query_string(&request, &["dataSetId=a%20"]).expect_err("no parameter should match");
    }

    #[test]
    fn test_forbid_query_param() {
        let request = Request::builder()
            .uri("/v1/jobs?dataSetId=a&flag")
            .body(())
            .unwrap();
        forbid_query_params(&request, &["dataSetId"]).expect_err("dataSetId is a query param");
        forbid_query_params(&request, &["nextToken"]).expect("query param not included");
        forbid_query_params(&request, &["dataSetId=a"]).expect("should be matching against keys");
        forbid_query_params(&request, &["flag"]).expect_err("flag is a query param");
    }

    #[test]
    fn test_require_query_param() {
        let request = Request::builder()
            .uri("/v1/jobs?dataSetId=a&flag")
            .body(())
            .unwrap();
        require_query_params(&request, &["dataSetId"]).expect("dataSetId is a query param");
        require_query_params(&request, &["nextToken"]).expect_err("query param not included");
        require_query_params(&request, &["dataSetId=a"]).expect_err("should be matching against keys");
        require_query_params(&request, &["flag"]).expect("flag is a query param");
    }

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_forbid_and_require_headers() {
        let request = Request::builder()
            .uri("/")
            .header("Content-Type", "application/json")
            .body(())
            .unwrap();
        require_headers(&request, &["content-type"]).expect("header present");
        require_headers(&request, &["x-amz-date"]).expect_err("header missing");
        forbid_headers(&request, &["x-amz-date"]).expect("header missing");
        assert_eq!(
            forbid_headers(&request, &["Content-Type"]),
            Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: "Content-Type".to_owned(),
                found: "application/json".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"Name": "set", "AssetType": "S3_SNAPSHOT", "Tags": {"a": "b"}}"#;
        let actual = r#"{"AssetType":"S3_SNAPSHOT","Name":"set","Tags":{"a":"b"}}"#;
        validate_body(actual, expected, MediaType::Json).expect("key order is ignored");
        validate_body(r#"{"Name":"other"}"#, expected, MediaType::Json)
            .expect_err("bodies differ");
        match validate_body("{not json", expected, MediaType::from("application/json")) {
            Err(ProtocolTestFailure::InvalidBodyFormat { .. }) => {}
            other => panic!("expected invalid format, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_other_body() {
        validate_body(b"abc", "abc", MediaType::Other).expect("same bytes");
        validate_body(b"abc ", "abc", MediaType::from("text/plain")).expect_err("trailing space");
    }
}

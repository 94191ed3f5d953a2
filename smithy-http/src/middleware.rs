/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This modules defines the core, framework agnostic, HTTP middleware interface
//! used by the clients

use crate::operation;
use crate::response::ParseHttpResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::{Buf, Bytes};
use http_body::Body;
use std::error::Error;
use tracing::{debug, trace};

type BoxError = Box<dyn Error + Send + Sync>;

/// [`MapRequest`] defines a synchronous middleware that transforms an [`operation::Request`].
///
/// Typically, these middleware will read configuration from the `PropertyBag` and use it to
/// augment the request. Endpoint resolution is expressed as `MapRequest`.
///
/// ```rust
/// # use smithy_http::middleware::MapRequest;
/// # use std::convert::Infallible;
/// # use smithy_http::operation;
/// use http::header::{HeaderName, HeaderValue};
/// struct AddHeader(HeaderName, HeaderValue);
/// /// Signaling struct added to the request property bag if a header should be added
/// struct NeedsHeader;
/// impl MapRequest for AddHeader {
///     type Error = Infallible;
///     fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
///         request.augment(|mut request, properties| {
///             if properties.get::<NeedsHeader>().is_some() {
///                 request.headers_mut().append(
///                     self.0.clone(),
///                     self.1.clone(),
///                 );
///             }
///             Ok(request)
///         })
///     }
/// }
/// ```
pub trait MapRequest {
    /// The Error type returned by this operation.
    ///
    /// If this middleware never fails use [std::convert::Infallible] or similar.
    type Error: Into<BoxError>;

    /// Apply this middleware to a request.
    ///
    /// Typically, implementations will use [`request.augment`](crate::operation::Request::augment)
    /// to be able to transform an owned `http::Request`.
    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error>;
}

/// Load a response using `handler` to parse the results.
///
/// Success and failure will be split and mapped into `SdkSuccess` and `SdkError`; the raw
/// response comes back with the body that was read.
/// Generic Parameters:
/// - `B`: The Response Body
/// - `O`: The Http response handler that returns `Result<T, E>`
/// - `T`/`E`: `Result<T, E>` returned by `handler`.
pub async fn load_response<B, T, E, O>(
    mut response: http::Response<B>,
    handler: &O,
) -> Result<SdkSuccess<T, Bytes>, SdkError<E, Bytes>>
where
    B: http_body::Body + Unpin,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, E>>,
{
    if let Some(parsed_response) = handler.parse_unloaded(&mut response) {
        trace!(response = ?response.status(), "read unloaded response");
        return sdk_result(parsed_response, response.map(|_| Bytes::new()));
    }

    let body = match read_body(response.body_mut()).await {
        Ok(body) => body,
        Err(err) => {
            return Err(SdkError::ResponseError {
                raw: response.map(|_| Bytes::new()),
                err: err.into(),
            });
        }
    };

    let response = response.map(|_| Bytes::from(body));
    debug!(status = %response.status(), len = response.body().len(), "loaded response body");
    let parsed = handler.parse_loaded(&response);
    sdk_result(parsed, response)
}

async fn read_body<B: http_body::Body + Unpin>(body: &mut B) -> Result<Vec<u8>, B::Error> {
    let mut output = Vec::new();
    while let Some(buf) = body.data().await {
        let mut buf = buf?;
        while buf.has_remaining() {
            output.extend_from_slice(buf.chunk());
            buf.advance(buf.chunk().len())
        }
    }
    Ok(output)
}

/// Convert a `Result<T, E>` into an `SdkResult` that includes the raw HTTP response
fn sdk_result<T, E>(
    parsed: Result<T, E>,
    raw: http::Response<Bytes>,
) -> Result<SdkSuccess<T, Bytes>, SdkError<E, Bytes>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(err) => Err(SdkError::ServiceError { raw, err }),
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::middleware::{load_response, MapRequest};
    use crate::operation;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;
    use std::convert::Infallible;

    struct StatusIsSuccess;
    impl ParseStrictResponse for StatusIsSuccess {
        type Output = Result<String, u16>;
        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(String::from_utf8_lossy(response.body()).into_owned())
            } else {
                Err(response.status().as_u16())
            }
        }
    }

    #[tokio::test]
    async fn loads_body_then_parses() {
        let response = http::Response::builder()
            .status(200)
            .body(SdkBody::from(r#"{"Id":"job"}"#))
            .unwrap();
        let success = load_response(response, &StatusIsSuccess)
            .await
            .expect("success");
        assert_eq!(success.parsed, r#"{"Id":"job"}"#);
        assert_eq!(success.raw.body().as_ref(), br#"{"Id":"job"}"#);
    }

    #[tokio::test]
    async fn service_errors_keep_raw_response() {
        let response = http::Response::builder()
            .status(404)
            .body(SdkBody::from("{}"))
            .unwrap();
        match load_response(response, &StatusIsSuccess).await {
            Err(SdkError::ServiceError { raw, err }) => {
                assert_eq!(err, 404);
                assert_eq!(raw.status(), 404);
            }
            other => panic!("unexpected result: {:?}", other.map(|s| s.parsed)),
        }
    }

    #[test]
    fn map_request_augments() {
        struct AddRequestId;
        impl MapRequest for AddRequestId {
            type Error = Infallible;
            fn apply(&self, request: operation::Request) -> Result<operation::Request, Infallible> {
                request.augment(|mut req, _| {
                    req.headers_mut()
                        .insert("x-request", http::HeaderValue::from_static("1"));
                    Ok(req)
                })
            }
        }
        let request = operation::Request::new(http::Request::new(SdkBody::empty()));
        let request = AddRequestId.apply(request).unwrap();
        assert_eq!(request.http().headers()["x-request"], "1");
    }
}

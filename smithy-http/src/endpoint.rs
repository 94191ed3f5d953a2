/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{Authority, Scheme, Uri};
use std::borrow::Cow;
use thiserror::Error;

/// API Endpoint
///
/// This implements an API endpoint as specified in the
/// [Smithy Endpoint Specification](https://awslabs.github.io/smithy/1.0/spec/core/endpoint-traits.html)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoint {
    uri: Uri,

    /// If true, host prefixes are ignored when setting the endpoint on a request
    immutable: bool,
}

#[derive(Debug, Error)]
pub enum InvalidEndpoint {
    #[error("endpoint `{0}` is missing a scheme")]
    MissingScheme(String),
    #[error("endpoint `{0}` is missing an authority")]
    MissingAuthority(String),
    #[error("failed to construct URI")]
    InvalidUri(#[from] http::Error),
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// Certain protocols will attempt to prefix additional information onto an endpoint. If you
    /// wish to ignore these prefixes (for example, when communicating with localhost), set `immutable` to `true`.
    pub fn mutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: false,
        }
    }

    /// Create a new immutable endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn immutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: true,
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Sets the endpoint on `uri`, keeping the path and query of the request
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), InvalidEndpoint> {
        let authority: Authority = self
            .uri
            .authority()
            .cloned()
            .ok_or_else(|| InvalidEndpoint::MissingAuthority(self.uri.to_string()))?;
        let scheme: Scheme = self
            .uri
            .scheme()
            .cloned()
            .ok_or_else(|| InvalidEndpoint::MissingScheme(self.uri.to_string()))?;
        let new_uri = Uri::builder()
            .authority(authority)
            .scheme(scheme)
            .path_and_query(Self::merge_paths(&self.uri, uri).as_ref())
            .build()?;
        *uri = new_uri;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::endpoint::{Endpoint, InvalidEndpoint};
    use http::Uri;

    #[test]
    fn endpoint_keeps_path_and_query() {
        let ep = Endpoint::mutable(Uri::from_static(
            "https://dataexchange.us-east-1.amazonaws.com",
        ));
        let mut uri = Uri::from_static("/v1/data-sets?maxResults=5");
        ep.set_endpoint(&mut uri).expect("valid endpoint");
        assert_eq!(
            uri,
            Uri::from_static("https://dataexchange.us-east-1.amazonaws.com/v1/data-sets?maxResults=5")
        );
    }

    #[test]
    fn endpoint_with_port() {
        let ep = Endpoint::immutable(Uri::from_static("http://localhost:6443"));
        let mut uri = Uri::from_static("/2017-08-29/queues");
        ep.set_endpoint(&mut uri).expect("valid endpoint");
        assert_eq!(uri, Uri::from_static("http://localhost:6443/2017-08-29/queues"));
    }

    #[test]
    fn endpoint_with_path() {
        for endpoint in &[
            // trailing slashes are normalized
            "https://mediaconvert.us-west-2.amazonaws.com/private",
            "https://mediaconvert.us-west-2.amazonaws.com/private/",
        ] {
            let ep = Endpoint::immutable(Uri::from_static(endpoint));
            let mut uri = Uri::from_static("/2017-08-29/presets?nextToken=a");
            ep.set_endpoint(&mut uri).expect("valid endpoint");
            assert_eq!(
                uri,
                Uri::from_static(
                    "https://mediaconvert.us-west-2.amazonaws.com/private/2017-08-29/presets?nextToken=a"
                )
            );
        }
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let ep = Endpoint::mutable(Uri::from_static("/just/a/path"));
        let mut uri = Uri::from_static("/v1/jobs");
        match ep.set_endpoint(&mut uri) {
            Err(InvalidEndpoint::MissingAuthority(_)) => {}
            other => panic!("expected missing authority, got {:?}", other),
        }
        assert_eq!(uri, Uri::from_static("/v1/jobs"));
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use std::borrow::Cow;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone, Debug)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// An HTTP request paired with the handler that parses its response.
#[derive(Debug)]
pub struct Operation<H> {
    request: Request,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn into_request_response(self) -> (Request, Parts<H>) {
        (self.request, self.parts)
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn response_handler(&self) -> &H {
        &self.parts.response_handler
    }
}

/// An error that occurred while building an operation. The request was never sent.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A required field was not set
    #[error("{field} was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    /// A field was set to a value that cannot be sent
    #[error("invalid field in input: {field} (details: {details})")]
    InvalidField { field: &'static str, details: String },

    /// The HTTP request could not be assembled
    #[error("failed to build request: {0}")]
    Other(#[source] BoxError),
}

impl From<http::Error> for BuildError {
    fn from(err: http::Error) -> Self {
        BuildError::Other(err.into())
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see `Request::augment`)
    properties: Rc<RefCell<PropertyBag>>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            properties: Rc::new(RefCell::new(PropertyBag::new())),
        }
    }

    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let properties: &mut PropertyBag = &mut self.properties.as_ref().borrow_mut();
            f(self.inner, properties)?
        };
        Ok(Request {
            inner,
            properties: self.properties,
        })
    }

    pub fn properties_mut(&mut self) -> RefMut<'_, PropertyBag> {
        self.properties.as_ref().borrow_mut()
    }

    pub fn properties(&self) -> Ref<'_, PropertyBag> {
        self.properties.as_ref().borrow()
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    /// Clones the request, sharing its property bag with the clone
    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::builder()
            .uri(self.inner.uri().clone())
            .method(self.inner.method())
            .body(cloned_body)
            .ok()?;
        *cloned_request.headers_mut() = self.inner.headers().clone();
        Some(Request {
            inner: cloned_request,
            properties: self.properties.clone(),
        })
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Rc<RefCell<PropertyBag>>) {
        (self.inner, self.properties)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Metadata, Operation, Request};
    use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
    use http::Uri;

    #[test]
    fn try_clone_clones_all_data() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("https://dataexchange.us-east-1.amazonaws.com/v1/jobs"))
                .method("POST")
                .header(CONTENT_LENGTH, 23)
                .header(CONTENT_TYPE, "application/json")
                .body(SdkBody::from(r#"{"Type":"EXPORT_ASSETS"}"#))
                .expect("valid request"),
        );
        request.properties_mut().insert("hello");
        let cloned = request.try_clone().expect("request is cloneable");

        let (request, properties) = cloned.into_parts();
        assert_eq!(
            request.uri(),
            &Uri::from_static("https://dataexchange.us-east-1.amazonaws.com/v1/jobs")
        );
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            request.body().bytes().unwrap(),
            br#"{"Type":"EXPORT_ASSETS"}"#
        );
        assert_eq!(properties.as_ref().borrow().get::<&str>(), Some(&"hello"));
    }

    #[test]
    fn augment_shares_properties() {
        let request = Request::new(http::Request::new(SdkBody::empty()));
        let request = request
            .augment(|mut req, props| {
                props.insert(7_u8);
                req.headers_mut()
                    .insert("x-test", http::HeaderValue::from_static("1"));
                Ok::<_, BuildError>(req)
            })
            .expect("infallible");
        assert_eq!(request.properties().get::<u8>(), Some(&7));
        assert_eq!(request.http().headers()["x-test"], "1");
    }

    #[test]
    fn operation_metadata() {
        let op = Operation::new(Request::new(http::Request::new(SdkBody::empty())), ())
            .with_metadata(Metadata::new("GetJob", "dataexchange"));
        let metadata = op.metadata().expect("metadata was set");
        assert_eq!(metadata.name(), "GetJob");
        assert_eq!(metadata.service(), "dataexchange");
    }

    #[test]
    fn build_error_messages() {
        let err = BuildError::MissingField {
            field: "job_id",
            details: "cannot be empty or unset",
        };
        assert_eq!(format!("{}", err), "job_id was missing. cannot be empty or unset");

        let err = BuildError::from(
            http::Request::builder()
                .uri("not a uri\n")
                .body(())
                .expect_err("invalid uri"),
        );
        assert!(matches!(err, BuildError::Other(_)));
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use smithy_http::endpoint::{Endpoint, InvalidEndpoint};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Endpoint to connect to an AWS Service
///
/// An `AwsEndpoint` captures all necessary information needed to connect to an AWS service,
/// including:
/// - The URI of the endpoint (needed to actually send the request)
/// - The name of the service (needed downstream for signing)
/// - The signing region (which may differ from the actual region)
#[derive(Clone, Debug)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
    credential_scope: CredentialScope,
}

impl AwsEndpoint {
    pub fn new(endpoint: Endpoint, credential_scope: CredentialScope) -> Self {
        AwsEndpoint {
            endpoint,
            credential_scope,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn credential_scope(&self) -> &CredentialScope {
        &self.credential_scope
    }

    pub fn set_endpoint(&self, uri: &mut http::Uri) -> Result<(), InvalidEndpoint> {
        self.endpoint.set_endpoint(uri)
    }
}

/// The region and service that requests to an endpoint are signed for
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialScope {
    region: Option<SigningRegion>,
    service: Option<SigningService>,
}

impl CredentialScope {
    pub fn builder() -> credential_scope::Builder {
        credential_scope::Builder::default()
    }

    pub fn region(&self) -> Option<&SigningRegion> {
        self.region.as_ref()
    }

    pub fn service(&self) -> Option<&SigningService> {
        self.service.as_ref()
    }
}

pub mod credential_scope {
    use crate::CredentialScope;
    use aws_types::region::SigningRegion;
    use aws_types::SigningService;

    #[derive(Debug, Default)]
    pub struct Builder {
        region: Option<SigningRegion>,
        service: Option<SigningService>,
    }

    impl Builder {
        pub fn region(mut self, region: impl Into<SigningRegion>) -> Self {
            self.region = Some(region.into());
            self
        }

        pub fn service(mut self, service: impl Into<SigningService>) -> Self {
            self.service = Some(service.into());
            self
        }

        pub fn build(self) -> CredentialScope {
            CredentialScope {
                region: self.region,
                service: self.service,
            }
        }
    }
}

/// Resolve the AWS Endpoint for a given region
///
/// Each generated client has a default endpoint resolver built from its service's URI template.
/// Implement this trait to point a client at something else, for example a local mock:
/// ```rust
/// use aws_endpoint::{AwsEndpoint, BoxError, CredentialScope, ResolveAwsEndpoint};
/// use aws_types::region::Region;
/// use smithy_http::endpoint::Endpoint;
/// use http::Uri;
/// struct Localhost;
/// impl ResolveAwsEndpoint for Localhost {
///     fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
///         Ok(AwsEndpoint::new(
///             Endpoint::immutable(Uri::from_static("http://localhost:8000")),
///             CredentialScope::default(),
///         ))
///     }
/// }
/// ```
pub trait ResolveAwsEndpoint: Send + Sync {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

/// Static endpoint metadata for a service
///
/// `uri_template` may contain `{region}`, which is replaced with the region of the request.
#[derive(Clone, Debug)]
pub struct Definition {
    pub uri_template: &'static str,
    pub protocol: Protocol,
    pub credential_scope: CredentialScope,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl ResolveAwsEndpoint for Definition {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let uri = self.uri_template.replace("{region}", region.as_ref());
        let uri = format!("{}://{}", self.protocol.as_str(), uri);
        let endpoint = Endpoint::mutable(uri.parse()?);
        Ok(AwsEndpoint {
            endpoint,
            credential_scope: CredentialScope {
                service: self.credential_scope.service.clone(),
                region: self
                    .credential_scope
                    .region
                    .clone()
                    .or_else(|| Some(region.clone().into())),
            },
        })
    }
}

/// An endpoint that ignores the region, such as a local test server or a VPC endpoint
impl ResolveAwsEndpoint for Endpoint {
    fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint {
            endpoint: self.clone(),
            credential_scope: CredentialScope::default(),
        })
    }
}

type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(properties: &PropertyBag) -> Option<&AwsEndpointResolver> {
    properties.get()
}

pub fn set_endpoint_resolver(properties: &mut PropertyBag, provider: AwsEndpointResolver) {
    properties.insert(provider);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// AwsEndpointStage implements [`MapRequest`](smithy_http::middleware::MapRequest). It will:
/// 1. Load an endpoint provider from the property bag.
/// 2. Load an endpoint given the [`Region`](aws_types::region::Region) in the property bag.
/// 3. Apply the endpoint to the URI in the request
/// 4. Set the `SigningRegion` and `SigningService` in the property bag to drive downstream
/// signing middleware.
#[derive(Clone, Debug)]
pub struct AwsEndpointStage;

#[derive(Debug)]
pub enum AwsEndpointStageError {
    NoEndpointResolver,
    NoRegion,
    EndpointResolutionError(BoxError),
    InvalidEndpoint(InvalidEndpoint),
}

impl Display for AwsEndpointStageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl Error for AwsEndpointStageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AwsEndpointStageError::EndpointResolutionError(err) => Some(err.as_ref()),
            AwsEndpointStageError::InvalidEndpoint(err) => Some(err),
            _ => None,
        }
    }
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, props| {
            let provider =
                get_endpoint_resolver(props).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = props
                .get::<Region>()
                .ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .endpoint(region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            tracing::debug!(endpoint = ?endpoint, base_region = ?region, "resolved endpoint");
            let signing_region = endpoint
                .credential_scope()
                .region()
                .cloned()
                .unwrap_or_else(|| region.clone().into());
            props.insert::<SigningRegion>(signing_region);
            if let Some(signing_service) = endpoint.credential_scope().service() {
                props.insert::<SigningService>(signing_service.clone());
            }
            endpoint
                .set_endpoint(http_req.uri_mut())
                .map_err(AwsEndpointStageError::InvalidEndpoint)?;
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use http::Uri;

    use aws_types::region::{Region, SigningRegion};
    use aws_types::SigningService;
    use smithy_http::body::SdkBody;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    use crate::{
        set_endpoint_resolver, AwsEndpointStage, AwsEndpointStageError, CredentialScope,
        Definition, Protocol, ResolveAwsEndpoint,
    };

    fn request(uri: &'static str) -> operation::Request {
        let req = http::Request::builder()
            .uri(uri)
            .body(SdkBody::empty())
            .expect("valid request");
        operation::Request::new(req)
    }

    #[test]
    fn default_endpoint_updates_request() {
        let provider = Arc::new(Definition {
            uri_template: "dataexchange.{region}.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: Default::default(),
        });
        let mut req = request("/v1/data-sets?maxResults=10");
        {
            let mut props = req.properties_mut();
            props.insert(Region::new("us-east-1"));
            props.insert(SigningService::from_static("dataexchange"));
            set_endpoint_resolver(&mut props, provider);
        }
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from(Region::new("us-east-1")))
        );
        assert_eq!(
            req.properties().get(),
            Some(&SigningService::from_static("dataexchange"))
        );

        let (req, _conf) = req.into_parts();
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://dataexchange.us-east-1.amazonaws.com/v1/data-sets?maxResults=10")
        );
    }

    #[test]
    fn credential_scope_overrides_signing_values() {
        let provider = Arc::new(Definition {
            uri_template: "mediaconvert.{region}.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::builder()
                .region(SigningRegion::from_static("us-east-1"))
                .service(SigningService::from_static("mediaconvert-signer"))
                .build(),
        });
        let mut req = request("/2017-08-29/queues");
        {
            let mut props = req.properties_mut();
            props.insert(Region::new("eu-west-1"));
            props.insert(SigningService::from_static("mediaconvert"));
            set_endpoint_resolver(&mut props, provider);
        }
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from_static("us-east-1"))
        );
        assert_eq!(
            req.properties().get(),
            Some(&SigningService::from_static("mediaconvert-signer"))
        );
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("https://mediaconvert.eu-west-1.amazonaws.com/2017-08-29/queues")
        );
    }

    #[test]
    fn static_endpoint_ignores_region() {
        let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
        let resolved = endpoint
            .endpoint(&Region::from_static("us-west-2"))
            .expect("static endpoints always resolve");
        assert_eq!(resolved.credential_scope(), &CredentialScope::default());

        let mut req = request("/v1/jobs/abc");
        {
            let mut props = req.properties_mut();
            props.insert(Region::from_static("us-west-2"));
            set_endpoint_resolver(&mut props, Arc::new(endpoint));
        }
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("http://localhost:8000/v1/jobs/abc")
        );
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from_static("us-west-2"))
        );
    }

    #[test]
    fn missing_configuration_is_an_error() {
        let req = request("/v1/jobs");
        match AwsEndpointStage.apply(req) {
            Err(AwsEndpointStageError::NoEndpointResolver) => {}
            other => panic!("expected NoEndpointResolver, got {:?}", other.map(|_| ())),
        }

        let mut req = request("/v1/jobs");
        set_endpoint_resolver(
            &mut req.properties_mut(),
            Arc::new(Endpoint::immutable(Uri::from_static("http://localhost"))),
        );
        match AwsEndpointStage.apply(req) {
            Err(AwsEndpointStageError::NoRegion) => {}
            other => panic!("expected NoRegion, got {:?}", other.map(|_| ())),
        }
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for all HTTP Requests built by the clients. Requests always carry
/// their whole payload in memory.
pub enum SdkBody {
    Once(Option<Bytes>),
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody::Once(None)
    }

    /// The remaining bytes of the body, if it has not been polled yet
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            SdkBody::Once(Some(bytes)) => Some(&bytes[..]),
            SdkBody::Once(None) => Some(&[]),
        }
    }

    pub fn content_length(&self) -> u64 {
        match self {
            SdkBody::Once(Some(bytes)) => bytes.len() as u64,
            SdkBody::Once(None) => 0,
        }
    }

    pub fn try_clone(&self) -> Option<Self> {
        match self {
            SdkBody::Once(bytes) => Some(SdkBody::Once(bytes.clone())),
        }
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match self {
            SdkBody::Once(ref mut opt) => Poll::Ready(opt.take().map(Ok)),
        }
    }
}

impl fmt::Debug for SdkBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkBody::Once(Some(bytes)) => f
                .debug_tuple("Once")
                .field(&String::from_utf8_lossy(bytes))
                .finish(),
            SdkBody::Once(None) => f.write_str("Empty"),
        }
    }
}

impl Default for SdkBody {
    fn default() -> Self {
        SdkBody::empty()
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::Once(Some(Bytes::copy_from_slice(s.as_bytes())))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(s.into_bytes())
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody::Once(Some(bytes))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        matches!(self, SdkBody::Once(None))
    }

    fn size_hint(&self) -> http_body::SizeHint {
        http_body::SizeHint::with_exact(self.content_length())
    }
}

#[cfg(test)]
mod test {
    use super::SdkBody;
    use http_body::Body;

    #[test]
    fn content_length_and_bytes() {
        let body = SdkBody::from(r#"{"Name":"weather"}"#);
        assert_eq!(body.content_length(), 18);
        assert_eq!(body.bytes(), Some(&br#"{"Name":"weather"}"#[..]));
        assert_eq!(body.size_hint().exact(), Some(18));
        assert!(!body.is_end_stream());

        let empty = SdkBody::empty();
        assert_eq!(empty.content_length(), 0);
        assert_eq!(empty.bytes(), Some(&b""[..]));
        assert!(empty.is_end_stream());
    }

    #[test]
    fn debug_is_readable() {
        assert_eq!(format!("{:?}", SdkBody::from("abc")), "Once(\"abc\")");
        assert_eq!(format!("{:?}", SdkBody::empty()), "Empty");
    }

    #[tokio::test]
    async fn yields_data_once() {
        let mut body = SdkBody::from(vec![1_u8, 2, 3]);
        let data = body.data().await.expect("one chunk").expect("no error");
        assert_eq!(&data[..], &[1, 2, 3]);
        assert!(body.data().await.is_none());
    }
}

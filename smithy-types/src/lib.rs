/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod instant;
pub mod retry;

use std::fmt;
use std::fmt::{Display, Formatter};

pub use crate::instant::Instant;

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// https://docs.serde.rs/src/serde_json/number.rs.html#20-22
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Converts to an `f64` lossily.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TryFromNumberErrorKind {
    OutsideIntegerRange,
    FloatToIntegerLossyConversion(f64),
}

/// Returned when a [`Number`] doesn't fit the integer type it is converted into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TryFromNumberError {
    kind: TryFromNumberErrorKind,
}

impl Display for TryFromNumberError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            TryFromNumberErrorKind::OutsideIntegerRange => write!(f, "integer out of range"),
            TryFromNumberErrorKind::FloatToIntegerLossyConversion(v) => write!(
                f,
                "cannot convert floating point number {} into an integer",
                v
            ),
        }
    }
}

impl std::error::Error for TryFromNumberError {}

impl From<std::num::TryFromIntError> for TryFromNumberError {
    fn from(_: std::num::TryFromIntError) -> Self {
        TryFromNumberError {
            kind: TryFromNumberErrorKind::OutsideIntegerRange,
        }
    }
}

impl From<std::convert::Infallible> for TryFromNumberError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

macro_rules! to_signed_integer {
    ($typ:ident) => {
        impl std::convert::TryFrom<Number> for $typ {
            type Error = TryFromNumberError;

            fn try_from(value: Number) -> Result<Self, Self::Error> {
                use std::convert::TryInto;
                match value {
                    Number::PosInt(v) => Ok(v.try_into()?),
                    Number::NegInt(v) => Ok(v.try_into()?),
                    Number::Float(v) => {
                        if v.fract() != 0.0 || !v.is_finite() {
                            return Err(TryFromNumberError {
                                kind: TryFromNumberErrorKind::FloatToIntegerLossyConversion(v),
                            });
                        }
                        // 2^63 rounds up when `i64::MAX` is cast to f64, so the upper bound is exclusive
                        if v < $typ::MIN as f64 || v >= ($typ::MAX as f64) + 1.0 {
                            return Err(TryFromNumberError {
                                kind: TryFromNumberErrorKind::OutsideIntegerRange,
                            });
                        }
                        Ok(v as $typ)
                    }
                }
            }
        }
    };
}

to_signed_integer!(i32);
to_signed_integer!(i64);

/// Generic Error type
///
/// For many services, Errors are modeled. However, many services only partially model errors or don't
/// model errors at all. In these cases, the SDK will return this generic error type to expose the
/// `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

#[derive(Default, Debug)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

/// Returned when a string is not one of the values of a closed enumeration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnknownVariantError {
    enum_name: &'static str,
    value: String,
}

impl UnknownVariantError {
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        UnknownVariantError {
            enum_name,
            value: value.into(),
        }
    }

    /// The rejected wire value
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }
}

impl Display for UnknownVariantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid {}", self.value, self.enum_name)
    }
}

impl std::error::Error for UnknownVariantError {}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::{Error, Instant, Number, UnknownVariantError};
    use std::convert::TryFrom;

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn number_conversions() {
        assert_eq!(i32::try_from(Number::PosInt(5)), Ok(5));
        assert_eq!(i64::try_from(Number::NegInt(-5)), Ok(-5));
        assert_eq!(i32::try_from(Number::Float(90.0)), Ok(90));
        assert_eq!(Number::PosInt(3).to_f64(), 3.0);
        assert_eq!(Number::Float(1.5).to_f64(), 1.5);
    }

    #[test]
    fn integer_conversions_are_checked() {
        assert!(i32::try_from(Number::PosInt(4294967297)).is_err());
        assert!(i32::try_from(Number::NegInt(-2147483649)).is_err());
        assert_eq!(i32::try_from(Number::NegInt(-2147483648)), Ok(i32::MIN));
        assert!(i64::try_from(Number::PosInt(u64::MAX)).is_err());
        assert!(i32::try_from(Number::Float(2.9)).is_err());
        assert!(i32::try_from(Number::Float(3e10)).is_err());
        assert!(i64::try_from(Number::Float(9.3e18)).is_err());
        assert!(i64::try_from(Number::Float(f64::NAN)).is_err());
        assert_eq!(
            format!("{}", i32::try_from(Number::Float(2.5)).unwrap_err()),
            "cannot convert floating point number 2.5 into an integer"
        );
        assert_eq!(
            format!("{}", i32::try_from(Number::PosInt(1 << 40)).unwrap_err()),
            "integer out of range"
        );
    }

    #[test]
    fn generic_error_display() {
        let err = Error::builder()
            .code("ThrottlingException")
            .message("slow down")
            .request_id("abc-123")
            .build();
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(
            format!("{}", err),
            "Error { code: \"ThrottlingException\", message: \"slow down\", request_id: \"abc-123\" }"
        );
        assert_eq!(format!("{}", Error::builder().build()), "Error");
    }

    #[test]
    fn unknown_variant_display() {
        let err = UnknownVariantError::new("State", "PAUSED");
        assert_eq!(err.value(), "PAUSED");
        assert_eq!(format!("{}", err), "`PAUSED` is not a valid State");
    }
}

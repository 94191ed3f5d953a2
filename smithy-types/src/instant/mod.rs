/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::error::Error;
use std::fmt;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse timestamp: {}", self.message)
    }
}

impl Error for ParseError {}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: ((fraction * NANOS_PER_SECOND as f64).round() as u32)
                .min(NANOS_PER_SECOND - 1),
        }
    }

    /// Nanoseconds past a whole second carry into `seconds`.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds.saturating_add((subsecond_nanos / NANOS_PER_SECOND) as i64),
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, ParseError> {
        match format {
            Format::DateTime => {
                let parsed = DateTime::parse_from_rfc3339(s)
                    .map_err(|err| ParseError::new(format!("`{}` is not RFC 3339: {}", s, err)))?;
                let utc = parsed.with_timezone(&Utc);
                Ok(Instant::from_secs_and_nanos(
                    utc.timestamp(),
                    utc.timestamp_subsec_nanos(),
                ))
            }
            Format::EpochSeconds => parse_epoch_seconds(s),
        }
    }

    fn to_chrono(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Instants chrono cannot represent fall back to epoch seconds.
    pub fn fmt(&self, format: Format) -> String {
        match (format, self.to_chrono()) {
            (Format::DateTime, Some(date_time)) => {
                let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                if !self.has_nanos() {
                    return rfc3339;
                }
                // AutoSi pads to 3, 6 or 9 digits
                let mut rfc3339 = rfc3339
                    .trim_end_matches('Z')
                    .trim_end_matches('0')
                    .to_owned();
                rfc3339.push('Z');
                rfc3339
            }
            _ => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else if self.seconds < 0 {
                    let fraction = format!("{:0>9}", NANOS_PER_SECOND - self.subsecond_nanos);
                    format!("-{}.{}", -(self.seconds + 1), fraction.trim_end_matches('0'))
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

fn parse_epoch_seconds(s: &str) -> Result<Instant, ParseError> {
    let invalid = || ParseError::new(format!("`{}` is not a number of epoch seconds", s));
    let (whole, fraction) = match s.find('.') {
        Some(idx) => (&s[..idx], &s[idx + 1..]),
        None => (s, ""),
    };
    let seconds: i64 = whole.parse().map_err(|_| invalid())?;
    if fraction.is_empty() {
        return Ok(Instant::from_epoch_seconds(seconds));
    }
    if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let digits: u32 = fraction.parse().map_err(|_| invalid())?;
    let nanos = digits * 10_u32.pow(9 - fraction.len() as u32);
    if seconds < 0 || whole.starts_with('-') {
        // -1.5 is one and a half seconds before the epoch
        if nanos == 0 {
            return Ok(Instant::from_epoch_seconds(seconds));
        }
        return Ok(Instant::from_secs_and_nanos(
            seconds - 1,
            NANOS_PER_SECOND - nanos,
        ));
    }
    Ok(Instant::from_secs_and_nanos(seconds, nanos))
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Format {
    DateTime,
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;

    #[test]
    fn parse_date_time() {
        let parsed = Instant::from_str("2019-12-16T23:48:18Z", Format::DateTime).unwrap();
        assert_eq!(parsed, Instant::from_epoch_seconds(1576540098));

        let parsed = Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime).unwrap();
        assert_eq!(parsed, Instant::from_secs_and_nanos(1576540098, 520_000_000));

        let parsed = Instant::from_str("2019-12-17T00:48:18+01:00", Format::DateTime).unwrap();
        assert_eq!(parsed, Instant::from_epoch_seconds(1576540098));
    }

    #[test]
    fn parse_date_time_failure() {
        let err = Instant::from_str("16 Dec 2019", Format::DateTime).expect_err("not rfc3339");
        assert!(format!("{}", err).contains("16 Dec 2019"));
    }

    #[test]
    fn parse_epoch_seconds() {
        assert_eq!(
            Instant::from_str("1576540098", Format::EpochSeconds).unwrap(),
            Instant::from_epoch_seconds(1576540098)
        );
        assert_eq!(
            Instant::from_str("1576540098.52", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(1576540098, 520_000_000)
        );
        assert_eq!(
            Instant::from_str("-1.5", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(-2, 500_000_000)
        );
        assert_eq!(
            Instant::from_secs_and_nanos(-2, 500_000_000).fmt(Format::EpochSeconds),
            "-1.5"
        );
        assert!(Instant::from_str("12a", Format::EpochSeconds).is_err());
        assert!(Instant::from_str("1.1234567891", Format::EpochSeconds).is_err());
    }

    #[test]
    fn nanos_carry_into_seconds() {
        let instant = Instant::from_secs_and_nanos(-2, 1_500_000_000);
        assert_eq!(instant, Instant::from_secs_and_nanos(-1, 500_000_000));
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds), "-0.5");
        assert_eq!(
            Instant::from_secs_and_nanos(i64::MAX, u32::MAX).epoch_seconds(),
            i64::MAX
        );
    }

    #[test]
    fn fmt_trims_trailing_zeros() {
        let instant = Instant::from_secs_and_nanos(1576540098, 500_000_000);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.5Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.5");
    }

    proptest! {
        #[test]
        fn date_time_round_trip(secs in 0i64..253402300799, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(secs, nanos);
            let formatted = instant.fmt(Format::DateTime);
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime).unwrap(), instant);
        }

        #[test]
        fn epoch_seconds_round_trip(secs in 0i64..253402300799, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(secs, nanos);
            let formatted = instant.fmt(Format::EpochSeconds);
            prop_assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds).unwrap(), instant);
        }
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classification of service errors. The clients never retry on their own; callers that
//! dispatch operations can use the classification to decide whether to try again.

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// A connection level error such as a socket timeout.
    ///
    /// Not produced by modeled errors; determined by whoever dispatches the request.
    TransientError,

    /// An error where the server explicitly told the client to back off, such as a 429 HTTP error.
    ThrottlingError,

    /// Server error that isn't explicitly throttling but is considered by the client
    /// to be something that could be retried.
    ServerError,

    /// Doesn't count against any budgets. This could be something like a 401 challenge in Http.
    ClientError,
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind` when the error is modeled as retryable.
    ///
    /// If the error kind cannot be determined (eg. the error is unmodeled and the error kind depends
    /// on an HTTP status code), return `None`.
    fn retryable_error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}

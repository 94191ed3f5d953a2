/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for testing code that reads environment variables

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

/// Environment variable abstraction
///
/// Environment variables are global to a process, and, as such, are difficult to test with a
/// multi-threaded test runner like Rust's. `Env` either delegates to the real process
/// environment or reads from an in-memory map.
#[derive(Clone, Debug)]
pub struct Env(Arc<Inner>);

#[derive(Debug)]
enum Inner {
    Real,
    Fake(HashMap<String, String>),
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

impl Env {
    pub fn get(&self, k: &str) -> Result<String, VarError> {
        match self.0.as_ref() {
            Inner::Real => std::env::var(k),
            Inner::Fake(map) => map.get(k).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// Create a fake process environment from a slice of tuples.
    ///
    /// # Example
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let mock_env = Env::from_slice(&[("AWS_REGION", "eu-west-1")]);
    /// assert_eq!(mock_env.get("AWS_REGION").unwrap(), "eu-west-1");
    /// ```
    pub fn from_slice<'a>(vars: &[(&'a str, &'a str)]) -> Self {
        Self(Arc::new(Inner::Fake(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )))
    }

    /// Create a process environment that uses the real process environment
    ///
    /// Calls will be delegated to [`std::env::var`](std::env::var).
    pub fn real() -> Self {
        Self(Arc::new(Inner::Real))
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(hash_map: HashMap<String, String>) -> Self {
        Self(Arc::new(Inner::Fake(hash_map)))
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use std::env::VarError;

    #[test]
    fn fake_env() {
        let env = Env::from_slice(&[("AWS_REGION", "us-west-2")]);
        assert_eq!(env.get("AWS_REGION").unwrap(), "us-west-2");
        assert_eq!(env.get("AWS_DEFAULT_REGION"), Err(VarError::NotPresent));
    }
}

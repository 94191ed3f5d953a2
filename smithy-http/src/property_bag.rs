/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

// Functionally equivalent to `Extensions` in the `http` crate, with a public interface so that
// middleware can share configuration through the request.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasherDefault, Hasher};

type AnyMap = HashMap<TypeId, Box<dyn Any + Send + Sync>, BuildHasherDefault<IdHasher>>;

// TypeIds are already hashes, so the hasher stores the u64 as is.
#[derive(Default)]
struct IdHasher(u64);

impl Hasher for IdHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(*byte);
        }
    }

    #[inline]
    fn write_u64(&mut self, id: u64) {
        self.0 = id;
    }
}

/// A type-map of request configuration.
///
/// Operations store the region, signing service and endpoint resolver here; middleware such as
/// endpoint resolution reads them back out.
#[derive(Default)]
pub struct PropertyBag {
    map: AnyMap,
}

impl PropertyBag {
    pub fn new() -> PropertyBag {
        PropertyBag {
            map: AnyMap::default(),
        }
    }

    /// Insert a type into this `PropertyBag`.
    ///
    /// If a value of this type already existed, it will be returned.
    ///
    /// ```
    /// # use smithy_http::property_bag::PropertyBag;
    /// let mut props = PropertyBag::new();
    ///
    /// #[derive(Debug, Eq, PartialEq)]
    /// struct Endpoint(&'static str);
    /// assert!(props.insert(Endpoint("dataexchange.us-east-1.amazonaws.com")).is_none());
    /// assert_eq!(
    ///     props.insert(Endpoint("mediaconvert.us-east-1.amazonaws.com")),
    ///     Some(Endpoint("dataexchange.us-east-1.amazonaws.com"))
    /// );
    /// ```
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), Box::new(val))
            .and_then(|boxed| boxed.downcast().ok().map(|boxed| *boxed))
    }

    /// Get a reference to a type previously inserted on this `PropertyBag`.
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    /// Get a mutable reference to a type previously inserted on this `PropertyBag`.
    pub fn get_mut<T: Send + Sync + 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    /// Remove a type from this `PropertyBag`, returning it if it was present.
    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok().map(|boxed| *boxed))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clear the `PropertyBag` of all inserted properties.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl fmt::Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyBag")
            .field("len", &self.map.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::PropertyBag;

    #[test]
    fn insert_get_remove() {
        #[derive(Debug, PartialEq)]
        struct SigningName(&'static str);

        let mut bag = PropertyBag::new();
        assert!(bag.is_empty());
        bag.insert(5_i32);
        bag.insert(SigningName("dataexchange"));
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.get::<i32>(), Some(&5));
        assert_eq!(bag.get::<SigningName>(), Some(&SigningName("dataexchange")));
        assert_eq!(bag.get::<u32>(), None);

        *bag.get_mut::<i32>().unwrap() += 1;
        assert_eq!(bag.remove::<i32>(), Some(6));
        assert_eq!(bag.get::<i32>(), None);

        bag.clear();
        assert!(bag.is_empty());
    }
}

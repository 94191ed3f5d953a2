/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON Abstractions for the REST-JSON clients

pub mod deserialize;
pub mod escape;
pub mod serialize;

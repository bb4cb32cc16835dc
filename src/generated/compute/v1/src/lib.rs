// Copyright 2025 Nimbus Cloud LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// Code generated by nimbus-codegen. DO NOT EDIT.

//! Marshalling for the Nimbus Compute API, version v1.
//!
//! This crate is generated from the Nimbus Compute service model. It
//! contains the request and response records ([model]), their JSON
//! encodings (hand-rolled `serde` impls), the pull-XML response
//! unmarshallers ([stax]), and the query-string request marshallers
//! ([params]). The HTTP transport, signing, and retry machinery live in
//! the shared runtime, not here.
//!
//! Records exist only for the duration of one conversion; the marshallers
//! themselves are stateless free functions and safe to call from any
//! number of threads at once.

/// The version of the Nimbus Compute wire protocol this crate was
/// generated against.
pub const API_VERSION: &str = "2025-04-01";

pub mod model;
pub mod params;
pub mod stax;

mod implementations;

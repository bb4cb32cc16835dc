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

//! Wire-format support for the Nimbus Cloud client libraries.
//!
//! The Nimbus control-plane APIs speak three encodings: a query-string
//! request protocol, JSON object bodies, and XML response bodies. The
//! generated service crates contain one marshaller or unmarshaller per
//! resource type; everything those generated files share lives here. That
//! includes the scalar codecs (so timestamp and boolean spellings are
//! decided in exactly one place), the pull-based XML cursor, and the
//! query-parameter writer.
//!
//! None of these types hold per-call state beyond the reader or writer
//! they wrap. A conversion either produces a complete record or fails with
//! a [DecodeError]; there is no partial-result recovery.

mod error;
pub use crate::error::*;
mod timestamp;
pub use crate::timestamp::*;
pub mod internal;
pub mod query;
pub mod scalar;
pub mod xml;

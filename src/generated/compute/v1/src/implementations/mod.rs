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

//! Hand-rolled `Serialize` and `Deserialize` impls for [crate::model].
//!
//! Output contains only fields that are set, in declared order. Input
//! accepts the PascalCase wire names, tolerates `null` for any field,
//! skips unknown fields, and rejects duplicate fields.

mod requests;
mod results;
mod structures;

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

impl<'de> serde::de::Deserialize<'de> for crate::model::AllocateAddressRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __domain,
            Unknown,
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for AllocateAddressRequest")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "Domain" => Ok(__FieldTag::__domain),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::AllocateAddressRequest;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct AllocateAddressRequest")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__domain => {
                            if !fields.insert(__FieldTag::__domain) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for domain",
                                ));
                            }
                            result.domain = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::Unknown => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::AllocateAddressRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.domain.as_ref() {
            state.serialize_entry("Domain", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::ReleaseAddressRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __public_ip,
            __allocation_id,
            Unknown,
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for ReleaseAddressRequest")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "PublicIp" => Ok(__FieldTag::__public_ip),
                            "AllocationId" => Ok(__FieldTag::__allocation_id),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::ReleaseAddressRequest;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct ReleaseAddressRequest")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__public_ip => {
                            if !fields.insert(__FieldTag::__public_ip) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for public_ip",
                                ));
                            }
                            result.public_ip = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__allocation_id => {
                            if !fields.insert(__FieldTag::__allocation_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for allocation_id",
                                ));
                            }
                            result.allocation_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::Unknown => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::ReleaseAddressRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.public_ip.as_ref() {
            state.serialize_entry("PublicIp", value)?;
        }
        if let Some(value) = self.allocation_id.as_ref() {
            state.serialize_entry("AllocationId", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::DescribeAddressesRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __public_ips,
            __allocation_ids,
            __filters,
            Unknown,
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for DescribeAddressesRequest")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "PublicIps" => Ok(__FieldTag::__public_ips),
                            "AllocationIds" => Ok(__FieldTag::__allocation_ids),
                            "Filters" => Ok(__FieldTag::__filters),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::DescribeAddressesRequest;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct DescribeAddressesRequest")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__public_ips => {
                            if !fields.insert(__FieldTag::__public_ips) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for public_ips",
                                ));
                            }
                            result.public_ips = map.next_value::<std::option::Option<std::vec::Vec<std::string::String>>>()?;
                        }
                        __FieldTag::__allocation_ids => {
                            if !fields.insert(__FieldTag::__allocation_ids) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for allocation_ids",
                                ));
                            }
                            result.allocation_ids = map.next_value::<std::option::Option<std::vec::Vec<std::string::String>>>()?;
                        }
                        __FieldTag::__filters => {
                            if !fields.insert(__FieldTag::__filters) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for filters",
                                ));
                            }
                            result.filters = map.next_value::<std::option::Option<std::vec::Vec<crate::model::Filter>>>()?;
                        }
                        __FieldTag::Unknown => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::DescribeAddressesRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.public_ips.as_ref() {
            state.serialize_entry("PublicIps", value)?;
        }
        if let Some(value) = self.allocation_ids.as_ref() {
            state.serialize_entry("AllocationIds", value)?;
        }
        if let Some(value) = self.filters.as_ref() {
            state.serialize_entry("Filters", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::DescribeInstancesRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __instance_ids,
            __filters,
            __max_results,
            __next_token,
            Unknown,
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for DescribeInstancesRequest")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "InstanceIds" => Ok(__FieldTag::__instance_ids),
                            "Filters" => Ok(__FieldTag::__filters),
                            "MaxResults" => Ok(__FieldTag::__max_results),
                            "NextToken" => Ok(__FieldTag::__next_token),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::DescribeInstancesRequest;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct DescribeInstancesRequest")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__instance_ids => {
                            if !fields.insert(__FieldTag::__instance_ids) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for instance_ids",
                                ));
                            }
                            result.instance_ids = map.next_value::<std::option::Option<std::vec::Vec<std::string::String>>>()?;
                        }
                        __FieldTag::__filters => {
                            if !fields.insert(__FieldTag::__filters) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for filters",
                                ));
                            }
                            result.filters = map.next_value::<std::option::Option<std::vec::Vec<crate::model::Filter>>>()?;
                        }
                        __FieldTag::__max_results => {
                            if !fields.insert(__FieldTag::__max_results) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for max_results",
                                ));
                            }
                            struct __With(std::option::Option<i32>);
                            impl<'de> serde::de::Deserialize<'de> for __With {
                                fn deserialize<D>(
                                    deserializer: D,
                                ) -> std::result::Result<Self, D::Error>
                                where
                                    D: serde::de::Deserializer<'de>,
                                {
                                    serde_with::As::<std::option::Option<wire::internal::I32>>::deserialize(deserializer).map(__With)
                                }
                            }
                            result.max_results = map.next_value::<__With>()?.0;
                        }
                        __FieldTag::__next_token => {
                            if !fields.insert(__FieldTag::__next_token) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for next_token",
                                ));
                            }
                            result.next_token = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::Unknown => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::DescribeInstancesRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.instance_ids.as_ref() {
            state.serialize_entry("InstanceIds", value)?;
        }
        if let Some(value) = self.filters.as_ref() {
            state.serialize_entry("Filters", value)?;
        }
        if let Some(value) = self.max_results.as_ref() {
            struct __With<'a>(&'a i32);
            impl<'a> serde::ser::Serialize for __With<'a> {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::ser::Serializer,
                {
                    serde_with::As::<wire::internal::I32>::serialize(self.0, serializer)
                }
            }
            state.serialize_entry("MaxResults", &__With(value))?;
        }
        if let Some(value) = self.next_token.as_ref() {
            state.serialize_entry("NextToken", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::RunInstancesRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __image_id,
            __min_count,
            __max_count,
            __key_name,
            __instance_type,
            __security_group_ids,
            __security_groups,
            __subnet_id,
            __tag_specifications,
            Unknown,
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for RunInstancesRequest")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "ImageId" => Ok(__FieldTag::__image_id),
                            "MinCount" => Ok(__FieldTag::__min_count),
                            "MaxCount" => Ok(__FieldTag::__max_count),
                            "KeyName" => Ok(__FieldTag::__key_name),
                            "InstanceType" => Ok(__FieldTag::__instance_type),
                            "SecurityGroupIds" => Ok(__FieldTag::__security_group_ids),
                            "SecurityGroups" => Ok(__FieldTag::__security_groups),
                            "SubnetId" => Ok(__FieldTag::__subnet_id),
                            "TagSpecifications" => Ok(__FieldTag::__tag_specifications),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::RunInstancesRequest;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct RunInstancesRequest")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__image_id => {
                            if !fields.insert(__FieldTag::__image_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for image_id",
                                ));
                            }
                            result.image_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__min_count => {
                            if !fields.insert(__FieldTag::__min_count) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for min_count",
                                ));
                            }
                            struct __With(std::option::Option<i32>);
                            impl<'de> serde::de::Deserialize<'de> for __With {
                                fn deserialize<D>(
                                    deserializer: D,
                                ) -> std::result::Result<Self, D::Error>
                                where
                                    D: serde::de::Deserializer<'de>,
                                {
                                    serde_with::As::<std::option::Option<wire::internal::I32>>::deserialize(deserializer).map(__With)
                                }
                            }
                            result.min_count = map.next_value::<__With>()?.0;
                        }
                        __FieldTag::__max_count => {
                            if !fields.insert(__FieldTag::__max_count) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for max_count",
                                ));
                            }
                            struct __With(std::option::Option<i32>);
                            impl<'de> serde::de::Deserialize<'de> for __With {
                                fn deserialize<D>(
                                    deserializer: D,
                                ) -> std::result::Result<Self, D::Error>
                                where
                                    D: serde::de::Deserializer<'de>,
                                {
                                    serde_with::As::<std::option::Option<wire::internal::I32>>::deserialize(deserializer).map(__With)
                                }
                            }
                            result.max_count = map.next_value::<__With>()?.0;
                        }
                        __FieldTag::__key_name => {
                            if !fields.insert(__FieldTag::__key_name) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for key_name",
                                ));
                            }
                            result.key_name = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__instance_type => {
                            if !fields.insert(__FieldTag::__instance_type) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for instance_type",
                                ));
                            }
                            result.instance_type = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__security_group_ids => {
                            if !fields.insert(__FieldTag::__security_group_ids) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for security_group_ids",
                                ));
                            }
                            result.security_group_ids = map.next_value::<std::option::Option<std::vec::Vec<std::string::String>>>()?;
                        }
                        __FieldTag::__security_groups => {
                            if !fields.insert(__FieldTag::__security_groups) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for security_groups",
                                ));
                            }
                            result.security_groups = map.next_value::<std::option::Option<std::vec::Vec<std::string::String>>>()?;
                        }
                        __FieldTag::__subnet_id => {
                            if !fields.insert(__FieldTag::__subnet_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for subnet_id",
                                ));
                            }
                            result.subnet_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__tag_specifications => {
                            if !fields.insert(__FieldTag::__tag_specifications) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for tag_specifications",
                                ));
                            }
                            result.tag_specifications = map.next_value::<std::option::Option<std::vec::Vec<crate::model::TagSpecification>>>()?;
                        }
                        __FieldTag::Unknown => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::RunInstancesRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.image_id.as_ref() {
            state.serialize_entry("ImageId", value)?;
        }
        if let Some(value) = self.min_count.as_ref() {
            struct __With<'a>(&'a i32);
            impl<'a> serde::ser::Serialize for __With<'a> {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::ser::Serializer,
                {
                    serde_with::As::<wire::internal::I32>::serialize(self.0, serializer)
                }
            }
            state.serialize_entry("MinCount", &__With(value))?;
        }
        if let Some(value) = self.max_count.as_ref() {
            struct __With<'a>(&'a i32);
            impl<'a> serde::ser::Serialize for __With<'a> {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::ser::Serializer,
                {
                    serde_with::As::<wire::internal::I32>::serialize(self.0, serializer)
                }
            }
            state.serialize_entry("MaxCount", &__With(value))?;
        }
        if let Some(value) = self.key_name.as_ref() {
            state.serialize_entry("KeyName", value)?;
        }
        if let Some(value) = self.instance_type.as_ref() {
            state.serialize_entry("InstanceType", value)?;
        }
        if let Some(value) = self.security_group_ids.as_ref() {
            state.serialize_entry("SecurityGroupIds", value)?;
        }
        if let Some(value) = self.security_groups.as_ref() {
            state.serialize_entry("SecurityGroups", value)?;
        }
        if let Some(value) = self.subnet_id.as_ref() {
            state.serialize_entry("SubnetId", value)?;
        }
        if let Some(value) = self.tag_specifications.as_ref() {
            state.serialize_entry("TagSpecifications", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::CreateTagsRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __resources,
            __tags,
            Unknown,
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for CreateTagsRequest")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "Resources" => Ok(__FieldTag::__resources),
                            "Tags" => Ok(__FieldTag::__tags),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::CreateTagsRequest;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct CreateTagsRequest")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__resources => {
                            if !fields.insert(__FieldTag::__resources) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for resources",
                                ));
                            }
                            result.resources = map.next_value::<std::option::Option<std::vec::Vec<std::string::String>>>()?;
                        }
                        __FieldTag::__tags => {
                            if !fields.insert(__FieldTag::__tags) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for tags",
                                ));
                            }
                            result.tags = map.next_value::<std::option::Option<std::vec::Vec<crate::model::Tag>>>()?;
                        }
                        __FieldTag::Unknown => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::CreateTagsRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.resources.as_ref() {
            state.serialize_entry("Resources", value)?;
        }
        if let Some(value) = self.tags.as_ref() {
            state.serialize_entry("Tags", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::CreateVolumeRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __availability_zone,
            __size,
            __snapshot_id,
            __volume_type,
            __iops,
            __encrypted,
            __tag_specifications,
            Unknown,
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for CreateVolumeRequest")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "AvailabilityZone" => Ok(__FieldTag::__availability_zone),
                            "Size" => Ok(__FieldTag::__size),
                            "SnapshotId" => Ok(__FieldTag::__snapshot_id),
                            "VolumeType" => Ok(__FieldTag::__volume_type),
                            "Iops" => Ok(__FieldTag::__iops),
                            "Encrypted" => Ok(__FieldTag::__encrypted),
                            "TagSpecifications" => Ok(__FieldTag::__tag_specifications),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::CreateVolumeRequest;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct CreateVolumeRequest")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__availability_zone => {
                            if !fields.insert(__FieldTag::__availability_zone) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for availability_zone",
                                ));
                            }
                            result.availability_zone = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__size => {
                            if !fields.insert(__FieldTag::__size) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for size",
                                ));
                            }
                            struct __With(std::option::Option<i32>);
                            impl<'de> serde::de::Deserialize<'de> for __With {
                                fn deserialize<D>(
                                    deserializer: D,
                                ) -> std::result::Result<Self, D::Error>
                                where
                                    D: serde::de::Deserializer<'de>,
                                {
                                    serde_with::As::<std::option::Option<wire::internal::I32>>::deserialize(deserializer).map(__With)
                                }
                            }
                            result.size = map.next_value::<__With>()?.0;
                        }
                        __FieldTag::__snapshot_id => {
                            if !fields.insert(__FieldTag::__snapshot_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for snapshot_id",
                                ));
                            }
                            result.snapshot_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__volume_type => {
                            if !fields.insert(__FieldTag::__volume_type) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for volume_type",
                                ));
                            }
                            result.volume_type = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__iops => {
                            if !fields.insert(__FieldTag::__iops) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for iops",
                                ));
                            }
                            struct __With(std::option::Option<i32>);
                            impl<'de> serde::de::Deserialize<'de> for __With {
                                fn deserialize<D>(
                                    deserializer: D,
                                ) -> std::result::Result<Self, D::Error>
                                where
                                    D: serde::de::Deserializer<'de>,
                                {
                                    serde_with::As::<std::option::Option<wire::internal::I32>>::deserialize(deserializer).map(__With)
                                }
                            }
                            result.iops = map.next_value::<__With>()?.0;
                        }
                        __FieldTag::__encrypted => {
                            if !fields.insert(__FieldTag::__encrypted) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for encrypted",
                                ));
                            }
                            result.encrypted = map.next_value::<std::option::Option<bool>>()?;
                        }
                        __FieldTag::__tag_specifications => {
                            if !fields.insert(__FieldTag::__tag_specifications) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for tag_specifications",
                                ));
                            }
                            result.tag_specifications = map.next_value::<std::option::Option<std::vec::Vec<crate::model::TagSpecification>>>()?;
                        }
                        __FieldTag::Unknown => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::CreateVolumeRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.availability_zone.as_ref() {
            state.serialize_entry("AvailabilityZone", value)?;
        }
        if let Some(value) = self.size.as_ref() {
            struct __With<'a>(&'a i32);
            impl<'a> serde::ser::Serialize for __With<'a> {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::ser::Serializer,
                {
                    serde_with::As::<wire::internal::I32>::serialize(self.0, serializer)
                }
            }
            state.serialize_entry("Size", &__With(value))?;
        }
        if let Some(value) = self.snapshot_id.as_ref() {
            state.serialize_entry("SnapshotId", value)?;
        }
        if let Some(value) = self.volume_type.as_ref() {
            state.serialize_entry("VolumeType", value)?;
        }
        if let Some(value) = self.iops.as_ref() {
            struct __With<'a>(&'a i32);
            impl<'a> serde::ser::Serialize for __With<'a> {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::ser::Serializer,
                {
                    serde_with::As::<wire::internal::I32>::serialize(self.0, serializer)
                }
            }
            state.serialize_entry("Iops", &__With(value))?;
        }
        if let Some(value) = self.encrypted.as_ref() {
            state.serialize_entry("Encrypted", value)?;
        }
        if let Some(value) = self.tag_specifications.as_ref() {
            state.serialize_entry("TagSpecifications", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::DescribeVolumesRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __volume_ids,
            __filters,
            __max_results,
            __next_token,
            Unknown,
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for DescribeVolumesRequest")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "VolumeIds" => Ok(__FieldTag::__volume_ids),
                            "Filters" => Ok(__FieldTag::__filters),
                            "MaxResults" => Ok(__FieldTag::__max_results),
                            "NextToken" => Ok(__FieldTag::__next_token),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::DescribeVolumesRequest;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct DescribeVolumesRequest")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__volume_ids => {
                            if !fields.insert(__FieldTag::__volume_ids) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for volume_ids",
                                ));
                            }
                            result.volume_ids = map.next_value::<std::option::Option<std::vec::Vec<std::string::String>>>()?;
                        }
                        __FieldTag::__filters => {
                            if !fields.insert(__FieldTag::__filters) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for filters",
                                ));
                            }
                            result.filters = map.next_value::<std::option::Option<std::vec::Vec<crate::model::Filter>>>()?;
                        }
                        __FieldTag::__max_results => {
                            if !fields.insert(__FieldTag::__max_results) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for max_results",
                                ));
                            }
                            struct __With(std::option::Option<i32>);
                            impl<'de> serde::de::Deserialize<'de> for __With {
                                fn deserialize<D>(
                                    deserializer: D,
                                ) -> std::result::Result<Self, D::Error>
                                where
                                    D: serde::de::Deserializer<'de>,
                                {
                                    serde_with::As::<std::option::Option<wire::internal::I32>>::deserialize(deserializer).map(__With)
                                }
                            }
                            result.max_results = map.next_value::<__With>()?.0;
                        }
                        __FieldTag::__next_token => {
                            if !fields.insert(__FieldTag::__next_token) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for next_token",
                                ));
                            }
                            result.next_token = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::Unknown => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::DescribeVolumesRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.volume_ids.as_ref() {
            state.serialize_entry("VolumeIds", value)?;
        }
        if let Some(value) = self.filters.as_ref() {
            state.serialize_entry("Filters", value)?;
        }
        if let Some(value) = self.max_results.as_ref() {
            struct __With<'a>(&'a i32);
            impl<'a> serde::ser::Serialize for __With<'a> {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::ser::Serializer,
                {
                    serde_with::As::<wire::internal::I32>::serialize(self.0, serializer)
                }
            }
            state.serialize_entry("MaxResults", &__With(value))?;
        }
        if let Some(value) = self.next_token.as_ref() {
            state.serialize_entry("NextToken", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::DescribeSecurityGroupsRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __group_ids,
            __group_names,
            __filters,
            Unknown,
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for DescribeSecurityGroupsRequest")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "GroupIds" => Ok(__FieldTag::__group_ids),
                            "GroupNames" => Ok(__FieldTag::__group_names),
                            "Filters" => Ok(__FieldTag::__filters),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::DescribeSecurityGroupsRequest;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct DescribeSecurityGroupsRequest")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__group_ids => {
                            if !fields.insert(__FieldTag::__group_ids) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for group_ids",
                                ));
                            }
                            result.group_ids = map.next_value::<std::option::Option<std::vec::Vec<std::string::String>>>()?;
                        }
                        __FieldTag::__group_names => {
                            if !fields.insert(__FieldTag::__group_names) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for group_names",
                                ));
                            }
                            result.group_names = map.next_value::<std::option::Option<std::vec::Vec<std::string::String>>>()?;
                        }
                        __FieldTag::__filters => {
                            if !fields.insert(__FieldTag::__filters) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for filters",
                                ));
                            }
                            result.filters = map.next_value::<std::option::Option<std::vec::Vec<crate::model::Filter>>>()?;
                        }
                        __FieldTag::Unknown => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::DescribeSecurityGroupsRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.group_ids.as_ref() {
            state.serialize_entry("GroupIds", value)?;
        }
        if let Some(value) = self.group_names.as_ref() {
            state.serialize_entry("GroupNames", value)?;
        }
        if let Some(value) = self.filters.as_ref() {
            state.serialize_entry("Filters", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::DescribeRouteTablesRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __route_table_ids,
            __filters,
            Unknown,
        }
        impl<'de> serde::de::Deserialize<'de> for __FieldTag {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;
                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = __FieldTag;
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str("a field name for DescribeRouteTablesRequest")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "RouteTableIds" => Ok(__FieldTag::__route_table_ids),
                            "Filters" => Ok(__FieldTag::__filters),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::DescribeRouteTablesRequest;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct DescribeRouteTablesRequest")
            }
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                #[allow(unused_imports)]
                use serde::de::Error;
                use std::option::Option::Some;
                let mut fields = std::collections::HashSet::new();
                let mut result = Self::Value::new();
                while let Some(tag) = map.next_key::<__FieldTag>()? {
                    #[allow(clippy::match_single_binding)]
                    match tag {
                        __FieldTag::__route_table_ids => {
                            if !fields.insert(__FieldTag::__route_table_ids) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for route_table_ids",
                                ));
                            }
                            result.route_table_ids = map.next_value::<std::option::Option<std::vec::Vec<std::string::String>>>()?;
                        }
                        __FieldTag::__filters => {
                            if !fields.insert(__FieldTag::__filters) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for filters",
                                ));
                            }
                            result.filters = map.next_value::<std::option::Option<std::vec::Vec<crate::model::Filter>>>()?;
                        }
                        __FieldTag::Unknown => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                        }
                    }
                }
                std::result::Result::Ok(result)
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

impl serde::ser::Serialize for crate::model::DescribeRouteTablesRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.route_table_ids.as_ref() {
            state.serialize_entry("RouteTableIds", value)?;
        }
        if let Some(value) = self.filters.as_ref() {
            state.serialize_entry("Filters", value)?;
        }
        state.end()
    }
}

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

impl<'de> serde::de::Deserialize<'de> for crate::model::Tag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __key,
            __value,
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
                        formatter.write_str("a field name for Tag")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "Key" => Ok(__FieldTag::__key),
                            "Value" => Ok(__FieldTag::__value),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::Tag;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct Tag")
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
                        __FieldTag::__key => {
                            if !fields.insert(__FieldTag::__key) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for key",
                                ));
                            }
                            result.key = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__value => {
                            if !fields.insert(__FieldTag::__value) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for value",
                                ));
                            }
                            result.value = map.next_value::<std::option::Option<std::string::String>>()?;
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

impl serde::ser::Serialize for crate::model::Tag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.key.as_ref() {
            state.serialize_entry("Key", value)?;
        }
        if let Some(value) = self.value.as_ref() {
            state.serialize_entry("Value", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::TagSpecification {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __resource_type,
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
                        formatter.write_str("a field name for TagSpecification")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "ResourceType" => Ok(__FieldTag::__resource_type),
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
            type Value = crate::model::TagSpecification;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct TagSpecification")
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
                        __FieldTag::__resource_type => {
                            if !fields.insert(__FieldTag::__resource_type) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for resource_type",
                                ));
                            }
                            result.resource_type = map.next_value::<std::option::Option<std::string::String>>()?;
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

impl serde::ser::Serialize for crate::model::TagSpecification {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.resource_type.as_ref() {
            state.serialize_entry("ResourceType", value)?;
        }
        if let Some(value) = self.tags.as_ref() {
            state.serialize_entry("Tags", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::Filter {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __name,
            __values,
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
                        formatter.write_str("a field name for Filter")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "Name" => Ok(__FieldTag::__name),
                            "Values" => Ok(__FieldTag::__values),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::Filter;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct Filter")
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
                        __FieldTag::__name => {
                            if !fields.insert(__FieldTag::__name) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for name",
                                ));
                            }
                            result.name = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__values => {
                            if !fields.insert(__FieldTag::__values) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for values",
                                ));
                            }
                            result.values = map.next_value::<std::option::Option<std::vec::Vec<std::string::String>>>()?;
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

impl serde::ser::Serialize for crate::model::Filter {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.name.as_ref() {
            state.serialize_entry("Name", value)?;
        }
        if let Some(value) = self.values.as_ref() {
            state.serialize_entry("Values", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::GroupIdentifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __group_name,
            __group_id,
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
                        formatter.write_str("a field name for GroupIdentifier")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "GroupName" => Ok(__FieldTag::__group_name),
                            "GroupId" => Ok(__FieldTag::__group_id),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::GroupIdentifier;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct GroupIdentifier")
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
                        __FieldTag::__group_name => {
                            if !fields.insert(__FieldTag::__group_name) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for group_name",
                                ));
                            }
                            result.group_name = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__group_id => {
                            if !fields.insert(__FieldTag::__group_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for group_id",
                                ));
                            }
                            result.group_id = map.next_value::<std::option::Option<std::string::String>>()?;
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

impl serde::ser::Serialize for crate::model::GroupIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.group_name.as_ref() {
            state.serialize_entry("GroupName", value)?;
        }
        if let Some(value) = self.group_id.as_ref() {
            state.serialize_entry("GroupId", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::InstanceState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __code,
            __name,
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
                        formatter.write_str("a field name for InstanceState")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "Code" => Ok(__FieldTag::__code),
                            "Name" => Ok(__FieldTag::__name),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::InstanceState;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct InstanceState")
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
                        __FieldTag::__code => {
                            if !fields.insert(__FieldTag::__code) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for code",
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
                            result.code = map.next_value::<__With>()?.0;
                        }
                        __FieldTag::__name => {
                            if !fields.insert(__FieldTag::__name) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for name",
                                ));
                            }
                            result.name = map.next_value::<std::option::Option<std::string::String>>()?;
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

impl serde::ser::Serialize for crate::model::InstanceState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.code.as_ref() {
            struct __With<'a>(&'a i32);
            impl<'a> serde::ser::Serialize for __With<'a> {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::ser::Serializer,
                {
                    serde_with::As::<wire::internal::I32>::serialize(self.0, serializer)
                }
            }
            state.serialize_entry("Code", &__With(value))?;
        }
        if let Some(value) = self.name.as_ref() {
            state.serialize_entry("Name", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::Instance {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __instance_id,
            __image_id,
            __instance_type,
            __state,
            __key_name,
            __launch_time,
            __private_ip_address,
            __public_ip_address,
            __subnet_id,
            __vpc_id,
            __security_groups,
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
                        formatter.write_str("a field name for Instance")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "InstanceId" => Ok(__FieldTag::__instance_id),
                            "ImageId" => Ok(__FieldTag::__image_id),
                            "InstanceType" => Ok(__FieldTag::__instance_type),
                            "State" => Ok(__FieldTag::__state),
                            "KeyName" => Ok(__FieldTag::__key_name),
                            "LaunchTime" => Ok(__FieldTag::__launch_time),
                            "PrivateIpAddress" => Ok(__FieldTag::__private_ip_address),
                            "PublicIpAddress" => Ok(__FieldTag::__public_ip_address),
                            "SubnetId" => Ok(__FieldTag::__subnet_id),
                            "VpcId" => Ok(__FieldTag::__vpc_id),
                            "SecurityGroups" => Ok(__FieldTag::__security_groups),
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
            type Value = crate::model::Instance;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct Instance")
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
                        __FieldTag::__instance_id => {
                            if !fields.insert(__FieldTag::__instance_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for instance_id",
                                ));
                            }
                            result.instance_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__image_id => {
                            if !fields.insert(__FieldTag::__image_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for image_id",
                                ));
                            }
                            result.image_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__instance_type => {
                            if !fields.insert(__FieldTag::__instance_type) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for instance_type",
                                ));
                            }
                            result.instance_type = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__state => {
                            if !fields.insert(__FieldTag::__state) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for state",
                                ));
                            }
                            result.state = map.next_value::<wire::internal::Guarded<crate::model::InstanceState>>()?.0;
                        }
                        __FieldTag::__key_name => {
                            if !fields.insert(__FieldTag::__key_name) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for key_name",
                                ));
                            }
                            result.key_name = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__launch_time => {
                            if !fields.insert(__FieldTag::__launch_time) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for launch_time",
                                ));
                            }
                            result.launch_time = map.next_value::<std::option::Option<wire::Timestamp>>()?;
                        }
                        __FieldTag::__private_ip_address => {
                            if !fields.insert(__FieldTag::__private_ip_address) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for private_ip_address",
                                ));
                            }
                            result.private_ip_address = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__public_ip_address => {
                            if !fields.insert(__FieldTag::__public_ip_address) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for public_ip_address",
                                ));
                            }
                            result.public_ip_address = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__subnet_id => {
                            if !fields.insert(__FieldTag::__subnet_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for subnet_id",
                                ));
                            }
                            result.subnet_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__vpc_id => {
                            if !fields.insert(__FieldTag::__vpc_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for vpc_id",
                                ));
                            }
                            result.vpc_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__security_groups => {
                            if !fields.insert(__FieldTag::__security_groups) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for security_groups",
                                ));
                            }
                            result.security_groups = map.next_value::<std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>>()?;
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

impl serde::ser::Serialize for crate::model::Instance {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.instance_id.as_ref() {
            state.serialize_entry("InstanceId", value)?;
        }
        if let Some(value) = self.image_id.as_ref() {
            state.serialize_entry("ImageId", value)?;
        }
        if let Some(value) = self.instance_type.as_ref() {
            state.serialize_entry("InstanceType", value)?;
        }
        if let Some(value) = self.state.as_ref() {
            state.serialize_entry("State", value)?;
        }
        if let Some(value) = self.key_name.as_ref() {
            state.serialize_entry("KeyName", value)?;
        }
        if let Some(value) = self.launch_time.as_ref() {
            state.serialize_entry("LaunchTime", value)?;
        }
        if let Some(value) = self.private_ip_address.as_ref() {
            state.serialize_entry("PrivateIpAddress", value)?;
        }
        if let Some(value) = self.public_ip_address.as_ref() {
            state.serialize_entry("PublicIpAddress", value)?;
        }
        if let Some(value) = self.subnet_id.as_ref() {
            state.serialize_entry("SubnetId", value)?;
        }
        if let Some(value) = self.vpc_id.as_ref() {
            state.serialize_entry("VpcId", value)?;
        }
        if let Some(value) = self.security_groups.as_ref() {
            state.serialize_entry("SecurityGroups", value)?;
        }
        if let Some(value) = self.tags.as_ref() {
            state.serialize_entry("Tags", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::Reservation {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __reservation_id,
            __owner_id,
            __groups,
            __instances,
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
                        formatter.write_str("a field name for Reservation")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "ReservationId" => Ok(__FieldTag::__reservation_id),
                            "OwnerId" => Ok(__FieldTag::__owner_id),
                            "Groups" => Ok(__FieldTag::__groups),
                            "Instances" => Ok(__FieldTag::__instances),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::Reservation;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct Reservation")
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
                        __FieldTag::__reservation_id => {
                            if !fields.insert(__FieldTag::__reservation_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for reservation_id",
                                ));
                            }
                            result.reservation_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__owner_id => {
                            if !fields.insert(__FieldTag::__owner_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for owner_id",
                                ));
                            }
                            result.owner_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__groups => {
                            if !fields.insert(__FieldTag::__groups) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for groups",
                                ));
                            }
                            result.groups = map.next_value::<std::option::Option<std::vec::Vec<crate::model::GroupIdentifier>>>()?;
                        }
                        __FieldTag::__instances => {
                            if !fields.insert(__FieldTag::__instances) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for instances",
                                ));
                            }
                            result.instances = map.next_value::<std::option::Option<std::vec::Vec<crate::model::Instance>>>()?;
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

impl serde::ser::Serialize for crate::model::Reservation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.reservation_id.as_ref() {
            state.serialize_entry("ReservationId", value)?;
        }
        if let Some(value) = self.owner_id.as_ref() {
            state.serialize_entry("OwnerId", value)?;
        }
        if let Some(value) = self.groups.as_ref() {
            state.serialize_entry("Groups", value)?;
        }
        if let Some(value) = self.instances.as_ref() {
            state.serialize_entry("Instances", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::Address {
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
            __domain,
            __instance_id,
            __association_id,
            __network_interface_id,
            __private_ip_address,
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
                        formatter.write_str("a field name for Address")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "PublicIp" => Ok(__FieldTag::__public_ip),
                            "AllocationId" => Ok(__FieldTag::__allocation_id),
                            "Domain" => Ok(__FieldTag::__domain),
                            "InstanceId" => Ok(__FieldTag::__instance_id),
                            "AssociationId" => Ok(__FieldTag::__association_id),
                            "NetworkInterfaceId" => Ok(__FieldTag::__network_interface_id),
                            "PrivateIpAddress" => Ok(__FieldTag::__private_ip_address),
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
            type Value = crate::model::Address;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct Address")
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
                        __FieldTag::__domain => {
                            if !fields.insert(__FieldTag::__domain) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for domain",
                                ));
                            }
                            result.domain = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__instance_id => {
                            if !fields.insert(__FieldTag::__instance_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for instance_id",
                                ));
                            }
                            result.instance_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__association_id => {
                            if !fields.insert(__FieldTag::__association_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for association_id",
                                ));
                            }
                            result.association_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__network_interface_id => {
                            if !fields.insert(__FieldTag::__network_interface_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for network_interface_id",
                                ));
                            }
                            result.network_interface_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__private_ip_address => {
                            if !fields.insert(__FieldTag::__private_ip_address) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for private_ip_address",
                                ));
                            }
                            result.private_ip_address = map.next_value::<std::option::Option<std::string::String>>()?;
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

impl serde::ser::Serialize for crate::model::Address {
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
        if let Some(value) = self.domain.as_ref() {
            state.serialize_entry("Domain", value)?;
        }
        if let Some(value) = self.instance_id.as_ref() {
            state.serialize_entry("InstanceId", value)?;
        }
        if let Some(value) = self.association_id.as_ref() {
            state.serialize_entry("AssociationId", value)?;
        }
        if let Some(value) = self.network_interface_id.as_ref() {
            state.serialize_entry("NetworkInterfaceId", value)?;
        }
        if let Some(value) = self.private_ip_address.as_ref() {
            state.serialize_entry("PrivateIpAddress", value)?;
        }
        if let Some(value) = self.tags.as_ref() {
            state.serialize_entry("Tags", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::VolumeAttachment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __volume_id,
            __instance_id,
            __device,
            __state,
            __attach_time,
            __delete_on_termination,
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
                        formatter.write_str("a field name for VolumeAttachment")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "VolumeId" => Ok(__FieldTag::__volume_id),
                            "InstanceId" => Ok(__FieldTag::__instance_id),
                            "Device" => Ok(__FieldTag::__device),
                            "State" => Ok(__FieldTag::__state),
                            "AttachTime" => Ok(__FieldTag::__attach_time),
                            "DeleteOnTermination" => Ok(__FieldTag::__delete_on_termination),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::VolumeAttachment;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct VolumeAttachment")
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
                        __FieldTag::__volume_id => {
                            if !fields.insert(__FieldTag::__volume_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for volume_id",
                                ));
                            }
                            result.volume_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__instance_id => {
                            if !fields.insert(__FieldTag::__instance_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for instance_id",
                                ));
                            }
                            result.instance_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__device => {
                            if !fields.insert(__FieldTag::__device) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for device",
                                ));
                            }
                            result.device = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__state => {
                            if !fields.insert(__FieldTag::__state) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for state",
                                ));
                            }
                            result.state = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__attach_time => {
                            if !fields.insert(__FieldTag::__attach_time) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for attach_time",
                                ));
                            }
                            result.attach_time = map.next_value::<std::option::Option<wire::Timestamp>>()?;
                        }
                        __FieldTag::__delete_on_termination => {
                            if !fields.insert(__FieldTag::__delete_on_termination) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for delete_on_termination",
                                ));
                            }
                            result.delete_on_termination = map.next_value::<std::option::Option<bool>>()?;
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

impl serde::ser::Serialize for crate::model::VolumeAttachment {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.volume_id.as_ref() {
            state.serialize_entry("VolumeId", value)?;
        }
        if let Some(value) = self.instance_id.as_ref() {
            state.serialize_entry("InstanceId", value)?;
        }
        if let Some(value) = self.device.as_ref() {
            state.serialize_entry("Device", value)?;
        }
        if let Some(value) = self.state.as_ref() {
            state.serialize_entry("State", value)?;
        }
        if let Some(value) = self.attach_time.as_ref() {
            state.serialize_entry("AttachTime", value)?;
        }
        if let Some(value) = self.delete_on_termination.as_ref() {
            state.serialize_entry("DeleteOnTermination", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::Volume {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __volume_id,
            __size,
            __snapshot_id,
            __availability_zone,
            __state,
            __create_time,
            __volume_type,
            __iops,
            __encrypted,
            __attachments,
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
                        formatter.write_str("a field name for Volume")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "VolumeId" => Ok(__FieldTag::__volume_id),
                            "Size" => Ok(__FieldTag::__size),
                            "SnapshotId" => Ok(__FieldTag::__snapshot_id),
                            "AvailabilityZone" => Ok(__FieldTag::__availability_zone),
                            "State" => Ok(__FieldTag::__state),
                            "CreateTime" => Ok(__FieldTag::__create_time),
                            "VolumeType" => Ok(__FieldTag::__volume_type),
                            "Iops" => Ok(__FieldTag::__iops),
                            "Encrypted" => Ok(__FieldTag::__encrypted),
                            "Attachments" => Ok(__FieldTag::__attachments),
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
            type Value = crate::model::Volume;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct Volume")
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
                        __FieldTag::__volume_id => {
                            if !fields.insert(__FieldTag::__volume_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for volume_id",
                                ));
                            }
                            result.volume_id = map.next_value::<std::option::Option<std::string::String>>()?;
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
                        __FieldTag::__availability_zone => {
                            if !fields.insert(__FieldTag::__availability_zone) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for availability_zone",
                                ));
                            }
                            result.availability_zone = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__state => {
                            if !fields.insert(__FieldTag::__state) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for state",
                                ));
                            }
                            result.state = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__create_time => {
                            if !fields.insert(__FieldTag::__create_time) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for create_time",
                                ));
                            }
                            result.create_time = map.next_value::<std::option::Option<wire::Timestamp>>()?;
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
                        __FieldTag::__attachments => {
                            if !fields.insert(__FieldTag::__attachments) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for attachments",
                                ));
                            }
                            result.attachments = map.next_value::<std::option::Option<std::vec::Vec<crate::model::VolumeAttachment>>>()?;
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

impl serde::ser::Serialize for crate::model::Volume {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.volume_id.as_ref() {
            state.serialize_entry("VolumeId", value)?;
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
        if let Some(value) = self.availability_zone.as_ref() {
            state.serialize_entry("AvailabilityZone", value)?;
        }
        if let Some(value) = self.state.as_ref() {
            state.serialize_entry("State", value)?;
        }
        if let Some(value) = self.create_time.as_ref() {
            state.serialize_entry("CreateTime", value)?;
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
        if let Some(value) = self.attachments.as_ref() {
            state.serialize_entry("Attachments", value)?;
        }
        if let Some(value) = self.tags.as_ref() {
            state.serialize_entry("Tags", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::IpRange {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __cidr_ip,
            __description,
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
                        formatter.write_str("a field name for IpRange")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "CidrIp" => Ok(__FieldTag::__cidr_ip),
                            "Description" => Ok(__FieldTag::__description),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::IpRange;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct IpRange")
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
                        __FieldTag::__cidr_ip => {
                            if !fields.insert(__FieldTag::__cidr_ip) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for cidr_ip",
                                ));
                            }
                            result.cidr_ip = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__description => {
                            if !fields.insert(__FieldTag::__description) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for description",
                                ));
                            }
                            result.description = map.next_value::<std::option::Option<std::string::String>>()?;
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

impl serde::ser::Serialize for crate::model::IpRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.cidr_ip.as_ref() {
            state.serialize_entry("CidrIp", value)?;
        }
        if let Some(value) = self.description.as_ref() {
            state.serialize_entry("Description", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::UserIdGroupPair {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __user_id,
            __group_id,
            __group_name,
            __description,
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
                        formatter.write_str("a field name for UserIdGroupPair")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "UserId" => Ok(__FieldTag::__user_id),
                            "GroupId" => Ok(__FieldTag::__group_id),
                            "GroupName" => Ok(__FieldTag::__group_name),
                            "Description" => Ok(__FieldTag::__description),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::UserIdGroupPair;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct UserIdGroupPair")
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
                        __FieldTag::__user_id => {
                            if !fields.insert(__FieldTag::__user_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for user_id",
                                ));
                            }
                            result.user_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__group_id => {
                            if !fields.insert(__FieldTag::__group_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for group_id",
                                ));
                            }
                            result.group_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__group_name => {
                            if !fields.insert(__FieldTag::__group_name) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for group_name",
                                ));
                            }
                            result.group_name = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__description => {
                            if !fields.insert(__FieldTag::__description) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for description",
                                ));
                            }
                            result.description = map.next_value::<std::option::Option<std::string::String>>()?;
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

impl serde::ser::Serialize for crate::model::UserIdGroupPair {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.user_id.as_ref() {
            state.serialize_entry("UserId", value)?;
        }
        if let Some(value) = self.group_id.as_ref() {
            state.serialize_entry("GroupId", value)?;
        }
        if let Some(value) = self.group_name.as_ref() {
            state.serialize_entry("GroupName", value)?;
        }
        if let Some(value) = self.description.as_ref() {
            state.serialize_entry("Description", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::IpPermission {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __ip_protocol,
            __from_port,
            __to_port,
            __ip_ranges,
            __user_id_group_pairs,
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
                        formatter.write_str("a field name for IpPermission")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "IpProtocol" => Ok(__FieldTag::__ip_protocol),
                            "FromPort" => Ok(__FieldTag::__from_port),
                            "ToPort" => Ok(__FieldTag::__to_port),
                            "IpRanges" => Ok(__FieldTag::__ip_ranges),
                            "UserIdGroupPairs" => Ok(__FieldTag::__user_id_group_pairs),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::IpPermission;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct IpPermission")
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
                        __FieldTag::__ip_protocol => {
                            if !fields.insert(__FieldTag::__ip_protocol) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for ip_protocol",
                                ));
                            }
                            result.ip_protocol = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__from_port => {
                            if !fields.insert(__FieldTag::__from_port) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for from_port",
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
                            result.from_port = map.next_value::<__With>()?.0;
                        }
                        __FieldTag::__to_port => {
                            if !fields.insert(__FieldTag::__to_port) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for to_port",
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
                            result.to_port = map.next_value::<__With>()?.0;
                        }
                        __FieldTag::__ip_ranges => {
                            if !fields.insert(__FieldTag::__ip_ranges) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for ip_ranges",
                                ));
                            }
                            result.ip_ranges = map.next_value::<std::option::Option<std::vec::Vec<crate::model::IpRange>>>()?;
                        }
                        __FieldTag::__user_id_group_pairs => {
                            if !fields.insert(__FieldTag::__user_id_group_pairs) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for user_id_group_pairs",
                                ));
                            }
                            result.user_id_group_pairs = map.next_value::<std::option::Option<std::vec::Vec<crate::model::UserIdGroupPair>>>()?;
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

impl serde::ser::Serialize for crate::model::IpPermission {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.ip_protocol.as_ref() {
            state.serialize_entry("IpProtocol", value)?;
        }
        if let Some(value) = self.from_port.as_ref() {
            struct __With<'a>(&'a i32);
            impl<'a> serde::ser::Serialize for __With<'a> {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::ser::Serializer,
                {
                    serde_with::As::<wire::internal::I32>::serialize(self.0, serializer)
                }
            }
            state.serialize_entry("FromPort", &__With(value))?;
        }
        if let Some(value) = self.to_port.as_ref() {
            struct __With<'a>(&'a i32);
            impl<'a> serde::ser::Serialize for __With<'a> {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::ser::Serializer,
                {
                    serde_with::As::<wire::internal::I32>::serialize(self.0, serializer)
                }
            }
            state.serialize_entry("ToPort", &__With(value))?;
        }
        if let Some(value) = self.ip_ranges.as_ref() {
            state.serialize_entry("IpRanges", value)?;
        }
        if let Some(value) = self.user_id_group_pairs.as_ref() {
            state.serialize_entry("UserIdGroupPairs", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::SecurityGroup {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __owner_id,
            __group_name,
            __group_id,
            __description,
            __vpc_id,
            __ip_permissions,
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
                        formatter.write_str("a field name for SecurityGroup")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "OwnerId" => Ok(__FieldTag::__owner_id),
                            "GroupName" => Ok(__FieldTag::__group_name),
                            "GroupId" => Ok(__FieldTag::__group_id),
                            "Description" => Ok(__FieldTag::__description),
                            "VpcId" => Ok(__FieldTag::__vpc_id),
                            "IpPermissions" => Ok(__FieldTag::__ip_permissions),
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
            type Value = crate::model::SecurityGroup;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct SecurityGroup")
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
                        __FieldTag::__owner_id => {
                            if !fields.insert(__FieldTag::__owner_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for owner_id",
                                ));
                            }
                            result.owner_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__group_name => {
                            if !fields.insert(__FieldTag::__group_name) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for group_name",
                                ));
                            }
                            result.group_name = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__group_id => {
                            if !fields.insert(__FieldTag::__group_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for group_id",
                                ));
                            }
                            result.group_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__description => {
                            if !fields.insert(__FieldTag::__description) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for description",
                                ));
                            }
                            result.description = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__vpc_id => {
                            if !fields.insert(__FieldTag::__vpc_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for vpc_id",
                                ));
                            }
                            result.vpc_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__ip_permissions => {
                            if !fields.insert(__FieldTag::__ip_permissions) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for ip_permissions",
                                ));
                            }
                            result.ip_permissions = map.next_value::<std::option::Option<std::vec::Vec<crate::model::IpPermission>>>()?;
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

impl serde::ser::Serialize for crate::model::SecurityGroup {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.owner_id.as_ref() {
            state.serialize_entry("OwnerId", value)?;
        }
        if let Some(value) = self.group_name.as_ref() {
            state.serialize_entry("GroupName", value)?;
        }
        if let Some(value) = self.group_id.as_ref() {
            state.serialize_entry("GroupId", value)?;
        }
        if let Some(value) = self.description.as_ref() {
            state.serialize_entry("Description", value)?;
        }
        if let Some(value) = self.vpc_id.as_ref() {
            state.serialize_entry("VpcId", value)?;
        }
        if let Some(value) = self.ip_permissions.as_ref() {
            state.serialize_entry("IpPermissions", value)?;
        }
        if let Some(value) = self.tags.as_ref() {
            state.serialize_entry("Tags", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::Route {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __destination_cidr_block,
            __gateway_id,
            __instance_id,
            __state,
            __origin,
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
                        formatter.write_str("a field name for Route")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "DestinationCidrBlock" => Ok(__FieldTag::__destination_cidr_block),
                            "GatewayId" => Ok(__FieldTag::__gateway_id),
                            "InstanceId" => Ok(__FieldTag::__instance_id),
                            "State" => Ok(__FieldTag::__state),
                            "Origin" => Ok(__FieldTag::__origin),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::Route;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct Route")
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
                        __FieldTag::__destination_cidr_block => {
                            if !fields.insert(__FieldTag::__destination_cidr_block) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for destination_cidr_block",
                                ));
                            }
                            result.destination_cidr_block = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__gateway_id => {
                            if !fields.insert(__FieldTag::__gateway_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for gateway_id",
                                ));
                            }
                            result.gateway_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__instance_id => {
                            if !fields.insert(__FieldTag::__instance_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for instance_id",
                                ));
                            }
                            result.instance_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__state => {
                            if !fields.insert(__FieldTag::__state) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for state",
                                ));
                            }
                            result.state = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__origin => {
                            if !fields.insert(__FieldTag::__origin) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for origin",
                                ));
                            }
                            result.origin = map.next_value::<std::option::Option<std::string::String>>()?;
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

impl serde::ser::Serialize for crate::model::Route {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.destination_cidr_block.as_ref() {
            state.serialize_entry("DestinationCidrBlock", value)?;
        }
        if let Some(value) = self.gateway_id.as_ref() {
            state.serialize_entry("GatewayId", value)?;
        }
        if let Some(value) = self.instance_id.as_ref() {
            state.serialize_entry("InstanceId", value)?;
        }
        if let Some(value) = self.state.as_ref() {
            state.serialize_entry("State", value)?;
        }
        if let Some(value) = self.origin.as_ref() {
            state.serialize_entry("Origin", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::RouteTableAssociation {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __route_table_association_id,
            __route_table_id,
            __subnet_id,
            __main,
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
                        formatter.write_str("a field name for RouteTableAssociation")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "RouteTableAssociationId" => Ok(__FieldTag::__route_table_association_id),
                            "RouteTableId" => Ok(__FieldTag::__route_table_id),
                            "SubnetId" => Ok(__FieldTag::__subnet_id),
                            "Main" => Ok(__FieldTag::__main),
                            _ => Ok(__FieldTag::Unknown),
                        }
                    }
                }
                deserializer.deserialize_identifier(Visitor)
            }
        }
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = crate::model::RouteTableAssociation;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct RouteTableAssociation")
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
                        __FieldTag::__route_table_association_id => {
                            if !fields.insert(__FieldTag::__route_table_association_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for route_table_association_id",
                                ));
                            }
                            result.route_table_association_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__route_table_id => {
                            if !fields.insert(__FieldTag::__route_table_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for route_table_id",
                                ));
                            }
                            result.route_table_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__subnet_id => {
                            if !fields.insert(__FieldTag::__subnet_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for subnet_id",
                                ));
                            }
                            result.subnet_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__main => {
                            if !fields.insert(__FieldTag::__main) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for main",
                                ));
                            }
                            result.main = map.next_value::<std::option::Option<bool>>()?;
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

impl serde::ser::Serialize for crate::model::RouteTableAssociation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.route_table_association_id.as_ref() {
            state.serialize_entry("RouteTableAssociationId", value)?;
        }
        if let Some(value) = self.route_table_id.as_ref() {
            state.serialize_entry("RouteTableId", value)?;
        }
        if let Some(value) = self.subnet_id.as_ref() {
            state.serialize_entry("SubnetId", value)?;
        }
        if let Some(value) = self.main.as_ref() {
            state.serialize_entry("Main", value)?;
        }
        state.end()
    }
}

impl<'de> serde::de::Deserialize<'de> for crate::model::RouteTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[allow(non_camel_case_types)]
        #[doc(hidden)]
        #[derive(PartialEq, Eq, Hash)]
        enum __FieldTag {
            __route_table_id,
            __vpc_id,
            __routes,
            __associations,
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
                        formatter.write_str("a field name for RouteTable")
                    }
                    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        use std::result::Result::Ok;
                        match value {
                            "RouteTableId" => Ok(__FieldTag::__route_table_id),
                            "VpcId" => Ok(__FieldTag::__vpc_id),
                            "Routes" => Ok(__FieldTag::__routes),
                            "Associations" => Ok(__FieldTag::__associations),
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
            type Value = crate::model::RouteTable;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("struct RouteTable")
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
                        __FieldTag::__route_table_id => {
                            if !fields.insert(__FieldTag::__route_table_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for route_table_id",
                                ));
                            }
                            result.route_table_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__vpc_id => {
                            if !fields.insert(__FieldTag::__vpc_id) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for vpc_id",
                                ));
                            }
                            result.vpc_id = map.next_value::<std::option::Option<std::string::String>>()?;
                        }
                        __FieldTag::__routes => {
                            if !fields.insert(__FieldTag::__routes) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for routes",
                                ));
                            }
                            result.routes = map.next_value::<std::option::Option<std::vec::Vec<crate::model::Route>>>()?;
                        }
                        __FieldTag::__associations => {
                            if !fields.insert(__FieldTag::__associations) {
                                return std::result::Result::Err(A::Error::duplicate_field(
                                    "multiple values for associations",
                                ));
                            }
                            result.associations = map.next_value::<std::option::Option<std::vec::Vec<crate::model::RouteTableAssociation>>>()?;
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

impl serde::ser::Serialize for crate::model::RouteTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        #[allow(unused_imports)]
        use std::option::Option::Some;
        let mut state = serializer.serialize_map(std::option::Option::None)?;
        if let Some(value) = self.route_table_id.as_ref() {
            state.serialize_entry("RouteTableId", value)?;
        }
        if let Some(value) = self.vpc_id.as_ref() {
            state.serialize_entry("VpcId", value)?;
        }
        if let Some(value) = self.routes.as_ref() {
            state.serialize_entry("Routes", value)?;
        }
        if let Some(value) = self.associations.as_ref() {
            state.serialize_entry("Associations", value)?;
        }
        if let Some(value) = self.tags.as_ref() {
            state.serialize_entry("Tags", value)?;
        }
        state.end()
    }
}

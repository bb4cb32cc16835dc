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

//! Query-string request marshallers.
//!
//! Each function renders one request record as the parameter list for its
//! operation. Absent fields produce no parameters; list members are
//! indexed from 1. Marshalling never fails: a default request still
//! yields the `Action` and `Version` pair.

use crate::model;
use wire::query::Params;
use wire::scalar;

pub fn allocate_address(req: &model::AllocateAddressRequest) -> Params {
    let mut params = Params::new("AllocateAddress", crate::API_VERSION);
    if let Some(value) = req.domain.as_ref() {
        params.put("Domain", value.as_str());
    }
    params
}

pub fn release_address(req: &model::ReleaseAddressRequest) -> Params {
    let mut params = Params::new("ReleaseAddress", crate::API_VERSION);
    if let Some(value) = req.public_ip.as_ref() {
        params.put("PublicIp", value.as_str());
    }
    if let Some(value) = req.allocation_id.as_ref() {
        params.put("AllocationId", value.as_str());
    }
    params
}

pub fn describe_addresses(req: &model::DescribeAddressesRequest) -> Params {
    let mut params = Params::new("DescribeAddresses", crate::API_VERSION);
    put_string_list(&mut params, "PublicIp", req.public_ips.as_deref());
    put_string_list(&mut params, "AllocationId", req.allocation_ids.as_deref());
    put_filters(&mut params, req.filters.as_deref());
    params
}

pub fn describe_instances(req: &model::DescribeInstancesRequest) -> Params {
    let mut params = Params::new("DescribeInstances", crate::API_VERSION);
    put_string_list(&mut params, "InstanceId", req.instance_ids.as_deref());
    put_filters(&mut params, req.filters.as_deref());
    if let Some(value) = req.max_results {
        params.put("MaxResults", scalar::fmt_i32(value));
    }
    if let Some(value) = req.next_token.as_ref() {
        params.put("NextToken", value.as_str());
    }
    params
}

pub fn run_instances(req: &model::RunInstancesRequest) -> Params {
    let mut params = Params::new("RunInstances", crate::API_VERSION);
    if let Some(value) = req.image_id.as_ref() {
        params.put("ImageId", value.as_str());
    }
    if let Some(value) = req.min_count {
        params.put("MinCount", scalar::fmt_i32(value));
    }
    if let Some(value) = req.max_count {
        params.put("MaxCount", scalar::fmt_i32(value));
    }
    if let Some(value) = req.key_name.as_ref() {
        params.put("KeyName", value.as_str());
    }
    if let Some(value) = req.instance_type.as_ref() {
        params.put("InstanceType", value.as_str());
    }
    put_string_list(
        &mut params,
        "SecurityGroupId",
        req.security_group_ids.as_deref(),
    );
    put_string_list(&mut params, "SecurityGroup", req.security_groups.as_deref());
    if let Some(value) = req.subnet_id.as_ref() {
        params.put("SubnetId", value.as_str());
    }
    put_tag_specifications(&mut params, req.tag_specifications.as_deref());
    params
}

pub fn create_tags(req: &model::CreateTagsRequest) -> Params {
    let mut params = Params::new("CreateTags", crate::API_VERSION);
    put_string_list(&mut params, "ResourceId", req.resources.as_deref());
    if let Some(tags) = req.tags.as_ref() {
        for (i, tag) in tags.iter().enumerate() {
            put_tag(&mut params, &format!("Tag.{}", i + 1), tag);
        }
    }
    params
}

pub fn create_volume(req: &model::CreateVolumeRequest) -> Params {
    let mut params = Params::new("CreateVolume", crate::API_VERSION);
    if let Some(value) = req.availability_zone.as_ref() {
        params.put("AvailabilityZone", value.as_str());
    }
    if let Some(value) = req.size {
        params.put("Size", scalar::fmt_i32(value));
    }
    if let Some(value) = req.snapshot_id.as_ref() {
        params.put("SnapshotId", value.as_str());
    }
    if let Some(value) = req.volume_type.as_ref() {
        params.put("VolumeType", value.as_str());
    }
    if let Some(value) = req.iops {
        params.put("Iops", scalar::fmt_i32(value));
    }
    if let Some(value) = req.encrypted {
        params.put("Encrypted", scalar::fmt_bool(value));
    }
    put_tag_specifications(&mut params, req.tag_specifications.as_deref());
    params
}

pub fn describe_volumes(req: &model::DescribeVolumesRequest) -> Params {
    let mut params = Params::new("DescribeVolumes", crate::API_VERSION);
    put_string_list(&mut params, "VolumeId", req.volume_ids.as_deref());
    put_filters(&mut params, req.filters.as_deref());
    if let Some(value) = req.max_results {
        params.put("MaxResults", scalar::fmt_i32(value));
    }
    if let Some(value) = req.next_token.as_ref() {
        params.put("NextToken", value.as_str());
    }
    params
}

pub fn describe_security_groups(req: &model::DescribeSecurityGroupsRequest) -> Params {
    let mut params = Params::new("DescribeSecurityGroups", crate::API_VERSION);
    put_string_list(&mut params, "GroupId", req.group_ids.as_deref());
    put_string_list(&mut params, "GroupName", req.group_names.as_deref());
    put_filters(&mut params, req.filters.as_deref());
    params
}

pub fn describe_route_tables(req: &model::DescribeRouteTablesRequest) -> Params {
    let mut params = Params::new("DescribeRouteTables", crate::API_VERSION);
    put_string_list(&mut params, "RouteTableId", req.route_table_ids.as_deref());
    put_filters(&mut params, req.filters.as_deref());
    params
}

fn put_string_list(params: &mut Params, name: &str, values: Option<&[String]>) {
    if let Some(values) = values {
        for (i, value) in values.iter().enumerate() {
            params.put(format!("{}.{}", name, i + 1), value.as_str());
        }
    }
}

fn put_filters(params: &mut Params, filters: Option<&[model::Filter]>) {
    if let Some(filters) = filters {
        for (i, filter) in filters.iter().enumerate() {
            let prefix = format!("Filter.{}", i + 1);
            if let Some(name) = filter.name.as_ref() {
                params.put(format!("{prefix}.Name"), name.as_str());
            }
            if let Some(values) = filter.values.as_ref() {
                for (j, value) in values.iter().enumerate() {
                    params.put(format!("{}.Value.{}", prefix, j + 1), value.as_str());
                }
            }
        }
    }
}

fn put_tag(params: &mut Params, prefix: &str, tag: &model::Tag) {
    if let Some(key) = tag.key.as_ref() {
        params.put(format!("{prefix}.Key"), key.as_str());
    }
    if let Some(value) = tag.value.as_ref() {
        params.put(format!("{prefix}.Value"), value.as_str());
    }
}

fn put_tag_specifications(params: &mut Params, specs: Option<&[model::TagSpecification]>) {
    if let Some(specs) = specs {
        for (i, spec) in specs.iter().enumerate() {
            let prefix = format!("TagSpecification.{}", i + 1);
            if let Some(value) = spec.resource_type.as_ref() {
                params.put(format!("{prefix}.ResourceType"), value.as_str());
            }
            if let Some(tags) = spec.tags.as_ref() {
                for (j, tag) in tags.iter().enumerate() {
                    put_tag(params, &format!("{}.Tag.{}", prefix, j + 1), tag);
                }
            }
        }
    }
}

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

//! Pull-XML response unmarshallers.
//!
//! Each function reads one record from the cursor. The record's direct
//! child tags live at the entry depth plus one, or plus two when the
//! cursor is at the start of the document and the outermost element is the
//! response envelope. A nested record consumes its whole subtree,
//! including its end tag; the caller's loop resumes at the parent depth.
//! Unmatched tags are skipped. The loop ends on the end tag that drops
//! below the entry depth, or at end of document.

use crate::model;
use wire::DecodeError;
use wire::scalar;
use wire::xml::{XmlCursor, XmlToken};

pub fn allocate_address_result(
    cursor: &mut XmlCursor,
) -> Result<model::AllocateAddressResult, DecodeError> {
    let mut result = model::AllocateAddressResult::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("publicIp", target_depth) {
                    result.public_ip = Some(cursor.read_text()?);
                } else if cursor.test_expression("allocationId", target_depth) {
                    result.allocation_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("domain", target_depth) {
                    result.domain = Some(cursor.read_text()?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn describe_addresses_result(
    cursor: &mut XmlCursor,
) -> Result<model::DescribeAddressesResult, DecodeError> {
    let mut result = model::DescribeAddressesResult::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("addressesSet/item", target_depth) {
                    result
                        .addresses
                        .get_or_insert_with(Vec::new)
                        .push(address(cursor)?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn describe_instances_result(
    cursor: &mut XmlCursor,
) -> Result<model::DescribeInstancesResult, DecodeError> {
    let mut result = model::DescribeInstancesResult::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("reservationSet/item", target_depth) {
                    result
                        .reservations
                        .get_or_insert_with(Vec::new)
                        .push(reservation(cursor)?);
                } else if cursor.test_expression("nextToken", target_depth) {
                    result.next_token = Some(cursor.read_text()?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

/// The response document body is the reservation itself.
pub fn run_instances_result(
    cursor: &mut XmlCursor,
) -> Result<model::RunInstancesResult, DecodeError> {
    let value = reservation(cursor)?;
    Ok(model::RunInstancesResult::new().set_reservation(value))
}

/// The response document body is the volume itself.
pub fn create_volume_result(
    cursor: &mut XmlCursor,
) -> Result<model::CreateVolumeResult, DecodeError> {
    let value = volume(cursor)?;
    Ok(model::CreateVolumeResult::new().set_volume(value))
}

pub fn describe_volumes_result(
    cursor: &mut XmlCursor,
) -> Result<model::DescribeVolumesResult, DecodeError> {
    let mut result = model::DescribeVolumesResult::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("volumeSet/item", target_depth) {
                    result
                        .volumes
                        .get_or_insert_with(Vec::new)
                        .push(volume(cursor)?);
                } else if cursor.test_expression("nextToken", target_depth) {
                    result.next_token = Some(cursor.read_text()?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn describe_security_groups_result(
    cursor: &mut XmlCursor,
) -> Result<model::DescribeSecurityGroupsResult, DecodeError> {
    let mut result = model::DescribeSecurityGroupsResult::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("securityGroupInfo/item", target_depth) {
                    result
                        .security_groups
                        .get_or_insert_with(Vec::new)
                        .push(security_group(cursor)?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn describe_route_tables_result(
    cursor: &mut XmlCursor,
) -> Result<model::DescribeRouteTablesResult, DecodeError> {
    let mut result = model::DescribeRouteTablesResult::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("routeTableSet/item", target_depth) {
                    result
                        .route_tables
                        .get_or_insert_with(Vec::new)
                        .push(route_table(cursor)?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn tag(cursor: &mut XmlCursor) -> Result<model::Tag, DecodeError> {
    let mut result = model::Tag::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("key", target_depth) {
                    result.key = Some(cursor.read_text()?);
                } else if cursor.test_expression("value", target_depth) {
                    result.value = Some(cursor.read_text()?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn group_identifier(cursor: &mut XmlCursor) -> Result<model::GroupIdentifier, DecodeError> {
    let mut result = model::GroupIdentifier::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("groupName", target_depth) {
                    result.group_name = Some(cursor.read_text()?);
                } else if cursor.test_expression("groupId", target_depth) {
                    result.group_id = Some(cursor.read_text()?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn instance_state(cursor: &mut XmlCursor) -> Result<model::InstanceState, DecodeError> {
    let mut result = model::InstanceState::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("code", target_depth) {
                    result.code = Some(scalar::parse_i32(&cursor.read_text()?)?);
                } else if cursor.test_expression("name", target_depth) {
                    result.name = Some(cursor.read_text()?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn instance(cursor: &mut XmlCursor) -> Result<model::Instance, DecodeError> {
    let mut result = model::Instance::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("instanceId", target_depth) {
                    result.instance_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("imageId", target_depth) {
                    result.image_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("instanceType", target_depth) {
                    result.instance_type = Some(cursor.read_text()?);
                } else if cursor.test_expression("instanceState", target_depth) {
                    result.state = Some(instance_state(cursor)?);
                } else if cursor.test_expression("keyName", target_depth) {
                    result.key_name = Some(cursor.read_text()?);
                } else if cursor.test_expression("launchTime", target_depth) {
                    result.launch_time = Some(scalar::parse_timestamp(&cursor.read_text()?)?);
                } else if cursor.test_expression("privateIpAddress", target_depth) {
                    result.private_ip_address = Some(cursor.read_text()?);
                } else if cursor.test_expression("ipAddress", target_depth) {
                    result.public_ip_address = Some(cursor.read_text()?);
                } else if cursor.test_expression("subnetId", target_depth) {
                    result.subnet_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("vpcId", target_depth) {
                    result.vpc_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("groupSet/item", target_depth) {
                    result
                        .security_groups
                        .get_or_insert_with(Vec::new)
                        .push(group_identifier(cursor)?);
                } else if cursor.test_expression("tagSet/item", target_depth) {
                    result.tags.get_or_insert_with(Vec::new).push(tag(cursor)?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn reservation(cursor: &mut XmlCursor) -> Result<model::Reservation, DecodeError> {
    let mut result = model::Reservation::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("reservationId", target_depth) {
                    result.reservation_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("ownerId", target_depth) {
                    result.owner_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("groupSet/item", target_depth) {
                    result
                        .groups
                        .get_or_insert_with(Vec::new)
                        .push(group_identifier(cursor)?);
                } else if cursor.test_expression("instancesSet/item", target_depth) {
                    result
                        .instances
                        .get_or_insert_with(Vec::new)
                        .push(instance(cursor)?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn address(cursor: &mut XmlCursor) -> Result<model::Address, DecodeError> {
    let mut result = model::Address::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("publicIp", target_depth) {
                    result.public_ip = Some(cursor.read_text()?);
                } else if cursor.test_expression("allocationId", target_depth) {
                    result.allocation_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("domain", target_depth) {
                    result.domain = Some(cursor.read_text()?);
                } else if cursor.test_expression("instanceId", target_depth) {
                    result.instance_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("associationId", target_depth) {
                    result.association_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("networkInterfaceId", target_depth) {
                    result.network_interface_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("privateIpAddress", target_depth) {
                    result.private_ip_address = Some(cursor.read_text()?);
                } else if cursor.test_expression("tagSet/item", target_depth) {
                    result.tags.get_or_insert_with(Vec::new).push(tag(cursor)?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn volume_attachment(cursor: &mut XmlCursor) -> Result<model::VolumeAttachment, DecodeError> {
    let mut result = model::VolumeAttachment::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("volumeId", target_depth) {
                    result.volume_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("instanceId", target_depth) {
                    result.instance_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("device", target_depth) {
                    result.device = Some(cursor.read_text()?);
                } else if cursor.test_expression("status", target_depth) {
                    result.state = Some(cursor.read_text()?);
                } else if cursor.test_expression("attachTime", target_depth) {
                    result.attach_time = Some(scalar::parse_timestamp(&cursor.read_text()?)?);
                } else if cursor.test_expression("deleteOnTermination", target_depth) {
                    result.delete_on_termination = Some(scalar::parse_bool(&cursor.read_text()?)?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn volume(cursor: &mut XmlCursor) -> Result<model::Volume, DecodeError> {
    let mut result = model::Volume::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("volumeId", target_depth) {
                    result.volume_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("size", target_depth) {
                    result.size = Some(scalar::parse_i32(&cursor.read_text()?)?);
                } else if cursor.test_expression("snapshotId", target_depth) {
                    result.snapshot_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("availabilityZone", target_depth) {
                    result.availability_zone = Some(cursor.read_text()?);
                } else if cursor.test_expression("status", target_depth) {
                    result.state = Some(cursor.read_text()?);
                } else if cursor.test_expression("createTime", target_depth) {
                    result.create_time = Some(scalar::parse_timestamp(&cursor.read_text()?)?);
                } else if cursor.test_expression("volumeType", target_depth) {
                    result.volume_type = Some(cursor.read_text()?);
                } else if cursor.test_expression("iops", target_depth) {
                    result.iops = Some(scalar::parse_i32(&cursor.read_text()?)?);
                } else if cursor.test_expression("encrypted", target_depth) {
                    result.encrypted = Some(scalar::parse_bool(&cursor.read_text()?)?);
                } else if cursor.test_expression("attachmentSet/item", target_depth) {
                    result
                        .attachments
                        .get_or_insert_with(Vec::new)
                        .push(volume_attachment(cursor)?);
                } else if cursor.test_expression("tagSet/item", target_depth) {
                    result.tags.get_or_insert_with(Vec::new).push(tag(cursor)?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn ip_range(cursor: &mut XmlCursor) -> Result<model::IpRange, DecodeError> {
    let mut result = model::IpRange::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("cidrIp", target_depth) {
                    result.cidr_ip = Some(cursor.read_text()?);
                } else if cursor.test_expression("description", target_depth) {
                    result.description = Some(cursor.read_text()?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn user_id_group_pair(cursor: &mut XmlCursor) -> Result<model::UserIdGroupPair, DecodeError> {
    let mut result = model::UserIdGroupPair::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("userId", target_depth) {
                    result.user_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("groupId", target_depth) {
                    result.group_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("groupName", target_depth) {
                    result.group_name = Some(cursor.read_text()?);
                } else if cursor.test_expression("description", target_depth) {
                    result.description = Some(cursor.read_text()?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn ip_permission(cursor: &mut XmlCursor) -> Result<model::IpPermission, DecodeError> {
    let mut result = model::IpPermission::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("ipProtocol", target_depth) {
                    result.ip_protocol = Some(cursor.read_text()?);
                } else if cursor.test_expression("fromPort", target_depth) {
                    result.from_port = Some(scalar::parse_i32(&cursor.read_text()?)?);
                } else if cursor.test_expression("toPort", target_depth) {
                    result.to_port = Some(scalar::parse_i32(&cursor.read_text()?)?);
                } else if cursor.test_expression("ipRanges/item", target_depth) {
                    result
                        .ip_ranges
                        .get_or_insert_with(Vec::new)
                        .push(ip_range(cursor)?);
                } else if cursor.test_expression("groups/item", target_depth) {
                    result
                        .user_id_group_pairs
                        .get_or_insert_with(Vec::new)
                        .push(user_id_group_pair(cursor)?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn security_group(cursor: &mut XmlCursor) -> Result<model::SecurityGroup, DecodeError> {
    let mut result = model::SecurityGroup::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("ownerId", target_depth) {
                    result.owner_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("groupName", target_depth) {
                    result.group_name = Some(cursor.read_text()?);
                } else if cursor.test_expression("groupId", target_depth) {
                    result.group_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("groupDescription", target_depth) {
                    result.description = Some(cursor.read_text()?);
                } else if cursor.test_expression("vpcId", target_depth) {
                    result.vpc_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("ipPermissions/item", target_depth) {
                    result
                        .ip_permissions
                        .get_or_insert_with(Vec::new)
                        .push(ip_permission(cursor)?);
                } else if cursor.test_expression("tagSet/item", target_depth) {
                    result.tags.get_or_insert_with(Vec::new).push(tag(cursor)?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn route(cursor: &mut XmlCursor) -> Result<model::Route, DecodeError> {
    let mut result = model::Route::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("destinationCidrBlock", target_depth) {
                    result.destination_cidr_block = Some(cursor.read_text()?);
                } else if cursor.test_expression("gatewayId", target_depth) {
                    result.gateway_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("instanceId", target_depth) {
                    result.instance_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("state", target_depth) {
                    result.state = Some(cursor.read_text()?);
                } else if cursor.test_expression("origin", target_depth) {
                    result.origin = Some(cursor.read_text()?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn route_table_association(
    cursor: &mut XmlCursor,
) -> Result<model::RouteTableAssociation, DecodeError> {
    let mut result = model::RouteTableAssociation::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("routeTableAssociationId", target_depth) {
                    result.route_table_association_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("routeTableId", target_depth) {
                    result.route_table_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("subnetId", target_depth) {
                    result.subnet_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("main", target_depth) {
                    result.main = Some(scalar::parse_bool(&cursor.read_text()?)?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

pub fn route_table(cursor: &mut XmlCursor) -> Result<model::RouteTable, DecodeError> {
    let mut result = model::RouteTable::new();
    let original_depth = cursor.current_depth();
    let mut target_depth = original_depth + 1;
    if cursor.is_start_of_document() {
        target_depth += 1;
    }
    loop {
        match cursor.next_event()? {
            XmlToken::EndDocument => break,
            XmlToken::StartElement => {
                if cursor.test_expression("routeTableId", target_depth) {
                    result.route_table_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("vpcId", target_depth) {
                    result.vpc_id = Some(cursor.read_text()?);
                } else if cursor.test_expression("routeSet/item", target_depth) {
                    result
                        .routes
                        .get_or_insert_with(Vec::new)
                        .push(route(cursor)?);
                } else if cursor.test_expression("associationSet/item", target_depth) {
                    result
                        .associations
                        .get_or_insert_with(Vec::new)
                        .push(route_table_association(cursor)?);
                } else if cursor.test_expression("tagSet/item", target_depth) {
                    result.tags.get_or_insert_with(Vec::new).push(tag(cursor)?);
                }
            }
            XmlToken::EndElement => {
                if cursor.current_depth() < original_depth {
                    break;
                }
            }
        }
    }
    Ok(result)
}

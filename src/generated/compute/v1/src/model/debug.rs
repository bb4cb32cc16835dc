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

impl std::fmt::Debug for crate::model::Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Tag");
        debug_struct.field("key", &self.key);
        debug_struct.field("value", &self.value);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::TagSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("TagSpecification");
        debug_struct.field("resource_type", &self.resource_type);
        debug_struct.field("tags", &self.tags);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Filter");
        debug_struct.field("name", &self.name);
        debug_struct.field("values", &self.values);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::GroupIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("GroupIdentifier");
        debug_struct.field("group_name", &self.group_name);
        debug_struct.field("group_id", &self.group_id);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::InstanceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("InstanceState");
        debug_struct.field("code", &self.code);
        debug_struct.field("name", &self.name);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Instance");
        debug_struct.field("instance_id", &self.instance_id);
        debug_struct.field("image_id", &self.image_id);
        debug_struct.field("instance_type", &self.instance_type);
        debug_struct.field("state", &self.state);
        debug_struct.field("key_name", &self.key_name);
        debug_struct.field("launch_time", &self.launch_time);
        debug_struct.field("private_ip_address", &self.private_ip_address);
        debug_struct.field("public_ip_address", &self.public_ip_address);
        debug_struct.field("subnet_id", &self.subnet_id);
        debug_struct.field("vpc_id", &self.vpc_id);
        debug_struct.field("security_groups", &self.security_groups);
        debug_struct.field("tags", &self.tags);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Reservation");
        debug_struct.field("reservation_id", &self.reservation_id);
        debug_struct.field("owner_id", &self.owner_id);
        debug_struct.field("groups", &self.groups);
        debug_struct.field("instances", &self.instances);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Address");
        debug_struct.field("public_ip", &self.public_ip);
        debug_struct.field("allocation_id", &self.allocation_id);
        debug_struct.field("domain", &self.domain);
        debug_struct.field("instance_id", &self.instance_id);
        debug_struct.field("association_id", &self.association_id);
        debug_struct.field("network_interface_id", &self.network_interface_id);
        debug_struct.field("private_ip_address", &self.private_ip_address);
        debug_struct.field("tags", &self.tags);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::VolumeAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("VolumeAttachment");
        debug_struct.field("volume_id", &self.volume_id);
        debug_struct.field("instance_id", &self.instance_id);
        debug_struct.field("device", &self.device);
        debug_struct.field("state", &self.state);
        debug_struct.field("attach_time", &self.attach_time);
        debug_struct.field("delete_on_termination", &self.delete_on_termination);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Volume");
        debug_struct.field("volume_id", &self.volume_id);
        debug_struct.field("size", &self.size);
        debug_struct.field("snapshot_id", &self.snapshot_id);
        debug_struct.field("availability_zone", &self.availability_zone);
        debug_struct.field("state", &self.state);
        debug_struct.field("create_time", &self.create_time);
        debug_struct.field("volume_type", &self.volume_type);
        debug_struct.field("iops", &self.iops);
        debug_struct.field("encrypted", &self.encrypted);
        debug_struct.field("attachments", &self.attachments);
        debug_struct.field("tags", &self.tags);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::IpRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("IpRange");
        debug_struct.field("cidr_ip", &self.cidr_ip);
        debug_struct.field("description", &self.description);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UserIdGroupPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UserIdGroupPair");
        debug_struct.field("user_id", &self.user_id);
        debug_struct.field("group_id", &self.group_id);
        debug_struct.field("group_name", &self.group_name);
        debug_struct.field("description", &self.description);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::IpPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("IpPermission");
        debug_struct.field("ip_protocol", &self.ip_protocol);
        debug_struct.field("from_port", &self.from_port);
        debug_struct.field("to_port", &self.to_port);
        debug_struct.field("ip_ranges", &self.ip_ranges);
        debug_struct.field("user_id_group_pairs", &self.user_id_group_pairs);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::SecurityGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("SecurityGroup");
        debug_struct.field("owner_id", &self.owner_id);
        debug_struct.field("group_name", &self.group_name);
        debug_struct.field("group_id", &self.group_id);
        debug_struct.field("description", &self.description);
        debug_struct.field("vpc_id", &self.vpc_id);
        debug_struct.field("ip_permissions", &self.ip_permissions);
        debug_struct.field("tags", &self.tags);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Route");
        debug_struct.field("destination_cidr_block", &self.destination_cidr_block);
        debug_struct.field("gateway_id", &self.gateway_id);
        debug_struct.field("instance_id", &self.instance_id);
        debug_struct.field("state", &self.state);
        debug_struct.field("origin", &self.origin);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::RouteTableAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RouteTableAssociation");
        debug_struct.field(
            "route_table_association_id",
            &self.route_table_association_id,
        );
        debug_struct.field("route_table_id", &self.route_table_id);
        debug_struct.field("subnet_id", &self.subnet_id);
        debug_struct.field("main", &self.main);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RouteTable");
        debug_struct.field("route_table_id", &self.route_table_id);
        debug_struct.field("vpc_id", &self.vpc_id);
        debug_struct.field("routes", &self.routes);
        debug_struct.field("associations", &self.associations);
        debug_struct.field("tags", &self.tags);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AllocateAddressRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AllocateAddressRequest");
        debug_struct.field("domain", &self.domain);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ReleaseAddressRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ReleaseAddressRequest");
        debug_struct.field("public_ip", &self.public_ip);
        debug_struct.field("allocation_id", &self.allocation_id);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeAddressesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeAddressesRequest");
        debug_struct.field("public_ips", &self.public_ips);
        debug_struct.field("allocation_ids", &self.allocation_ids);
        debug_struct.field("filters", &self.filters);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeInstancesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeInstancesRequest");
        debug_struct.field("instance_ids", &self.instance_ids);
        debug_struct.field("filters", &self.filters);
        debug_struct.field("max_results", &self.max_results);
        debug_struct.field("next_token", &self.next_token);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::RunInstancesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RunInstancesRequest");
        debug_struct.field("image_id", &self.image_id);
        debug_struct.field("min_count", &self.min_count);
        debug_struct.field("max_count", &self.max_count);
        debug_struct.field("key_name", &self.key_name);
        debug_struct.field("instance_type", &self.instance_type);
        debug_struct.field("security_group_ids", &self.security_group_ids);
        debug_struct.field("security_groups", &self.security_groups);
        debug_struct.field("subnet_id", &self.subnet_id);
        debug_struct.field("tag_specifications", &self.tag_specifications);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateTagsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateTagsRequest");
        debug_struct.field("resources", &self.resources);
        debug_struct.field("tags", &self.tags);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateVolumeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateVolumeRequest");
        debug_struct.field("availability_zone", &self.availability_zone);
        debug_struct.field("size", &self.size);
        debug_struct.field("snapshot_id", &self.snapshot_id);
        debug_struct.field("volume_type", &self.volume_type);
        debug_struct.field("iops", &self.iops);
        debug_struct.field("encrypted", &self.encrypted);
        debug_struct.field("tag_specifications", &self.tag_specifications);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeVolumesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeVolumesRequest");
        debug_struct.field("volume_ids", &self.volume_ids);
        debug_struct.field("filters", &self.filters);
        debug_struct.field("max_results", &self.max_results);
        debug_struct.field("next_token", &self.next_token);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeSecurityGroupsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeSecurityGroupsRequest");
        debug_struct.field("group_ids", &self.group_ids);
        debug_struct.field("group_names", &self.group_names);
        debug_struct.field("filters", &self.filters);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeRouteTablesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeRouteTablesRequest");
        debug_struct.field("route_table_ids", &self.route_table_ids);
        debug_struct.field("filters", &self.filters);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AllocateAddressResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AllocateAddressResult");
        debug_struct.field("public_ip", &self.public_ip);
        debug_struct.field("allocation_id", &self.allocation_id);
        debug_struct.field("domain", &self.domain);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeAddressesResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeAddressesResult");
        debug_struct.field("addresses", &self.addresses);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeInstancesResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeInstancesResult");
        debug_struct.field("reservations", &self.reservations);
        debug_struct.field("next_token", &self.next_token);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::RunInstancesResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RunInstancesResult");
        debug_struct.field("reservation", &self.reservation);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateVolumeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateVolumeResult");
        debug_struct.field("volume", &self.volume);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeVolumesResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeVolumesResult");
        debug_struct.field("volumes", &self.volumes);
        debug_struct.field("next_token", &self.next_token);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeSecurityGroupsResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeSecurityGroupsResult");
        debug_struct.field("security_groups", &self.security_groups);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeRouteTablesResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeRouteTablesResult");
        debug_struct.field("route_tables", &self.route_tables);
        debug_struct.finish()
    }
}

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

//! The request and response records for the Nimbus Compute API.
//!
//! Every field is optional: absent fields are omitted from output and
//! simply never set on input. List fields distinguish absent
//! (`None`) from present-but-empty (`Some(vec![])`). Records carry no
//! identity beyond their field values and live only for the duration of
//! one marshall or unmarshall call.

use wire::Timestamp;

mod debug;

/// A key/value metadata tag attached to a resource.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [key][crate::model::Tag::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets the value of [value][crate::model::Tag::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }
}

/// Tags to apply to a resource at creation time.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct TagSpecification {
    /// The kind of resource the tags apply to, e.g. `instance` or `volume`.
    pub resource_type: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

impl TagSpecification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_resource_type<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_type = Some(v.into());
        self
    }

    pub fn set_tags<T: IntoIterator<Item = Tag>>(mut self, v: T) -> Self {
        self.tags = Some(v.into_iter().collect());
        self
    }
}

/// A name/values predicate used by the Describe operations.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Filter {
    pub name: Option<String>,
    pub values: Option<Vec<String>>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }
}

/// A security group reference on an instance or reservation.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct GroupIdentifier {
    pub group_name: Option<String>,
    pub group_id: Option<String>,
}

impl GroupIdentifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.group_name = Some(v.into());
        self
    }

    pub fn set_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.group_id = Some(v.into());
        self
    }
}

/// The running state of an instance.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct InstanceState {
    /// The numeric state code; the low byte is the state, higher bits are
    /// for internal use and pass through uninterpreted.
    pub code: Option<i32>,
    pub name: Option<String>,
}

impl InstanceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_code<T: Into<i32>>(mut self, v: T) -> Self {
        self.code = Some(v.into());
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// A compute instance.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Instance {
    pub instance_id: Option<String>,
    pub image_id: Option<String>,
    pub instance_type: Option<String>,
    pub state: Option<InstanceState>,
    pub key_name: Option<String>,
    pub launch_time: Option<Timestamp>,
    pub private_ip_address: Option<String>,
    pub public_ip_address: Option<String>,
    pub subnet_id: Option<String>,
    pub vpc_id: Option<String>,
    pub security_groups: Option<Vec<GroupIdentifier>>,
    pub tags: Option<Vec<Tag>>,
}

impl Instance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = Some(v.into());
        self
    }

    pub fn set_image_id<T: Into<String>>(mut self, v: T) -> Self {
        self.image_id = Some(v.into());
        self
    }

    pub fn set_instance_type<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_type = Some(v.into());
        self
    }

    pub fn set_state<T: Into<InstanceState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    pub fn set_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.key_name = Some(v.into());
        self
    }

    pub fn set_launch_time<T: Into<Timestamp>>(mut self, v: T) -> Self {
        self.launch_time = Some(v.into());
        self
    }

    pub fn set_private_ip_address<T: Into<String>>(mut self, v: T) -> Self {
        self.private_ip_address = Some(v.into());
        self
    }

    pub fn set_public_ip_address<T: Into<String>>(mut self, v: T) -> Self {
        self.public_ip_address = Some(v.into());
        self
    }

    pub fn set_subnet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.subnet_id = Some(v.into());
        self
    }

    pub fn set_vpc_id<T: Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = Some(v.into());
        self
    }

    pub fn set_security_groups<T: IntoIterator<Item = GroupIdentifier>>(mut self, v: T) -> Self {
        self.security_groups = Some(v.into_iter().collect());
        self
    }

    pub fn set_tags<T: IntoIterator<Item = Tag>>(mut self, v: T) -> Self {
        self.tags = Some(v.into_iter().collect());
        self
    }
}

/// A launch group of instances sharing one request.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Reservation {
    pub reservation_id: Option<String>,
    pub owner_id: Option<String>,
    pub groups: Option<Vec<GroupIdentifier>>,
    pub instances: Option<Vec<Instance>>,
}

impl Reservation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reservation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.reservation_id = Some(v.into());
        self
    }

    pub fn set_owner_id<T: Into<String>>(mut self, v: T) -> Self {
        self.owner_id = Some(v.into());
        self
    }

    pub fn set_groups<T: IntoIterator<Item = GroupIdentifier>>(mut self, v: T) -> Self {
        self.groups = Some(v.into_iter().collect());
        self
    }

    pub fn set_instances<T: IntoIterator<Item = Instance>>(mut self, v: T) -> Self {
        self.instances = Some(v.into_iter().collect());
        self
    }
}

/// An elastic public IP address.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Address {
    pub public_ip: Option<String>,
    pub allocation_id: Option<String>,
    /// `vpc` for addresses allocated in a VPC, `standard` otherwise.
    pub domain: Option<String>,
    pub instance_id: Option<String>,
    pub association_id: Option<String>,
    pub network_interface_id: Option<String>,
    pub private_ip_address: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

impl Address {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_public_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.public_ip = Some(v.into());
        self
    }

    pub fn set_allocation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.allocation_id = Some(v.into());
        self
    }

    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = Some(v.into());
        self
    }

    pub fn set_association_id<T: Into<String>>(mut self, v: T) -> Self {
        self.association_id = Some(v.into());
        self
    }

    pub fn set_network_interface_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_interface_id = Some(v.into());
        self
    }

    pub fn set_private_ip_address<T: Into<String>>(mut self, v: T) -> Self {
        self.private_ip_address = Some(v.into());
        self
    }

    pub fn set_tags<T: IntoIterator<Item = Tag>>(mut self, v: T) -> Self {
        self.tags = Some(v.into_iter().collect());
        self
    }
}

/// An attachment binding a volume to an instance.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct VolumeAttachment {
    pub volume_id: Option<String>,
    pub instance_id: Option<String>,
    pub device: Option<String>,
    pub state: Option<String>,
    pub attach_time: Option<Timestamp>,
    pub delete_on_termination: Option<bool>,
}

impl VolumeAttachment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_volume_id<T: Into<String>>(mut self, v: T) -> Self {
        self.volume_id = Some(v.into());
        self
    }

    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = Some(v.into());
        self
    }

    pub fn set_device<T: Into<String>>(mut self, v: T) -> Self {
        self.device = Some(v.into());
        self
    }

    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    pub fn set_attach_time<T: Into<Timestamp>>(mut self, v: T) -> Self {
        self.attach_time = Some(v.into());
        self
    }

    pub fn set_delete_on_termination<T: Into<bool>>(mut self, v: T) -> Self {
        self.delete_on_termination = Some(v.into());
        self
    }
}

/// A block storage volume.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Volume {
    pub volume_id: Option<String>,
    /// Size in GiB. Passed through uninterpreted; the service validates.
    pub size: Option<i32>,
    pub snapshot_id: Option<String>,
    pub availability_zone: Option<String>,
    pub state: Option<String>,
    pub create_time: Option<Timestamp>,
    pub volume_type: Option<String>,
    pub iops: Option<i32>,
    pub encrypted: Option<bool>,
    pub attachments: Option<Vec<VolumeAttachment>>,
    pub tags: Option<Vec<Tag>>,
}

impl Volume {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_volume_id<T: Into<String>>(mut self, v: T) -> Self {
        self.volume_id = Some(v.into());
        self
    }

    pub fn set_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.size = Some(v.into());
        self
    }

    pub fn set_snapshot_id<T: Into<String>>(mut self, v: T) -> Self {
        self.snapshot_id = Some(v.into());
        self
    }

    pub fn set_availability_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.availability_zone = Some(v.into());
        self
    }

    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    pub fn set_create_time<T: Into<Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    pub fn set_volume_type<T: Into<String>>(mut self, v: T) -> Self {
        self.volume_type = Some(v.into());
        self
    }

    pub fn set_iops<T: Into<i32>>(mut self, v: T) -> Self {
        self.iops = Some(v.into());
        self
    }

    pub fn set_encrypted<T: Into<bool>>(mut self, v: T) -> Self {
        self.encrypted = Some(v.into());
        self
    }

    pub fn set_attachments<T: IntoIterator<Item = VolumeAttachment>>(mut self, v: T) -> Self {
        self.attachments = Some(v.into_iter().collect());
        self
    }

    pub fn set_tags<T: IntoIterator<Item = Tag>>(mut self, v: T) -> Self {
        self.tags = Some(v.into_iter().collect());
        self
    }
}

/// An IPv4 CIDR range granted by a permission.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct IpRange {
    pub cidr_ip: Option<String>,
    pub description: Option<String>,
}

impl IpRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cidr_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.cidr_ip = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }
}

/// A security group granted access by a permission.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct UserIdGroupPair {
    pub user_id: Option<String>,
    pub group_id: Option<String>,
    pub group_name: Option<String>,
    pub description: Option<String>,
}

impl UserIdGroupPair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_id = Some(v.into());
        self
    }

    pub fn set_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.group_id = Some(v.into());
        self
    }

    pub fn set_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.group_name = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }
}

/// One ingress rule of a security group.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct IpPermission {
    /// `tcp`, `udp`, `icmp`, or a protocol number; `-1` means all.
    pub ip_protocol: Option<String>,
    pub from_port: Option<i32>,
    pub to_port: Option<i32>,
    pub ip_ranges: Option<Vec<IpRange>>,
    pub user_id_group_pairs: Option<Vec<UserIdGroupPair>>,
}

impl IpPermission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ip_protocol<T: Into<String>>(mut self, v: T) -> Self {
        self.ip_protocol = Some(v.into());
        self
    }

    pub fn set_from_port<T: Into<i32>>(mut self, v: T) -> Self {
        self.from_port = Some(v.into());
        self
    }

    pub fn set_to_port<T: Into<i32>>(mut self, v: T) -> Self {
        self.to_port = Some(v.into());
        self
    }

    pub fn set_ip_ranges<T: IntoIterator<Item = IpRange>>(mut self, v: T) -> Self {
        self.ip_ranges = Some(v.into_iter().collect());
        self
    }

    pub fn set_user_id_group_pairs<T: IntoIterator<Item = UserIdGroupPair>>(
        mut self,
        v: T,
    ) -> Self {
        self.user_id_group_pairs = Some(v.into_iter().collect());
        self
    }
}

/// A security group.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct SecurityGroup {
    pub owner_id: Option<String>,
    pub group_name: Option<String>,
    pub group_id: Option<String>,
    pub description: Option<String>,
    pub vpc_id: Option<String>,
    pub ip_permissions: Option<Vec<IpPermission>>,
    pub tags: Option<Vec<Tag>>,
}

impl SecurityGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_owner_id<T: Into<String>>(mut self, v: T) -> Self {
        self.owner_id = Some(v.into());
        self
    }

    pub fn set_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.group_name = Some(v.into());
        self
    }

    pub fn set_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.group_id = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_vpc_id<T: Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = Some(v.into());
        self
    }

    pub fn set_ip_permissions<T: IntoIterator<Item = IpPermission>>(mut self, v: T) -> Self {
        self.ip_permissions = Some(v.into_iter().collect());
        self
    }

    pub fn set_tags<T: IntoIterator<Item = Tag>>(mut self, v: T) -> Self {
        self.tags = Some(v.into_iter().collect());
        self
    }
}

/// One route of a route table.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Route {
    pub destination_cidr_block: Option<String>,
    pub gateway_id: Option<String>,
    pub instance_id: Option<String>,
    pub state: Option<String>,
    pub origin: Option<String>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_destination_cidr_block<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_cidr_block = Some(v.into());
        self
    }

    pub fn set_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.gateway_id = Some(v.into());
        self
    }

    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = Some(v.into());
        self
    }

    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    pub fn set_origin<T: Into<String>>(mut self, v: T) -> Self {
        self.origin = Some(v.into());
        self
    }
}

/// The binding between a route table and a subnet.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct RouteTableAssociation {
    pub route_table_association_id: Option<String>,
    pub route_table_id: Option<String>,
    pub subnet_id: Option<String>,
    /// True for the VPC's main route table association.
    pub main: Option<bool>,
}

impl RouteTableAssociation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_route_table_association_id<T: Into<String>>(mut self, v: T) -> Self {
        self.route_table_association_id = Some(v.into());
        self
    }

    pub fn set_route_table_id<T: Into<String>>(mut self, v: T) -> Self {
        self.route_table_id = Some(v.into());
        self
    }

    pub fn set_subnet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.subnet_id = Some(v.into());
        self
    }

    pub fn set_main<T: Into<bool>>(mut self, v: T) -> Self {
        self.main = Some(v.into());
        self
    }
}

/// A route table.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct RouteTable {
    pub route_table_id: Option<String>,
    pub vpc_id: Option<String>,
    pub routes: Option<Vec<Route>>,
    pub associations: Option<Vec<RouteTableAssociation>>,
    pub tags: Option<Vec<Tag>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_route_table_id<T: Into<String>>(mut self, v: T) -> Self {
        self.route_table_id = Some(v.into());
        self
    }

    pub fn set_vpc_id<T: Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = Some(v.into());
        self
    }

    pub fn set_routes<T: IntoIterator<Item = Route>>(mut self, v: T) -> Self {
        self.routes = Some(v.into_iter().collect());
        self
    }

    pub fn set_associations<T: IntoIterator<Item = RouteTableAssociation>>(
        mut self,
        v: T,
    ) -> Self {
        self.associations = Some(v.into_iter().collect());
        self
    }

    pub fn set_tags<T: IntoIterator<Item = Tag>>(mut self, v: T) -> Self {
        self.tags = Some(v.into_iter().collect());
        self
    }
}

/// The request for `AllocateAddress`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct AllocateAddressRequest {
    pub domain: Option<String>,
}

impl AllocateAddressRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }
}

/// The request for `ReleaseAddress`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct ReleaseAddressRequest {
    pub public_ip: Option<String>,
    pub allocation_id: Option<String>,
}

impl ReleaseAddressRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_public_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.public_ip = Some(v.into());
        self
    }

    pub fn set_allocation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.allocation_id = Some(v.into());
        self
    }
}

/// The request for `DescribeAddresses`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeAddressesRequest {
    pub public_ips: Option<Vec<String>>,
    pub allocation_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
}

impl DescribeAddressesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_public_ips<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.public_ips = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    pub fn set_allocation_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.allocation_ids = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    pub fn set_filters<T: IntoIterator<Item = Filter>>(mut self, v: T) -> Self {
        self.filters = Some(v.into_iter().collect());
        self
    }
}

/// The request for `DescribeInstances`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeInstancesRequest {
    pub instance_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}

impl DescribeInstancesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_instance_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.instance_ids = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    pub fn set_filters<T: IntoIterator<Item = Filter>>(mut self, v: T) -> Self {
        self.filters = Some(v.into_iter().collect());
        self
    }

    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// The request for `RunInstances`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct RunInstancesRequest {
    pub image_id: Option<String>,
    pub min_count: Option<i32>,
    pub max_count: Option<i32>,
    pub key_name: Option<String>,
    pub instance_type: Option<String>,
    pub security_group_ids: Option<Vec<String>>,
    pub security_groups: Option<Vec<String>>,
    pub subnet_id: Option<String>,
    pub tag_specifications: Option<Vec<TagSpecification>>,
}

impl RunInstancesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_image_id<T: Into<String>>(mut self, v: T) -> Self {
        self.image_id = Some(v.into());
        self
    }

    pub fn set_min_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.min_count = Some(v.into());
        self
    }

    pub fn set_max_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_count = Some(v.into());
        self
    }

    pub fn set_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.key_name = Some(v.into());
        self
    }

    pub fn set_instance_type<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_type = Some(v.into());
        self
    }

    pub fn set_security_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.security_group_ids = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    pub fn set_security_groups<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.security_groups = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    pub fn set_subnet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.subnet_id = Some(v.into());
        self
    }

    pub fn set_tag_specifications<T: IntoIterator<Item = TagSpecification>>(
        mut self,
        v: T,
    ) -> Self {
        self.tag_specifications = Some(v.into_iter().collect());
        self
    }
}

/// The request for `CreateTags`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateTagsRequest {
    pub resources: Option<Vec<String>>,
    pub tags: Option<Vec<Tag>>,
}

impl CreateTagsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_resources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.resources = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    pub fn set_tags<T: IntoIterator<Item = Tag>>(mut self, v: T) -> Self {
        self.tags = Some(v.into_iter().collect());
        self
    }
}

/// The request for `CreateVolume`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateVolumeRequest {
    pub availability_zone: Option<String>,
    pub size: Option<i32>,
    pub snapshot_id: Option<String>,
    pub volume_type: Option<String>,
    pub iops: Option<i32>,
    pub encrypted: Option<bool>,
    pub tag_specifications: Option<Vec<TagSpecification>>,
}

impl CreateVolumeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_availability_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.availability_zone = Some(v.into());
        self
    }

    pub fn set_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.size = Some(v.into());
        self
    }

    pub fn set_snapshot_id<T: Into<String>>(mut self, v: T) -> Self {
        self.snapshot_id = Some(v.into());
        self
    }

    pub fn set_volume_type<T: Into<String>>(mut self, v: T) -> Self {
        self.volume_type = Some(v.into());
        self
    }

    pub fn set_iops<T: Into<i32>>(mut self, v: T) -> Self {
        self.iops = Some(v.into());
        self
    }

    pub fn set_encrypted<T: Into<bool>>(mut self, v: T) -> Self {
        self.encrypted = Some(v.into());
        self
    }

    pub fn set_tag_specifications<T: IntoIterator<Item = TagSpecification>>(
        mut self,
        v: T,
    ) -> Self {
        self.tag_specifications = Some(v.into_iter().collect());
        self
    }
}

/// The request for `DescribeVolumes`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeVolumesRequest {
    pub volume_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}

impl DescribeVolumesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_volume_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.volume_ids = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    pub fn set_filters<T: IntoIterator<Item = Filter>>(mut self, v: T) -> Self {
        self.filters = Some(v.into_iter().collect());
        self
    }

    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// The request for `DescribeSecurityGroups`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeSecurityGroupsRequest {
    pub group_ids: Option<Vec<String>>,
    pub group_names: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
}

impl DescribeSecurityGroupsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.group_ids = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    pub fn set_group_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.group_names = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    pub fn set_filters<T: IntoIterator<Item = Filter>>(mut self, v: T) -> Self {
        self.filters = Some(v.into_iter().collect());
        self
    }
}

/// The request for `DescribeRouteTables`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeRouteTablesRequest {
    pub route_table_ids: Option<Vec<String>>,
    pub filters: Option<Vec<Filter>>,
}

impl DescribeRouteTablesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_route_table_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.route_table_ids = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    pub fn set_filters<T: IntoIterator<Item = Filter>>(mut self, v: T) -> Self {
        self.filters = Some(v.into_iter().collect());
        self
    }
}

/// The result of `AllocateAddress`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct AllocateAddressResult {
    pub public_ip: Option<String>,
    pub allocation_id: Option<String>,
    pub domain: Option<String>,
}

impl AllocateAddressResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_public_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.public_ip = Some(v.into());
        self
    }

    pub fn set_allocation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.allocation_id = Some(v.into());
        self
    }

    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }
}

/// The result of `DescribeAddresses`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeAddressesResult {
    pub addresses: Option<Vec<Address>>,
}

impl DescribeAddressesResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_addresses<T: IntoIterator<Item = Address>>(mut self, v: T) -> Self {
        self.addresses = Some(v.into_iter().collect());
        self
    }
}

/// The result of `DescribeInstances`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeInstancesResult {
    pub reservations: Option<Vec<Reservation>>,
    pub next_token: Option<String>,
}

impl DescribeInstancesResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reservations<T: IntoIterator<Item = Reservation>>(mut self, v: T) -> Self {
        self.reservations = Some(v.into_iter().collect());
        self
    }

    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// The result of `RunInstances`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct RunInstancesResult {
    pub reservation: Option<Reservation>,
}

impl RunInstancesResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reservation<T: Into<Reservation>>(mut self, v: T) -> Self {
        self.reservation = Some(v.into());
        self
    }
}

/// The result of `CreateVolume`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateVolumeResult {
    pub volume: Option<Volume>,
}

impl CreateVolumeResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_volume<T: Into<Volume>>(mut self, v: T) -> Self {
        self.volume = Some(v.into());
        self
    }
}

/// The result of `DescribeVolumes`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeVolumesResult {
    pub volumes: Option<Vec<Volume>>,
    pub next_token: Option<String>,
}

impl DescribeVolumesResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_volumes<T: IntoIterator<Item = Volume>>(mut self, v: T) -> Self {
        self.volumes = Some(v.into_iter().collect());
        self
    }

    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// The result of `DescribeSecurityGroups`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeSecurityGroupsResult {
    pub security_groups: Option<Vec<SecurityGroup>>,
}

impl DescribeSecurityGroupsResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_security_groups<T: IntoIterator<Item = SecurityGroup>>(mut self, v: T) -> Self {
        self.security_groups = Some(v.into_iter().collect());
        self
    }
}

/// The result of `DescribeRouteTables`.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeRouteTablesResult {
    pub route_tables: Option<Vec<RouteTable>>,
}

impl DescribeRouteTablesResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_route_tables<T: IntoIterator<Item = RouteTable>>(mut self, v: T) -> Self {
        self.route_tables = Some(v.into_iter().collect());
        self
    }
}

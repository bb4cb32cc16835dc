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

use nimbus_compute_v1::{API_VERSION, model, params};

fn pairs(params: &wire::query::Params) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect()
}

#[test]
fn default_request_yields_only_action_and_version() {
    let got = params::allocate_address(&model::AllocateAddressRequest::new());
    assert_eq!(
        pairs(&got),
        vec![
            ("Action".to_string(), "AllocateAddress".to_string()),
            ("Version".to_string(), API_VERSION.to_string()),
        ]
    );
}

#[test]
fn list_members_are_indexed_from_one() {
    let req = model::DescribeSecurityGroupsRequest::new().set_group_names(["a", "b", "c"]);
    let got = params::describe_security_groups(&req);
    assert_eq!(got.get("GroupName.1"), Some("a"));
    assert_eq!(got.get("GroupName.2"), Some("b"));
    assert_eq!(got.get("GroupName.3"), Some("c"));
    assert_eq!(got.get("GroupName.0"), None);
    assert_eq!(got.get("GroupName.4"), None);
}

#[test]
fn empty_list_contributes_no_parameters() {
    let req = model::DescribeSecurityGroupsRequest::new().set_group_names(Vec::<String>::new());
    let got = params::describe_security_groups(&req);
    assert_eq!(got.len(), 2);
}

#[test]
fn filters_compose_member_keys() {
    let req = model::DescribeInstancesRequest::new().set_filters([
        model::Filter::new()
            .set_name("instance-state-name")
            .set_values(["running", "pending"]),
        model::Filter::new().set_name("vpc-id").set_values(["vpc-1"]),
    ]);
    let got = params::describe_instances(&req);
    assert_eq!(got.get("Filter.1.Name"), Some("instance-state-name"));
    assert_eq!(got.get("Filter.1.Value.1"), Some("running"));
    assert_eq!(got.get("Filter.1.Value.2"), Some("pending"));
    assert_eq!(got.get("Filter.2.Name"), Some("vpc-id"));
    assert_eq!(got.get("Filter.2.Value.1"), Some("vpc-1"));
}

#[test]
fn run_instances_renders_scalars_lists_and_tag_specifications() {
    let req = model::RunInstancesRequest::new()
        .set_image_id("ami-1")
        .set_min_count(1)
        .set_max_count(3)
        .set_instance_type("m5.large")
        .set_security_group_ids(["sg-1", "sg-2"])
        .set_subnet_id("subnet-1")
        .set_tag_specifications([model::TagSpecification::new()
            .set_resource_type("instance")
            .set_tags([
                model::Tag::new().set_key("env").set_value("prod"),
                model::Tag::new().set_key("team").set_value("net"),
            ])]);
    let got = params::run_instances(&req);
    assert_eq!(got.get("Action"), Some("RunInstances"));
    assert_eq!(got.get("ImageId"), Some("ami-1"));
    assert_eq!(got.get("MinCount"), Some("1"));
    assert_eq!(got.get("MaxCount"), Some("3"));
    assert_eq!(got.get("SecurityGroupId.1"), Some("sg-1"));
    assert_eq!(got.get("SecurityGroupId.2"), Some("sg-2"));
    assert_eq!(
        got.get("TagSpecification.1.ResourceType"),
        Some("instance")
    );
    assert_eq!(got.get("TagSpecification.1.Tag.1.Key"), Some("env"));
    assert_eq!(got.get("TagSpecification.1.Tag.2.Value"), Some("net"));
    // Absent fields contribute nothing.
    assert_eq!(got.get("KeyName"), None);
    assert_eq!(got.get("SecurityGroup.1"), None);
}

#[test]
fn create_tags_indexes_resources_and_tags() {
    let req = model::CreateTagsRequest::new()
        .set_resources(["i-1", "vol-1"])
        .set_tags([model::Tag::new().set_key("env").set_value("prod")]);
    let got = params::create_tags(&req);
    assert_eq!(
        pairs(&got),
        vec![
            ("Action".to_string(), "CreateTags".to_string()),
            ("Version".to_string(), API_VERSION.to_string()),
            ("ResourceId.1".to_string(), "i-1".to_string()),
            ("ResourceId.2".to_string(), "vol-1".to_string()),
            ("Tag.1.Key".to_string(), "env".to_string()),
            ("Tag.1.Value".to_string(), "prod".to_string()),
        ]
    );
}

#[test]
fn create_volume_renders_booleans_as_literals() {
    let req = model::CreateVolumeRequest::new()
        .set_availability_zone("us-west-2a")
        .set_size(100)
        .set_encrypted(true);
    let got = params::create_volume(&req);
    assert_eq!(got.get("AvailabilityZone"), Some("us-west-2a"));
    assert_eq!(got.get("Size"), Some("100"));
    assert_eq!(got.get("Encrypted"), Some("true"));
    assert_eq!(got.get("Iops"), None);
}

#[test]
fn release_address_body_is_form_encoded() {
    let req = model::ReleaseAddressRequest::new().set_allocation_id("eipalloc-1");
    let got = params::release_address(&req).into_body();
    assert_eq!(
        got,
        format!("Action=ReleaseAddress&Version={API_VERSION}&AllocationId=eipalloc-1")
    );
}

#[test]
fn describe_requests_carry_pagination() {
    let req = model::DescribeVolumesRequest::new()
        .set_volume_ids(["vol-1"])
        .set_max_results(50)
        .set_next_token("page-2");
    let got = params::describe_volumes(&req);
    assert_eq!(got.get("VolumeId.1"), Some("vol-1"));
    assert_eq!(got.get("MaxResults"), Some("50"));
    assert_eq!(got.get("NextToken"), Some("page-2"));

    let req = model::DescribeRouteTablesRequest::new().set_route_table_ids(["rtb-1"]);
    let got = params::describe_route_tables(&req);
    assert_eq!(got.get("Action"), Some("DescribeRouteTables"));
    assert_eq!(got.get("RouteTableId.1"), Some("rtb-1"));

    let req = model::DescribeAddressesRequest::new()
        .set_public_ips(["1.2.3.4"])
        .set_allocation_ids(["eipalloc-1", "eipalloc-2"]);
    let got = params::describe_addresses(&req);
    assert_eq!(got.get("PublicIp.1"), Some("1.2.3.4"));
    assert_eq!(got.get("AllocationId.2"), Some("eipalloc-2"));
}

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

use nimbus_compute_v1::model;
use serde_json::json;

type Result = anyhow::Result<()>;

#[test]
fn allocate_address_result_end_to_end() -> Result {
    let got = serde_json::from_value::<model::AllocateAddressResult>(json!({
        "PublicIp": "1.2.3.4",
        "AllocationId": "eipalloc-1",
        "Domain": "vpc"
    }))?;
    let want = model::AllocateAddressResult::new()
        .set_public_ip("1.2.3.4")
        .set_allocation_id("eipalloc-1")
        .set_domain("vpc");
    assert_eq!(got, want);
    Ok(())
}

#[test]
fn output_has_only_set_fields_in_declared_order() -> Result {
    let result = model::AllocateAddressResult::new()
        .set_domain("vpc")
        .set_public_ip("1.2.3.4");
    let got = serde_json::to_string(&result)?;
    assert_eq!(got, r#"{"PublicIp":"1.2.3.4","Domain":"vpc"}"#);
    Ok(())
}

#[test]
fn default_record_is_empty_object() -> Result {
    let got = serde_json::to_string(&model::Instance::new())?;
    assert_eq!(got, "{}");
    Ok(())
}

#[test]
fn unknown_properties_are_skipped() -> Result {
    let got = serde_json::from_value::<model::Address>(json!({
        "PublicIp": "1.2.3.4",
        "Bogus": {"deeply": ["nested", 1, null]},
        "AlsoBogus": "scalar",
        "Domain": "standard"
    }))?;
    assert_eq!(got.public_ip.as_deref(), Some("1.2.3.4"));
    assert_eq!(got.domain.as_deref(), Some("standard"));
    assert_eq!(got.allocation_id, None);
    Ok(())
}

#[test]
fn null_fields_decode_as_absent() -> Result {
    let got = serde_json::from_value::<model::Address>(json!({
        "PublicIp": null,
        "Tags": null,
        "Domain": "vpc"
    }))?;
    assert_eq!(got.public_ip, None);
    assert_eq!(got.tags, None);
    assert_eq!(got.domain.as_deref(), Some("vpc"));
    Ok(())
}

#[test]
fn duplicate_fields_are_rejected() {
    let got = serde_json::from_str::<model::AllocateAddressResult>(
        r#"{"PublicIp":"1.2.3.4","PublicIp":"5.6.7.8"}"#,
    );
    assert!(got.is_err());
}

#[test]
fn integer_accepts_number_or_string() -> Result {
    let got = serde_json::from_value::<model::InstanceState>(json!({"Code": 16}))?;
    assert_eq!(got.code, Some(16));
    let got = serde_json::from_value::<model::InstanceState>(json!({"Code": "16"}))?;
    assert_eq!(got.code, Some(16));
    Ok(())
}

#[test]
fn integer_overflow_is_an_error() {
    let got = serde_json::from_value::<model::InstanceState>(json!({"Code": 4294967296_i64}));
    assert!(got.is_err());
}

#[test]
fn scalar_in_place_of_nested_object_decodes_as_absent() -> Result {
    let got = serde_json::from_value::<model::Instance>(json!({
        "InstanceId": "i-1",
        "State": "running"
    }))?;
    assert_eq!(got.instance_id.as_deref(), Some("i-1"));
    assert_eq!(got.state, None);

    let got = serde_json::from_value::<model::RunInstancesResult>(json!({"Reservation": 7}))?;
    assert_eq!(got.reservation, None);
    Ok(())
}

#[test]
fn nested_object_decodes_through_its_own_unmarshaller() -> Result {
    let got = serde_json::from_value::<model::Instance>(json!({
        "InstanceId": "i-1",
        "State": {"Code": 16, "Name": "running"},
        "LaunchTime": "2025-05-16T09:46:12Z",
        "SecurityGroups": [
            {"GroupName": "web", "GroupId": "sg-1"},
            {"GroupId": "sg-2"}
        ]
    }))?;
    let state = got.state.expect("state");
    assert_eq!(state.code, Some(16));
    assert_eq!(state.name.as_deref(), Some("running"));
    assert_eq!(
        got.launch_time.map(String::from).as_deref(),
        Some("2025-05-16T09:46:12Z")
    );
    let groups = got.security_groups.expect("security groups");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].group_name.as_deref(), Some("web"));
    assert_eq!(groups[1].group_id.as_deref(), Some("sg-2"));
    Ok(())
}

#[test]
fn empty_list_is_distinct_from_absent() -> Result {
    let got = serde_json::from_value::<model::Reservation>(json!({"Instances": []}))?;
    assert_eq!(got.instances, Some(vec![]));
    assert_eq!(got.groups, None);

    let json = serde_json::to_string(&got)?;
    assert_eq!(json, r#"{"Instances":[]}"#);
    Ok(())
}

#[test]
fn volume_round_trip() -> Result {
    let volume = model::Volume::new()
        .set_volume_id("vol-1")
        .set_size(100)
        .set_volume_type("gp3")
        .set_iops(3000)
        .set_encrypted(true)
        .set_attachments([model::VolumeAttachment::new()
            .set_instance_id("i-1")
            .set_device("/dev/sdf")
            .set_delete_on_termination(false)])
        .set_tags([model::Tag::new().set_key("env").set_value("prod")]);
    let json = serde_json::to_value(&volume)?;
    assert_eq!(
        json,
        json!({
            "VolumeId": "vol-1",
            "Size": 100,
            "VolumeType": "gp3",
            "Iops": 3000,
            "Encrypted": true,
            "Attachments": [{
                "InstanceId": "i-1",
                "Device": "/dev/sdf",
                "DeleteOnTermination": false
            }],
            "Tags": [{"Key": "env", "Value": "prod"}]
        })
    );
    let back = serde_json::from_value::<model::Volume>(json)?;
    assert_eq!(back, volume);
    Ok(())
}

#[test]
fn describe_instances_result_decodes_nested_reservations() -> Result {
    let got = serde_json::from_value::<model::DescribeInstancesResult>(json!({
        "Reservations": [{
            "ReservationId": "r-1",
            "OwnerId": "123456789012",
            "Instances": [
                {"InstanceId": "i-1", "State": {"Code": 16, "Name": "running"}},
                {"InstanceId": "i-2", "State": {"Code": 80, "Name": "stopped"}}
            ]
        }],
        "NextToken": "page-2"
    }))?;
    let reservations = got.reservations.expect("reservations");
    assert_eq!(reservations.len(), 1);
    let instances = reservations[0].instances.as_ref().expect("instances");
    assert_eq!(instances[1].instance_id.as_deref(), Some("i-2"));
    assert_eq!(
        instances[1].state.as_ref().and_then(|s| s.code),
        Some(80)
    );
    assert_eq!(got.next_token.as_deref(), Some("page-2"));
    Ok(())
}

#[test]
fn malformed_timestamp_is_an_error() {
    let got = serde_json::from_value::<model::Instance>(json!({
        "LaunchTime": "half past nine"
    }));
    assert!(got.is_err());
}

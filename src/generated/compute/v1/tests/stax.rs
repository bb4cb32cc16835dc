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

use nimbus_compute_v1::stax;
use wire::DecodeError;
use wire::xml::XmlCursor;

type Result = anyhow::Result<()>;

#[test]
fn allocate_address_response() -> Result {
    let document = r#"
        <AllocateAddressResponse>
            <requestId>59dbff89-35bd-4eac-99ed-be587EXAMPLE</requestId>
            <publicIp>1.2.3.4</publicIp>
            <allocationId>eipalloc-1</allocationId>
            <domain>vpc</domain>
        </AllocateAddressResponse>"#;
    let mut cursor = XmlCursor::new(document);
    let got = stax::allocate_address_result(&mut cursor)?;
    assert_eq!(got.public_ip.as_deref(), Some("1.2.3.4"));
    assert_eq!(got.allocation_id.as_deref(), Some("eipalloc-1"));
    assert_eq!(got.domain.as_deref(), Some("vpc"));
    Ok(())
}

// A tag name appearing both as a direct child of the record and nested
// inside a list item binds only the direct child occurrence.
#[test]
fn same_named_tag_inside_list_item_does_not_bind() -> Result {
    let document = r#"
        <Response>
            <state>A</state>
            <items><item><state>B</state></item></items>
        </Response>"#;
    let mut cursor = XmlCursor::new(document);
    let got = stax::route(&mut cursor)?;
    assert_eq!(got.state.as_deref(), Some("A"));
    Ok(())
}

#[test]
fn describe_addresses_accumulates_items_with_nested_tags() -> Result {
    let document = r#"
        <DescribeAddressesResponse>
            <addressesSet>
                <item>
                    <publicIp>1.2.3.4</publicIp>
                    <allocationId>eipalloc-1</allocationId>
                    <tagSet>
                        <item><key>env</key><value>prod</value></item>
                        <item><key>team</key><value>net</value></item>
                    </tagSet>
                </item>
                <item>
                    <publicIp>5.6.7.8</publicIp>
                    <domain>standard</domain>
                </item>
            </addressesSet>
        </DescribeAddressesResponse>"#;
    let mut cursor = XmlCursor::new(document);
    let got = stax::describe_addresses_result(&mut cursor)?;
    let addresses = got.addresses.expect("addresses");
    assert_eq!(addresses.len(), 2);
    assert_eq!(addresses[0].public_ip.as_deref(), Some("1.2.3.4"));
    let tags = addresses[0].tags.as_ref().expect("tags");
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[1].key.as_deref(), Some("team"));
    // The inner tagSet keys must not leak into the second address.
    assert_eq!(addresses[1].tags, None);
    assert_eq!(addresses[1].public_ip.as_deref(), Some("5.6.7.8"));
    assert_eq!(addresses[1].domain.as_deref(), Some("standard"));
    Ok(())
}

#[test]
fn describe_instances_walks_three_levels() -> Result {
    let document = r#"
        <DescribeInstancesResponse>
            <reservationSet>
                <item>
                    <reservationId>r-1</reservationId>
                    <ownerId>123456789012</ownerId>
                    <groupSet>
                        <item><groupId>sg-1</groupId><groupName>web</groupName></item>
                    </groupSet>
                    <instancesSet>
                        <item>
                            <instanceId>i-1</instanceId>
                            <imageId>ami-1</imageId>
                            <instanceState><code>16</code><name>running</name></instanceState>
                            <launchTime>2025-05-16T09:46:12Z</launchTime>
                            <ipAddress>1.2.3.4</ipAddress>
                            <tagSet><item><key>Name</key><value>frontend</value></item></tagSet>
                        </item>
                        <item>
                            <instanceId>i-2</instanceId>
                            <instanceState><code>80</code><name>stopped</name></instanceState>
                        </item>
                    </instancesSet>
                </item>
            </reservationSet>
            <nextToken>page-2</nextToken>
        </DescribeInstancesResponse>"#;
    let mut cursor = XmlCursor::new(document);
    let got = stax::describe_instances_result(&mut cursor)?;
    let reservations = got.reservations.expect("reservations");
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].reservation_id.as_deref(), Some("r-1"));
    let groups = reservations[0].groups.as_ref().expect("groups");
    assert_eq!(groups[0].group_id.as_deref(), Some("sg-1"));
    let instances = reservations[0].instances.as_ref().expect("instances");
    assert_eq!(instances.len(), 2);
    let state = instances[0].state.as_ref().expect("state");
    assert_eq!(state.code, Some(16));
    assert_eq!(state.name.as_deref(), Some("running"));
    assert_eq!(
        instances[0].launch_time.map(String::from).as_deref(),
        Some("2025-05-16T09:46:12Z")
    );
    assert_eq!(instances[0].public_ip_address.as_deref(), Some("1.2.3.4"));
    assert_eq!(instances[1].instance_id.as_deref(), Some("i-2"));
    assert_eq!(instances[1].launch_time, None);
    assert_eq!(got.next_token.as_deref(), Some("page-2"));
    Ok(())
}

#[test]
fn run_instances_response_is_the_reservation() -> Result {
    let document = r#"
        <RunInstancesResponse>
            <reservationId>r-9</reservationId>
            <ownerId>123456789012</ownerId>
            <instancesSet>
                <item><instanceId>i-9</instanceId></item>
            </instancesSet>
        </RunInstancesResponse>"#;
    let mut cursor = XmlCursor::new(document);
    let got = stax::run_instances_result(&mut cursor)?;
    let reservation = got.reservation.expect("reservation");
    assert_eq!(reservation.reservation_id.as_deref(), Some("r-9"));
    let instances = reservation.instances.expect("instances");
    assert_eq!(instances[0].instance_id.as_deref(), Some("i-9"));
    Ok(())
}

#[test]
fn create_volume_response_parses_scalars() -> Result {
    let document = r#"
        <CreateVolumeResponse>
            <volumeId>vol-1</volumeId>
            <size>100</size>
            <availabilityZone>us-west-2a</availabilityZone>
            <status>creating</status>
            <createTime>2025-05-16T09:46:12.500Z</createTime>
            <volumeType>gp3</volumeType>
            <iops>3000</iops>
            <encrypted>true</encrypted>
        </CreateVolumeResponse>"#;
    let mut cursor = XmlCursor::new(document);
    let got = stax::create_volume_result(&mut cursor)?;
    let volume = got.volume.expect("volume");
    assert_eq!(volume.volume_id.as_deref(), Some("vol-1"));
    assert_eq!(volume.size, Some(100));
    assert_eq!(volume.state.as_deref(), Some("creating"));
    assert_eq!(volume.iops, Some(3000));
    assert_eq!(volume.encrypted, Some(true));
    assert_eq!(
        volume.create_time.map(String::from).as_deref(),
        Some("2025-05-16T09:46:12.5Z")
    );
    Ok(())
}

#[test]
fn describe_volumes_parses_attachments() -> Result {
    let document = r#"
        <DescribeVolumesResponse>
            <volumeSet>
                <item>
                    <volumeId>vol-1</volumeId>
                    <attachmentSet>
                        <item>
                            <volumeId>vol-1</volumeId>
                            <instanceId>i-1</instanceId>
                            <device>/dev/sdf</device>
                            <status>attached</status>
                            <deleteOnTermination>false</deleteOnTermination>
                        </item>
                    </attachmentSet>
                </item>
            </volumeSet>
        </DescribeVolumesResponse>"#;
    let mut cursor = XmlCursor::new(document);
    let got = stax::describe_volumes_result(&mut cursor)?;
    let volumes = got.volumes.expect("volumes");
    let attachments = volumes[0].attachments.as_ref().expect("attachments");
    assert_eq!(attachments[0].device.as_deref(), Some("/dev/sdf"));
    assert_eq!(attachments[0].state.as_deref(), Some("attached"));
    assert_eq!(attachments[0].delete_on_termination, Some(false));
    Ok(())
}

#[test]
fn describe_security_groups_parses_permissions() -> Result {
    let document = r#"
        <DescribeSecurityGroupsResponse>
            <securityGroupInfo>
                <item>
                    <ownerId>123456789012</ownerId>
                    <groupId>sg-1</groupId>
                    <groupName>web</groupName>
                    <groupDescription>Web servers</groupDescription>
                    <vpcId>vpc-1</vpcId>
                    <ipPermissions>
                        <item>
                            <ipProtocol>tcp</ipProtocol>
                            <fromPort>443</fromPort>
                            <toPort>443</toPort>
                            <ipRanges>
                                <item><cidrIp>0.0.0.0/0</cidrIp><description>everyone</description></item>
                            </ipRanges>
                            <groups>
                                <item><userId>123456789012</userId><groupId>sg-2</groupId></item>
                            </groups>
                        </item>
                    </ipPermissions>
                </item>
            </securityGroupInfo>
        </DescribeSecurityGroupsResponse>"#;
    let mut cursor = XmlCursor::new(document);
    let got = stax::describe_security_groups_result(&mut cursor)?;
    let groups = got.security_groups.expect("security groups");
    assert_eq!(groups[0].description.as_deref(), Some("Web servers"));
    let permissions = groups[0].ip_permissions.as_ref().expect("permissions");
    assert_eq!(permissions[0].from_port, Some(443));
    let ranges = permissions[0].ip_ranges.as_ref().expect("ranges");
    assert_eq!(ranges[0].cidr_ip.as_deref(), Some("0.0.0.0/0"));
    let pairs = permissions[0]
        .user_id_group_pairs
        .as_ref()
        .expect("group pairs");
    assert_eq!(pairs[0].group_id.as_deref(), Some("sg-2"));
    Ok(())
}

#[test]
fn describe_route_tables_parses_routes_and_associations() -> Result {
    let document = r#"
        <DescribeRouteTablesResponse>
            <routeTableSet>
                <item>
                    <routeTableId>rtb-1</routeTableId>
                    <vpcId>vpc-1</vpcId>
                    <routeSet>
                        <item>
                            <destinationCidrBlock>10.0.0.0/16</destinationCidrBlock>
                            <gatewayId>local</gatewayId>
                            <state>active</state>
                            <origin>CreateRouteTable</origin>
                        </item>
                    </routeSet>
                    <associationSet>
                        <item>
                            <routeTableAssociationId>rtbassoc-1</routeTableAssociationId>
                            <routeTableId>rtb-1</routeTableId>
                            <main>true</main>
                        </item>
                    </associationSet>
                </item>
            </routeTableSet>
        </DescribeRouteTablesResponse>"#;
    let mut cursor = XmlCursor::new(document);
    let got = stax::describe_route_tables_result(&mut cursor)?;
    let tables = got.route_tables.expect("route tables");
    let routes = tables[0].routes.as_ref().expect("routes");
    assert_eq!(routes[0].state.as_deref(), Some("active"));
    let associations = tables[0].associations.as_ref().expect("associations");
    assert_eq!(associations[0].main, Some(true));
    // The nested routeTableId must not overwrite the table's own field.
    assert_eq!(tables[0].route_table_id.as_deref(), Some("rtb-1"));
    Ok(())
}

#[test]
fn unmatched_tags_are_skipped() -> Result {
    let document = r#"
        <AllocateAddressResponse>
            <futureField><nested>ignored</nested></futureField>
            <publicIp>1.2.3.4</publicIp>
        </AllocateAddressResponse>"#;
    let mut cursor = XmlCursor::new(document);
    let got = stax::allocate_address_result(&mut cursor)?;
    assert_eq!(got.public_ip.as_deref(), Some("1.2.3.4"));
    assert_eq!(got.allocation_id, None);
    Ok(())
}

#[test]
fn non_numeric_scalar_is_a_decode_error() {
    let document = r#"
        <CreateVolumeResponse>
            <volumeId>vol-1</volumeId>
            <size>one hundred</size>
        </CreateVolumeResponse>"#;
    let mut cursor = XmlCursor::new(document);
    let got = stax::create_volume_result(&mut cursor).unwrap_err();
    assert!(matches!(got, DecodeError::Scalar { .. }), "{got:?}");
}

#[test]
fn misspelled_boolean_is_a_decode_error() {
    let document = r#"
        <DescribeRouteTablesResponse>
            <routeTableSet>
                <item>
                    <associationSet><item><main>yes</main></item></associationSet>
                </item>
            </routeTableSet>
        </DescribeRouteTablesResponse>"#;
    let mut cursor = XmlCursor::new(document);
    assert!(stax::describe_route_tables_result(&mut cursor).is_err());
}

//! READ_DESCRIPTOR through complete frames, feeding the decoded descriptors
//! into an [`EntityTree`] the way a controller enumerates an entity.

mod common;
use common::{TALKER_ENTITY_ID, addressed_command, through_the_wire};

use atdecc::aem_payloads::{
    self, ReadDescriptor, ReadDescriptorCommandPayload, ReadDescriptorResponsePayload, Reply,
};
use atdecc::config::CodecConfig;
use atdecc::entity_model::{
    AtdeccFixedString, ConfigurationDescriptor, Descriptor, DescriptorCount, DescriptorType,
    EntityDescriptor, EntityTree, StreamDescriptor, StreamFormat,
};
use atdecc::protocol::AemCommandStatus;
use atdecc::types::{ConfigurationIndex, DescriptorIndex};

fn talker_descriptor(descriptor_type: DescriptorType, index: u16) -> Option<Descriptor> {
    match (descriptor_type, index) {
        (DescriptorType::Entity, 0) => Some(Descriptor::Entity(EntityDescriptor {
            entity_id: TALKER_ENTITY_ID,
            entity_name: AtdeccFixedString::from("Talker"),
            configurations_count: 1,
            current_configuration: ConfigurationIndex::new(0),
            ..EntityDescriptor::default()
        })),
        (DescriptorType::Configuration, 0) => {
            Some(Descriptor::Configuration(ConfigurationDescriptor {
                object_name: AtdeccFixedString::from("Default"),
                descriptor_counts: vec![DescriptorCount {
                    descriptor_type: DescriptorType::StreamOutput,
                    count: 1,
                }],
                ..ConfigurationDescriptor::default()
            }))
        }
        (DescriptorType::StreamOutput, 0) => Some(Descriptor::StreamOutput(StreamDescriptor {
            object_name: AtdeccFixedString::from("Output 1"),
            current_format: StreamFormat::new(0x0205_0220_0040_6000),
            formats: vec![
                StreamFormat::new(0x0205_0220_0040_6000),
                StreamFormat::new(0x0205_0220_0080_6000),
            ],
            ..StreamDescriptor::default()
        })),
        _ => None,
    }
}

/// Answers one READ_DESCRIPTOR command the way the talker would.
fn answer(command: &ReadDescriptorCommandPayload) -> (AemCommandStatus, ReadDescriptorResponsePayload) {
    let descriptor = command.descriptor;
    match talker_descriptor(descriptor.descriptor_type, descriptor.descriptor_index.value()) {
        Some(found) => (
            AemCommandStatus::Success,
            ReadDescriptorResponsePayload::new(
                command.configuration_index,
                descriptor.descriptor_index,
                found,
            ),
        ),
        None => (
            AemCommandStatus::NoSuchDescriptor,
            ReadDescriptorResponsePayload::header_only(command),
        ),
    }
}

fn read_descriptor(
    descriptor_type: DescriptorType,
    index: u16,
    sequence_id: u16,
) -> (AemCommandStatus, ReadDescriptorResponsePayload) {
    let command = ReadDescriptorCommandPayload::new(
        ConfigurationIndex::new(0),
        descriptor_type,
        DescriptorIndex::new(index),
    );
    let received = through_the_wire(addressed_command::<ReadDescriptor>(&command, sequence_id));
    let decoded =
        aem_payloads::decode_command::<ReadDescriptor>(&received, &CodecConfig::strict()).unwrap();
    assert_eq!(decoded, command);

    let (status, payload) = answer(&decoded);
    let mut response = received.response_copy().unwrap();
    response.status = status;
    response.set_payload(aem_payloads::serialize_response::<ReadDescriptor>(&payload).unwrap())
        .unwrap();

    let answered = through_the_wire(response);
    assert_eq!(answered.header.sequence_id, received.header.sequence_id);
    match aem_payloads::decode_response::<ReadDescriptor>(&answered, &CodecConfig::strict()).unwrap()
    {
        Reply::Full(decoded) => {
            assert_eq!(decoded, payload);
            (answered.status, decoded)
        }
        Reply::Reflected(command) => panic!("unexpected reflection of {command:?}"),
    }
}

#[test]
fn enumeration_builds_the_entity_tree() {
    let mut tree = EntityTree::default();
    let reads = [
        (DescriptorType::Entity, 0),
        (DescriptorType::Configuration, 0),
        (DescriptorType::StreamOutput, 0),
    ];
    for (sequence_id, (descriptor_type, index)) in (1u16..).zip(reads) {
        let (status, payload) = read_descriptor(descriptor_type, index, sequence_id);
        assert_eq!(status, AemCommandStatus::Success);
        let descriptor = payload.descriptor.unwrap();
        tree.apply_descriptor(payload.configuration_index, payload.descriptor_index, descriptor)
            .unwrap();
    }

    assert_eq!(tree.dynamic_model.entity_name.to_string_lossy(), "Talker");
    let configuration = tree.current_configuration().unwrap();
    assert!(configuration.dynamic_model.is_active_configuration);
    assert_eq!(configuration.dynamic_model.object_name.to_string_lossy(), "Default");
    assert_eq!(configuration.static_model.descriptor_counts.len(), 1);
    let stream = &configuration.stream_outputs[&DescriptorIndex::new(0)];
    assert_eq!(stream.static_model.formats.len(), 2);
    assert_eq!(stream.dynamic_model.object_name.to_string_lossy(), "Output 1");
    assert_eq!(
        stream.dynamic_model.stream_format,
        StreamFormat::new(0x0205_0220_0040_6000)
    );
}

#[test]
fn missing_descriptor_reflects_the_header() {
    let (status, payload) = read_descriptor(DescriptorType::StreamInput, 4, 9);
    assert_eq!(status, AemCommandStatus::NoSuchDescriptor);
    assert_eq!(payload.descriptor_type, DescriptorType::StreamInput);
    assert_eq!(payload.descriptor_index, DescriptorIndex::new(4));
    assert!(payload.descriptor.is_none());
}

#[test]
fn response_body_length_tracks_the_descriptor() {
    for (descriptor_type, body) in [
        (DescriptorType::Entity, 308),
        (DescriptorType::Configuration, 70 + 4),
        (DescriptorType::StreamOutput, 128 + 2 * 8),
    ] {
        let descriptor = talker_descriptor(descriptor_type, 0).unwrap();
        assert_eq!(aem_payloads::descriptor_length(&descriptor), body);
        let payload = ReadDescriptorResponsePayload::new(
            ConfigurationIndex::new(0),
            DescriptorIndex::new(0),
            descriptor,
        );
        let bytes = aem_payloads::serialize_response::<ReadDescriptor>(&payload).unwrap();
        assert_eq!(bytes.len(), 8 + body);
    }
}

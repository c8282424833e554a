//! End-to-end wire scenarios: one test per typical exchange, checked against
//! exact byte counts.

mod common;
use common::{FRAME_HEADERS_LENGTH, TALKER_ENTITY_ID, addressed_command, mac, through_the_wire};

use atdecc::aem_payloads::{
    self, AcquireEntity, AcquireEntityPayload, AddAudioMappings, AudioMappingsPayload,
    DescriptorRef, ReadDescriptor, ReadDescriptorResponsePayload,
};
use atdecc::config::CodecConfig;
use atdecc::entity_model::{
    AcquireEntityFlags, AtdeccFixedString, AudioMapping, ConfigurationDescriptor, Descriptor,
    DescriptorCount, DescriptorType, EntityDescriptor,
};
use atdecc::error::ParsingError;
use atdecc::protocol::{
    AaAecpdu, AaMode, AdpMessageType, Adpdu, AemCommandStatus, AemCommandType, Tlv,
};
use atdecc::traits::Pdu;
use atdecc::types::{AvailableIndex, ConfigurationIndex, DescriptorIndex};
use atdecc::unique_identifier::UniqueIdentifier;

#[test]
fn entity_available_body_is_56_bytes() {
    let mut pdu = Adpdu::new(
        AdpMessageType::EntityAvailable,
        mac(0x01),
        UniqueIdentifier::new(0x0011_2233_4455_6677),
    );
    pdu.available_index = AvailableIndex::new(1);

    let frame = pdu.encode().unwrap();
    assert_eq!(frame.len() - FRAME_HEADERS_LENGTH, 56);
    let decoded = Adpdu::deserialize(&frame, &CodecConfig::strict()).unwrap();
    assert_eq!(decoded.entity_id, UniqueIdentifier::new(0x0011_2233_4455_6677));
    assert_eq!(decoded.available_index, AvailableIndex::new(1));
    assert_eq!(decoded, pdu);
}

#[test]
fn acquire_entity_reflection_size() {
    let command = AcquireEntityPayload {
        flags: AcquireEntityFlags::NONE,
        owner_id: UniqueIdentifier::null(),
        descriptor: DescriptorRef::new(DescriptorType::Entity, DescriptorIndex::new(0)),
    };
    let bytes = aem_payloads::serialize_command::<AcquireEntity>(&command).unwrap();
    assert_eq!(bytes.len(), 16);

    let config = CodecConfig::default();
    let reply = aem_payloads::deserialize_response::<AcquireEntity>(
        AemCommandStatus::NotImplemented,
        &bytes,
        &config,
    )
    .unwrap();
    assert!(reply.is_reflected());
    assert_eq!(reply.into_payload(), command);

    assert!(matches!(
        aem_payloads::deserialize_response::<AcquireEntity>(
            AemCommandStatus::NotImplemented,
            &bytes[..8],
            &config,
        ),
        Err(ParsingError::MalformedPayload { needed: 16, got: 8, .. })
    ));
}

#[test]
fn configuration_offset_into_static_header_is_rejected() {
    let descriptor = ConfigurationDescriptor {
        object_name: AtdeccFixedString::from("Studio"),
        descriptor_counts: vec![DescriptorCount {
            descriptor_type: DescriptorType::AvbInterface,
            count: 1,
        }],
        ..ConfigurationDescriptor::default()
    };
    let payload = ReadDescriptorResponsePayload::new(
        ConfigurationIndex::new(0),
        DescriptorIndex::new(0),
        Descriptor::Configuration(descriptor),
    );
    let mut response = aem_payloads::response_pdu::<ReadDescriptor>(AemCommandStatus::Success, &payload)
        .unwrap();
    assert_eq!(&response.payload[76..78], &[0x00, 74]);

    let mut bytes = response.payload.to_vec();
    // two bytes before the end of the static header
    bytes[77] = 72;
    response.payload = bytes.into();
    let received = through_the_wire(response);
    assert!(matches!(
        aem_payloads::decode_response::<ReadDescriptor>(&received, &CodecConfig::default()),
        Err(ParsingError::InvalidOffset { .. })
    ));
}

#[test]
fn audio_mappings_keep_their_order() {
    let mappings: Vec<AudioMapping> = (0..3u16)
        .map(|n| AudioMapping {
            stream_index: DescriptorIndex::new(0),
            stream_channel: n,
            cluster_offset: DescriptorIndex::new(2 - n),
            cluster_channel: 0,
        })
        .collect();
    let payload = AudioMappingsPayload {
        descriptor: DescriptorRef::new(DescriptorType::StreamPortInput, DescriptorIndex::new(0)),
        mappings: mappings.clone(),
    };

    let received = through_the_wire(addressed_command::<AddAudioMappings>(&payload, 3));
    assert_eq!(received.payload.len(), 8 + 3 * 8);
    let decoded = aem_payloads::decode_command::<AddAudioMappings>(&received, &CodecConfig::strict())
        .unwrap();
    assert_eq!(decoded.mappings, mappings);
    assert_eq!(decoded, payload);
}

#[test]
fn address_access_read_and_write() {
    let mut pdu = AaAecpdu::command();
    pdu.header.target_entity_id = TALKER_ENTITY_ID;
    pdu.add_tlv(Tlv::read(0x0000_0000_0000_1000, 4)).unwrap();
    pdu.add_tlv(Tlv::with_data(0x0000_0000_0000_2000, AaMode::Write, vec![1, 2, 3, 4, 5, 6, 7, 8]))
        .unwrap();

    let frame = pdu.encode().unwrap();
    let decoded = AaAecpdu::deserialize(&frame, &CodecConfig::strict()).unwrap();
    let tlvs = decoded.tlvs();
    assert_eq!(tlvs.len(), 2);
    assert_eq!(tlvs[0].mode(), AaMode::Read);
    assert_eq!(tlvs[0].address(), 0x1000);
    assert_eq!(tlvs[0].len(), 4);
    assert_eq!(tlvs[1].mode(), AaMode::Write);
    assert_eq!(tlvs[1].address(), 0x2000);
    assert_eq!(tlvs[1].memory_data(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(decoded, pdu);
}

#[test]
fn truncated_entity_descriptor_is_malformed() {
    let payload = ReadDescriptorResponsePayload::new(
        ConfigurationIndex::new(0),
        DescriptorIndex::new(0),
        Descriptor::Entity(EntityDescriptor {
            entity_id: TALKER_ENTITY_ID,
            entity_name: AtdeccFixedString::from("Talker"),
            ..EntityDescriptor::default()
        }),
    );
    let mut response = aem_payloads::response_pdu::<ReadDescriptor>(AemCommandStatus::Success, &payload)
        .unwrap();
    assert_eq!(response.payload.len(), 8 + 308);
    response.payload = response.payload.slice(..8 + 10);

    let received = through_the_wire(response);
    assert!(matches!(
        aem_payloads::decode_response::<ReadDescriptor>(&received, &CodecConfig::default()),
        Err(ParsingError::MalformedPayload {
            command: AemCommandType::ReadDescriptor,
            status: AemCommandStatus::Success,
            needed: 316,
            got: 18,
        })
    ));
}

#[test]
fn zero_length_tlv_on_the_wire_is_refused() {
    let mut pdu = AaAecpdu::command();
    pdu.add_tlv(Tlv::read(0x0000_0000_0000_1000, 4)).unwrap();
    let mut frame = pdu.encode().unwrap().to_vec();
    assert_eq!(&frame[38..40], &[0x00, 0x04]);
    frame[39] = 0;

    assert!(matches!(
        AaAecpdu::deserialize(&frame, &CodecConfig::default()),
        Err(ParsingError::InvalidFieldValue { field: "tlv_length", got: 0, .. })
    ));
}

#[test]
fn null_and_uninitialized_identifiers_are_both_invalid() {
    let null = UniqueIdentifier::null();
    let uninitialized = UniqueIdentifier::default();
    assert_eq!(null, uninitialized);
    assert!(!null.is_valid());
    assert!(!uninitialized.is_valid());
    assert_ne!(null, TALKER_ENTITY_ID);
    assert_ne!(uninitialized, TALKER_ENTITY_ID);
}

//! Common fixtures for the ATDECC integration tests.
//!
//! Entity IDs, MAC addresses and PDU builders shared across suites, plus
//! helpers to pull the AEM payload out of an encoded frame.
#![allow(dead_code)]

use atdecc::aem_payloads::{self, AemCommand, Reply};
use atdecc::config::CodecConfig;
use atdecc::protocol::{AemAecpdu, AemCommandStatus, Atdeccpdu, decode_frame, encode_frame};
use atdecc::types::{MacAddress, SequenceId};
use atdecc::unique_identifier::UniqueIdentifier;

pub const TALKER_ENTITY_ID: UniqueIdentifier = UniqueIdentifier::new(0x0011_2233_4455_6677);
pub const CONTROLLER_ENTITY_ID: UniqueIdentifier = UniqueIdentifier::new(0x001B_92FF_FE00_0001);
pub const LISTENER_ENTITY_ID: UniqueIdentifier = UniqueIdentifier::new(0x001B_92FF_FE00_0002);

/// Offset of the AEM payload in an AEM AECPDU frame: Ethernet 14, control
/// header 12, controller ID and sequence ID 10, command type 2.
pub const AEM_PAYLOAD_FRAME_OFFSET: usize = 38;

/// Length of the Ethernet and AVTP control headers.
pub const FRAME_HEADERS_LENGTH: usize = 26;

pub fn mac(last: u8) -> MacAddress {
    MacAddress::new([0x00, 0x1B, 0x92, 0x00, 0x00, last])
}

/// Encodes `pdu` and decodes it back with `config`.
pub fn frame_round_trip(pdu: Atdeccpdu, config: &CodecConfig) -> Atdeccpdu {
    let frame = encode_frame(&pdu).unwrap();
    decode_frame(&frame, config).unwrap()
}

/// AEM command PDU of `C` addressed from the controller to the talker.
pub fn addressed_command<C: AemCommand>(payload: &C::Command, sequence_id: u16) -> AemAecpdu {
    let mut pdu = aem_payloads::command_pdu::<C>(payload).unwrap();
    pdu.header.ethernet.source = mac(0x01);
    pdu.header.ethernet.destination = mac(0x02);
    pdu.header.target_entity_id = TALKER_ENTITY_ID;
    pdu.header.controller_entity_id = CONTROLLER_ENTITY_ID;
    pdu.header.sequence_id = SequenceId::new(sequence_id);
    pdu
}

/// Sends `pdu` through the frame codec and returns the decoded AEM AECPDU.
pub fn through_the_wire(pdu: AemAecpdu) -> AemAecpdu {
    match frame_round_trip(Atdeccpdu::Aem(pdu), &CodecConfig::strict()) {
        Atdeccpdu::Aem(pdu) => pdu,
        other => panic!("expected an AEM AECPDU, got {other:?}"),
    }
}

/// Encodes a response of `C` with `status` and decodes it back from a frame.
pub fn response_round_trip<C: AemCommand>(
    status: AemCommandStatus,
    payload: &C::Response,
) -> Reply<C::Command, C::Response> {
    let pdu = aem_payloads::response_pdu::<C>(status, payload).unwrap();
    let received = through_the_wire(pdu);
    aem_payloads::decode_response::<C>(&received, &CodecConfig::strict()).unwrap()
}

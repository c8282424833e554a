//! Integration tests for ACMP connection management frames.

mod common;
use common::{CONTROLLER_ENTITY_ID, FRAME_HEADERS_LENGTH, LISTENER_ENTITY_ID, TALKER_ENTITY_ID, mac};

use atdecc::config::CodecConfig;
use atdecc::entity_model::ConnectionFlags;
use atdecc::error::AtdeccError;
use atdecc::protocol::{
    ACMP_MULTICAST_ADDRESS, AcmpMessageType, AcmpStatus, Acmpdu, Atdeccpdu, decode_frame,
    encode_frame,
};
use atdecc::traits::Pdu;
use atdecc::types::{MacAddress, SequenceId};

fn connect_rx() -> Acmpdu {
    let mut pdu = Acmpdu::connect_rx_command();
    pdu.ethernet.source = mac(0x01);
    pdu.controller_entity_id = CONTROLLER_ENTITY_ID;
    pdu.talker_entity_id = TALKER_ENTITY_ID;
    pdu.listener_entity_id = LISTENER_ENTITY_ID;
    pdu.talker_unique_id = 0;
    pdu.listener_unique_id = 1;
    pdu.sequence_id = SequenceId::new(0x0102);
    pdu
}

#[test]
fn acmp_connect_exchange() {
    let command = connect_rx();
    let frame = command.encode().unwrap();
    assert_eq!(frame.len(), FRAME_HEADERS_LENGTH + 44);
    assert_eq!(&frame[..6], &ACMP_MULTICAST_ADDRESS.octets());
    assert_eq!(frame[14], 0xFC);
    assert_eq!(frame[15] & 0x0F, 0x06);

    let received = match decode_frame(&frame, &CodecConfig::strict()).unwrap() {
        Atdeccpdu::Acmp(pdu) => pdu,
        other => panic!("expected ACMPDU, got {other:?}"),
    };
    assert_eq!(received, command);

    let mut response = received.response_copy().unwrap();
    response.stream_id = atdecc::UniqueIdentifier::new(0x0011_2233_4455_0000);
    response.stream_dest_address = MacAddress::new([0x91, 0xE0, 0xF0, 0x00, 0x12, 0x34]);
    response.connection_count = 1;
    response.flags = ConnectionFlags::STREAMING_WAIT | ConnectionFlags::CLASS_B;
    response.stream_vlan_id = 2;
    assert_eq!(response.message_type, AcmpMessageType::ConnectRxResponse);

    let frame = encode_frame(&Atdeccpdu::Acmp(response.clone())).unwrap();
    assert_eq!(
        decode_frame(&frame, &CodecConfig::strict()).unwrap(),
        Atdeccpdu::Acmp(response)
    );
}

#[test]
fn acmp_response_copy_of_a_response_is_refused() {
    let response = connect_rx().response_copy().unwrap();
    assert!(matches!(
        response.response_copy(),
        Err(AtdeccError::InvalidState { .. })
    ));
}

#[test]
fn acmp_status_uses_five_bits() {
    let mut response = Acmpdu::get_tx_state_command().response_copy().unwrap();
    response.status = AcmpStatus::NotSupported;
    let frame = response.encode().unwrap();
    assert_eq!(frame[16] >> 3, 31);
    let decoded = Acmpdu::deserialize(&frame, &CodecConfig::default()).unwrap();
    assert_eq!(decoded.status, AcmpStatus::NotSupported);
}

#[test]
fn acmp_every_factory_round_trips() {
    let factories: [fn() -> Acmpdu; 7] = [
        Acmpdu::connect_tx_command,
        Acmpdu::disconnect_tx_command,
        Acmpdu::get_tx_state_command,
        Acmpdu::connect_rx_command,
        Acmpdu::disconnect_rx_command,
        Acmpdu::get_rx_state_command,
        Acmpdu::get_tx_connection_command,
    ];
    for factory in factories {
        let command = factory();
        assert!(command.message_type.is_command());
        let frame = command.encode().unwrap();
        assert_eq!(
            Acmpdu::deserialize(&frame, &CodecConfig::strict()).unwrap(),
            command
        );
    }
}

#[test]
fn acmp_frame_of_another_subtype_is_refused() {
    let frame = connect_rx().encode().unwrap();
    let mut adp = frame.to_vec();
    adp[14] = 0xFA;
    assert!(Acmpdu::deserialize(&adp, &CodecConfig::default()).is_err());
}

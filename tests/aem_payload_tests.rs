//! AEM payload catalogue: bounds safety for every command, and round trips of
//! the payloads with optional or variable parts.

mod common;
use common::{addressed_command, response_round_trip, through_the_wire};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use atdecc::aem_payloads::*;
use atdecc::config::CodecConfig;
use atdecc::entity_model::{
    ControlValues, DescriptorType, LinearValue, MemoryObjectOperationType, MsrpFailureCode,
    ProbingStatus, SamplingRate, StreamFormat, StreamInfoFlags, StreamInfoFlagsEx,
};
use atdecc::error::ParsingError;
use atdecc::protocol::{AcmpStatus, AemCommandStatus};
use atdecc::types::{ConfigurationIndex, DescriptorIndex, MacAddress, OperationId};
use atdecc::unique_identifier::UniqueIdentifier;

macro_rules! for_each_command {
    ($check:ident) => {
        $check::<AcquireEntity>();
        $check::<LockEntity>();
        $check::<EntityAvailable>();
        $check::<ControllerAvailable>();
        $check::<ReadDescriptor>();
        $check::<SetConfiguration>();
        $check::<GetConfiguration>();
        $check::<SetStreamFormat>();
        $check::<GetStreamFormat>();
        $check::<SetStreamInfo>();
        $check::<GetStreamInfo>();
        $check::<SetName>();
        $check::<GetName>();
        $check::<SetAssociationId>();
        $check::<GetAssociationId>();
        $check::<SetSamplingRate>();
        $check::<GetSamplingRate>();
        $check::<SetClockSource>();
        $check::<GetClockSource>();
        $check::<SetControl>();
        $check::<GetControl>();
        $check::<StartStreaming>();
        $check::<StopStreaming>();
        $check::<RegisterUnsolicitedNotification>();
        $check::<DeregisterUnsolicitedNotification>();
        $check::<GetAvbInfo>();
        $check::<GetAsPath>();
        $check::<GetCounters>();
        $check::<Reboot>();
        $check::<GetAudioMap>();
        $check::<AddAudioMappings>();
        $check::<RemoveAudioMappings>();
        $check::<StartOperation>();
        $check::<AbortOperation>();
        $check::<OperationStatus>();
        $check::<SetMemoryObjectLength>();
        $check::<GetMemoryObjectLength>();
    };
}

fn short_buffers_are_malformed<C: AemCommand>() {
    let config = CodecConfig::default();
    let buffer = [0u8; 512];
    for length in 0..C::COMMAND_LENGTH {
        assert!(
            matches!(
                deserialize_command::<C>(&buffer[..length], &config),
                Err(ParsingError::MalformedPayload { .. })
            ),
            "{:?} command accepted {length} bytes",
            C::COMMAND_TYPE
        );
    }
    for length in 0..C::RESPONSE_LENGTH {
        assert!(
            matches!(
                deserialize_response::<C>(AemCommandStatus::Success, &buffer[..length], &config),
                Err(ParsingError::MalformedPayload { .. })
            ),
            "{:?} response accepted {length} bytes",
            C::COMMAND_TYPE
        );
    }
}

#[test]
fn every_command_rejects_short_payloads() {
    for_each_command!(short_buffers_are_malformed);
}

fn random_payloads_never_panic<C: AemCommand>() {
    let mut rng = StdRng::seed_from_u64(u64::from(u16::from(C::COMMAND_TYPE)));
    let config = CodecConfig::default();
    let statuses = [
        AemCommandStatus::Success,
        AemCommandStatus::NotImplemented,
        AemCommandStatus::NoSuchDescriptor,
        AemCommandStatus::InProgress,
    ];
    for _ in 0..200 {
        let length = rng.random_range(0..160);
        let mut buffer = vec![0u8; length];
        rng.fill(&mut buffer[..]);
        let _ = deserialize_command::<C>(&buffer, &config);
        for status in statuses {
            let _ = deserialize_response::<C>(status, &buffer, &config);
        }
    }
}

#[test]
fn every_command_survives_random_payloads() {
    for_each_command!(random_payloads_never_panic);
}

#[test]
fn unit_commands_carry_no_payload() {
    let pdu = addressed_command::<EntityAvailable>(&(), 1);
    assert!(pdu.payload.is_empty());
    let received = through_the_wire(pdu);
    assert_eq!(
        decode_response::<EntityAvailable>(&received, &CodecConfig::strict()).unwrap(),
        Reply::Full(())
    );
}

fn stream_output(index: u16) -> DescriptorRef {
    DescriptorRef::new(DescriptorType::StreamOutput, DescriptorIndex::new(index))
}

fn stream_info(milan: Option<MilanStreamInfo>) -> StreamInfoPayload {
    StreamInfoPayload {
        descriptor: stream_output(0),
        info: StreamInfo {
            stream_info_flags: StreamInfoFlags::STREAM_ID_VALID | StreamInfoFlags::STREAM_DEST_MAC_VALID,
            stream_format: StreamFormat::new(0x0205_0220_0040_6000),
            stream_id: UniqueIdentifier::new(0x0011_2233_4455_0001),
            msrp_accumulated_latency: 125_000,
            stream_dest_mac: MacAddress::new([0x91, 0xE0, 0xF0, 0x00, 0xFE, 0x02]),
            msrp_failure_code: MsrpFailureCode::NoFailure,
            msrp_failure_bridge_id: 0,
            stream_vlan_id: 2,
            milan,
        },
    }
}

#[test]
fn stream_info_with_and_without_milan_extension() {
    let plain = stream_info(None);
    assert_eq!(serialize_response::<GetStreamInfo>(&plain).unwrap().len(), 48);
    let reply = response_round_trip::<GetStreamInfo>(AemCommandStatus::Success, &plain);
    assert_eq!(reply.full(), Some(plain));

    let milan = stream_info(Some(MilanStreamInfo {
        flags_ex: StreamInfoFlagsEx::REGISTERING,
        probing_status: ProbingStatus::Completed,
        acmp_status: AcmpStatus::ListenerTalkerTimeout,
    }));
    assert_eq!(serialize_response::<GetStreamInfo>(&milan).unwrap().len(), 56);
    let reply = response_round_trip::<GetStreamInfo>(AemCommandStatus::Success, &milan);
    assert_eq!(reply.full(), Some(milan));
}

#[test]
fn avb_info_and_as_path_sections() {
    let info = AvbInfoPayload {
        descriptor: DescriptorRef::new(DescriptorType::AvbInterface, DescriptorIndex::new(0)),
        info: AvbInfo {
            gptp_grandmaster_id: UniqueIdentifier::new(0x0001_02FF_FE03_0405),
            propagation_delay: 500,
            gptp_domain_number: 0,
            ..AvbInfo::default()
        },
    };
    let reply = response_round_trip::<GetAvbInfo>(AemCommandStatus::Success, &info);
    assert_eq!(reply.full(), Some(info));

    let path = AsPathPayload {
        avb_interface_index: DescriptorIndex::new(0),
        path: vec![
            UniqueIdentifier::new(0x0001_02FF_FE03_0405),
            UniqueIdentifier::new(0x0001_02FF_FE03_0406),
        ],
    };
    let bytes = serialize_response::<GetAsPath>(&path).unwrap();
    assert_eq!(bytes.len(), 4 + 16);
    let mut truncated = bytes.to_vec();
    truncated.truncate(12);
    assert!(matches!(
        deserialize_response::<GetAsPath>(AemCommandStatus::Success, &truncated, &CodecConfig::default()),
        Err(ParsingError::VariableSectionOverflow { count: 2, element_size: 8, .. })
    ));
}

#[test]
fn counters_expose_only_valid_entries() {
    let mut counters = CountersPayload {
        descriptor: DescriptorRef::new(DescriptorType::Entity, DescriptorIndex::new(0)),
        valid_counters: 0b101,
        ..CountersPayload::default()
    };
    counters.counters[0] = 11;
    counters.counters[1] = 22;
    counters.counters[2] = 33;
    let decoded = response_round_trip::<GetCounters>(AemCommandStatus::Success, &counters)
        .full()
        .unwrap();
    assert_eq!(decoded.counter(0), Some(11));
    assert_eq!(decoded.counter(1), None);
    assert_eq!(decoded.counter(2), Some(33));
    assert_eq!(decoded.counter(64), None);
}

#[test]
fn control_values_travel_packed() {
    let values = ControlValues::LinearUInt8(vec![
        LinearValue::with_current(3u8),
        LinearValue::with_current(200u8),
    ]);
    let descriptor = DescriptorRef::new(DescriptorType::Control, DescriptorIndex::new(4));
    let payload = ControlPayload::new(descriptor, &values).unwrap();
    assert_eq!(payload.values.len(), 2);

    let decoded = response_round_trip::<SetControl>(AemCommandStatus::Success, &payload)
        .into_payload();
    let unpacked = decoded
        .decode_values(atdecc::entity_model::ControlValueKind::LinearUInt8, 2)
        .unwrap();
    assert_eq!(unpacked, values.to_dynamic());
    assert!(decoded
        .decode_values(atdecc::entity_model::ControlValueKind::LinearUInt8, 3)
        .is_err());
}

#[test]
fn operations_and_memory_object_length() {
    let start = StartOperationPayload {
        descriptor: DescriptorRef::new(DescriptorType::MemoryObject, DescriptorIndex::new(1)),
        operation_id: OperationId::new(0),
        operation_type: MemoryObjectOperationType::Erase,
        values: bytes::Bytes::from_static(&[0xAA, 0xBB]),
    };
    let received = through_the_wire(addressed_command::<StartOperation>(&start, 9));
    assert_eq!(
        decode_command::<StartOperation>(&received, &CodecConfig::strict()).unwrap(),
        start
    );

    let status = OperationStatusPayload {
        descriptor: start.descriptor,
        operation_id: OperationId::new(12),
        percent_complete: 1000,
    };
    let reply = response_round_trip::<OperationStatus>(AemCommandStatus::Success, &status);
    assert_eq!(reply.into_payload(), status);

    let length = MemoryObjectLengthPayload {
        configuration_index: ConfigurationIndex::new(0),
        memory_object_index: DescriptorIndex::new(1),
        length: 0x0001_0000,
    };
    let reply = response_round_trip::<GetMemoryObjectLength>(AemCommandStatus::Success, &length);
    assert_eq!(reply.full(), Some(length));
}

#[test]
fn sampling_rate_and_clock_source() {
    let rate = SamplingRatePayload {
        descriptor: DescriptorRef::new(DescriptorType::AudioUnit, DescriptorIndex::new(0)),
        sampling_rate: SamplingRate::from_pull_base_frequency(1, 48_000),
    };
    let decoded = response_round_trip::<GetSamplingRate>(AemCommandStatus::Success, &rate)
        .full()
        .unwrap();
    assert_eq!(decoded.sampling_rate.pull(), 1);
    assert_eq!(decoded.sampling_rate.base_frequency(), 48_000);

    let source = ClockSourcePayload {
        descriptor: DescriptorRef::new(DescriptorType::ClockDomain, DescriptorIndex::new(0)),
        clock_source_index: DescriptorIndex::new(2),
    };
    let reply = response_round_trip::<SetClockSource>(AemCommandStatus::Success, &source);
    assert_eq!(reply.into_payload(), source);
}

#[test]
fn fixed_payload_with_trailing_bytes() {
    let payload = ConfigurationPayload {
        configuration_index: ConfigurationIndex::new(1),
    };
    let mut bytes = serialize_command::<SetConfiguration>(&payload).unwrap().to_vec();
    bytes.extend_from_slice(&[0, 0]);
    assert_eq!(
        deserialize_command::<SetConfiguration>(&bytes, &CodecConfig::default()).unwrap(),
        payload
    );
    assert!(matches!(
        deserialize_command::<SetConfiguration>(&bytes, &CodecConfig::strict()),
        Err(ParsingError::LengthMismatch { .. })
    ));
}

//! One marker type per supported AEM command.

use super::audio_map::{AudioMapPayload, AudioMappingsPayload, GetAudioMapCommandPayload};
use super::avb::{AsPathCommandPayload, AsPathPayload, AvbInfoPayload, CountersPayload};
use super::clock::{ClockSourcePayload, SamplingRatePayload};
use super::configuration::ConfigurationPayload;
use super::control::ControlPayload;
use super::naming::{AssociationIdPayload, GetNameCommandPayload, NamePayload};
use super::operation::{
    AbortOperationPayload, GetMemoryObjectLengthCommandPayload, MemoryObjectLengthPayload,
    OperationStatusPayload, StartOperationPayload,
};
use super::ownership::{AcquireEntityPayload, LockEntityPayload};
use super::read_descriptor::{ReadDescriptorCommandPayload, ReadDescriptorResponsePayload};
use super::sizes::*;
use super::stream::{StreamFormatPayload, StreamInfoPayload};
use super::{AemCommand, DescriptorRef, PayloadCodec};
use crate::protocol::AemCommandType;

macro_rules! aem_commands {
    ($(
        $(#[$meta:meta])*
        $name:ident {
            command: $command:ty = $command_length:expr,
            response: $response:ty = $response_length:expr $(,)?
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl AemCommand for $name {
                const COMMAND_TYPE: AemCommandType = AemCommandType::$name;
                const COMMAND_LENGTH: usize = $command_length;
                const RESPONSE_LENGTH: usize = $response_length;
                type Command = $command;
                type Response = $response;
            }

            const _: () = assert!(<$command as PayloadCodec>::MIN_LENGTH == $command_length);
            const _: () = assert!(<$response as PayloadCodec>::MIN_LENGTH == $response_length);
        )*

        /// Whether `command_type` has a payload codec in this module.
        pub fn is_supported(command_type: AemCommandType) -> bool {
            matches!(command_type, $(AemCommandType::$name)|*)
        }
    };
}

aem_commands! {
    AcquireEntity {
        command: AcquireEntityPayload = ACQUIRE_ENTITY_COMMAND,
        response: AcquireEntityPayload = ACQUIRE_ENTITY_RESPONSE,
    }
    LockEntity {
        command: LockEntityPayload = LOCK_ENTITY_COMMAND,
        response: LockEntityPayload = LOCK_ENTITY_RESPONSE,
    }
    EntityAvailable {
        command: () = ENTITY_AVAILABLE_COMMAND,
        response: () = ENTITY_AVAILABLE_RESPONSE,
    }
    ControllerAvailable {
        command: () = CONTROLLER_AVAILABLE_COMMAND,
        response: () = CONTROLLER_AVAILABLE_RESPONSE,
    }
    ReadDescriptor {
        command: ReadDescriptorCommandPayload = READ_DESCRIPTOR_COMMAND,
        response: ReadDescriptorResponsePayload = READ_DESCRIPTOR_RESPONSE,
    }
    SetConfiguration {
        command: ConfigurationPayload = SET_CONFIGURATION_COMMAND,
        response: ConfigurationPayload = SET_CONFIGURATION_RESPONSE,
    }
    GetConfiguration {
        command: () = GET_CONFIGURATION_COMMAND,
        response: ConfigurationPayload = GET_CONFIGURATION_RESPONSE,
    }
    SetStreamFormat {
        command: StreamFormatPayload = SET_STREAM_FORMAT_COMMAND,
        response: StreamFormatPayload = SET_STREAM_FORMAT_RESPONSE,
    }
    GetStreamFormat {
        command: DescriptorRef = GET_STREAM_FORMAT_COMMAND,
        response: StreamFormatPayload = GET_STREAM_FORMAT_RESPONSE,
    }
    SetStreamInfo {
        command: StreamInfoPayload = SET_STREAM_INFO_COMMAND,
        response: StreamInfoPayload = SET_STREAM_INFO_RESPONSE,
    }
    GetStreamInfo {
        command: DescriptorRef = GET_STREAM_INFO_COMMAND,
        response: StreamInfoPayload = GET_STREAM_INFO_RESPONSE,
    }
    SetName {
        command: NamePayload = SET_NAME_COMMAND,
        response: NamePayload = SET_NAME_RESPONSE,
    }
    GetName {
        command: GetNameCommandPayload = GET_NAME_COMMAND,
        response: NamePayload = GET_NAME_RESPONSE,
    }
    SetAssociationId {
        command: AssociationIdPayload = SET_ASSOCIATION_ID_COMMAND,
        response: AssociationIdPayload = SET_ASSOCIATION_ID_RESPONSE,
    }
    GetAssociationId {
        command: () = GET_ASSOCIATION_ID_COMMAND,
        response: AssociationIdPayload = GET_ASSOCIATION_ID_RESPONSE,
    }
    SetSamplingRate {
        command: SamplingRatePayload = SET_SAMPLING_RATE_COMMAND,
        response: SamplingRatePayload = SET_SAMPLING_RATE_RESPONSE,
    }
    GetSamplingRate {
        command: DescriptorRef = GET_SAMPLING_RATE_COMMAND,
        response: SamplingRatePayload = GET_SAMPLING_RATE_RESPONSE,
    }
    SetClockSource {
        command: ClockSourcePayload = SET_CLOCK_SOURCE_COMMAND,
        response: ClockSourcePayload = SET_CLOCK_SOURCE_RESPONSE,
    }
    GetClockSource {
        command: DescriptorRef = GET_CLOCK_SOURCE_COMMAND,
        response: ClockSourcePayload = GET_CLOCK_SOURCE_RESPONSE,
    }
    SetControl {
        command: ControlPayload = SET_CONTROL_COMMAND,
        response: ControlPayload = SET_CONTROL_RESPONSE,
    }
    GetControl {
        command: DescriptorRef = GET_CONTROL_COMMAND,
        response: ControlPayload = GET_CONTROL_RESPONSE,
    }
    StartStreaming {
        command: DescriptorRef = START_STREAMING_COMMAND,
        response: DescriptorRef = START_STREAMING_RESPONSE,
    }
    StopStreaming {
        command: DescriptorRef = STOP_STREAMING_COMMAND,
        response: DescriptorRef = STOP_STREAMING_RESPONSE,
    }
    RegisterUnsolicitedNotification {
        command: () = REGISTER_UNSOLICITED_NOTIFICATION_COMMAND,
        response: () = REGISTER_UNSOLICITED_NOTIFICATION_RESPONSE,
    }
    DeregisterUnsolicitedNotification {
        command: () = DEREGISTER_UNSOLICITED_NOTIFICATION_COMMAND,
        response: () = DEREGISTER_UNSOLICITED_NOTIFICATION_RESPONSE,
    }
    GetAvbInfo {
        command: DescriptorRef = GET_AVB_INFO_COMMAND,
        response: AvbInfoPayload = GET_AVB_INFO_RESPONSE,
    }
    GetAsPath {
        command: AsPathCommandPayload = GET_AS_PATH_COMMAND,
        response: AsPathPayload = GET_AS_PATH_RESPONSE,
    }
    GetCounters {
        command: DescriptorRef = GET_COUNTERS_COMMAND,
        response: CountersPayload = GET_COUNTERS_RESPONSE,
    }
    Reboot {
        command: DescriptorRef = REBOOT_COMMAND,
        response: DescriptorRef = REBOOT_RESPONSE,
    }
    GetAudioMap {
        command: GetAudioMapCommandPayload = GET_AUDIO_MAP_COMMAND,
        response: AudioMapPayload = GET_AUDIO_MAP_RESPONSE,
    }
    AddAudioMappings {
        command: AudioMappingsPayload = ADD_AUDIO_MAPPINGS_COMMAND,
        response: AudioMappingsPayload = ADD_AUDIO_MAPPINGS_RESPONSE,
    }
    RemoveAudioMappings {
        command: AudioMappingsPayload = REMOVE_AUDIO_MAPPINGS_COMMAND,
        response: AudioMappingsPayload = REMOVE_AUDIO_MAPPINGS_RESPONSE,
    }
    StartOperation {
        command: StartOperationPayload = START_OPERATION_COMMAND,
        response: StartOperationPayload = START_OPERATION_RESPONSE,
    }
    AbortOperation {
        command: AbortOperationPayload = ABORT_OPERATION_COMMAND,
        response: AbortOperationPayload = ABORT_OPERATION_RESPONSE,
    }
    /// Unsolicited progress report of a running operation.
    OperationStatus {
        command: OperationStatusPayload = OPERATION_STATUS_COMMAND,
        response: OperationStatusPayload = OPERATION_STATUS_RESPONSE,
    }
    SetMemoryObjectLength {
        command: MemoryObjectLengthPayload = SET_MEMORY_OBJECT_LENGTH_COMMAND,
        response: MemoryObjectLengthPayload = SET_MEMORY_OBJECT_LENGTH_RESPONSE,
    }
    GetMemoryObjectLength {
        command: GetMemoryObjectLengthCommandPayload = GET_MEMORY_OBJECT_LENGTH_COMMAND,
        response: MemoryObjectLengthPayload = GET_MEMORY_OBJECT_LENGTH_RESPONSE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_carry_their_command_code() {
        assert_eq!(u16::from(AcquireEntity::COMMAND_TYPE), 0x0000);
        assert_eq!(u16::from(ReadDescriptor::COMMAND_TYPE), 0x0004);
        assert_eq!(u16::from(GetCounters::COMMAND_TYPE), 0x0029);
        assert_eq!(u16::from(GetMemoryObjectLength::COMMAND_TYPE), 0x0048);
    }

    #[test]
    fn supported_commands() {
        assert!(is_supported(AemCommandType::SetControl));
        assert!(!is_supported(AemCommandType::SetMixer));
        assert!(!is_supported(AemCommandType::Unknown(0x7000)));
    }
}

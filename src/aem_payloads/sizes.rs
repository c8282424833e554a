//! Fixed or minimum AEM payload lengths, in bytes after the AEM sub-header.

use crate::constants::AEM_MAX_SEND_PAYLOAD_LENGTH;

pub const ACQUIRE_ENTITY_COMMAND: usize = 16;
pub const ACQUIRE_ENTITY_RESPONSE: usize = 16;

pub const LOCK_ENTITY_COMMAND: usize = 16;
pub const LOCK_ENTITY_RESPONSE: usize = 16;

pub const ENTITY_AVAILABLE_COMMAND: usize = 0;
pub const ENTITY_AVAILABLE_RESPONSE: usize = 0;

pub const CONTROLLER_AVAILABLE_COMMAND: usize = 0;
pub const CONTROLLER_AVAILABLE_RESPONSE: usize = 0;

pub const READ_DESCRIPTOR_COMMAND: usize = 8;
/// Common header only: configuration, reserved, descriptor type and index.
pub const READ_DESCRIPTOR_RESPONSE: usize = 8;

pub const SET_CONFIGURATION_COMMAND: usize = 4;
pub const SET_CONFIGURATION_RESPONSE: usize = 4;
pub const GET_CONFIGURATION_COMMAND: usize = 0;
pub const GET_CONFIGURATION_RESPONSE: usize = 4;

pub const SET_STREAM_FORMAT_COMMAND: usize = 12;
pub const SET_STREAM_FORMAT_RESPONSE: usize = 12;
pub const GET_STREAM_FORMAT_COMMAND: usize = 4;
pub const GET_STREAM_FORMAT_RESPONSE: usize = 12;

pub const SET_STREAM_INFO_COMMAND: usize = 48;
pub const SET_STREAM_INFO_RESPONSE: usize = 48;
pub const GET_STREAM_INFO_COMMAND: usize = 4;
pub const GET_STREAM_INFO_RESPONSE: usize = 48;
/// GET_STREAM_INFO response carrying the Milan extension.
pub const GET_STREAM_INFO_MILAN_RESPONSE: usize = 56;

pub const SET_NAME_COMMAND: usize = 72;
pub const SET_NAME_RESPONSE: usize = 72;
pub const GET_NAME_COMMAND: usize = 8;
pub const GET_NAME_RESPONSE: usize = 72;

pub const SET_ASSOCIATION_ID_COMMAND: usize = 8;
pub const SET_ASSOCIATION_ID_RESPONSE: usize = 8;
pub const GET_ASSOCIATION_ID_COMMAND: usize = 0;
pub const GET_ASSOCIATION_ID_RESPONSE: usize = 8;

pub const SET_SAMPLING_RATE_COMMAND: usize = 8;
pub const SET_SAMPLING_RATE_RESPONSE: usize = 8;
pub const GET_SAMPLING_RATE_COMMAND: usize = 4;
pub const GET_SAMPLING_RATE_RESPONSE: usize = 8;

pub const SET_CLOCK_SOURCE_COMMAND: usize = 8;
pub const SET_CLOCK_SOURCE_RESPONSE: usize = 8;
pub const GET_CLOCK_SOURCE_COMMAND: usize = 4;
pub const GET_CLOCK_SOURCE_RESPONSE: usize = 8;

/// Minimum: descriptor type and index, values follow.
pub const SET_CONTROL_COMMAND: usize = 4;
pub const SET_CONTROL_RESPONSE: usize = 4;
pub const GET_CONTROL_COMMAND: usize = 4;
pub const GET_CONTROL_RESPONSE: usize = 4;

pub const START_STREAMING_COMMAND: usize = 4;
pub const START_STREAMING_RESPONSE: usize = 4;
pub const STOP_STREAMING_COMMAND: usize = 4;
pub const STOP_STREAMING_RESPONSE: usize = 4;

pub const REGISTER_UNSOLICITED_NOTIFICATION_COMMAND: usize = 0;
pub const REGISTER_UNSOLICITED_NOTIFICATION_RESPONSE: usize = 0;
pub const DEREGISTER_UNSOLICITED_NOTIFICATION_COMMAND: usize = 0;
pub const DEREGISTER_UNSOLICITED_NOTIFICATION_RESPONSE: usize = 0;

pub const GET_AVB_INFO_COMMAND: usize = 4;
/// Minimum: MSRP mappings follow.
pub const GET_AVB_INFO_RESPONSE: usize = 20;

pub const GET_AS_PATH_COMMAND: usize = 4;
/// Minimum: path sequence follows.
pub const GET_AS_PATH_RESPONSE: usize = 4;

pub const GET_COUNTERS_COMMAND: usize = 4;
pub const GET_COUNTERS_RESPONSE: usize = 136;

pub const REBOOT_COMMAND: usize = 4;
pub const REBOOT_RESPONSE: usize = 4;

pub const GET_AUDIO_MAP_COMMAND: usize = 8;
/// Minimum: mappings follow.
pub const GET_AUDIO_MAP_RESPONSE: usize = 12;

/// Minimum: mappings follow.
pub const ADD_AUDIO_MAPPINGS_COMMAND: usize = 8;
pub const ADD_AUDIO_MAPPINGS_RESPONSE: usize = 8;
pub const REMOVE_AUDIO_MAPPINGS_COMMAND: usize = 8;
pub const REMOVE_AUDIO_MAPPINGS_RESPONSE: usize = 8;

/// Minimum: operation values follow.
pub const START_OPERATION_COMMAND: usize = 8;
pub const START_OPERATION_RESPONSE: usize = 8;

pub const ABORT_OPERATION_COMMAND: usize = 8;
pub const ABORT_OPERATION_RESPONSE: usize = 8;

/// OPERATION_STATUS only exists as an unsolicited response; both shapes match.
pub const OPERATION_STATUS_COMMAND: usize = 8;
pub const OPERATION_STATUS_RESPONSE: usize = 8;

pub const SET_MEMORY_OBJECT_LENGTH_COMMAND: usize = 12;
pub const SET_MEMORY_OBJECT_LENGTH_RESPONSE: usize = 12;
pub const GET_MEMORY_OBJECT_LENGTH_COMMAND: usize = 4;
pub const GET_MEMORY_OBJECT_LENGTH_RESPONSE: usize = 12;

/// Audio mappings that fit in one ADD/REMOVE_AUDIO_MAPPINGS payload.
pub const MAX_ADD_REMOVE_AUDIO_MAPPINGS: usize =
    (AEM_MAX_SEND_PAYLOAD_LENGTH - ADD_AUDIO_MAPPINGS_COMMAND) / 8;

// Command/response pairs encoded by one shared coder.
const _: () = assert!(ACQUIRE_ENTITY_COMMAND == ACQUIRE_ENTITY_RESPONSE);
const _: () = assert!(LOCK_ENTITY_COMMAND == LOCK_ENTITY_RESPONSE);
const _: () = assert!(SET_CONFIGURATION_COMMAND == SET_CONFIGURATION_RESPONSE);
const _: () = assert!(SET_CONFIGURATION_RESPONSE == GET_CONFIGURATION_RESPONSE);
const _: () = assert!(SET_STREAM_FORMAT_COMMAND == SET_STREAM_FORMAT_RESPONSE);
const _: () = assert!(SET_STREAM_FORMAT_RESPONSE == GET_STREAM_FORMAT_RESPONSE);
const _: () = assert!(SET_STREAM_INFO_COMMAND == SET_STREAM_INFO_RESPONSE);
const _: () = assert!(SET_STREAM_INFO_RESPONSE == GET_STREAM_INFO_RESPONSE);
const _: () = assert!(SET_NAME_COMMAND == SET_NAME_RESPONSE);
const _: () = assert!(SET_NAME_RESPONSE == GET_NAME_RESPONSE);
const _: () = assert!(SET_ASSOCIATION_ID_COMMAND == SET_ASSOCIATION_ID_RESPONSE);
const _: () = assert!(SET_ASSOCIATION_ID_RESPONSE == GET_ASSOCIATION_ID_RESPONSE);
const _: () = assert!(SET_SAMPLING_RATE_COMMAND == SET_SAMPLING_RATE_RESPONSE);
const _: () = assert!(SET_SAMPLING_RATE_RESPONSE == GET_SAMPLING_RATE_RESPONSE);
const _: () = assert!(SET_CLOCK_SOURCE_COMMAND == SET_CLOCK_SOURCE_RESPONSE);
const _: () = assert!(SET_CLOCK_SOURCE_RESPONSE == GET_CLOCK_SOURCE_RESPONSE);
const _: () = assert!(SET_CONTROL_COMMAND == SET_CONTROL_RESPONSE);
const _: () = assert!(SET_CONTROL_RESPONSE == GET_CONTROL_RESPONSE);
const _: () = assert!(START_STREAMING_COMMAND == START_STREAMING_RESPONSE);
const _: () = assert!(STOP_STREAMING_COMMAND == STOP_STREAMING_RESPONSE);
const _: () = assert!(REBOOT_COMMAND == REBOOT_RESPONSE);
const _: () = assert!(ADD_AUDIO_MAPPINGS_COMMAND == ADD_AUDIO_MAPPINGS_RESPONSE);
const _: () = assert!(ADD_AUDIO_MAPPINGS_COMMAND == REMOVE_AUDIO_MAPPINGS_COMMAND);
const _: () = assert!(REMOVE_AUDIO_MAPPINGS_COMMAND == REMOVE_AUDIO_MAPPINGS_RESPONSE);
const _: () = assert!(START_OPERATION_COMMAND == START_OPERATION_RESPONSE);
const _: () = assert!(ABORT_OPERATION_COMMAND == ABORT_OPERATION_RESPONSE);
const _: () = assert!(OPERATION_STATUS_COMMAND == OPERATION_STATUS_RESPONSE);
const _: () = assert!(SET_MEMORY_OBJECT_LENGTH_COMMAND == SET_MEMORY_OBJECT_LENGTH_RESPONSE);
const _: () = assert!(SET_MEMORY_OBJECT_LENGTH_RESPONSE == GET_MEMORY_OBJECT_LENGTH_RESPONSE);

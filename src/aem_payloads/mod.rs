//! AEM command and response payload catalogue (IEEE 1722.1 clause 7.4).
//!
//! Every AEM command is described by a marker type implementing [`AemCommand`]:
//! the command code, the payload types of the command and its response, and
//! their fixed or minimum lengths. The generic functions of this module encode
//! and decode payloads for any such command:
//!
//! ```
//! use atdecc::aem_payloads::{self, AcquireEntity, AcquireEntityPayload};
//! use atdecc::config::CodecConfig;
//!
//! let payload = AcquireEntityPayload::default();
//! let bytes = aem_payloads::serialize_command::<AcquireEntity>(&payload).unwrap();
//! assert_eq!(bytes.len(), 16);
//! let decoded =
//!     aem_payloads::deserialize_command::<AcquireEntity>(&bytes, &CodecConfig::default()).unwrap();
//! assert_eq!(decoded, payload);
//! ```
//!
//! Responses go through a status-aware size check first: a `NotImplemented`
//! response carries the reflected command payload, any other status the full
//! response.

pub mod audio_map;
pub mod avb;
pub mod clock;
pub mod commands;
pub mod configuration;
pub mod control;
pub mod descriptors;
pub mod naming;
pub mod operation;
pub mod ownership;
pub mod read_descriptor;
pub mod sizes;
pub mod stream;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::config::CodecConfig;
use crate::constants::AEM_MAX_SEND_PAYLOAD_LENGTH;
use crate::entity_model::DescriptorType;
use crate::error::{BuildingError, ParsingError};
use crate::protocol::{AemAecpdu, AemCommandStatus, AemCommandType};
use crate::serialization::{Deserializer, Serializer, WireValue};
use crate::types::DescriptorIndex;

pub use audio_map::{AudioMapPayload, AudioMappingsPayload, GetAudioMapCommandPayload};
pub use avb::{AsPathCommandPayload, AsPathPayload, AvbInfo, AvbInfoPayload, CountersPayload};
pub use clock::{ClockSourcePayload, SamplingRatePayload};
pub use commands::*;
pub use configuration::ConfigurationPayload;
pub use control::ControlPayload;
pub use ownership::{AcquireEntityPayload, LockEntityPayload};
pub use naming::{AssociationIdPayload, GetNameCommandPayload, NamePayload};
pub use operation::{
    AbortOperationPayload, GetMemoryObjectLengthCommandPayload, MemoryObjectLengthPayload,
    OperationStatusPayload, StartOperationPayload,
};
pub use descriptors::{
    descriptor_length, deserialize_descriptor, minimum_descriptor_length, serialize_descriptor,
};
pub use read_descriptor::{
    ReadDescriptorCommandPayload, ReadDescriptorResponsePayload,
    deserialize_read_descriptor_response,
};
pub use stream::{MilanStreamInfo, StreamFormatPayload, StreamInfo, StreamInfoPayload};

/// Bytes that precede the descriptor-relative offsets of READ_DESCRIPTOR
/// variable sections: configuration index and reserved field.
pub const PAYLOAD_BUFFER_OFFSET: usize = 4;

/// 16-bit element count of a variable section.
pub(crate) fn section_count(context: &'static str, len: usize) -> Result<u16, BuildingError> {
    u16::try_from(len).map_err(|_| BuildingError::PayloadTooLarge {
        context,
        length: len,
        maximum: usize::from(u16::MAX),
    })
}

/// Reads `count` elements that directly follow the cursor, after checking
/// they all fit in the payload.
pub(crate) fn read_counted<T: WireValue>(
    des: &mut Deserializer<'_>,
    context: &'static str,
    count: usize,
) -> Result<Vec<T>, ParsingError> {
    des.check_section(context, count, T::WIRE_SIZE, des.len())?;
    (0..count).map(|_| des.read()).collect()
}

/// Binary layout of one AEM payload.
pub trait PayloadCodec: Sized {
    /// Exact length of a fixed payload, minimum length of a variable one.
    const MIN_LENGTH: usize;

    /// Whether the payload always occupies exactly [`Self::MIN_LENGTH`] bytes.
    const FIXED: bool = true;

    /// Encoded length of this value.
    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH
    }

    /// Writes the payload.
    ///
    /// # Errors
    /// - [`BuildingError`] - The value does not fit or cannot be represented
    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError>;

    /// Reads the payload. The caller has checked [`Self::MIN_LENGTH`].
    ///
    /// # Errors
    /// - [`ParsingError`] - Truncated data or invalid variable section
    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError>;

    /// Reads a response payload knowing its status. Only READ_DESCRIPTOR
    /// decodes differently when the status is not `Success`.
    ///
    /// # Errors
    /// Same as [`PayloadCodec::read`].
    fn read_response(
        des: &mut Deserializer<'_>,
        _command: AemCommandType,
        _status: AemCommandStatus,
    ) -> Result<Self, ParsingError> {
        Self::read(des)
    }
}

/// An AEM command with its command and response payload layouts.
pub trait AemCommand {
    /// Command code carried in the AEM sub-header.
    const COMMAND_TYPE: AemCommandType;
    /// Fixed or minimum command payload length.
    const COMMAND_LENGTH: usize;
    /// Fixed or minimum response payload length.
    const RESPONSE_LENGTH: usize;

    /// Command payload.
    type Command: PayloadCodec;
    /// Response payload.
    type Response: PayloadCodec;
}

/// Payloads without any field.
impl PayloadCodec for () {
    const MIN_LENGTH: usize = 0;

    fn write(&self, _ser: &mut Serializer) -> Result<(), BuildingError> {
        Ok(())
    }

    fn read(_des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(())
    }
}

/// Descriptor addressed by a command: type and index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DescriptorRef {
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
}

impl DescriptorRef {
    pub fn new(descriptor_type: DescriptorType, descriptor_index: DescriptorIndex) -> Self {
        Self {
            descriptor_type,
            descriptor_index,
        }
    }
}

impl PayloadCodec for DescriptorRef {
    const MIN_LENGTH: usize = 4;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.descriptor_type)?;
        ser.write(&self.descriptor_index)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            descriptor_type: des.read()?,
            descriptor_index: des.read()?,
        })
    }
}

/// Decoded response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reply<C, R> {
    /// The entity reported `NotImplemented` and reflected the command.
    Reflected(C),
    /// A complete response.
    Full(R),
}

impl<C, R> Reply<C, R> {
    /// The complete response, if any.
    pub fn full(self) -> Option<R> {
        match self {
            Reply::Full(response) => Some(response),
            Reply::Reflected(_) => None,
        }
    }

    /// Whether the command was reflected unanswered.
    pub fn is_reflected(&self) -> bool {
        matches!(self, Reply::Reflected(_))
    }
}

impl<T> Reply<T, T> {
    /// Payload of a command whose response has the same layout.
    pub fn into_payload(self) -> T {
        match self {
            Reply::Reflected(payload) | Reply::Full(payload) => payload,
        }
    }
}

/// Validates a response payload length against the reported status.
///
/// A `NotImplemented` response must carry exactly the reflected command
/// (at least the command minimum when the command has a variable tail);
/// every other status requires the full response.
///
/// # Errors
/// - [`ParsingError::MalformedPayload`] - The payload is too short, or a
///   reflected fixed command has the wrong size
pub fn check_response_payload(
    command: AemCommandType,
    status: AemCommandStatus,
    length: usize,
    command_length: usize,
    command_fixed: bool,
    response_length: usize,
) -> Result<(), ParsingError> {
    if status == AemCommandStatus::NotImplemented {
        let reflected_ok = if command_fixed {
            length == command_length
        } else {
            length >= command_length
        };
        if !reflected_ok {
            log::warn!(
                "{command:?}: reflected NotImplemented payload of {length} bytes, expected {command_length}"
            );
            return Err(ParsingError::MalformedPayload {
                command,
                status,
                needed: command_length,
                got: length,
            });
        }
        return Ok(());
    }
    if length < response_length {
        return Err(ParsingError::MalformedPayload {
            command,
            status,
            needed: response_length,
            got: length,
        });
    }
    Ok(())
}

fn encode<P: PayloadCodec>(context: &'static str, payload: &P) -> Result<Bytes, BuildingError> {
    let length = payload.wire_length();
    if length > AEM_MAX_SEND_PAYLOAD_LENGTH {
        return Err(BuildingError::PayloadTooLarge {
            context,
            length,
            maximum: AEM_MAX_SEND_PAYLOAD_LENGTH,
        });
    }
    let mut ser = Serializer::new(length);
    payload.write(&mut ser)?;
    debug_assert_eq!(
        ser.used_bytes(),
        ser.capacity(),
        "{context}: payload length disagrees with its layout"
    );
    Ok(ser.freeze())
}

fn finish<P: PayloadCodec>(
    command: AemCommandType,
    des: &Deserializer<'_>,
    config: &CodecConfig,
) -> Result<(), ParsingError> {
    let trailing = des.remaining();
    if trailing == 0 {
        return Ok(());
    }
    log::debug!("{command:?}: {trailing} unexpected trailing bytes");
    if P::FIXED && !config.allow_trailing_bytes {
        return Err(ParsingError::LengthMismatch {
            context: "AEM payload",
            declared: P::MIN_LENGTH,
            actual: des.len(),
        });
    }
    Ok(())
}

fn decode_command_payload<P: PayloadCodec>(
    command: AemCommandType,
    minimum: usize,
    payload: &[u8],
    config: &CodecConfig,
) -> Result<P, ParsingError> {
    if payload.len() < minimum {
        return Err(ParsingError::MalformedPayload {
            command,
            status: AemCommandStatus::Success,
            needed: minimum,
            got: payload.len(),
        });
    }
    let mut des = Deserializer::new(payload);
    let value = P::read(&mut des)?;
    finish::<P>(command, &des, config)?;
    Ok(value)
}

/// Encodes the command payload of `C`.
///
/// # Errors
/// - [`BuildingError::PayloadTooLarge`] - Beyond the maximum send payload
/// - [`BuildingError`] - A field cannot be encoded
pub fn serialize_command<C: AemCommand>(payload: &C::Command) -> Result<Bytes, BuildingError> {
    encode("AEM command payload", payload)
}

/// Encodes the response payload of `C`.
///
/// # Errors
/// Same as [`serialize_command`].
pub fn serialize_response<C: AemCommand>(payload: &C::Response) -> Result<Bytes, BuildingError> {
    encode("AEM response payload", payload)
}

/// Decodes the command payload of `C`.
///
/// # Errors
/// - [`ParsingError::MalformedPayload`] - Shorter than the command minimum
/// - [`ParsingError::LengthMismatch`] - Trailing bytes on a fixed payload under
///   a configuration that forbids them
/// - [`ParsingError`] - Variable section errors
pub fn deserialize_command<C: AemCommand>(
    payload: &[u8],
    config: &CodecConfig,
) -> Result<C::Command, ParsingError> {
    decode_command_payload(C::COMMAND_TYPE, C::COMMAND_LENGTH, payload, config)
}

/// Decodes the response payload of `C` reported with `status`.
///
/// # Errors
/// - [`ParsingError::MalformedPayload`] - Payload size inconsistent with `status`
/// - [`ParsingError`] - Same as [`deserialize_command`]
pub fn deserialize_response<C: AemCommand>(
    status: AemCommandStatus,
    payload: &[u8],
    config: &CodecConfig,
) -> Result<Reply<C::Command, C::Response>, ParsingError> {
    check_response_payload(
        C::COMMAND_TYPE,
        status,
        payload.len(),
        C::COMMAND_LENGTH,
        <C::Command as PayloadCodec>::FIXED,
        C::RESPONSE_LENGTH,
    )?;
    if status == AemCommandStatus::NotImplemented {
        return decode_command_payload(C::COMMAND_TYPE, C::COMMAND_LENGTH, payload, config)
            .map(Reply::Reflected);
    }
    let mut des = Deserializer::new(payload);
    let value = C::Response::read_response(&mut des, C::COMMAND_TYPE, status)?;
    finish::<C::Response>(C::COMMAND_TYPE, &des, config)?;
    Ok(Reply::Full(value))
}

/// AEM_COMMAND PDU of `C` carrying `payload`.
///
/// # Errors
/// Same as [`serialize_command`].
pub fn command_pdu<C: AemCommand>(payload: &C::Command) -> Result<AemAecpdu, BuildingError> {
    let mut pdu = AemAecpdu::command(C::COMMAND_TYPE);
    pdu.set_payload(serialize_command::<C>(payload)?)?;
    Ok(pdu)
}

/// AEM_RESPONSE PDU of `C` carrying `payload` with `status`.
///
/// # Errors
/// Same as [`serialize_command`].
pub fn response_pdu<C: AemCommand>(
    status: AemCommandStatus,
    payload: &C::Response,
) -> Result<AemAecpdu, BuildingError> {
    let mut pdu = AemAecpdu::response(C::COMMAND_TYPE);
    pdu.status = status;
    pdu.set_payload(serialize_response::<C>(payload)?)?;
    Ok(pdu)
}

fn expect_command_type<C: AemCommand>(pdu: &AemAecpdu) -> Result<(), ParsingError> {
    if pdu.command_type != C::COMMAND_TYPE {
        return Err(ParsingError::InvalidFieldValue {
            field: "command_type",
            structure: "AEM AECPDU",
            expected: u64::from(u16::from(C::COMMAND_TYPE)),
            got: u64::from(u16::from(pdu.command_type)),
        });
    }
    Ok(())
}

/// Decodes the payload of an AEM_COMMAND PDU as `C`.
///
/// # Errors
/// - [`ParsingError::InvalidFieldValue`] - The PDU carries another command type
/// - [`ParsingError`] - Same as [`deserialize_command`]
pub fn decode_command<C: AemCommand>(
    pdu: &AemAecpdu,
    config: &CodecConfig,
) -> Result<C::Command, ParsingError> {
    expect_command_type::<C>(pdu)?;
    deserialize_command::<C>(&pdu.payload, config)
}

/// Decodes the payload of an AEM_RESPONSE PDU as `C`, using its status.
///
/// # Errors
/// - [`ParsingError::InvalidFieldValue`] - The PDU carries another command type
/// - [`ParsingError`] - Same as [`deserialize_response`]
pub fn decode_response<C: AemCommand>(
    pdu: &AemAecpdu,
    config: &CodecConfig,
) -> Result<Reply<C::Command, C::Response>, ParsingError> {
    expect_command_type::<C>(pdu)?;
    deserialize_response::<C>(pdu.status, &pdu.payload, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_implemented_expects_reflected_command() {
        let check = |length| {
            check_response_payload(
                AemCommandType::GetStreamFormat,
                AemCommandStatus::NotImplemented,
                length,
                4,
                true,
                12,
            )
        };
        assert!(check(4).is_ok());
        assert!(matches!(
            check(12),
            Err(ParsingError::MalformedPayload { needed: 4, got: 12, .. })
        ));
    }

    #[test]
    fn variable_reflected_command_may_be_longer() {
        assert!(check_response_payload(
            AemCommandType::AddAudioMappings,
            AemCommandStatus::NotImplemented,
            24,
            8,
            false,
            8,
        )
        .is_ok());
    }

    #[test]
    fn other_statuses_require_the_full_response() {
        for status in [AemCommandStatus::Success, AemCommandStatus::NoSuchDescriptor] {
            assert!(matches!(
                check_response_payload(AemCommandType::GetCounters, status, 4, 4, true, 136),
                Err(ParsingError::MalformedPayload { needed: 136, got: 4, .. })
            ));
        }
    }

    #[test]
    fn descriptor_ref_reflection() {
        let reference = DescriptorRef::new(DescriptorType::StreamInput, DescriptorIndex::new(3));
        let bytes = serialize_command::<GetStreamFormat>(&reference).unwrap();
        assert_eq!(&bytes[..], &[0x00, 0x05, 0x00, 0x03]);

        let reply = deserialize_response::<GetStreamFormat>(
            AemCommandStatus::NotImplemented,
            &bytes,
            &CodecConfig::default(),
        )
        .unwrap();
        assert_eq!(reply, Reply::Reflected(reference));
        assert!(reply.full().is_none());
    }

    #[test]
    fn trailing_bytes_follow_the_config() {
        let mut bytes = serialize_command::<GetCounters>(&DescriptorRef::default())
            .unwrap()
            .to_vec();
        bytes.push(0);
        assert!(deserialize_command::<GetCounters>(&bytes, &CodecConfig::default()).is_ok());
        assert!(matches!(
            deserialize_command::<GetCounters>(&bytes, &CodecConfig::strict()),
            Err(ParsingError::LengthMismatch { declared: 4, actual: 5, .. })
        ));
    }

    #[test]
    fn pdu_helpers_check_command_type() {
        let pdu = command_pdu::<StartStreaming>(&DescriptorRef::default()).unwrap();
        assert_eq!(pdu.command_type, AemCommandType::StartStreaming);
        assert!(decode_command::<StartStreaming>(&pdu, &CodecConfig::default()).is_ok());
        assert!(matches!(
            decode_command::<StopStreaming>(&pdu, &CodecConfig::default()),
            Err(ParsingError::InvalidFieldValue { field: "command_type", .. })
        ));
    }

    #[test]
    fn counted_sections() {
        assert_eq!(section_count("path", 3).unwrap(), 3);
        assert!(matches!(
            section_count("path", usize::from(u16::MAX) + 1),
            Err(BuildingError::PayloadTooLarge { context: "path", .. })
        ));

        let bytes = [0x00, 0x01, 0x00, 0x02, 0x00];
        let mut des = Deserializer::new(&bytes);
        assert_eq!(read_counted::<u16>(&mut des, "words", 2).unwrap(), vec![1, 2]);
        assert!(matches!(
            read_counted::<u16>(&mut des, "words", 1),
            Err(ParsingError::VariableSectionOverflow { count: 1, element_size: 2, available: 1, .. })
        ));
        assert_eq!(des.remaining(), 1);
    }
}

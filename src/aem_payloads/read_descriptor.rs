//! READ_DESCRIPTOR (clause 7.4.5).
//!
//! Both directions start with configuration index, a reserved field,
//! descriptor type and descriptor index. The response then carries the
//! descriptor body, decoded only when the status is `Success`.

use serde::{Deserialize, Serialize};

use super::descriptors::{
    descriptor_length, deserialize_descriptor, minimum_descriptor_length, serialize_descriptor,
};
use super::{DescriptorRef, PayloadCodec, ReadDescriptor, Reply};
use crate::config::CodecConfig;
use crate::entity_model::{Descriptor, DescriptorType};
use crate::error::{BuildingError, ParsingError};
use crate::protocol::{AemCommandStatus, AemCommandType};
use crate::serialization::{Deserializer, Serializer};
use crate::types::{ConfigurationIndex, DescriptorIndex};

/// READ_DESCRIPTOR command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReadDescriptorCommandPayload {
    pub configuration_index: ConfigurationIndex,
    pub descriptor: DescriptorRef,
}

impl ReadDescriptorCommandPayload {
    pub fn new(
        configuration_index: ConfigurationIndex,
        descriptor_type: DescriptorType,
        descriptor_index: DescriptorIndex,
    ) -> Self {
        Self {
            configuration_index,
            descriptor: DescriptorRef::new(descriptor_type, descriptor_index),
        }
    }
}

impl PayloadCodec for ReadDescriptorCommandPayload {
    const MIN_LENGTH: usize = 8;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.configuration_index)?;
        ser.write(&0u16)?;
        self.descriptor.write(ser)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let configuration_index = des.read()?;
        des.skip(2)?;
        Ok(Self {
            configuration_index,
            descriptor: DescriptorRef::read(des)?,
        })
    }
}

/// READ_DESCRIPTOR response: the common header and, on success, the descriptor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReadDescriptorResponsePayload {
    pub configuration_index: ConfigurationIndex,
    pub descriptor_type: DescriptorType,
    pub descriptor_index: DescriptorIndex,
    /// `None` for failure statuses, which only reflect the header.
    pub descriptor: Option<Descriptor>,
}

impl ReadDescriptorResponsePayload {
    /// Successful response carrying `descriptor`.
    pub fn new(
        configuration_index: ConfigurationIndex,
        descriptor_index: DescriptorIndex,
        descriptor: Descriptor,
    ) -> Self {
        Self {
            configuration_index,
            descriptor_type: descriptor.descriptor_type(),
            descriptor_index,
            descriptor: Some(descriptor),
        }
    }

    /// Failure response reflecting the command header.
    pub fn header_only(command: &ReadDescriptorCommandPayload) -> Self {
        Self {
            configuration_index: command.configuration_index,
            descriptor_type: command.descriptor.descriptor_type,
            descriptor_index: command.descriptor.descriptor_index,
            descriptor: None,
        }
    }

    fn read_header(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let configuration_index = des.read()?;
        des.skip(2)?;
        Ok(Self {
            configuration_index,
            descriptor_type: des.read()?,
            descriptor_index: des.read()?,
            descriptor: None,
        })
    }
}

impl PayloadCodec for ReadDescriptorResponsePayload {
    const MIN_LENGTH: usize = 8;
    const FIXED: bool = false;

    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH + self.descriptor.as_ref().map_or(0, descriptor_length)
    }

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        if let Some(descriptor) = &self.descriptor
            && descriptor.descriptor_type() != self.descriptor_type
        {
            return Err(BuildingError::InvalidFieldValueForBuild {
                field: "descriptor_type",
                description: format!(
                    "header announces {:?} but carries a {:?} descriptor",
                    self.descriptor_type,
                    descriptor.descriptor_type()
                ),
            });
        }
        ser.write(&self.configuration_index)?;
        ser.write(&0u16)?;
        ser.write(&self.descriptor_type)?;
        ser.write(&self.descriptor_index)?;
        match &self.descriptor {
            Some(descriptor) => serialize_descriptor(descriptor, ser),
            None => Ok(()),
        }
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let mut payload = Self::read_header(des)?;
        if let Some(minimum) = minimum_descriptor_length(payload.descriptor_type)
            && des.remaining() < minimum
        {
            return Err(ParsingError::MalformedPayload {
                command: AemCommandType::ReadDescriptor,
                status: AemCommandStatus::Success,
                needed: Self::MIN_LENGTH + minimum,
                got: Self::MIN_LENGTH + des.remaining(),
            });
        }
        payload.descriptor = Some(deserialize_descriptor(payload.descriptor_type, des)?);
        Ok(payload)
    }

    fn read_response(
        des: &mut Deserializer<'_>,
        command: AemCommandType,
        status: AemCommandStatus,
    ) -> Result<Self, ParsingError> {
        if status == AemCommandStatus::Success {
            return Self::read(des);
        }
        log::trace!("{command:?} with status {status:?}: header only");
        Self::read_header(des)
    }
}

/// Decodes a READ_DESCRIPTOR response payload and dispatches its body on the
/// descriptor type.
///
/// # Errors
/// - [`ParsingError::MalformedPayload`] - Payload size inconsistent with `status`
/// - [`ParsingError::UnsupportedDescriptor`] - Successful response for a descriptor
///   type without decoder
/// - [`ParsingError::InvalidOffset`] - A section offset points into the static part
/// - [`ParsingError::VariableSectionOverflow`] - A section count overflows the payload
pub fn deserialize_read_descriptor_response(
    status: AemCommandStatus,
    payload: &[u8],
    config: &CodecConfig,
) -> Result<Reply<ReadDescriptorCommandPayload, ReadDescriptorResponsePayload>, ParsingError> {
    super::deserialize_response::<ReadDescriptor>(status, payload, config)
}

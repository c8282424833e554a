//! AECP common header shared by the AEM and Address Access flavors.

use serde::{Deserialize, Serialize};

use super::defines::AecpMessageType;
use crate::constants::{AECPDU_HEADER_LENGTH, AVTP_SUBTYPE_CODE_AECP};
use crate::error::{AtdeccError, BuildingError, ParsingError};
use crate::frame::{AvtpControlHeader, EthernetHeader, FrameHeader};
use crate::serialization::{Deserializer, Serializer};
use crate::types::SequenceId;
use crate::unique_identifier::UniqueIdentifier;

/// Addressing and sequencing common to every AECPDU.
///
/// The target entity ID occupies the stream ID slot of the control header and
/// the message type its control data field; the controller entity ID and
/// sequence ID open the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AecpHeader {
    pub ethernet: EthernetHeader,
    pub message_type: AecpMessageType,
    pub target_entity_id: UniqueIdentifier,
    pub controller_entity_id: UniqueIdentifier,
    pub sequence_id: SequenceId,
}

impl AecpHeader {
    /// Body bytes owned by the common header.
    pub const LENGTH: usize = AECPDU_HEADER_LENGTH;

    /// Header of a fresh PDU of `message_type`.
    pub fn new(message_type: AecpMessageType) -> Self {
        Self {
            message_type,
            ..Self::default()
        }
    }

    /// Control header carrying `status`.
    pub fn control_header(&self, status: u8, control_data_length: u16) -> AvtpControlHeader {
        AvtpControlHeader::new(
            AVTP_SUBTYPE_CODE_AECP,
            u8::from(self.message_type),
            status,
            control_data_length,
            self.target_entity_id,
        )
    }

    /// Writes the controller entity ID and sequence ID.
    ///
    /// # Errors
    /// - [`BuildingError::BufferTooSmall`] - Fewer than 10 bytes of room
    pub fn serialize(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.controller_entity_id)?;
        ser.write(&self.sequence_id)
    }

    /// Rebuilds the header from the frame layers and the first body bytes.
    ///
    /// # Errors
    /// - [`ParsingError::NotEnoughData`] - Fewer than 10 body bytes
    pub fn deserialize(header: &FrameHeader, des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        if des.remaining() < Self::LENGTH {
            return Err(ParsingError::NotEnoughData {
                needed: Self::LENGTH,
                got: des.remaining(),
                context: "AECPDU header",
            });
        }
        Ok(Self {
            ethernet: header.ethernet,
            message_type: AecpMessageType::from(header.control.control_data),
            target_entity_id: header.control.stream_id,
            controller_entity_id: des.read()?,
            sequence_id: des.read()?,
        })
    }

    /// Copy of this header stamped as the response to its command.
    ///
    /// # Errors
    /// - [`AtdeccError::InvalidState`] - The message type is not `expected`
    pub fn response_copy(&self, expected: AecpMessageType) -> Result<Self, AtdeccError> {
        if self.message_type != expected {
            return Err(AtdeccError::InvalidState {
                operation: "response_copy",
                description: format!(
                    "message type {:?} is not {:?}",
                    self.message_type, expected
                ),
            });
        }
        Ok(Self {
            message_type: self.message_type.to_response(),
            ..*self
        })
    }

    /// Checks that a decoded message type belongs to the expected flavor.
    pub(crate) fn expect_message_type(
        &self,
        structure: &'static str,
        command: AecpMessageType,
    ) -> Result<(), ParsingError> {
        if self.message_type != command && self.message_type != command.to_response() {
            return Err(ParsingError::InvalidFieldValue {
                field: "message_type",
                structure,
                expected: u64::from(u8::from(command)),
                got: u64::from(u8::from(self.message_type)),
            });
        }
        Ok(())
    }
}

//! AEM flavor of AECP: command type plus an opaque command-specific payload.
//!
//! The payload is decoded separately by [`crate::aem_payloads`], selected by
//! [`AemAecpdu::command_type`].

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::aecpdu::AecpHeader;
use super::defines::{AecpMessageType, AemCommandStatus, AemCommandType};
use crate::constants::{
    AEM_AECPDU_HEADER_LENGTH, AEM_COMMAND_TYPE_MASK, AEM_MAX_RECV_PAYLOAD_LENGTH,
    AEM_MAX_SEND_PAYLOAD_LENGTH, AEM_UNSOLICITED_MASK, AVTP_SUBTYPE_CODE_AECP,
};
use crate::error::{AtdeccError, BuildingError, ParsingError};
use crate::frame::{AvtpControlHeader, EthernetHeader, FrameHeader};
use crate::serialization::{Deserializer, Serializer};
use crate::traits::Pdu;

/// AEM AECPDU.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AemAecpdu {
    pub header: AecpHeader,
    pub status: AemCommandStatus,
    pub unsolicited: bool,
    pub command_type: AemCommandType,
    pub payload: Bytes,
}

impl AemAecpdu {
    /// Empty AEM_COMMAND of `command_type`.
    pub fn command(command_type: AemCommandType) -> Self {
        Self {
            header: AecpHeader::new(AecpMessageType::AemCommand),
            command_type,
            ..Self::default()
        }
    }

    /// Empty AEM_RESPONSE of `command_type`.
    pub fn response(command_type: AemCommandType) -> Self {
        Self {
            header: AecpHeader::new(AecpMessageType::AemResponse),
            command_type,
            ..Self::default()
        }
    }

    /// AEM_COMMAND of `command_type` addressed from `controller` to `target`,
    /// for tests and simulated exchanges.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn addressed_command(
        command_type: AemCommandType,
        target: crate::unique_identifier::UniqueIdentifier,
        controller: crate::unique_identifier::UniqueIdentifier,
        sequence_id: u16,
    ) -> Self {
        let mut pdu = Self::command(command_type);
        pdu.header.target_entity_id = target;
        pdu.header.controller_entity_id = controller;
        pdu.header.sequence_id = crate::types::SequenceId::new(sequence_id);
        pdu
    }

    /// Sets the payload.
    ///
    /// # Errors
    /// - [`BuildingError::PayloadTooLarge`] - Beyond the maximum send payload
    pub fn set_payload(&mut self, payload: impl Into<Bytes>) -> Result<(), BuildingError> {
        let payload = payload.into();
        if payload.len() > AEM_MAX_SEND_PAYLOAD_LENGTH {
            return Err(BuildingError::PayloadTooLarge {
                context: "AEM payload",
                length: payload.len(),
                maximum: AEM_MAX_SEND_PAYLOAD_LENGTH,
            });
        }
        self.payload = payload;
        Ok(())
    }

    /// Whether this is an AEM_COMMAND.
    #[inline]
    pub fn is_command(&self) -> bool {
        self.header.message_type == AecpMessageType::AemCommand
    }

    /// Copy of this command stamped as AEM_RESPONSE. The source is untouched.
    ///
    /// # Errors
    /// - [`AtdeccError::InvalidState`] - This PDU is not an AEM_COMMAND
    pub fn response_copy(&self) -> Result<Self, AtdeccError> {
        Ok(Self {
            header: self.header.response_copy(AecpMessageType::AemCommand)?,
            ..self.clone()
        })
    }
}

impl Pdu for AemAecpdu {
    const SUBTYPE: u8 = AVTP_SUBTYPE_CODE_AECP;
    const NAME: &'static str = "AEM AECPDU";
    const FIXED_BODY_LENGTH: Option<usize> = None;

    fn ethernet(&self) -> &EthernetHeader {
        &self.header.ethernet
    }

    fn control_header(&self, control_data_length: u16) -> AvtpControlHeader {
        self.header
            .control_header(u8::from(self.status), control_data_length)
    }

    fn body_length(&self) -> usize {
        AecpHeader::LENGTH + AEM_AECPDU_HEADER_LENGTH + self.payload.len()
    }

    fn serialize_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        if self.payload.len() > AEM_MAX_SEND_PAYLOAD_LENGTH {
            return Err(BuildingError::PayloadTooLarge {
                context: "AEM payload",
                length: self.payload.len(),
                maximum: AEM_MAX_SEND_PAYLOAD_LENGTH,
            });
        }
        let raw_command = u16::from(self.command_type);
        if raw_command > AEM_COMMAND_TYPE_MASK {
            return Err(BuildingError::InvalidFieldValueForBuild {
                field: "command_type",
                description: format!("{raw_command:#06X} does not fit in 15 bits"),
            });
        }
        let unsolicited = if self.unsolicited { AEM_UNSOLICITED_MASK } else { 0 };

        self.header.serialize(ser)?;
        ser.write(&(unsolicited | raw_command))?;
        ser.write_buffer(&self.payload)
    }

    fn deserialize_body(header: &FrameHeader, body: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let aecp = AecpHeader::deserialize(header, body)?;
        aecp.expect_message_type(Self::NAME, AecpMessageType::AemCommand)?;
        let u_ct: u16 = body.read()?;

        let mut length = body.remaining();
        if length > AEM_MAX_RECV_PAYLOAD_LENGTH {
            log::warn!(
                "AEM payload of {length} bytes exceeds {AEM_MAX_RECV_PAYLOAD_LENGTH}, clamping"
            );
            length = AEM_MAX_RECV_PAYLOAD_LENGTH;
        }
        let payload = body.read_bytes(length)?;

        Ok(Self {
            header: aecp,
            status: AemCommandStatus::from(header.control.status),
            unsolicited: u_ct & AEM_UNSOLICITED_MASK != 0,
            command_type: AemCommandType::from(u_ct & AEM_COMMAND_TYPE_MASK),
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CodecConfig;
    use crate::frame::FRAME_HEADER_LENGTH;
    use crate::unique_identifier::UniqueIdentifier;

    #[test]
    fn sub_header_packs_unsolicited_bit() {
        let mut pdu = AemAecpdu::response(AemCommandType::GetStreamInfo);
        pdu.unsolicited = true;
        pdu.header.target_entity_id = UniqueIdentifier::new(0x0011_2233_4455_6677);
        pdu.set_payload(vec![0u8; 4]).unwrap();

        let frame = pdu.encode().unwrap();
        assert_eq!(frame.len(), FRAME_HEADER_LENGTH + 10 + 2 + 4);
        // control data length = 10 + 2 + 4
        assert_eq!(&frame[16..18], &[0x00, 0x10]);
        let sub_header = &frame[FRAME_HEADER_LENGTH + 10..FRAME_HEADER_LENGTH + 12];
        assert_eq!(sub_header, &[0x80, 0x0F]);

        let decoded = <AemAecpdu as Pdu>::deserialize(&frame, &CodecConfig::default()).unwrap();
        assert_eq!(decoded, pdu);
    }

    #[test]
    fn response_copy_is_a_copy() {
        let mut command = AemAecpdu::command(AemCommandType::ReadDescriptor);
        command.set_payload(vec![1, 2, 3]).unwrap();
        let response = command.response_copy().unwrap();
        assert!(command.is_command());
        assert!(!response.is_command());
        assert_eq!(response.payload, command.payload);
        assert!(matches!(
            response.response_copy(),
            Err(AtdeccError::InvalidState { .. })
        ));
    }

    #[test]
    fn addressed_command_keeps_ids_through_the_wire() {
        let pdu = AemAecpdu::addressed_command(
            AemCommandType::GetName,
            UniqueIdentifier::new(0x0011_2233_4455_6677),
            UniqueIdentifier::new(0x001B_92FF_FE00_0001),
            0x0A0B,
        );
        let frame = pdu.encode().unwrap();
        assert_eq!(&frame[18..26], &[0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77]);
        assert_eq!(&frame[34..36], &[0x0A, 0x0B]);
        let decoded = <AemAecpdu as Pdu>::deserialize(&frame, &CodecConfig::strict()).unwrap();
        assert_eq!(decoded, pdu);
    }

    #[test]
    fn oversized_payload_is_refused() {
        let mut pdu = AemAecpdu::command(AemCommandType::SetControl);
        let result = pdu.set_payload(vec![0u8; AEM_MAX_SEND_PAYLOAD_LENGTH + 1]);
        assert!(matches!(result, Err(BuildingError::PayloadTooLarge { .. })));
        assert!(pdu.payload.is_empty());
    }

    #[test]
    fn padding_after_control_data_is_ignored() {
        let mut pdu = AemAecpdu::command(AemCommandType::GetConfiguration);
        pdu.status = AemCommandStatus::Success;
        let mut frame = pdu.encode().unwrap().to_vec();
        frame.resize(60, 0);
        let decoded = <AemAecpdu as Pdu>::deserialize(&frame, &CodecConfig::default()).unwrap();
        assert!(decoded.payload.is_empty());
    }

    #[test]
    fn address_access_frames_are_refused() {
        let mut pdu = AemAecpdu::command(AemCommandType::AcquireEntity);
        pdu.header.message_type = AecpMessageType::AddressAccessCommand;
        let frame = pdu.encode().unwrap();
        assert!(matches!(
            <AemAecpdu as Pdu>::deserialize(&frame, &CodecConfig::default()),
            Err(ParsingError::InvalidFieldValue { field: "message_type", .. })
        ));
    }
}

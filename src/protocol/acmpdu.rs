//! ATDECC Connection Management Protocol data unit.

use serde::{Deserialize, Serialize};

use super::defines::{AcmpMessageType, AcmpStatus};
use crate::constants::{ACMP_MULTICAST_MAC_ADDRESS, ACMPDU_LENGTH, AVTP_SUBTYPE_CODE_ACMP};
use crate::entity_model::ConnectionFlags;
use crate::error::{AtdeccError, BuildingError, ParsingError};
use crate::frame::{AvtpControlHeader, EthernetHeader, FrameHeader};
use crate::serialization::{Deserializer, Serializer};
use crate::traits::Pdu;
use crate::types::{MacAddress, SequenceId};
use crate::unique_identifier::UniqueIdentifier;

/// Destination of every ACMP message.
pub const ACMP_MULTICAST_ADDRESS: MacAddress = MacAddress::new(ACMP_MULTICAST_MAC_ADDRESS);

/// ACMPDU. The stream ID travels in the control header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acmpdu {
    pub ethernet: EthernetHeader,
    pub message_type: AcmpMessageType,
    pub status: AcmpStatus,
    pub stream_id: UniqueIdentifier,
    pub controller_entity_id: UniqueIdentifier,
    pub talker_entity_id: UniqueIdentifier,
    pub listener_entity_id: UniqueIdentifier,
    pub talker_unique_id: u16,
    pub listener_unique_id: u16,
    pub stream_dest_address: MacAddress,
    pub connection_count: u16,
    pub sequence_id: SequenceId,
    pub flags: ConnectionFlags,
    pub stream_vlan_id: u16,
}

impl Default for Acmpdu {
    fn default() -> Self {
        Self::with_message_type(AcmpMessageType::ConnectTxCommand)
    }
}

macro_rules! acmp_commands {
    ($($(#[$meta:meta])* $fn_name:ident => $variant:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $fn_name() -> Self {
                Self::with_message_type(AcmpMessageType::$variant)
            }
        )*
    };
}

impl Acmpdu {
    /// Zero-initialized ACMPDU stamped with `message_type`.
    pub fn with_message_type(message_type: AcmpMessageType) -> Self {
        Self {
            ethernet: EthernetHeader::new(ACMP_MULTICAST_ADDRESS, MacAddress::NULL),
            message_type,
            status: AcmpStatus::Success,
            stream_id: UniqueIdentifier::null(),
            controller_entity_id: UniqueIdentifier::null(),
            talker_entity_id: UniqueIdentifier::null(),
            listener_entity_id: UniqueIdentifier::null(),
            talker_unique_id: 0,
            listener_unique_id: 0,
            stream_dest_address: MacAddress::NULL,
            connection_count: 0,
            sequence_id: SequenceId::new(0),
            flags: ConnectionFlags::NONE,
            stream_vlan_id: 0,
        }
    }

    acmp_commands! {
        /// CONNECT_TX_COMMAND, controller to talker on behalf of a listener.
        connect_tx_command => ConnectTxCommand;
        disconnect_tx_command => DisconnectTxCommand;
        get_tx_state_command => GetTxStateCommand;
        /// CONNECT_RX_COMMAND, controller to listener.
        connect_rx_command => ConnectRxCommand;
        disconnect_rx_command => DisconnectRxCommand;
        get_rx_state_command => GetRxStateCommand;
        get_tx_connection_command => GetTxConnectionCommand;
    }

    /// Copy of this command stamped as the matching response.
    ///
    /// # Errors
    /// - [`AtdeccError::InvalidState`] - This PDU is already a response
    pub fn response_copy(&self) -> Result<Self, AtdeccError> {
        if !self.message_type.is_command() {
            return Err(AtdeccError::InvalidState {
                operation: "response_copy",
                description: format!("message type {:?} is not a command", self.message_type),
            });
        }
        Ok(Self {
            message_type: self.message_type.to_response(),
            ..self.clone()
        })
    }
}

impl Pdu for Acmpdu {
    const SUBTYPE: u8 = AVTP_SUBTYPE_CODE_ACMP;
    const NAME: &'static str = "ACMPDU";
    const FIXED_BODY_LENGTH: Option<usize> = Some(ACMPDU_LENGTH);

    fn ethernet(&self) -> &EthernetHeader {
        &self.ethernet
    }

    fn control_header(&self, control_data_length: u16) -> AvtpControlHeader {
        AvtpControlHeader::new(
            Self::SUBTYPE,
            u8::from(self.message_type),
            u8::from(self.status),
            control_data_length,
            self.stream_id,
        )
    }

    fn body_length(&self) -> usize {
        ACMPDU_LENGTH
    }

    fn serialize_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.controller_entity_id)?;
        ser.write(&self.talker_entity_id)?;
        ser.write(&self.listener_entity_id)?;
        ser.write(&self.talker_unique_id)?;
        ser.write(&self.listener_unique_id)?;
        ser.write(&self.stream_dest_address)?;
        ser.write(&self.connection_count)?;
        ser.write(&self.sequence_id)?;
        ser.write(&self.flags)?;
        ser.write(&self.stream_vlan_id)?;
        ser.write_zeros(2)
    }

    fn deserialize_body(header: &FrameHeader, body: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        if body.remaining() < ACMPDU_LENGTH {
            return Err(ParsingError::NotEnoughData {
                needed: ACMPDU_LENGTH,
                got: body.remaining(),
                context: Self::NAME,
            });
        }
        let pdu = Self {
            ethernet: header.ethernet,
            message_type: AcmpMessageType::from(header.control.control_data),
            status: AcmpStatus::from(header.control.status),
            stream_id: header.control.stream_id,
            controller_entity_id: body.read()?,
            talker_entity_id: body.read()?,
            listener_entity_id: body.read()?,
            talker_unique_id: body.read()?,
            listener_unique_id: body.read()?,
            stream_dest_address: body.read()?,
            connection_count: body.read()?,
            sequence_id: body.read()?,
            flags: body.read()?,
            stream_vlan_id: body.read()?,
        };
        body.skip(2)?;
        Ok(pdu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CodecConfig;
    use crate::frame::FRAME_HEADER_LENGTH;

    #[test]
    fn factories_stamp_message_types() {
        assert_eq!(Acmpdu::connect_tx_command().message_type, AcmpMessageType::ConnectTxCommand);
        assert_eq!(
            Acmpdu::get_tx_connection_command().message_type,
            AcmpMessageType::GetTxConnectionCommand
        );
        assert_eq!(Acmpdu::disconnect_rx_command().status, AcmpStatus::Success);
    }

    #[test]
    fn response_copy_flips_only_the_message_type() {
        let mut command = Acmpdu::connect_rx_command();
        command.sequence_id = SequenceId::new(7);
        command.listener_unique_id = 3;
        let response = command.response_copy().unwrap();
        assert_eq!(response.message_type, AcmpMessageType::ConnectRxResponse);
        assert_eq!(response.sequence_id, command.sequence_id);
        assert_eq!(command.message_type, AcmpMessageType::ConnectRxCommand);

        assert!(matches!(
            response.response_copy(),
            Err(AtdeccError::InvalidState { operation: "response_copy", .. })
        ));
    }

    #[test]
    fn body_layout_and_round_trip() {
        let mut pdu = Acmpdu::connect_tx_command();
        pdu.stream_id = UniqueIdentifier::new(0x0011_2233_4455_0000);
        pdu.talker_entity_id = UniqueIdentifier::new(0x0011_2233_4455_6677);
        pdu.stream_dest_address = MacAddress::new([0x91, 0xE0, 0xF0, 0x00, 0xAB, 0x01]);
        pdu.flags = ConnectionFlags::from_bits(0x0002);
        pdu.stream_vlan_id = 2;
        pdu.status = AcmpStatus::NotSupported;

        let frame = pdu.encode().unwrap();
        assert_eq!(frame.len(), FRAME_HEADER_LENGTH + ACMPDU_LENGTH);
        // status 31 << 11 | 44
        assert_eq!(&frame[16..18], &[0xF8, 0x2C]);
        let body = &frame[FRAME_HEADER_LENGTH..];
        assert_eq!(&body[28..34], &[0x91, 0xE0, 0xF0, 0x00, 0xAB, 0x01]);

        let decoded = <Acmpdu as Pdu>::deserialize(&frame, &CodecConfig::default()).unwrap();
        assert_eq!(decoded, pdu);
    }
}

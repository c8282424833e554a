//! ATDECC Discovery Protocol data unit.
//!
//! One-way announcements: there is no command/response pairing. The message
//! type rides in the control data field, the valid time in the status field and
//! the entity ID in the stream ID slot of the control header.

use serde::{Deserialize, Serialize};

use super::defines::AdpMessageType;
use crate::constants::{
    ADP_DEFAULT_VALID_TIME, ADP_GPTP_DOMAIN_NUMBER_MASK, ADP_GPTP_DOMAIN_NUMBER_SHIFT,
    ADP_MAX_VALID_TIME, ADP_MULTICAST_MAC_ADDRESS, ADPDU_LENGTH, AVTP_SUBTYPE_CODE_ADP,
};
use crate::entity_model::{
    ControllerCapabilities, EntityCapabilities, ListenerCapabilities, TalkerCapabilities,
};
use crate::error::{BuildingError, ParsingError};
use crate::frame::{AvtpControlHeader, EthernetHeader, FrameHeader};
use crate::serialization::{Deserializer, Serializer};
use crate::traits::Pdu;
use crate::types::{AvailableIndex, DescriptorIndex, MacAddress};
use crate::unique_identifier::UniqueIdentifier;

/// Destination of every ADP message.
pub const ADP_MULTICAST_ADDRESS: MacAddress = MacAddress::new(ADP_MULTICAST_MAC_ADDRESS);

/// ADPDU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adpdu {
    pub ethernet: EthernetHeader,
    pub message_type: AdpMessageType,
    /// Advertisement validity in 2-second units (5 bits).
    pub valid_time: u8,
    pub entity_id: UniqueIdentifier,
    pub entity_model_id: UniqueIdentifier,
    pub entity_capabilities: EntityCapabilities,
    pub talker_stream_sources: u16,
    pub talker_capabilities: TalkerCapabilities,
    pub listener_stream_sinks: u16,
    pub listener_capabilities: ListenerCapabilities,
    pub controller_capabilities: ControllerCapabilities,
    pub available_index: AvailableIndex,
    pub gptp_grandmaster_id: UniqueIdentifier,
    pub gptp_domain_number: u8,
    pub identify_control_index: DescriptorIndex,
    pub interface_index: DescriptorIndex,
    pub association_id: UniqueIdentifier,
}

impl Default for Adpdu {
    fn default() -> Self {
        Self {
            ethernet: EthernetHeader::new(ADP_MULTICAST_ADDRESS, MacAddress::NULL),
            message_type: AdpMessageType::EntityAvailable,
            valid_time: ADP_DEFAULT_VALID_TIME,
            entity_id: UniqueIdentifier::null(),
            entity_model_id: UniqueIdentifier::null(),
            entity_capabilities: EntityCapabilities::NONE,
            talker_stream_sources: 0,
            talker_capabilities: TalkerCapabilities::NONE,
            listener_stream_sinks: 0,
            listener_capabilities: ListenerCapabilities::NONE,
            controller_capabilities: ControllerCapabilities::NONE,
            available_index: AvailableIndex::new(0),
            gptp_grandmaster_id: UniqueIdentifier::null(),
            gptp_domain_number: 0,
            identify_control_index: DescriptorIndex::new(0),
            interface_index: DescriptorIndex::new(0),
            association_id: UniqueIdentifier::null(),
        }
    }
}

impl Adpdu {
    /// ADPDU of `message_type` sent from `source` by `entity_id`.
    pub fn new(message_type: AdpMessageType, source: MacAddress, entity_id: UniqueIdentifier) -> Self {
        Self {
            ethernet: EthernetHeader::new(ADP_MULTICAST_ADDRESS, source),
            message_type,
            entity_id,
            ..Self::default()
        }
    }

    /// ENTITY_DISCOVER for `entity_id`, or for every entity when null.
    pub fn entity_discover(source: MacAddress, entity_id: UniqueIdentifier) -> Self {
        Self::new(AdpMessageType::EntityDiscover, source, entity_id)
    }

    /// Advances the available index after an advertised field changed.
    pub fn increment_available_index(&mut self) {
        self.available_index = self.available_index.next();
    }
}

impl Pdu for Adpdu {
    const SUBTYPE: u8 = AVTP_SUBTYPE_CODE_ADP;
    const NAME: &'static str = "ADPDU";
    const FIXED_BODY_LENGTH: Option<usize> = Some(ADPDU_LENGTH);

    fn ethernet(&self) -> &EthernetHeader {
        &self.ethernet
    }

    fn control_header(&self, control_data_length: u16) -> AvtpControlHeader {
        AvtpControlHeader::new(
            Self::SUBTYPE,
            u8::from(self.message_type),
            self.valid_time,
            control_data_length,
            self.entity_id,
        )
    }

    fn body_length(&self) -> usize {
        ADPDU_LENGTH
    }

    fn serialize_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        if self.valid_time > ADP_MAX_VALID_TIME {
            return Err(BuildingError::InvalidFieldValueForBuild {
                field: "valid_time",
                description: format!("{} exceeds {}", self.valid_time, ADP_MAX_VALID_TIME),
            });
        }
        let domain_word = (u32::from(self.gptp_domain_number) & ADP_GPTP_DOMAIN_NUMBER_MASK)
            << ADP_GPTP_DOMAIN_NUMBER_SHIFT;

        ser.write(&self.entity_model_id)?;
        ser.write(&self.entity_capabilities)?;
        ser.write(&self.talker_stream_sources)?;
        ser.write(&self.talker_capabilities)?;
        ser.write(&self.listener_stream_sinks)?;
        ser.write(&self.listener_capabilities)?;
        ser.write(&self.controller_capabilities)?;
        ser.write(&self.available_index)?;
        ser.write(&self.gptp_grandmaster_id)?;
        ser.write(&domain_word)?;
        ser.write(&self.identify_control_index)?;
        ser.write(&self.interface_index)?;
        ser.write(&self.association_id)?;
        ser.write_zeros(4)
    }

    fn deserialize_body(header: &FrameHeader, body: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        if body.remaining() < ADPDU_LENGTH {
            return Err(ParsingError::NotEnoughData {
                needed: ADPDU_LENGTH,
                got: body.remaining(),
                context: Self::NAME,
            });
        }
        let entity_model_id = body.read()?;
        let entity_capabilities = body.read()?;
        let talker_stream_sources = body.read()?;
        let talker_capabilities = body.read()?;
        let listener_stream_sinks = body.read()?;
        let listener_capabilities = body.read()?;
        let controller_capabilities = body.read()?;
        let available_index = body.read()?;
        let gptp_grandmaster_id = body.read()?;
        let domain_word: u32 = body.read()?;
        let identify_control_index = body.read()?;
        let interface_index = body.read()?;
        let association_id = body.read()?;
        body.skip(4)?;

        Ok(Self {
            ethernet: header.ethernet,
            message_type: AdpMessageType::from(header.control.control_data),
            valid_time: header.control.status,
            entity_id: header.control.stream_id,
            entity_model_id,
            entity_capabilities,
            talker_stream_sources,
            talker_capabilities,
            listener_stream_sinks,
            listener_capabilities,
            controller_capabilities,
            available_index,
            gptp_grandmaster_id,
            gptp_domain_number: ((domain_word >> ADP_GPTP_DOMAIN_NUMBER_SHIFT)
                & ADP_GPTP_DOMAIN_NUMBER_MASK) as u8,
            identify_control_index,
            interface_index,
            association_id,
        })
    }
}

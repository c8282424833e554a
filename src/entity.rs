//! Local ATDECC entity: advertised information and ADP announcements.
//!
//! An entity advertises the same common information on every AVB interface,
//! and per-interface information (MAC address, valid time, available index,
//! gPTP state) on each of them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{ADP_DEFAULT_VALID_TIME, ADP_MAX_VALID_TIME, ADP_MIN_VALID_TIME};
use crate::entity_model::{
    ControllerCapabilities, EntityCapabilities, ListenerCapabilities, TalkerCapabilities,
};
use crate::error::AtdeccError;
use crate::protocol::{AdpMessageType, Adpdu};
use crate::types::{AvailableIndex, DescriptorIndex, MacAddress};
use crate::unique_identifier::UniqueIdentifier;

/// Information shared by every interface of the entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommonInformation {
    pub entity_id: UniqueIdentifier,
    pub entity_model_id: UniqueIdentifier,
    pub entity_capabilities: EntityCapabilities,
    pub talker_stream_sources: u16,
    pub talker_capabilities: TalkerCapabilities,
    pub listener_stream_sinks: u16,
    pub listener_capabilities: ListenerCapabilities,
    pub controller_capabilities: ControllerCapabilities,
    pub identify_control_index: Option<DescriptorIndex>,
    pub association_id: Option<UniqueIdentifier>,
}

/// Information advertised on one AVB interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceInformation {
    pub mac_address: MacAddress,
    /// Advertisement validity in 2-second units.
    pub valid_time: u8,
    pub available_index: AvailableIndex,
    pub gptp_grandmaster_id: Option<UniqueIdentifier>,
    pub gptp_domain_number: Option<u8>,
}

impl InterfaceInformation {
    pub fn new(mac_address: MacAddress) -> Self {
        Self {
            mac_address,
            valid_time: ADP_DEFAULT_VALID_TIME,
            available_index: AvailableIndex::new(0),
            gptp_grandmaster_id: None,
            gptp_domain_number: None,
        }
    }
}

/// Clamps an ADP valid time to the 5-bit range the status field accepts.
pub fn clamp_valid_time(valid_time: u8) -> u8 {
    valid_time.clamp(ADP_MIN_VALID_TIME, ADP_MAX_VALID_TIME)
}

/// Local entity and its interfaces, keyed by AVB interface index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    common: CommonInformation,
    interfaces: BTreeMap<DescriptorIndex, InterfaceInformation>,
}

impl Entity {
    /// Creates an entity. Valid times are clamped.
    ///
    /// # Errors
    /// - [`AtdeccError::InvalidState`] - No interface, or a null entity ID
    pub fn new(
        common: CommonInformation,
        interfaces: BTreeMap<DescriptorIndex, InterfaceInformation>,
    ) -> Result<Self, AtdeccError> {
        if interfaces.is_empty() {
            return Err(AtdeccError::InvalidState {
                operation: "Entity::new",
                description: "an entity needs at least one interface".to_string(),
            });
        }
        if !common.entity_id.is_valid() {
            return Err(AtdeccError::InvalidState {
                operation: "Entity::new",
                description: "null entity ID".to_string(),
            });
        }
        let mut entity = Self { common, interfaces };
        for interface in entity.interfaces.values_mut() {
            interface.valid_time = clamp_valid_time(interface.valid_time);
        }
        Ok(entity)
    }

    /// Single-interface entity on AVB interface 0.
    ///
    /// # Errors
    /// Same as [`Entity::new`].
    pub fn with_interface(
        common: CommonInformation,
        interface: InterfaceInformation,
    ) -> Result<Self, AtdeccError> {
        Self::new(common, BTreeMap::from([(DescriptorIndex::new(0), interface)]))
    }

    pub fn common_information(&self) -> &CommonInformation {
        &self.common
    }

    pub fn common_information_mut(&mut self) -> &mut CommonInformation {
        &mut self.common
    }

    pub fn entity_id(&self) -> UniqueIdentifier {
        self.common.entity_id
    }

    pub fn interfaces(&self) -> &BTreeMap<DescriptorIndex, InterfaceInformation> {
        &self.interfaces
    }

    /// Information of interface `index`.
    ///
    /// # Errors
    /// - [`AtdeccError::InvalidState`] - Unknown interface
    pub fn interface(&self, index: DescriptorIndex) -> Result<&InterfaceInformation, AtdeccError> {
        self.interfaces.get(&index).ok_or_else(|| unknown_interface(index))
    }

    /// Mutable information of interface `index`.
    ///
    /// # Errors
    /// - [`AtdeccError::InvalidState`] - Unknown interface
    pub fn interface_mut(
        &mut self,
        index: DescriptorIndex,
    ) -> Result<&mut InterfaceInformation, AtdeccError> {
        self.interfaces
            .get_mut(&index)
            .ok_or_else(|| unknown_interface(index))
    }

    pub fn set_entity_capabilities(&mut self, capabilities: EntityCapabilities) {
        self.common.entity_capabilities = capabilities;
    }

    pub fn set_association_id(&mut self, association_id: Option<UniqueIdentifier>) {
        self.common.association_id = association_id;
    }

    /// Sets the valid time, clamped to 1..=31, of interface `index` or of every
    /// interface when `None`.
    ///
    /// # Errors
    /// - [`AtdeccError::InvalidState`] - Unknown interface
    pub fn set_valid_time(
        &mut self,
        valid_time: u8,
        index: Option<DescriptorIndex>,
    ) -> Result<(), AtdeccError> {
        let valid_time = clamp_valid_time(valid_time);
        match index {
            Some(index) => self.interface_mut(index)?.valid_time = valid_time,
            None => self
                .interfaces
                .values_mut()
                .for_each(|interface| interface.valid_time = valid_time),
        }
        Ok(())
    }

    /// # Errors
    /// - [`AtdeccError::InvalidState`] - Unknown interface
    pub fn set_gptp_grandmaster_id(
        &mut self,
        grandmaster_id: UniqueIdentifier,
        index: DescriptorIndex,
    ) -> Result<(), AtdeccError> {
        self.interface_mut(index)?.gptp_grandmaster_id = Some(grandmaster_id);
        Ok(())
    }

    /// # Errors
    /// - [`AtdeccError::InvalidState`] - Unknown interface
    pub fn set_gptp_domain_number(
        &mut self,
        domain_number: u8,
        index: DescriptorIndex,
    ) -> Result<(), AtdeccError> {
        self.interface_mut(index)?.gptp_domain_number = Some(domain_number);
        Ok(())
    }

    /// Advances the available index of every interface. Call after any
    /// advertised field changed.
    pub fn increment_available_index(&mut self) {
        for interface in self.interfaces.values_mut() {
            interface.available_index = interface.available_index.next();
        }
    }

    /// Capabilities as advertised: the validity bits of the optional fields
    /// follow their presence.
    pub fn advertised_capabilities(&self, index: DescriptorIndex) -> EntityCapabilities {
        let mut capabilities = self.common.entity_capabilities;
        let interface = self.interfaces.get(&index);
        let gptp = interface.is_some_and(|i| i.gptp_grandmaster_id.is_some());
        for (flag, present) in [
            (
                EntityCapabilities::AEM_IDENTIFY_CONTROL_INDEX_VALID,
                self.common.identify_control_index.is_some(),
            ),
            (
                EntityCapabilities::ASSOCIATION_ID_VALID,
                self.common.association_id.is_some(),
            ),
            (EntityCapabilities::GPTP_SUPPORTED, gptp),
        ] {
            capabilities = if present {
                capabilities | flag
            } else {
                EntityCapabilities::from_bits(capabilities.bits() & !flag.bits())
            };
        }
        capabilities
    }

    fn adpdu(
        &self,
        message_type: AdpMessageType,
        index: DescriptorIndex,
    ) -> Result<Adpdu, AtdeccError> {
        let interface = self.interface(index)?;
        let common = &self.common;
        Ok(Adpdu {
            valid_time: interface.valid_time,
            entity_model_id: common.entity_model_id,
            entity_capabilities: self.advertised_capabilities(index),
            talker_stream_sources: common.talker_stream_sources,
            talker_capabilities: common.talker_capabilities,
            listener_stream_sinks: common.listener_stream_sinks,
            listener_capabilities: common.listener_capabilities,
            controller_capabilities: common.controller_capabilities,
            available_index: interface.available_index,
            gptp_grandmaster_id: interface
                .gptp_grandmaster_id
                .unwrap_or(UniqueIdentifier::null()),
            gptp_domain_number: interface.gptp_domain_number.unwrap_or(0),
            identify_control_index: common
                .identify_control_index
                .unwrap_or(DescriptorIndex::new(0)),
            interface_index: index,
            association_id: common.association_id.unwrap_or(UniqueIdentifier::null()),
            ..Adpdu::new(message_type, interface.mac_address, common.entity_id)
        })
    }

    /// ENTITY_AVAILABLE advertisement for interface `index`.
    ///
    /// # Errors
    /// - [`AtdeccError::InvalidState`] - Unknown interface
    pub fn entity_available(&self, index: DescriptorIndex) -> Result<Adpdu, AtdeccError> {
        self.adpdu(AdpMessageType::EntityAvailable, index)
    }

    /// ENTITY_DEPARTING announcement for interface `index`.
    ///
    /// # Errors
    /// - [`AtdeccError::InvalidState`] - Unknown interface
    pub fn entity_departing(&self, index: DescriptorIndex) -> Result<Adpdu, AtdeccError> {
        self.adpdu(AdpMessageType::EntityDeparting, index)
    }

    /// One ADPDU of `message_type` per interface, in interface order.
    ///
    /// # Errors
    /// Propagates [`Entity::entity_available`] errors.
    pub fn announcements(&self, message_type: AdpMessageType) -> Result<Vec<Adpdu>, AtdeccError> {
        self.interfaces
            .keys()
            .map(|&index| self.adpdu(message_type, index))
            .collect()
    }
}

fn unknown_interface(index: DescriptorIndex) -> AtdeccError {
    AtdeccError::InvalidState {
        operation: "entity interface lookup",
        description: format!("no AVB interface {index}"),
    }
}

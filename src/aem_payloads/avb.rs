//! GET_AVB_INFO, GET_AS_PATH and GET_COUNTERS (clauses 7.4.40 to 7.4.42).

use serde::{Deserialize, Serialize};

use super::{DescriptorRef, PayloadCodec, read_counted, section_count};
use crate::constants::COUNTERS_COUNT;
use crate::entity_model::{AvbInfoFlags, DescriptorCounters, MsrpMapping};
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer, WireValue};
use crate::types::DescriptorIndex;
use crate::unique_identifier::UniqueIdentifier;

/// gPTP and MSRP state of an AVB interface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvbInfo {
    pub gptp_grandmaster_id: UniqueIdentifier,
    pub propagation_delay: u32,
    pub gptp_domain_number: u8,
    pub flags: AvbInfoFlags,
    pub mappings: Vec<MsrpMapping>,
}

/// GET_AVB_INFO response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvbInfoPayload {
    pub descriptor: DescriptorRef,
    pub info: AvbInfo,
}

impl PayloadCodec for AvbInfoPayload {
    const MIN_LENGTH: usize = 20;
    const FIXED: bool = false;

    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH + self.info.mappings.len() * MsrpMapping::WIRE_SIZE
    }

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        let info = &self.info;
        let count = section_count("MSRP mappings", info.mappings.len())?;
        self.descriptor.write(ser)?;
        ser.write(&info.gptp_grandmaster_id)?;
        ser.write(&info.propagation_delay)?;
        ser.write(&info.gptp_domain_number)?;
        ser.write(&info.flags)?;
        ser.write(&count)?;
        info.mappings.iter().try_for_each(|mapping| ser.write(mapping))
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let descriptor = DescriptorRef::read(des)?;
        let gptp_grandmaster_id = des.read()?;
        let propagation_delay = des.read()?;
        let gptp_domain_number = des.read()?;
        let flags = des.read()?;
        let count = usize::from(des.read::<u16>()?);
        let mappings = read_counted(des, "MSRP mappings", count)?;
        Ok(Self {
            descriptor,
            info: AvbInfo {
                gptp_grandmaster_id,
                propagation_delay,
                gptp_domain_number,
                flags,
                mappings,
            },
        })
    }
}

/// GET_AS_PATH command: AVB interface index and a reserved field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AsPathCommandPayload {
    pub avb_interface_index: DescriptorIndex,
}

impl PayloadCodec for AsPathCommandPayload {
    const MIN_LENGTH: usize = 4;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.avb_interface_index)?;
        ser.write(&0u16)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let avb_interface_index = des.read()?;
        des.skip(2)?;
        Ok(Self {
            avb_interface_index,
        })
    }
}

/// GET_AS_PATH response: gPTP path trace from the grandmaster.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AsPathPayload {
    pub avb_interface_index: DescriptorIndex,
    pub path: Vec<UniqueIdentifier>,
}

impl PayloadCodec for AsPathPayload {
    const MIN_LENGTH: usize = 4;
    const FIXED: bool = false;

    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH + self.path.len() * UniqueIdentifier::WIRE_SIZE
    }

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        let count = section_count("AS path", self.path.len())?;
        ser.write(&self.avb_interface_index)?;
        ser.write(&count)?;
        self.path.iter().try_for_each(|id| ser.write(id))
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let avb_interface_index = des.read()?;
        let count = usize::from(des.read::<u16>()?);
        let path = read_counted(des, "AS path", count)?;
        Ok(Self {
            avb_interface_index,
            path,
        })
    }
}

/// GET_COUNTERS response: 32 counters and the mask of those that are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountersPayload {
    pub descriptor: DescriptorRef,
    /// Bit `n` set when `counters[n]` is meaningful for this descriptor type.
    pub valid_counters: u32,
    pub counters: DescriptorCounters,
}

impl CountersPayload {
    /// Counter `index` when its validity bit is set.
    pub fn counter(&self, index: usize) -> Option<u32> {
        if index < COUNTERS_COUNT && self.valid_counters & (1 << index) != 0 {
            Some(self.counters[index])
        } else {
            None
        }
    }
}

impl PayloadCodec for CountersPayload {
    const MIN_LENGTH: usize = 4 + 4 + COUNTERS_COUNT * 4;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        self.descriptor.write(ser)?;
        ser.write(&self.valid_counters)?;
        self.counters.iter().try_for_each(|counter| ser.write(counter))
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let descriptor = DescriptorRef::read(des)?;
        let valid_counters = des.read()?;
        let mut counters = [0u32; COUNTERS_COUNT];
        for counter in &mut counters {
            *counter = des.read()?;
        }
        Ok(Self {
            descriptor,
            valid_counters,
            counters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aem_payloads::{self, GetAsPath, GetAvbInfo, GetCounters, Reply};
    use crate::config::CodecConfig;
    use crate::entity_model::{AvbInterfaceCounterValidFlags, DescriptorType};
    use crate::protocol::AemCommandStatus;

    fn avb_interface() -> DescriptorRef {
        DescriptorRef::new(DescriptorType::AvbInterface, DescriptorIndex::new(0))
    }

    #[test]
    fn avb_info_with_mappings() {
        let payload = AvbInfoPayload {
            descriptor: avb_interface(),
            info: AvbInfo {
                gptp_grandmaster_id: UniqueIdentifier::new(0x0011_22FF_FE33_4455),
                propagation_delay: 412,
                gptp_domain_number: 0,
                flags: AvbInfoFlags::AS_CAPABLE | AvbInfoFlags::GPTP_ENABLED,
                mappings: vec![
                    MsrpMapping {
                        traffic_class: 6,
                        priority: 3,
                        vlan_id: 2,
                    },
                    MsrpMapping {
                        traffic_class: 5,
                        priority: 2,
                        vlan_id: 2,
                    },
                ],
            },
        };
        let bytes = aem_payloads::serialize_response::<GetAvbInfo>(&payload).unwrap();
        assert_eq!(bytes.len(), 28);
        assert_eq!(&bytes[16..20], &[0x00, 0x03, 0x00, 0x02]);
        let reply = aem_payloads::deserialize_response::<GetAvbInfo>(
            AemCommandStatus::Success,
            &bytes,
            &CodecConfig::default(),
        )
        .unwrap();
        assert_eq!(reply, Reply::Full(payload));
    }

    #[test]
    fn avb_info_count_beyond_payload() {
        let payload = AvbInfoPayload {
            descriptor: avb_interface(),
            info: AvbInfo::default(),
        };
        let mut bytes = aem_payloads::serialize_response::<GetAvbInfo>(&payload)
            .unwrap()
            .to_vec();
        bytes[19] = 1;
        assert!(matches!(
            aem_payloads::deserialize_response::<GetAvbInfo>(
                AemCommandStatus::Success,
                &bytes,
                &CodecConfig::default(),
            ),
            Err(ParsingError::VariableSectionOverflow { count: 1, available: 0, .. })
        ));
    }

    #[test]
    fn as_path_sequence() {
        let payload = AsPathPayload {
            avb_interface_index: DescriptorIndex::new(1),
            path: vec![UniqueIdentifier::new(1), UniqueIdentifier::new(2)],
        };
        let bytes = aem_payloads::serialize_response::<GetAsPath>(&payload).unwrap();
        assert_eq!(&bytes[..4], &[0, 1, 0, 2]);
        assert_eq!(bytes.len(), 20);
        let decoded = aem_payloads::deserialize_response::<GetAsPath>(
            AemCommandStatus::Success,
            &bytes,
            &CodecConfig::default(),
        )
        .unwrap()
        .full();
        assert_eq!(decoded, Some(payload));
    }

    #[test]
    fn counters_validity_mask() {
        let mut payload = CountersPayload {
            descriptor: avb_interface(),
            valid_counters: AvbInterfaceCounterValidFlags::LINK_UP.bits()
                | AvbInterfaceCounterValidFlags::LINK_DOWN.bits(),
            ..CountersPayload::default()
        };
        payload.counters[0] = 4;
        payload.counters[1] = 3;
        payload.counters[5] = 99;

        let bytes = aem_payloads::serialize_response::<GetCounters>(&payload).unwrap();
        assert_eq!(bytes.len(), 136);
        let decoded = aem_payloads::deserialize_response::<GetCounters>(
            AemCommandStatus::Success,
            &bytes,
            &CodecConfig::default(),
        )
        .unwrap()
        .full()
        .unwrap();
        assert_eq!(decoded.counter(0), Some(4));
        assert_eq!(decoded.counter(5), None);
        assert_eq!(decoded.counter(COUNTERS_COUNT), None);
        assert_eq!(decoded, payload);
    }
}

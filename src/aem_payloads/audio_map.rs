//! GET_AUDIO_MAP and ADD/REMOVE_AUDIO_MAPPINGS (clauses 7.4.44 to 7.4.46).
//!
//! ADD and REMOVE share one layout in both directions, [`AudioMappingsPayload`].

use serde::{Deserialize, Serialize};

use super::sizes::MAX_ADD_REMOVE_AUDIO_MAPPINGS;
use super::{DescriptorRef, PayloadCodec, read_counted, section_count};
use crate::entity_model::AudioMapping;
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer, WireValue};

/// GET_AUDIO_MAP command: stream port and map page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetAudioMapCommandPayload {
    pub descriptor: DescriptorRef,
    pub map_index: u16,
}

impl PayloadCodec for GetAudioMapCommandPayload {
    const MIN_LENGTH: usize = 8;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        self.descriptor.write(ser)?;
        ser.write(&self.map_index)?;
        ser.write(&0u16)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let descriptor = DescriptorRef::read(des)?;
        let map_index = des.read()?;
        des.skip(2)?;
        Ok(Self {
            descriptor,
            map_index,
        })
    }
}

/// GET_AUDIO_MAP response: one page of the dynamic mappings of a stream port.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioMapPayload {
    pub descriptor: DescriptorRef,
    pub map_index: u16,
    pub number_of_maps: u16,
    pub mappings: Vec<AudioMapping>,
}

impl PayloadCodec for AudioMapPayload {
    const MIN_LENGTH: usize = 12;
    const FIXED: bool = false;

    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH + self.mappings.len() * AudioMapping::WIRE_SIZE
    }

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        let count = section_count("audio map", self.mappings.len())?;
        self.descriptor.write(ser)?;
        ser.write(&self.map_index)?;
        ser.write(&self.number_of_maps)?;
        ser.write(&count)?;
        ser.write(&0u16)?;
        self.mappings.iter().try_for_each(|mapping| ser.write(mapping))
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let descriptor = DescriptorRef::read(des)?;
        let map_index = des.read()?;
        let number_of_maps = des.read()?;
        let count = usize::from(des.read::<u16>()?);
        des.skip(2)?;
        Ok(Self {
            descriptor,
            map_index,
            number_of_maps,
            mappings: read_counted(des, "audio mappings", count)?,
        })
    }
}

/// ADD_AUDIO_MAPPINGS and REMOVE_AUDIO_MAPPINGS command and response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioMappingsPayload {
    pub descriptor: DescriptorRef,
    pub mappings: Vec<AudioMapping>,
}

impl PayloadCodec for AudioMappingsPayload {
    const MIN_LENGTH: usize = 8;
    const FIXED: bool = false;

    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH + self.mappings.len() * AudioMapping::WIRE_SIZE
    }

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        if self.mappings.len() > MAX_ADD_REMOVE_AUDIO_MAPPINGS {
            return Err(BuildingError::PayloadTooLarge {
                context: "audio mappings",
                length: self.mappings.len(),
                maximum: MAX_ADD_REMOVE_AUDIO_MAPPINGS,
            });
        }
        let count = section_count("audio mappings", self.mappings.len())?;
        self.descriptor.write(ser)?;
        ser.write(&count)?;
        ser.write(&0u16)?;
        self.mappings.iter().try_for_each(|mapping| ser.write(mapping))
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let descriptor = DescriptorRef::read(des)?;
        let count = usize::from(des.read::<u16>()?);
        des.skip(2)?;
        Ok(Self {
            descriptor,
            mappings: read_counted(des, "audio mappings", count)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aem_payloads::{self, GetAudioMap, RemoveAudioMappings, Reply};
    use crate::config::CodecConfig;
    use crate::entity_model::DescriptorType;
    use crate::protocol::AemCommandStatus;
    use crate::types::DescriptorIndex;

    fn mapping(channel: u16) -> AudioMapping {
        AudioMapping {
            stream_index: DescriptorIndex::new(0),
            stream_channel: channel,
            cluster_offset: DescriptorIndex::new(channel),
            cluster_channel: 0,
        }
    }

    fn stream_port() -> DescriptorRef {
        DescriptorRef::new(DescriptorType::StreamPortInput, DescriptorIndex::new(0))
    }

    #[test]
    fn audio_map_page() {
        let payload = AudioMapPayload {
            descriptor: stream_port(),
            map_index: 0,
            number_of_maps: 1,
            mappings: vec![mapping(0), mapping(1)],
        };
        let bytes = aem_payloads::serialize_response::<GetAudioMap>(&payload).unwrap();
        assert_eq!(bytes.len(), 28);
        assert_eq!(&bytes[4..12], &[0, 0, 0, 1, 0, 2, 0, 0]);
        let reply = aem_payloads::deserialize_response::<GetAudioMap>(
            AemCommandStatus::Success,
            &bytes,
            &CodecConfig::default(),
        )
        .unwrap();
        assert_eq!(reply, Reply::Full(payload));
    }

    #[test]
    fn mapping_count_beyond_payload() {
        let payload = AudioMappingsPayload {
            descriptor: stream_port(),
            mappings: vec![mapping(0)],
        };
        let mut bytes = aem_payloads::serialize_command::<RemoveAudioMappings>(&payload)
            .unwrap()
            .to_vec();
        bytes[5] = 2;
        assert!(matches!(
            aem_payloads::deserialize_command::<RemoveAudioMappings>(
                &bytes,
                &CodecConfig::default()
            ),
            Err(ParsingError::VariableSectionOverflow { count: 2, available: 8, .. })
        ));
    }

    #[test]
    fn too_many_mappings_are_refused() {
        let payload = AudioMappingsPayload {
            descriptor: stream_port(),
            mappings: vec![mapping(0); MAX_ADD_REMOVE_AUDIO_MAPPINGS + 1],
        };
        assert!(matches!(
            aem_payloads::serialize_command::<RemoveAudioMappings>(&payload),
            Err(BuildingError::PayloadTooLarge { .. })
        ));
    }
}

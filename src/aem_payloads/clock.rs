//! SET/GET_SAMPLING_RATE and SET/GET_CLOCK_SOURCE (clauses 7.4.21 to 7.4.24).

use serde::{Deserialize, Serialize};

use super::{DescriptorRef, PayloadCodec};
use crate::entity_model::SamplingRate;
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer};
use crate::types::DescriptorIndex;

/// Target audio unit (or video/sensor cluster) and its sampling rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SamplingRatePayload {
    pub descriptor: DescriptorRef,
    pub sampling_rate: SamplingRate,
}

impl PayloadCodec for SamplingRatePayload {
    const MIN_LENGTH: usize = 8;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        self.descriptor.write(ser)?;
        ser.write(&self.sampling_rate)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            descriptor: DescriptorRef::read(des)?,
            sampling_rate: des.read()?,
        })
    }
}

/// Target clock domain and its clock source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockSourcePayload {
    pub descriptor: DescriptorRef,
    pub clock_source_index: DescriptorIndex,
}

impl PayloadCodec for ClockSourcePayload {
    const MIN_LENGTH: usize = 8;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        self.descriptor.write(ser)?;
        ser.write(&self.clock_source_index)?;
        ser.write(&0u16)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let descriptor = DescriptorRef::read(des)?;
        let clock_source_index = des.read()?;
        des.skip(2)?;
        Ok(Self {
            descriptor,
            clock_source_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aem_payloads::{self, GetSamplingRate, SetClockSource};
    use crate::config::CodecConfig;
    use crate::entity_model::DescriptorType;
    use crate::protocol::AemCommandStatus;

    #[test]
    fn sampling_rate_layout() {
        let payload = SamplingRatePayload {
            descriptor: DescriptorRef::new(DescriptorType::AudioUnit, DescriptorIndex::new(0)),
            sampling_rate: SamplingRate::from_pull_base_frequency(1, 48_000),
        };
        let bytes = aem_payloads::serialize_response::<GetSamplingRate>(&payload).unwrap();
        assert_eq!(&bytes[..], &[0x00, 0x02, 0, 0, 0x20, 0x00, 0xBB, 0x80]);
        let decoded = aem_payloads::deserialize_response::<GetSamplingRate>(
            AemCommandStatus::Success,
            &bytes,
            &CodecConfig::default(),
        )
        .unwrap()
        .full()
        .unwrap();
        assert_eq!(decoded.sampling_rate.pull(), 1);
        assert_eq!(decoded, payload);
    }

    #[test]
    fn clock_source_reserved_field() {
        let payload = ClockSourcePayload {
            descriptor: DescriptorRef::new(DescriptorType::ClockDomain, DescriptorIndex::new(0)),
            clock_source_index: DescriptorIndex::new(2),
        };
        let bytes = aem_payloads::serialize_command::<SetClockSource>(&payload).unwrap();
        assert_eq!(&bytes[..], &[0x00, 0x24, 0, 0, 0, 2, 0, 0]);
        assert_eq!(
            aem_payloads::deserialize_command::<SetClockSource>(&bytes, &CodecConfig::default())
                .unwrap(),
            payload
        );
    }
}

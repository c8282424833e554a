//! SET_CONTROL and GET_CONTROL (clauses 7.4.25 and 7.4.26).
//!
//! The payload only carries current values; their kind and count come from the
//! CONTROL descriptor. Values stay as raw bytes until the caller supplies both
//! through [`ControlPayload::decode_values`].

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::{DescriptorRef, PayloadCodec};
use crate::entity_model::{ControlValueKind, ControlValues};
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer};

/// Target control and its packed current values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControlPayload {
    pub descriptor: DescriptorRef,
    pub values: Bytes,
}

impl ControlPayload {
    /// Packs the current values of `values`.
    ///
    /// # Errors
    /// - [`BuildingError::BufferTooSmall`] - Inconsistent value lengths
    pub fn new(descriptor: DescriptorRef, values: &ControlValues) -> Result<Self, BuildingError> {
        let mut ser = Serializer::new(values.dynamic_length());
        values.serialize_dynamic(&mut ser)?;
        Ok(Self {
            descriptor,
            values: ser.freeze(),
        })
    }

    /// Unpacks the values, given the value kind and count of the CONTROL descriptor.
    ///
    /// # Errors
    /// - [`ParsingError::VariableSectionOverflow`] - Fewer values than `count`
    /// - [`ParsingError::NotEnoughData`] - Truncated value
    pub fn decode_values(
        &self,
        kind: ControlValueKind,
        count: u16,
    ) -> Result<ControlValues, ParsingError> {
        let mut des = Deserializer::new(&self.values);
        let values = ControlValues::deserialize_dynamic(&mut des, kind, count)?;
        if des.remaining() > 0 {
            log::debug!("{kind:?} control values: {} unexpected trailing bytes", des.remaining());
        }
        Ok(values)
    }
}

impl PayloadCodec for ControlPayload {
    const MIN_LENGTH: usize = 4;
    const FIXED: bool = false;

    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH + self.values.len()
    }

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        self.descriptor.write(ser)?;
        ser.write_buffer(&self.values)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let descriptor = DescriptorRef::read(des)?;
        let values = des.read_bytes(des.remaining())?;
        Ok(Self { descriptor, values })
    }
}

//! Address Access TLVs.
//!
//! A TLV names a memory operation: a 4-bit mode, a 12-bit data length, a 64-bit
//! address and the data itself. Construction never fails; a zero or oversized
//! length produces an invalid TLV with an empty payload.

use serde::{Deserialize, Serialize};

use super::defines::AaMode;
use crate::constants::{
    AA_MAX_TLV_LENGTH, AA_MAX_WIRE_TLV_LENGTH, AA_TLV_HEADER_LENGTH, AA_TLV_LENGTH_MASK,
    AA_TLV_MODE_SHIFT,
};
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer};

/// One Address Access operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tlv {
    mode: AaMode,
    address: u64,
    memory_data: Vec<u8>,
}

fn length_is_valid(length: usize) -> bool {
    if length == 0 {
        log::debug!("TLV length cannot be zero");
        return false;
    }
    if length > AA_MAX_TLV_LENGTH {
        log::debug!("TLV length {length} exceeds {AA_MAX_TLV_LENGTH}");
        return false;
    }
    true
}

impl Tlv {
    /// READ request for `length` bytes at `address`, zero-filled.
    pub fn read(address: u64, length: usize) -> Self {
        Self::with_length(AaMode::Read, address, length)
    }

    /// TLV of `mode` with a zero-filled payload of `length` bytes.
    pub fn with_length(mode: AaMode, address: u64, length: usize) -> Self {
        let memory_data = if length_is_valid(length) {
            vec![0; length]
        } else {
            Vec::new()
        };
        Self {
            mode,
            address,
            memory_data,
        }
    }

    /// WRITE or EXECUTE TLV carrying `data`.
    pub fn with_data(address: u64, mode: AaMode, data: impl Into<Vec<u8>>) -> Self {
        let mut memory_data = data.into();
        if !length_is_valid(memory_data.len()) {
            memory_data.clear();
        }
        Self {
            mode,
            address,
            memory_data,
        }
    }

    #[inline]
    pub fn mode(&self) -> AaMode {
        self.mode
    }

    #[inline]
    pub fn address(&self) -> u64 {
        self.address
    }

    #[inline]
    pub fn memory_data(&self) -> &[u8] {
        &self.memory_data
    }

    #[inline]
    pub fn memory_data_mut(&mut self) -> &mut [u8] {
        &mut self.memory_data
    }

    /// Payload length.
    #[inline]
    pub fn len(&self) -> usize {
        self.memory_data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.memory_data.is_empty()
    }

    /// Whether the TLV carries a payload.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.memory_data.is_empty()
    }

    /// Header plus payload length on the wire.
    #[inline]
    pub fn wire_length(&self) -> usize {
        AA_TLV_HEADER_LENGTH + self.memory_data.len()
    }

    /// Writes the TLV.
    ///
    /// # Errors
    /// - [`BuildingError::InvalidFieldValueForBuild`] - The TLV is invalid
    /// - [`BuildingError::PayloadTooLarge`] - Length does not fit in 12 bits
    /// - [`BuildingError::BufferTooSmall`] - No room for the TLV
    pub fn serialize(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        if !self.is_valid() {
            return Err(BuildingError::InvalidFieldValueForBuild {
                field: "memory_data",
                description: "TLV has no payload".to_string(),
            });
        }
        let length = u16::try_from(self.len())
            .ok()
            .filter(|length| *length <= AA_TLV_LENGTH_MASK)
            .ok_or(BuildingError::PayloadTooLarge {
                context: "TLV",
                length: self.len(),
                maximum: AA_MAX_WIRE_TLV_LENGTH,
            })?;
        if ser.remaining() < self.wire_length() {
            return Err(BuildingError::BufferTooSmall {
                needed: self.wire_length(),
                available: ser.remaining(),
                context: "TLV",
            });
        }
        let mode_length = (u16::from(u8::from(self.mode)) << AA_TLV_MODE_SHIFT) | length;
        ser.write(&mode_length)?;
        ser.write(&self.address)?;
        ser.write_buffer(&self.memory_data)
    }

    /// Reads one TLV.
    ///
    /// # Errors
    /// - [`ParsingError::NotEnoughData`] - Header or payload truncated
    /// - [`ParsingError::InvalidFieldValue`] - Zero length
    pub fn deserialize(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        if des.remaining() < AA_TLV_HEADER_LENGTH {
            return Err(ParsingError::NotEnoughData {
                needed: AA_TLV_HEADER_LENGTH,
                got: des.remaining(),
                context: "TLV header",
            });
        }
        let mut probe = *des;
        let mode_length: u16 = probe.read()?;
        let address: u64 = probe.read()?;
        let mode = AaMode::from((mode_length >> AA_TLV_MODE_SHIFT) as u8);
        let length = usize::from(mode_length & AA_TLV_LENGTH_MASK);
        if length == 0 {
            return Err(ParsingError::InvalidFieldValue {
                field: "tlv_length",
                structure: "TLV",
                expected: 1,
                got: 0,
            });
        }
        if probe.remaining() < length {
            return Err(ParsingError::NotEnoughData {
                needed: length,
                got: probe.remaining(),
                context: "TLV memory data",
            });
        }
        let memory_data = probe.read_slice(length)?.to_vec();
        *des = probe;
        Ok(Self {
            mode,
            address,
            memory_data,
        })
    }
}

//! Ethernet II header carried by every ATDECC frame.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::constants::{AVTP_ETHER_TYPE, ETHERNET_HEADER_LENGTH};
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer};
use crate::types::MacAddress;

/// Destination MAC, source MAC and EtherType, in wire order with no padding.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EthernetHeader {
    #[serde_as(as = "DisplayFromStr")]
    pub destination: MacAddress,
    #[serde_as(as = "DisplayFromStr")]
    pub source: MacAddress,
    pub ether_type: u16,
}

impl Default for EthernetHeader {
    fn default() -> Self {
        Self {
            destination: MacAddress::NULL,
            source: MacAddress::NULL,
            ether_type: AVTP_ETHER_TYPE,
        }
    }
}

impl EthernetHeader {
    /// Header length on the wire.
    pub const LENGTH: usize = ETHERNET_HEADER_LENGTH;

    /// Creates an AVTP header between two stations.
    pub fn new(destination: MacAddress, source: MacAddress) -> Self {
        Self {
            destination,
            source,
            ether_type: AVTP_ETHER_TYPE,
        }
    }

    /// Writes the header.
    ///
    /// # Errors
    /// - [`BuildingError::BufferTooSmall`] - Fewer than 14 bytes of room
    pub fn serialize(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.destination)?;
        ser.write(&self.source)?;
        ser.write(&self.ether_type)
    }

    /// Reads the header and checks the EtherType.
    ///
    /// # Errors
    /// - [`ParsingError::NotEnoughData`] - Fewer than 14 bytes available
    /// - [`ParsingError::InvalidFieldValue`] - EtherType is not AVTP
    pub fn deserialize(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        if des.remaining() < Self::LENGTH {
            return Err(ParsingError::NotEnoughData {
                needed: Self::LENGTH,
                got: des.remaining(),
                context: "Ethernet header",
            });
        }
        let destination = des.read()?;
        let source = des.read()?;
        let ether_type: u16 = des.read()?;
        if ether_type != AVTP_ETHER_TYPE {
            return Err(ParsingError::InvalidFieldValue {
                field: "ether_type",
                structure: "EthernetHeader",
                expected: u64::from(AVTP_ETHER_TYPE),
                got: u64::from(ether_type),
            });
        }
        Ok(Self {
            destination,
            source,
            ether_type,
        })
    }
}

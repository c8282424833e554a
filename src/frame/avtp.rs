//! AVTP common and control headers.
//!
//! ```text
//!  0                   1                   2                   3
//! +-+-------------+-+-----+-------+---------+---------------------+
//! |1|   subtype   |s| ver |  cd   |  status |  control_data_length|
//! +-+-------------+-+-----+-------+---------+---------------------+
//! |                    stream_id / entity_id (64)                 |
//! +---------------------------------------------------------------+
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{
    AVTP_CD_MASK, AVTP_CONTROL_DATA_LENGTH_MASK, AVTP_CONTROL_DATA_MASK,
    AVTP_CONTROL_HEADER_LENGTH, AVTP_STATUS_MASK, AVTP_STATUS_SHIFT, AVTP_SUBTYPE_MASK,
    AVTP_SV_SHIFT, AVTP_VERSION, AVTP_VERSION_MASK, AVTP_VERSION_SHIFT,
};
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer};
use crate::unique_identifier::UniqueIdentifier;

/// First AVTP byte: control/data flag and 7-bit subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AvtpCommonHeader {
    /// Set for control PDUs.
    pub control: bool,
    /// 7-bit subtype code.
    pub subtype: u8,
}

impl AvtpCommonHeader {
    /// Control header for `subtype`.
    pub const fn control(subtype: u8) -> Self {
        Self {
            control: true,
            subtype: subtype & AVTP_SUBTYPE_MASK,
        }
    }

    /// Packs the header byte.
    pub const fn to_byte(self) -> u8 {
        let cd = if self.control { AVTP_CD_MASK } else { 0 };
        cd | (self.subtype & AVTP_SUBTYPE_MASK)
    }

    /// Unpacks the header byte.
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            control: byte & AVTP_CD_MASK != 0,
            subtype: byte & AVTP_SUBTYPE_MASK,
        }
    }

    /// Reads the common byte without consuming it.
    ///
    /// # Errors
    /// - [`ParsingError::NotEnoughData`] - The buffer is empty
    pub fn peek(des: &Deserializer<'_>) -> Result<Self, ParsingError> {
        let mut probe = *des;
        probe.read::<u8>().map(Self::from_byte)
    }
}

/// The 12-byte AVTP control header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AvtpControlHeader {
    pub common: AvtpCommonHeader,
    pub stream_valid: bool,
    pub version: u8,
    /// 4-bit protocol-specific field, the message type for ATDECC.
    pub control_data: u8,
    /// 5-bit status.
    pub status: u8,
    /// 11-bit length of everything after this header.
    pub control_data_length: u16,
    /// Stream ID, or entity ID for ATDECC.
    pub stream_id: UniqueIdentifier,
}

impl AvtpControlHeader {
    /// Header length on the wire.
    pub const LENGTH: usize = AVTP_CONTROL_HEADER_LENGTH;

    /// Control header of an ATDECC PDU.
    pub fn new(
        subtype: u8,
        control_data: u8,
        status: u8,
        control_data_length: u16,
        stream_id: UniqueIdentifier,
    ) -> Self {
        Self {
            common: AvtpCommonHeader::control(subtype),
            stream_valid: false,
            version: AVTP_VERSION,
            control_data,
            status,
            control_data_length,
            stream_id,
        }
    }

    /// Writes the header.
    ///
    /// # Errors
    /// - [`BuildingError::InvalidFieldValueForBuild`] - A sub-field exceeds its bit width
    /// - [`BuildingError::PayloadTooLarge`] - Control data length exceeds 11 bits
    /// - [`BuildingError::BufferTooSmall`] - Fewer than 12 bytes of room
    pub fn serialize(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        if self.version > AVTP_VERSION_MASK {
            return Err(BuildingError::InvalidFieldValueForBuild {
                field: "version",
                description: format!("{} does not fit in 3 bits", self.version),
            });
        }
        if self.control_data > AVTP_CONTROL_DATA_MASK {
            return Err(BuildingError::InvalidFieldValueForBuild {
                field: "control_data",
                description: format!("{} does not fit in 4 bits", self.control_data),
            });
        }
        if u16::from(self.status) > AVTP_STATUS_MASK {
            return Err(BuildingError::InvalidFieldValueForBuild {
                field: "status",
                description: format!("{} does not fit in 5 bits", self.status),
            });
        }
        if self.control_data_length > AVTP_CONTROL_DATA_LENGTH_MASK {
            return Err(BuildingError::PayloadTooLarge {
                context: "AVTP control data",
                length: usize::from(self.control_data_length),
                maximum: usize::from(AVTP_CONTROL_DATA_LENGTH_MASK),
            });
        }

        let sv_version_cd = (u8::from(self.stream_valid) << AVTP_SV_SHIFT)
            | (self.version << AVTP_VERSION_SHIFT)
            | self.control_data;
        let status_length =
            (u16::from(self.status) << AVTP_STATUS_SHIFT) | self.control_data_length;

        ser.write(&self.common.to_byte())?;
        ser.write(&sv_version_cd)?;
        ser.write(&status_length)?;
        ser.write(&self.stream_id)
    }

    /// Reads the header.
    ///
    /// # Errors
    /// - [`ParsingError::NotEnoughData`] - Fewer than 12 bytes available
    /// - [`ParsingError::InvalidFieldValue`] - The cd bit marks a data PDU
    pub fn deserialize(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        if des.remaining() < Self::LENGTH {
            return Err(ParsingError::NotEnoughData {
                needed: Self::LENGTH,
                got: des.remaining(),
                context: "AVTP control header",
            });
        }
        let common = AvtpCommonHeader::from_byte(des.read()?);
        if !common.control {
            return Err(ParsingError::InvalidFieldValue {
                field: "cd",
                structure: "AvtpControlHeader",
                expected: 1,
                got: 0,
            });
        }
        let sv_version_cd: u8 = des.read()?;
        let status_length: u16 = des.read()?;
        let stream_id = des.read()?;

        Ok(Self {
            common,
            stream_valid: sv_version_cd >> AVTP_SV_SHIFT != 0,
            version: (sv_version_cd >> AVTP_VERSION_SHIFT) & AVTP_VERSION_MASK,
            control_data: sv_version_cd & AVTP_CONTROL_DATA_MASK,
            status: ((status_length >> AVTP_STATUS_SHIFT) & AVTP_STATUS_MASK) as u8,
            control_data_length: status_length & AVTP_CONTROL_DATA_LENGTH_MASK,
            stream_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AVTP_SUBTYPE_ADP, AVTP_SUBTYPE_CODE_ADP, AVTP_SUBTYPE_CODE_AECP};

    #[test]
    fn common_byte_packing() {
        let header = AvtpCommonHeader::control(AVTP_SUBTYPE_CODE_ADP);
        assert_eq!(header.to_byte(), AVTP_SUBTYPE_ADP);
        assert_eq!(AvtpCommonHeader::from_byte(0xFB).subtype, AVTP_SUBTYPE_CODE_AECP);
        assert!(!AvtpCommonHeader::from_byte(0x7B).control);
    }

    #[test]
    fn control_header_bit_layout() {
        let header = AvtpControlHeader::new(
            AVTP_SUBTYPE_CODE_ADP,
            0x2,
            31,
            56,
            UniqueIdentifier::new(0x0011_2233_4455_6677),
        );
        let mut ser = Serializer::new(AvtpControlHeader::LENGTH);
        header.serialize(&mut ser).unwrap();
        // status 31 in the top 5 bits, length 56 in the low 11
        assert_eq!(
            ser.data(),
            &[0xFA, 0x02, 0xF8, 0x38, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77]
        );

        let decoded = AvtpControlHeader::deserialize(&mut Deserializer::new(ser.data())).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn oversized_fields_are_rejected() {
        let mut header = AvtpControlHeader::new(AVTP_SUBTYPE_CODE_ADP, 0, 32, 0, UniqueIdentifier::null());
        let mut ser = Serializer::new(AvtpControlHeader::LENGTH);
        assert!(matches!(
            header.serialize(&mut ser),
            Err(BuildingError::InvalidFieldValueForBuild { field: "status", .. })
        ));

        header.status = 0;
        header.control_data_length = 0x0800;
        assert!(matches!(
            header.serialize(&mut ser),
            Err(BuildingError::PayloadTooLarge { .. })
        ));
        assert_eq!(ser.used_bytes(), 0);
    }

    #[test]
    fn data_pdus_are_rejected() {
        let bytes = [0x7A, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert!(matches!(
            AvtpControlHeader::deserialize(&mut Deserializer::new(&bytes)),
            Err(ParsingError::InvalidFieldValue { field: "cd", .. })
        ));
    }
}

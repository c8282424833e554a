//! Address Access flavor of AECP: an ordered list of memory TLVs.

use serde::{Deserialize, Serialize};

use super::aecpdu::AecpHeader;
use super::defines::{AaStatus, AecpMessageType};
use super::tlv::Tlv;
use crate::constants::{
    AA_AECPDU_HEADER_LENGTH, AA_MAX_LEGACY_PAYLOAD_LENGTH, AA_TLV_HEADER_LENGTH, AVTP_SUBTYPE_CODE_AECP,
};
use crate::error::{AtdeccError, BuildingError, ParsingError};
use crate::frame::{AvtpControlHeader, EthernetHeader, FrameHeader};
use crate::serialization::{Deserializer, Serializer};
use crate::traits::Pdu;

/// Address Access AECPDU.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AaAecpdu {
    pub header: AecpHeader,
    pub status: AaStatus,
    tlvs: Vec<Tlv>,
}

impl AaAecpdu {
    /// Empty ADDRESS_ACCESS_COMMAND.
    pub fn command() -> Self {
        Self {
            header: AecpHeader::new(AecpMessageType::AddressAccessCommand),
            ..Self::default()
        }
    }

    /// Empty ADDRESS_ACCESS_RESPONSE.
    pub fn response() -> Self {
        Self {
            header: AecpHeader::new(AecpMessageType::AddressAccessResponse),
            ..Self::default()
        }
    }

    /// Appends a TLV.
    ///
    /// # Errors
    /// - [`BuildingError::InvalidFieldValueForBuild`] - The TLV is invalid
    /// - [`BuildingError::PayloadTooLarge`] - The TLV list would exceed the AA payload maximum
    pub fn add_tlv(&mut self, tlv: Tlv) -> Result<(), BuildingError> {
        if !tlv.is_valid() {
            return Err(BuildingError::InvalidFieldValueForBuild {
                field: "tlv",
                description: "TLV has no payload".to_string(),
            });
        }
        let length = self.tlv_data_length() + tlv.wire_length();
        if length > AA_MAX_LEGACY_PAYLOAD_LENGTH {
            return Err(BuildingError::PayloadTooLarge {
                context: "AA TLV data",
                length,
                maximum: AA_MAX_LEGACY_PAYLOAD_LENGTH,
            });
        }
        self.tlvs.push(tlv);
        Ok(())
    }

    /// TLVs in insertion order.
    #[inline]
    pub fn tlvs(&self) -> &[Tlv] {
        &self.tlvs
    }

    /// Mutable access to TLV payloads, used to fill read responses.
    #[inline]
    pub fn tlvs_mut(&mut self) -> &mut [Tlv] {
        &mut self.tlvs
    }

    /// Total TLV bytes on the wire.
    pub fn tlv_data_length(&self) -> usize {
        self.tlvs.iter().map(Tlv::wire_length).sum()
    }

    /// Copy of this command stamped as ADDRESS_ACCESS_RESPONSE.
    ///
    /// # Errors
    /// - [`AtdeccError::InvalidState`] - This PDU is not an ADDRESS_ACCESS_COMMAND
    pub fn response_copy(&self) -> Result<Self, AtdeccError> {
        Ok(Self {
            header: self
                .header
                .response_copy(AecpMessageType::AddressAccessCommand)?,
            ..self.clone()
        })
    }
}

impl Pdu for AaAecpdu {
    const SUBTYPE: u8 = AVTP_SUBTYPE_CODE_AECP;
    const NAME: &'static str = "AA AECPDU";
    const FIXED_BODY_LENGTH: Option<usize> = None;

    fn ethernet(&self) -> &EthernetHeader {
        &self.header.ethernet
    }

    fn control_header(&self, control_data_length: u16) -> AvtpControlHeader {
        self.header
            .control_header(u8::from(self.status), control_data_length)
    }

    fn body_length(&self) -> usize {
        AecpHeader::LENGTH + AA_AECPDU_HEADER_LENGTH + self.tlv_data_length()
    }

    fn serialize_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        let count = u16::try_from(self.tlvs.len()).map_err(|_| BuildingError::PayloadTooLarge {
            context: "AA TLV count",
            length: self.tlvs.len(),
            maximum: usize::from(u16::MAX),
        })?;
        self.header.serialize(ser)?;
        ser.write(&count)?;
        for tlv in &self.tlvs {
            tlv.serialize(ser)?;
        }
        Ok(())
    }

    fn deserialize_body(header: &FrameHeader, body: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let aecp = AecpHeader::deserialize(header, body)?;
        aecp.expect_message_type(Self::NAME, AecpMessageType::AddressAccessCommand)?;
        let count: u16 = body.read()?;

        let mut tlvs = Vec::with_capacity(usize::from(count).min(body.remaining() / AA_TLV_HEADER_LENGTH));
        for _ in 0..count {
            tlvs.push(Tlv::deserialize(body)?);
        }
        if body.remaining() > 0 {
            log::debug!("{}: {} bytes after the last TLV", Self::NAME, body.remaining());
        }

        Ok(Self {
            header: aecp,
            status: AaStatus::from(header.control.status),
            tlvs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CodecConfig;
    use crate::protocol::AaMode;

    #[test]
    fn tlvs_keep_insertion_order() {
        let mut pdu = AaAecpdu::command();
        pdu.add_tlv(Tlv::with_data(0x20, AaMode::Write, vec![9, 9])).unwrap();
        pdu.add_tlv(Tlv::read(0x10, 2)).unwrap();
        let frame = pdu.encode().unwrap();
        let decoded = <AaAecpdu as Pdu>::deserialize(&frame, &CodecConfig::default()).unwrap();
        assert_eq!(decoded.tlvs()[0].address(), 0x20);
        assert_eq!(decoded.tlvs()[1].mode(), AaMode::Read);
        assert_eq!(decoded, pdu);
    }

    #[test]
    fn invalid_or_oversized_tlvs_are_refused() {
        let mut pdu = AaAecpdu::command();
        assert!(pdu.add_tlv(Tlv::read(0, 0)).is_err());
        assert!(matches!(
            pdu.add_tlv(Tlv::read(0, AA_MAX_LEGACY_PAYLOAD_LENGTH)),
            Err(BuildingError::PayloadTooLarge { .. })
        ));
        assert!(pdu.tlvs().is_empty());
    }

    #[test]
    fn count_beyond_data_is_rejected() {
        let mut pdu = AaAecpdu::command();
        pdu.add_tlv(Tlv::read(0, 4)).unwrap();
        let mut frame = pdu.encode().unwrap().to_vec();
        // tlv_count sits after the 26 frame bytes and the 10-byte AECP header
        frame[37] = 2;
        assert!(matches!(
            <AaAecpdu as Pdu>::deserialize(&frame, &CodecConfig::default()),
            Err(ParsingError::NotEnoughData { .. })
        ));
    }

    #[test]
    fn response_copy_requires_command() {
        let response = AaAecpdu::command().response_copy().unwrap();
        assert_eq!(response.header.message_type, AecpMessageType::AddressAccessResponse);
        assert!(response.response_copy().is_err());
    }
}

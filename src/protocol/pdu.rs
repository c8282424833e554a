//! Frame-level dispatch over every supported PDU kind.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::aa_aecpdu::AaAecpdu;
use super::acmpdu::Acmpdu;
use super::adpdu::Adpdu;
use super::aem_aecpdu::AemAecpdu;
use super::defines::AecpMessageType;
use crate::config::CodecConfig;
use crate::constants::{
    AVTP_SUBTYPE_CODE_ACMP, AVTP_SUBTYPE_CODE_ADP, AVTP_SUBTYPE_CODE_AECP,
};
use crate::error::{BuildingError, ParsingError};
use crate::frame::deserialize_frame_header;
use crate::serialization::Deserializer;
use crate::traits::Pdu;

/// Any ATDECC PDU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Atdeccpdu {
    Adp(Adpdu),
    Acmp(Acmpdu),
    Aem(AemAecpdu),
    Aa(AaAecpdu),
}

impl Atdeccpdu {
    /// 7-bit AVTP subtype of the contained PDU.
    pub fn subtype(&self) -> u8 {
        match self {
            Atdeccpdu::Adp(_) => Adpdu::SUBTYPE,
            Atdeccpdu::Acmp(_) => Acmpdu::SUBTYPE,
            Atdeccpdu::Aem(_) => AemAecpdu::SUBTYPE,
            Atdeccpdu::Aa(_) => AaAecpdu::SUBTYPE,
        }
    }
}

impl From<Adpdu> for Atdeccpdu {
    fn from(pdu: Adpdu) -> Self {
        Atdeccpdu::Adp(pdu)
    }
}

impl From<Acmpdu> for Atdeccpdu {
    fn from(pdu: Acmpdu) -> Self {
        Atdeccpdu::Acmp(pdu)
    }
}

impl From<AemAecpdu> for Atdeccpdu {
    fn from(pdu: AemAecpdu) -> Self {
        Atdeccpdu::Aem(pdu)
    }
}

impl From<AaAecpdu> for Atdeccpdu {
    fn from(pdu: AaAecpdu) -> Self {
        Atdeccpdu::Aa(pdu)
    }
}

/// Decodes a received Ethernet frame into the matching PDU.
///
/// The AVTP subtype selects ADP, ACMP or AECP; for AECP the message type then
/// selects the AEM or Address Access flavor.
///
/// # Errors
/// - [`ParsingError::InvalidFieldValue`] - Unknown subtype or AECP flavor
/// - [`ParsingError`] - Any frame layer or body error
pub fn decode_frame(bytes: &[u8], config: &CodecConfig) -> Result<Atdeccpdu, ParsingError> {
    let mut des = Deserializer::new(bytes);
    let header = deserialize_frame_header(&mut des)?;
    let body = des.remaining_slice();
    let subtype = header.control.common.subtype;
    log::trace!(
        "decoding frame: subtype {subtype:#04X}, {} body bytes",
        body.len()
    );

    match subtype {
        AVTP_SUBTYPE_CODE_ADP => Adpdu::deserialize_with_header(&header, body, config).map(Atdeccpdu::Adp),
        AVTP_SUBTYPE_CODE_ACMP => {
            Acmpdu::deserialize_with_header(&header, body, config).map(Atdeccpdu::Acmp)
        }
        AVTP_SUBTYPE_CODE_AECP => {
            match AecpMessageType::from(header.control.control_data) {
                AecpMessageType::AemCommand | AecpMessageType::AemResponse => {
                    AemAecpdu::deserialize_with_header(&header, body, config).map(Atdeccpdu::Aem)
                }
                AecpMessageType::AddressAccessCommand | AecpMessageType::AddressAccessResponse => {
                    AaAecpdu::deserialize_with_header(&header, body, config).map(Atdeccpdu::Aa)
                }
                other => Err(ParsingError::InvalidFieldValue {
                    field: "message_type",
                    structure: "AECPDU",
                    expected: u64::from(u8::from(AecpMessageType::AemCommand)),
                    got: u64::from(u8::from(other)),
                }),
            }
        }
        other => Err(ParsingError::InvalidFieldValue {
            field: "subtype",
            structure: "AvtpCommonHeader",
            expected: u64::from(AVTP_SUBTYPE_CODE_AECP),
            got: u64::from(other),
        }),
    }
}

/// Encodes a PDU into a complete Ethernet frame.
///
/// # Errors
/// Propagates [`Pdu::encode`] errors.
pub fn encode_frame(pdu: &Atdeccpdu) -> Result<Bytes, BuildingError> {
    match pdu {
        Atdeccpdu::Adp(pdu) => pdu.encode(),
        Atdeccpdu::Acmp(pdu) => pdu.encode(),
        Atdeccpdu::Aem(pdu) => pdu.encode(),
        Atdeccpdu::Aa(pdu) => pdu.encode(),
    }
}

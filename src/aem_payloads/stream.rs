//! SET/GET_STREAM_FORMAT and SET/GET_STREAM_INFO (clauses 7.4.9 to 7.4.16).
//!
//! Milan entities append 8 bytes to the stream info: extended flags and a packed
//! byte holding the probing status (3 high bits) and the last ACMP status
//! (5 low bits). The extension is decoded whenever the payload is long enough
//! and emitted whenever [`StreamInfo::milan`] is set.

use serde::{Deserialize, Serialize};

use super::sizes::{GET_STREAM_INFO_MILAN_RESPONSE, SET_STREAM_INFO_COMMAND};
use super::{DescriptorRef, PayloadCodec};
use crate::entity_model::{
    MsrpFailureCode, ProbingStatus, StreamFormat, StreamInfoFlags, StreamInfoFlagsEx,
};
use crate::error::{BuildingError, ParsingError};
use crate::protocol::AcmpStatus;
use crate::serialization::{Deserializer, Serializer};
use crate::types::MacAddress;
use crate::unique_identifier::UniqueIdentifier;

const PROBING_STATUS_SHIFT: u8 = 5;
const PROBING_STATUS_MASK: u8 = 0x07;
const ACMP_STATUS_MASK: u8 = 0x1F;

/// Target stream and its format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamFormatPayload {
    pub descriptor: DescriptorRef,
    pub stream_format: StreamFormat,
}

impl PayloadCodec for StreamFormatPayload {
    const MIN_LENGTH: usize = 12;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        self.descriptor.write(ser)?;
        ser.write(&self.stream_format)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            descriptor: DescriptorRef::read(des)?,
            stream_format: des.read()?,
        })
    }
}

/// Milan extension of the stream info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MilanStreamInfo {
    pub flags_ex: StreamInfoFlagsEx,
    pub probing_status: ProbingStatus,
    pub acmp_status: AcmpStatus,
}

/// Dynamic state of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamInfo {
    pub stream_info_flags: StreamInfoFlags,
    pub stream_format: StreamFormat,
    pub stream_id: UniqueIdentifier,
    pub msrp_accumulated_latency: u32,
    pub stream_dest_mac: MacAddress,
    pub msrp_failure_code: MsrpFailureCode,
    pub msrp_failure_bridge_id: u64,
    pub stream_vlan_id: u16,
    pub milan: Option<MilanStreamInfo>,
}

/// Target stream and its stream info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamInfoPayload {
    pub descriptor: DescriptorRef,
    pub info: StreamInfo,
}

fn pack_milan_statuses(milan: &MilanStreamInfo) -> Result<u8, BuildingError> {
    let probing = u8::from(milan.probing_status);
    if probing > PROBING_STATUS_MASK {
        return Err(BuildingError::InvalidFieldValueForBuild {
            field: "probing_status",
            description: format!("{probing} does not fit in 3 bits"),
        });
    }
    let acmp = u8::from(milan.acmp_status);
    if acmp > ACMP_STATUS_MASK {
        return Err(BuildingError::InvalidFieldValueForBuild {
            field: "acmp_status",
            description: format!("{acmp} does not fit in 5 bits"),
        });
    }
    Ok((probing << PROBING_STATUS_SHIFT) | acmp)
}

impl PayloadCodec for StreamInfoPayload {
    const MIN_LENGTH: usize = SET_STREAM_INFO_COMMAND;
    const FIXED: bool = false;

    fn wire_length(&self) -> usize {
        if self.info.milan.is_some() {
            GET_STREAM_INFO_MILAN_RESPONSE
        } else {
            Self::MIN_LENGTH
        }
    }

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        let info = &self.info;
        self.descriptor.write(ser)?;
        ser.write(&info.stream_info_flags)?;
        ser.write(&info.stream_format)?;
        ser.write(&info.stream_id)?;
        ser.write(&info.msrp_accumulated_latency)?;
        ser.write(&info.stream_dest_mac)?;
        ser.write(&info.msrp_failure_code)?;
        ser.write(&0u8)?;
        ser.write(&info.msrp_failure_bridge_id)?;
        ser.write(&info.stream_vlan_id)?;
        ser.write(&0u16)?;
        if let Some(milan) = &info.milan {
            let statuses = pack_milan_statuses(milan)?;
            ser.write(&milan.flags_ex)?;
            ser.write(&statuses)?;
            ser.write(&0u8)?;
            ser.write(&0u16)?;
        }
        Ok(())
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let descriptor = DescriptorRef::read(des)?;
        let stream_info_flags = des.read()?;
        let stream_format = des.read()?;
        let stream_id = des.read()?;
        let msrp_accumulated_latency = des.read()?;
        let stream_dest_mac = des.read()?;
        let msrp_failure_code = des.read()?;
        des.skip(1)?;
        let msrp_failure_bridge_id = des.read()?;
        let stream_vlan_id = des.read()?;
        des.skip(2)?;

        let milan = if des.remaining() >= GET_STREAM_INFO_MILAN_RESPONSE - Self::MIN_LENGTH {
            let flags_ex = des.read()?;
            let statuses: u8 = des.read()?;
            des.skip(3)?;
            Some(MilanStreamInfo {
                flags_ex,
                probing_status: ProbingStatus::from(
                    (statuses >> PROBING_STATUS_SHIFT) & PROBING_STATUS_MASK,
                ),
                acmp_status: AcmpStatus::from(statuses & ACMP_STATUS_MASK),
            })
        } else {
            None
        };

        Ok(Self {
            descriptor,
            info: StreamInfo {
                stream_info_flags,
                stream_format,
                stream_id,
                msrp_accumulated_latency,
                stream_dest_mac,
                msrp_failure_code,
                msrp_failure_bridge_id,
                stream_vlan_id,
                milan,
            },
        })
    }
}

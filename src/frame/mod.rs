//! Frame layers shared by every ATDECC PDU: Ethernet, AVTP common byte and
//! AVTP control header.

pub mod avtp;
pub mod ethernet;

pub use avtp::{AvtpCommonHeader, AvtpControlHeader};
pub use ethernet::EthernetHeader;

use serde::{Deserialize, Serialize};

use crate::config::CodecConfig;
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer};

/// Length of both frame layers.
pub const FRAME_HEADER_LENGTH: usize = EthernetHeader::LENGTH + AvtpControlHeader::LENGTH;

/// Ethernet and AVTP control headers of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FrameHeader {
    pub ethernet: EthernetHeader,
    pub control: AvtpControlHeader,
}

/// Writes both frame layers.
///
/// # Errors
/// Propagates [`EthernetHeader::serialize`] and [`AvtpControlHeader::serialize`] errors.
pub fn serialize_frame_header(
    header: &FrameHeader,
    ser: &mut Serializer,
) -> Result<(), BuildingError> {
    header.ethernet.serialize(ser)?;
    header.control.serialize(ser)
}

/// Reads both frame layers.
///
/// # Errors
/// Propagates [`EthernetHeader::deserialize`] and [`AvtpControlHeader::deserialize`] errors.
pub fn deserialize_frame_header(des: &mut Deserializer<'_>) -> Result<FrameHeader, ParsingError> {
    let ethernet = EthernetHeader::deserialize(des)?;
    let control = AvtpControlHeader::deserialize(des)?;
    Ok(FrameHeader { ethernet, control })
}

/// Selects the control data bytes of a frame body according to `config`.
///
/// `fixed_length` is the body length of PDUs that have one. Bytes past the
/// selected view are Ethernet padding and are ignored.
///
/// # Errors
/// - [`ParsingError::LengthMismatch`] - Strict policy and the control data
///   length disagrees with the PDU kind or the buffer
pub fn control_data_view<'a>(
    context: &'static str,
    control: &AvtpControlHeader,
    body: &'a [u8],
    fixed_length: Option<usize>,
    config: &CodecConfig,
) -> Result<&'a [u8], ParsingError> {
    let declared = usize::from(control.control_data_length);

    if let Some(expected) = fixed_length {
        if declared != expected {
            if config.is_strict() {
                return Err(ParsingError::LengthMismatch {
                    context,
                    declared,
                    actual: expected,
                });
            }
            log::warn!("{context}: control_data_length {declared} differs from {expected}");
        }
    }

    if declared > body.len() {
        if config.is_strict() {
            return Err(ParsingError::LengthMismatch {
                context,
                declared,
                actual: body.len(),
            });
        }
        log::warn!(
            "{context}: control_data_length {declared} exceeds the {} bytes received",
            body.len()
        );
    }

    let wanted = if config.is_strict() {
        declared
    } else {
        fixed_length.unwrap_or(declared)
    };
    let end = wanted.min(body.len());
    if body.len() > end {
        log::trace!("{context}: ignoring {} trailing bytes", body.len() - end);
    }
    Ok(&body[..end])
}

//! Behavioral trait shared by every ATDECC PDU kind.
//!
//! A PDU describes its own body and the control header fields it owns; the
//! provided methods add the frame layers, compute the control data length and
//! apply the decode policy.

use bytes::Bytes;

use crate::config::CodecConfig;
use crate::error::{BuildingError, ParsingError};
use crate::frame::{
    AvtpControlHeader, EthernetHeader, FRAME_HEADER_LENGTH, FrameHeader, control_data_view,
    deserialize_frame_header, serialize_frame_header,
};
use crate::serialization::{Deserializer, Serializer};

/// An ATDECC protocol data unit.
pub trait Pdu: Sized {
    /// 7-bit AVTP subtype code.
    const SUBTYPE: u8;

    /// Name used in error contexts and logs.
    const NAME: &'static str;

    /// Body length after the control header, for PDUs with a fixed layout.
    const FIXED_BODY_LENGTH: Option<usize>;

    /// Ethernet addressing of this PDU.
    fn ethernet(&self) -> &EthernetHeader;

    /// Control header with the given control data length.
    fn control_header(&self, control_data_length: u16) -> AvtpControlHeader;

    /// Serialized body length.
    fn body_length(&self) -> usize;

    /// Writes the body following the control header.
    ///
    /// # Errors
    /// - [`BuildingError`] - The body cannot be represented or does not fit
    fn serialize_body(&self, ser: &mut Serializer) -> Result<(), BuildingError>;

    /// Reads the body following the control header.
    ///
    /// # Arguments
    /// * `header`: The already decoded frame layers.
    /// * `body`: Cursor over the control data selected by the decode policy.
    ///
    /// # Errors
    /// - [`ParsingError`] - The body is truncated or carries invalid values
    fn deserialize_body(header: &FrameHeader, body: &mut Deserializer<'_>) -> Result<Self, ParsingError>;

    /// Full frame length: Ethernet, control header and body.
    fn frame_length(&self) -> usize {
        FRAME_HEADER_LENGTH + self.body_length()
    }

    /// Writes the whole frame.
    ///
    /// # Errors
    /// - [`BuildingError::PayloadTooLarge`] - The body exceeds the control data length field
    /// - [`BuildingError::BufferTooSmall`] - The serializer has no room for the frame
    fn serialize(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        let body_length = self.body_length();
        let control_data_length =
            u16::try_from(body_length).map_err(|_| BuildingError::PayloadTooLarge {
                context: Self::NAME,
                length: body_length,
                maximum: usize::from(u16::MAX),
            })?;
        let header = FrameHeader {
            ethernet: *self.ethernet(),
            control: self.control_header(control_data_length),
        };
        serialize_frame_header(&header, ser)?;
        let start = ser.used_bytes();
        self.serialize_body(ser)?;
        debug_assert_eq!(ser.used_bytes() - start, body_length);
        Ok(())
    }

    /// Serializes the frame into a new buffer of exactly [`Pdu::frame_length`] bytes.
    ///
    /// # Errors
    /// Propagates [`Pdu::serialize`] errors.
    fn encode(&self) -> Result<Bytes, BuildingError> {
        let mut ser = Serializer::new(self.frame_length());
        self.serialize(&mut ser)?;
        Ok(ser.freeze())
    }

    /// Decodes a whole frame.
    ///
    /// # Errors
    /// - [`ParsingError::InvalidFieldValue`] - The frame carries another subtype
    /// - [`ParsingError`] - Any frame layer or body error
    fn deserialize(bytes: &[u8], config: &CodecConfig) -> Result<Self, ParsingError> {
        let mut des = Deserializer::new(bytes);
        let header = deserialize_frame_header(&mut des)?;
        Self::deserialize_with_header(&header, des.remaining_slice(), config)
    }

    /// Decodes the body of a frame whose layers were already parsed.
    ///
    /// # Errors
    /// Same as [`Pdu::deserialize`].
    fn deserialize_with_header(
        header: &FrameHeader,
        body: &[u8],
        config: &CodecConfig,
    ) -> Result<Self, ParsingError> {
        let subtype = header.control.common.subtype;
        if subtype != Self::SUBTYPE {
            return Err(ParsingError::InvalidFieldValue {
                field: "subtype",
                structure: Self::NAME,
                expected: u64::from(Self::SUBTYPE),
                got: u64::from(subtype),
            });
        }
        let view = control_data_view(
            Self::NAME,
            &header.control,
            body,
            Self::FIXED_BODY_LENGTH,
            config,
        )?;
        let mut des = Deserializer::new(view);
        Self::deserialize_body(header, &mut des)
    }
}

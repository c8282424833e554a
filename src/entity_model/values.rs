//! Packed value types of the entity model.
//!
//! Most of these wrap a single integer with sub-fields packed into it. Types with
//! a null sentinel treat every invalid value as equal, so "absent" survives a
//! decode/encode round-trip without being mistaken for data.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use super::enums::{ControlUnitCode, ControlValueKind};
use crate::constants::FIXED_STRING_LENGTH;
use crate::serialization::WireValue;
use crate::types::DescriptorIndex;
use crate::unique_identifier::UniqueIdentifier;

/// Macro to generate integer wrappers with a null sentinel
macro_rules! sentinel_value {
    (
        $(#[$meta:meta])*
        $name:ident($raw:ty), null = $null:expr, valid = |$v:ident| $valid:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name($raw);

        impl $name {
            /// Raw value of the null sentinel.
            pub const NULL_VALUE: $raw = $null;

            /// Creates a value from its raw representation.
            #[inline]
            pub const fn new(value: $raw) -> Self {
                Self(value)
            }

            /// The null sentinel.
            #[inline]
            pub const fn null() -> Self {
                Self($null)
            }

            /// Raw value.
            #[inline]
            pub const fn value(self) -> $raw {
                self.0
            }

            /// Whether the value carries data.
            #[inline]
            pub const fn is_valid(self) -> bool {
                let $v = self.0;
                $valid
            }

            fn canonical(self) -> $raw {
                if self.is_valid() { self.0 } else { $null }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::null()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                (!self.is_valid() && !other.is_valid()) || self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.canonical().hash(state);
            }
        }

        impl From<$raw> for $name {
            fn from(value: $raw) -> Self {
                Self(value)
            }
        }

        impl WireValue for $name {
            const WIRE_SIZE: usize = <$raw as WireValue>::WIRE_SIZE;

            #[inline]
            fn put<B: bytes::BufMut>(&self, buf: &mut B) {
                self.0.put(buf);
            }

            #[inline]
            fn get<B: bytes::Buf>(buf: &mut B) -> Self {
                Self(<$raw>::get(buf))
            }
        }
    };
}

sentinel_value!(
    /// Sampling rate: 3-bit pull multiplier and 29-bit base frequency in Hz.
    SamplingRate(u32), null = 0, valid = |v| (v & 0x1FFF_FFFF) != 0
);

impl SamplingRate {
    /// Packs a pull code and base frequency.
    pub const fn from_pull_base_frequency(pull: u8, base_frequency: u32) -> Self {
        Self(((pull as u32 & 0x07) << 29) | (base_frequency & 0x1FFF_FFFF))
    }

    /// Pull code (bits 31..29).
    pub const fn pull(self) -> u8 {
        (self.0 >> 29) as u8
    }

    /// Base frequency in Hz (bits 28..0).
    pub const fn base_frequency(self) -> u32 {
        self.0 & 0x1FFF_FFFF
    }

    /// Nominal rate in Hz after applying the pull. Reserved pull codes leave the
    /// base frequency unchanged.
    pub fn nominal_sample_rate(self) -> f64 {
        let frequency = f64::from(self.base_frequency());
        match self.pull() {
            0 => frequency,
            1 => frequency / 1.001,
            2 => frequency * 1.001,
            3 => frequency * 24.0 / 25.0,
            4 => frequency * 25.0 / 24.0,
            pull => {
                log::warn!("Reserved sampling rate pull code {pull}");
                frequency
            }
        }
    }
}

sentinel_value!(
    /// IEEE 1722 stream format, opaque 64-bit value.
    StreamFormat(u64), null = 0, valid = |v| v != 0
);

sentinel_value!(
    /// Reference to a localized string: 13-bit STRINGS offset and 3-bit index.
    LocalizedStringReference(u16), null = 0xFFFF, valid = |v| (v & 0x0007) != 0x0007
);

impl LocalizedStringReference {
    /// Packs a STRINGS descriptor offset and an index inside it.
    pub const fn from_offset_index(offset: u16, index: u8) -> Self {
        Self((offset << 3) | (index as u16 & 0x07))
    }

    /// STRINGS descriptor offset.
    pub const fn offset(self) -> u16 {
        self.0 >> 3
    }

    /// String index inside the STRINGS descriptor.
    pub const fn index(self) -> u8 {
        (self.0 & 0x0007) as u8
    }

    /// Position of the string across all STRINGS descriptors of a locale,
    /// `None` for the null reference.
    pub fn global_offset(self) -> Option<u16> {
        if !self.is_valid() {
            return None;
        }
        Some(self.offset().wrapping_mul(7).wrapping_add(u16::from(self.index())))
    }
}

/// Control value unit: signed power-of-ten multiplier and unit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ControlValueUnit(u16);

impl ControlValueUnit {
    /// Creates a unit from its raw value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Packs a multiplier and unit code.
    pub fn from_multiplier_unit(multiplier: i8, unit: ControlUnitCode) -> Self {
        Self((u16::from(multiplier as u8) << 8) | u16::from(u8::from(unit)))
    }

    /// Raw value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Power-of-ten multiplier.
    pub const fn multiplier(self) -> i8 {
        (self.0 >> 8) as u8 as i8
    }

    /// Unit code.
    pub fn unit(self) -> ControlUnitCode {
        ControlUnitCode::from((self.0 & 0x00FF) as u8)
    }
}

/// Control value type: read-only bit, unknown bit and 14-bit value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ControlValueType(u16);

impl ControlValueType {
    const READ_ONLY_BIT: u16 = 1 << 15;
    const UNKNOWN_BIT: u16 = 1 << 14;
    const KIND_MASK: u16 = 0x3FFF;

    /// Creates a value type from its raw value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Packs the read-only bit, unknown bit and kind.
    pub fn from_parts(read_only: bool, unknown: bool, kind: ControlValueKind) -> Self {
        let mut value = u16::from(kind) & Self::KIND_MASK;
        if read_only {
            value |= Self::READ_ONLY_BIT;
        }
        if unknown {
            value |= Self::UNKNOWN_BIT;
        }
        Self(value)
    }

    /// Raw value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Whether the control is read-only.
    pub const fn is_read_only(self) -> bool {
        self.0 & Self::READ_ONLY_BIT != 0
    }

    /// Whether the current value is unknown.
    pub const fn is_unknown(self) -> bool {
        self.0 & Self::UNKNOWN_BIT != 0
    }

    /// Kind of the values carried by the control.
    pub fn kind(self) -> ControlValueKind {
        ControlValueKind::from(self.0 & Self::KIND_MASK)
    }
}

impl Default for ControlValueType {
    fn default() -> Self {
        Self(Self::UNKNOWN_BIT)
    }
}

macro_rules! wire_transparent {
    ($($name:ident => $raw:ty;)*) => {
        $(
            impl WireValue for $name {
                const WIRE_SIZE: usize = <$raw as WireValue>::WIRE_SIZE;

                #[inline]
                fn put<B: bytes::BufMut>(&self, buf: &mut B) {
                    self.0.put(buf);
                }

                #[inline]
                fn get<B: bytes::Buf>(buf: &mut B) -> Self {
                    Self(<$raw>::get(buf))
                }
            }
        )*
    };
}

wire_transparent! {
    ControlValueUnit => u16;
    ControlValueType => u16;
}

/// 64-byte NUL-padded string. Not guaranteed to be NUL-terminated.
#[serde_as]
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtdeccFixedString(#[serde_as(as = "[_; 64]")] [u8; FIXED_STRING_LENGTH]);

impl AtdeccFixedString {
    /// Creates a string from raw bytes, truncating to 64 bytes and zero-padding.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buffer = [0u8; FIXED_STRING_LENGTH];
        let len = bytes.len().min(FIXED_STRING_LENGTH);
        buffer[..len].copy_from_slice(&bytes[..len]);
        Self(buffer)
    }

    /// Raw 64 bytes.
    pub fn as_bytes(&self) -> &[u8; FIXED_STRING_LENGTH] {
        &self.0
    }

    /// Whether the first byte is NUL.
    pub fn is_empty(&self) -> bool {
        self.0[0] == 0
    }

    /// Text up to the first NUL, invalid UTF-8 replaced.
    pub fn to_string_lossy(&self) -> String {
        let end = self.0.iter().position(|b| *b == 0).unwrap_or(FIXED_STRING_LENGTH);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }
}

impl Default for AtdeccFixedString {
    fn default() -> Self {
        Self([0; FIXED_STRING_LENGTH])
    }
}

impl From<&str> for AtdeccFixedString {
    fn from(value: &str) -> Self {
        Self::from_bytes(value.as_bytes())
    }
}

impl fmt::Debug for AtdeccFixedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AtdeccFixedString({:?})", self.to_string_lossy())
    }
}

impl fmt::Display for AtdeccFixedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl WireValue for AtdeccFixedString {
    const WIRE_SIZE: usize = FIXED_STRING_LENGTH;

    fn put<B: bytes::BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.0);
    }

    fn get<B: bytes::Buf>(buf: &mut B) -> Self {
        let mut bytes = [0u8; FIXED_STRING_LENGTH];
        buf.copy_to_slice(&mut bytes);
        Self(bytes)
    }
}

/// One audio mapping (clause 7.2.19.1): four packed `u16` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AudioMapping {
    pub stream_index: DescriptorIndex,
    pub stream_channel: u16,
    pub cluster_offset: DescriptorIndex,
    pub cluster_channel: u16,
}

impl WireValue for AudioMapping {
    const WIRE_SIZE: usize = 8;

    fn put<B: bytes::BufMut>(&self, buf: &mut B) {
        self.stream_index.put(buf);
        self.stream_channel.put(buf);
        self.cluster_offset.put(buf);
        self.cluster_channel.put(buf);
    }

    fn get<B: bytes::Buf>(buf: &mut B) -> Self {
        Self {
            stream_index: DescriptorIndex::get(buf),
            stream_channel: u16::get(buf),
            cluster_offset: DescriptorIndex::get(buf),
            cluster_channel: u16::get(buf),
        }
    }
}

/// MSRP traffic class mapping reported by GET_AVB_INFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MsrpMapping {
    pub traffic_class: u8,
    pub priority: u8,
    pub vlan_id: u16,
}

impl Default for MsrpMapping {
    fn default() -> Self {
        Self {
            traffic_class: 0x00,
            priority: 0xFF,
            vlan_id: 0,
        }
    }
}

impl WireValue for MsrpMapping {
    const WIRE_SIZE: usize = 4;

    fn put<B: bytes::BufMut>(&self, buf: &mut B) {
        self.traffic_class.put(buf);
        self.priority.put(buf);
        self.vlan_id.put(buf);
    }

    fn get<B: bytes::Buf>(buf: &mut B) -> Self {
        Self {
            traffic_class: u8::get(buf),
            priority: u8::get(buf),
            vlan_id: u16::get(buf),
        }
    }
}

/// Stream reference used by redundant stream associations: entity and stream index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StreamIdentification {
    pub entity_id: UniqueIdentifier,
    pub stream_index: DescriptorIndex,
}

/// GET_COUNTERS counter block.
pub type DescriptorCounters = [u32; crate::constants::COUNTERS_COUNT];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{Deserializer, Serializer};

    #[test]
    fn sampling_rate_split() {
        let rate = SamplingRate::from_pull_base_frequency(1, 48_000);
        assert_eq!(rate.value(), 0x2000_BB80);
        assert_eq!(rate.pull(), 1);
        assert_eq!(rate.base_frequency(), 48_000);
        assert!((rate.nominal_sample_rate() - 48_000.0 / 1.001).abs() < 1e-6);
        assert_eq!(
            SamplingRate::from_pull_base_frequency(0, 96_000).nominal_sample_rate(),
            96_000.0
        );
    }

    #[test]
    fn sampling_rate_invalid_values_compare_equal() {
        assert!(!SamplingRate::null().is_valid());
        assert_eq!(SamplingRate::new(0x2000_0000), SamplingRate::null());
        assert_ne!(SamplingRate::new(48_000), SamplingRate::null());
    }

    #[test]
    fn stream_format_sentinel() {
        assert!(!StreamFormat::default().is_valid());
        assert!(StreamFormat::new(0x0205_0220_0000_0000).is_valid());
    }

    #[test]
    fn localized_string_reference_layout() {
        let reference = LocalizedStringReference::from_offset_index(2, 3);
        assert_eq!(reference.value(), 0x0013);
        assert_eq!(reference.offset(), 2);
        assert_eq!(reference.index(), 3);
        assert_eq!(reference.global_offset(), Some(17));
        assert!(!LocalizedStringReference::null().is_valid());
        assert_eq!(LocalizedStringReference::null().global_offset(), None);
        assert_eq!(
            LocalizedStringReference::new(0x0017),
            LocalizedStringReference::null()
        );
    }

    #[test]
    fn control_value_unit_layout() {
        let unit = ControlValueUnit::from_multiplier_unit(-3, ControlUnitCode::Seconds);
        assert_eq!(unit.value(), 0xFD08);
        assert_eq!(unit.multiplier(), -3);
        assert_eq!(unit.unit(), ControlUnitCode::Seconds);
    }

    #[test]
    fn control_value_type_layout() {
        let value_type = ControlValueType::from_parts(true, false, ControlValueKind::LinearUInt8);
        assert_eq!(value_type.value(), 0x8001);
        assert!(value_type.is_read_only());
        assert!(!value_type.is_unknown());
        assert_eq!(value_type.kind(), ControlValueKind::LinearUInt8);
        assert_eq!(ControlValueType::default().value(), 1 << 14);
    }

    #[test]
    fn fixed_string_truncates_and_pads() {
        let long = "x".repeat(80);
        let s = AtdeccFixedString::from(long.as_str());
        assert_eq!(s.as_bytes(), &[b'x'; 64]);
        assert_eq!(s.to_string_lossy().len(), 64);

        let short = AtdeccFixedString::from("Speaker");
        assert_eq!(short.to_string_lossy(), "Speaker");
        assert_eq!(short.as_bytes()[7..], [0u8; 57]);
        assert!(AtdeccFixedString::default().is_empty());
    }

    #[test]
    fn fixed_string_compares_all_bytes() {
        let mut raw = [0u8; 64];
        raw[..3].copy_from_slice(b"abc");
        raw[10] = b'z';
        assert_ne!(AtdeccFixedString::from_bytes(&raw), AtdeccFixedString::from("abc"));
    }

    #[test]
    fn audio_mapping_wire_layout() {
        let mapping = AudioMapping {
            stream_index: DescriptorIndex::new(1),
            stream_channel: 2,
            cluster_offset: DescriptorIndex::new(3),
            cluster_channel: 4,
        };
        let mut ser = Serializer::new(8);
        ser.write(&mapping).unwrap();
        assert_eq!(ser.data(), &[0, 1, 0, 2, 0, 3, 0, 4]);
        let mut des = Deserializer::new(ser.data());
        assert_eq!(des.read::<AudioMapping>().unwrap(), mapping);
    }

    #[test]
    fn fixed_string_serde_round_trip() {
        let s = AtdeccFixedString::from("Main Out");
        let json = serde_json::to_string(&s).unwrap();
        let back: AtdeccFixedString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}

//! Core type definitions for the ATDECC codec.
//!
//! Provides zero-cost newtypes to prevent index and counter mixups at compile time.
//! All newtypes use `#[repr(transparent)]` for guaranteed zero runtime cost.

use std::fmt;
use std::ops::{Add, AddAssign, Deref, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::MAC_ADDRESS_LENGTH;

/// Macro to generate ATDECC newtype wrappers with common implementations
macro_rules! atdecc_newtype {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty) => $prefix:literal
        $(, custom_methods: { $($custom:tt)* })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[derive(Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            /// Creates a new instance
            #[inline]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Raw value
            #[inline]
            pub const fn value(self) -> $inner {
                self.0
            }

            /// Wrapping addition
            #[inline]
            pub const fn wrapping_add(self, rhs: $inner) -> Self {
                Self(self.0.wrapping_add(rhs))
            }

            /// Wrapping subtraction returning the inner type
            #[inline]
            pub const fn wrapping_sub(self, rhs: Self) -> $inner {
                self.0.wrapping_sub(rhs.0)
            }

            $($($custom)*)?
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl Deref for $name {
            type Target = $inner;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$inner> for $name {
            #[inline]
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<$inner> for $name {
            #[inline]
            fn eq(&self, other: &$inner) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for $inner {
            #[inline]
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }

        impl PartialOrd<$inner> for $name {
            #[inline]
            fn partial_cmp(&self, other: &$inner) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(other)
            }
        }

        impl Add<$inner> for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $inner) -> Self::Output {
                self.wrapping_add(rhs)
            }
        }

        impl AddAssign<$inner> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $inner) {
                *self = self.wrapping_add(rhs);
            }
        }

        impl Sub<Self> for $name {
            type Output = $inner;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                self.wrapping_sub(rhs)
            }
        }
    };
}

/// Macro to generate protocol enums that round-trip unknown wire values
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $raw:ty, default $default:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[derive(serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// Value without a named variant.
            Unknown($raw),
        }

        impl From<$raw> for $name {
            fn from(value: $raw) -> Self {
                match value {
                    $($value => $name::$variant,)*
                    unknown => $name::Unknown(unknown),
                }
            }
        }

        impl From<$name> for $raw {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $value,)*
                    $name::Unknown(raw) => raw,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl $crate::serialization::WireValue for $name {
            const WIRE_SIZE: usize = <$raw as $crate::serialization::WireValue>::WIRE_SIZE;

            #[inline]
            fn put<B: bytes::BufMut>(&self, buf: &mut B) {
                <$raw as $crate::serialization::WireValue>::put(&<$raw>::from(*self), buf);
            }

            #[inline]
            fn get<B: bytes::Buf>(buf: &mut B) -> Self {
                Self::from(<$raw as $crate::serialization::WireValue>::get(buf))
            }
        }
    };
}

pub(crate) use wire_enum;

atdecc_newtype!(
    /// Index of a descriptor within its type and configuration.
    DescriptorIndex(u16) => "IDX",
    custom_methods: {
        /// Sentinel used where no descriptor is referenced.
        pub const INVALID: Self = Self(crate::constants::INVALID_DESCRIPTOR_INDEX);

        /// Whether this index references a descriptor.
        #[inline]
        pub const fn is_valid(self) -> bool {
            self.0 != crate::constants::INVALID_DESCRIPTOR_INDEX
        }
    }
);

atdecc_newtype!(
    /// Index of a CONFIGURATION descriptor.
    ConfigurationIndex(u16) => "CFG"
);

atdecc_newtype!(
    /// AECP/ACMP sequence identifier.
    SequenceId(u16) => "SEQ"
);

atdecc_newtype!(
    /// ADP available index. Incremented whenever an advertised field changes.
    AvailableIndex(u32) => "AVAIL",
    custom_methods: {
        /// Next value, wrapping at `u32::MAX`.
        #[inline]
        pub const fn next(self) -> Self {
            self.wrapping_add(1)
        }
    }
);

atdecc_newtype!(
    /// Identifier of an operation started with START_OPERATION.
    OperationId(u16) => "OP"
);

/// 48-bit IEEE 802 MAC address, copied verbatim on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[repr(transparent)]
pub struct MacAddress(pub [u8; MAC_ADDRESS_LENGTH]);

impl MacAddress {
    /// All-zero address.
    pub const NULL: Self = Self([0; MAC_ADDRESS_LENGTH]);

    /// Creates a MAC address from its octets.
    #[inline]
    pub const fn new(octets: [u8; MAC_ADDRESS_LENGTH]) -> Self {
        Self(octets)
    }

    /// Address octets.
    #[inline]
    pub const fn octets(&self) -> [u8; MAC_ADDRESS_LENGTH] {
        self.0
    }

    /// Whether any octet is non-zero.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0.iter().any(|b| *b != 0)
    }

    /// Address packed into the low 48 bits of a `u64`.
    pub fn to_u64(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
    }
}

impl From<[u8; MAC_ADDRESS_LENGTH]> for MacAddress {
    fn from(value: [u8; MAC_ADDRESS_LENGTH]) -> Self {
        Self(value)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

/// Error returned when a MAC address string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid MAC address '{0}'")]
pub struct MacAddressParseError(pub String);

impl FromStr for MacAddress {
    type Err = MacAddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; MAC_ADDRESS_LENGTH];
        let mut parts = s.split([':', '-']);
        for octet in octets.iter_mut() {
            let part = parts
                .next()
                .ok_or_else(|| MacAddressParseError(s.to_string()))?;
            if part.len() != 2 {
                return Err(MacAddressParseError(s.to_string()));
            }
            *octet =
                u8::from_str_radix(part, 16).map_err(|_| MacAddressParseError(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(MacAddressParseError(s.to_string()));
        }
        Ok(Self(octets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display_uses_prefix() {
        assert_eq!(format!("{}", DescriptorIndex::new(3)), "IDX3");
        assert_eq!(format!("{}", SequenceId::new(42)), "SEQ42");
        assert_eq!(format!("{}", AvailableIndex::new(7)), "AVAIL7");
    }

    #[test]
    fn sequence_id_wraps() {
        let seq = SequenceId::new(u16::MAX);
        assert_eq!(seq + 1, 0);
        let mut seq = SequenceId::new(10);
        seq += 5;
        assert_eq!(seq, 15);
        assert_eq!(SequenceId::new(2) - SequenceId::new(u16::MAX), 3);
    }

    #[test]
    fn available_index_next_wraps() {
        assert_eq!(AvailableIndex::new(u32::MAX).next(), 0);
        assert_eq!(AvailableIndex::new(1).next(), 2);
    }

    #[test]
    fn descriptor_index_invalid_sentinel() {
        assert!(!DescriptorIndex::INVALID.is_valid());
        assert!(DescriptorIndex::new(0).is_valid());
    }

    #[test]
    fn mac_address_display_and_parse() {
        let mac = MacAddress::new([0x91, 0xE0, 0xF0, 0x01, 0x00, 0x00]);
        assert_eq!(mac.to_string(), "91:e0:f0:01:00:00");
        assert_eq!("91:E0:F0:01:00:00".parse::<MacAddress>().unwrap(), mac);
        assert_eq!("91-e0-f0-01-00-00".parse::<MacAddress>().unwrap(), mac);
        assert_eq!(mac.to_u64(), 0x91E0_F001_0000);
    }

    #[test]
    fn mac_address_parse_rejects_malformed() {
        assert!("91:e0:f0:01:00".parse::<MacAddress>().is_err());
        assert!("91:e0:f0:01:00:00:11".parse::<MacAddress>().is_err());
        assert!("91:e0:f0:01:00:zz".parse::<MacAddress>().is_err());
        assert!("911:e0:f0:01:00:0".parse::<MacAddress>().is_err());
    }

    #[test]
    fn mac_address_validity() {
        assert!(!MacAddress::NULL.is_valid());
        assert!(MacAddress::new([0, 0, 0, 0, 0, 1]).is_valid());
    }
}

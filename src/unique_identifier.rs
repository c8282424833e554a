//! EUI-64 based unique identifiers.
//!
//! Entity IDs, entity model IDs, stream IDs and gPTP grandmaster IDs all share this
//! representation. Two sentinels exist: the null identifier (all zeros) and the
//! uninitialized identifier (all ones). Both are invalid and compare equal to each
//! other, so a decoded sentinel survives a round-trip as "absent".

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::types::MacAddress;

const NULL_IDENTIFIER_VALUE: u64 = 0x0000_0000_0000_0000;
const UNINITIALIZED_IDENTIFIER_VALUE: u64 = 0xFFFF_FFFF_FFFF_FFFF;
const GROUP_BIT: u64 = 0x0100_0000_0000_0000;
const LOCAL_BIT: u64 = 0x0200_0000_0000_0000;

/// 64-bit EUI-64 identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[repr(transparent)]
pub struct UniqueIdentifier(u64);

impl UniqueIdentifier {
    /// Creates an identifier from its raw value.
    #[inline]
    pub const fn new(eui: u64) -> Self {
        Self(eui)
    }

    /// The null identifier (`0x0`).
    #[inline]
    pub const fn null() -> Self {
        Self(NULL_IDENTIFIER_VALUE)
    }

    /// The uninitialized identifier (`0xFFFF_FFFF_FFFF_FFFF`).
    #[inline]
    pub const fn uninitialized() -> Self {
        Self(UNINITIALIZED_IDENTIFIER_VALUE)
    }

    /// Raw 64-bit value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whether the identifier is neither null nor uninitialized.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != NULL_IDENTIFIER_VALUE && self.0 != UNINITIALIZED_IDENTIFIER_VALUE
    }

    /// OUI-24 vendor ID (bits 63..40).
    #[inline]
    pub const fn vendor_id(self) -> u32 {
        ((self.0 >> 40) & 0x00FF_FFFF) as u32
    }

    /// OUI-36 vendor ID (bits 63..28).
    #[inline]
    pub const fn vendor_id_oui36(self) -> u64 {
        (self.0 >> 28) & 0x0000_000F_FFFF_FFFF
    }

    /// Vendor value following an OUI-24 (low 40 bits).
    #[inline]
    pub const fn vendor_value(self) -> u64 {
        self.0 & 0x0000_00FF_FFFF_FFFF
    }

    /// Vendor value following an OUI-36 (low 28 bits).
    #[inline]
    pub const fn vendor_value_oui36(self) -> u32 {
        (self.0 & 0x0FFF_FFFF) as u32
    }

    /// Whether the I/G bit marks a group identifier.
    #[inline]
    pub const fn is_group_identifier(self) -> bool {
        self.is_valid() && (self.0 & GROUP_BIT) == GROUP_BIT
    }

    /// Whether the U/L bit marks a locally administered identifier.
    #[inline]
    pub const fn is_local_identifier(self) -> bool {
        self.is_valid() && (self.0 & LOCAL_BIT) == LOCAL_BIT
    }

    fn canonical(self) -> u64 {
        if self.is_valid() {
            self.0
        } else {
            NULL_IDENTIFIER_VALUE
        }
    }
}

impl Default for UniqueIdentifier {
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl PartialEq for UniqueIdentifier {
    fn eq(&self, other: &Self) -> bool {
        (!self.is_valid() && !other.is_valid()) || self.0 == other.0
    }
}

impl Eq for UniqueIdentifier {}

impl Hash for UniqueIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialOrd for UniqueIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UniqueIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl From<u64> for UniqueIdentifier {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UniqueIdentifier> for u64 {
    fn from(value: UniqueIdentifier) -> Self {
        value.0
    }
}

impl fmt::Display for UniqueIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016X}", self.0)
    }
}

/// Builds an entity model ID from an OUI-24 vendor ID, device ID and model ID.
pub const fn make_entity_model_id(vendor_id: u32, device_id: u8, model_id: u32) -> UniqueIdentifier {
    UniqueIdentifier::new(
        ((vendor_id as u64 & 0x00FF_FFFF) << 40) | ((device_id as u64) << 32) | model_id as u64,
    )
}

/// Splits an entity model ID into (vendor ID, device ID, model ID).
pub const fn split_entity_model_id(entity_model_id: UniqueIdentifier) -> (u32, u8, u32) {
    let raw = entity_model_id.value();
    (
        ((raw >> 40) & 0x00FF_FFFF) as u32,
        ((raw >> 32) & 0xFF) as u8,
        (raw & 0xFFFF_FFFF) as u32,
    )
}

/// Generates an entity ID from a MAC address and a 16-bit program ID.
///
/// The MAC address fills the six most significant octets, the program ID the
/// last two.
pub fn generate_eid(mac: &MacAddress, prog_id: u16) -> UniqueIdentifier {
    let o = mac.octets();
    let p = prog_id.to_be_bytes();
    UniqueIdentifier::new(u64::from_be_bytes([
        o[0], o[1], o[2], o[3], o[4], o[5], p[0], p[1],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sentinels_are_invalid_and_equal() {
        let null = UniqueIdentifier::null();
        let uninit = UniqueIdentifier::uninitialized();
        assert!(!null.is_valid());
        assert!(!uninit.is_valid());
        assert_eq!(null, uninit);
        assert_ne!(null, UniqueIdentifier::new(0x0011_2233_4455_6677));
        assert_ne!(uninit, UniqueIdentifier::new(1));
    }

    #[test]
    fn sentinels_hash_alike() {
        let mut set = HashSet::new();
        set.insert(UniqueIdentifier::null());
        set.insert(UniqueIdentifier::uninitialized());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn default_is_uninitialized() {
        assert_eq!(UniqueIdentifier::default().value(), u64::MAX);
    }

    #[test]
    fn vendor_views() {
        let id = UniqueIdentifier::new(0x001B_92FF_FE01_2345);
        assert_eq!(id.vendor_id(), 0x001B92);
        assert_eq!(id.vendor_value(), 0xFF_FE01_2345);
        assert_eq!(id.vendor_id_oui36(), 0x0_01B9_2FFF);
        assert_eq!(id.vendor_value_oui36(), 0x0E01_2345);
    }

    #[test]
    fn group_and_local_bits() {
        assert!(UniqueIdentifier::new(0x0100_0000_0000_0001).is_group_identifier());
        assert!(UniqueIdentifier::new(0x0200_0000_0000_0001).is_local_identifier());
        assert!(!UniqueIdentifier::uninitialized().is_group_identifier());
    }

    #[test]
    fn entity_model_id_round_trip() {
        let id = make_entity_model_id(0x001B92, 0x05, 0x0000_1234);
        assert_eq!(id.value(), 0x001B_9205_0000_1234);
        assert_eq!(split_entity_model_id(id), (0x001B92, 0x05, 0x1234));
    }

    #[test]
    fn eid_from_mac_and_program_id() {
        let mac = MacAddress::new([0x00, 0x1B, 0x92, 0xAA, 0xBB, 0xCC]);
        let eid = generate_eid(&mac, 0x0102);
        assert_eq!(eid.value(), 0x001B_92AA_BBCC_0102);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(
            UniqueIdentifier::new(0x0011_2233_4455_6677).to_string(),
            "0x0011223344556677"
        );
    }
}

//! Capability and flag sets.
//!
//! Each set is a transparent wrapper over its wire integer. Equality compares the
//! raw value, so bits without a named constant survive a round-trip.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Macro to generate flag sets over a fixed-width integer
macro_rules! atdecc_flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: $raw:ty {
            $(
                $(#[$fmeta:meta])*
                const $flag:ident = $value:expr;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub $raw);

        impl $name {
            /// No flag set.
            pub const NONE: Self = Self(0);
            $(
                $(#[$fmeta])*
                pub const $flag: Self = Self($value);
            )*

            /// Creates a set from its raw bits.
            #[inline]
            pub const fn from_bits(bits: $raw) -> Self {
                Self(bits)
            }

            /// Raw bits.
            #[inline]
            pub const fn bits(self) -> $raw {
                self.0
            }

            /// Whether every bit of `other` is set.
            #[inline]
            pub const fn contains(self, other: Self) -> bool {
                (self.0 & other.0) == other.0
            }

            /// Whether no bit is set.
            #[inline]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Sets the bits of `other`.
            #[inline]
            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }

            /// Clears the bits of `other`.
            #[inline]
            pub fn remove(&mut self, other: Self) {
                self.0 &= !other.0;
            }

            /// Sets or clears the bits of `other`.
            #[inline]
            pub fn set(&mut self, other: Self, value: bool) {
                if value {
                    self.insert(other);
                } else {
                    self.remove(other);
                }
            }
        }

        impl BitOr for $name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl BitOrAssign for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl BitAnd for $name {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl From<$raw> for $name {
            #[inline]
            fn from(bits: $raw) -> Self {
                Self(bits)
            }
        }

        impl $crate::serialization::WireValue for $name {
            const WIRE_SIZE: usize = <$raw as $crate::serialization::WireValue>::WIRE_SIZE;

            #[inline]
            fn put<B: bytes::BufMut>(&self, buf: &mut B) {
                <$raw as $crate::serialization::WireValue>::put(&self.0, buf);
            }

            #[inline]
            fn get<B: bytes::Buf>(buf: &mut B) -> Self {
                Self(<$raw as $crate::serialization::WireValue>::get(buf))
            }
        }
    };
}

atdecc_flags! {
    /// ADP entity capabilities.
    pub struct EntityCapabilities: u32 {
        const EFU_MODE = 1 << 0;
        const ADDRESS_ACCESS_SUPPORTED = 1 << 1;
        const GATEWAY_ENTITY = 1 << 2;
        const AEM_SUPPORTED = 1 << 3;
        const LEGACY_AVC = 1 << 4;
        const ASSOCIATION_ID_SUPPORTED = 1 << 5;
        const ASSOCIATION_ID_VALID = 1 << 6;
        const VENDOR_UNIQUE_SUPPORTED = 1 << 7;
        const CLASS_A_SUPPORTED = 1 << 8;
        const CLASS_B_SUPPORTED = 1 << 9;
        const GPTP_SUPPORTED = 1 << 10;
        const AEM_AUTHENTICATION_SUPPORTED = 1 << 11;
        const AEM_AUTHENTICATION_REQUIRED = 1 << 12;
        const AEM_PERSISTENT_ACQUIRE_SUPPORTED = 1 << 13;
        /// identify_control_index holds a valid CONTROL index.
        const AEM_IDENTIFY_CONTROL_INDEX_VALID = 1 << 14;
        /// interface_index holds a valid AVB_INTERFACE index.
        const AEM_INTERFACE_INDEX_VALID = 1 << 15;
        const GENERAL_CONTROLLER_IGNORE = 1 << 16;
        const ENTITY_NOT_READY = 1 << 17;
    }
}

atdecc_flags! {
    /// ADP talker capabilities.
    pub struct TalkerCapabilities: u16 {
        const IMPLEMENTED = 1 << 0;
        const OTHER_SOURCE = 1 << 9;
        const CONTROL_SOURCE = 1 << 10;
        const MEDIA_CLOCK_SOURCE = 1 << 11;
        const SMPTE_SOURCE = 1 << 12;
        const MIDI_SOURCE = 1 << 13;
        const AUDIO_SOURCE = 1 << 14;
        const VIDEO_SOURCE = 1 << 15;
    }
}

atdecc_flags! {
    /// ADP listener capabilities.
    pub struct ListenerCapabilities: u16 {
        const IMPLEMENTED = 1 << 0;
        const OTHER_SINK = 1 << 9;
        const CONTROL_SINK = 1 << 10;
        const MEDIA_CLOCK_SINK = 1 << 11;
        const SMPTE_SINK = 1 << 12;
        const MIDI_SINK = 1 << 13;
        const AUDIO_SINK = 1 << 14;
        const VIDEO_SINK = 1 << 15;
    }
}

atdecc_flags! {
    /// ADP controller capabilities.
    pub struct ControllerCapabilities: u32 {
        const IMPLEMENTED = 1 << 0;
    }
}

atdecc_flags! {
    /// ACMP connection flags.
    pub struct ConnectionFlags: u16 {
        const CLASS_B = 1 << 0;
        const FAST_CONNECT = 1 << 1;
        const SAVED_STATE = 1 << 2;
        const STREAMING_WAIT = 1 << 3;
        const SUPPORTS_ENCRYPTED = 1 << 4;
        const ENCRYPTED_PDU = 1 << 5;
        const TALKER_FAILED = 1 << 6;
    }
}

atdecc_flags! {
    /// STREAM_INPUT/STREAM_OUTPUT descriptor flags.
    pub struct StreamFlags: u16 {
        const CLOCK_SYNC_SOURCE = 1 << 0;
        const CLASS_A = 1 << 1;
        const CLASS_B = 1 << 2;
        const SUPPORTS_ENCRYPTED = 1 << 3;
        const PRIMARY_BACKUP_SUPPORTED = 1 << 4;
        const PRIMARY_BACKUP_VALID = 1 << 5;
        const SECONDARY_BACKUP_SUPPORTED = 1 << 6;
        const SECONDARY_BACKUP_VALID = 1 << 7;
        const TERTIARY_BACKUP_SUPPORTED = 1 << 8;
        const TERTIARY_BACKUP_VALID = 1 << 9;
    }
}

atdecc_flags! {
    /// JACK descriptor flags.
    pub struct JackFlags: u16 {
        const CLOCK_SYNC_SOURCE = 1 << 0;
        const CAPTIVE = 1 << 1;
    }
}

atdecc_flags! {
    /// AVB_INTERFACE descriptor flags.
    pub struct AvbInterfaceFlags: u16 {
        const GPTP_GRANDMASTER_SUPPORTED = 1 << 0;
        const GPTP_SUPPORTED = 1 << 1;
        const SRP_SUPPORTED = 1 << 2;
    }
}

atdecc_flags! {
    /// CLOCK_SOURCE descriptor flags.
    pub struct ClockSourceFlags: u16 {
        const STREAM_ID = 1 << 0;
        const LOCAL_ID = 1 << 1;
    }
}

atdecc_flags! {
    /// Port descriptor flags.
    pub struct PortFlags: u16 {
        const CLOCK_SYNC_SOURCE = 1 << 0;
        const ASYNC_SAMPLE_RATE_CONV = 1 << 1;
        const SYNC_SAMPLE_RATE_CONV = 1 << 2;
    }
}

atdecc_flags! {
    /// SET/GET_STREAM_INFO flags.
    pub struct StreamInfoFlags: u32 {
        const CLASS_B = 1 << 0;
        const FAST_CONNECT = 1 << 1;
        const SAVED_STATE = 1 << 2;
        const STREAMING_WAIT = 1 << 3;
        const SUPPORTS_ENCRYPTED = 1 << 4;
        const ENCRYPTED_PDU = 1 << 5;
        const TALKER_FAILED = 1 << 6;
        const STREAM_VLAN_ID_VALID = 1 << 25;
        /// Only set in responses.
        const CONNECTED = 1 << 26;
        const MSRP_FAILURE_VALID = 1 << 27;
        const STREAM_DEST_MAC_VALID = 1 << 28;
        const MSRP_ACC_LAT_VALID = 1 << 29;
        const STREAM_ID_VALID = 1 << 30;
        const STREAM_FORMAT_VALID = 1 << 31;
    }
}

atdecc_flags! {
    /// Milan extended stream info flags.
    pub struct StreamInfoFlagsEx: u32 {
        const REGISTERING = 1 << 0;
    }
}

atdecc_flags! {
    /// GET_AVB_INFO flags.
    pub struct AvbInfoFlags: u8 {
        const AS_CAPABLE = 1 << 0;
        const GPTP_ENABLED = 1 << 1;
        const SRP_ENABLED = 1 << 2;
    }
}

atdecc_flags! {
    /// Milan GET_MILAN_INFO feature flags.
    pub struct MilanInfoFeaturesFlags: u32 {
        const REDUNDANCY = 1 << 0;
    }
}

atdecc_flags! {
    /// ACQUIRE_ENTITY flags.
    pub struct AcquireEntityFlags: u32 {
        const PERSISTENT = 0x0000_0001;
        const RELEASE = 0x8000_0000;
    }
}

atdecc_flags! {
    /// LOCK_ENTITY flags.
    pub struct LockEntityFlags: u32 {
        const UNLOCK = 0x0000_0001;
    }
}

atdecc_flags! {
    /// GET_COUNTERS valid bits for the ENTITY descriptor.
    pub struct EntityCounterValidFlags: u32 {
        const ENTITY_SPECIFIC_8 = 1 << 24;
        const ENTITY_SPECIFIC_7 = 1 << 25;
        const ENTITY_SPECIFIC_6 = 1 << 26;
        const ENTITY_SPECIFIC_5 = 1 << 27;
        const ENTITY_SPECIFIC_4 = 1 << 28;
        const ENTITY_SPECIFIC_3 = 1 << 29;
        const ENTITY_SPECIFIC_2 = 1 << 30;
        const ENTITY_SPECIFIC_1 = 1 << 31;
    }
}

atdecc_flags! {
    /// GET_COUNTERS valid bits for AVB_INTERFACE descriptors.
    pub struct AvbInterfaceCounterValidFlags: u32 {
        const LINK_UP = 1 << 0;
        const LINK_DOWN = 1 << 1;
        const FRAMES_TX = 1 << 2;
        const FRAMES_RX = 1 << 3;
        const RX_CRC_ERROR = 1 << 4;
        const GPTP_GM_CHANGED = 1 << 5;
        const ENTITY_SPECIFIC_8 = 1 << 24;
        const ENTITY_SPECIFIC_7 = 1 << 25;
        const ENTITY_SPECIFIC_6 = 1 << 26;
        const ENTITY_SPECIFIC_5 = 1 << 27;
        const ENTITY_SPECIFIC_4 = 1 << 28;
        const ENTITY_SPECIFIC_3 = 1 << 29;
        const ENTITY_SPECIFIC_2 = 1 << 30;
        const ENTITY_SPECIFIC_1 = 1 << 31;
    }
}

atdecc_flags! {
    /// GET_COUNTERS valid bits for CLOCK_DOMAIN descriptors.
    pub struct ClockDomainCounterValidFlags: u32 {
        const LOCKED = 1 << 0;
        const UNLOCKED = 1 << 1;
        const ENTITY_SPECIFIC_8 = 1 << 24;
        const ENTITY_SPECIFIC_7 = 1 << 25;
        const ENTITY_SPECIFIC_6 = 1 << 26;
        const ENTITY_SPECIFIC_5 = 1 << 27;
        const ENTITY_SPECIFIC_4 = 1 << 28;
        const ENTITY_SPECIFIC_3 = 1 << 29;
        const ENTITY_SPECIFIC_2 = 1 << 30;
        const ENTITY_SPECIFIC_1 = 1 << 31;
    }
}

atdecc_flags! {
    /// GET_COUNTERS valid bits for STREAM_INPUT descriptors.
    pub struct StreamInputCounterValidFlags: u32 {
        const MEDIA_LOCKED = 1 << 0;
        const MEDIA_UNLOCKED = 1 << 1;
        /// STREAM_RESET in 1722.1-2013, STREAM_INTERRUPTED in 1722-2016 and Milan.
        const STREAM_INTERRUPTED = 1 << 2;
        const SEQ_NUM_MISMATCH = 1 << 3;
        const MEDIA_RESET = 1 << 4;
        const TIMESTAMP_UNCERTAIN = 1 << 5;
        const TIMESTAMP_VALID = 1 << 6;
        const TIMESTAMP_NOT_VALID = 1 << 7;
        const UNSUPPORTED_FORMAT = 1 << 8;
        const LATE_TIMESTAMP = 1 << 9;
        const EARLY_TIMESTAMP = 1 << 10;
        const FRAMES_RX = 1 << 11;
        const FRAMES_TX = 1 << 12;
        const ENTITY_SPECIFIC_8 = 1 << 24;
        const ENTITY_SPECIFIC_7 = 1 << 25;
        const ENTITY_SPECIFIC_6 = 1 << 26;
        const ENTITY_SPECIFIC_5 = 1 << 27;
        const ENTITY_SPECIFIC_4 = 1 << 28;
        const ENTITY_SPECIFIC_3 = 1 << 29;
        const ENTITY_SPECIFIC_2 = 1 << 30;
        const ENTITY_SPECIFIC_1 = 1 << 31;
    }
}

atdecc_flags! {
    /// GET_COUNTERS valid bits for STREAM_OUTPUT descriptors (Milan).
    pub struct StreamOutputCounterValidFlags: u32 {
        const STREAM_START = 1 << 0;
        const STREAM_STOP = 1 << 1;
        const MEDIA_RESET = 1 << 2;
        const TIMESTAMP_UNCERTAIN = 1 << 3;
        const FRAMES_TX = 1 << 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{Deserializer, Serializer};

    #[test]
    fn combine_and_query() {
        let caps = EntityCapabilities::AEM_SUPPORTED | EntityCapabilities::CLASS_A_SUPPORTED;
        assert_eq!(caps.bits(), 0x0000_0108);
        assert!(caps.contains(EntityCapabilities::AEM_SUPPORTED));
        assert!(!caps.contains(EntityCapabilities::GPTP_SUPPORTED));
        assert!(EntityCapabilities::NONE.is_empty());
    }

    #[test]
    fn insert_remove_set() {
        let mut flags = StreamInfoFlags::NONE;
        flags.insert(StreamInfoFlags::STREAM_FORMAT_VALID);
        flags.set(StreamInfoFlags::CONNECTED, true);
        assert_eq!(flags.bits(), 0x8400_0000);
        flags.remove(StreamInfoFlags::STREAM_FORMAT_VALID);
        flags.set(StreamInfoFlags::CONNECTED, false);
        assert!(flags.is_empty());
    }

    #[test]
    fn unnamed_bits_survive_round_trip() {
        let flags = TalkerCapabilities::from_bits(0x4203);
        let mut ser = Serializer::new(2);
        ser.write(&flags).unwrap();
        assert_eq!(ser.data(), &[0x42, 0x03]);
        let mut des = Deserializer::new(ser.data());
        assert_eq!(des.read::<TalkerCapabilities>().unwrap(), flags);
    }

    #[test]
    fn acquire_flags_wire_values() {
        assert_eq!(AcquireEntityFlags::RELEASE.bits(), 0x8000_0000);
        assert_eq!(LockEntityFlags::UNLOCK.bits(), 1);
    }
}

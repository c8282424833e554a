//! IEEE 1722 / 1722.1 protocol constants and bitmasks.
//!
//! Frame layout sizes, AVTP subtype codes and the field shift/mask pairs shared by
//! the frame layers and PDU codecs. AEM payload sizes live in
//! [`crate::aem_payloads::sizes`] next to the coders that use them.

// --- Ethernet ---

/// Maximum Ethernet frame size including the 802.1Q tag.
pub const ETHERNET_MAX_FRAME_SIZE: usize = 1522;
/// Ethernet payload MTU.
pub const ETHERNET_PAYLOAD_MTU: usize = 1500;
/// Ethernet header length: destination MAC, source MAC and EtherType.
pub const ETHERNET_HEADER_LENGTH: usize = 14;
/// Length of a MAC address.
pub const MAC_ADDRESS_LENGTH: usize = 6;
/// EtherType assigned to AVTP.
pub const AVTP_ETHER_TYPE: u16 = 0x22F0;

// --- AVTP common / control header ---

/// Maximum AVTP payload carried in one Ethernet frame.
pub const AVTP_MAX_PAYLOAD_LENGTH: usize = 1486;
/// AVTP version carried by every control PDU.
pub const AVTP_VERSION: u8 = 0x00;
/// Length of the AVTP control header (common byte included).
pub const AVTP_CONTROL_HEADER_LENGTH: usize = 12;
/// Maximum control data length a control header may announce.
pub const AVTP_MAX_CONTROL_DATA_LENGTH: u16 = 0x07FF;

/// Mask of the cd (control/data) bit in the first AVTP byte.
pub const AVTP_CD_MASK: u8 = 0x80;
/// Mask of the 7-bit subtype in the first AVTP byte.
pub const AVTP_SUBTYPE_MASK: u8 = 0x7F;
/// Shift of the stream-valid bit in the second AVTP byte.
pub const AVTP_SV_SHIFT: u8 = 7;
/// Shift of the 3-bit version in the second AVTP byte.
pub const AVTP_VERSION_SHIFT: u8 = 4;
/// Mask of the 3-bit version after shifting.
pub const AVTP_VERSION_MASK: u8 = 0x07;
/// Mask of the 4-bit control data (message type) field.
pub const AVTP_CONTROL_DATA_MASK: u8 = 0x0F;
/// Shift of the 5-bit status inside the status/length word.
pub const AVTP_STATUS_SHIFT: u16 = 11;
/// Mask of the 5-bit status after shifting.
pub const AVTP_STATUS_MASK: u16 = 0x1F;
/// Mask of the 11-bit control data length.
pub const AVTP_CONTROL_DATA_LENGTH_MASK: u16 = 0x07FF;

/// 7-bit subtype code for ADP.
pub const AVTP_SUBTYPE_CODE_ADP: u8 = 0x7A;
/// 7-bit subtype code for AECP.
pub const AVTP_SUBTYPE_CODE_AECP: u8 = 0x7B;
/// 7-bit subtype code for ACMP.
pub const AVTP_SUBTYPE_CODE_ACMP: u8 = 0x7C;
/// 7-bit subtype code for MAAP.
pub const AVTP_SUBTYPE_CODE_MAAP: u8 = 0x7E;
/// 7-bit subtype code for experimental use.
pub const AVTP_SUBTYPE_CODE_EXPERIMENTAL: u8 = 0x7F;

/// ADP first byte (cd=1).
pub const AVTP_SUBTYPE_ADP: u8 = AVTP_CD_MASK | AVTP_SUBTYPE_CODE_ADP; // 0xFA
/// AECP first byte (cd=1).
pub const AVTP_SUBTYPE_AECP: u8 = AVTP_CD_MASK | AVTP_SUBTYPE_CODE_AECP; // 0xFB
/// ACMP first byte (cd=1).
pub const AVTP_SUBTYPE_ACMP: u8 = AVTP_CD_MASK | AVTP_SUBTYPE_CODE_ACMP; // 0xFC
/// MAAP first byte (cd=1).
pub const AVTP_SUBTYPE_MAAP: u8 = AVTP_CD_MASK | AVTP_SUBTYPE_CODE_MAAP; // 0xFE

// --- ADP ---

/// ADPDU body length following the control header.
pub const ADPDU_LENGTH: usize = 56;
/// Multicast destination for ADP messages.
pub const ADP_MULTICAST_MAC_ADDRESS: [u8; 6] = [0x91, 0xE0, 0xF0, 0x01, 0x00, 0x00];
/// Shift of the gPTP domain number inside its 32-bit word.
pub const ADP_GPTP_DOMAIN_NUMBER_SHIFT: u32 = 24;
/// Mask of the gPTP domain number after shifting.
pub const ADP_GPTP_DOMAIN_NUMBER_MASK: u32 = 0xFF;
/// Smallest valid_time (in 2-second units).
pub const ADP_MIN_VALID_TIME: u8 = 1;
/// Largest valid_time representable in the 5-bit status field.
pub const ADP_MAX_VALID_TIME: u8 = 31;
/// valid_time used when none is configured.
pub const ADP_DEFAULT_VALID_TIME: u8 = 31;

// --- ACMP ---

/// ACMPDU body length following the control header.
pub const ACMPDU_LENGTH: usize = 44;
/// Multicast destination for ACMP messages.
pub const ACMP_MULTICAST_MAC_ADDRESS: [u8; 6] = [0x91, 0xE0, 0xF0, 0x01, 0x00, 0x00];

// --- AECP ---

/// Bytes of the AECP common header after the control header (controller ID + sequence ID).
pub const AECPDU_HEADER_LENGTH: usize = 10;
/// AECP common header length counted from the target entity ID.
pub const AECPDU_COMMON_HEADER_LENGTH: usize = 20;
/// AEM sub-header length (unsolicited bit + command type).
pub const AEM_AECPDU_HEADER_LENGTH: usize = 2;
/// Mask of the unsolicited bit in the AEM sub-header.
pub const AEM_UNSOLICITED_MASK: u16 = 0x8000;
/// Mask of the 15-bit command type in the AEM sub-header.
pub const AEM_COMMAND_TYPE_MASK: u16 = 0x7FFF;

/// Maximum AECP control data length for IEEE 1722.1 legacy payloads.
pub const AECPDU_MAX_LEGACY_CONTROL_DATA_LENGTH: usize = 524;
/// Maximum AECP control data length when payloads grow up to the MTU.
pub const AECPDU_MAX_BIG_CONTROL_DATA_LENGTH: usize =
    ETHERNET_PAYLOAD_MTU - AVTP_CONTROL_HEADER_LENGTH;

/// Maximum legacy AEM payload.
pub const AEM_MAX_LEGACY_PAYLOAD_LENGTH: usize =
    AECPDU_MAX_LEGACY_CONTROL_DATA_LENGTH - AECPDU_HEADER_LENGTH - AEM_AECPDU_HEADER_LENGTH;
/// Maximum big AEM payload.
pub const AEM_MAX_BIG_PAYLOAD_LENGTH: usize =
    AECPDU_MAX_BIG_CONTROL_DATA_LENGTH - AECPDU_HEADER_LENGTH - AEM_AECPDU_HEADER_LENGTH;

/// Maximum AEM payload this build sends.
#[cfg(feature = "send-big-aecp-payloads")]
pub const AEM_MAX_SEND_PAYLOAD_LENGTH: usize = AEM_MAX_BIG_PAYLOAD_LENGTH;
/// Maximum AEM payload this build sends.
#[cfg(not(feature = "send-big-aecp-payloads"))]
pub const AEM_MAX_SEND_PAYLOAD_LENGTH: usize = AEM_MAX_LEGACY_PAYLOAD_LENGTH;

/// Maximum AEM payload this build accepts.
#[cfg(feature = "recv-big-aecp-payloads")]
pub const AEM_MAX_RECV_PAYLOAD_LENGTH: usize = AEM_MAX_BIG_PAYLOAD_LENGTH;
/// Maximum AEM payload this build accepts.
#[cfg(not(feature = "recv-big-aecp-payloads"))]
pub const AEM_MAX_RECV_PAYLOAD_LENGTH: usize = AEM_MAX_LEGACY_PAYLOAD_LENGTH;

// --- Address Access ---

/// AA sub-header length (TLV count).
pub const AA_AECPDU_HEADER_LENGTH: usize = 2;
/// TLV header length: mode/length word plus 64-bit address.
pub const AA_TLV_HEADER_LENGTH: usize = 10;
/// Largest TLV payload a TLV may be constructed with.
pub const AA_MAX_TLV_LENGTH: usize = 4096;
/// Largest TLV payload the 12-bit wire length field can carry.
pub const AA_MAX_WIRE_TLV_LENGTH: usize = 0x0FFF;
/// Shift of the 4-bit mode in the TLV mode/length word.
pub const AA_TLV_MODE_SHIFT: u16 = 12;
/// Mask of the 12-bit length in the TLV mode/length word.
pub const AA_TLV_LENGTH_MASK: u16 = 0x0FFF;
/// Maximum AA TLV data carried by one legacy AECPDU.
pub const AA_MAX_LEGACY_PAYLOAD_LENGTH: usize =
    AECPDU_MAX_LEGACY_CONTROL_DATA_LENGTH - AECPDU_HEADER_LENGTH - AA_AECPDU_HEADER_LENGTH;

// --- Entity model ---

/// Length of an AtdeccFixedString.
pub const FIXED_STRING_LENGTH: usize = 64;
/// Sentinel for "no descriptor index".
pub const INVALID_DESCRIPTOR_INDEX: u16 = 0xFFFF;
/// Number of counter slots carried by GET_COUNTERS.
pub const COUNTERS_COUNT: usize = 32;
/// Number of localized strings held by one STRINGS descriptor.
pub const STRINGS_PER_DESCRIPTOR: usize = 7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtype_bytes_carry_control_bit() {
        assert_eq!(AVTP_SUBTYPE_ADP, 0xFA);
        assert_eq!(AVTP_SUBTYPE_AECP, 0xFB);
        assert_eq!(AVTP_SUBTYPE_ACMP, 0xFC);
        assert_eq!(AVTP_SUBTYPE_MAAP, 0xFE);
    }

    #[test]
    fn aem_payload_maxima() {
        assert_eq!(AEM_MAX_LEGACY_PAYLOAD_LENGTH, 512);
        assert_eq!(AECPDU_MAX_BIG_CONTROL_DATA_LENGTH, 1488);
        assert_eq!(AEM_MAX_BIG_PAYLOAD_LENGTH, 1476);
        assert_eq!(AA_MAX_LEGACY_PAYLOAD_LENGTH, 512);
    }

    #[test]
    fn common_header_accounting() {
        // target ID (8) lives in the control header stream_id slot
        assert_eq!(
            AECPDU_COMMON_HEADER_LENGTH,
            8 + AECPDU_HEADER_LENGTH + 2
        );
    }
}

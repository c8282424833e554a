//! PDU codecs: ADP, ACMP, and the AEM and Address Access flavors of AECP.

pub mod aa_aecpdu;
pub mod acmpdu;
pub mod adpdu;
pub mod aecpdu;
pub mod aem_aecpdu;
pub mod defines;
pub mod pdu;
pub mod tlv;

pub use aa_aecpdu::AaAecpdu;
pub use acmpdu::{ACMP_MULTICAST_ADDRESS, Acmpdu};
pub use adpdu::{ADP_MULTICAST_ADDRESS, Adpdu};
pub use aecpdu::AecpHeader;
pub use aem_aecpdu::AemAecpdu;
pub use defines::*;
pub use pdu::{Atdeccpdu, decode_frame, encode_frame};
pub use tlv::Tlv;

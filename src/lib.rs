//! IEEE 1722.1 (ATDECC / AVDECC) protocol codec.
//!
//! Encodes and decodes the Ethernet frames of the ATDECC protocols: ADP
//! discovery, ACMP connection management, and the AEM and Address Access
//! flavors of AECP, including the catalogue of AEM command and response
//! payloads and the descriptor bodies carried by READ_DESCRIPTOR.
//!
//! ```
//! use atdecc::config::CodecConfig;
//! use atdecc::protocol::{decode_frame, encode_frame, Adpdu, Atdeccpdu};
//! use atdecc::types::MacAddress;
//! use atdecc::unique_identifier::UniqueIdentifier;
//!
//! let discover = Adpdu::entity_discover(
//!     MacAddress::new([0x00, 0x1B, 0x92, 0x00, 0x00, 0x01]),
//!     UniqueIdentifier::null(),
//! );
//! let frame = encode_frame(&Atdeccpdu::Adp(discover.clone())).unwrap();
//! let decoded = decode_frame(&frame, &CodecConfig::default()).unwrap();
//! assert_eq!(decoded, Atdeccpdu::Adp(discover));
//! ```

pub mod aem_payloads;
pub mod config;
pub mod constants;
pub mod entity;
pub mod entity_model;
pub mod error;
pub mod frame;
pub mod protocol;
pub mod serialization;
pub mod traits;
pub mod types;
pub mod unique_identifier;

pub use config::{CodecConfig, LengthPolicy};
pub use entity::{CommonInformation, Entity, InterfaceInformation};
pub use error::{AtdeccError, BuildingError, ParsingError};
pub use protocol::{
    AaAecpdu, Acmpdu, Adpdu, AemAecpdu, Atdeccpdu, Tlv, decode_frame, encode_frame,
};
pub use traits::Pdu;
pub use types::{
    AvailableIndex, ConfigurationIndex, DescriptorIndex, MacAddress, OperationId, SequenceId,
};
pub use unique_identifier::UniqueIdentifier;

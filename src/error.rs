//! ATDECC codec error types.
//!
//! Decoding failures are reported as [`ParsingError`], encoding failures as
//! [`BuildingError`]. [`AtdeccError`] wraps both and adds the semantic errors
//! raised when an operation is applied to a PDU in the wrong state (for example
//! building a response from something that is not a command).

use thiserror::Error;

use crate::entity_model::DescriptorType;
use crate::protocol::{AemCommandStatus, AemCommandType};

/// Errors that can occur while decoding ATDECC frames and payloads.
///
/// A decoder that returns one of these has not read past the end of its input;
/// the caller should drop the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    /// Insufficient data to read a complete field or structure.
    #[error("Incomplete data: needed {needed} bytes, got {got} for {context}")]
    NotEnoughData {
        needed: usize,
        got: usize,
        context: &'static str,
    },

    /// A field contained a value that is not allowed at this position.
    #[error("Invalid value for field '{field}' in {structure}: expected {expected:#X}, got {got:#X}")]
    InvalidFieldValue {
        field: &'static str,
        structure: &'static str,
        expected: u64,
        got: u64,
    },

    /// Cursor repositioning past the end of the buffer.
    #[error("Invalid cursor position {position} for buffer of {length} bytes")]
    InvalidPosition { position: usize, length: usize },

    /// A variable section offset points inside data that was already consumed.
    #[error("Invalid offset {offset} for {context}: {consumed} bytes already consumed")]
    InvalidOffset {
        context: &'static str,
        offset: usize,
        consumed: usize,
    },

    /// A variable section declares more elements than the buffer can hold.
    #[error(
        "Variable section overflow for {context}: {count} elements of {element_size} bytes, {available} bytes available"
    )]
    VariableSectionOverflow {
        context: &'static str,
        count: usize,
        element_size: usize,
        available: usize,
    },

    /// A declared length does not match the data that follows it.
    #[error("Length mismatch for {context}: declared {declared}, actual {actual}")]
    LengthMismatch {
        context: &'static str,
        declared: usize,
        actual: usize,
    },

    /// READ_DESCRIPTOR response for a descriptor type without a decoder.
    #[error("Unsupported descriptor type {descriptor_type:?}")]
    UnsupportedDescriptor { descriptor_type: DescriptorType },

    /// AEM payload too short for the command and reported status.
    #[error("Malformed {command:?} payload (status {status:?}): needed {needed} bytes, got {got}")]
    MalformedPayload {
        command: AemCommandType,
        status: AemCommandStatus,
        needed: usize,
        got: usize,
    },
}

/// Errors that can occur while encoding ATDECC frames and payloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildingError {
    /// The serializer does not have room for the value being written.
    #[error("Buffer too small: needed {needed} bytes, have {available} for {context}")]
    BufferTooSmall {
        needed: usize,
        available: usize,
        context: &'static str,
    },

    /// A payload exceeds the maximum length the protocol allows.
    #[error("Payload too large for {context}: {length} bytes, maximum {maximum}")]
    PayloadTooLarge {
        context: &'static str,
        length: usize,
        maximum: usize,
    },

    /// A field value cannot be represented on the wire.
    #[error("Invalid value for field '{field}' during building: {description}")]
    InvalidFieldValueForBuild {
        field: &'static str,
        description: String,
    },
}

/// Main error type for ATDECC codec operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtdeccError {
    /// Error while decoding.
    #[error("Parsing error: {0}")]
    Parsing(#[from] ParsingError),

    /// Error while encoding.
    #[error("Building error: {0}")]
    Building(#[from] BuildingError),

    /// Operation invalid for the current PDU state.
    #[error("Invalid state for {operation}: {description}")]
    InvalidState {
        operation: &'static str,
        description: String,
    },
}

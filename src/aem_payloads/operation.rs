//! Memory object operations: START_OPERATION, ABORT_OPERATION, OPERATION_STATUS
//! and SET/GET_MEMORY_OBJECT_LENGTH (clauses 7.4.53 to 7.4.55, 7.4.72, 7.4.73).

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::{DescriptorRef, PayloadCodec};
use crate::entity_model::MemoryObjectOperationType;
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer};
use crate::types::{ConfigurationIndex, DescriptorIndex, OperationId};

/// Percent complete value meaning the operation failed.
pub const OPERATION_FAILED: u16 = 0;
/// Percent complete value meaning progress is not reported.
pub const OPERATION_PROGRESS_UNKNOWN: u16 = 1000;

/// START_OPERATION command and response. `values` is operation specific.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StartOperationPayload {
    pub descriptor: DescriptorRef,
    /// Zero in the command, assigned by the entity in the response.
    pub operation_id: OperationId,
    pub operation_type: MemoryObjectOperationType,
    pub values: Bytes,
}

impl PayloadCodec for StartOperationPayload {
    const MIN_LENGTH: usize = 8;
    const FIXED: bool = false;

    fn wire_length(&self) -> usize {
        Self::MIN_LENGTH + self.values.len()
    }

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        self.descriptor.write(ser)?;
        ser.write(&self.operation_id)?;
        ser.write(&self.operation_type)?;
        ser.write_buffer(&self.values)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let descriptor = DescriptorRef::read(des)?;
        let operation_id = des.read()?;
        let operation_type = des.read()?;
        let values = des.read_bytes(des.remaining())?;
        Ok(Self {
            descriptor,
            operation_id,
            operation_type,
            values,
        })
    }
}

/// ABORT_OPERATION command and response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbortOperationPayload {
    pub descriptor: DescriptorRef,
    pub operation_id: OperationId,
}

impl PayloadCodec for AbortOperationPayload {
    const MIN_LENGTH: usize = 8;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        self.descriptor.write(ser)?;
        ser.write(&self.operation_id)?;
        ser.write(&0u16)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let descriptor = DescriptorRef::read(des)?;
        let operation_id = des.read()?;
        des.skip(2)?;
        Ok(Self {
            descriptor,
            operation_id,
        })
    }
}

/// OPERATION_STATUS unsolicited response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperationStatusPayload {
    pub descriptor: DescriptorRef,
    pub operation_id: OperationId,
    /// Tenths of a percent, or [`OPERATION_FAILED`] / [`OPERATION_PROGRESS_UNKNOWN`].
    pub percent_complete: u16,
}

impl PayloadCodec for OperationStatusPayload {
    const MIN_LENGTH: usize = 8;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        self.descriptor.write(ser)?;
        ser.write(&self.operation_id)?;
        ser.write(&self.percent_complete)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            descriptor: DescriptorRef::read(des)?,
            operation_id: des.read()?,
            percent_complete: des.read()?,
        })
    }
}

/// GET_MEMORY_OBJECT_LENGTH command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetMemoryObjectLengthCommandPayload {
    pub configuration_index: ConfigurationIndex,
    pub memory_object_index: DescriptorIndex,
}

impl PayloadCodec for GetMemoryObjectLengthCommandPayload {
    const MIN_LENGTH: usize = 4;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.configuration_index)?;
        ser.write(&self.memory_object_index)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            configuration_index: des.read()?,
            memory_object_index: des.read()?,
        })
    }
}

/// SET_MEMORY_OBJECT_LENGTH command and SET/GET responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoryObjectLengthPayload {
    pub configuration_index: ConfigurationIndex,
    pub memory_object_index: DescriptorIndex,
    pub length: u64,
}

impl PayloadCodec for MemoryObjectLengthPayload {
    const MIN_LENGTH: usize = 12;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.configuration_index)?;
        ser.write(&self.memory_object_index)?;
        ser.write(&self.length)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            configuration_index: des.read()?,
            memory_object_index: des.read()?,
            length: des.read()?,
        })
    }
}

//! SET/GET_NAME and SET/GET_ASSOCIATION_ID (clauses 7.4.17 to 7.4.20).

use serde::{Deserialize, Serialize};

use super::{DescriptorRef, PayloadCodec};
use crate::entity_model::AtdeccFixedString;
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer};
use crate::types::ConfigurationIndex;
use crate::unique_identifier::UniqueIdentifier;

/// GET_NAME command: which name of which descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetNameCommandPayload {
    pub descriptor: DescriptorRef,
    /// Index of the name field inside the descriptor, 0 for `object_name`.
    pub name_index: u16,
    pub configuration_index: ConfigurationIndex,
}

/// SET_NAME command and SET/GET_NAME responses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamePayload {
    pub descriptor: DescriptorRef,
    pub name_index: u16,
    pub configuration_index: ConfigurationIndex,
    pub name: AtdeccFixedString,
}

impl PayloadCodec for GetNameCommandPayload {
    const MIN_LENGTH: usize = 8;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        self.descriptor.write(ser)?;
        ser.write(&self.name_index)?;
        ser.write(&self.configuration_index)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            descriptor: DescriptorRef::read(des)?,
            name_index: des.read()?,
            configuration_index: des.read()?,
        })
    }
}

impl PayloadCodec for NamePayload {
    const MIN_LENGTH: usize = 72;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        self.descriptor.write(ser)?;
        ser.write(&self.name_index)?;
        ser.write(&self.configuration_index)?;
        ser.write(&self.name)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            descriptor: DescriptorRef::read(des)?,
            name_index: des.read()?,
            configuration_index: des.read()?,
            name: des.read()?,
        })
    }
}

/// Association ID of the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssociationIdPayload {
    pub association_id: UniqueIdentifier,
}

impl PayloadCodec for AssociationIdPayload {
    const MIN_LENGTH: usize = 8;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.association_id)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            association_id: des.read()?,
        })
    }
}

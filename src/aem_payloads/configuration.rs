//! SET_CONFIGURATION and GET_CONFIGURATION (clauses 7.4.7 and 7.4.8).

use serde::{Deserialize, Serialize};

use super::PayloadCodec;
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer};
use crate::types::ConfigurationIndex;

/// Reserved field followed by the configuration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigurationPayload {
    pub configuration_index: ConfigurationIndex,
}

impl ConfigurationPayload {
    pub fn new(configuration_index: ConfigurationIndex) -> Self {
        Self {
            configuration_index,
        }
    }
}

impl PayloadCodec for ConfigurationPayload {
    const MIN_LENGTH: usize = 4;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&0u16)?;
        ser.write(&self.configuration_index)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        des.skip(2)?;
        Ok(Self {
            configuration_index: des.read()?,
        })
    }
}

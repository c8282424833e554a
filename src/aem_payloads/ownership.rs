//! ACQUIRE_ENTITY and LOCK_ENTITY (clauses 7.4.1 and 7.4.2).

use serde::{Deserialize, Serialize};

use super::{DescriptorRef, PayloadCodec};
use crate::entity_model::{AcquireEntityFlags, LockEntityFlags};
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer};
use crate::unique_identifier::UniqueIdentifier;

/// ACQUIRE_ENTITY command and response: flags, owner, target descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AcquireEntityPayload {
    pub flags: AcquireEntityFlags,
    pub owner_id: UniqueIdentifier,
    pub descriptor: DescriptorRef,
}

/// LOCK_ENTITY command and response: flags, locking controller, target descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockEntityPayload {
    pub flags: LockEntityFlags,
    pub locked_id: UniqueIdentifier,
    pub descriptor: DescriptorRef,
}

impl PayloadCodec for AcquireEntityPayload {
    const MIN_LENGTH: usize = 16;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.flags)?;
        ser.write(&self.owner_id)?;
        self.descriptor.write(ser)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            flags: des.read()?,
            owner_id: des.read()?,
            descriptor: DescriptorRef::read(des)?,
        })
    }
}

impl PayloadCodec for LockEntityPayload {
    const MIN_LENGTH: usize = 16;

    fn write(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.flags)?;
        ser.write(&self.locked_id)?;
        self.descriptor.write(ser)
    }

    fn read(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            flags: des.read()?,
            locked_id: des.read()?,
            descriptor: DescriptorRef::read(des)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aem_payloads::{self, AcquireEntity, LockEntity, Reply};
    use crate::config::CodecConfig;
    use crate::entity_model::DescriptorType;
    use crate::protocol::AemCommandStatus;
    use crate::types::DescriptorIndex;

    #[test]
    fn acquire_layout() {
        let payload = AcquireEntityPayload {
            flags: AcquireEntityFlags::RELEASE,
            owner_id: UniqueIdentifier::new(0x0102_0304_0506_0708),
            descriptor: DescriptorRef::new(DescriptorType::Entity, DescriptorIndex::new(0)),
        };
        let bytes = aem_payloads::serialize_command::<AcquireEntity>(&payload).unwrap();
        assert_eq!(
            &bytes[..],
            &[0x80, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0]
        );
        let reply = aem_payloads::deserialize_response::<AcquireEntity>(
            AemCommandStatus::AcquiredByOther,
            &bytes,
            &CodecConfig::default(),
        )
        .unwrap();
        assert_eq!(reply, Reply::Full(payload));
    }

    #[test]
    fn lock_short_payload_is_malformed() {
        let result = aem_payloads::deserialize_response::<LockEntity>(
            AemCommandStatus::Success,
            &[0u8; 12],
            &CodecConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ParsingError::MalformedPayload { needed: 16, got: 12, .. })
        ));
    }
}

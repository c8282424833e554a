//! Message types and status codes of the ATDECC control protocols.
//!
//! Numbering follows IEEE 1722.1-2021. Status enums carry only wire values; a
//! status the entity reports that has no named variant decodes as `Unknown`.

use crate::types::wire_enum;

wire_enum! {
    /// ADP message type, carried in the AVTP control data field.
    pub enum AdpMessageType: u8, default EntityAvailable {
        EntityAvailable = 0x00,
        EntityDeparting = 0x01,
        EntityDiscover = 0x02,
    }
}

wire_enum! {
    /// ACMP message type, carried in the AVTP control data field.
    pub enum AcmpMessageType: u8, default ConnectTxCommand {
        ConnectTxCommand = 0,
        ConnectTxResponse = 1,
        DisconnectTxCommand = 2,
        DisconnectTxResponse = 3,
        GetTxStateCommand = 4,
        GetTxStateResponse = 5,
        ConnectRxCommand = 6,
        ConnectRxResponse = 7,
        DisconnectRxCommand = 8,
        DisconnectRxResponse = 9,
        GetRxStateCommand = 10,
        GetRxStateResponse = 11,
        GetTxConnectionCommand = 12,
        GetTxConnectionResponse = 13,
    }
}

impl AcmpMessageType {
    /// Whether this is a command (even values).
    pub fn is_command(self) -> bool {
        u8::from(self) % 2 == 0
    }

    /// Response paired with this command. Responses map to themselves.
    pub fn to_response(self) -> Self {
        let raw = u8::from(self);
        if raw % 2 == 0 && raw < 14 {
            Self::from(raw + 1)
        } else {
            self
        }
    }
}

wire_enum! {
    /// ACMP status code.
    pub enum AcmpStatus: u8, default Success {
        Success = 0,
        /// Listener does not have the specified unique identifier.
        ListenerUnknownId = 1,
        /// Talker does not have the specified unique identifier.
        TalkerUnknownId = 2,
        /// Talker could not allocate a destination MAC for the stream.
        TalkerDestMacFail = 3,
        /// Talker does not have an available stream index for the stream.
        TalkerNoStreamIndex = 4,
        /// Talker could not allocate bandwidth for the stream.
        TalkerNoBandwidth = 5,
        /// Talker already streams and supports only one listener.
        TalkerExclusive = 6,
        /// Listener timed out on all retries towards the talker.
        ListenerTalkerTimeout = 7,
        /// Listener already has an established connection.
        ListenerExclusive = 8,
        StateUnavailable = 9,
        NotConnected = 10,
        NoSuchConnection = 11,
        CouldNotSendMessage = 12,
        TalkerMisbehaving = 13,
        ListenerMisbehaving = 14,
        ControllerNotAuthorized = 16,
        IncompatibleRequest = 17,
        NotSupported = 31,
    }
}

wire_enum! {
    /// AECP message type, carried in the AVTP control data field.
    pub enum AecpMessageType: u8, default AemCommand {
        AemCommand = 0x00,
        AemResponse = 0x01,
        AddressAccessCommand = 0x02,
        AddressAccessResponse = 0x03,
        AvcCommand = 0x04,
        AvcResponse = 0x05,
        VendorUniqueCommand = 0x06,
        VendorUniqueResponse = 0x07,
        HdcpAemCommand = 0x08,
        HdcpAemResponse = 0x09,
        ExtendedCommand = 0x0E,
        ExtendedResponse = 0x0F,
    }
}

impl AecpMessageType {
    /// Whether this is a command (even values).
    pub fn is_command(self) -> bool {
        u8::from(self) % 2 == 0
    }

    /// Response paired with this command. Responses map to themselves.
    pub fn to_response(self) -> Self {
        let raw = u8::from(self);
        if raw % 2 == 0 {
            Self::from(raw | 0x01)
        } else {
            self
        }
    }
}

wire_enum! {
    /// AEM command status.
    pub enum AemCommandStatus: u8, default Success {
        Success = 0,
        /// The entity does not support the command type.
        NotImplemented = 1,
        NoSuchDescriptor = 2,
        LockedByOther = 3,
        AcquiredByOther = 4,
        NotAuthenticated = 5,
        AuthenticationDisabled = 6,
        BadArguments = 7,
        NoResources = 8,
        /// A second response follows later.
        InProgress = 9,
        EntityMisbehaving = 10,
        /// Command implemented but the target is not supported.
        NotSupported = 11,
        StreamIsRunning = 12,
    }
}

wire_enum! {
    /// Address Access command status.
    pub enum AaStatus: u8, default Success {
        Success = 0,
        NotImplemented = 1,
        AddressTooLow = 2,
        AddressTooHigh = 3,
        AddressInvalid = 4,
        /// No TLVs have been processed.
        TlvInvalid = 5,
        DataInvalid = 6,
        Unsupported = 7,
    }
}

wire_enum! {
    /// Address Access TLV mode.
    pub enum AaMode: u8, default Read {
        Read = 0x0,
        Write = 0x1,
        Execute = 0x2,
    }
}

wire_enum! {
    /// AEM command type (15 bits on the wire).
    pub enum AemCommandType: u16, default InvalidCommandType {
        AcquireEntity = 0x0000,
        LockEntity = 0x0001,
        EntityAvailable = 0x0002,
        ControllerAvailable = 0x0003,
        ReadDescriptor = 0x0004,
        WriteDescriptor = 0x0005,
        SetConfiguration = 0x0006,
        GetConfiguration = 0x0007,
        SetStreamFormat = 0x0008,
        GetStreamFormat = 0x0009,
        SetVideoFormat = 0x000A,
        GetVideoFormat = 0x000B,
        SetSensorFormat = 0x000C,
        GetSensorFormat = 0x000D,
        SetStreamInfo = 0x000E,
        GetStreamInfo = 0x000F,
        SetName = 0x0010,
        GetName = 0x0011,
        SetAssociationId = 0x0012,
        GetAssociationId = 0x0013,
        SetSamplingRate = 0x0014,
        GetSamplingRate = 0x0015,
        SetClockSource = 0x0016,
        GetClockSource = 0x0017,
        SetControl = 0x0018,
        GetControl = 0x0019,
        IncrementControl = 0x001A,
        DecrementControl = 0x001B,
        SetSignalSelector = 0x001C,
        GetSignalSelector = 0x001D,
        SetMixer = 0x001E,
        GetMixer = 0x001F,
        SetMatrix = 0x0020,
        GetMatrix = 0x0021,
        StartStreaming = 0x0022,
        StopStreaming = 0x0023,
        RegisterUnsolicitedNotification = 0x0024,
        DeregisterUnsolicitedNotification = 0x0025,
        IdentifyNotification = 0x0026,
        GetAvbInfo = 0x0027,
        GetAsPath = 0x0028,
        GetCounters = 0x0029,
        Reboot = 0x002A,
        GetAudioMap = 0x002B,
        AddAudioMappings = 0x002C,
        RemoveAudioMappings = 0x002D,
        GetVideoMap = 0x002E,
        AddVideoMappings = 0x002F,
        RemoveVideoMappings = 0x0030,
        GetSensorMap = 0x0031,
        AddSensorMappings = 0x0032,
        RemoveSensorMappings = 0x0033,
        StartOperation = 0x0034,
        AbortOperation = 0x0035,
        OperationStatus = 0x0036,
        AuthAddKey = 0x0037,
        AuthDeleteKey = 0x0038,
        AuthGetKeyList = 0x0039,
        AuthGetKey = 0x003A,
        AuthAddKeyToChain = 0x003B,
        AuthDeleteKeyFromChain = 0x003C,
        AuthGetKeychainList = 0x003D,
        AuthGetIdentity = 0x003E,
        AuthAddToken = 0x003F,
        AuthDeleteToken = 0x0040,
        Authenticate = 0x0041,
        Deauthenticate = 0x0042,
        EnableTransportSecurity = 0x0043,
        DisableTransportSecurity = 0x0044,
        EnableStreamEncryption = 0x0045,
        DisableStreamEncryption = 0x0046,
        SetMemoryObjectLength = 0x0047,
        GetMemoryObjectLength = 0x0048,
        SetStreamBackup = 0x0049,
        GetStreamBackup = 0x004A,
        Expansion = 0x7FFF,
        InvalidCommandType = 0xFFFF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_round_trip() {
        assert_eq!(AemCommandType::from(0x0004), AemCommandType::ReadDescriptor);
        assert_eq!(u16::from(AemCommandType::GetStreamBackup), 0x004A);
        assert_eq!(AcmpStatus::from(31), AcmpStatus::NotSupported);
        assert_eq!(AecpMessageType::from(0x0F), AecpMessageType::ExtendedResponse);
    }

    #[test]
    fn unknown_values_are_preserved() {
        assert_eq!(AcmpStatus::from(15), AcmpStatus::Unknown(15));
        assert_eq!(u8::from(AcmpStatus::Unknown(15)), 15);
        assert_eq!(AemCommandType::from(0x1234), AemCommandType::Unknown(0x1234));
    }

    #[test]
    fn response_pairing() {
        assert_eq!(
            AcmpMessageType::ConnectRxCommand.to_response(),
            AcmpMessageType::ConnectRxResponse
        );
        assert_eq!(
            AcmpMessageType::GetTxConnectionResponse.to_response(),
            AcmpMessageType::GetTxConnectionResponse
        );
        assert!(AecpMessageType::AddressAccessCommand.is_command());
        assert_eq!(
            AecpMessageType::AemCommand.to_response(),
            AecpMessageType::AemResponse
        );
        assert!(!AecpMessageType::AemResponse.is_command());
    }
}

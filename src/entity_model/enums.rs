//! Entity model enumerations.

use crate::types::wire_enum;

wire_enum! {
    /// Descriptor type (IEEE 1722.1 clause 7.2).
    pub enum DescriptorType: u16, default Invalid {
        Entity = 0x0000,
        Configuration = 0x0001,
        AudioUnit = 0x0002,
        VideoUnit = 0x0003,
        SensorUnit = 0x0004,
        StreamInput = 0x0005,
        StreamOutput = 0x0006,
        JackInput = 0x0007,
        JackOutput = 0x0008,
        AvbInterface = 0x0009,
        ClockSource = 0x000A,
        MemoryObject = 0x000B,
        Locale = 0x000C,
        Strings = 0x000D,
        StreamPortInput = 0x000E,
        StreamPortOutput = 0x000F,
        ExternalPortInput = 0x0010,
        ExternalPortOutput = 0x0011,
        InternalPortInput = 0x0012,
        InternalPortOutput = 0x0013,
        AudioCluster = 0x0014,
        VideoCluster = 0x0015,
        SensorCluster = 0x0016,
        AudioMap = 0x0017,
        VideoMap = 0x0018,
        SensorMap = 0x0019,
        Control = 0x001A,
        SignalSelector = 0x001B,
        Mixer = 0x001C,
        Matrix = 0x001D,
        MatrixSignal = 0x001E,
        SignalSplitter = 0x001F,
        SignalCombiner = 0x0020,
        SignalDemultiplexer = 0x0021,
        SignalMultiplexer = 0x0022,
        SignalTranscoder = 0x0023,
        ClockDomain = 0x0024,
        ControlBlock = 0x0025,
        Invalid = 0xFFFF,
    }
}

impl DescriptorType {
    /// Whether this is a named, non-invalid descriptor type.
    pub fn is_valid(self) -> bool {
        !matches!(self, DescriptorType::Invalid | DescriptorType::Unknown(_))
    }
}

wire_enum! {
    /// JACK descriptor jack type (clause 7.2.7.2).
    pub enum JackType: u16, default Speaker {
        Speaker = 0x0000,
        Headphone = 0x0001,
        AnalogMicrophone = 0x0002,
        Spdif = 0x0003,
        Adat = 0x0004,
        TdIf = 0x0005,
        Madi = 0x0006,
        UnbalancedAnalog = 0x0007,
        BalancedAnalog = 0x0008,
        Digital = 0x0009,
        Midi = 0x000A,
        AesEbu = 0x000B,
        CompositeVideo = 0x000C,
        SVhsVideo = 0x000D,
        ComponentVideo = 0x000E,
        Dvi = 0x000F,
        Hdmi = 0x0010,
        Udi = 0x0011,
        DisplayPort = 0x0012,
        Antenna = 0x0013,
        AnalogTuner = 0x0014,
        Ethernet = 0x0015,
        Wifi = 0x0016,
        Usb = 0x0017,
        Pci = 0x0018,
        PciE = 0x0019,
        Scsi = 0x001A,
        Ata = 0x001B,
        Imager = 0x001C,
        Ir = 0x001D,
        Thunderbolt = 0x001E,
        Sata = 0x001F,
        SmpteLtc = 0x0020,
        DigitalMicrophone = 0x0021,
        AudioMediaClock = 0x0022,
        VideoMediaClock = 0x0023,
        GnssClock = 0x0024,
        Pps = 0x0025,
        Expansion = 0xFFFF,
    }
}

wire_enum! {
    /// CLOCK_SOURCE descriptor type (clause 7.2.9.2).
    pub enum ClockSourceType: u16, default Internal {
        Internal = 0x0000,
        External = 0x0001,
        InputStream = 0x0002,
        Expansion = 0xFFFF,
    }
}

wire_enum! {
    /// MEMORY_OBJECT type (clause 7.2.10.1).
    pub enum MemoryObjectType: u16, default FirmwareImage {
        FirmwareImage = 0x0000,
        VendorSpecific = 0x0001,
        CrashDump = 0x0002,
        LogObject = 0x0003,
        AutostartSettings = 0x0004,
        SnapshotSettings = 0x0005,
        SvgManufacturer = 0x0006,
        SvgEntity = 0x0007,
        SvgGeneric = 0x0008,
        PngManufacturer = 0x0009,
        PngEntity = 0x000A,
        PngGeneric = 0x000B,
        DaeManufacturer = 0x000C,
        DaeEntity = 0x000D,
        DaeGeneric = 0x000E,
    }
}

wire_enum! {
    /// MEMORY_OBJECT operation type (clause 7.2.10.2).
    pub enum MemoryObjectOperationType: u16, default Store {
        Store = 0x0000,
        StoreAndReboot = 0x0001,
        Read = 0x0002,
        Erase = 0x0003,
        Upload = 0x0004,
    }
}

wire_enum! {
    /// AUDIO_CLUSTER format (clause 7.2.16.1).
    pub enum AudioClusterFormat: u8, default Iec60958 {
        Iec60958 = 0x00,
        Mbla = 0x40,
        Midi = 0x80,
        Smpte = 0x88,
    }
}

wire_enum! {
    /// MSRP failure code reported in stream info.
    pub enum MsrpFailureCode: u8, default NoFailure {
        NoFailure = 0,
        InsufficientBandwidth = 1,
        InsufficientResources = 2,
        InsufficientTrafficClassBandwidth = 3,
        StreamIdInUse = 4,
        StreamDestinationAddressInUse = 5,
        StreamPreemptedByHigherRank = 6,
        LatencyHasChanged = 7,
        EgressPortNotAvbCapable = 8,
        UseDifferentDestinationAddress = 9,
        OutOfMsrpResources = 10,
        OutOfMmrpResources = 11,
        CannotStoreDestinationAddress = 12,
        PriorityIsNotAnSrClass = 13,
        MaxFrameSizeTooLarge = 14,
        MaxFanInPortsLimitReached = 15,
        FirstValueChangedForStreamId = 16,
        VlanBlockedOnEgress = 17,
        VlanTaggingDisabledOnEgress = 18,
        SrClassPriorityMismatch = 19,
    }
}

wire_enum! {
    /// Milan stream input probing status (3 bits on the wire).
    pub enum ProbingStatus: u8, default Disabled {
        /// Not probing because the sink is not bound.
        Disabled = 0x00,
        /// Waiting until the bound talker has been discovered.
        Passive = 0x01,
        /// Querying the stream parameters from the talker.
        Active = 0x02,
        /// Settled.
        Completed = 0x03,
    }
}

wire_enum! {
    /// Value kind of a CONTROL descriptor (low 14 bits of the control value type).
    pub enum ControlValueKind: u16, default Expansion {
        LinearInt8 = 0x0000,
        LinearUInt8 = 0x0001,
        LinearInt16 = 0x0002,
        LinearUInt16 = 0x0003,
        LinearInt32 = 0x0004,
        LinearUInt32 = 0x0005,
        LinearInt64 = 0x0006,
        LinearUInt64 = 0x0007,
        LinearFloat = 0x0008,
        LinearDouble = 0x0009,
        SelectorInt8 = 0x000A,
        SelectorUInt8 = 0x000B,
        SelectorInt16 = 0x000C,
        SelectorUInt16 = 0x000D,
        SelectorInt32 = 0x000E,
        SelectorUInt32 = 0x000F,
        SelectorInt64 = 0x0010,
        SelectorUInt64 = 0x0011,
        SelectorFloat = 0x0012,
        SelectorDouble = 0x0013,
        SelectorString = 0x0014,
        ArrayInt8 = 0x0015,
        ArrayUInt8 = 0x0016,
        ArrayInt16 = 0x0017,
        ArrayUInt16 = 0x0018,
        ArrayInt32 = 0x0019,
        ArrayUInt32 = 0x001A,
        ArrayInt64 = 0x001B,
        ArrayUInt64 = 0x001C,
        ArrayFloat = 0x001D,
        ArrayDouble = 0x001E,
        Utf8 = 0x001F,
        BodePlot = 0x0020,
        SmpteTime = 0x0021,
        SampleRate = 0x0022,
        GptpTime = 0x0023,
        Vendor = 0x3FFE,
        Expansion = 0x3FFF,
    }
}

wire_enum! {
    /// Unit code of a control value unit (clause 7.3.3).
    pub enum ControlUnitCode: u8, default Unitless {
        Unitless = 0x00,
        Count = 0x01,
        Percent = 0x02,
        FStop = 0x03,
        Seconds = 0x08,
        Minutes = 0x09,
        Hours = 0x0A,
        Days = 0x0B,
        Months = 0x0C,
        Years = 0x0D,
        Samples = 0x0E,
        Frames = 0x0F,
        Hertz = 0x10,
        Semitones = 0x11,
        Cents = 0x12,
        Octaves = 0x13,
        Fps = 0x14,
        Metres = 0x18,
        Kelvin = 0x20,
        Grams = 0x28,
        Volts = 0x30,
        Dbv = 0x31,
        Dbu = 0x32,
        Amps = 0x38,
        Watts = 0x40,
        Dbm = 0x41,
        Dbw = 0x42,
        Pascals = 0x48,
        Bits = 0x50,
        Bytes = 0x51,
        KibiBytes = 0x52,
        MebiBytes = 0x53,
        GibiBytes = 0x54,
        TebiBytes = 0x55,
        BitsPerSec = 0x58,
        BytesPerSec = 0x59,
        KibiBytesPerSec = 0x5A,
        MebiBytesPerSec = 0x5B,
        GibiBytesPerSec = 0x5C,
        TebiBytesPerSec = 0x5D,
        Candelas = 0x60,
        Joules = 0x68,
        Radians = 0x70,
        Newtons = 0x78,
        Ohms = 0x80,
        MetresPerSec = 0x88,
        RadiansPerSec = 0x89,
        MetresPerSecSquared = 0x90,
        RadiansPerSecSquared = 0x91,
        Teslas = 0x98,
        Webers = 0x99,
        AmpsPerMetre = 0x9A,
        MetresSquared = 0xA0,
        MetresCubed = 0xA8,
        Litres = 0xA9,
        Db = 0xB0,
        DbPeak = 0xB1,
        DbRms = 0xB2,
        Dbfs = 0xB3,
        DbfsPeak = 0xB4,
        DbfsRms = 0xB5,
        Dbtp = 0xB6,
        DbSplA = 0xB7,
        DbZ = 0xB8,
        DbSplC = 0xB9,
        DbSpl = 0xBA,
        Lu = 0xBB,
        Lufs = 0xBC,
        DbA = 0xBD,
    }
}

wire_enum! {
    /// Standard control types (clause 7.3.4), carried as the 64-bit control_type.
    pub enum StandardControlType: u64, default Enable {
        Enable = 0x90E0_F000_0000_0000,
        Identify = 0x90E0_F000_0000_0001,
        Mute = 0x90E0_F000_0000_0002,
        Invert = 0x90E0_F000_0000_0003,
        Gain = 0x90E0_F000_0000_0004,
        Attenuate = 0x90E0_F000_0000_0005,
        Delay = 0x90E0_F000_0000_0006,
        SrcMode = 0x90E0_F000_0000_0007,
        Snapshot = 0x90E0_F000_0000_0008,
        PowLineFreq = 0x90E0_F000_0000_0009,
        PowerStatus = 0x90E0_F000_0000_000A,
        FanStatus = 0x90E0_F000_0000_000B,
        Temperature = 0x90E0_F000_0000_000C,
        Altitude = 0x90E0_F000_0000_000D,
        AbsoluteHumidity = 0x90E0_F000_0000_000E,
        RelativeHumidity = 0x90E0_F000_0000_000F,
        Orientation = 0x90E0_F000_0000_0010,
        Velocity = 0x90E0_F000_0000_0011,
        Acceleration = 0x90E0_F000_0000_0012,
        FilterResponse = 0x90E0_F000_0000_0013,
        Panpot = 0x90E0_F000_0001_0000,
        Phantom = 0x90E0_F000_0001_0001,
        AudioScale = 0x90E0_F000_0001_0002,
        AudioMeters = 0x90E0_F000_0001_0003,
        AudioSpectrum = 0x90E0_F000_0001_0004,
        ScanningMode = 0x90E0_F000_0002_0000,
        AutoExpMode = 0x90E0_F000_0002_0001,
        AutoExpPrio = 0x90E0_F000_0002_0002,
        ExpTime = 0x90E0_F000_0002_0003,
        Focus = 0x90E0_F000_0002_0004,
        FocusAuto = 0x90E0_F000_0002_0005,
        Iris = 0x90E0_F000_0002_0006,
        Zoom = 0x90E0_F000_0002_0007,
        Privacy = 0x90E0_F000_0002_0008,
        Backlight = 0x90E0_F000_0002_0009,
        Brightness = 0x90E0_F000_0002_000A,
        Contrast = 0x90E0_F000_0002_000B,
        Hue = 0x90E0_F000_0002_000C,
        Saturation = 0x90E0_F000_0002_000D,
        Sharpness = 0x90E0_F000_0002_000E,
        Gamma = 0x90E0_F000_0002_000F,
        WhiteBalTemp = 0x90E0_F000_0002_0010,
        WhiteBalTempAuto = 0x90E0_F000_0002_0011,
        WhiteBalComp = 0x90E0_F000_0002_0012,
        WhiteBalCompAuto = 0x90E0_F000_0002_0013,
        DigitalZoom = 0x90E0_F000_0002_0014,
        MediaPlaylist = 0x90E0_F000_0003_0000,
        MediaPlaylistName = 0x90E0_F000_0003_0001,
        MediaDisk = 0x90E0_F000_0003_0002,
        MediaDiskName = 0x90E0_F000_0003_0003,
        MediaTrack = 0x90E0_F000_0003_0004,
        MediaTrackName = 0x90E0_F000_0003_0005,
        MediaSpeed = 0x90E0_F000_0003_0006,
        MediaSamplePosition = 0x90E0_F000_0003_0007,
        MediaPlaybackTransport = 0x90E0_F000_0003_0008,
        MediaRecordTransport = 0x90E0_F000_0003_0009,
        Frequency = 0x90E0_F000_0004_0000,
        Modulation = 0x90E0_F000_0004_0001,
        Polarization = 0x90E0_F000_0004_0002,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_type_validity() {
        assert!(DescriptorType::StreamInput.is_valid());
        assert!(!DescriptorType::Invalid.is_valid());
        assert!(!DescriptorType::from(0x0100).is_valid());
        assert_eq!(DescriptorType::default(), DescriptorType::Invalid);
    }

    #[test]
    fn control_types_use_the_standard_oui() {
        assert_eq!(u64::from(StandardControlType::Identify), 0x90E0_F000_0000_0001);
        assert_eq!(
            StandardControlType::from(0x90E0_F000_0001_0001),
            StandardControlType::Phantom
        );
    }

    #[test]
    fn control_value_kind_unknown_codes() {
        assert_eq!(ControlValueKind::from(0x001F), ControlValueKind::Utf8);
        assert_eq!(ControlValueKind::from(0x0100), ControlValueKind::Unknown(0x0100));
    }
}

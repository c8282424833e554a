//! Descriptor data shapes (IEEE 1722.1 clause 7.2).
//!
//! Plain aggregates, one per descriptor kind. Variable-length trailing sections
//! are owned collections here; their count and offset fields only exist on the
//! wire and are derived when serializing.

use serde::{Deserialize, Serialize};

use super::control_values::ControlValues;
use super::enums::{AudioClusterFormat, ClockSourceType, DescriptorType, JackType, MemoryObjectType};
use super::flags::{
    AvbInterfaceFlags, ClockSourceFlags, ControllerCapabilities, EntityCapabilities, JackFlags,
    ListenerCapabilities, PortFlags, StreamFlags, TalkerCapabilities,
};
use super::values::{
    AtdeccFixedString, AudioMapping, ControlValueType, LocalizedStringReference, SamplingRate,
    StreamFormat, StreamIdentification,
};
use crate::constants::STRINGS_PER_DESCRIPTOR;
use crate::serialization::WireValue;
use crate::types::{AvailableIndex, ConfigurationIndex, DescriptorIndex, MacAddress};
use crate::unique_identifier::UniqueIdentifier;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityDescriptor {
    pub entity_id: UniqueIdentifier,
    pub entity_model_id: UniqueIdentifier,
    pub entity_capabilities: EntityCapabilities,
    pub talker_stream_sources: u16,
    pub talker_capabilities: TalkerCapabilities,
    pub listener_stream_sinks: u16,
    pub listener_capabilities: ListenerCapabilities,
    pub controller_capabilities: ControllerCapabilities,
    pub available_index: AvailableIndex,
    pub association_id: UniqueIdentifier,
    pub entity_name: AtdeccFixedString,
    pub vendor_name_string: LocalizedStringReference,
    pub model_name_string: LocalizedStringReference,
    pub firmware_version: AtdeccFixedString,
    pub group_name: AtdeccFixedString,
    pub serial_number: AtdeccFixedString,
    pub configurations_count: u16,
    pub current_configuration: ConfigurationIndex,
}

/// Number of descriptors of one type in a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DescriptorCount {
    pub descriptor_type: DescriptorType,
    pub count: u16,
}

impl WireValue for DescriptorCount {
    const WIRE_SIZE: usize = 4;

    fn put<B: bytes::BufMut>(&self, buf: &mut B) {
        self.descriptor_type.put(buf);
        self.count.put(buf);
    }

    fn get<B: bytes::Buf>(buf: &mut B) -> Self {
        Self {
            descriptor_type: DescriptorType::get(buf),
            count: u16::get(buf),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigurationDescriptor {
    pub object_name: AtdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub descriptor_counts: Vec<DescriptorCount>,
}

impl ConfigurationDescriptor {
    /// Count for `descriptor_type`, zero when absent.
    pub fn count_of(&self, descriptor_type: DescriptorType) -> u16 {
        self.descriptor_counts
            .iter()
            .find(|entry| entry.descriptor_type == descriptor_type)
            .map_or(0, |entry| entry.count)
    }
}

/// Number of child descriptors and index of the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DescriptorRange {
    pub count: u16,
    pub base: DescriptorIndex,
}

impl WireValue for DescriptorRange {
    const WIRE_SIZE: usize = 4;

    fn put<B: bytes::BufMut>(&self, buf: &mut B) {
        self.count.put(buf);
        self.base.put(buf);
    }

    fn get<B: bytes::Buf>(buf: &mut B) -> Self {
        Self {
            count: u16::get(buf),
            base: DescriptorIndex::get(buf),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioUnitDescriptor {
    pub object_name: AtdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub clock_domain_index: DescriptorIndex,
    pub stream_input_ports: DescriptorRange,
    pub stream_output_ports: DescriptorRange,
    pub external_input_ports: DescriptorRange,
    pub external_output_ports: DescriptorRange,
    pub internal_input_ports: DescriptorRange,
    pub internal_output_ports: DescriptorRange,
    pub controls: DescriptorRange,
    pub signal_selectors: DescriptorRange,
    pub mixers: DescriptorRange,
    pub matrices: DescriptorRange,
    pub splitters: DescriptorRange,
    pub combiners: DescriptorRange,
    pub demultiplexers: DescriptorRange,
    pub multiplexers: DescriptorRange,
    pub transcoders: DescriptorRange,
    pub control_blocks: DescriptorRange,
    pub current_sampling_rate: SamplingRate,
    pub sampling_rates: Vec<SamplingRate>,
}

impl WireValue for StreamIdentification {
    const WIRE_SIZE: usize = 10;

    fn put<B: bytes::BufMut>(&self, buf: &mut B) {
        self.entity_id.put(buf);
        self.stream_index.put(buf);
    }

    fn get<B: bytes::Buf>(buf: &mut B) -> Self {
        Self {
            entity_id: UniqueIdentifier::get(buf),
            stream_index: DescriptorIndex::get(buf),
        }
    }
}

/// STREAM_INPUT / STREAM_OUTPUT descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub object_name: AtdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub clock_domain_index: DescriptorIndex,
    pub stream_flags: StreamFlags,
    pub current_format: StreamFormat,
    pub backup_talkers: [StreamIdentification; 3],
    pub backedup_talker: StreamIdentification,
    pub avb_interface_index: DescriptorIndex,
    pub buffer_length: u32,
    pub formats: Vec<StreamFormat>,
    /// Network redundancy extension; empty when the block is absent.
    pub redundant_streams: Vec<DescriptorIndex>,
}

/// JACK_INPUT / JACK_OUTPUT descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JackDescriptor {
    pub object_name: AtdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub jack_flags: JackFlags,
    pub jack_type: JackType,
    pub controls: DescriptorRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvbInterfaceDescriptor {
    pub object_name: AtdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub mac_address: MacAddress,
    pub interface_flags: AvbInterfaceFlags,
    pub clock_identity: UniqueIdentifier,
    pub priority1: u8,
    pub clock_class: u8,
    pub offset_scaled_log_variance: u16,
    pub clock_accuracy: u8,
    pub priority2: u8,
    pub domain_number: u8,
    pub log_sync_interval: i8,
    pub log_announce_interval: i8,
    pub log_pdelay_interval: i8,
    pub port_number: u16,
}

impl Default for AvbInterfaceDescriptor {
    fn default() -> Self {
        Self {
            object_name: AtdeccFixedString::default(),
            localized_description: LocalizedStringReference::default(),
            mac_address: MacAddress::NULL,
            interface_flags: AvbInterfaceFlags::NONE,
            clock_identity: UniqueIdentifier::default(),
            priority1: 0xFF,
            clock_class: 0xFF,
            offset_scaled_log_variance: 0,
            clock_accuracy: 0xFF,
            priority2: 0xFF,
            domain_number: 0,
            log_sync_interval: 0,
            log_announce_interval: 0,
            log_pdelay_interval: 0,
            port_number: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockSourceDescriptor {
    pub object_name: AtdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub clock_source_flags: ClockSourceFlags,
    pub clock_source_type: ClockSourceType,
    pub clock_source_identifier: UniqueIdentifier,
    pub clock_source_location_type: DescriptorType,
    pub clock_source_location_index: DescriptorIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoryObjectDescriptor {
    pub object_name: AtdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub memory_object_type: MemoryObjectType,
    pub target_descriptor_type: DescriptorType,
    pub target_descriptor_index: DescriptorIndex,
    pub start_address: u64,
    pub maximum_length: u64,
    pub length: u64,
    /// Added by the 2021 corrigendum; older entities omit it.
    pub maximum_segment_length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocaleDescriptor {
    pub locale_id: AtdeccFixedString,
    pub number_of_string_descriptors: u16,
    pub base_string_descriptor_index: DescriptorIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StringsDescriptor {
    pub strings: [AtdeccFixedString; STRINGS_PER_DESCRIPTOR],
}

/// STREAM_PORT_INPUT / STREAM_PORT_OUTPUT descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamPortDescriptor {
    pub clock_domain_index: DescriptorIndex,
    pub port_flags: PortFlags,
    pub controls: DescriptorRange,
    pub clusters: DescriptorRange,
    pub maps: DescriptorRange,
}

/// EXTERNAL_PORT_* and INTERNAL_PORT_* descriptors. `port_index` is the jack
/// index for external ports and the internal index for internal ports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortDescriptor {
    pub clock_domain_index: DescriptorIndex,
    pub port_flags: PortFlags,
    pub controls: DescriptorRange,
    pub signal_type: DescriptorType,
    pub signal_index: DescriptorIndex,
    pub signal_output: u16,
    pub block_latency: u32,
    pub port_index: DescriptorIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioClusterDescriptor {
    pub object_name: AtdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub signal_type: DescriptorType,
    pub signal_index: DescriptorIndex,
    pub signal_output: u16,
    pub path_latency: u32,
    pub block_latency: u32,
    pub channel_count: u16,
    pub format: AudioClusterFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioMapDescriptor {
    pub mappings: Vec<AudioMapping>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlDescriptor {
    pub object_name: AtdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub block_latency: u32,
    pub control_latency: u32,
    pub control_domain: u16,
    pub control_value_type: ControlValueType,
    pub control_type: UniqueIdentifier,
    pub reset_time: u32,
    pub signal_type: DescriptorType,
    pub signal_index: DescriptorIndex,
    pub signal_output: u16,
    pub values: ControlValues,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockDomainDescriptor {
    pub object_name: AtdeccFixedString,
    pub localized_description: LocalizedStringReference,
    pub clock_source_index: DescriptorIndex,
    pub clock_sources: Vec<DescriptorIndex>,
}

/// Any descriptor the READ_DESCRIPTOR codec handles, tagged with its type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Descriptor {
    Entity(EntityDescriptor),
    Configuration(ConfigurationDescriptor),
    AudioUnit(AudioUnitDescriptor),
    StreamInput(StreamDescriptor),
    StreamOutput(StreamDescriptor),
    JackInput(JackDescriptor),
    JackOutput(JackDescriptor),
    AvbInterface(AvbInterfaceDescriptor),
    ClockSource(ClockSourceDescriptor),
    MemoryObject(MemoryObjectDescriptor),
    Locale(LocaleDescriptor),
    Strings(StringsDescriptor),
    StreamPortInput(StreamPortDescriptor),
    StreamPortOutput(StreamPortDescriptor),
    ExternalPortInput(PortDescriptor),
    ExternalPortOutput(PortDescriptor),
    InternalPortInput(PortDescriptor),
    InternalPortOutput(PortDescriptor),
    AudioCluster(AudioClusterDescriptor),
    AudioMap(AudioMapDescriptor),
    Control(ControlDescriptor),
    ClockDomain(ClockDomainDescriptor),
}

impl Descriptor {
    /// Descriptor type carried on the wire.
    pub fn descriptor_type(&self) -> DescriptorType {
        match self {
            Self::Entity(_) => DescriptorType::Entity,
            Self::Configuration(_) => DescriptorType::Configuration,
            Self::AudioUnit(_) => DescriptorType::AudioUnit,
            Self::StreamInput(_) => DescriptorType::StreamInput,
            Self::StreamOutput(_) => DescriptorType::StreamOutput,
            Self::JackInput(_) => DescriptorType::JackInput,
            Self::JackOutput(_) => DescriptorType::JackOutput,
            Self::AvbInterface(_) => DescriptorType::AvbInterface,
            Self::ClockSource(_) => DescriptorType::ClockSource,
            Self::MemoryObject(_) => DescriptorType::MemoryObject,
            Self::Locale(_) => DescriptorType::Locale,
            Self::Strings(_) => DescriptorType::Strings,
            Self::StreamPortInput(_) => DescriptorType::StreamPortInput,
            Self::StreamPortOutput(_) => DescriptorType::StreamPortOutput,
            Self::ExternalPortInput(_) => DescriptorType::ExternalPortInput,
            Self::ExternalPortOutput(_) => DescriptorType::ExternalPortOutput,
            Self::InternalPortInput(_) => DescriptorType::InternalPortInput,
            Self::InternalPortOutput(_) => DescriptorType::InternalPortOutput,
            Self::AudioCluster(_) => DescriptorType::AudioCluster,
            Self::AudioMap(_) => DescriptorType::AudioMap,
            Self::Control(_) => DescriptorType::Control,
            Self::ClockDomain(_) => DescriptorType::ClockDomain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{Deserializer, Serializer};

    #[test]
    fn configuration_counts_lookup() {
        let config = ConfigurationDescriptor {
            descriptor_counts: vec![
                DescriptorCount {
                    descriptor_type: DescriptorType::StreamInput,
                    count: 2,
                },
                DescriptorCount {
                    descriptor_type: DescriptorType::AvbInterface,
                    count: 1,
                },
            ],
            ..ConfigurationDescriptor::default()
        };
        assert_eq!(config.count_of(DescriptorType::StreamInput), 2);
        assert_eq!(config.count_of(DescriptorType::Control), 0);
    }

    #[test]
    fn stream_identification_layout() {
        let id = StreamIdentification {
            entity_id: UniqueIdentifier::new(0x0102_0304_0506_0708),
            stream_index: DescriptorIndex::new(9),
        };
        let mut ser = Serializer::new(10);
        ser.write(&id).unwrap();
        assert_eq!(ser.data(), &[1, 2, 3, 4, 5, 6, 7, 8, 0, 9]);
        assert_eq!(Deserializer::new(ser.data()).read::<StreamIdentification>().unwrap(), id);
    }

    #[test]
    fn descriptor_tags() {
        assert_eq!(
            Descriptor::StreamOutput(StreamDescriptor::default()).descriptor_type(),
            DescriptorType::StreamOutput
        );
        assert_eq!(
            Descriptor::InternalPortInput(PortDescriptor::default()).descriptor_type(),
            DescriptorType::InternalPortInput
        );
    }

    #[test]
    fn avb_interface_defaults_match_gptp() {
        let descriptor = AvbInterfaceDescriptor::default();
        assert_eq!(descriptor.priority1, 0xFF);
        assert_eq!(descriptor.clock_accuracy, 0xFF);
        assert_eq!(descriptor.domain_number, 0);
    }
}

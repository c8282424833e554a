//! Entity and configuration tree aggregates.
//!
//! Each node keeps a static model (fields fixed for the lifetime of the entity)
//! and a dynamic model (fields commands can change). Decoded descriptors are
//! split into both halves by [`ConfigurationTree::apply_descriptor`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::control_values::ControlValues;
use super::descriptors::{
    AudioClusterDescriptor, AudioMapDescriptor, AudioUnitDescriptor, AvbInterfaceDescriptor,
    ClockDomainDescriptor, ClockSourceDescriptor, ConfigurationDescriptor, ControlDescriptor,
    Descriptor, DescriptorCount, DescriptorRange, EntityDescriptor, JackDescriptor,
    LocaleDescriptor, MemoryObjectDescriptor, PortDescriptor, StreamDescriptor,
    StreamPortDescriptor, StringsDescriptor,
};
use super::enums::{ClockSourceType, DescriptorType, JackType, MemoryObjectType};
use super::flags::{ClockSourceFlags, JackFlags, StreamFlags};
use super::values::{
    AtdeccFixedString, AudioMapping, ControlValueType, LocalizedStringReference, SamplingRate,
    StreamFormat, StreamIdentification,
};
use crate::error::AtdeccError;
use crate::types::{ConfigurationIndex, DescriptorIndex};
use crate::unique_identifier::UniqueIdentifier;

/// Static and dynamic halves of one node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeModels<S, D> {
    pub static_model: S,
    pub dynamic_model: D,
}

/// Dynamic model of nodes whose only mutable field is their name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamedDynamicModel {
    pub object_name: AtdeccFixedString,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioUnitStaticModel {
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
    pub sampling_rates: Vec<SamplingRate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioUnitDynamicModel {
    pub object_name: AtdeccFixedString,
    pub current_sampling_rate: SamplingRate,
}

impl From<AudioUnitDescriptor> for NodeModels<AudioUnitStaticModel, AudioUnitDynamicModel> {
    fn from(d: AudioUnitDescriptor) -> Self {
        Self {
            static_model: AudioUnitStaticModel {
                localized_description: d.localized_description,
                clock_domain_index: d.clock_domain_index,
                stream_input_ports: d.stream_input_ports,
                stream_output_ports: d.stream_output_ports,
                external_input_ports: d.external_input_ports,
                external_output_ports: d.external_output_ports,
                internal_input_ports: d.internal_input_ports,
                internal_output_ports: d.internal_output_ports,
                controls: d.controls,
                signal_selectors: d.signal_selectors,
                mixers: d.mixers,
                matrices: d.matrices,
                splitters: d.splitters,
                combiners: d.combiners,
                demultiplexers: d.demultiplexers,
                multiplexers: d.multiplexers,
                transcoders: d.transcoders,
                control_blocks: d.control_blocks,
                sampling_rates: d.sampling_rates,
            },
            dynamic_model: AudioUnitDynamicModel {
                object_name: d.object_name,
                current_sampling_rate: d.current_sampling_rate,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamStaticModel {
    pub localized_description: LocalizedStringReference,
    pub clock_domain_index: DescriptorIndex,
    pub stream_flags: StreamFlags,
    pub backup_talkers: [StreamIdentification; 3],
    pub backedup_talker: StreamIdentification,
    pub avb_interface_index: DescriptorIndex,
    pub buffer_length: u32,
    pub formats: Vec<StreamFormat>,
    pub redundant_streams: Vec<DescriptorIndex>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamDynamicModel {
    pub object_name: AtdeccFixedString,
    pub stream_format: StreamFormat,
    pub is_running: bool,
}

impl From<StreamDescriptor> for NodeModels<StreamStaticModel, StreamDynamicModel> {
    fn from(d: StreamDescriptor) -> Self {
        Self {
            static_model: StreamStaticModel {
                localized_description: d.localized_description,
                clock_domain_index: d.clock_domain_index,
                stream_flags: d.stream_flags,
                backup_talkers: d.backup_talkers,
                backedup_talker: d.backedup_talker,
                avb_interface_index: d.avb_interface_index,
                buffer_length: d.buffer_length,
                formats: d.formats,
                redundant_streams: d.redundant_streams,
            },
            dynamic_model: StreamDynamicModel {
                object_name: d.object_name,
                stream_format: d.current_format,
                is_running: false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JackStaticModel {
    pub localized_description: LocalizedStringReference,
    pub jack_flags: JackFlags,
    pub jack_type: JackType,
    pub controls: DescriptorRange,
}

impl From<JackDescriptor> for NodeModels<JackStaticModel, NamedDynamicModel> {
    fn from(d: JackDescriptor) -> Self {
        Self {
            static_model: JackStaticModel {
                localized_description: d.localized_description,
                jack_flags: d.jack_flags,
                jack_type: d.jack_type,
                controls: d.controls,
            },
            dynamic_model: NamedDynamicModel {
                object_name: d.object_name,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvbInterfaceDynamicModel {
    pub object_name: AtdeccFixedString,
    pub gptp_grandmaster_id: UniqueIdentifier,
    pub gptp_domain_number: u8,
    pub as_path: Vec<UniqueIdentifier>,
}

/// AVB interface static model: the descriptor without its name.
pub type AvbInterfaceStaticModel = AvbInterfaceDescriptor;

impl From<AvbInterfaceDescriptor> for NodeModels<AvbInterfaceStaticModel, AvbInterfaceDynamicModel> {
    fn from(mut d: AvbInterfaceDescriptor) -> Self {
        let object_name = std::mem::take(&mut d.object_name);
        let gptp_domain_number = d.domain_number;
        Self {
            static_model: d,
            dynamic_model: AvbInterfaceDynamicModel {
                object_name,
                gptp_domain_number,
                ..AvbInterfaceDynamicModel::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockSourceStaticModel {
    pub localized_description: LocalizedStringReference,
    pub clock_source_type: ClockSourceType,
    pub clock_source_location_type: DescriptorType,
    pub clock_source_location_index: DescriptorIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockSourceDynamicModel {
    pub object_name: AtdeccFixedString,
    pub clock_source_flags: ClockSourceFlags,
    pub clock_source_identifier: UniqueIdentifier,
}

impl From<ClockSourceDescriptor> for NodeModels<ClockSourceStaticModel, ClockSourceDynamicModel> {
    fn from(d: ClockSourceDescriptor) -> Self {
        Self {
            static_model: ClockSourceStaticModel {
                localized_description: d.localized_description,
                clock_source_type: d.clock_source_type,
                clock_source_location_type: d.clock_source_location_type,
                clock_source_location_index: d.clock_source_location_index,
            },
            dynamic_model: ClockSourceDynamicModel {
                object_name: d.object_name,
                clock_source_flags: d.clock_source_flags,
                clock_source_identifier: d.clock_source_identifier,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoryObjectStaticModel {
    pub localized_description: LocalizedStringReference,
    pub memory_object_type: MemoryObjectType,
    pub target_descriptor_type: DescriptorType,
    pub target_descriptor_index: DescriptorIndex,
    pub start_address: u64,
    pub maximum_length: u64,
    pub maximum_segment_length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoryObjectDynamicModel {
    pub object_name: AtdeccFixedString,
    pub length: u64,
}

impl From<MemoryObjectDescriptor> for NodeModels<MemoryObjectStaticModel, MemoryObjectDynamicModel> {
    fn from(d: MemoryObjectDescriptor) -> Self {
        Self {
            static_model: MemoryObjectStaticModel {
                localized_description: d.localized_description,
                memory_object_type: d.memory_object_type,
                target_descriptor_type: d.target_descriptor_type,
                target_descriptor_index: d.target_descriptor_index,
                start_address: d.start_address,
                maximum_length: d.maximum_length,
                maximum_segment_length: d.maximum_segment_length,
            },
            dynamic_model: MemoryObjectDynamicModel {
                object_name: d.object_name,
                length: d.length,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamPortDynamicModel {
    pub dynamic_audio_map: Vec<AudioMapping>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlStaticModel {
    pub localized_description: LocalizedStringReference,
    pub block_latency: u32,
    pub control_latency: u32,
    pub control_domain: u16,
    pub control_type: UniqueIdentifier,
    pub reset_time: u32,
    pub signal_type: DescriptorType,
    pub signal_index: DescriptorIndex,
    pub signal_output: u16,
    pub control_value_type: ControlValueType,
    pub values: ControlValues,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlDynamicModel {
    pub object_name: AtdeccFixedString,
    pub values: ControlValues,
}

impl From<ControlDescriptor> for NodeModels<ControlStaticModel, ControlDynamicModel> {
    fn from(d: ControlDescriptor) -> Self {
        let current = d.values.to_dynamic();
        Self {
            static_model: ControlStaticModel {
                localized_description: d.localized_description,
                block_latency: d.block_latency,
                control_latency: d.control_latency,
                control_domain: d.control_domain,
                control_type: d.control_type,
                reset_time: d.reset_time,
                signal_type: d.signal_type,
                signal_index: d.signal_index,
                signal_output: d.signal_output,
                control_value_type: d.control_value_type,
                values: d.values,
            },
            dynamic_model: ControlDynamicModel {
                object_name: d.object_name,
                values: current,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockDomainStaticModel {
    pub localized_description: LocalizedStringReference,
    pub clock_sources: Vec<DescriptorIndex>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockDomainDynamicModel {
    pub object_name: AtdeccFixedString,
    pub clock_source_index: DescriptorIndex,
}

impl From<ClockDomainDescriptor> for NodeModels<ClockDomainStaticModel, ClockDomainDynamicModel> {
    fn from(d: ClockDomainDescriptor) -> Self {
        Self {
            static_model: ClockDomainStaticModel {
                localized_description: d.localized_description,
                clock_sources: d.clock_sources,
            },
            dynamic_model: ClockDomainDynamicModel {
                object_name: d.object_name,
                clock_source_index: d.clock_source_index,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigurationStaticModel {
    pub localized_description: LocalizedStringReference,
    pub descriptor_counts: Vec<DescriptorCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigurationDynamicModel {
    pub object_name: AtdeccFixedString,
    pub is_active_configuration: bool,
}

type Nodes<S, D> = BTreeMap<DescriptorIndex, NodeModels<S, D>>;

/// All nodes of one configuration, keyed by descriptor index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfigurationTree {
    pub static_model: ConfigurationStaticModel,
    pub dynamic_model: ConfigurationDynamicModel,
    pub audio_units: Nodes<AudioUnitStaticModel, AudioUnitDynamicModel>,
    pub stream_inputs: Nodes<StreamStaticModel, StreamDynamicModel>,
    pub stream_outputs: Nodes<StreamStaticModel, StreamDynamicModel>,
    pub jack_inputs: Nodes<JackStaticModel, NamedDynamicModel>,
    pub jack_outputs: Nodes<JackStaticModel, NamedDynamicModel>,
    pub avb_interfaces: Nodes<AvbInterfaceStaticModel, AvbInterfaceDynamicModel>,
    pub clock_sources: Nodes<ClockSourceStaticModel, ClockSourceDynamicModel>,
    pub memory_objects: Nodes<MemoryObjectStaticModel, MemoryObjectDynamicModel>,
    pub locales: BTreeMap<DescriptorIndex, LocaleDescriptor>,
    pub strings: BTreeMap<DescriptorIndex, StringsDescriptor>,
    pub stream_port_inputs: Nodes<StreamPortDescriptor, StreamPortDynamicModel>,
    pub stream_port_outputs: Nodes<StreamPortDescriptor, StreamPortDynamicModel>,
    pub external_port_inputs: BTreeMap<DescriptorIndex, PortDescriptor>,
    pub external_port_outputs: BTreeMap<DescriptorIndex, PortDescriptor>,
    pub internal_port_inputs: BTreeMap<DescriptorIndex, PortDescriptor>,
    pub internal_port_outputs: BTreeMap<DescriptorIndex, PortDescriptor>,
    pub audio_clusters: Nodes<AudioClusterDescriptor, NamedDynamicModel>,
    pub audio_maps: BTreeMap<DescriptorIndex, AudioMapDescriptor>,
    pub controls: Nodes<ControlStaticModel, ControlDynamicModel>,
    pub clock_domains: Nodes<ClockDomainStaticModel, ClockDomainDynamicModel>,
}

impl ConfigurationTree {
    /// Stores a decoded descriptor, splitting it into static and dynamic halves.
    ///
    /// # Errors
    /// - [`AtdeccError::InvalidState`] - The descriptor is an ENTITY descriptor,
    ///   which belongs to [`EntityTree`]
    pub fn apply_descriptor(
        &mut self,
        index: DescriptorIndex,
        descriptor: Descriptor,
    ) -> Result<(), AtdeccError> {
        match descriptor {
            Descriptor::Entity(_) => {
                return Err(AtdeccError::InvalidState {
                    operation: "apply_descriptor",
                    description: "ENTITY descriptor applied to a configuration tree".to_string(),
                });
            }
            Descriptor::Configuration(d) => self.apply_configuration(d),
            Descriptor::AudioUnit(d) => {
                self.audio_units.insert(index, d.into());
            }
            Descriptor::StreamInput(d) => {
                self.stream_inputs.insert(index, d.into());
            }
            Descriptor::StreamOutput(d) => {
                self.stream_outputs.insert(index, d.into());
            }
            Descriptor::JackInput(d) => {
                self.jack_inputs.insert(index, d.into());
            }
            Descriptor::JackOutput(d) => {
                self.jack_outputs.insert(index, d.into());
            }
            Descriptor::AvbInterface(d) => {
                self.avb_interfaces.insert(index, d.into());
            }
            Descriptor::ClockSource(d) => {
                self.clock_sources.insert(index, d.into());
            }
            Descriptor::MemoryObject(d) => {
                self.memory_objects.insert(index, d.into());
            }
            Descriptor::Locale(d) => {
                self.locales.insert(index, d);
            }
            Descriptor::Strings(d) => {
                self.strings.insert(index, d);
            }
            Descriptor::StreamPortInput(d) => {
                self.stream_port_inputs.insert(index, stream_port_node(d));
            }
            Descriptor::StreamPortOutput(d) => {
                self.stream_port_outputs.insert(index, stream_port_node(d));
            }
            Descriptor::ExternalPortInput(d) => {
                self.external_port_inputs.insert(index, d);
            }
            Descriptor::ExternalPortOutput(d) => {
                self.external_port_outputs.insert(index, d);
            }
            Descriptor::InternalPortInput(d) => {
                self.internal_port_inputs.insert(index, d);
            }
            Descriptor::InternalPortOutput(d) => {
                self.internal_port_outputs.insert(index, d);
            }
            Descriptor::AudioCluster(mut d) => {
                let object_name = std::mem::take(&mut d.object_name);
                self.audio_clusters.insert(
                    index,
                    NodeModels {
                        static_model: d,
                        dynamic_model: NamedDynamicModel { object_name },
                    },
                );
            }
            Descriptor::AudioMap(d) => {
                self.audio_maps.insert(index, d);
            }
            Descriptor::Control(d) => {
                self.controls.insert(index, d.into());
            }
            Descriptor::ClockDomain(d) => {
                self.clock_domains.insert(index, d.into());
            }
        }
        Ok(())
    }

    fn apply_configuration(&mut self, d: ConfigurationDescriptor) {
        self.static_model = ConfigurationStaticModel {
            localized_description: d.localized_description,
            descriptor_counts: d.descriptor_counts,
        };
        self.dynamic_model.object_name = d.object_name;
    }

    /// Resolves a localized string against the loaded STRINGS descriptors.
    pub fn localized_string(&self, reference: LocalizedStringReference) -> Option<&AtdeccFixedString> {
        if !reference.is_valid() {
            return None;
        }
        self.strings
            .get(&DescriptorIndex::new(reference.offset()))
            .and_then(|d| d.strings.get(usize::from(reference.index())))
    }
}

fn stream_port_node(d: StreamPortDescriptor) -> NodeModels<StreamPortDescriptor, StreamPortDynamicModel> {
    NodeModels {
        static_model: d,
        dynamic_model: StreamPortDynamicModel::default(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityStaticModel {
    pub vendor_name_string: LocalizedStringReference,
    pub model_name_string: LocalizedStringReference,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityDynamicModel {
    pub entity_name: AtdeccFixedString,
    pub group_name: AtdeccFixedString,
    pub firmware_version: AtdeccFixedString,
    pub serial_number: AtdeccFixedString,
    pub current_configuration: ConfigurationIndex,
}

/// Whole entity model: entity node plus one tree per configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityTree {
    pub static_model: EntityStaticModel,
    pub dynamic_model: EntityDynamicModel,
    pub configuration_trees: BTreeMap<ConfigurationIndex, ConfigurationTree>,
}

impl EntityTree {
    /// Stores a decoded descriptor. The ENTITY descriptor updates the entity
    /// node; every other kind goes to the tree of `configuration_index`,
    /// created on first use.
    ///
    /// # Errors
    /// Propagates [`ConfigurationTree::apply_descriptor`] errors.
    pub fn apply_descriptor(
        &mut self,
        configuration_index: ConfigurationIndex,
        index: DescriptorIndex,
        descriptor: Descriptor,
    ) -> Result<(), AtdeccError> {
        match descriptor {
            Descriptor::Entity(d) => {
                self.apply_entity(d);
                Ok(())
            }
            other => {
                let tree = self.configuration_trees.entry(configuration_index).or_default();
                if matches!(other, Descriptor::Configuration(_)) {
                    tree.dynamic_model.is_active_configuration =
                        configuration_index == self.dynamic_model.current_configuration;
                }
                tree.apply_descriptor(index, other)
            }
        }
    }

    fn apply_entity(&mut self, d: EntityDescriptor) {
        self.static_model = EntityStaticModel {
            vendor_name_string: d.vendor_name_string,
            model_name_string: d.model_name_string,
        };
        self.dynamic_model = EntityDynamicModel {
            entity_name: d.entity_name,
            group_name: d.group_name,
            firmware_version: d.firmware_version,
            serial_number: d.serial_number,
            current_configuration: d.current_configuration,
        };
    }

    /// Tree of the active configuration, if it was loaded.
    pub fn current_configuration(&self) -> Option<&ConfigurationTree> {
        self.configuration_trees
            .get(&self.dynamic_model.current_configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_model::control_values::LinearValue;

    #[test]
    fn stream_descriptor_split() {
        let descriptor = StreamDescriptor {
            object_name: AtdeccFixedString::from("Input 1"),
            current_format: StreamFormat::new(0x0205_0220_0000_0800),
            formats: vec![StreamFormat::new(0x0205_0220_0000_0800)],
            buffer_length: 2_000_000,
            ..StreamDescriptor::default()
        };
        let mut tree = ConfigurationTree::default();
        tree.apply_descriptor(DescriptorIndex::new(0), Descriptor::StreamInput(descriptor))
            .unwrap();
        let node = &tree.stream_inputs[&DescriptorIndex::new(0)];
        assert_eq!(node.dynamic_model.object_name.to_string_lossy(), "Input 1");
        assert_eq!(node.dynamic_model.stream_format, node.static_model.formats[0]);
        assert_eq!(node.static_model.buffer_length, 2_000_000);
        assert!(tree.stream_outputs.is_empty());
    }

    #[test]
    fn control_dynamic_half_keeps_current_values() {
        let descriptor = ControlDescriptor {
            values: ControlValues::LinearUInt8(vec![LinearValue {
                maximum: 100,
                current_value: 42,
                ..LinearValue::default()
            }]),
            ..ControlDescriptor::default()
        };
        let mut tree = ConfigurationTree::default();
        tree.apply_descriptor(DescriptorIndex::new(3), Descriptor::Control(descriptor))
            .unwrap();
        let node = &tree.controls[&DescriptorIndex::new(3)];
        assert_eq!(
            node.dynamic_model.values,
            ControlValues::LinearUInt8(vec![LinearValue::with_current(42)])
        );
        match &node.static_model.values {
            ControlValues::LinearUInt8(values) => assert_eq!(values[0].maximum, 100),
            other => panic!("unexpected values {other:?}"),
        }
    }

    #[test]
    fn entity_descriptor_goes_to_entity_node() {
        let mut tree = EntityTree::default();
        let entity = EntityDescriptor {
            entity_name: AtdeccFixedString::from("Stage Box"),
            current_configuration: ConfigurationIndex::new(1),
            ..EntityDescriptor::default()
        };
        tree.apply_descriptor(ConfigurationIndex::new(0), DescriptorIndex::new(0), Descriptor::Entity(entity))
            .unwrap();
        tree.apply_descriptor(
            ConfigurationIndex::new(1),
            DescriptorIndex::new(1),
            Descriptor::Configuration(ConfigurationDescriptor::default()),
        )
        .unwrap();
        assert_eq!(tree.dynamic_model.entity_name.to_string_lossy(), "Stage Box");
        let current = tree.current_configuration().unwrap();
        assert!(current.dynamic_model.is_active_configuration);

        let mut config = ConfigurationTree::default();
        assert!(matches!(
            config.apply_descriptor(DescriptorIndex::new(0), Descriptor::Entity(EntityDescriptor::default())),
            Err(AtdeccError::InvalidState { .. })
        ));
    }

    #[test]
    fn localized_strings_resolve() {
        let mut strings = StringsDescriptor::default();
        strings.strings[2] = AtdeccFixedString::from("Acme");
        let mut tree = ConfigurationTree::default();
        tree.apply_descriptor(DescriptorIndex::new(1), Descriptor::Strings(strings))
            .unwrap();
        let reference = LocalizedStringReference::from_offset_index(1, 2);
        assert_eq!(tree.localized_string(reference).unwrap().to_string_lossy(), "Acme");
        assert!(tree.localized_string(LocalizedStringReference::null()).is_none());
    }
}

//! Descriptor bodies carried by READ_DESCRIPTOR responses (clause 7.2).
//!
//! A body follows the 8-byte READ_DESCRIPTOR header. Variable sections are
//! addressed by an offset relative to the start of the descriptor (its type
//! field, 4 bytes into the payload) and an element count. Decoding rejects
//! offsets pointing back into the static part and counts that overflow the
//! end of the descriptor.

use super::{PAYLOAD_BUFFER_OFFSET, section_count};
use crate::entity_model::{
    AudioClusterDescriptor, AudioMapDescriptor, AudioUnitDescriptor, AvbInterfaceDescriptor,
    ClockDomainDescriptor, ClockSourceDescriptor, ConfigurationDescriptor, ControlDescriptor,
    ControlValueType, ControlValues, Descriptor, DescriptorType, EntityDescriptor, JackDescriptor, LocaleDescriptor,
    MemoryObjectDescriptor, PortDescriptor, StreamDescriptor, StreamPortDescriptor,
    StringsDescriptor,
};
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer, WireValue};
use crate::types::DescriptorIndex;

/// Descriptor type and index, the part of the descriptor inside the common header.
const DESCRIPTOR_HEADER_LENGTH: usize = 4;

/// Binary layout of one descriptor kind.
trait DescriptorLayout: Sized {
    /// Static part after descriptor type and index, offset and count fields included.
    const STATIC_LENGTH: usize;

    fn body_length(&self) -> usize {
        Self::STATIC_LENGTH
    }

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError>;

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError>;

    /// Descriptor-relative offset of the first byte after the static part.
    fn trailing_offset() -> u16 {
        (DESCRIPTOR_HEADER_LENGTH + Self::STATIC_LENGTH) as u16
    }
}

/// Absolute payload position of a section, checked against the bytes already consumed.
fn section_start(
    des: &Deserializer<'_>,
    context: &'static str,
    offset: u16,
) -> Result<usize, ParsingError> {
    let start = usize::from(offset) + PAYLOAD_BUFFER_OFFSET;
    if start < des.used_bytes() {
        return Err(ParsingError::InvalidOffset {
            context,
            offset: start,
            consumed: des.used_bytes(),
        });
    }
    Ok(start)
}

/// Reads `count` elements at `start`, none of them past the absolute position `end`.
fn read_section<T: WireValue>(
    des: &mut Deserializer<'_>,
    context: &'static str,
    start: usize,
    count: u16,
    end: usize,
) -> Result<Vec<T>, ParsingError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let count = usize::from(count);
    des.set_position(start)?;
    des.check_section(context, count, T::WIRE_SIZE, end)?;
    (0..count).map(|_| des.read()).collect()
}

fn write_section<T: WireValue>(ser: &mut Serializer, items: &[T]) -> Result<(), BuildingError> {
    items.iter().try_for_each(|item| ser.write(item))
}

impl DescriptorLayout for EntityDescriptor {
    const STATIC_LENGTH: usize = 308;

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.entity_id)?;
        ser.write(&self.entity_model_id)?;
        ser.write(&self.entity_capabilities)?;
        ser.write(&self.talker_stream_sources)?;
        ser.write(&self.talker_capabilities)?;
        ser.write(&self.listener_stream_sinks)?;
        ser.write(&self.listener_capabilities)?;
        ser.write(&self.controller_capabilities)?;
        ser.write(&self.available_index)?;
        ser.write(&self.association_id)?;
        ser.write(&self.entity_name)?;
        ser.write(&self.vendor_name_string)?;
        ser.write(&self.model_name_string)?;
        ser.write(&self.firmware_version)?;
        ser.write(&self.group_name)?;
        ser.write(&self.serial_number)?;
        ser.write(&self.configurations_count)?;
        ser.write(&self.current_configuration)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            entity_id: des.read()?,
            entity_model_id: des.read()?,
            entity_capabilities: des.read()?,
            talker_stream_sources: des.read()?,
            talker_capabilities: des.read()?,
            listener_stream_sinks: des.read()?,
            listener_capabilities: des.read()?,
            controller_capabilities: des.read()?,
            available_index: des.read()?,
            association_id: des.read()?,
            entity_name: des.read()?,
            vendor_name_string: des.read()?,
            model_name_string: des.read()?,
            firmware_version: des.read()?,
            group_name: des.read()?,
            serial_number: des.read()?,
            configurations_count: des.read()?,
            current_configuration: des.read()?,
        })
    }
}

impl DescriptorLayout for ConfigurationDescriptor {
    const STATIC_LENGTH: usize = 70;

    fn body_length(&self) -> usize {
        Self::STATIC_LENGTH + self.descriptor_counts.len() * 4
    }

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.object_name)?;
        ser.write(&self.localized_description)?;
        ser.write(&section_count("descriptor counts", self.descriptor_counts.len())?)?;
        ser.write(&Self::trailing_offset())?;
        write_section(ser, &self.descriptor_counts)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let object_name = des.read()?;
        let localized_description = des.read()?;
        let count: u16 = des.read()?;
        let offset: u16 = des.read()?;
        let start = section_start(des, "descriptor counts", offset)?;
        let end = des.len();
        Ok(Self {
            object_name,
            localized_description,
            descriptor_counts: read_section(des, "descriptor counts", start, count, end)?,
        })
    }
}

impl DescriptorLayout for AudioUnitDescriptor {
    const STATIC_LENGTH: usize = 140;

    fn body_length(&self) -> usize {
        Self::STATIC_LENGTH + self.sampling_rates.len() * 4
    }

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.object_name)?;
        ser.write(&self.localized_description)?;
        ser.write(&self.clock_domain_index)?;
        for range in [
            &self.stream_input_ports,
            &self.stream_output_ports,
            &self.external_input_ports,
            &self.external_output_ports,
            &self.internal_input_ports,
            &self.internal_output_ports,
            &self.controls,
            &self.signal_selectors,
            &self.mixers,
            &self.matrices,
            &self.splitters,
            &self.combiners,
            &self.demultiplexers,
            &self.multiplexers,
            &self.transcoders,
            &self.control_blocks,
        ] {
            ser.write(range)?;
        }
        ser.write(&self.current_sampling_rate)?;
        ser.write(&Self::trailing_offset())?;
        ser.write(&section_count("sampling rates", self.sampling_rates.len())?)?;
        write_section(ser, &self.sampling_rates)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let mut descriptor = Self {
            object_name: des.read()?,
            localized_description: des.read()?,
            clock_domain_index: des.read()?,
            stream_input_ports: des.read()?,
            stream_output_ports: des.read()?,
            external_input_ports: des.read()?,
            external_output_ports: des.read()?,
            internal_input_ports: des.read()?,
            internal_output_ports: des.read()?,
            controls: des.read()?,
            signal_selectors: des.read()?,
            mixers: des.read()?,
            matrices: des.read()?,
            splitters: des.read()?,
            combiners: des.read()?,
            demultiplexers: des.read()?,
            multiplexers: des.read()?,
            transcoders: des.read()?,
            control_blocks: des.read()?,
            current_sampling_rate: des.read()?,
            sampling_rates: Vec::new(),
        };
        let offset: u16 = des.read()?;
        let count: u16 = des.read()?;
        let start = section_start(des, "sampling rates", offset)?;
        let end = des.len();
        descriptor.sampling_rates = read_section(des, "sampling rates", start, count, end)?;
        Ok(descriptor)
    }
}

/// Redundant stream association block: offset and count.
const REDUNDANCY_BLOCK_LENGTH: usize = 4;

impl DescriptorLayout for StreamDescriptor {
    const STATIC_LENGTH: usize = 128;

    fn body_length(&self) -> usize {
        let redundancy = if self.redundant_streams.is_empty() {
            0
        } else {
            REDUNDANCY_BLOCK_LENGTH + self.redundant_streams.len() * DescriptorIndex::WIRE_SIZE
        };
        Self::STATIC_LENGTH + self.formats.len() * 8 + redundancy
    }

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        let formats_count = section_count("stream formats", self.formats.len())?;
        let has_redundancy = !self.redundant_streams.is_empty();
        let formats_offset = if has_redundancy {
            Self::trailing_offset() + REDUNDANCY_BLOCK_LENGTH as u16
        } else {
            Self::trailing_offset()
        };

        ser.write(&self.object_name)?;
        ser.write(&self.localized_description)?;
        ser.write(&self.clock_domain_index)?;
        ser.write(&self.stream_flags)?;
        ser.write(&self.current_format)?;
        ser.write(&formats_offset)?;
        ser.write(&formats_count)?;
        for talker in &self.backup_talkers {
            ser.write(talker)?;
        }
        ser.write(&self.backedup_talker)?;
        ser.write(&self.avb_interface_index)?;
        ser.write(&self.buffer_length)?;
        if has_redundancy {
            let redundant_offset = usize::from(formats_offset) + self.formats.len() * 8;
            let redundant_offset =
                u16::try_from(redundant_offset).map_err(|_| BuildingError::PayloadTooLarge {
                    context: "stream formats",
                    length: redundant_offset,
                    maximum: usize::from(u16::MAX),
                })?;
            ser.write(&redundant_offset)?;
            ser.write(&section_count("redundant streams", self.redundant_streams.len())?)?;
        }
        write_section(ser, &self.formats)?;
        write_section(ser, &self.redundant_streams)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let object_name = des.read()?;
        let localized_description = des.read()?;
        let clock_domain_index = des.read()?;
        let stream_flags = des.read()?;
        let current_format = des.read()?;
        let formats_offset: u16 = des.read()?;
        let formats_count: u16 = des.read()?;
        let backup_talkers = [des.read()?, des.read()?, des.read()?];
        let backedup_talker = des.read()?;
        let avb_interface_index = des.read()?;
        let buffer_length = des.read()?;

        // The redundancy block sits between the static part and the formats.
        let formats_start = usize::from(formats_offset) + PAYLOAD_BUFFER_OFFSET;
        let mut formats_end = des.len();
        let mut redundancy = None;
        if formats_start.saturating_sub(des.used_bytes()) >= REDUNDANCY_BLOCK_LENGTH {
            let redundant_offset: u16 = des.read()?;
            let redundant_count: u16 = des.read()?;
            formats_end = usize::from(redundant_offset) + PAYLOAD_BUFFER_OFFSET;
            redundancy = Some((redundant_offset, redundant_count));
        }

        let formats_start = section_start(des, "stream formats", formats_offset)?;
        let redundant_start = redundancy
            .map(|(offset, count)| section_start(des, "redundant streams", offset).map(|s| (s, count)))
            .transpose()?;
        let formats = read_section(des, "stream formats", formats_start, formats_count, formats_end)?;
        let end = des.len();
        let redundant_streams = match redundant_start {
            Some((start, count)) => read_section(des, "redundant streams", start, count, end)?,
            None => Vec::new(),
        };

        Ok(Self {
            object_name,
            localized_description,
            clock_domain_index,
            stream_flags,
            current_format,
            backup_talkers,
            backedup_talker,
            avb_interface_index,
            buffer_length,
            formats,
            redundant_streams,
        })
    }
}

impl DescriptorLayout for JackDescriptor {
    const STATIC_LENGTH: usize = 74;

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.object_name)?;
        ser.write(&self.localized_description)?;
        ser.write(&self.jack_flags)?;
        ser.write(&self.jack_type)?;
        ser.write(&self.controls)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            object_name: des.read()?,
            localized_description: des.read()?,
            jack_flags: des.read()?,
            jack_type: des.read()?,
            controls: des.read()?,
        })
    }
}

impl DescriptorLayout for AvbInterfaceDescriptor {
    const STATIC_LENGTH: usize = 94;

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.object_name)?;
        ser.write(&self.localized_description)?;
        ser.write(&self.mac_address)?;
        ser.write(&self.interface_flags)?;
        ser.write(&self.clock_identity)?;
        ser.write(&self.priority1)?;
        ser.write(&self.clock_class)?;
        ser.write(&self.offset_scaled_log_variance)?;
        ser.write(&self.clock_accuracy)?;
        ser.write(&self.priority2)?;
        ser.write(&self.domain_number)?;
        ser.write(&self.log_sync_interval)?;
        ser.write(&self.log_announce_interval)?;
        ser.write(&self.log_pdelay_interval)?;
        ser.write(&self.port_number)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            object_name: des.read()?,
            localized_description: des.read()?,
            mac_address: des.read()?,
            interface_flags: des.read()?,
            clock_identity: des.read()?,
            priority1: des.read()?,
            clock_class: des.read()?,
            offset_scaled_log_variance: des.read()?,
            clock_accuracy: des.read()?,
            priority2: des.read()?,
            domain_number: des.read()?,
            log_sync_interval: des.read()?,
            log_announce_interval: des.read()?,
            log_pdelay_interval: des.read()?,
            port_number: des.read()?,
        })
    }
}

impl DescriptorLayout for ClockSourceDescriptor {
    const STATIC_LENGTH: usize = 82;

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.object_name)?;
        ser.write(&self.localized_description)?;
        ser.write(&self.clock_source_flags)?;
        ser.write(&self.clock_source_type)?;
        ser.write(&self.clock_source_identifier)?;
        ser.write(&self.clock_source_location_type)?;
        ser.write(&self.clock_source_location_index)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            object_name: des.read()?,
            localized_description: des.read()?,
            clock_source_flags: des.read()?,
            clock_source_type: des.read()?,
            clock_source_identifier: des.read()?,
            clock_source_location_type: des.read()?,
            clock_source_location_index: des.read()?,
        })
    }
}

impl DescriptorLayout for MemoryObjectDescriptor {
    const STATIC_LENGTH: usize = 96;

    fn body_length(&self) -> usize {
        Self::STATIC_LENGTH + self.maximum_segment_length.map_or(0, |_| 8)
    }

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.object_name)?;
        ser.write(&self.localized_description)?;
        ser.write(&self.memory_object_type)?;
        ser.write(&self.target_descriptor_type)?;
        ser.write(&self.target_descriptor_index)?;
        ser.write(&self.start_address)?;
        ser.write(&self.maximum_length)?;
        ser.write(&self.length)?;
        if let Some(maximum_segment_length) = &self.maximum_segment_length {
            ser.write(maximum_segment_length)?;
        }
        Ok(())
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let mut descriptor = Self {
            object_name: des.read()?,
            localized_description: des.read()?,
            memory_object_type: des.read()?,
            target_descriptor_type: des.read()?,
            target_descriptor_index: des.read()?,
            start_address: des.read()?,
            maximum_length: des.read()?,
            length: des.read()?,
            maximum_segment_length: None,
        };
        if des.remaining() >= 8 {
            descriptor.maximum_segment_length = Some(des.read()?);
        }
        Ok(descriptor)
    }
}

impl DescriptorLayout for LocaleDescriptor {
    const STATIC_LENGTH: usize = 68;

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.locale_id)?;
        ser.write(&self.number_of_string_descriptors)?;
        ser.write(&self.base_string_descriptor_index)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            locale_id: des.read()?,
            number_of_string_descriptors: des.read()?,
            base_string_descriptor_index: des.read()?,
        })
    }
}

impl DescriptorLayout for StringsDescriptor {
    const STATIC_LENGTH: usize = 448;

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        write_section(ser, &self.strings)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let mut descriptor = Self::default();
        for string in &mut descriptor.strings {
            *string = des.read()?;
        }
        Ok(descriptor)
    }
}

impl DescriptorLayout for StreamPortDescriptor {
    const STATIC_LENGTH: usize = 16;

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.clock_domain_index)?;
        ser.write(&self.port_flags)?;
        ser.write(&self.controls)?;
        ser.write(&self.clusters)?;
        ser.write(&self.maps)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            clock_domain_index: des.read()?,
            port_flags: des.read()?,
            controls: des.read()?,
            clusters: des.read()?,
            maps: des.read()?,
        })
    }
}

impl DescriptorLayout for PortDescriptor {
    const STATIC_LENGTH: usize = 20;

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.clock_domain_index)?;
        ser.write(&self.port_flags)?;
        ser.write(&self.controls)?;
        ser.write(&self.signal_type)?;
        ser.write(&self.signal_index)?;
        ser.write(&self.signal_output)?;
        ser.write(&self.block_latency)?;
        ser.write(&self.port_index)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            clock_domain_index: des.read()?,
            port_flags: des.read()?,
            controls: des.read()?,
            signal_type: des.read()?,
            signal_index: des.read()?,
            signal_output: des.read()?,
            block_latency: des.read()?,
            port_index: des.read()?,
        })
    }
}

impl DescriptorLayout for AudioClusterDescriptor {
    const STATIC_LENGTH: usize = 83;

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.object_name)?;
        ser.write(&self.localized_description)?;
        ser.write(&self.signal_type)?;
        ser.write(&self.signal_index)?;
        ser.write(&self.signal_output)?;
        ser.write(&self.path_latency)?;
        ser.write(&self.block_latency)?;
        ser.write(&self.channel_count)?;
        ser.write(&self.format)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        Ok(Self {
            object_name: des.read()?,
            localized_description: des.read()?,
            signal_type: des.read()?,
            signal_index: des.read()?,
            signal_output: des.read()?,
            path_latency: des.read()?,
            block_latency: des.read()?,
            channel_count: des.read()?,
            format: des.read()?,
        })
    }
}

impl DescriptorLayout for AudioMapDescriptor {
    const STATIC_LENGTH: usize = 4;

    fn body_length(&self) -> usize {
        Self::STATIC_LENGTH + self.mappings.len() * 8
    }

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&Self::trailing_offset())?;
        ser.write(&section_count("audio mappings", self.mappings.len())?)?;
        write_section(ser, &self.mappings)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let offset: u16 = des.read()?;
        let count: u16 = des.read()?;
        let start = section_start(des, "audio mappings", offset)?;
        let end = des.len();
        Ok(Self {
            mappings: read_section(des, "audio mappings", start, count, end)?,
        })
    }
}

impl DescriptorLayout for ControlDescriptor {
    const STATIC_LENGTH: usize = 100;

    fn body_length(&self) -> usize {
        Self::STATIC_LENGTH + self.values.full_length()
    }

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        let kind = self.control_value_type.kind();
        if self.values.kind() != kind {
            return Err(BuildingError::InvalidFieldValueForBuild {
                field: "values",
                description: format!(
                    "{:?} values for a {kind:?} control value type",
                    self.values.kind()
                ),
            });
        }
        ser.write(&self.object_name)?;
        ser.write(&self.localized_description)?;
        ser.write(&self.block_latency)?;
        ser.write(&self.control_latency)?;
        ser.write(&self.control_domain)?;
        ser.write(&self.control_value_type)?;
        ser.write(&self.control_type)?;
        ser.write(&self.reset_time)?;
        ser.write(&Self::trailing_offset())?;
        ser.write(&section_count("control values", self.values.count())?)?;
        ser.write(&self.signal_type)?;
        ser.write(&self.signal_index)?;
        ser.write(&self.signal_output)?;
        self.values.serialize_full(ser)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let object_name = des.read()?;
        let localized_description = des.read()?;
        let block_latency = des.read()?;
        let control_latency = des.read()?;
        let control_domain = des.read()?;
        let control_value_type: ControlValueType = des.read()?;
        let control_type = des.read()?;
        let reset_time = des.read()?;
        let values_offset: u16 = des.read()?;
        let number_of_values: u16 = des.read()?;
        let signal_type = des.read()?;
        let signal_index = des.read()?;
        let signal_output = des.read()?;

        let start = section_start(des, "control values", values_offset)?;
        let end = des.len();
        des.set_position(start)?;
        let values =
            ControlValues::deserialize_full(des, control_value_type.kind(), number_of_values, end)?;

        Ok(Self {
            object_name,
            localized_description,
            block_latency,
            control_latency,
            control_domain,
            control_value_type,
            control_type,
            reset_time,
            signal_type,
            signal_index,
            signal_output,
            values,
        })
    }
}

impl DescriptorLayout for ClockDomainDescriptor {
    const STATIC_LENGTH: usize = 72;

    fn body_length(&self) -> usize {
        Self::STATIC_LENGTH + self.clock_sources.len() * DescriptorIndex::WIRE_SIZE
    }

    fn write_body(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
        ser.write(&self.object_name)?;
        ser.write(&self.localized_description)?;
        ser.write(&self.clock_source_index)?;
        ser.write(&Self::trailing_offset())?;
        ser.write(&section_count("clock sources", self.clock_sources.len())?)?;
        write_section(ser, &self.clock_sources)
    }

    fn read_body(des: &mut Deserializer<'_>) -> Result<Self, ParsingError> {
        let object_name = des.read()?;
        let localized_description = des.read()?;
        let clock_source_index = des.read()?;
        let offset: u16 = des.read()?;
        let count: u16 = des.read()?;
        let start = section_start(des, "clock sources", offset)?;
        let end = des.len();
        Ok(Self {
            object_name,
            localized_description,
            clock_source_index,
            clock_sources: read_section(des, "clock sources", start, count, end)?,
        })
    }
}

macro_rules! descriptor_kinds {
    ($($variant:ident => $ty:ty,)*) => {
        /// Encoded length of a descriptor body, static part and variable sections.
        pub fn descriptor_length(descriptor: &Descriptor) -> usize {
            match descriptor {
                $(Descriptor::$variant(d) => d.body_length(),)*
            }
        }

        /// Writes a descriptor body. The serializer must be positioned right
        /// after the READ_DESCRIPTOR header.
        ///
        /// # Errors
        /// - [`BuildingError::BufferTooSmall`] - The body does not fit
        /// - [`BuildingError::PayloadTooLarge`] - A variable section exceeds its count field
        /// - [`BuildingError::InvalidFieldValueForBuild`] - Control values disagree with
        ///   the control value type
        pub fn serialize_descriptor(
            descriptor: &Descriptor,
            ser: &mut Serializer,
        ) -> Result<(), BuildingError> {
            match descriptor {
                $(Descriptor::$variant(d) => d.write_body(ser),)*
            }
        }

        /// Reads the body of a `descriptor_type` descriptor. The deserializer
        /// must be positioned right after the READ_DESCRIPTOR header.
        ///
        /// # Errors
        /// - [`ParsingError::UnsupportedDescriptor`] - No decoder for `descriptor_type`
        /// - [`ParsingError::InvalidOffset`] - A section offset points into the static part
        /// - [`ParsingError::VariableSectionOverflow`] - A section count overflows the descriptor
        /// - [`ParsingError::NotEnoughData`] - Truncated static part
        pub fn deserialize_descriptor(
            descriptor_type: DescriptorType,
            des: &mut Deserializer<'_>,
        ) -> Result<Descriptor, ParsingError> {
            match descriptor_type {
                $(DescriptorType::$variant => <$ty>::read_body(des).map(Descriptor::$variant),)*
                descriptor_type => Err(ParsingError::UnsupportedDescriptor { descriptor_type }),
            }
        }
    };
}

descriptor_kinds! {
    Entity => EntityDescriptor,
    Configuration => ConfigurationDescriptor,
    AudioUnit => AudioUnitDescriptor,
    StreamInput => StreamDescriptor,
    StreamOutput => StreamDescriptor,
    JackInput => JackDescriptor,
    JackOutput => JackDescriptor,
    AvbInterface => AvbInterfaceDescriptor,
    ClockSource => ClockSourceDescriptor,
    MemoryObject => MemoryObjectDescriptor,
    Locale => LocaleDescriptor,
    Strings => StringsDescriptor,
    StreamPortInput => StreamPortDescriptor,
    StreamPortOutput => StreamPortDescriptor,
    ExternalPortInput => PortDescriptor,
    ExternalPortOutput => PortDescriptor,
    InternalPortInput => PortDescriptor,
    InternalPortOutput => PortDescriptor,
    AudioCluster => AudioClusterDescriptor,
    AudioMap => AudioMapDescriptor,
    Control => ControlDescriptor,
    ClockDomain => ClockDomainDescriptor,
}

/// Minimum body length of `descriptor_type`, `None` when it has no decoder.
pub fn minimum_descriptor_length(descriptor_type: DescriptorType) -> Option<usize> {
    let length = match descriptor_type {
        DescriptorType::Entity => EntityDescriptor::STATIC_LENGTH,
        DescriptorType::Configuration => ConfigurationDescriptor::STATIC_LENGTH,
        DescriptorType::AudioUnit => AudioUnitDescriptor::STATIC_LENGTH,
        DescriptorType::StreamInput | DescriptorType::StreamOutput => StreamDescriptor::STATIC_LENGTH,
        DescriptorType::JackInput | DescriptorType::JackOutput => JackDescriptor::STATIC_LENGTH,
        DescriptorType::AvbInterface => AvbInterfaceDescriptor::STATIC_LENGTH,
        DescriptorType::ClockSource => ClockSourceDescriptor::STATIC_LENGTH,
        DescriptorType::MemoryObject => MemoryObjectDescriptor::STATIC_LENGTH,
        DescriptorType::Locale => LocaleDescriptor::STATIC_LENGTH,
        DescriptorType::Strings => StringsDescriptor::STATIC_LENGTH,
        DescriptorType::StreamPortInput | DescriptorType::StreamPortOutput => {
            StreamPortDescriptor::STATIC_LENGTH
        }
        DescriptorType::ExternalPortInput
        | DescriptorType::ExternalPortOutput
        | DescriptorType::InternalPortInput
        | DescriptorType::InternalPortOutput => PortDescriptor::STATIC_LENGTH,
        DescriptorType::AudioCluster => AudioClusterDescriptor::STATIC_LENGTH,
        DescriptorType::AudioMap => AudioMapDescriptor::STATIC_LENGTH,
        DescriptorType::Control => ControlDescriptor::STATIC_LENGTH,
        DescriptorType::ClockDomain => ClockDomainDescriptor::STATIC_LENGTH,
        _ => return None,
    };
    Some(length)
}

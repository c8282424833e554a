//! Values carried by CONTROL descriptors and SET/GET_CONTROL payloads.
//!
//! `ControlValues` is a closed sum over every value kind with a defined layout
//! (LINEAR, SELECTOR and ARRAY for ten numeric types, SELECTOR_STRING and UTF8).
//! Kinds without a defined layout travel as opaque bytes tagged with their kind.
//!
//! Two packings exist: the *full* packing of the CONTROL descriptor (ranges,
//! defaults, units and current values) and the *dynamic* packing of SET/GET_CONTROL,
//! which only carries current values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::enums::ControlValueKind;
use super::values::{ControlValueUnit, LocalizedStringReference};
use crate::error::{BuildingError, ParsingError};
use crate::serialization::{Deserializer, Serializer, WireValue};

/// Scalar usable as a control value.
pub trait ControlScalar: WireValue + Copy + Default + PartialEq + fmt::Debug {}

impl ControlScalar for i8 {}
impl ControlScalar for u8 {}
impl ControlScalar for i16 {}
impl ControlScalar for u16 {}
impl ControlScalar for i32 {}
impl ControlScalar for u32 {}
impl ControlScalar for i64 {}
impl ControlScalar for u64 {}
impl ControlScalar for f32 {}
impl ControlScalar for f64 {}
impl ControlScalar for LocalizedStringReference {}

/// One LINEAR value (clause 7.3.5.2.1).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearValue<T> {
    pub minimum: T,
    pub maximum: T,
    pub step: T,
    pub default_value: T,
    pub current_value: T,
    pub unit: ControlValueUnit,
    pub localized_name: LocalizedStringReference,
}

impl<T: ControlScalar> LinearValue<T> {
    /// Value with only the current value set.
    pub fn with_current(current_value: T) -> Self {
        Self {
            current_value,
            ..Self::default()
        }
    }

    fn full_size() -> usize {
        5 * T::WIRE_SIZE + 4
    }
}

/// SELECTOR value (clause 7.3.5.2.2): current value chosen among `options`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectorValue<T> {
    pub current_value: T,
    pub default_value: T,
    pub options: Vec<T>,
    pub unit: ControlValueUnit,
}

/// ARRAY value (clause 7.3.5.2.3): one range shared by every element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrayValue<T> {
    pub minimum: T,
    pub maximum: T,
    pub step: T,
    pub default_value: T,
    pub unit: ControlValueUnit,
    pub localized_name: LocalizedStringReference,
    pub current_values: Vec<T>,
}

/// UTF8 value (clause 7.3.5.2.4), raw bytes as found on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Utf8Value {
    pub bytes: Vec<u8>,
}

impl Utf8Value {
    /// Text up to the first NUL, invalid UTF-8 replaced.
    pub fn to_string_lossy(&self) -> String {
        let end = self
            .bytes
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(self.bytes.len());
        String::from_utf8_lossy(&self.bytes[..end]).into_owned()
    }
}

impl From<&str> for Utf8Value {
    fn from(value: &str) -> Self {
        let mut bytes = value.as_bytes().to_vec();
        bytes.push(0);
        Self { bytes }
    }
}

fn write_linear<T: ControlScalar>(
    ser: &mut Serializer,
    values: &[LinearValue<T>],
) -> Result<(), BuildingError> {
    for value in values {
        ser.write(&value.minimum)?;
        ser.write(&value.maximum)?;
        ser.write(&value.step)?;
        ser.write(&value.default_value)?;
        ser.write(&value.current_value)?;
        ser.write(&value.unit)?;
        ser.write(&value.localized_name)?;
    }
    Ok(())
}

fn read_linear<T: ControlScalar>(
    des: &mut Deserializer<'_>,
    count: usize,
    end: usize,
) -> Result<Vec<LinearValue<T>>, ParsingError> {
    des.check_section("linear control values", count, LinearValue::<T>::full_size(), end)?;
    (0..count)
        .map(|_| {
            Ok(LinearValue {
                minimum: des.read()?,
                maximum: des.read()?,
                step: des.read()?,
                default_value: des.read()?,
                current_value: des.read()?,
                unit: des.read()?,
                localized_name: des.read()?,
            })
        })
        .collect()
}

fn write_selector<T: ControlScalar>(
    ser: &mut Serializer,
    value: &SelectorValue<T>,
) -> Result<(), BuildingError> {
    ser.write(&value.current_value)?;
    ser.write(&value.default_value)?;
    for option in &value.options {
        ser.write(option)?;
    }
    ser.write(&value.unit)
}

fn read_selector<T: ControlScalar>(
    des: &mut Deserializer<'_>,
    count: usize,
    end: usize,
) -> Result<SelectorValue<T>, ParsingError> {
    des.check_section("selector control values", count + 2, T::WIRE_SIZE, end.saturating_sub(2))?;
    let current_value = des.read()?;
    let default_value = des.read()?;
    let options = read_scalars(des, count, end)?;
    Ok(SelectorValue {
        current_value,
        default_value,
        options,
        unit: des.read()?,
    })
}

fn write_array<T: ControlScalar>(
    ser: &mut Serializer,
    value: &ArrayValue<T>,
) -> Result<(), BuildingError> {
    ser.write(&value.minimum)?;
    ser.write(&value.maximum)?;
    ser.write(&value.step)?;
    ser.write(&value.default_value)?;
    ser.write(&value.unit)?;
    ser.write(&value.localized_name)?;
    write_scalars(ser, &value.current_values)
}

fn read_array<T: ControlScalar>(
    des: &mut Deserializer<'_>,
    count: usize,
    end: usize,
) -> Result<ArrayValue<T>, ParsingError> {
    des.check_section("array control values", 1, 4 * T::WIRE_SIZE + 4, end)?;
    Ok(ArrayValue {
        minimum: des.read()?,
        maximum: des.read()?,
        step: des.read()?,
        default_value: des.read()?,
        unit: des.read()?,
        localized_name: des.read()?,
        current_values: read_scalars(des, count, end)?,
    })
}

fn write_scalars<T: ControlScalar>(ser: &mut Serializer, values: &[T]) -> Result<(), BuildingError> {
    values.iter().try_for_each(|value| ser.write(value))
}

fn read_scalars<T: ControlScalar>(
    des: &mut Deserializer<'_>,
    count: usize,
    end: usize,
) -> Result<Vec<T>, ParsingError> {
    des.check_section("control values", count, T::WIRE_SIZE, end)?;
    (0..count).map(|_| des.read()).collect()
}

fn read_to_end(des: &mut Deserializer<'_>, end: usize) -> Result<Vec<u8>, ParsingError> {
    let len = end.min(des.len()).saturating_sub(des.used_bytes());
    Ok(des.read_slice(len)?.to_vec())
}

macro_rules! control_values {
    (
        linear { $($linear:ident($lt:ty),)* }
        selector { $($selector:ident($st:ty),)* }
        array { $($array:ident($at:ty),)* }
    ) => {
        /// Values of a CONTROL descriptor, one variant per value kind.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub enum ControlValues {
            $($linear(Vec<LinearValue<$lt>>),)*
            $($selector(SelectorValue<$st>),)*
            $($array(ArrayValue<$at>),)*
            Utf8(Utf8Value),
            /// Value kind without a defined layout, kept verbatim.
            Opaque {
                kind: ControlValueKind,
                count: u16,
                data: Vec<u8>,
            },
        }

        impl ControlValues {
            /// Value kind of these values.
            pub fn kind(&self) -> ControlValueKind {
                match self {
                    $(Self::$linear(_) => ControlValueKind::$linear,)*
                    $(Self::$selector(_) => ControlValueKind::$selector,)*
                    $(Self::$array(_) => ControlValueKind::$array,)*
                    Self::Utf8(_) => ControlValueKind::Utf8,
                    Self::Opaque { kind, .. } => *kind,
                }
            }

            /// The `number_of_values` field of the CONTROL descriptor.
            pub fn count(&self) -> usize {
                match self {
                    $(Self::$linear(values) => values.len(),)*
                    $(Self::$selector(value) => value.options.len(),)*
                    $(Self::$array(value) => value.current_values.len(),)*
                    Self::Utf8(_) => 1,
                    Self::Opaque { count, .. } => usize::from(*count),
                }
            }

            /// Length of the descriptor packing.
            pub fn full_length(&self) -> usize {
                match self {
                    $(Self::$linear(values) => values.len() * LinearValue::<$lt>::full_size(),)*
                    $(Self::$selector(value) => {
                        (2 + value.options.len()) * <$st as WireValue>::WIRE_SIZE + 2
                    })*
                    $(Self::$array(value) => {
                        (4 + value.current_values.len()) * <$at as WireValue>::WIRE_SIZE + 4
                    })*
                    Self::Utf8(value) => value.bytes.len(),
                    Self::Opaque { data, .. } => data.len(),
                }
            }

            /// Length of the SET/GET_CONTROL packing.
            pub fn dynamic_length(&self) -> usize {
                match self {
                    $(Self::$linear(values) => values.len() * <$lt as WireValue>::WIRE_SIZE,)*
                    $(Self::$selector(_) => <$st as WireValue>::WIRE_SIZE,)*
                    $(Self::$array(value) => value.current_values.len() * <$at as WireValue>::WIRE_SIZE,)*
                    Self::Utf8(value) => value.bytes.len(),
                    Self::Opaque { data, .. } => data.len(),
                }
            }

            /// Writes the descriptor packing.
            ///
            /// # Errors
            /// - [`BuildingError::BufferTooSmall`] - The values do not fit
            pub fn serialize_full(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
                match self {
                    $(Self::$linear(values) => write_linear(ser, values),)*
                    $(Self::$selector(value) => write_selector(ser, value),)*
                    $(Self::$array(value) => write_array(ser, value),)*
                    Self::Utf8(value) => ser.write_buffer(&value.bytes),
                    Self::Opaque { data, .. } => ser.write_buffer(data),
                }
            }

            /// Reads the descriptor packing of `count` values, stopping at the
            /// absolute position `end`.
            ///
            /// # Errors
            /// - [`ParsingError::VariableSectionOverflow`] - `count` values do not fit before `end`
            /// - [`ParsingError::NotEnoughData`] - The buffer ends early
            pub fn deserialize_full(
                des: &mut Deserializer<'_>,
                kind: ControlValueKind,
                count: u16,
                end: usize,
            ) -> Result<Self, ParsingError> {
                let n = usize::from(count);
                match kind {
                    $(ControlValueKind::$linear => Ok(Self::$linear(read_linear(des, n, end)?)),)*
                    $(ControlValueKind::$selector => Ok(Self::$selector(read_selector(des, n, end)?)),)*
                    $(ControlValueKind::$array => Ok(Self::$array(read_array(des, n, end)?)),)*
                    ControlValueKind::Utf8 => Ok(Self::Utf8(Utf8Value {
                        bytes: read_to_end(des, end)?,
                    })),
                    kind => Ok(Self::Opaque {
                        kind,
                        count,
                        data: read_to_end(des, end)?,
                    }),
                }
            }

            /// Writes the current values only (SET/GET_CONTROL packing).
            ///
            /// # Errors
            /// - [`BuildingError::BufferTooSmall`] - The values do not fit
            pub fn serialize_dynamic(&self, ser: &mut Serializer) -> Result<(), BuildingError> {
                match self {
                    $(Self::$linear(values) => values
                        .iter()
                        .try_for_each(|value| ser.write(&value.current_value)),)*
                    $(Self::$selector(value) => ser.write(&value.current_value),)*
                    $(Self::$array(value) => write_scalars(ser, &value.current_values),)*
                    Self::Utf8(value) => ser.write_buffer(&value.bytes),
                    Self::Opaque { data, .. } => ser.write_buffer(data),
                }
            }

            /// Reads current values from a SET/GET_CONTROL payload. `count` comes
            /// from the CONTROL descriptor; the static fields of the result keep
            /// their defaults.
            ///
            /// # Errors
            /// - [`ParsingError::VariableSectionOverflow`] - `count` values do not fit
            /// - [`ParsingError::NotEnoughData`] - The buffer ends early
            pub fn deserialize_dynamic(
                des: &mut Deserializer<'_>,
                kind: ControlValueKind,
                count: u16,
            ) -> Result<Self, ParsingError> {
                let n = usize::from(count);
                let end = des.len();
                match kind {
                    $(ControlValueKind::$linear => Ok(Self::$linear(
                        read_scalars::<$lt>(des, n, end)?
                            .into_iter()
                            .map(LinearValue::with_current)
                            .collect(),
                    )),)*
                    $(ControlValueKind::$selector => Ok(Self::$selector(SelectorValue {
                        current_value: des.read()?,
                        ..SelectorValue::default()
                    })),)*
                    $(ControlValueKind::$array => Ok(Self::$array(ArrayValue {
                        current_values: read_scalars(des, n, end)?,
                        ..ArrayValue::default()
                    })),)*
                    ControlValueKind::Utf8 => Ok(Self::Utf8(Utf8Value {
                        bytes: read_to_end(des, end)?,
                    })),
                    kind => Ok(Self::Opaque {
                        kind,
                        count,
                        data: read_to_end(des, end)?,
                    }),
                }
            }

            /// Copy keeping only the current values.
            pub fn to_dynamic(&self) -> Self {
                match self {
                    $(Self::$linear(values) => Self::$linear(
                        values
                            .iter()
                            .map(|value| LinearValue::with_current(value.current_value))
                            .collect(),
                    ),)*
                    $(Self::$selector(value) => Self::$selector(SelectorValue {
                        current_value: value.current_value,
                        ..SelectorValue::default()
                    }),)*
                    $(Self::$array(value) => Self::$array(ArrayValue {
                        current_values: value.current_values.clone(),
                        ..ArrayValue::default()
                    }),)*
                    other => other.clone(),
                }
            }
        }
    };
}

control_values! {
    linear {
        LinearInt8(i8),
        LinearUInt8(u8),
        LinearInt16(i16),
        LinearUInt16(u16),
        LinearInt32(i32),
        LinearUInt32(u32),
        LinearInt64(i64),
        LinearUInt64(u64),
        LinearFloat(f32),
        LinearDouble(f64),
    }
    selector {
        SelectorInt8(i8),
        SelectorUInt8(u8),
        SelectorInt16(i16),
        SelectorUInt16(u16),
        SelectorInt32(i32),
        SelectorUInt32(u32),
        SelectorInt64(i64),
        SelectorUInt64(u64),
        SelectorFloat(f32),
        SelectorDouble(f64),
        SelectorString(LocalizedStringReference),
    }
    array {
        ArrayInt8(i8),
        ArrayUInt8(u8),
        ArrayInt16(i16),
        ArrayUInt16(u16),
        ArrayInt32(i32),
        ArrayUInt32(u32),
        ArrayInt64(i64),
        ArrayUInt64(u64),
        ArrayFloat(f32),
        ArrayDouble(f64),
    }
}

impl Default for ControlValues {
    fn default() -> Self {
        Self::Opaque {
            kind: ControlValueKind::Expansion,
            count: 0,
            data: Vec::new(),
        }
    }
}

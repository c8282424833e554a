//! Bounds-checked serializer and deserializer cursors.
//!
//! Every field of every PDU goes through [`Serializer::write`] or
//! [`Deserializer::read`]. Integers are packed in network byte order; raw buffers
//! (fixed strings, MAC addresses, opaque blobs) are copied verbatim. A failed
//! operation reports an error and leaves the cursor where it was.

use std::any::type_name;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{BuildingError, ParsingError};
use crate::types::{
    AvailableIndex, ConfigurationIndex, DescriptorIndex, MacAddress, OperationId, SequenceId,
};
use crate::unique_identifier::UniqueIdentifier;

/// A value with a fixed-size wire representation.
pub trait WireValue: Sized {
    /// Number of bytes the value occupies on the wire.
    const WIRE_SIZE: usize;

    /// Writes the value. The caller guarantees `WIRE_SIZE` bytes of room.
    fn put<B: BufMut>(&self, buf: &mut B);

    /// Reads the value. The caller guarantees `WIRE_SIZE` bytes are available.
    fn get<B: Buf>(buf: &mut B) -> Self;
}

macro_rules! wire_integer {
    ($($ty:ty => $put:ident, $get:ident;)*) => {
        $(
            impl WireValue for $ty {
                const WIRE_SIZE: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn put<B: BufMut>(&self, buf: &mut B) {
                    buf.$put(*self);
                }

                #[inline]
                fn get<B: Buf>(buf: &mut B) -> Self {
                    buf.$get()
                }
            }
        )*
    };
}

wire_integer! {
    u8 => put_u8, get_u8;
    i8 => put_i8, get_i8;
    u16 => put_u16, get_u16;
    i16 => put_i16, get_i16;
    u32 => put_u32, get_u32;
    i32 => put_i32, get_i32;
    u64 => put_u64, get_u64;
    i64 => put_i64, get_i64;
    f32 => put_f32, get_f32;
    f64 => put_f64, get_f64;
}

macro_rules! wire_newtype {
    ($($name:ty => $inner:ty;)*) => {
        $(
            impl WireValue for $name {
                const WIRE_SIZE: usize = <$inner as WireValue>::WIRE_SIZE;

                #[inline]
                fn put<B: BufMut>(&self, buf: &mut B) {
                    self.0.put(buf);
                }

                #[inline]
                fn get<B: Buf>(buf: &mut B) -> Self {
                    Self(<$inner>::get(buf))
                }
            }
        )*
    };
}

wire_newtype! {
    DescriptorIndex => u16;
    ConfigurationIndex => u16;
    SequenceId => u16;
    AvailableIndex => u32;
    OperationId => u16;
}

impl WireValue for UniqueIdentifier {
    const WIRE_SIZE: usize = 8;

    fn put<B: BufMut>(&self, buf: &mut B) {
        buf.put_u64(self.value());
    }

    fn get<B: Buf>(buf: &mut B) -> Self {
        UniqueIdentifier::new(buf.get_u64())
    }
}

impl WireValue for MacAddress {
    const WIRE_SIZE: usize = 6;

    fn put<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.0);
    }

    fn get<B: Buf>(buf: &mut B) -> Self {
        let mut octets = [0u8; 6];
        buf.copy_to_slice(&mut octets);
        MacAddress(octets)
    }
}

/// Fixed-capacity write cursor.
#[derive(Debug, Clone)]
pub struct Serializer {
    buffer: BytesMut,
    capacity: usize,
}

impl Serializer {
    /// Creates a serializer that accepts at most `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
            capacity,
        }
    }

    /// Writes a value in network byte order.
    ///
    /// # Errors
    /// - [`BuildingError::BufferTooSmall`] - Fewer than `T::WIRE_SIZE` bytes remain
    pub fn write<T: WireValue>(&mut self, value: &T) -> Result<(), BuildingError> {
        self.ensure_room(T::WIRE_SIZE, type_name::<T>())?;
        value.put(&mut self.buffer);
        Ok(())
    }

    /// Appends a raw buffer without byte-swapping.
    ///
    /// # Errors
    /// - [`BuildingError::BufferTooSmall`] - The buffer does not fit
    pub fn write_buffer(&mut self, data: &[u8]) -> Result<(), BuildingError> {
        self.ensure_room(data.len(), "buffer")?;
        self.buffer.put_slice(data);
        Ok(())
    }

    /// Appends `count` zero bytes.
    ///
    /// # Errors
    /// - [`BuildingError::BufferTooSmall`] - The padding does not fit
    pub fn write_zeros(&mut self, count: usize) -> Result<(), BuildingError> {
        self.ensure_room(count, "padding")?;
        self.buffer.put_bytes(0, count);
        Ok(())
    }

    fn ensure_room(&self, needed: usize, context: &'static str) -> Result<(), BuildingError> {
        if self.remaining() < needed {
            return Err(BuildingError::BufferTooSmall {
                needed,
                available: self.remaining(),
                context,
            });
        }
        Ok(())
    }

    /// Bytes written so far.
    #[inline]
    pub fn used_bytes(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes that can still be written.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.buffer.len()
    }

    /// Maximum number of bytes this serializer accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Serialized bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the serializer, returning the serialized bytes.
    pub fn freeze(self) -> Bytes {
        self.buffer.freeze()
    }
}

/// Read cursor over an immutable byte view.
#[derive(Debug, Clone, Copy)]
pub struct Deserializer<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Deserializer<'a> {
    /// Creates a deserializer positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Reads a value in network byte order.
    ///
    /// # Errors
    /// - [`ParsingError::NotEnoughData`] - Fewer than `T::WIRE_SIZE` bytes remain
    pub fn read<T: WireValue>(&mut self) -> Result<T, ParsingError> {
        self.ensure_available(T::WIRE_SIZE, type_name::<T>())?;
        let mut slice = &self.data[self.position..self.position + T::WIRE_SIZE];
        let value = T::get(&mut slice);
        self.position += T::WIRE_SIZE;
        Ok(value)
    }

    /// Copies the next `out.len()` bytes verbatim.
    ///
    /// # Errors
    /// - [`ParsingError::NotEnoughData`] - Not enough bytes remain
    pub fn read_buffer(&mut self, out: &mut [u8]) -> Result<(), ParsingError> {
        let bytes = self.read_slice(out.len())?;
        out.copy_from_slice(bytes);
        Ok(())
    }

    /// Borrows the next `len` bytes and advances past them.
    ///
    /// # Errors
    /// - [`ParsingError::NotEnoughData`] - Not enough bytes remain
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], ParsingError> {
        self.ensure_available(len, "buffer")?;
        let data = self.data;
        let bytes = &data[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    /// Copies the next `len` bytes into an owned buffer.
    ///
    /// # Errors
    /// - [`ParsingError::NotEnoughData`] - Not enough bytes remain
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes, ParsingError> {
        self.read_slice(len).map(Bytes::copy_from_slice)
    }

    /// Skips `len` bytes.
    ///
    /// # Errors
    /// - [`ParsingError::NotEnoughData`] - Not enough bytes remain
    pub fn skip(&mut self, len: usize) -> Result<(), ParsingError> {
        self.read_slice(len).map(|_| ())
    }

    /// Moves the cursor to an absolute position.
    ///
    /// # Errors
    /// - [`ParsingError::InvalidPosition`] - `position` is past the end of the buffer
    pub fn set_position(&mut self, position: usize) -> Result<(), ParsingError> {
        if position > self.data.len() {
            return Err(ParsingError::InvalidPosition {
                position,
                length: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    fn ensure_available(&self, needed: usize, context: &'static str) -> Result<(), ParsingError> {
        if self.remaining() < needed {
            return Err(ParsingError::NotEnoughData {
                needed,
                got: self.remaining(),
                context,
            });
        }
        Ok(())
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn used_bytes(&self) -> usize {
        self.position
    }

    /// Bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Total length of the underlying view.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the underlying view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Unread bytes.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    /// Checks that `count` elements of `element_size` bytes fit between the
    /// cursor and the absolute position `end` (clamped to the buffer length).
    ///
    /// # Errors
    /// - [`ParsingError::VariableSectionOverflow`] - The section does not fit
    pub fn check_section(
        &self,
        context: &'static str,
        count: usize,
        element_size: usize,
        end: usize,
    ) -> Result<(), ParsingError> {
        let available = end.min(self.data.len()).saturating_sub(self.position);
        let needed = count.checked_mul(element_size).unwrap_or(usize::MAX);
        if needed > available {
            return Err(ParsingError::VariableSectionOverflow {
                context,
                count,
                element_size,
                available,
            });
        }
        Ok(())
    }
}

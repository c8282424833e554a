//! Binary cursor primitives shared by every codec.

pub mod cursor;

pub use cursor::{Deserializer, Serializer, WireValue};

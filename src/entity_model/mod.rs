//! AEM entity model: descriptor data shapes, value types and the entity tree.

pub mod control_values;
pub mod descriptors;
pub mod enums;
pub mod flags;
pub mod tree;
pub mod values;

pub use control_values::{ArrayValue, ControlScalar, ControlValues, LinearValue, SelectorValue, Utf8Value};
pub use descriptors::*;
pub use enums::*;
pub use flags::*;
pub use tree::{ConfigurationTree, EntityTree, NodeModels};
pub use values::*;

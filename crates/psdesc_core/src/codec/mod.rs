mod block;
pub mod bytes;
mod decode;
mod descriptor;
mod diag;
mod element;
mod error;
mod key;
mod known;
mod list;
mod reference;
mod registry;
mod scalar;
mod tag;
mod unit;


/// Versioned descriptor wrapper.
pub use block::DescriptorBlock;
/// Decoding context, options, and top-level entry points.
pub use decode::{DecodeOptions, DecodeReport, Decoder, decode, decode_with, decode_with_registry, encode};
/// Ordered key/value composite.
pub use descriptor::{Descriptor, Entry};
/// Recoverable decode anomalies.
pub use diag::Diagnostic;
/// Element sum type and the shared read/write capability.
pub use element::{Codec, Element, ScalarRef, Shape};
/// Error and result aliases.
pub use error::{DescriptorError, ErrorKind, Result};
/// Key sum type and its codec.
pub use key::{Key, read_key, write_key};
/// Well-known identifier table.
pub use known::KnownId;
/// Ordered heterogeneous composite.
pub use list::List;
/// Enum and reference records.
pub use reference::{ClassRef, Enumerated, EnumeratedRef, OffsetRef, PropertyRef};
/// Tag to decoder table.
pub use registry::{ReadFn, Registration, Registry};
/// Unit-carrying floats.
pub use scalar::{UnitFloat, UnitFloats};
/// Value tags.
pub use tag::Tag;
/// Unit codes.
pub use unit::Unit;

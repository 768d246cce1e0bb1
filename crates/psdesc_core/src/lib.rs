//! Public library API for reading and writing layered-image descriptor structures.

/// Descriptor codec: type registry, key codec, composite and scalar variants.
pub mod codec;

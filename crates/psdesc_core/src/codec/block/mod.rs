use std::io::Write;

use crate::codec::bytes::write_u32;
use crate::codec::{Codec, Decoder, Descriptor, DescriptorError, Result};

/// Descriptor preceded by its `u32` version prefix, as embedded in document resources.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescriptorBlock {
	/// Wrapped descriptor.
	pub descriptor: Descriptor,
}

impl DescriptorBlock {
	/// The only version prefix in use.
	pub const VERSION: u32 = 16;
}

impl From<Descriptor> for DescriptorBlock {
	fn from(descriptor: Descriptor) -> Self {
		Self { descriptor }
	}
}

impl Codec for DescriptorBlock {
	fn read(dec: &mut Decoder<'_>) -> Result<Self> {
		let version = dec.cursor().read_u32()?;
		if version != Self::VERSION {
			return Err(DescriptorError::UnsupportedVersion { version });
		}
		Ok(Self {
			descriptor: Descriptor::read(dec)?,
		})
	}

	fn write<W: Write>(&self, out: &mut W) -> Result<usize> {
		Ok(write_u32(out, Self::VERSION)? + self.descriptor.write(out)?)
	}
}

use std::io::Write;

use crate::codec::bytes::{write_bytes, write_count, write_f64};
use crate::codec::{Codec, Decoder, DescriptorError, Result, Unit};

/// `f64` carrying a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitFloat {
	/// Unit of `value`.
	pub unit: Unit,
	/// Magnitude.
	pub value: f64,
}

/// `f64` array sharing one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitFloats {
	/// Unit of every value.
	pub unit: Unit,
	/// Magnitudes in order.
	pub values: Vec<f64>,
}

fn read_unit(dec: &mut Decoder<'_>) -> Result<Unit> {
	let at = dec.cursor().pos();
	let code = dec.cursor().read_code4()?;
	Unit::from_code(code).ok_or(DescriptorError::UnknownUnit { unit: code, at })
}

impl Codec for UnitFloat {
	fn read(dec: &mut Decoder<'_>) -> Result<Self> {
		let unit = read_unit(dec)?;
		let value = dec.cursor().read_f64()?;
		Ok(Self { unit, value })
	}

	fn write<W: Write>(&self, out: &mut W) -> Result<usize> {
		Ok(write_bytes(out, &self.unit.code())? + write_f64(out, self.value)?)
	}
}

impl Codec for UnitFloats {
	fn read(dec: &mut Decoder<'_>) -> Result<Self> {
		let unit = read_unit(dec)?;
		let count = dec.cursor().read_count(8)?;
		let values = (0..count).map(|_| dec.cursor().read_f64()).collect::<Result<Vec<_>>>()?;
		Ok(Self { unit, values })
	}

	fn write<W: Write>(&self, out: &mut W) -> Result<usize> {
		let mut written = write_bytes(out, &self.unit.code())?;
		written += write_count(out, "unit float array", self.values.len())?;
		for value in &self.values {
			written += write_f64(out, *value)?;
		}
		Ok(written)
	}
}

#[cfg(test)]
mod tests;

macro_rules! units {
	($($(#[$doc:meta])* $variant:ident = $code:literal,)+) => {
		/// Unit attached to unit-float values.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum Unit {
			$($(#[$doc])* $variant,)+
		}

		impl Unit {
			/// Every unit, in table order.
			pub const ALL: &'static [Unit] = &[$(Unit::$variant,)+];

			/// On-disk four-byte unit code.
			pub fn code(self) -> [u8; 4] {
				match self {
					$(Unit::$variant => *$code,)+
				}
			}

			/// Look up a unit by its on-disk code.
			pub fn from_code(code: [u8; 4]) -> Option<Self> {
				match &code {
					$($code => Some(Unit::$variant),)+
					_ => None,
				}
			}
		}
	};
}

units! {
	/// Degrees.
	Angle = b"#Ang",
	/// Pixels per inch.
	Density = b"#Rsl",
	/// 72 points per inch.
	Distance = b"#Rlt",
	/// Unitless coercion.
	None = b"#Nne",
	/// Percentage.
	Percent = b"#Prc",
	/// Pixels.
	Pixels = b"#Pxl",
	/// Points.
	Points = b"#Pnt",
	/// Millimeters.
	Millimeters = b"#Mlm",
}

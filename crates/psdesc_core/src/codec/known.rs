//! Table of well-known four-byte identifiers.

macro_rules! known_ids {
	($($variant:ident = $code:literal,)+) => {
		/// Identifier with a canonical compact encoding.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub enum KnownId {
			$(
				#[allow(missing_docs)]
				$variant,
			)+
		}

		impl KnownId {
			/// Every identifier, in table order.
			pub const ALL: &'static [KnownId] = &[$(KnownId::$variant,)+];

			/// Canonical four-byte code.
			pub fn code(self) -> &'static [u8; 4] {
				match self {
					$(KnownId::$variant => $code,)+
				}
			}

			/// Human-readable name.
			pub fn name(self) -> &'static str {
				match self {
					$(KnownId::$variant => stringify!($variant),)+
				}
			}

			/// Resolve raw bytes against the table.
			pub fn from_code(code: &[u8]) -> Option<Self> {
				match code {
					$(c if c == &$code[..] => Some(KnownId::$variant),)+
					_ => None,
				}
			}

			/// Resolve a human-readable name against the table.
			pub fn from_name(name: &str) -> Option<Self> {
				match name {
					$(stringify!($variant) => Some(KnownId::$variant),)+
					_ => None,
				}
			}
		}
	};
}

known_ids! {
	Null = b"null",
	Name = b"Nm  ",
	Color = b"Clr ",
	RGBColor = b"RGBC",
	HSBColor = b"HSBC",
	CMYKColor = b"CMYC",
	LabColor = b"LbCl",
	Grayscale = b"Grsc",
	BookColor = b"BkCl",
	Red = b"Rd  ",
	Green = b"Grn ",
	Blue = b"Bl  ",
	Hue = b"H   ",
	Saturation = b"Strt",
	Brightness = b"Brgh",
	Cyan = b"Cyn ",
	Magenta = b"Mgnt",
	Yellow = b"Ylw ",
	Black = b"Blck",
	Gray = b"Gry ",
	Document = b"Dcmn",
	Layer = b"Lyr ",
	Channel = b"Chnl",
	Path = b"Path",
	Point = b"Pnt ",
	Rectangle = b"Rctn",
	Offset = b"Ofst",
	Horizontal = b"Hrzn",
	Vertical = b"Vrtc",
	Top = b"Top ",
	Left = b"Left",
	Bottom = b"Btom",
	Right = b"Rght",
	Opacity = b"Opct",
	Mode = b"Md  ",
	Enabled = b"enab",
	Angle = b"Angl",
	Distance = b"Dstn",
	Blur = b"blur",
	Size = b"Sz  ",
	Scale = b"Scl ",
	Style = b"Styl",
	Type = b"Type",
	Gradient = b"Grdn",
	ColorStop = b"Clrt",
	TransferSpec = b"TrnS",
	Colors = b"Clrs",
	Transparency = b"Trns",
	Location = b"Lctn",
	Midpoint = b"Mdpn",
	Interpolation = b"Intr",
	Pattern = b"Ptrn",
	LayerEffects = b"Lefx",
	DropShadow = b"DrSh",
	InnerShadow = b"IrSh",
	OuterGlow = b"OrGl",
	InnerGlow = b"IrGl",
	BevelEmboss = b"ebbl",
	SolidFill = b"SoFi",
	GradientFill = b"GrFl",
	FrameFX = b"FrFX",
	Satin = b"ChFX",
	TextLayer = b"TxLr",
	Orientation = b"Ornt",
	Alignment = b"Algn",
	Action = b"Actn",
	Ordinal = b"Ordn",
	Target = b"Trgt",
	BlendMode = b"BlnM",
	Normal = b"Nrml",
	Multiply = b"Mltp",
	Screen = b"Scrn",
	Overlay = b"Ovrl",
}

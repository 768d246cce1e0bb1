//! Four-byte value tags.

macro_rules! tags {
	($($(#[$doc:meta])* $variant:ident = $code:literal,)+) => {
		/// Four-byte code naming the body layout that follows it.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum Tag {
			$($(#[$doc])* $variant,)+
		}

		impl Tag {
			/// Every tag, in table order.
			pub const ALL: &'static [Tag] = &[$(Tag::$variant,)+];

			/// On-disk code for this tag.
			pub fn code(self) -> [u8; 4] {
				match self {
					$(Tag::$variant => *$code,)+
				}
			}

			/// Variant name for display.
			pub fn name(self) -> &'static str {
				match self {
					$(Tag::$variant => stringify!($variant),)+
				}
			}

			/// Look up a tag by its on-disk code.
			pub fn from_code(code: [u8; 4]) -> Option<Self> {
				match &code {
					$($code => Some(Tag::$variant),)+
					_ => None,
				}
			}
		}
	};
}

tags! {
	/// Nested descriptor.
	Descriptor = b"Objc",
	/// Descriptor-shaped global object.
	GlobalObject = b"GlbO",
	/// Descriptor-shaped object array.
	ObjectArray = b"ObAr",
	/// Heterogeneous list.
	List = b"VlLs",
	/// List-shaped reference.
	Reference = b"obj ",
	/// `f64`.
	Double = b"doub",
	/// Unit plus `f64`.
	UnitFloat = b"UntF",
	/// Unit plus `f64` array.
	UnitFloats = b"UnFl",
	/// Padded UTF-16 string.
	String = b"TEXT",
	/// String-shaped name.
	Name = b"name",
	/// Type and value keys.
	Enumerated = b"enum",
	/// `i32`.
	Integer = b"long",
	/// Integer-shaped identifier.
	Identifier = b"Idnt",
	/// Integer-shaped index.
	Index = b"indx",
	/// `i64`.
	LargeInteger = b"comp",
	/// Single byte boolean.
	Boolean = b"bool",
	/// Class reference.
	Class1 = b"type",
	/// Global class reference.
	Class2 = b"GlbC",
	/// Class reference inside references.
	Class3 = b"Clss",
	/// Length-prefixed raw bytes.
	RawData = b"tdta",
	/// Raw-data-shaped alias record.
	Alias = b"alis",
	/// Raw-data-shaped path.
	Path = b"Pth ",
	/// Property reference.
	Property = b"prop",
	/// Enumerated reference.
	EnumeratedReference = b"Enmr",
	/// Offset reference.
	Offset = b"rele",
}

impl std::fmt::Display for Tag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&String::from_utf8_lossy(&self.code()))
	}
}

/// Descriptor text and JSON rendering.
pub mod print;
/// Decode, re-encode, and compare command.
pub mod roundtrip;
/// Decode and print command.
pub mod show;
/// Registry listing command.
pub mod tags;
pub(crate) mod util;

#[cfg(test)]
pub(crate) mod test_support;

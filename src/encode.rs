use super::errors::Result;
use super::reader::ByteReader;
use super::writer::ByteWriter;

/// Byte order for multi-byte integer fields.
///
/// The Bitcoin wire format is little-endian almost everywhere, so that is
/// the default; the exceptions (ports, embedded IP addresses) pass
/// [`Endianness::Big`] explicitly at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

pub trait Encodable {
    fn encode(&self, writer: &mut ByteWriter) -> Result<()>;
}

pub trait Decodable {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self>
    where
        Self: Sized;
}

/// encode serializes a value to its canonical wire bytes.
pub fn encode<T: Encodable>(value: &T) -> Result<Vec<u8>> {
    let mut writer = ByteWriter::new();
    value.encode(&mut writer)?;
    Ok(writer.into_bytes())
}

/// decode parses a value from the start of `bytes`.
///
/// Trailing bytes are ignored; callers that need the consumed length
/// should drive a [`ByteReader`] directly.
pub fn decode<T: Decodable>(bytes: &[u8]) -> Result<T> {
    let mut reader = ByteReader::new(bytes);
    T::decode(&mut reader)
}

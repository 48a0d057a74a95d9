use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::encode::Endianness;
use super::errors::{Result, WireError};

/// ByteWriter is an append-only encode sink producing a byte buffer.
///
/// Integer writes mirror [`ByteReader`](super::reader::ByteReader) exactly:
/// the same value written and read back with the same endianness is
/// identical, bit for bit.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16(&mut self, value: u16, endianness: Endianness) {
        let mut bytes = [0u8; 2];
        match endianness {
            Endianness::Little => LittleEndian::write_u16(&mut bytes, value),
            Endianness::Big => BigEndian::write_u16(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    pub fn write_u32(&mut self, value: u32, endianness: Endianness) {
        let mut bytes = [0u8; 4];
        match endianness {
            Endianness::Little => LittleEndian::write_u32(&mut bytes, value),
            Endianness::Big => BigEndian::write_u32(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    pub fn write_u64(&mut self, value: u64, endianness: Endianness) {
        let mut bytes = [0u8; 8];
        match endianness {
            Endianness::Little => LittleEndian::write_u64(&mut bytes, value),
            Endianness::Big => BigEndian::write_u64(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    /// Writes a variable-length integer in its canonical form: the
    /// narrowest width that holds the value.
    pub fn write_varint(&mut self, value: u64) {
        match value {
            0..=0xfc => self.write_u8(value as u8),
            0xfd..=0xffff => {
                self.write_u8(0xfd);
                self.write_u16(value as u16, Endianness::Little);
            }
            0x1_0000..=0xffff_ffff => {
                self.write_u8(0xfe);
                self.write_u32(value as u32, Endianness::Little);
            }
            _ => {
                self.write_u8(0xff);
                self.write_u64(value, Endianness::Little);
            }
        }
    }

    /// Writes an ASCII string into a fixed-width field, zero-padded at the
    /// end. Fails if the string exceeds the field or is not ASCII.
    pub fn write_ascii_padded(
        &mut self,
        value: &str,
        field: &'static str,
        width: usize,
    ) -> Result<()> {
        if !value.is_ascii() {
            return Err(WireError::InvalidEncoding("non-ASCII fixed field"));
        }
        if value.len() > width {
            return Err(WireError::FieldTooLong {
                field,
                len: value.len(),
                max: width,
            });
        }

        self.buf.extend_from_slice(value.as_bytes());
        self.buf.resize(self.buf.len() + width - value.len(), 0x00);

        Ok(())
    }

    /// Writes a varint length prefix followed by the ASCII bytes.
    pub fn write_var_string(&mut self, value: &str) -> Result<()> {
        if !value.is_ascii() {
            return Err(WireError::InvalidEncoding("non-ASCII string"));
        }

        self.write_varint(value.len() as u64);
        self.buf.extend_from_slice(value.as_bytes());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::reader::ByteReader;
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn test_varint_roundtrip(value: u64) -> bool {
        let mut writer = ByteWriter::new();
        writer.write_varint(value);

        let mut reader = ByteReader::new(writer.as_bytes());
        reader.read_varint().unwrap() == value && reader.is_empty()
    }

    #[test]
    fn test_varint_normalized_on_reencode() {
        // Non-canonical input decodes fine but re-encodes minimally.
        let mut reader = ByteReader::new(&[0xfd, 0x0a, 0x00]);
        let value = reader.read_varint().unwrap();

        let mut writer = ByteWriter::new();
        writer.write_varint(value);

        assert_eq!(writer.as_bytes(), &[0x0a]);
    }

    #[test]
    fn test_write_u8() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0x01);

        assert_eq!(writer.as_bytes(), &[0x01]);
    }

    #[test]
    fn test_write_u16() {
        let mut writer = ByteWriter::new();
        writer.write_u16(0x0102, Endianness::Little);
        writer.write_u16(0x0102, Endianness::Big);

        assert_eq!(writer.as_bytes(), &[0x02, 0x01, 0x01, 0x02]);
    }

    #[test]
    fn test_write_u32() {
        let mut writer = ByteWriter::new();
        writer.write_u32(0x01020304, Endianness::Little);
        writer.write_u32(0x01020304, Endianness::Big);

        assert_eq!(
            writer.as_bytes(),
            &[0x04, 0x03, 0x02, 0x01, 0x01, 0x02, 0x03, 0x04]
        );
    }

    #[test]
    fn test_write_u64() {
        let mut writer = ByteWriter::new();
        writer.write_u64(0x0102030405060708, Endianness::Little);

        assert_eq!(
            writer.as_bytes(),
            &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );

        let mut writer = ByteWriter::new();
        writer.write_u64(0x0102030405060708, Endianness::Big);

        assert_eq!(
            writer.as_bytes(),
            &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
        );
    }

    #[test]
    fn test_write_varint_boundaries() {
        let mut writer = ByteWriter::new();
        writer.write_varint(0xfc);
        assert_eq!(writer.as_bytes(), &[0xfc]);

        let mut writer = ByteWriter::new();
        writer.write_varint(0xfd);
        assert_eq!(writer.as_bytes(), &[0xfd, 0xfd, 0x00]);

        let mut writer = ByteWriter::new();
        writer.write_varint(0x1_0000);
        assert_eq!(writer.as_bytes(), &[0xfe, 0x00, 0x00, 0x01, 0x00]);

        let mut writer = ByteWriter::new();
        writer.write_varint(0x1_0000_0000);
        assert_eq!(
            writer.as_bytes(),
            &[0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_write_ascii_padded() {
        let mut writer = ByteWriter::new();
        writer.write_ascii_padded("abc", "test", 6).unwrap();

        assert_eq!(writer.as_bytes(), &[0x61, 0x62, 0x63, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_write_ascii_padded_too_long() {
        let mut writer = ByteWriter::new();

        assert_eq!(
            writer.write_ascii_padded("abcdefg", "test", 6),
            Err(WireError::FieldTooLong {
                field: "test",
                len: 7,
                max: 6,
            })
        );
        assert!(writer.is_empty());
    }

    #[test]
    fn test_write_var_string() {
        let mut writer = ByteWriter::new();
        writer.write_var_string("abc").unwrap();

        assert_eq!(writer.as_bytes(), &[0x03, 0x61, 0x62, 0x63]);
    }

    #[test]
    fn test_write_var_string_rejects_non_ascii() {
        let mut writer = ByteWriter::new();

        assert!(writer.write_var_string("café").is_err());
        assert!(writer.is_empty());
    }
}

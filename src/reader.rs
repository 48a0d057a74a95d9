use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::encode::Endianness;
use super::errors::{Result, WireError};

/// ByteReader is a sequential decode cursor over a borrowed byte slice.
///
/// Every read either consumes exactly the bytes it returns or fails with
/// [`WireError::InsufficientData`] and leaves the cursor untouched, so a
/// caller reading from a partially buffered transport can retry the same
/// decode once more bytes arrive.
#[derive(Debug)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads exactly `len` bytes, or fails without consuming anything.
    pub fn read_fixed(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(WireError::InsufficientData {
                needed: len,
                available: self.remaining(),
            });
        }

        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;

        Ok(bytes)
    }

    /// Drains all remaining bytes. An already exhausted reader yields an
    /// empty slice, not an error.
    pub fn read_remaining(&mut self) -> &'a [u8] {
        let bytes = &self.buf[self.pos..];
        self.pos = self.buf.len();

        bytes
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.read_fixed(1)?;

        Ok(bytes[0])
    }

    pub fn read_u16(&mut self, endianness: Endianness) -> Result<u16> {
        let bytes = self.read_fixed(2)?;

        Ok(match endianness {
            Endianness::Little => LittleEndian::read_u16(bytes),
            Endianness::Big => BigEndian::read_u16(bytes),
        })
    }

    pub fn read_u32(&mut self, endianness: Endianness) -> Result<u32> {
        let bytes = self.read_fixed(4)?;

        Ok(match endianness {
            Endianness::Little => LittleEndian::read_u32(bytes),
            Endianness::Big => BigEndian::read_u32(bytes),
        })
    }

    pub fn read_u64(&mut self, endianness: Endianness) -> Result<u64> {
        let bytes = self.read_fixed(8)?;

        Ok(match endianness {
            Endianness::Little => LittleEndian::read_u64(bytes),
            Endianness::Big => BigEndian::read_u64(bytes),
        })
    }

    /// Reads a variable-length integer.
    ///
    /// The first byte selects the width: values below 0xFD are stored in
    /// that byte directly; 0xFD, 0xFE and 0xFF prefix a little-endian u16,
    /// u32 or u64 respectively. Non-canonical encodings (a wide prefix for
    /// a small value) are accepted.
    pub fn read_varint(&mut self) -> Result<u64> {
        let start = self.pos;

        let result = match self.read_u8()? {
            0xfd => self.read_u16(Endianness::Little).map(u64::from),
            0xfe => self.read_u32(Endianness::Little).map(u64::from),
            0xff => self.read_u64(Endianness::Little),
            byte => Ok(u64::from(byte)),
        };

        // The prefix byte must not stay consumed when the trailing bytes
        // are short.
        if result.is_err() {
            self.pos = start;
        }

        result
    }

    /// Reads a fixed-width ASCII field, stripping the trailing zero-byte
    /// padding.
    pub fn read_ascii_fixed(&mut self, width: usize) -> Result<String> {
        let bytes = self.read_fixed(width)?;

        let len = width - bytes.iter().rev().take_while(|&&b| b == 0).count();
        let bytes = &bytes[..len];

        if !bytes.is_ascii() {
            self.pos -= width;
            return Err(WireError::InvalidEncoding("non-ASCII fixed field"));
        }

        // ASCII checked above, so UTF-8 conversion cannot fail.
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Reads a varint length prefix followed by that many ASCII bytes.
    pub fn read_var_string(&mut self) -> Result<String> {
        let start = self.pos;

        let result = self.read_var_string_inner();
        if result.is_err() {
            self.pos = start;
        }

        result
    }

    fn read_var_string_inner(&mut self) -> Result<String> {
        let len = self.read_varint()?;
        let bytes = self.read_fixed(len as usize)?;

        if !bytes.is_ascii() {
            return Err(WireError::InvalidEncoding("non-ASCII string"));
        }

        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

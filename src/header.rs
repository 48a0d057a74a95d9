use super::command::Command;
use super::encode::{Decodable, Encodable, Endianness};
use super::errors::Result;
use super::network::Network;
use super::reader::ByteReader;
use super::writer::ByteWriter;

/// Size of the fixed message header, in bytes.
/// https://developer.bitcoin.org/reference/p2p_networking.html#message-headers
pub const HEADER_SIZE: usize = 24;

/// The 24-byte envelope framing every message payload.
///
/// The header says nothing about the payload beyond its length and
/// checksum; the caller reads `payload_length` bytes immediately after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    pub network: Network,
    pub command: Command,
    pub payload_length: u32,

    /// First 4 bytes of the externally computed double-SHA256 of the
    /// payload, carried opaquely. This layer never computes or verifies
    /// it; build the value with [`MessageHeader::checksum_from_hash`] so
    /// the raw hash bytes survive on the wire unchanged.
    pub checksum: u32,
}

impl MessageHeader {
    pub fn new(network: Network, command: Command, payload_length: u32, checksum: u32) -> Self {
        Self {
            network,
            command,
            payload_length,
            checksum,
        }
    }

    /// Packs the leading bytes of a payload hash into the checksum field.
    /// The field is written little-endian, so this preserves byte order:
    /// the four bytes given here are the four bytes on the wire.
    pub fn checksum_from_hash(first_four: [u8; 4]) -> u32 {
        u32::from_le_bytes(first_four)
    }
}

impl Encodable for MessageHeader {
    fn encode(&self, writer: &mut ByteWriter) -> Result<()> {
        // start string char[4]
        self.network.encode(writer)?;

        // command name char[12], null padded
        self.command.encode(writer)?;

        // payload length uint32
        writer.write_u32(self.payload_length, Endianness::Little);

        // checksum char[4]
        writer.write_u32(self.checksum, Endianness::Little);

        Ok(())
    }
}

impl Decodable for MessageHeader {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        Ok(Self {
            network: Network::decode(reader)?,
            command: Command::decode(reader)?,
            payload_length: reader.read_u32(Endianness::Little)?,
            checksum: reader.read_u32(Endianness::Little)?,
        })
    }
}

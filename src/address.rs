use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use byteorder::{BigEndian, ByteOrder};

use super::encode::{Decodable, Encodable, Endianness};
use super::errors::Result;
use super::reader::ByteReader;
use super::writer::ByteWriter;

/// ServiceFlags represents the service bitmask of a node
/// https://developer.bitcoin.org/reference/p2p_networking.html#version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceFlags(u64);

impl ServiceFlags {
    /// This node is not a full node. It may not be able to provide any data except for the transactions it originates.
    pub const UNNAMED: ServiceFlags = ServiceFlags(0);

    /// This is a full node and can be asked for full blocks. It should implement all protocol features available in its self-reported protocol version
    pub const NODE_NETWORK: ServiceFlags = ServiceFlags(0x1);

    /// This is a full node capable of responding to the getutxo protocol request. This is not supported by any currently-maintained Bitcoin node.
    pub const NODE_GETUTXO: ServiceFlags = ServiceFlags(0x2);

    /// This is a full node capable and willing to handle bloom-filtered connections.
    pub const NODE_BLOOM: ServiceFlags = ServiceFlags(0x4);

    /// This is a full node that can be asked for blocks and transactions including witness data.
    pub const NODE_WITNESS: ServiceFlags = ServiceFlags(0x8);

    /// This is the same as NODE_NETWORK but the node has at least the last 288 blocks (last 2 days).
    pub const NODE_NETWORK_LIMITED: ServiceFlags = ServiceFlags(0x0400);

    /// Gets the integer representation of this ServiceFlags
    pub fn to_u64(self) -> u64 {
        self.0
    }

    /// Gets the ServiceFlags from an integer representation
    pub fn from_u64(n: u64) -> Self {
        ServiceFlags(n)
    }
}

impl From<u64> for ServiceFlags {
    fn from(n: u64) -> Self {
        ServiceFlags(n)
    }
}

/// The 12-byte prefix that marks an IPv4-mapped IPv6 address
/// (`::ffff:a.b.c.d`) in the 16-byte wire field.
const V4_MAPPED_PREFIX: [u8; 12] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff,
];

/// A peer address as carried on the wire: always 16 bytes, with IPv4
/// addresses embedded in their IPv4-mapped IPv6 form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpAddress {
    V4(u32),
    V6(u32, u32, u32, u32),
}

impl IpAddress {
    /// Converts to the standard library representation. IPv4-mapped
    /// addresses come back as plain [`IpAddr::V4`].
    pub fn to_ip_addr(self) -> IpAddr {
        match self {
            IpAddress::V4(addr) => IpAddr::V4(Ipv4Addr::from(addr)),
            IpAddress::V6(a, b, c, d) => {
                let mut octets = [0u8; 16];
                BigEndian::write_u32(&mut octets[0..4], a);
                BigEndian::write_u32(&mut octets[4..8], b);
                BigEndian::write_u32(&mut octets[8..12], c);
                BigEndian::write_u32(&mut octets[12..16], d);
                IpAddr::V6(Ipv6Addr::from(octets))
            }
        }
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => IpAddress::V4(u32::from(v4)),
            IpAddr::V6(v6) => {
                let octets = v6.octets();
                IpAddress::V6(
                    BigEndian::read_u32(&octets[0..4]),
                    BigEndian::read_u32(&octets[4..8]),
                    BigEndian::read_u32(&octets[8..12]),
                    BigEndian::read_u32(&octets[12..16]),
                )
            }
        }
    }
}

impl Encodable for IpAddress {
    fn encode(&self, writer: &mut ByteWriter) -> Result<()> {
        match *self {
            IpAddress::V4(addr) => {
                writer.write_bytes(&V4_MAPPED_PREFIX);
                // The embedded IPv4 address is in network byte order.
                writer.write_u32(addr, Endianness::Big);
            }
            IpAddress::V6(a, b, c, d) => {
                for word in [a, b, c, d] {
                    writer.write_u32(word, Endianness::Big);
                }
            }
        }

        Ok(())
    }
}

impl Decodable for IpAddress {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        let bytes = reader.read_fixed(16)?;

        if bytes[..12] == V4_MAPPED_PREFIX {
            Ok(IpAddress::V4(BigEndian::read_u32(&bytes[12..16])))
        } else {
            Ok(IpAddress::V6(
                BigEndian::read_u32(&bytes[0..4]),
                BigEndian::read_u32(&bytes[4..8]),
                BigEndian::read_u32(&bytes[8..12]),
                BigEndian::read_u32(&bytes[12..16]),
            ))
        }
    }
}

/// A timestamped peer record, 30 bytes on the wire.
///
/// Everything is little-endian except the port, which the protocol keeps
/// in network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkAddress {
    /// Seconds since the Unix epoch, truncated to 32 bits.
    pub timestamp: u32,

    /// The services advertised by the peer.
    pub services: ServiceFlags,

    pub address: IpAddress,

    pub port: u16,
}

impl NetworkAddress {
    pub fn new(timestamp: u32, services: ServiceFlags, address: IpAddress, port: u16) -> Self {
        Self {
            timestamp,
            services,
            address,
            port,
        }
    }

    /// Builds a record from a socket address, the usual source when
    /// advertising a connected peer.
    pub fn from_socket_addr(timestamp: u32, services: ServiceFlags, socket: SocketAddr) -> Self {
        Self::new(timestamp, services, socket.ip().into(), socket.port())
    }
}

impl Encodable for NetworkAddress {
    fn encode(&self, writer: &mut ByteWriter) -> Result<()> {
        writer.write_u32(self.timestamp, Endianness::Little);
        writer.write_u64(self.services.to_u64(), Endianness::Little);
        self.address.encode(writer)?;
        writer.write_u16(self.port, Endianness::Big);

        Ok(())
    }
}

impl Decodable for NetworkAddress {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        Ok(Self {
            timestamp: reader.read_u32(Endianness::Little)?,
            services: ServiceFlags::from_u64(reader.read_u64(Endianness::Little)?),
            address: IpAddress::decode(reader)?,
            port: reader.read_u16(Endianness::Big)?,
        })
    }
}

use super::encode::{Decodable, Encodable, Endianness};
use super::errors::{Result, WireError};
use super::reader::ByteReader;
use super::writer::ByteWriter;

/// Represents the network to which a message belongs.
///
/// The 4-byte magic at the start of every message header identifies the
/// network and doubles as a frame boundary marker in the byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    /// Mainnet
    /// Default Port 8333
    MainNet,

    /// Testnet
    /// Default Port 18333
    TestNet,

    /// Regtest
    /// Default Port 18444
    RegTest,
}

impl Network {
    /// The magic constant, as a u32 read little-endian off the wire.
    pub const fn magic(self) -> u32 {
        match self {
            Network::MainNet => 0xd9b4bef9,
            Network::TestNet => 0x0709110b,
            Network::RegTest => 0xdab5bffa,
        }
    }

    pub fn from_magic(magic: u32) -> Result<Self> {
        match magic {
            0xd9b4bef9 => Ok(Self::MainNet),
            0x0709110b => Ok(Self::TestNet),
            0xdab5bffa => Ok(Self::RegTest),
            unknown => Err(WireError::UnknownNetwork(unknown)),
        }
    }

    pub const fn default_port(self) -> u16 {
        match self {
            Network::MainNet => 8333,
            Network::TestNet => 18333,
            Network::RegTest => 18444,
        }
    }
}

impl Encodable for Network {
    fn encode(&self, writer: &mut ByteWriter) -> Result<()> {
        writer.write_u32(self.magic(), Endianness::Little);

        Ok(())
    }
}

impl Decodable for Network {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        Network::from_magic(reader.read_u32(Endianness::Little)?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::encode::{decode, encode};
    use super::*;
    use quickcheck::{Arbitrary, TestResult};
    use quickcheck_macros::quickcheck;

    impl Arbitrary for Network {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            match u8::arbitrary(g) % 3 {
                0 => Self::MainNet,
                1 => Self::TestNet,
                2 => Self::RegTest,
                _ => unreachable!(),
            }
        }
    }

    #[quickcheck]
    fn test_roundtrip(network: Network) -> TestResult {
        let bytes = encode(&network).unwrap();
        let network2 = decode::<Network>(&bytes).unwrap();
        TestResult::from_bool(network == network2)
    }

    #[test]
    fn test_magic_bytes() {
        assert_eq!(
            encode(&Network::MainNet).unwrap(),
            vec![0xf9, 0xbe, 0xb4, 0xd9]
        );
        assert_eq!(
            encode(&Network::TestNet).unwrap(),
            vec![0x0b, 0x11, 0x09, 0x07]
        );
        assert_eq!(
            encode(&Network::RegTest).unwrap(),
            vec![0xfa, 0xbf, 0xb5, 0xda]
        );
    }

    #[test]
    fn test_unknown_magic() {
        assert_eq!(
            decode::<Network>(&[0xde, 0xad, 0xbe, 0xef]),
            Err(WireError::UnknownNetwork(0xefbeadde))
        );
    }

    #[test]
    fn test_truncated() {
        assert_eq!(
            decode::<Network>(&[0xf9, 0xbe]),
            Err(WireError::InsufficientData {
                needed: 4,
                available: 2
            })
        );
    }
}

use super::encode::{Decodable, Encodable};
use super::errors::Result;
use super::reader::ByteReader;
use super::writer::ByteWriter;

/// Width of the command field in the message header.
pub const COMMAND_WIDTH: usize = 12;

/// A message command name, stored on the wire as a 12-byte null-padded
/// ASCII field.
///
/// The protocol's command set is extensible, so names outside the known
/// set decode to [`Command::Other`] instead of failing; they re-encode
/// byte-identically as long as they fit the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Version,
    VerAck,
    Addr,
    Inv,
    GetData,
    Ping,
    Pong,
    Other(String),
}

impl Command {
    pub fn as_str(&self) -> &str {
        match self {
            Command::Version => "version",
            Command::VerAck => "verack",
            Command::Addr => "addr",
            Command::Inv => "inv",
            Command::GetData => "getdata",
            Command::Ping => "ping",
            Command::Pong => "pong",
            Command::Other(name) => name,
        }
    }

    /// Maps a command name onto the known set, falling back to
    /// [`Command::Other`]. Known names never end up in the `Other` arm, so
    /// equality on `Command` matches equality on the wire bytes.
    pub fn from_name(name: &str) -> Self {
        match name {
            "version" => Self::Version,
            "verack" => Self::VerAck,
            "addr" => Self::Addr,
            "inv" => Self::Inv,
            "getdata" => Self::GetData,
            "ping" => Self::Ping,
            "pong" => Self::Pong,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Encodable for Command {
    fn encode(&self, writer: &mut ByteWriter) -> Result<()> {
        writer.write_ascii_padded(self.as_str(), "command", COMMAND_WIDTH)
    }
}

impl Decodable for Command {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        let name = reader.read_ascii_fixed(COMMAND_WIDTH)?;

        Ok(Command::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::super::encode::{decode, encode};
    use super::super::errors::WireError;
    use super::*;
    use quickcheck::{Arbitrary, TestResult};
    use quickcheck_macros::quickcheck;

    impl Arbitrary for Command {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            match u8::arbitrary(g) % 8 {
                0 => Self::Version,
                1 => Self::VerAck,
                2 => Self::Addr,
                3 => Self::Inv,
                4 => Self::GetData,
                5 => Self::Ping,
                6 => Self::Pong,
                7 => Self::Other("filterclear".to_string()),
                _ => unreachable!(),
            }
        }
    }

    #[quickcheck]
    fn test_roundtrip(command: Command) -> TestResult {
        let bytes = encode(&command).unwrap();
        let command2 = decode::<Command>(&bytes).unwrap();
        TestResult::from_bool(command == command2)
    }

    #[test]
    fn test_version_padding() {
        let bytes = encode(&Command::Version).unwrap();

        assert_eq!(
            bytes,
            vec![0x76, 0x65, 0x72, 0x73, 0x69, 0x6f, 0x6e, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_decode_strips_padding() {
        assert_eq!(
            decode::<Command>(b"version\0\0\0\0\0").unwrap(),
            Command::Version
        );
        assert_eq!(
            decode::<Command>(b"sendheaders\0").unwrap(),
            Command::Other("sendheaders".to_string())
        );
    }

    #[test]
    fn test_known_name_never_decodes_to_other() {
        assert_eq!(Command::from_name("inv"), Command::Inv);
        assert_eq!(decode::<Command>(b"inv\0\0\0\0\0\0\0\0\0").unwrap(), Command::Inv);
    }

    #[test]
    fn test_encode_too_long() {
        let command = Command::Other("waylongcommandname".to_string());

        assert_eq!(
            encode(&command),
            Err(WireError::FieldTooLong {
                field: "command",
                len: 18,
                max: COMMAND_WIDTH,
            })
        );
    }

    #[test]
    fn test_decode_non_ascii() {
        let bytes = [0xc3, 0xa9, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

        assert_eq!(
            decode::<Command>(&bytes),
            Err(WireError::InvalidEncoding("non-ASCII fixed field"))
        );
    }

    #[test]
    fn test_truncated() {
        assert!(matches!(
            decode::<Command>(b"ping\0\0"),
            Err(WireError::InsufficientData { .. })
        ));
    }
}

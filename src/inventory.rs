use super::encode::{Decodable, Encodable, Endianness};
use super::errors::Result;
use super::reader::ByteReader;
use super::writer::ByteWriter;

/// Size of a single inventory vector on the wire: type plus hash.
pub const INVENTORY_VECTOR_SIZE: usize = 36;

/// The kind of object an inventory vector refers to.
///
/// Codes outside the known set are preserved in [`InventoryType::Other`]
/// so that vectors from newer peers round-trip instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryType {
    /// Any data of this type may be ignored.
    Error,
    Transaction,
    Block,
    Other(u32),
}

impl InventoryType {
    pub fn to_raw(self) -> u32 {
        match self {
            InventoryType::Error => 0,
            InventoryType::Transaction => 1,
            InventoryType::Block => 2,
            InventoryType::Other(raw) => raw,
        }
    }

    /// Never yields `Other` for a known code, so enum equality matches
    /// wire equality.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => InventoryType::Error,
            1 => InventoryType::Transaction,
            2 => InventoryType::Block,
            other => InventoryType::Other(other),
        }
    }
}

/// A typed reference to an object a peer can advertise or request:
/// 36 bytes, a type code followed by a 32-byte hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryVector {
    pub kind: InventoryType,
    pub hash: [u8; 32],
}

impl InventoryVector {
    pub fn new(kind: InventoryType, hash: [u8; 32]) -> Self {
        Self { kind, hash }
    }
}

impl Encodable for InventoryVector {
    fn encode(&self, writer: &mut ByteWriter) -> Result<()> {
        writer.write_u32(self.kind.to_raw(), Endianness::Little);
        writer.write_bytes(&self.hash);

        Ok(())
    }
}

impl Decodable for InventoryVector {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        let kind = InventoryType::from_raw(reader.read_u32(Endianness::Little)?);

        let mut hash = [0u8; 32];
        hash.copy_from_slice(reader.read_fixed(32)?);

        Ok(Self { kind, hash })
    }
}

/// An ordered, varint-counted list of inventory vectors, the body of the
/// `inv` and `getdata` messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryList {
    pub vectors: Vec<InventoryVector>,
}

impl InventoryList {
    pub fn new(vectors: Vec<InventoryVector>) -> Self {
        Self { vectors }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl Encodable for InventoryList {
    fn encode(&self, writer: &mut ByteWriter) -> Result<()> {
        writer.write_varint(self.vectors.len() as u64);

        for vector in &self.vectors {
            vector.encode(writer)?;
        }

        Ok(())
    }
}

impl Decodable for InventoryList {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        let count = reader.read_varint()? as usize;

        let mut vectors = Vec::with_capacity(count.min(reader.remaining() / INVENTORY_VECTOR_SIZE));
        for _ in 0..count {
            vectors.push(InventoryVector::decode(reader)?);
        }

        Ok(Self { vectors })
    }
}

//! Byte-exact codec for the Bitcoin p2p wire format
//!
//! This crate converts in-memory protocol values to and from their
//! canonical wire bytes: compact varints, fixed-width ASCII fields, the
//! 16-byte IP address layout, network-address records, the 24-byte message
//! header and inventory-vector lists. It is a pure, synchronous transcoder:
//! transport I/O and payload checksum computation stay with the caller.

mod address;
mod command;
mod encode;
mod errors;
mod header;
mod inventory;
mod network;
mod reader;
mod writer;

pub use address::{IpAddress, NetworkAddress, ServiceFlags};
pub use command::{Command, COMMAND_WIDTH};
pub use encode::{decode, encode, Decodable, Encodable, Endianness};
pub use errors::{Result, WireError};
pub use header::{MessageHeader, HEADER_SIZE};
pub use inventory::{InventoryList, InventoryType, InventoryVector, INVENTORY_VECTOR_SIZE};
pub use network::Network;
pub use reader::ByteReader;
pub use writer::ByteWriter;

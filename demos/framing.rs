use anyhow::Result;
use btc_wire::{
    decode, encode, Command, InventoryList, InventoryType, InventoryVector, MessageHeader,
    Network, HEADER_SIZE,
};
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::net::SocketAddr;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

/// This demo frames an `inv` message and exchanges it over a loopback TCP
/// connection, with the demo itself standing in for the two external
/// collaborators the codec assumes: the transport and the double-SHA256
/// checksum function.

fn checksum(payload: &[u8]) -> [u8; 4] {
    let hash = Sha256::digest(Sha256::digest(payload));

    let mut first_four = [0u8; 4];
    first_four.copy_from_slice(&hash[..4]);

    first_four
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = send_inv(addr).await {
            tracing::error!("Failed to send inv: {}", err);
        }
    });

    let (mut stream, peer) = listener.accept().await?;
    tracing::info!("Accepted connection from {}", peer);

    // The header is fixed-size; the payload length comes from it.
    let mut header_bytes = [0u8; HEADER_SIZE];
    stream.read_exact(&mut header_bytes).await?;
    let header = decode::<MessageHeader>(&header_bytes)?;

    tracing::info!(
        "Received {:?} header on {:?}, {} payload bytes",
        header.command,
        header.network,
        header.payload_length
    );

    let mut payload = vec![0u8; header.payload_length as usize];
    stream.read_exact(&mut payload).await?;

    if MessageHeader::checksum_from_hash(checksum(&payload)) != header.checksum {
        anyhow::bail!("Checksum mismatch");
    }

    let inventory = decode::<InventoryList>(&payload)?;
    for vector in &inventory.vectors {
        tracing::info!("Advertised {:?} {:02x?}", vector.kind, vector.hash);
    }

    Ok(())
}

async fn send_inv(addr: SocketAddr) -> Result<()> {
    let mut stream = TcpStream::connect(addr).await?;

    let mut hash = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut hash);

    let inventory =
        InventoryList::new(vec![InventoryVector::new(InventoryType::Transaction, hash)]);
    let payload = encode(&inventory)?;

    let header = MessageHeader::new(
        Network::RegTest,
        Command::Inv,
        payload.len() as u32,
        MessageHeader::checksum_from_hash(checksum(&payload)),
    );

    let mut frame = encode(&header)?;
    frame.extend_from_slice(&payload);
    stream.write_all(&frame).await?;

    tracing::info!("Sent inv frame of {} bytes", frame.len());

    Ok(())
}

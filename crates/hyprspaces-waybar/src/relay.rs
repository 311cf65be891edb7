//! Socket to stdout relay
//!
//! Reads the waybar socket in fixed-size chunks and writes each chunk to the
//! output as soon as it arrives. Bytes are forwarded untouched; the peer's
//! payload format is opaque here.

use std::io::ErrorKind;
use std::path::Path;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::UnixStream;

use crate::error::RelayError;

/// Maximum number of bytes read from the socket per iteration
pub const CHUNK_SIZE: usize = 4096;

/// Connect to the waybar socket at `path`
pub async fn connect(path: &Path) -> Result<UnixStream, RelayError> {
    tracing::debug!("Connecting to waybar socket at {}", path.display());

    UnixStream::connect(path)
        .await
        .map_err(|source| RelayError::Connect {
            path: path.to_path_buf(),
            source,
        })
}

/// Copy `reader` into `writer` until end of stream
///
/// Every chunk is written in full and flushed before the next read, so a
/// consumer sees each update as soon as the peer sends it. Returns the total
/// number of bytes forwarded.
pub async fn relay<R, W>(reader: &mut R, writer: &mut W) -> Result<u64, RelayError>
where
    R: AsyncRead + Unpin + ?Sized,
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(RelayError::Read(e)),
        };

        writer.write_all(&buf[..n]).await.map_err(RelayError::Write)?;
        writer.flush().await.map_err(RelayError::Write)?;

        total += n as u64;
        tracing::trace!(bytes = n, total, "Forwarded chunk");
    }

    tracing::debug!(total, "Peer closed the connection");
    Ok(total)
}

/// Connect to `path` and relay everything it sends to stdout
pub async fn run(path: &Path) -> Result<u64, RelayError> {
    let mut stream = connect(path).await?;
    let mut stdout = tokio::io::stdout();

    let total = relay(&mut stream, &mut stdout).await?;

    // The peer is already gone, so a failed shutdown changes nothing.
    if let Err(e) = stream.shutdown().await {
        tracing::debug!("Socket shutdown after end of stream failed: {}", e);
    }

    Ok(total)
}

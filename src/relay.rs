use futures::FutureExt;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::{insist::insist_write, Error};

/// Bytes taken from either source per read.
pub const BUFFER_CAPACITY: usize = 100;

/// Why the relay stopped without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The peer closed its sending side (a read of zero bytes on the connection).
    PeerClosed,
    /// The local input reached end of file.
    InputClosed,
}

/// Turn the `n` bytes read into `buf` into one line: the last byte read is replaced
/// by a terminator and everything up to the first terminator is the payload.
///
/// A read that fills the whole buffer therefore loses its final byte, and a payload
/// never exceeds `buf.len() - 1` bytes. Zero bytes read yield an empty payload.
pub fn line_payload(buf: &mut [u8], n: usize) -> &[u8] {
    if n == 0 {
        return &[];
    }
    buf[n - 1] = 0;
    let end = buf[..n].iter().position(|&b| b == 0).unwrap_or(n - 1);
    &buf[..end]
}

/// Wait on `input` and `reader` at the same time and shovel bytes across until one side closes.
///
/// Lines read from `input` are cut with [`line_payload`] and sent on `writer`.
/// Chunks read from `reader` are written to `output` as they are, followed by a newline.
/// When both sources are ready, both are served before waiting again.
///
/// # Termination
/// If EOF is signalled on `reader` by `Ok(0)`, return [`Outcome::PeerClosed`].
/// If EOF is signalled on `input` by `Ok(0)`, return [`Outcome::InputClosed`]; this wins
/// when both sides close in the same pass.
/// Any read or write error ends the relay with that error.
pub async fn relay<Input, Output, Reader, Writer>(
    input: &mut Input,
    output: &mut Output,
    reader: &mut Reader,
    writer: &mut Writer,
) -> Result<Outcome, Error>
where
    Input: AsyncRead + Unpin,
    Output: AsyncWrite + Unpin,
    Reader: AsyncRead + Unpin,
    Writer: AsyncWrite + Unpin,
{
    let mut input_buf = [0u8; BUFFER_CAPACITY];
    let mut socket_buf = [0u8; BUFFER_CAPACITY];

    loop {
        // Reads are cancel safe, so peeking at the other source with `now_or_never` loses nothing.
        let (local, remote) = tokio::select! {
            biased;
            read = input.read(&mut input_buf) => {
                (Some(read), reader.read(&mut socket_buf).now_or_never())
            }
            read = reader.read(&mut socket_buf) => {
                (input.read(&mut input_buf).now_or_never(), Some(read))
            }
        };

        let mut input_closed = false;
        if let Some(read) = local {
            let n = read.map_err(Error::LocalRead)?;
            let payload = line_payload(&mut input_buf, n);
            // On EOF the payload is empty and this issues no write.
            insist_write(writer, payload)
                .await
                .map_err(Error::RemoteWrite)?;
            input_closed = n == 0;
        }

        // A chunk already taken from the peer in this pass is relayed even when
        // the local input closed, so stopping never loses received bytes.
        if let Some(read) = remote {
            let n = read.map_err(Error::RemoteRead)?;
            if n > 0 {
                insist_write(output, &socket_buf[..n])
                    .await
                    .map_err(Error::LocalWrite)?;
                insist_write(output, b"\n")
                    .await
                    .map_err(Error::LocalWrite)?;
                output.flush().await.map_err(Error::LocalWrite)?;
            } else if !input_closed {
                tracing::info!("End Of Communication");
                return Ok(Outcome::PeerClosed);
            }
        }

        if input_closed {
            tracing::debug!("local input closed");
            return Ok(Outcome::InputClosed);
        }
    }
}

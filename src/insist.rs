use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Write all of `buf` to `writer`, issuing as many `write` calls as the writer needs.
///
/// Short writes are retried with the remainder. The first failing `write` is returned
/// as-is and nothing further is attempted. An empty `buf` issues no call at all.
///
/// Returns `buf.len()` on success.
pub async fn insist_write<W>(writer: &mut W, buf: &[u8]) -> io::Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut rest = buf;
    while !rest.is_empty() {
        let written = writer.write(rest).await?;
        if written == 0 {
            return Err(io::ErrorKind::WriteZero.into());
        }
        rest = &rest[written..];
    }
    Ok(buf.len())
}

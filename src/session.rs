use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::{
    relay::{relay, Outcome},
    Error,
};

/// Tell the peer that nothing more will be sent, while leaving the inbound direction open.
pub async fn half_close<Writer>(writer: &mut Writer) -> Result<(), Error>
where
    Writer: AsyncWrite + Unpin,
{
    writer.shutdown().await.map_err(Error::Shutdown)
}

/// Relay between the local streams and the connection halves, then half-close the connection.
///
/// The half-close happens however the relay ended. If the relay failed, its error is
/// returned even when the half-close fails as well.
pub async fn run<Input, Output, Reader, Writer>(
    mut input: Input,
    mut output: Output,
    mut reader: Reader,
    mut writer: Writer,
) -> Result<Outcome, Error>
where
    Input: AsyncRead + Unpin,
    Output: AsyncWrite + Unpin,
    Reader: AsyncRead + Unpin,
    Writer: AsyncWrite + Unpin,
{
    let relayed = relay(&mut input, &mut output, &mut reader, &mut writer).await;
    let closed = half_close(&mut writer).await;

    if let (Err(_), Err(Error::Shutdown(source))) = (&relayed, &closed) {
        tracing::error!("shutdown: {source}");
    }
    let outcome = relayed?;
    closed?;

    tracing::info!("Done.");
    Ok(outcome)
}

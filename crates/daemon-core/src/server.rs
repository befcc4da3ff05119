//! Session loops: one request line in, one framed response out

use crate::daemon::Daemon;
use crate::error::Result;
use std::future::Future;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn, Instrument, Level};
use voipd_infra_common::LogContext;

/// Pause after a failed accept before trying again
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The peer closed its side
    Eof,
    /// The peer sent `quit`
    Quit,
}

/// Serve requests read from `reader`, writing answers to `writer`.
///
/// Requests are handled strictly in order. Every response is followed by an
/// empty line so clients can find the end of a multi-line body.
pub async fn serve_stream<R, W>(daemon: &Daemon, reader: R, mut writer: W) -> Result<SessionEnd>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        let Some(dispatched) = daemon.dispatch(&line) else {
            continue;
        };

        writer.write_all(dispatched.response.to_wire().as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;

        if dispatched.quit {
            debug!("Session ended by quit");
            return Ok(SessionEnd::Quit);
        }
    }

    debug!("Session ended by peer");
    Ok(SessionEnd::Eof)
}

/// Serve the daemon on standard input and output
pub async fn serve_stdio(daemon: &Daemon) -> Result<SessionEnd> {
    let span = LogContext::with_operation("daemon", "session")
        .with_field("channel", "stdio")
        .span(Level::INFO);
    serve_stream(daemon, tokio::io::stdin(), tokio::io::stdout())
        .instrument(span)
        .await
}

/// Source of client connections for [`accept_loop`]
trait Acceptor {
    type Stream: AsyncRead + AsyncWrite + Send + 'static;

    /// Next client stream and a printable peer address
    fn accept(&mut self) -> impl Future<Output = io::Result<(Self::Stream, String)>> + Send;
}

impl Acceptor for TcpListener {
    type Stream = TcpStream;

    async fn accept(&mut self) -> io::Result<(TcpStream, String)> {
        let (stream, peer) = TcpListener::accept(self).await?;
        Ok((stream, peer.to_string()))
    }
}

/// Accept TCP clients forever, one task per connection.
///
/// A failed accept (a client resetting before it is accepted, descriptor
/// exhaustion) is logged and the listener keeps serving.
pub async fn serve_tcp(daemon: Arc<Daemon>, listener: TcpListener) -> Result<()> {
    let local = listener.local_addr()?;
    info!("Daemon listening on {}", local);
    accept_loop(daemon, listener).await
}

async fn accept_loop<A: Acceptor>(daemon: Arc<Daemon>, mut acceptor: A) -> Result<()> {
    loop {
        let (stream, peer) = match acceptor.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Failed to accept client: {}", e);
                tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                continue;
            }
        };
        let daemon = Arc::clone(&daemon);
        let span = LogContext::with_operation("daemon", "session")
            .with_field("peer", peer)
            .span(Level::INFO);

        tokio::spawn(
            async move {
                info!("Client connected");
                let (reader, writer) = tokio::io::split(stream);
                match serve_stream(&daemon, reader, writer).await {
                    Ok(end) => info!("Client session finished: {:?}", end),
                    Err(e) => error!("Client session failed: {}", e),
                }
            }
            .instrument(span),
        );
    }
}

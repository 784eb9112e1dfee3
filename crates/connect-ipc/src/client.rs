//! IPC client for the ConnectTool service.
//!
//! Every operation takes an explicit deadline. Connecting and the call itself
//! share the same deadline, so a caller that computes it once up front bounds
//! the whole exchange.

use crate::{IpcError, IpcResult};
use connect_protocol::{Call, Request, Response};
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::time::Instant;
use tracing::debug;

type BoxedReader = Box<dyn AsyncBufRead + Unpin + Send>;
type BoxedWriter = Box<dyn AsyncWrite + Unpin + Send>;

/// Handle to the service socket. Does not hold a connection.
#[derive(Debug, Clone)]
pub struct IpcClient {
    socket_path: PathBuf,
}

impl IpcClient {
    /// Create a new IPC client.
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    /// Path of the service socket.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Open a connection, giving up at `deadline`.
    pub async fn connect(&self, deadline: Instant) -> IpcResult<IpcConnection> {
        let (reader, writer) = before(deadline, async {
            open_stream(&self.socket_path).await.map_err(|e| {
                IpcError::Socket(format!(
                    "Failed to connect to {}: {}",
                    self.socket_path.display(),
                    e
                ))
            })
        })
        .await?;

        debug!(path = %self.socket_path.display(), "Connected to service");
        Ok(IpcConnection { reader, writer })
    }
}

/// An open connection to the service. Closed when dropped.
pub struct IpcConnection {
    reader: BoxedReader,
    writer: BoxedWriter,
}

impl IpcConnection {
    /// Send a raw request and wait for its response line.
    pub async fn call(&mut self, request: &Request, deadline: Instant) -> IpcResult<Response> {
        before(deadline, self.exchange(request)).await
    }

    /// Send a typed call and decode its result payload.
    ///
    /// An `error` in the response becomes [`IpcError::Remote`].
    pub async fn invoke<C: Call>(&mut self, call: &C, deadline: Instant) -> IpcResult<C::Response> {
        let request = Request::for_call(call)?;
        let response = self.call(&request, deadline).await?;

        if let Some(error) = response.error {
            return Err(IpcError::Remote {
                code: error.code,
                message: error.message,
            });
        }

        let result = response.result.ok_or_else(|| {
            IpcError::Protocol("Response carried neither result nor error".to_string())
        })?;
        Ok(serde_json::from_value(result)?)
    }

    async fn exchange(&mut self, request: &Request) -> IpcResult<Response> {
        let request_json = request.to_json()?;
        debug!(method = ?request.method, id = %request.id, "Sending request");

        self.writer.write_all(request_json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;

        let mut line = String::new();
        self.reader.read_line(&mut line).await?;

        if line.is_empty() {
            return Err(IpcError::ConnectionClosed);
        }

        let response = Response::from_json(line.trim())?;
        // The service answers unparseable requests with an empty id.
        if !response.id.is_empty() && response.id != request.id {
            return Err(IpcError::Protocol(format!(
                "Response id {} does not match request id {}",
                response.id, request.id
            )));
        }

        debug!(id = %response.id, success = response.is_success(), "Received response");
        Ok(response)
    }
}

async fn before<T, F>(deadline: Instant, fut: F) -> IpcResult<T>
where
    F: Future<Output = IpcResult<T>>,
{
    tokio::time::timeout_at(deadline, fut)
        .await
        .map_err(|_| IpcError::Timeout)?
}

#[cfg(unix)]
async fn open_stream(path: &Path) -> io::Result<(BoxedReader, BoxedWriter)> {
    let stream = tokio::net::UnixStream::connect(path).await?;
    let (reader, writer) = stream.into_split();
    Ok((Box::new(BufReader::new(reader)), Box::new(writer)))
}

/// Windows has AF_UNIX sockets but no async wrapper for them in tokio, so a
/// blocking socket is pumped through an in-memory duplex pipe on the blocking
/// pool. Pumps end when either side closes.
#[cfg(windows)]
async fn open_stream(path: &Path) -> io::Result<(BoxedReader, BoxedWriter)> {
    use std::net::Shutdown;
    use tokio_util::io::SyncIoBridge;
    use uds_windows::UnixStream;

    let path = path.to_path_buf();
    let stream = tokio::task::spawn_blocking(move || UnixStream::connect(path))
        .await
        .map_err(io::Error::other)??;
    let mut from_service = stream.try_clone()?;
    let mut to_service = stream;

    let (local, remote) = tokio::io::duplex(PUMP_BUFFER);
    let (remote_reader, remote_writer) = tokio::io::split(remote);
    let mut inbound = SyncIoBridge::new(remote_writer);
    let mut outbound = SyncIoBridge::new(remote_reader);

    tokio::task::spawn_blocking(move || {
        let _ = std::io::copy(&mut from_service, &mut inbound);
        let _ = inbound.shutdown();
    });
    tokio::task::spawn_blocking(move || {
        let _ = std::io::copy(&mut outbound, &mut to_service);
        // Unblocks the reader pump once the connection is dropped.
        let _ = to_service.shutdown(Shutdown::Both);
    });

    let (reader, writer) = tokio::io::split(local);
    Ok((Box::new(BufReader::new(reader)), Box::new(writer)))
}

#[cfg(windows)]
const PUMP_BUFFER: usize = 64 * 1024;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_connect_failure_is_socket_error() {
        let client = IpcClient::new("/tmp/definitely-does-not-exist-connecttool.sock");
        let deadline = Instant::now() + Duration::from_secs(1);

        match client.connect(deadline).await {
            Err(IpcError::Socket(message)) => {
                assert!(message.contains("definitely-does-not-exist-connecttool.sock"))
            }
            Err(other) => panic!("expected socket error, got {other:?}"),
            Ok(_) => panic!("expected socket error, got a connection"),
        }
    }

    #[tokio::test]
    async fn test_expired_deadline_times_out() {
        let result = before(Instant::now(), std::future::pending::<IpcResult<()>>()).await;
        assert!(matches!(result, Err(IpcError::Timeout)));
    }

    #[test]
    fn test_client_keeps_path() {
        let client = IpcClient::new("/tmp/connect_tool.sock");
        assert_eq!(client.socket_path(), Path::new("/tmp/connect_tool.sock"));
    }
}

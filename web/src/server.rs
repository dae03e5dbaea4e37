use std::{future::Future, io, net::SocketAddr, time::Duration};

use log::{info, warn};
use tokio::{
    io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader},
    net::{TcpListener, ToSocketAddrs},
    signal, time,
};

use crate::{
    App,
    http::{self, Response, Status},
};

const READ_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REQUEST_BYTES: u64 = 32 * 1024;

/// Serves the analyzer page, one connection at a time.
///
/// Each connection is read, answered and closed before the next one is
/// accepted, so requests never interleave on the history file.
pub struct Server {
    listener: TcpListener,
    app: App,
}

impl Server {
    /// Binds the listening socket.
    pub async fn bind<A: ToSocketAddrs>(addr: A, app: App) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, app })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves until Ctrl-C.
    pub async fn run(self) -> io::Result<()> {
        self.run_until(async {
            if let Err(e) = signal::ctrl_c().await {
                warn!("cannot listen for ctrl-c: {e}");
                std::future::pending::<()>().await;
            }
            info!("received SIGINT");
        })
        .await
    }

    /// Serves until `shutdown` completes. A connection in flight is finished
    /// before the future is polled again.
    pub async fn run_until<F: Future<Output = ()>>(self, shutdown: F) -> io::Result<()> {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    let (stream, peer) = match accepted {
                        Ok(conn) => conn,
                        Err(e) => {
                            warn!("accept failed: {e}");
                            continue;
                        }
                    };
                    if let Err(e) = serve_connection(&self.app, stream).await {
                        warn!("connection from {peer} failed: {e}");
                    }
                }
                _ = &mut shutdown => break,
            }
        }

        info!("server stopped");
        Ok(())
    }
}

/// Reads one request from `stream`, answers it and shuts the stream down.
///
/// # Errors
/// Returns an io error only if writing the response fails; malformed or
/// slow requests are answered or dropped.
pub async fn serve_connection<S>(app: &App, stream: S) -> io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (rx, mut tx) = tokio::io::split(stream);
    let mut reader = BufReader::new(rx.take(MAX_REQUEST_BYTES));

    let response = match time::timeout(READ_TIMEOUT, http::read_request(&mut reader)).await {
        Err(_) => {
            warn!("request read timed out");
            return Ok(());
        }
        Ok(Ok(None)) => return Ok(()),
        Ok(Ok(Some(req))) => {
            let response = app.handle(&req);
            info!(
                "{} {} -> {}",
                req.method,
                req.path,
                response.status().code()
            );
            response
        }
        Ok(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
            warn!("bad request: {e}");
            Response::text(Status::BadRequest, e.to_string())
        }
        Ok(Err(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
            warn!("request truncated: {e}");
            Response::text(Status::BadRequest, "request truncated")
        }
        Ok(Err(e)) => return Err(e),
    };

    response.write_to(&mut tx).await?;
    tx.shutdown().await
}

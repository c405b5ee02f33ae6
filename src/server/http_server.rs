//! Binding an [`Engine`] to a socket and controlling the server coroutine.
//!
//! `may_minihttp` binds its listener synchronously inside `start`, so once
//! [`serve`] returns the socket already accepts connections.

use may::coroutine::JoinHandle;
use may_minihttp::HttpServer as MiniHttpServer;
use std::io;
use std::net::{IpAddr, SocketAddr, TcpListener, ToSocketAddrs};
use tracing::{debug, info};

use super::service::EngineService;
use crate::engine::Engine;

/// Fresh ports tried by [`serve_ephemeral`] before giving up
const EPHEMERAL_BIND_ATTEMPTS: usize = 8;

/// Engine being served on a bound socket
pub struct RunningServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

/// Serve `engine` on `addr`.
///
/// A port of `0` is delegated to [`serve_ephemeral`] so that
/// [`RunningServer::addr`] always reports the real port.
///
/// # Errors
///
/// Returns an error if `addr` resolves to nothing or cannot be bound.
pub fn serve<A: ToSocketAddrs>(engine: Engine, addr: A) -> io::Result<RunningServer> {
    let addr = addr
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "address resolved to nothing"))?;
    if addr.port() == 0 {
        return serve_ephemeral(engine, addr.ip());
    }
    start(EngineService::new(engine), addr)
}

/// Serve `engine` on a free port of `ip`.
///
/// The port is picked by the OS and then handed to `may_minihttp`. If
/// another process grabs it in between, a new port is tried.
///
/// # Errors
///
/// Returns the last bind error once every attempt has failed, or any
/// error other than `AddrInUse` straight away.
pub fn serve_ephemeral(engine: Engine, ip: IpAddr) -> io::Result<RunningServer> {
    let service = EngineService::new(engine);
    let mut last_err = None;
    for attempt in 1..=EPHEMERAL_BIND_ATTEMPTS {
        let addr = TcpListener::bind((ip, 0))?.local_addr()?;
        match start(service.clone(), addr) {
            Ok(server) => return Ok(server),
            Err(err) if err.kind() == io::ErrorKind::AddrInUse => {
                debug!(%addr, attempt, "Ephemeral port taken, retrying");
                last_err = Some(err);
            }
            Err(err) => return Err(err),
        }
    }
    Err(last_err.unwrap_or_else(|| io::Error::from(io::ErrorKind::AddrInUse)))
}

fn start(service: EngineService, addr: SocketAddr) -> io::Result<RunningServer> {
    let handle = MiniHttpServer(service).start(addr)?;
    info!(%addr, "Listening");
    Ok(RunningServer { addr, handle })
}

impl RunningServer {
    /// Bound address, with the real port when `0` was requested
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Cancel the accept loop and wait for its coroutine to exit.
    pub fn shutdown(self) {
        info!(addr = %self.addr, "Shutting down");
        // SAFETY: `self` is consumed, so the cancelled coroutine's handle
        // cannot be used again; join only observes its exit.
        unsafe {
            self.handle.coroutine().cancel();
        }
        if self.handle.join().is_err() {
            debug!(addr = %self.addr, "Accept loop exited by cancellation");
        }
    }

    /// Block until the accept loop ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the accept coroutine panicked.
    pub fn wait(self) -> io::Result<()> {
        self.handle
            .join()
            .map_err(|_| io::Error::other("server coroutine panicked"))
    }
}

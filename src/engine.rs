//! Handler registration and dispatch on top of the [`Router`].

use http::{Method, StatusCode};
use std::fmt;
use std::io;
use std::net::ToSocketAddrs;
use std::sync::Arc;
use tracing::info;

use crate::context::Context;
use crate::router::{PatternError, Router};
use crate::server::serve;

/// Request handler: reads from and writes to the [`Context`]
pub type HandlerFunc = Arc<dyn Fn(&mut Context) + Send + Sync>;

/// Route table of [`HandlerFunc`]s plus the not-found fallback
///
/// Build it on one thread, then share it (the server wraps it in an `Arc`)
/// for request handling. There is no way to register routes once serving
/// has started.
#[derive(Clone, Default)]
pub struct Engine {
    router: Router<HandlerFunc>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("routes", &self.router.len())
            .finish()
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `method` and `pattern`.
    pub fn add_route<F>(&mut self, method: Method, pattern: &str, handler: F)
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        info!("Route {:>4} - {}", method, pattern);
        self.router.register(method, pattern, Arc::new(handler));
    }

    /// Like [`Engine::add_route`] but rejects malformed patterns.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] describing why the pattern was rejected.
    pub fn try_add_route<F>(
        &mut self,
        method: Method,
        pattern: &str,
        handler: F,
    ) -> Result<(), PatternError>
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        self.router.try_register(method.clone(), pattern, Arc::new(handler))?;
        info!("Route {:>4} - {}", method, pattern);
        Ok(())
    }

    pub fn get<F>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        self.add_route(Method::GET, pattern, handler);
    }

    pub fn post<F>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        self.add_route(Method::POST, pattern, handler);
    }

    pub fn put<F>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        self.add_route(Method::PUT, pattern, handler);
    }

    pub fn delete<F>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        self.add_route(Method::DELETE, pattern, handler);
    }

    pub fn patch<F>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        self.add_route(Method::PATCH, pattern, handler);
    }

    /// The underlying route table, for introspection
    #[must_use]
    pub fn router(&self) -> &Router<HandlerFunc> {
        &self.router
    }

    /// Resolve the request in `ctx` and run its handler.
    ///
    /// Unroutable requests get `404 NOT FOUND: {path}` as plain text.
    pub fn handle(&self, ctx: &mut Context) {
        match self.router.resolve(&ctx.method, &ctx.path) {
            Some(route_match) => {
                let handler = Arc::clone(route_match.handler);
                ctx.params = route_match.params;
                handler(ctx);
            }
            None => {
                let body = format!("404 NOT FOUND: {}\n", ctx.path);
                ctx.string(StatusCode::NOT_FOUND.as_u16(), body);
            }
        }
    }

    /// Serve on `addr` until the server stops.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be resolved or bound, or if
    /// the server coroutine panics.
    pub fn run<A: ToSocketAddrs>(self, addr: A) -> io::Result<()> {
        self.router.dump_routes();
        serve(self, addr)?.wait()
    }
}

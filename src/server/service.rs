use http::Method;
use may_minihttp::{HttpService, Request, Response};
use std::io;
use std::sync::Arc;
use tracing::{info, warn};

use super::request::{parse_request, ParsedRequest};
use super::response::write_context_response;
use crate::context::Context;
use crate::engine::Engine;

/// `may_minihttp` service that feeds every request through an [`Engine`]
///
/// Cloned once per connection; clones share the same immutable engine.
#[derive(Clone, Debug)]
pub struct EngineService {
    engine: Arc<Engine>,
}

impl EngineService {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

impl HttpService for EngineService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let ParsedRequest {
            method,
            path,
            query_params,
            form,
        } = parse_request(req);

        let method = match method.parse::<Method>() {
            Ok(m) => m,
            Err(err) => {
                warn!(method = %method, error = %err, "Invalid HTTP method");
                let mut ctx = Context::new(Method::GET, path, query_params, form);
                ctx.string(400, "400 BAD REQUEST: invalid method\n");
                write_context_response(res, &mut ctx);
                return Ok(());
            }
        };

        let mut ctx = Context::new(method, path, query_params, form);
        self.engine.handle(&mut ctx);

        info!(
            method = %ctx.method,
            path = %ctx.path,
            status = ctx.status_code,
            "Request handled"
        );
        write_context_response(res, &mut ctx);
        Ok(())
    }
}

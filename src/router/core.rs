//! Router core module - the route table and the resolution hot path.
//!
//! Registration happens once at startup; after that the table is only read.
//! The following clippy lints are denied to keep avoidable allocations out
//! of [`Router::resolve`]:
//!
//! - `clippy::inefficient_to_string` - Catches unnecessary allocations
//! - `clippy::format_push_string` - Prevents format! string building
//! - `clippy::unnecessary_to_owned` - Prevents .to_owned() on borrowed data

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use http::Method;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::error::PatternError;
use super::pattern::{parse_pattern, validate_pattern, SegmentKind};
use super::trie::Node;

/// Separator between method and pattern in handler keys (`GET-/hello/:name`)
const KEY_SEPARATOR: char = '-';

/// Resolutions slower than this are logged at warn level
const SLOW_MATCH_THRESHOLD: Duration = Duration::from_millis(1);

/// Result of successfully resolving a request path
///
/// Borrows the pattern and handler from the [`Router`]; the parameter map
/// is owned since its values come from the request.
#[derive(Debug)]
pub struct RouteMatch<'r, H> {
    /// The registered pattern that matched (e.g. `/hello/:name`)
    pub pattern: &'r str,
    /// Handler registered for this method and pattern
    pub handler: &'r H,
    /// Named and catch-all bindings (e.g. `:name` → `{"name": "geektutu"}`)
    pub params: HashMap<String, String>,
}

impl<H> RouteMatch<'_, H> {
    /// Get a path parameter by name
    #[inline]
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Route table: one pattern tree per HTTP method plus a flat handler map
///
/// `H` is opaque to the router; it is stored at registration and handed
/// back by [`Router::resolve`], never invoked here.
///
/// # Example
///
/// ```
/// use http::Method;
/// use trierouter::router::Router;
///
/// let mut router = Router::new();
/// router.register(Method::GET, "/hello/:name", "hello");
/// router.register(Method::GET, "/assets/*filepath", "assets");
///
/// let m = router.resolve(&Method::GET, "/assets/css/test.css").unwrap();
/// assert_eq!(m.pattern, "/assets/*filepath");
/// assert_eq!(*m.handler, "assets");
/// assert_eq!(m.param("filepath"), Some("css/test.css"));
///
/// assert!(router.resolve(&Method::GET, "/nope").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Router<H> {
    /// Tree root per method, created on first registration for that method
    roots: HashMap<Method, Node>,
    /// Handlers keyed by `METHOD-pattern`
    handlers: HashMap<String, H>,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

fn handler_key(method: &Method, pattern: &str) -> String {
    let mut key = String::with_capacity(method.as_str().len() + 1 + pattern.len());
    key.push_str(method.as_str());
    key.push(KEY_SEPARATOR);
    key.push_str(pattern);
    key
}

impl<H> Router<H> {
    /// Create an empty route table
    #[must_use]
    pub fn new() -> Self {
        Self {
            roots: HashMap::new(),
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for `method` and `pattern`.
    ///
    /// Never fails: malformed patterns are parsed best-effort (see
    /// [`super::parse_pattern`]). Registering the same method and pattern
    /// again replaces the earlier handler.
    ///
    /// The empty pattern `""` is accepted but never resolves: it ends on the
    /// root and stores `""` there, which does not mark a route. The handler
    /// is still kept and counted by [`Router::len`]. Register `"/"` for the
    /// root route, or use [`Router::try_register`] to reject `""`.
    pub fn register(&mut self, method: Method, pattern: &str, handler: H) {
        let parts = parse_pattern(pattern);
        let key = handler_key(&method, pattern);

        let root = self.roots.entry(method).or_insert_with(Node::root);
        root.insert(pattern, &parts, 0);

        if self.handlers.insert(key, handler).is_some() {
            debug!(pattern = %pattern, "Replaced handler for existing route");
        }
    }

    /// Validate `pattern` strictly, then register it.
    ///
    /// # Errors
    ///
    /// Returns the [`PatternError`] from [`super::validate_pattern`]; the
    /// table is left untouched in that case.
    pub fn try_register(
        &mut self,
        method: Method,
        pattern: &str,
        handler: H,
    ) -> Result<(), PatternError> {
        if let Err(err) = validate_pattern(pattern) {
            warn!(method = %method, pattern = %pattern, error = %err, "Rejected route pattern");
            return Err(err);
        }
        self.register(method, pattern, handler);
        Ok(())
    }

    /// Resolve a request path (no query string) for `method`.
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - the matched pattern, its handler and bindings
    /// * `None` - nothing registered for `method`, or no pattern matches (404)
    #[must_use]
    pub fn resolve(&self, method: &Method, path: &str) -> Option<RouteMatch<'_, H>> {
        debug!(method = %method, path = %path, "Route match attempt");

        let match_start = Instant::now();
        let result = self.lookup(method, path);
        let match_duration = match_start.elapsed();

        match &result {
            Some(m) if match_duration > SLOW_MATCH_THRESHOLD => {
                warn!(
                    method = %method,
                    path = %path,
                    route_pattern = %m.pattern,
                    path_params = ?m.params,
                    duration_us = match_duration.as_micros(),
                    "Slow route matching detected"
                );
            }
            Some(m) => {
                debug!(
                    method = %method,
                    path = %path,
                    route_pattern = %m.pattern,
                    path_params = ?m.params,
                    duration_us = match_duration.as_micros(),
                    "Route matched"
                );
            }
            None => {
                warn!(
                    method = %method,
                    path = %path,
                    duration_us = match_duration.as_micros(),
                    "No route matched"
                );
            }
        }

        result
    }

    fn lookup(&self, method: &Method, path: &str) -> Option<RouteMatch<'_, H>> {
        let root = self.roots.get(method)?;
        let search_parts = parse_pattern(path);
        let node = root.search(&search_parts, 0)?;

        let pattern = node.pattern();
        let params = extract_params(pattern, &search_parts);
        let handler = self.handlers.get(&handler_key(method, pattern))?;

        Some(RouteMatch {
            pattern,
            handler,
            params,
        })
    }

    /// All registered routes for `method`, depth-first in tree order.
    #[must_use]
    pub fn routes(&self, method: &Method) -> Vec<&Node> {
        let mut nodes = Vec::new();
        if let Some(root) = self.roots.get(method) {
            root.travel(&mut nodes);
        }
        nodes
    }

    /// Methods with at least one registered route
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.roots.keys()
    }

    /// Number of distinct (method, pattern) registrations
    ///
    /// Counts handlers, including ones whose pattern was overwritten on a
    /// shared wild node and can no longer be reached. See
    /// [`Router::route_count`] for reachable routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Number of routes reachable by [`Router::resolve`], over all methods
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.methods().map(|method| self.routes(method).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Log a summary of the table, one line per route.
    pub fn dump_routes(&self) {
        info!(
            routes_count = self.route_count(),
            handlers_count = self.len(),
            methods_count = self.roots.len(),
            "Routing table loaded"
        );
        for method in self.methods() {
            for node in self.routes(method) {
                info!(method = %method, pattern = %node.pattern(), "Route");
            }
        }
    }
}

/// Bind wildcard names in `pattern` to the request segments at the same positions.
///
/// A catch-all binds the `/`-joined remainder and ends extraction; a bare
/// `*` binds nothing.
fn extract_params(pattern: &str, search_parts: &[&str]) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for (index, part) in parse_pattern(pattern).into_iter().enumerate() {
        match SegmentKind::of(part) {
            SegmentKind::Static => {}
            SegmentKind::Param => {
                if let Some(value) = search_parts.get(index) {
                    params.insert(part[1..].to_string(), (*value).to_string());
                }
            }
            SegmentKind::CatchAll => {
                if part.len() > 1 {
                    let rest = search_parts.get(index..).unwrap_or_default();
                    params.insert(part[1..].to_string(), rest.join("/"));
                }
                break;
            }
        }
    }
    params
}

//! # trierouter
//!
//! **trierouter** is a minimal HTTP request router: given a method and a
//! path it finds the registered handler whose pattern matches, extracts the
//! named and catch-all segments, and hands both back. Serving is done by
//! `may_minihttp` on the `may` coroutine runtime.
//!
//! ## Architecture
//!
//! - **[`router`]** - Segment parsing, the per-method prefix tree and the route table
//! - **[`context`]** - Per-request data and buffered response written by handlers
//! - **[`engine`]** - Handler registration sugar and dispatch with a 404 fallback
//! - **[`server`]** - `may_minihttp` service adapter and server handle
//! - **[`logging`]** / **[`runtime_config`]** - Environment-driven setup
//! - **[`cli`]** - `serve` and `routes` commands for the demo application
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Client
//!     participant Server as EngineService<br/>(may_minihttp)
//!     participant Engine
//!     participant Router
//!     participant Handler
//!
//!     Client->>Server: GET /hello/geektutu?x=1
//!     Server->>Server: Split path and query,<br/>decode form body
//!     Server->>Engine: handle(Context)
//!     Engine->>Router: resolve(GET, "/hello/geektutu")
//!     alt No Route Match
//!         Router-->>Engine: None
//!         Engine-->>Client: 404 NOT FOUND: /hello/geektutu
//!     end
//!     Router-->>Engine: RouteMatch<br/>(pattern, handler, {name: geektutu})
//!     Engine->>Handler: handler(&mut Context)
//!     Handler-->>Engine: status, headers, body
//!     Engine-->>Server: Context
//!     Server-->>Client: HTTP Response
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use trierouter::{Context, Engine};
//!
//! let mut engine = Engine::new();
//! engine.get("/hello/:name", |c: &mut Context| {
//!     let body = format!("hello {}\n", c.param("name"));
//!     c.string(200, body);
//! });
//! engine.get("/assets/*filepath", |c: &mut Context| {
//!     let body = serde_json::json!({ "filepath": c.param("filepath") });
//!     c.json(200, &body);
//! });
//! engine.run("127.0.0.1:9999").unwrap();
//! ```
//!
//! ## Matching Rules
//!
//! Siblings in the tree are tried in registration order and the first leaf
//! reached wins; there is no "most specific" precedence. Register static
//! routes before wildcard routes at the same position if the static route
//! must win. See [`router`] for the full rules.
//!
//! ## Runtime Considerations
//!
//! The route table is built before serving and never changes afterwards,
//! so request coroutines read it without locks. Stack size for those
//! coroutines is set with `TRIE_STACK_SIZE`.

pub mod cli;
pub mod context;
pub mod demo;
pub mod engine;
pub mod logging;
pub mod router;
pub mod runtime_config;
pub mod server;

pub use context::Context;
pub use engine::{Engine, HandlerFunc};
pub use router::{PatternError, RouteMatch, Router};

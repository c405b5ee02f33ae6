//! # Router Module
//!
//! The router module resolves an incoming `(method, path)` pair to the
//! registered handler whose pattern matches, together with the values bound
//! to the pattern's named and catch-all segments.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Parsing route patterns and request paths into segments
//! - Maintaining one prefix tree of segments per HTTP method
//! - Resolving request paths against the tree for their method
//! - Extracting path parameters from the matched pattern
//!
//! ## Pattern Syntax
//!
//! | Segment     | Matches                          | Binds                     |
//! |-------------|----------------------------------|---------------------------|
//! | `hello`     | exactly `hello`                  | nothing                   |
//! | `:name`     | any single segment               | `name` → that segment     |
//! | `*filepath` | one or more remaining segments   | `filepath` → `a/b/c.css`  |
//!
//! A catch-all ends the pattern; anything written after it is ignored.
//!
//! ## Architecture
//!
//! Registration parses the pattern, inserts it into the method's tree and
//! stores the handler under `METHOD-pattern`. Resolution walks the tree
//! depth-first, trying matching children in registration order, and the
//! first leaf reached wins. Parameters are then recovered by lining the
//! matched pattern's segments up with the request's segments.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use trierouter::router::Router;
//!
//! let mut router = Router::new();
//! router.register(Method::GET, "/", "index");
//! router.register(Method::GET, "/hello/:name", "hello");
//!
//! let m = router.resolve(&Method::GET, "/hello/geektutu").unwrap();
//! assert_eq!(*m.handler, "hello");
//! assert_eq!(m.param("name"), Some("geektutu"));
//! ```
//!
//! ## Concurrency
//!
//! `register` takes `&mut self` and `resolve` takes `&self`, so the borrow
//! checker enforces the setup-then-serve split: build the table on one
//! thread, then share it immutably (e.g. behind an `Arc`) across request
//! coroutines without locking.

mod core;
mod error;
mod pattern;
mod trie;

pub use core::{RouteMatch, Router};
pub use error::PatternError;
pub use pattern::{parse_pattern, validate_pattern, SegmentKind, CATCH_ALL_SIGIL, PARAM_SIGIL};
pub use trie::Node;

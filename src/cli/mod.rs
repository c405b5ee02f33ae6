//! # CLI Module
//!
//! Command-line entry points for the demo application.
//!
//! ## Commands
//!
//! ### `serve`
//!
//! Start the demo application:
//!
//! ```bash
//! trierouter serve --addr 127.0.0.1:9999
//! curl http://127.0.0.1:9999/hello/geektutu
//! ```
//!
//! Without `--addr` the address comes from `TRIE_ADDR` (see
//! [`crate::runtime_config`]).
//!
//! ### `routes`
//!
//! Print the demo route table, optionally for one method:
//!
//! ```bash
//! trierouter routes --method GET
//! ```

mod commands;

pub use commands::{run_cli, Cli, Commands};

//! # Runtime Configuration Module
//!
//! Environment-driven settings for the coroutine runtime and listener.
//!
//! ## Environment Variables
//!
//! ### `TRIE_STACK_SIZE`
//!
//! Stack size for request coroutines. Accepts decimal (`16384`) or
//! hexadecimal (`0x4000`). Default: `0x4000` (16 KB).
//!
//! ### `TRIE_ADDR`
//!
//! Listen address for `serve`. Default: `0.0.0.0:9999`.
//!
//! ## Usage
//!
//! ```rust
//! use trierouter::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! config.apply();
//! println!("Stack size: {} bytes", config.stack_size);
//! ```

use std::env;

pub const DEFAULT_STACK_SIZE: usize = 0x4000;
pub const DEFAULT_ADDR: &str = "0.0.0.0:9999";

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Stack size for coroutines in bytes
    pub stack_size: usize,
    /// Listen address
    pub addr: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            stack_size: DEFAULT_STACK_SIZE,
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

fn parse_stack_size(val: &str) -> Option<usize> {
    match val.strip_prefix("0x") {
        Some(hex) => usize::from_str_radix(hex, 16).ok(),
        None => val.parse().ok(),
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let stack_size = env::var("TRIE_STACK_SIZE")
            .ok()
            .and_then(|val| parse_stack_size(&val))
            .unwrap_or(DEFAULT_STACK_SIZE);
        let addr = env::var("TRIE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        RuntimeConfig { stack_size, addr }
    }

    /// Configure the `may` runtime with these settings.
    pub fn apply(&self) {
        may::config().set_stack_size(self.stack_size);
    }
}

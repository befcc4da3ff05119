//! # Config-Core - Softphone configuration store
//!
//! The daemon's `config-get` and `config-set` commands forward to a
//! [`ConfigStore`]: a map of sections, each holding string values by key.
//! [`MemoryConfigStore`] is the in-process implementation; it can be seeded
//! from and written back to a TOML document where every top-level table is
//! a section.

pub mod error;
pub mod memory;
pub mod store;

pub use error::{ConfigError, Result};
pub use memory::MemoryConfigStore;
pub use store::ConfigStore;

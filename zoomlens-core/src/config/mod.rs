//! Configuration types
//!
//! Board-agnostic controller configuration. The option table is fixed; only
//! bus addressing and busy-poll cadence are configurable.

#[cfg(feature = "toml")]
pub mod loader;
pub mod types;

#[cfg(feature = "toml")]
pub use loader::*;
pub use types::*;

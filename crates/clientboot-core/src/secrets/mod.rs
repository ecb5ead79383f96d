//! Secret provider abstractions and implementations
//!
//! This module provides the pluggable secrets seam:
//! - `SecretConnector` sets up a provider (once, fallibly)
//! - `SecretProvider` resolves named secrets (async, fallibly)
//! - Built-in implementations: `SimulatedConnector` / `SimulatedSecretProvider`,
//!   `MemoryConnector` / `MemorySecretProvider`

mod traits;
mod simulated;
mod memory;

pub use traits::{SecretProvider, SecretConnector, SecretError, SecretResult};
pub use simulated::{SimulatedConnector, SimulatedSecretProvider, placeholder_secret, INIT_FAILURE};
pub use memory::{MemoryConnector, MemorySecretProvider};

//! Initialization stages
//!
//! Each stage turns whatever goes wrong inside it into a `Resolved::Failure`:
//! 1. `resolve_secret_provider` - set up the secret provider
//! 2. `resolve_clients` - fetch both connection strings, build both clients

mod timeout;
mod provider_stage;
mod client_stage;

pub use provider_stage::resolve_secret_provider;
pub use client_stage::{resolve_clients, READ_WRITE_URL_KEY, READ_ONLY_URL_KEY};

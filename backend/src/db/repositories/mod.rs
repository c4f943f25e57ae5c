//! Repository implementations module.
//!
//! - `local`: in-memory implementation for tests and local development
//! - `remote`: REST client for the external pool hub API
pub mod local;
#[cfg(feature = "remote-repo")]
pub mod remote;

pub use local::LocalRepository;
#[cfg(feature = "remote-repo")]
pub use remote::{RemoteConfig, RemoteRepository};

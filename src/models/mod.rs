//! Data models shared by the platform clients.
//!
//! - [`primitives`] - The [`Platform`] enum and its fixed endpoints
//! - [`credentials`] - The [`Credentials`] a client authenticates with

pub mod primitives;
pub mod credentials;

pub use primitives::*;
pub use credentials::*;

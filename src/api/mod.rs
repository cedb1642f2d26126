//! Platform clients.
//!
//! Each client resolves its credentials once, authenticates once, and then
//! prefixes every endpoint with its platform's base path.

mod base;
mod downloads;
mod tenable_io;
mod tenable_sc;

pub use downloads::Downloads;
pub use tenable_io::TenableIo;
pub use tenable_sc::TenableSc;

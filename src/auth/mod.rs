//! Credential resolution and authentication for the Tenable APIs.
//!
//! Two authentication styles are supported:
//!
//! 1. **Static keys** - An access/secret key pair (Tenable.io, Tenable.sc)
//!    or a bearer token (Downloads) encoded straight into a header.
//! 2. **Session login** - A username/password exchanged once, at client
//!    construction, for a session token (and, on Tenable.sc, a cookie).
//!
//! # Tenable.sc session handshake
//!
//! ```text
//! GET  /rest/system                 -> Set-Cookie: <bootstrap>
//! POST /rest/token  Cookie: <bootstrap>
//!                                   -> Set-Cookie: <session>, response.token
//! then every request: X-SecurityCenter: <token>, Cookie: <session>
//! ```

mod headers;
mod resolver;
mod session;

pub use headers::AuthHeaders;
pub use resolver::{resolve, Resolved};
pub use session::authenticate;

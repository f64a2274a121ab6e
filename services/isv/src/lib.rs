//! ISV HMAC-SHA256 request signing.
//!
//! Every signed request carries:
//!
//! | Header | Value |
//! |---|---|
//! | `x-authentication-version` | `1.0` |
//! | `x-authentication-type` | `isv` |
//! | `x-signature-method` | `SHA256_HMAC` |
//! | `x-isv-ak` | access key id |
//! | `x-signature` | base64 HMAC-SHA256 of the canonical content |
//!
//! The tenant header (`x-tenant-id` by default) is signed as well when the
//! caller set it to a non-blank value.
//!
//! ## Example
//!
//! ```
//! use isvsign_core::{Result, Signer};
//! use isvsign_isv::{Credential, RequestSigner};
//!
//! # fn main() -> Result<()> {
//! let signer = Signer::new(Credential::new("AK1", "SK1"), RequestSigner::new());
//!
//! let (mut parts, body) = http::Request::get("https://isv.example.com/v1/data")
//!     .body(Vec::<u8>::new())?
//!     .into_parts();
//! signer.sign(&mut parts, &body)?;
//!
//! assert_eq!(
//!     parts.headers["x-signature"],
//!     "gQRDHRlEzJeRQ6MrCa2gkhLdhwIxTQ9J56AiU2fT3Rk="
//! );
//! # Ok(())
//! # }
//! ```

mod constants;

mod canonical;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{set_tenant_id, RequestSigner};

mod verify;
pub use verify::RequestVerifier;

mod tenant_http_send;
pub use tenant_http_send::TenantHttpSend;

mod provide_credential;
pub use provide_credential::*;

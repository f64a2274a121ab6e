//! Core components for signing ISV API requests.
//!
//! This crate provides the foundational types and traits for the isvsign ecosystem.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for file reading and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: Holds one credential and a `SignRequest`, signs requests exactly once before they are sent
//! - **SigningHttpSend**: Wraps any `HttpSend` transport so every outgoing request gets signed
//!
//! ## Example
//!
//! ```
//! use isvsign_core::{Result, SignRequest, Signer, SigningCredential};
//! use http::request::Parts;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(&self, req: &mut Parts, _body: &[u8], cred: &MyCredential) -> Result<()> {
//!         req.headers.insert("x-api-key", cred.key.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let signer = Signer::new(MyCredential { key: "my-key".to_string() }, MySigner);
//!
//! let (mut parts, body) = http::Request::get("https://example.com/v1/data")
//!     .body(Vec::<u8>::new())?
//!     .into_parts();
//! signer.sign(&mut parts, &body)?;
//! assert_eq!(parts.headers["x-api-key"], "my-key");
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC and base64 helpers
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod context;
pub use context::Context;
mod fs;
pub use fs::{FileRead, NoopFileRead};
mod env;
pub use env::{Env, NoopEnv, OsEnv, StaticEnv};
mod http_send;
pub use http_send::{HttpSend, SigningHttpSend};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;

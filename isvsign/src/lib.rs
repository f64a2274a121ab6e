//! Signing ISV API requests without effort.
//!
//! This crate re-exports [`isvsign_core`] and puts the ISV signer under
//! [`isv`]. With the `default-context` feature (on by default) it also wires
//! up Tokio file reading, the OS environment and a reqwest transport.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> isvsign::Result<()> {
//! use isvsign::HttpSend;
//!
//! let client = isvsign::isv::default_http_send(isvsign::isv::Config::new()).await?;
//! let req = http::Request::get("https://isv.example.com/v1/data").body(bytes::Bytes::new())?;
//! let resp = client.http_send(req).await?;
//! println!("{}", resp.status());
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use isvsign_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

pub mod isv;

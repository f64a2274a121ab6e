//! Reqwest-based transport for isvsign.
//!
//! `ReqwestHttpSend` puts an already signed `http::Request<Bytes>` on the wire.
//! Wrap it in `isvsign_core::SigningHttpSend` to have every request signed
//! right before it leaves.

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use isvsign_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// HttpSend implementation backed by a `reqwest::Client`.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("request can't be converted for reqwest").with_source(e)
        })?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::unexpected("failed to send http request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::unexpected("failed to read http response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isvsign_core::ErrorKind;

    #[tokio::test]
    async fn test_relative_uri_is_rejected() {
        let req = http::Request::get("/v1/data").body(Bytes::new()).unwrap();

        let err = ReqwestHttpSend::default()
            .http_send(req)
            .await
            .expect_err("relative uri can't be sent");
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
}

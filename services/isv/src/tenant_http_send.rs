use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderName, HeaderValue};
use isvsign_core::{Error, HttpSend, Result};

/// TenantHttpSend sets a default tenant id on requests that don't carry one,
/// then hands them to `inner`.
///
/// Put it in front of [`isvsign_core::SigningHttpSend`] so the tenant id gets
/// signed.
#[derive(Debug)]
pub struct TenantHttpSend {
    tenant_header: HeaderName,
    tenant_id: HeaderValue,
    inner: Arc<dyn HttpSend>,
}

impl TenantHttpSend {
    /// Wrap `inner` so that requests without `tenant_header` get `tenant_id`.
    ///
    /// Fails with `ConfigInvalid` if `tenant_id` can't be a header value.
    pub fn new(tenant_header: HeaderName, tenant_id: &str, inner: impl HttpSend) -> Result<Self> {
        let tenant_id = HeaderValue::from_str(tenant_id.trim()).map_err(|e| {
            Error::config_invalid("tenant id is not a valid header value").with_source(e)
        })?;

        Ok(Self {
            tenant_header,
            tenant_id,
            inner: Arc::new(inner),
        })
    }
}

#[async_trait::async_trait]
impl HttpSend for TenantHttpSend {
    async fn http_send(&self, mut req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        if !req.headers().contains_key(&self.tenant_header) {
            req.headers_mut()
                .insert(self.tenant_header.clone(), self.tenant_id.clone());
        }
        self.inner.http_send(req).await
    }
}

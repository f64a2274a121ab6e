use crate::{Result, Signer, SigningCredential};
use bytes::Bytes;
use std::fmt::Debug;
use std::sync::Arc;

/// HttpSend is the transport that puts a request on the wire.
///
/// Requests carry a fully buffered body so decorators like [`SigningHttpSend`]
/// can read it without consuming a one-shot stream.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// SigningHttpSend signs every request with `signer` right before handing it
/// to the inner transport.
///
/// The body bytes that get hashed are the very bytes that get sent. If signing
/// fails the inner transport is never called.
///
/// ```no_run
/// # use isvsign_core::{HttpSend, Signer, SigningHttpSend, SigningCredential};
/// # fn wrap<K: SigningCredential>(signer: Signer<K>, transport: impl HttpSend) -> impl HttpSend {
/// SigningHttpSend::new(signer, transport)
/// # }
/// ```
#[derive(Debug)]
pub struct SigningHttpSend<K: SigningCredential> {
    signer: Signer<K>,
    inner: Arc<dyn HttpSend>,
}

impl<K: SigningCredential> SigningHttpSend<K> {
    /// Wrap `inner` so that every request is signed by `signer`.
    pub fn new(signer: Signer<K>, inner: impl HttpSend) -> Self {
        Self {
            signer,
            inner: Arc::new(inner),
        }
    }
}

#[async_trait::async_trait]
impl<K: SigningCredential> HttpSend for SigningHttpSend<K> {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (mut parts, body) = req.into_parts();
        self.signer.sign(&mut parts, &body)?;

        self.inner
            .http_send(http::Request::from_parts(parts, body))
            .await
    }
}

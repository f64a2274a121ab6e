use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use bytes::Bytes;
use http_body::Body;
use http_body_util::BodyExt;
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// It holds the credential immutably for its whole lifetime: clones share the
/// same credential, and signing never takes a lock.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<K>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer with a known credential.
    pub fn new(credential: K, builder: impl SignRequest<Credential = K>) -> Self {
        Self {
            builder: Arc::new(builder),
            credential: Arc::new(credential),
        }
    }

    /// Create a new signer by loading the credential once from `provider`.
    ///
    /// Fails with `CredentialInvalid` if the provider yields nothing usable.
    pub async fn from_provider(
        ctx: &Context,
        provider: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Result<Self> {
        let credential = provider.provide_credential(ctx).await?;
        match credential {
            Some(cred) if cred.is_valid() => Ok(Self::new(cred, builder)),
            Some(_) => Err(Error::credential_invalid(
                "credential loaded from provider is not valid",
            )),
            None => Err(Error::credential_invalid(format!(
                "no credential found by provider {provider:?}"
            ))),
        }
    }

    /// Sign request parts against an already buffered body.
    ///
    /// Must be called exactly once per request, right before it's sent.
    pub fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        self.builder.sign_request(req, body, &self.credential)
    }

    /// Buffer the body of `req` once, sign it, and return the request carrying
    /// the same buffered bytes.
    ///
    /// If the body can't be read the request is dropped and the body error is
    /// returned as the source of a `BodyRead` error.
    pub async fn sign_http_request<B>(&self, req: http::Request<B>) -> Result<http::Request<Bytes>>
    where
        B: Body,
        B::Error: std::error::Error + Send + Sync + 'static,
    {
        let (mut parts, body) = req.into_parts();
        let body = body
            .collect()
            .await
            .map_err(|e| Error::body_read("failed to buffer request body for signing").with_source(e))?
            .to_bytes();

        self.sign(&mut parts, &body)?;
        Ok(http::Request::from_parts(parts, body))
    }
}

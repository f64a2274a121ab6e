use http::request::Parts;
use http::HeaderName;
use isvsign_core::hash::{base64_decode, verify_hmac_sha256};
use isvsign_core::{Error, Result, SigningRequest};
use log::debug;

use crate::canonical::{canonical_content, headers_to_sign};
use crate::constants::*;
use crate::sign_request::parse_tenant_header;
use crate::Credential;

/// RequestVerifier checks ISV signatures on received requests.
///
/// It recomputes the canonical content the same way [`crate::RequestSigner`]
/// does and compares the HMAC in constant time.
#[derive(Debug, Clone)]
pub struct RequestVerifier {
    tenant_header: HeaderName,
}

impl Default for RequestVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestVerifier {
    /// Create a verifier using `x-tenant-id` as the tenant header.
    pub fn new() -> Self {
        Self {
            tenant_header: HeaderName::from_static(X_TENANT_ID),
        }
    }

    /// Use another header to carry the tenant id, must match the signer's.
    pub fn with_tenant_header(mut self, name: &str) -> Result<Self> {
        self.tenant_header = parse_tenant_header(name)?;
        Ok(self)
    }

    /// Verify that the request was signed by `cred`.
    ///
    /// - `RequestInvalid`: authentication headers missing or unexpected.
    /// - `CredentialInvalid`: signature doesn't match.
    pub fn verify(&self, parts: &Parts, body: &[u8], cred: &Credential) -> Result<()> {
        let req = SigningRequest::build(parts, body)?;

        for (name, expected) in [
            (X_AUTHENTICATION_VERSION, AUTHENTICATION_VERSION),
            (X_AUTHENTICATION_TYPE, AUTHENTICATION_TYPE),
            (X_SIGNATURE_METHOD, SIGNATURE_METHOD),
        ] {
            let value = required_header(&req, name)?;
            if value != expected {
                return Err(Error::request_invalid(format!(
                    "header {name} is {value:?}, expected {expected:?}"
                )));
            }
        }

        let access_key_id = required_header(&req, X_ISV_AK)?;
        if access_key_id != cred.access_key_id {
            return Err(Error::request_invalid(format!(
                "request is signed by access key {access_key_id:?}, not by the given credential"
            )));
        }

        let signature = base64_decode(required_header(&req, X_SIGNATURE)?).map_err(|e| {
            Error::request_invalid("header x-signature is not valid base64").with_source(e)
        })?;

        let headers = headers_to_sign(&req, &self.tenant_header, &cred.access_key_id)?;
        let content = canonical_content(&req, headers);
        if !verify_hmac_sha256(cred.secret_access_key.as_bytes(), &content, &signature) {
            debug!("signature mismatch for request {} {}", req.method, req.path);
            return Err(Error::credential_invalid("signature does not match"));
        }

        Ok(())
    }
}

fn required_header<'a>(req: &'a SigningRequest, name: &str) -> Result<&'a str> {
    req.header_get(name)?
        .ok_or_else(|| Error::request_invalid(format!("missing header {name}")))
}

use http::request::Parts;
use http::{HeaderName, HeaderValue};
use isvsign_core::hash::base64_hmac_sha256;
use isvsign_core::{Error, Result, SignRequest, SigningRequest};

use crate::canonical::{canonical_content, headers_to_sign};
use crate::constants::*;
use crate::Credential;

/// RequestSigner that implements ISV HMAC-SHA256 request signing.
///
/// The signature covers the encoded path, the authentication headers (plus the
/// tenant header if set), the query and the raw body. The HTTP method is not
/// covered.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    tenant_header: HeaderName,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a signer using `x-tenant-id` as the tenant header.
    pub fn new() -> Self {
        Self {
            tenant_header: HeaderName::from_static(X_TENANT_ID),
        }
    }

    /// Use another header to carry the tenant id.
    ///
    /// Fails with `ConfigInvalid` if `name` isn't a valid header name or
    /// collides with one of the authentication headers.
    pub fn with_tenant_header(mut self, name: &str) -> Result<Self> {
        self.tenant_header = parse_tenant_header(name)?;
        Ok(self)
    }

    /// The header carrying the tenant id.
    pub fn tenant_header(&self) -> &HeaderName {
        &self.tenant_header
    }

    /// Build the canonical content this signer would sign for the request.
    pub fn canonical_content(&self, parts: &Parts, body: &[u8], cred: &Credential) -> Result<Vec<u8>> {
        let req = SigningRequest::build(parts, body)?;
        let headers = headers_to_sign(&req, &self.tenant_header, &cred.access_key_id)?;
        Ok(canonical_content(&req, headers))
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, parts: &mut Parts, body: &[u8], cred: &Self::Credential) -> Result<()> {
        if parts.headers.contains_key(X_SIGNATURE) {
            return Err(Error::request_invalid(
                "request already carries x-signature, it must be signed only once",
            ));
        }

        let req = SigningRequest::build(parts, body)?;
        let signed_headers = headers_to_sign(&req, &self.tenant_header, &cred.access_key_id)?;

        // Validate every value before touching the request.
        let mut values = Vec::with_capacity(signed_headers.len() + 1);
        for (k, v) in &signed_headers {
            values.push((HeaderName::from_bytes(k.as_bytes())?, HeaderValue::from_str(v)?));
        }

        let content = canonical_content(&req, signed_headers);
        let signature = base64_hmac_sha256(cred.secret_access_key.as_bytes(), &content);
        let mut signature = HeaderValue::from_str(&signature)?;
        signature.set_sensitive(true);
        values.push((HeaderName::from_static(X_SIGNATURE), signature));

        for (k, v) in values {
            parts.headers.insert(k, v);
        }
        Ok(())
    }
}

/// Set the tenant id on a request before it's signed.
///
/// Any previous value of the header is replaced. Surrounding whitespace is
/// trimmed.
pub fn set_tenant_id(parts: &mut Parts, tenant_header: &HeaderName, tenant_id: &str) -> Result<()> {
    parts
        .headers
        .insert(tenant_header.clone(), HeaderValue::from_str(tenant_id.trim())?);
    Ok(())
}

pub(crate) fn parse_tenant_header(name: &str) -> Result<HeaderName> {
    let header = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
        Error::config_invalid(format!("tenant header {name:?} is not a valid header name"))
            .with_source(e)
    })?;

    if [
        X_AUTHENTICATION_VERSION,
        X_AUTHENTICATION_TYPE,
        X_SIGNATURE_METHOD,
        X_ISV_AK,
        X_SIGNATURE,
    ]
    .contains(&header.as_str())
    {
        return Err(Error::config_invalid(format!(
            "tenant header {name:?} collides with an authentication header"
        )));
    }

    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use isvsign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn sign(uri: &str, headers: &[(&str, &str)], body: &[u8], cred: &Credential) -> Parts {
        let mut builder = http::Request::post(uri);
        for (k, v) in headers {
            builder = builder.header(*k, *v);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        RequestSigner::new()
            .sign_request(&mut parts, body, cred)
            .expect("sign must succeed");
        parts
    }

    fn signature(parts: &Parts) -> &str {
        parts.headers[X_SIGNATURE].to_str().unwrap()
    }

    fn ak1() -> Credential {
        Credential::new("AK1", "SK1")
    }

    #[test]
    fn test_sign_minimal_request() {
        let _ = env_logger::builder().is_test(true).try_init();

        let parts = sign("http://example.com/v1/data", &[], b"", &ak1());

        assert_eq!(parts.headers[X_AUTHENTICATION_VERSION], "1.0");
        assert_eq!(parts.headers[X_AUTHENTICATION_TYPE], "isv");
        assert_eq!(parts.headers[X_SIGNATURE_METHOD], "SHA256_HMAC");
        assert_eq!(parts.headers[X_ISV_AK], "AK1");
        assert_eq!(
            signature(&parts),
            "gQRDHRlEzJeRQ6MrCa2gkhLdhwIxTQ9J56AiU2fT3Rk="
        );
        assert!(parts.headers[X_SIGNATURE].is_sensitive());
        assert!(!parts.headers.contains_key(X_TENANT_ID));
        assert_eq!(parts.headers.len(), 5);
    }

    #[test]
    fn test_sign_with_tenant_and_query() {
        let cred = Credential::new("pzeUK+obho+uFPeS", "73y8jTkIr64Tw826");
        let parts = sign(
            "https://isv.example.com/api/project/pageQuery?page=1&pageSize=10",
            &[(X_TENANT_ID, "pds1Admin")],
            b"",
            &cred,
        );

        assert_eq!(parts.headers[X_TENANT_ID], "pds1Admin");
        assert_eq!(
            signature(&parts),
            "GSPx6dnLDgNjptvjvUJTAnvo9D4ng1XXHntvfVSfIKs="
        );
    }

    #[test_case("http://example.com/v1/data?tags=a,b&z=1"; "pre-joined")]
    #[test_case("http://example.com/v1/data?tags=a&z=1&tags=b"; "repeated")]
    #[test_case("http://example.com/v1/data?z=1&tags=a&tags=b"; "reordered")]
    fn test_sign_multi_value_query(uri: &str) {
        let parts = sign(uri, &[], b"", &ak1());
        assert_eq!(
            signature(&parts),
            "jM7ZXeBzhWuoyocBcNw12ywcbFqVZF5UmrcV93Ijo7U="
        );
    }

    #[test]
    fn test_sign_body_sensitivity() {
        let demo = sign("http://example.com/v1/items", &[], br#"{"name":"demo"}"#, &ak1());
        let demp = sign("http://example.com/v1/items", &[], br#"{"name":"demp"}"#, &ak1());

        assert_eq!(
            signature(&demo),
            "qDNCyfLOJYtgkSDPa4SwszgiesUMWETiGv873Pw+oxA="
        );
        assert_eq!(
            signature(&demp),
            "7buRxbZ/KA/meS9tNdxXfxFK3nVc9jwvi3MoGVejgW4="
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let a = sign("http://example.com/v1/data?b=2&a=1", &[], b"x", &ak1());
        let b = sign("http://example.com/v1/data?b=2&a=1", &[], b"x", &ak1());
        assert_eq!(signature(&a), signature(&b));
    }

    #[test]
    fn test_sign_ignores_unsigned_headers_and_method() {
        let plain = sign("http://example.com/v1/data", &[], b"", &ak1());
        let extra = sign(
            "http://example.com/v1/data",
            &[("content-type", "application/json"), ("x-trace-id", "abc")],
            b"",
            &ak1(),
        );
        assert_eq!(signature(&plain), signature(&extra));

        let (mut parts, _) = http::Request::get("http://example.com/v1/data")
            .body(())
            .unwrap()
            .into_parts();
        RequestSigner::new()
            .sign_request(&mut parts, b"", &ak1())
            .unwrap();
        assert_eq!(signature(&parts), signature(&plain));
    }

    #[test_case(""; "empty")]
    #[test_case("  "; "blank")]
    fn test_sign_blank_tenant_is_not_signed(tenant: &str) {
        let parts = sign(
            "http://example.com/v1/data",
            &[(X_TENANT_ID, tenant)],
            b"",
            &ak1(),
        );
        assert_eq!(
            signature(&parts),
            "gQRDHRlEzJeRQ6MrCa2gkhLdhwIxTQ9J56AiU2fT3Rk="
        );
        assert_eq!(parts.headers[X_TENANT_ID], tenant);
    }

    #[test]
    fn test_sign_last_tenant_value_wins() {
        let (mut parts, _) = http::Request::get("https://isv.example.com/api/project/pageQuery?page=1&pageSize=10")
            .header(X_TENANT_ID, "other")
            .header(X_TENANT_ID, "pds1Admin")
            .body(())
            .unwrap()
            .into_parts();
        let cred = Credential::new("pzeUK+obho+uFPeS", "73y8jTkIr64Tw826");
        RequestSigner::new()
            .sign_request(&mut parts, b"", &cred)
            .unwrap();

        assert_eq!(
            signature(&parts),
            "GSPx6dnLDgNjptvjvUJTAnvo9D4ng1XXHntvfVSfIKs="
        );
        let tenants: Vec<_> = parts.headers.get_all(X_TENANT_ID).iter().collect();
        assert_eq!(tenants, vec!["pds1Admin"]);
    }

    #[test]
    fn test_sign_trims_tenant() {
        let cred = Credential::new("pzeUK+obho+uFPeS", "73y8jTkIr64Tw826");
        let parts = sign(
            "https://isv.example.com/api/project/pageQuery?page=1&pageSize=10",
            &[(X_TENANT_ID, " pds1Admin\t")],
            b"",
            &cred,
        );

        assert_eq!(parts.headers[X_TENANT_ID], "pds1Admin");
        assert_eq!(
            signature(&parts),
            "GSPx6dnLDgNjptvjvUJTAnvo9D4ng1XXHntvfVSfIKs="
        );
    }

    #[test]
    fn test_set_tenant_id_trims() -> Result<()> {
        let (mut parts, _) = http::Request::get("http://example.com/v1/data")
            .body(())?
            .into_parts();
        set_tenant_id(&mut parts, RequestSigner::new().tenant_header(), "  org-1 ")?;
        assert_eq!(parts.headers[X_TENANT_ID], "org-1");
        Ok(())
    }

    #[test]
    fn test_sign_twice_is_rejected() {
        let mut parts = sign("http://example.com/v1/data", &[], b"", &ak1());
        let before = parts.headers.clone();

        let err = RequestSigner::new()
            .sign_request(&mut parts, b"", &ak1())
            .expect_err("second sign must fail");
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert_eq!(parts.headers, before);
    }

    #[test]
    fn test_sign_failure_leaves_no_headers() {
        let (mut parts, _) = http::Request::get("http://example.com/v1/data")
            .body(())
            .unwrap()
            .into_parts();
        let cred = Credential::new("AK\n1", "SK1");

        let err = RequestSigner::new()
            .sign_request(&mut parts, b"", &cred)
            .expect_err("newline in access key must fail");
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(parts.headers.is_empty());
    }

    #[test]
    fn test_custom_tenant_header() -> Result<()> {
        let signer = RequestSigner::new().with_tenant_header("X-Org-Id")?;
        assert_eq!(signer.tenant_header().as_str(), "x-org-id");

        let (mut parts, _) = http::Request::get("http://example.com/v1/data")
            .body(())?
            .into_parts();
        set_tenant_id(&mut parts, signer.tenant_header(), "org-1")?;

        let content = signer.canonical_content(&parts, b"", &ak1())?;
        assert!(String::from_utf8_lossy(&content).contains("x-org-id=org-1"));

        signer.sign_request(&mut parts, b"", &ak1())?;
        assert_eq!(parts.headers["x-org-id"], "org-1");
        Ok(())
    }

    #[test_case("bad header"; "space")]
    #[test_case(""; "empty")]
    #[test_case("x-signature"; "signature collision")]
    #[test_case("X-ISV-AK"; "access key collision")]
    fn test_invalid_tenant_header(name: &str) {
        let err = RequestSigner::new()
            .with_tenant_header(name)
            .expect_err("must be rejected");
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}

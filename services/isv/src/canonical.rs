//! Canonical signing content shared by the signer and the verifier.
//!
//! ```text
//! encoded_path || sorted header pairs || sorted query pairs || raw body
//! ```
//!
//! Pairs are `k=v` joined by `&`, repeated query values are joined by `,`.

use http::HeaderName;
use isvsign_core::utils::Redact;
use isvsign_core::{Result, SigningRequest};
use log::{debug, log_enabled, Level};

use crate::constants::*;

/// Collect the headers that take part in the signature.
///
/// The tenant header is only included when the caller set it to a non-blank
/// value. Surrounding whitespace is trimmed, since receivers strip it from
/// header values before verifying.
pub(crate) fn headers_to_sign(
    req: &SigningRequest,
    tenant_header: &HeaderName,
    access_key_id: &str,
) -> Result<Vec<(String, String)>> {
    let mut headers = Vec::with_capacity(5);

    if let Some(tenant_id) = req.header_get(tenant_header)? {
        let tenant_id = tenant_id.trim();
        if !tenant_id.is_empty() {
            headers.push((tenant_header.as_str().to_string(), tenant_id.to_string()));
        }
    }

    headers.push((
        X_AUTHENTICATION_VERSION.to_string(),
        AUTHENTICATION_VERSION.to_string(),
    ));
    headers.push((
        X_AUTHENTICATION_TYPE.to_string(),
        AUTHENTICATION_TYPE.to_string(),
    ));
    headers.push((X_SIGNATURE_METHOD.to_string(), SIGNATURE_METHOD.to_string()));
    headers.push((X_ISV_AK.to_string(), access_key_id.to_string()));

    Ok(headers)
}

/// Build the canonical content for `req` with the given signed headers.
pub(crate) fn canonical_content(req: &SigningRequest, headers: Vec<(String, String)>) -> Vec<u8> {
    if log_enabled!(Level::Debug) {
        debug!(
            "canonical content: path {}, headers {}, query {}, body {} bytes",
            req.path,
            loggable_headers(&headers),
            SigningRequest::pairs_to_string(req.query_to_grouped_vec(","), "=", "&"),
            req.body.len()
        );
    }

    let header_string = SigningRequest::pairs_to_string(headers, "=", "&");
    let query_string = SigningRequest::pairs_to_string(req.query_to_grouped_vec(","), "=", "&");

    let mut content = Vec::with_capacity(
        req.path.len() + header_string.len() + query_string.len() + req.body.len(),
    );
    content.extend_from_slice(req.path.as_bytes());
    content.extend_from_slice(header_string.as_bytes());
    content.extend_from_slice(query_string.as_bytes());
    content.extend_from_slice(req.body);
    content
}

/// Header string as signed, with the access key id redacted.
fn loggable_headers(headers: &[(String, String)]) -> String {
    let pairs = headers
        .iter()
        .map(|(k, v)| match k.as_str() {
            X_ISV_AK => (k.clone(), format!("{:?}", Redact::from(v))),
            _ => (k.clone(), v.clone()),
        })
        .collect();
    SigningRequest::pairs_to_string(pairs, "=", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn parts(uri: &str, tenant: Option<&str>) -> http::request::Parts {
        let mut builder = http::Request::post(uri);
        if let Some(v) = tenant {
            builder = builder.header(X_TENANT_ID, v);
        }
        builder.body(()).unwrap().into_parts().0
    }

    fn content(uri: &str, tenant: Option<&str>, body: &[u8]) -> String {
        let parts = parts(uri, tenant);
        let req = SigningRequest::build(&parts, body).unwrap();
        let headers = headers_to_sign(&req, &HeaderName::from_static(X_TENANT_ID), "AK1").unwrap();
        String::from_utf8(canonical_content(&req, headers)).unwrap()
    }

    #[test]
    fn test_canonical_content_minimal() {
        assert_eq!(
            content("http://example.com/v1/data", None, b""),
            "/v1/datax-authentication-type=isv&x-authentication-version=1.0&x-isv-ak=AK1&x-signature-method=SHA256_HMAC"
        );
    }

    #[test]
    fn test_canonical_content_full() {
        assert_eq!(
            content(
                "http://example.com/v1/items?z=1&tags=a&tags=b",
                Some("pds1Admin"),
                br#"{"name":"demo"}"#
            ),
            concat!(
                "/v1/items",
                "x-authentication-type=isv&x-authentication-version=1.0&x-isv-ak=AK1",
                "&x-signature-method=SHA256_HMAC&x-tenant-id=pds1Admin",
                "tags=a,b&z=1",
                r#"{"name":"demo"}"#
            )
        );
    }

    #[test_case(None; "absent")]
    #[test_case(Some(""); "empty")]
    #[test_case(Some("   "); "blank")]
    fn test_tenant_excluded(tenant: Option<&str>) {
        assert!(!content("http://example.com/v1/data", tenant, b"").contains(X_TENANT_ID));
    }

    #[test]
    fn test_tenant_is_trimmed() {
        assert_eq!(
            content("http://example.com/v1/data", Some(" pds1 "), b""),
            content("http://example.com/v1/data", Some("pds1"), b"")
        );
        assert!(content("http://example.com/v1/data", Some("\tpds1 "), b"")
            .ends_with("x-signature-method=SHA256_HMAC&x-tenant-id=pds1"));
    }

    #[test]
    fn test_loggable_headers_redacts_access_key() {
        let parts = parts("http://example.com/v1/data", Some("pds1Admin"));
        let req = SigningRequest::build(&parts, b"").unwrap();
        let headers = headers_to_sign(
            &req,
            &HeaderName::from_static(X_TENANT_ID),
            "pzeUK+obho+uFPeS",
        )
        .unwrap();

        let logged = loggable_headers(&headers);
        assert!(!logged.contains("pzeUK+obho+uFPeS"));
        assert!(logged.contains("x-isv-ak=pze***PeS"));
        assert!(logged.contains("x-tenant-id=pds1Admin"));
    }

    #[test]
    fn test_query_without_value() {
        assert!(content("http://example.com/v1/data?flag&b=2", None, b"")
            .ends_with("SHA256_HMACb=2&flag="));
    }
}

use std::collections::BTreeMap;

use http::header::AsHeaderName;
use http::HeaderMap;
use http::Method;

use crate::{Error, Result};

/// Signing view of an about-to-be-sent request.
///
/// Borrows everything from the request, so building it never mutates or
/// copies the original parts or body. Query pairs are form-urldecoded.
#[derive(Debug)]
pub struct SigningRequest<'a> {
    /// HTTP method.
    pub method: &'a Method,
    /// HTTP path, still percent-encoded.
    pub path: &'a str,
    /// HTTP query parameters in their original order, decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: &'a HeaderMap,
    /// Buffered request body.
    pub body: &'a [u8],
}

impl<'a> SigningRequest<'a> {
    /// Build a signing view from http::request::Parts and the buffered body.
    ///
    /// A request without a path (authority-form or empty uri) can't be signed.
    pub fn build(parts: &'a http::request::Parts, body: &'a [u8]) -> Result<Self> {
        let path = parts.uri.path();
        if path.is_empty() {
            return Err(Error::request_invalid(format!(
                "request uri {} has no path and is invalid for signing",
                parts.uri
            )));
        }

        Ok(SigningRequest {
            method: &parts.method,
            path,
            query: parts
                .uri
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),
            headers: &parts.headers,
            body,
        })
    }

    /// Get the last value of the given header.
    ///
    /// Returns `None` if the header is absent.
    pub fn header_get(&self, key: impl AsHeaderName) -> Result<Option<&str>> {
        match self.headers.get_all(key).iter().next_back() {
            Some(v) => Ok(Some(v.to_str()?)),
            None => Ok(None),
        }
    }

    /// Group query values by name, joining repeated values with `join` in
    /// their original order. The result is sorted by name.
    ///
    /// ```shell
    /// [(b, 1), (a, x), (b, 2)] => [(a, x), (b, "1,2")]
    /// ```
    pub fn query_to_grouped_vec(&self, join: &str) -> Vec<(String, String)> {
        let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (k, v) in &self.query {
            grouped.entry(k.as_str()).or_default().push(v.as_str());
        }

        grouped
            .into_iter()
            .map(|(k, vs)| (k.to_string(), vs.join(join)))
            .collect()
    }

    /// Convert pairs to string sorted by key.
    ///
    /// Unlike query strings, `sep` is always written even for empty values.
    ///
    /// ```shell
    /// [(c, d), (a, b)] => "a=b&c=d"
    /// ```
    pub fn pairs_to_string(mut pairs: Vec<(String, String)>, sep: &str, join: &str) -> String {
        let mut s = String::with_capacity(16);

        pairs.sort_by(|l, r| l.0.cmp(&r.0));

        for (idx, (k, v)) in pairs.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(&k);
            s.push_str(sep);
            s.push_str(&v);
        }

        s
    }
}

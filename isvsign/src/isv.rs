// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! ISV service support with convenience APIs.

pub use isvsign_isv::*;

use crate::Signer;
#[cfg(feature = "default-context")]
use crate::{default_context, HttpSend, Result, SigningHttpSend};
#[cfg(feature = "default-context")]
use isvsign_http_send_reqwest::ReqwestHttpSend;
#[cfg(feature = "default-context")]
use std::sync::Arc;

/// Signer carrying an ISV credential.
pub type DefaultSigner = Signer<Credential>;

/// Client that signs every request with an ISV credential before sending it
/// through reqwest.
#[cfg(feature = "default-context")]
pub type DefaultHttpSend = Arc<dyn HttpSend>;

/// Create a signer with the credential found by [`DefaultCredentialProvider`].
///
/// The credential is loaded once, from `ISV_ACCESS_KEY_ID` /
/// `ISV_SECRET_ACCESS_KEY` or `~/.isv/credentials`.
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> isvsign::Result<()> {
/// let signer = isvsign::isv::default_signer().await?;
///
/// let (mut parts, body) = http::Request::get("https://isv.example.com/v1/data")
///     .body(Vec::<u8>::new())?
///     .into_parts();
/// signer.sign(&mut parts, &body)?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub async fn default_signer() -> Result<DefaultSigner> {
    Signer::from_provider(
        &default_context(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    )
    .await
}

/// Create a reqwest client that signs every request.
///
/// Keys from `config` (or its profile) win over the default chain. The tenant
/// header name comes from `config.tenant_header`. If `config.tenant_id` (or
/// `ISV_TENANT_ID`) is set, requests without a tenant header get it before
/// they are signed.
#[cfg(feature = "default-context")]
pub async fn default_http_send(config: Config) -> Result<DefaultHttpSend> {
    let ctx = default_context();
    let config = config.from_env(&ctx);

    let mut request_signer = RequestSigner::new();
    if let Some(name) = &config.tenant_header {
        request_signer = request_signer.with_tenant_header(name)?;
    }
    let tenant_header = request_signer.tenant_header().clone();
    let tenant_id = config
        .tenant_id
        .clone()
        .filter(|v| !v.trim().is_empty());

    let provider = DefaultCredentialProvider::new()
        .push_front(ConfigCredentialProvider::new(Arc::new(config)));
    let signer = Signer::from_provider(&ctx, provider, request_signer).await?;
    let client = SigningHttpSend::new(signer, ReqwestHttpSend::default());

    match tenant_id {
        Some(tenant_id) => Ok(Arc::new(TenantHttpSend::new(
            tenant_header,
            &tenant_id,
            client,
        )?)),
        None => Ok(Arc::new(client)),
    }
}

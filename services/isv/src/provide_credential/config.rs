use async_trait::async_trait;
use isvsign_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

use super::ProfileCredentialProvider;
use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider will load credential from config.
///
/// Unset fields are filled from env first. If the keys are still missing but
/// a profile or credentials file is configured, the profile file is used.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new loader via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        if let (Some(ak), Some(sk)) = (&config.access_key_id, &config.secret_access_key) {
            return Ok(Some(Credential::new(ak.clone(), sk.clone())));
        }

        if config.profile.is_none() && config.credentials_file.is_none() {
            return Ok(None);
        }

        let mut profile = ProfileCredentialProvider::new();
        if let Some(v) = config.profile {
            profile = profile.with_profile(v);
        }
        if let Some(v) = config.credentials_file {
            profile = profile.with_credentials_file(v);
        }
        profile.provide_credential(ctx).await
    }
}

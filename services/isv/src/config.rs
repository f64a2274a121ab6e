use std::fmt::{Debug, Formatter};

use super::constants::*;
use isvsign_core::{utils::Redact, Context};

/// Config carries all the configuration for isv services.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ISV_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ISV_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `tenant_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ISV_TENANT_ID`]
    ///
    /// The signer never injects it. Wrap the signing client in
    /// [`crate::TenantHttpSend`] to set it on requests that carry none, or set
    /// it per request with [`crate::set_tenant_id`].
    pub tenant_id: Option<String>,
    /// Name of the tenant header, `x-tenant-id` if unset.
    pub tenant_header: Option<String>,
    /// `profile` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ISV_PROFILE`]
    pub profile: Option<String>,
    /// `credentials_file` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ISV_SHARED_CREDENTIALS_FILE`]
    pub credentials_file: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key_id
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_access_key
    pub fn with_secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Set tenant_id
    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Set tenant_header
    pub fn with_tenant_header(mut self, tenant_header: impl Into<String>) -> Self {
        self.tenant_header = Some(tenant_header.into());
        self
    }

    /// Set profile
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set credentials_file
    pub fn with_credentials_file(mut self, credentials_file: impl Into<String>) -> Self {
        self.credentials_file = Some(credentials_file.into());
        self
    }

    /// Load config from env, fields already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(ISV_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ISV_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ISV_TENANT_ID) {
            self.tenant_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ISV_PROFILE) {
            self.profile.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ISV_SHARED_CREDENTIALS_FILE) {
            self.credentials_file.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &self.access_key_id.as_ref().map(Redact::from))
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(Redact::from),
            )
            .field("tenant_id", &self.tenant_id)
            .field("tenant_header", &self.tenant_header)
            .field("profile", &self.profile)
            .field("credentials_file", &self.credentials_file)
            .finish()
    }
}

use crate::constants::*;
use crate::Credential;
use async_trait::async_trait;
use ini::Ini;
use isvsign_core::{Context, Error, ProvideCredential, Result};
use log::debug;

/// ProfileCredentialProvider loads isv credentials from a shared credentials file.
///
/// The file is `~/.isv/credentials` unless set by `with_credentials_file()` or
/// the `ISV_SHARED_CREDENTIALS_FILE` environment variable:
///
/// ```ini
/// [default]
/// isv_access_key_id = AK1
/// isv_secret_access_key = SK1
/// ```
///
/// The profile to use is determined by:
/// 1. The profile specified via `with_profile()`
/// 2. The `ISV_PROFILE` environment variable
/// 3. Default to "default"
#[derive(Debug, Default, Clone)]
pub struct ProfileCredentialProvider {
    profile: Option<String>,
    credentials_file: Option<String>,
}

impl ProfileCredentialProvider {
    /// Create a new ProfileCredentialProvider with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile name to use.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set the path to the credentials file.
    pub fn with_credentials_file(mut self, path: impl Into<String>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }
}

#[async_trait]
impl ProvideCredential for ProfileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let profile = self
            .profile
            .clone()
            .or_else(|| ctx.env_var(ISV_PROFILE))
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

        let path = self
            .credentials_file
            .clone()
            .or_else(|| ctx.env_var(ISV_SHARED_CREDENTIALS_FILE))
            .unwrap_or_else(|| DEFAULT_CREDENTIALS_FILE.to_string());

        let Some(expanded_path) = ctx.expand_home_dir(&path) else {
            debug!("failed to expand homedir for path: {path}");
            return Ok(None);
        };

        let content = match ctx.file_read(&expanded_path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("failed to read credentials file {expanded_path}: {err:?}");
                return Ok(None);
            }
        };

        let conf = Ini::load_from_str(&String::from_utf8_lossy(&content)).map_err(|e| {
            Error::config_invalid(format!("failed to parse credentials file {expanded_path}"))
                .with_source(anyhow::Error::new(e))
        })?;

        let Some(props) = conf.section(Some(profile.as_str())) else {
            debug!("profile {profile} not found in credentials file {expanded_path}");
            return Ok(None);
        };

        match (
            props.get(PROFILE_ACCESS_KEY_ID),
            props.get(PROFILE_SECRET_ACCESS_KEY),
        ) {
            (Some(ak), Some(sk)) => Ok(Some(Credential::new(ak, sk))),
            _ => {
                debug!("profile {profile} has no complete isv credential");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isvsign_core::{ErrorKind, StaticEnv};
    use isvsign_file_read_tokio::TokioFileRead;
    use std::collections::HashMap;
    use std::path::Path;

    const CREDENTIALS: &str = r#"
[default]
isv_access_key_id = default_ak
isv_secret_access_key = default_sk

[staging]
isv_access_key_id = staging_ak
isv_secret_access_key = staging_sk

[partial]
isv_access_key_id = partial_ak
"#;

    fn test_ctx(home: &Path, envs: &[(&str, String)]) -> Context {
        Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: Some(home.to_path_buf()),
                envs: envs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect::<HashMap<_, _>>(),
            })
    }

    fn write_home(content: &str) -> tempfile::TempDir {
        let home = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(home.path().join(".isv")).unwrap();
        std::fs::write(home.path().join(".isv/credentials"), content).unwrap();
        home
    }

    #[tokio::test]
    async fn test_profile_default() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let home = write_home(CREDENTIALS);
        let cred = ProfileCredentialProvider::new()
            .provide_credential(&test_ctx(home.path(), &[]))
            .await?
            .expect("default profile must be loaded");

        assert_eq!(cred.access_key_id, "default_ak");
        assert_eq!(cred.secret_access_key, "default_sk");
        Ok(())
    }

    #[tokio::test]
    async fn test_profile_from_env_and_builder() -> anyhow::Result<()> {
        let home = write_home(CREDENTIALS);
        let ctx = test_ctx(home.path(), &[(ISV_PROFILE, "staging".to_string())]);

        let cred = ProfileCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("staging profile must be loaded");
        assert_eq!(cred.access_key_id, "staging_ak");

        let cred = ProfileCredentialProvider::new()
            .with_profile("default")
            .provide_credential(&ctx)
            .await?
            .expect("explicit profile must win");
        assert_eq!(cred.access_key_id, "default_ak");
        Ok(())
    }

    #[tokio::test]
    async fn test_profile_custom_file() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let file = home.path().join("custom");
        std::fs::write(&file, CREDENTIALS)?;

        let ctx = test_ctx(
            home.path(),
            &[(
                ISV_SHARED_CREDENTIALS_FILE,
                file.to_string_lossy().to_string(),
            )],
        );
        let cred = ProfileCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("file from env must be loaded");
        assert_eq!(cred.access_key_id, "default_ak");
        Ok(())
    }

    #[tokio::test]
    async fn test_profile_missing_or_partial() -> anyhow::Result<()> {
        let home = write_home(CREDENTIALS);
        let ctx = test_ctx(home.path(), &[]);

        for profile in ["partial", "unknown"] {
            let cred = ProfileCredentialProvider::new()
                .with_profile(profile)
                .provide_credential(&ctx)
                .await?;
            assert!(cred.is_none(), "profile {profile}");
        }

        let empty_home = tempfile::tempdir()?;
        let cred = ProfileCredentialProvider::new()
            .provide_credential(&test_ctx(empty_home.path(), &[]))
            .await?;
        assert!(cred.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_profile_malformed_file() {
        let home = write_home("[default\nisv_access_key_id = x\n");

        let err = ProfileCredentialProvider::new()
            .provide_credential(&test_ctx(home.path(), &[]))
            .await
            .expect_err("malformed file must fail");
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}

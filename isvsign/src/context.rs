use isvsign_core::{Context, OsEnv};
use isvsign_file_read_tokio::TokioFileRead;

/// Create a context reading files with Tokio and env from the OS.
pub fn default_context() -> Context {
    Context::new().with_file_read(TokioFileRead).with_env(OsEnv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_context_reads_files() -> isvsign_core::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("credentials");
        std::fs::write(&path, "[default]\n")?;

        let ctx = default_context();
        assert_eq!(
            ctx.file_read_as_string(&path.to_string_lossy()).await?,
            "[default]\n"
        );
        Ok(())
    }
}

use isvsign_core::{Context, OsEnv, Result};
use isvsign_file_read_tokio::TokioFileRead;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "~/.isv/credentials".to_string());
    let Some(path) = ctx.expand_home_dir(&path) else {
        eprintln!("Home directory not found, pass an absolute path instead.");
        return Ok(());
    };

    println!("Attempting to read file: {path}");

    match ctx.file_read_as_string(&path).await {
        Ok(text) => {
            // Print section names only, never the keys themselves.
            for line in text.lines().filter(|l| l.trim_start().starts_with('[')) {
                println!("found profile {}", line.trim());
            }
        }
        Err(e) => {
            eprintln!("Failed to read file: {e}");
        }
    }

    Ok(())
}

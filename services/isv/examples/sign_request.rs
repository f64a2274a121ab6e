use isvsign_core::{Context, OsEnv, Result, Signer};
use isvsign_file_read_tokio::TokioFileRead;
use isvsign_isv::{set_tenant_id, DefaultCredentialProvider, RequestSigner, StaticCredentialProvider};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);

    // Env and ~/.isv/credentials win, the static pair is only a fallback for the demo.
    let provider = DefaultCredentialProvider::new();
    let signer = match Signer::from_provider(&ctx, provider, RequestSigner::new()).await {
        Ok(signer) => signer,
        Err(err) => {
            println!("no credential configured ({err}), using demo credential");
            Signer::from_provider(
                &ctx,
                StaticCredentialProvider::new("AK1", "SK1"),
                RequestSigner::new(),
            )
            .await?
        }
    };

    let body = br#"{"name":"demo"}"#;
    let (mut parts, _) = http::Request::post("https://isv.example.com/v1/items?page=1")
        .header("content-type", "application/json")
        .body(())?
        .into_parts();
    set_tenant_id(&mut parts, RequestSigner::new().tenant_header(), "demo-tenant")?;

    signer.sign(&mut parts, body)?;

    for (name, value) in &parts.headers {
        println!("{name}: {value:?}");
    }
    Ok(())
}

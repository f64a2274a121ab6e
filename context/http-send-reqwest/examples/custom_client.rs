use bytes::Bytes;
use isvsign_core::{HttpSend, Result, Signer, SigningHttpSend};
use isvsign_http_send_reqwest::ReqwestHttpSend;
use isvsign_isv::{Credential, RequestSigner};
use reqwest::Client;
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Create a custom reqwest client with specific configuration
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("isvsign-example/1.0")
        .build()
        .map_err(|e| isvsign_core::Error::unexpected("failed to build client").with_source(e))?;

    let cred = Credential::new(
        env::var("ISV_ACCESS_KEY_ID").unwrap_or_else(|_| "demo-ak".to_string()),
        env::var("ISV_SECRET_ACCESS_KEY").unwrap_or_else(|_| "demo-sk".to_string()),
    );
    let signer = Signer::new(cred, RequestSigner::new());
    let transport = SigningHttpSend::new(signer, ReqwestHttpSend::new(client));

    let url = env::args()
        .nth(1)
        .unwrap_or_else(|| "https://httpbin.org/post".to_string());
    println!("Sending signed POST to {url}");

    let req = http::Request::post(url.as_str())
        .header("content-type", "application/json")
        .header("x-tenant-id", "demo-tenant")
        .body(Bytes::from_static(br#"{"name":"demo"}"#))?;

    match transport.http_send(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            if let Ok(text) = String::from_utf8(resp.body().to_vec()) {
                println!("{text}");
            }
        }
        Err(e) => eprintln!("Request failed: {e}"),
    }

    Ok(())
}

use bytes::Bytes;
use isvsign::isv::{default_http_send, set_tenant_id, Config, RequestSigner};
use isvsign::{HttpSend, Result};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let url = env::args()
        .nth(1)
        .unwrap_or_else(|| "https://isv.example.com/api/project/pageQuery?page=1&pageSize=10".to_string());

    // Keys come from ISV_ACCESS_KEY_ID / ISV_SECRET_ACCESS_KEY or ~/.isv/credentials.
    let client = default_http_send(Config::new()).await?;

    let (mut parts, body) = http::Request::get(url).body(Bytes::new())?.into_parts();
    if let Ok(tenant) = env::var("ISV_TENANT_ID") {
        set_tenant_id(&mut parts, RequestSigner::new().tenant_header(), &tenant)?;
    }

    let resp = client.http_send(http::Request::from_parts(parts, body)).await?;
    println!("status: {}", resp.status());
    println!("{}", String::from_utf8_lossy(resp.body()));
    Ok(())
}

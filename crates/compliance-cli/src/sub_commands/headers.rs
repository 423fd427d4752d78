use anyhow::Result;
use clap::Args;
use compliance_http::{CredentialsPolicy, HttpClient, RequestOptions};
use url::Url;

#[derive(Args)]
pub struct HeadersSubCommand {
    /// Path on the server, resolved against the server url
    path: String,
}

pub async fn headers(
    client: &HttpClient,
    server_url: &Url,
    credentials: CredentialsPolicy,
    sub_command_args: &HeadersSubCommand,
) -> Result<()> {
    let url = server_url.join(&sub_command_args.path)?;

    let headers = client
        .fetch_headers(RequestOptions::new(url).credentials(credentials))
        .await?;

    for (name, value) in &headers {
        println!("{}: {}", name, String::from_utf8_lossy(value.as_bytes()));
    }

    Ok(())
}

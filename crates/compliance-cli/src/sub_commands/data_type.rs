use std::str::FromStr;

use anyhow::{bail, Result};
use clap::Args;
use compliance_http::{CredentialsPolicy, HttpClient};
use compliance_types::{find_by_id, ComplianceFieldId};
use url::Url;

#[derive(Args)]
pub struct DataTypeSubCommand {
    /// Identifier tag, e.g. `MEMBER_ID` or `EMAIL`
    id: String,
}

pub async fn data_type(
    client: &HttpClient,
    server_url: &Url,
    credentials: CredentialsPolicy,
    sub_command_args: &DataTypeSubCommand,
) -> Result<()> {
    let id = ComplianceFieldId::from_str(&sub_command_args.id)?;

    let data_types = client
        .compliance_data_types_with(server_url, credentials)
        .await?;

    match find_by_id(&data_types, id) {
        Some(data_type) => {
            println!("{}", serde_json::to_string_pretty(data_type)?);
            Ok(())
        }
        None => bail!("No compliance data type with id {}", id),
    }
}

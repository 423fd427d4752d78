use anyhow::Result;
use clap::Args;
use compliance_http::{CredentialsPolicy, HttpClient};
use compliance_types::{identifier_types, ComplianceDataType};
use url::Url;

#[derive(Args)]
pub struct DataTypesSubCommand {
    /// Print the raw JSON records
    #[arg(long)]
    json: bool,
    /// Only list data types that classify a field as an identifier
    #[arg(long)]
    id_types_only: bool,
}

pub async fn data_types(
    client: &HttpClient,
    server_url: &Url,
    credentials: CredentialsPolicy,
    sub_command_args: &DataTypesSubCommand,
) -> Result<()> {
    let mut data_types = client
        .compliance_data_types_with(server_url, credentials)
        .await?;

    if sub_command_args.id_types_only {
        data_types = identifier_types(&data_types).cloned().collect();
    }

    if sub_command_args.json {
        println!("{}", serde_json::to_string_pretty(&data_types)?);
        return Ok(());
    }

    if data_types.is_empty() {
        println!("No compliance data types");
        return Ok(());
    }

    for data_type in &data_types {
        println!("{}", summary_line(data_type));
    }

    Ok(())
}

/// One line per data type: id, title, flags, classification and formats
pub fn summary_line(data_type: &ComplianceDataType) -> String {
    let formats: Vec<&str> = data_type
        .field_formats()
        .iter()
        .map(|format| format.as_str())
        .collect();

    let mut flags = Vec::new();
    if data_type.pii {
        flags.push("pii");
    }
    if data_type.id_type {
        flags.push("id");
    }

    let mut line = format!(
        "{:<26} {:<28} {:<7} {}",
        data_type.id,
        data_type.title,
        flags.join(","),
        data_type.default_security_classification
    );

    if !formats.is_empty() {
        line.push_str(&format!(" [{}]", formats.join(", ")));
    }

    line
}

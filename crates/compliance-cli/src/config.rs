use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use compliance_http::{CredentialsPolicy, HttpClient};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use url::Url;

/// Prefix of environment variables overriding the config file
pub const ENV_PREFIX: &str = "COMPLIANCE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Root URL of the server publishing compliance data types
    pub url: String,
    /// Total request timeout in seconds
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub accept_invalid_certs: bool,
    pub proxy: Option<String>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            url: "http://localhost:9000".to_string(),
            timeout_secs: Some(30),
            accept_invalid_certs: false,
            proxy: None,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Default)]
pub struct Auth {
    #[serde(default)]
    pub credentials: CredentialsPolicy,
    /// Credential headers, e.g. `Authorization` or `Cookie`
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.headers.keys().collect();
        names.sort();

        f.debug_struct("Auth")
            .field("credentials", &self.credentials)
            .field("headers", &format!("<{} redacted: {:?}>", names.len(), names))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub auth: Auth,
}

impl Settings {
    /// Defaults, overlaid with the config file when it exists, then with
    /// `COMPLIANCE_*` environment variables
    pub fn new<P>(config_file_name: Option<P>) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::from_sources(
            config_file_name.as_ref().map(|path| path.as_ref()),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn from_sources(config_file_name: Option<&Path>, environment: Environment) -> Result<Self> {
        let default_settings = Self::default();

        let mut builder = Config::builder()
            // use defaults
            .add_source(Config::try_from(&default_settings)?);

        if let Some(path) = config_file_name {
            tracing::debug!("Loading config file {}", path.display());
            // override with file contents
            builder = builder.add_source(File::from(path).required(false));
        }

        let config = builder
            .add_source(
                environment
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Could not load settings")?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        self.server_url()?;
        if let Some(proxy) = &self.server.proxy {
            Url::parse(proxy).with_context(|| format!("Invalid proxy url `{}`", proxy))?;
        }
        Ok(())
    }

    /// Parsed server root URL
    pub fn server_url(&self) -> Result<Url> {
        Url::parse(&self.server.url)
            .with_context(|| format!("Invalid server url `{}`", self.server.url))
    }

    /// HTTP client configured from these settings
    pub fn http_client(&self) -> Result<HttpClient> {
        let server_url = self.server_url()?;

        let mut builder = HttpClient::builder()
            .danger_accept_invalid_certs(self.server.accept_invalid_certs)
            .origin(server_url);

        if let Some(timeout) = self.server.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        if let Some(proxy) = &self.server.proxy {
            builder = builder.proxy(Url::parse(proxy)?);
        }

        for (name, value) in &self.auth.headers {
            builder = builder.credential_header(name, value);
        }

        Ok(builder.build()?)
    }
}

/// Default config file location, `~/.compliance-cli/config.toml`
pub fn default_config_path(work_dir: &str) -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(work_dir).join("config.toml"))
}

//! Compliance data types endpoint

use compliance_types::{ComplianceDataType, ComplianceDataTypeResponse};
use url::Url;

use crate::client::HttpClient;
use crate::executor::RequestExecutor;
use crate::request::{CredentialsPolicy, RequestOptions};
use crate::response::Response;

/// Path of the compliance data types listing, relative to the server root
pub const COMPLIANCE_DATA_TYPES_PATH: &str = "/api/v2/list/compliance-data-types";

/// URL of the compliance data types listing on `server`
pub fn compliance_data_types_url(server: &Url) -> Response<Url> {
    Ok(server.join(COMPLIANCE_DATA_TYPES_PATH)?)
}

impl<E: RequestExecutor> HttpClient<E> {
    /// Fetch the compliance data types published by `server`
    ///
    /// An envelope without a list yields an empty vector.
    pub async fn compliance_data_types(&self, server: &Url) -> Response<Vec<ComplianceDataType>> {
        self.compliance_data_types_with(server, CredentialsPolicy::default())
            .await
    }

    /// Fetch the compliance data types published by `server`, sending stored
    /// credentials according to `credentials`
    pub async fn compliance_data_types_with(
        &self,
        server: &Url,
        credentials: CredentialsPolicy,
    ) -> Response<Vec<ComplianceDataType>> {
        let url = compliance_data_types_url(server)?;
        let response: ComplianceDataTypeResponse = self
            .fetch_json(RequestOptions::new(url).credentials(credentials))
            .await?;

        let data_types = response.into_data_types();
        tracing::debug!("Fetched {} compliance data types", data_types.len());

        Ok(data_types)
    }
}

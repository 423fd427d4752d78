//! Compliance data type records

use serde::{Deserialize, Serialize};

use crate::enums::{Classification, ComplianceFieldId, IdLogicalType};

/// Metadata describing how a field identifier is classified for privacy and
/// security handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceDataType {
    /// Values under this identifier contain personally identifiable information
    pub pii: bool,
    /// Identifier classifies a field as a member or entity identifier
    pub id_type: bool,
    /// Default security classification
    pub default_security_classification: Classification,
    /// Human readable label
    pub title: String,
    /// Globally unique resource name
    pub urn: String,
    /// Logical formats supported by the identifier
    ///
    /// Only populated when `id_type` is true, see [`ComplianceDataType::field_formats`].
    #[serde(default)]
    pub supported_field_formats: Vec<IdLogicalType>,
    /// Identifier tag
    pub id: ComplianceFieldId,
    /// Free text explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ComplianceDataType {
    /// Supported field formats, empty unless this is an identifier type
    pub fn field_formats(&self) -> &[IdLogicalType] {
        if self.id_type {
            &self.supported_field_formats
        } else {
            &[]
        }
    }

    /// Whether `format` is a supported field format of this identifier type
    pub fn supports_format(&self, format: IdLogicalType) -> bool {
        self.field_formats().contains(&format)
    }
}

/// Response envelope of the compliance data types endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceDataTypeResponse {
    /// Compliance data types, absent when the endpoint has nothing to report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_data_types: Option<Vec<ComplianceDataType>>,
}

impl ComplianceDataTypeResponse {
    /// Data types carried by the envelope, empty when absent
    pub fn into_data_types(self) -> Vec<ComplianceDataType> {
        self.compliance_data_types.unwrap_or_default()
    }
}

/// Find the data type tagged with `id`
pub fn find_by_id(
    data_types: &[ComplianceDataType],
    id: ComplianceFieldId,
) -> Option<&ComplianceDataType> {
    data_types.iter().find(|data_type| data_type.id == id)
}

/// Data types that classify a field as an identifier
pub fn identifier_types(
    data_types: &[ComplianceDataType],
) -> impl Iterator<Item = &ComplianceDataType> {
    data_types.iter().filter(|data_type| data_type.id_type)
}

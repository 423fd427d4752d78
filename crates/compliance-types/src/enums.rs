//! Closed enumerations used by compliance data types
//!
//! Every enumeration is carried on the wire as a plain string. Parsing is
//! exact: unknown strings are rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Declares a string-backed enumeration with `as_str`, `FromStr`, `Display`
/// and string serde impls.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// All variants in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(Error::unknown(stringify!($name), value)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                Self::from_str(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// Security classification applied to a field by default
    pub enum Classification {
        /// Confidential
        Confidential => "confidential",
        /// Limited distribution
        LimitedDistribution => "limitedDistribution",
        /// Highly confidential
        HighlyConfidential => "highlyConfidential",
    }
}

wire_enum! {
    /// Logical format of an identifier field's values
    pub enum IdLogicalType {
        /// Numeric identifier
        Numeric => "NUMERIC",
        /// URN
        Urn => "URN",
        /// Reversed URN
        ReversedUrn => "REVERSED_URN",
        /// Composite URN
        CompositeUrn => "COMPOSITE_URN",
    }
}

wire_enum! {
    /// Identifier field tags
    pub enum ComplianceFieldIdValue {
        /// Field carries no identifier
        None => "NONE",
        /// Member id
        MemberId => "MEMBER_ID",
        /// Subject member id
        SubjectMemberId => "SUBJECT_MEMBER_ID",
        /// Group id
        GroupId => "GROUP_ID",
        /// Company id
        CompanyId => "COMPANY_ID",
        /// Mixed id
        MixedId => "MIXED_ID",
        /// Custom id
        CustomId => "CUSTOM_ID",
        /// Enterprise profile id
        EnterpriseProfileId => "ENTERPRISE_PROFILE_ID",
        /// Enterprise account id
        EnterpriseAccountId => "ENTERPRISE_ACCOUNT_ID",
        /// Contract id
        ContractId => "CONTRACT_ID",
        /// Seat id
        SeatId => "SEAT_ID",
        /// Advertiser id
        AdvertiserId => "ADVERTISER_ID",
        /// Slideshare user id
        SlideshareUserId => "SLIDESHARE_USER_ID",
    }
}

wire_enum! {
    /// Logical types of fields that carry values but do not identify an entity
    pub enum NonMemberIdLogicalType {
        /// Person name
        Name => "NAME",
        /// Email address
        Email => "EMAIL",
        /// Phone number
        PhoneNumber => "PHONE_NUMBER",
        /// Postal address
        Address => "ADDRESS",
        /// Latitude and longitude
        LatitudeLongitude => "LATITUDE_LONGITUDE",
        /// City, state or region
        CityStateRegion => "CITY_STATE_REGION",
        /// IP address
        IpAddress => "IP_ADDRESS",
        /// Financial account number
        FinancialNumber => "FINANCIAL_NUMBER",
        /// Payment information
        PaymentInfo => "PAYMENT_INFO",
        /// Password
        Password => "PASSWORD",
        /// Authentication token
        AuthenticationToken => "AUTHENTICATION_TOKEN",
        /// Message content
        Message => "MESSAGE",
        /// National id
        NationalId => "NATIONAL_ID",
        /// Social security number
        SocialSecurityNumber => "SOCIAL_SECURITY_NUMBER",
        /// Passport number
        Passport => "PASSPORT",
        /// Driver's license number
        DriversLicense => "DRIVERS_LICENSE",
        /// Visa number
        VisaNumber => "VISA_NUMBER",
        /// Insurance number
        InsuranceNumber => "INSURANCE_NUMBER",
        /// Biometric information
        BiometricInfo => "BIOMETRIC_INFO",
        /// Health information
        HealthInfo => "HEALTH_INFO",
    }
}

/// Tag identifying a compliance data type
///
/// Drawn from one of two disjoint enumerations, so any wire string resolves
/// to at most one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComplianceFieldId {
    /// Identifier field
    Identifier(ComplianceFieldIdValue),
    /// Non-identifier logical type
    LogicalType(NonMemberIdLogicalType),
}

impl ComplianceFieldId {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceFieldId::Identifier(id) => id.as_str(),
            ComplianceFieldId::LogicalType(logical_type) => logical_type.as_str(),
        }
    }

    /// Whether the tag comes from the identifier field enumeration
    pub fn is_identifier(&self) -> bool {
        matches!(self, ComplianceFieldId::Identifier(_))
    }
}

impl From<ComplianceFieldIdValue> for ComplianceFieldId {
    fn from(id: ComplianceFieldIdValue) -> Self {
        ComplianceFieldId::Identifier(id)
    }
}

impl From<NonMemberIdLogicalType> for ComplianceFieldId {
    fn from(logical_type: NonMemberIdLogicalType) -> Self {
        ComplianceFieldId::LogicalType(logical_type)
    }
}

impl FromStr for ComplianceFieldId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = ComplianceFieldIdValue::from_str(value) {
            return Ok(id.into());
        }

        NonMemberIdLogicalType::from_str(value)
            .map(Into::into)
            .map_err(|_| Error::unknown("ComplianceFieldId", value))
    }
}

impl fmt::Display for ComplianceFieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for ComplianceFieldId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComplianceFieldId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_classification_wire_strings() {
        assert_eq!(
            serde_json::to_string(&Classification::LimitedDistribution).expect("serializes"),
            r#""limitedDistribution""#
        );
        let parsed: Classification =
            serde_json::from_str(r#""highlyConfidential""#).expect("valid classification");
        assert_eq!(parsed, Classification::HighlyConfidential);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(IdLogicalType::from_str("urn").is_err());
        assert_eq!(IdLogicalType::from_str("URN"), Ok(IdLogicalType::Urn));
    }

    #[test]
    fn test_unknown_value_rejected() {
        let result: Result<IdLogicalType, _> = serde_json::from_str(r#""HEX""#);
        let error = result.expect_err("HEX is not a logical type");
        assert!(error.to_string().contains("Unknown IdLogicalType value"));
    }

    #[test]
    fn test_field_id_enumerations_are_disjoint() {
        let identifiers: HashSet<&str> = ComplianceFieldIdValue::ALL
            .iter()
            .map(ComplianceFieldIdValue::as_str)
            .collect();

        for logical_type in NonMemberIdLogicalType::ALL {
            assert!(!identifiers.contains(logical_type.as_str()));
        }
    }

    #[test]
    fn test_field_id_resolves_either_enumeration() {
        assert_eq!(
            ComplianceFieldId::from_str("MEMBER_ID"),
            Ok(ComplianceFieldId::Identifier(ComplianceFieldIdValue::MemberId))
        );
        assert_eq!(
            ComplianceFieldId::from_str("EMAIL"),
            Ok(ComplianceFieldId::LogicalType(NonMemberIdLogicalType::Email))
        );

        let error = ComplianceFieldId::from_str("NOT_A_TAG").expect_err("unknown tag");
        assert_eq!(error, Error::unknown("ComplianceFieldId", "NOT_A_TAG"));
    }

    #[test]
    fn test_field_id_display_matches_wire() {
        for id in ComplianceFieldIdValue::ALL {
            let field_id = ComplianceFieldId::from(*id);
            assert!(field_id.is_identifier());
            assert_eq!(field_id.to_string(), id.as_str());
        }

        let field_id = ComplianceFieldId::from(NonMemberIdLogicalType::IpAddress);
        assert!(!field_id.is_identifier());
        assert_eq!(
            serde_json::to_string(&field_id).expect("serializes"),
            r#""IP_ADDRESS""#
        );
    }
}

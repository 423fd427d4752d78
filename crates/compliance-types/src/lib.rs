//! Compliance data types
//!
//! Passive records exchanged with the compliance data types endpoint: the
//! [`ComplianceDataType`] metadata record, its [`ComplianceDataTypeResponse`]
//! envelope and the closed enumerations they are built from.

pub mod data_type;
pub mod enums;
pub mod error;

pub use self::data_type::{
    find_by_id, identifier_types, ComplianceDataType, ComplianceDataTypeResponse,
};
pub use self::enums::{
    Classification, ComplianceFieldId, ComplianceFieldIdValue, IdLogicalType,
    NonMemberIdLogicalType,
};
pub use self::error::Error;

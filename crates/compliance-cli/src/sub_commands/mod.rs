pub mod data_type;
pub mod data_types;
pub mod headers;

//! Request executor backends

pub mod reqwest_backend;

pub use reqwest_backend::ReqwestExecutor;

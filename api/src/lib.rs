//! This crate contains everything the recharge admin screens share that is not
//! rendering: wire types, the backend client, and the approval workflow.

pub mod backend;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod workflow;

pub use backend::DepositBackend;
pub use backend::HttpBackend;
pub use config::BackendConfig;
pub use error::ApiError;

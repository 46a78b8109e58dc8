//! Defines the trait for the recharge backend and its implementations.

mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use http::HttpBackend;

use crate::error::ApiError;
use crate::models::Client;
use crate::models::Deposit;
use crate::models::DepositAmount;
use crate::models::DepositId;

/// The REST operations the admin screens consume.
///
/// Every screen talks to the backend through this trait so the workflow
/// logic can be driven by an in-memory implementation in tests.
#[allow(async_fn_in_trait)]
pub trait DepositBackend {
    /// `GET /api/clients`
    async fn list_clients(&self) -> Result<Vec<Client>, ApiError>;

    /// `GET /api/transactions/{user_id}`
    async fn user_deposits(&self, user_id: &str) -> Result<Vec<Deposit>, ApiError>;

    /// `DELETE /api/deposits/{id}`
    async fn delete_deposit(&self, id: &DepositId) -> Result<(), ApiError>;

    /// `GET /api/deposits`
    async fn pending_deposits(&self) -> Result<Vec<Deposit>, ApiError>;

    /// `POST /api/deposits/{id}/approve` with body `{ amount }`
    async fn approve_deposit(&self, id: &DepositId, amount: DepositAmount)
        -> Result<(), ApiError>;

    /// `POST /api/deposits/{id}/complete`
    async fn complete_deposit(&self, id: &DepositId) -> Result<(), ApiError>;
}

//! In-memory backend for driving the workflow logic in tests.

use std::cell::RefCell;

use chrono::TimeZone;
use chrono::Utc;

use super::DepositBackend;
use crate::error::ApiError;
use crate::models::Client;
use crate::models::ClientId;
use crate::models::CoinSymbol;
use crate::models::Deposit;
use crate::models::DepositAmount;
use crate::models::DepositId;
use crate::models::DepositOwner;
use crate::models::DepositStatus;
use crate::models::OwnerProfile;

/// A backend call as recorded by `MockBackend`.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListClients,
    UserDeposits(String),
    Delete(DepositId),
    Pending,
    Approve(DepositId, DepositAmount),
    Complete(DepositId),
}

#[derive(Default)]
pub struct MockBackend {
    pub clients: Vec<Client>,
    pub pending: Vec<Deposit>,
    pub history: Vec<Deposit>,
    pub fail_fetch: bool,
    pub fail_delete: bool,
    pub fail_approve: bool,
    pub fail_complete: bool,
    pub calls: RefCell<Vec<Call>>,
}

impl MockBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call, fail: bool) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if fail {
            Err(ApiError::Server {
                status: 500,
                message: "mock failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl DepositBackend for MockBackend {
    async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.record(Call::ListClients, self.fail_fetch)?;
        Ok(self.clients.clone())
    }

    async fn user_deposits(&self, user_id: &str) -> Result<Vec<Deposit>, ApiError> {
        self.record(Call::UserDeposits(user_id.to_string()), self.fail_fetch)?;
        Ok(self.history.clone())
    }

    async fn delete_deposit(&self, id: &DepositId) -> Result<(), ApiError> {
        self.record(Call::Delete(id.clone()), self.fail_delete)
    }

    async fn pending_deposits(&self) -> Result<Vec<Deposit>, ApiError> {
        self.record(Call::Pending, self.fail_fetch)?;
        Ok(self.pending.clone())
    }

    async fn approve_deposit(
        &self,
        id: &DepositId,
        amount: DepositAmount,
    ) -> Result<(), ApiError> {
        self.record(Call::Approve(id.clone(), amount), self.fail_approve)
    }

    async fn complete_deposit(&self, id: &DepositId) -> Result<(), ApiError> {
        self.record(Call::Complete(id.clone()), self.fail_complete)
    }
}

pub fn client(id: &str, user_id: &str) -> Client {
    Client {
        id: ClientId::new(id),
        user_id: user_id.to_string(),
        email: format!("{user_id}@example.com"),
    }
}

pub fn deposit(id: &str, uid: &str, agent_uid: Option<&str>) -> Deposit {
    Deposit {
        id: DepositId::new(id),
        uid: uid.to_string(),
        owner: Some(DepositOwner::Profile(OwnerProfile {
            agent_uid: agent_uid.map(str::to_string),
            ..Default::default()
        })),
        amount: amount(100.0),
        symbol: CoinSymbol::new("usdt"),
        status: DepositStatus::Pending,
        proof: Some(format!("https://cdn.example.com/proof/{id}.png")),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
    }
}

pub fn amount(value: f64) -> DepositAmount {
    DepositAmount::new(value).unwrap()
}

use dioxus_logger::tracing::warn;

use crate::backend::DepositBackend;
use crate::error::ApiError;
use crate::filter::filter_pending;
use crate::models::Deposit;
use crate::models::DepositId;

/// Deposits awaiting operator approval, plus the active search query.
///
/// This is the single source of truth for the queue screen. Approving a
/// deposit removes it here and every derived view follows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingQueue {
    deposits: Vec<Deposit>,
    query: String,
    load_error: Option<String>,
}

impl PendingQueue {
    pub fn from_fetch(result: Result<Vec<Deposit>, ApiError>) -> Self {
        match result {
            Ok(deposits) => Self {
                deposits,
                ..Default::default()
            },
            Err(e) => {
                warn!("failed to fetch pending deposits: {e}");
                Self {
                    load_error: Some(e.to_string()),
                    ..Default::default()
                }
            }
        }
    }

    pub async fn fetch<B: DepositBackend>(backend: &B) -> Self {
        Self::from_fetch(backend.pending_deposits().await)
    }

    /// Matches against the owner's user id or their agent's id.
    /// Replaces the fetched data with `fresh` but keeps the active query, so a
    /// Retry does not silently clear the operator's search.
    pub fn reload(&mut self, fresh: Self) {
        let query = std::mem::take(&mut self.query);
        *self = Self { query, ..fresh };
    }

    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn all(&self) -> &[Deposit] {
        &self.deposits
    }

    pub fn visible(&self) -> Vec<&Deposit> {
        filter_pending(&self.deposits, &self.query)
    }

    pub fn get(&self, id: &DepositId) -> Option<&Deposit> {
        self.deposits.iter().find(|d| &d.id == id)
    }

    /// Drops a deposit that is no longer pending.
    pub fn remove(&mut self, id: &DepositId) -> Option<Deposit> {
        let index = self.deposits.iter().position(|d| &d.id == id)?;
        Some(self.deposits.remove(index))
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}

use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::backend::DepositBackend;
use crate::error::ApiError;
use crate::models::Deposit;
use crate::models::DepositId;

/// Proof that the operator confirmed a deletion.
///
/// Only [`DepositHistory::confirm_delete`] can produce one, and
/// [`delete_deposit`] requires one, so an unconfirmed delete never reaches
/// the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedDelete(DepositId);

/// The deposits of one user, as shown on the per-user recharge status page.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositHistory {
    user_id: String,
    deposits: Vec<Deposit>,
    loaded: bool,
    load_error: Option<String>,
    pending_delete: Option<DepositId>,
    deleting: Option<DepositId>,
}

impl DepositHistory {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            deposits: Vec::new(),
            loaded: false,
            load_error: None,
            pending_delete: None,
            deleting: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Stores the result of fetching `user_id`'s deposits.
    ///
    /// Returns `false` and leaves the history untouched if `user_id` is not
    /// the user currently shown.
    pub fn apply_fetch(&mut self, user_id: &str, result: Result<Vec<Deposit>, ApiError>) -> bool {
        if user_id != self.user_id {
            info!(
                "discarding deposits for {user_id}; now showing {}",
                self.user_id
            );
            return false;
        }

        self.loaded = true;
        match result {
            Ok(deposits) => {
                self.deposits = deposits;
                self.load_error = None;
            }
            Err(e) => {
                warn!("failed to fetch deposits for {user_id}: {e}");
                self.deposits.clear();
                self.load_error = Some(e.to_string());
            }
        }
        true
    }

    pub async fn refresh<B: DepositBackend>(&mut self, backend: &B) -> bool {
        let user_id = self.user_id.clone();
        let result = backend.user_deposits(&user_id).await;
        self.apply_fetch(&user_id, result)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn deposits(&self) -> &[Deposit] {
        &self.deposits
    }

    /// Marks a deposit for deletion pending operator confirmation.
    ///
    /// Refused while a confirmed delete is still waiting on the backend.
    pub fn request_delete(&mut self, id: &DepositId) -> bool {
        if self.deleting.is_none() && self.deposits.iter().any(|d| &d.id == id) {
            self.pending_delete = Some(id.clone());
            true
        } else {
            false
        }
    }

    /// The deposit awaiting confirmation, if any.
    pub fn pending_delete(&self) -> Option<&Deposit> {
        let id = self.pending_delete.as_ref()?;
        self.deposits.iter().find(|d| &d.id == id)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Hands out the delete request and marks it in flight until
    /// [`Self::finish_delete`].
    pub fn confirm_delete(&mut self) -> Option<ConfirmedDelete> {
        if self.deleting.is_some() {
            return None;
        }
        let id = self.pending_delete.take()?;
        self.deleting = Some(id.clone());
        Some(ConfirmedDelete(id))
    }

    /// The deposit whose delete call is in flight, if any.
    pub fn is_deleting(&self, id: &DepositId) -> bool {
        self.deleting.as_ref() == Some(id)
    }

    /// Removes the deposit locally, but only once the backend confirmed it.
    pub fn finish_delete(&mut self, result: &Result<DepositId, ApiError>) {
        self.deleting = None;
        if let Ok(id) = result {
            self.deposits.retain(|d| &d.id != id);
        }
    }
}

/// Issues the delete call for a confirmed request.
pub async fn delete_deposit<B: DepositBackend>(
    backend: &B,
    request: ConfirmedDelete,
) -> Result<DepositId, ApiError> {
    let ConfirmedDelete(id) = request;
    match backend.delete_deposit(&id).await {
        Ok(()) => Ok(id),
        Err(e) => {
            warn!("failed to delete deposit {id}: {e}");
            Err(e)
        }
    }
}

//! The approval dialog and the approve-then-complete sequence behind it.
//!
//! ```text
//!   Closed --open--> Open --begin_submit--> Submitting --finish(Ok)--> Closed
//!     ^               |  ^                      |
//!     +----cancel-----+  +------finish(Err)-----+
//! ```
//!
//! Approving is two backend calls. `approve` must succeed before anything
//! else happens; once it has, the deposit leaves the pending queue and
//! `complete` is attempted. A failed `complete` does not undo the approval:
//! the deposit stays out of the queue and the receipt records the failure so
//! the operator can be warned.

use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use thiserror::Error;

use crate::backend::DepositBackend;
use crate::error::ApiError;
use crate::models::CoinSymbol;
use crate::models::Deposit;
use crate::models::DepositAmount;
use crate::models::DepositId;
use crate::models::ParseDepositAmountError;

/// Misuse of the approval dialog, detected before any backend call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApprovalError {
    #[error("no deposit is selected")]
    NotOpen,
    #[error("an approval is already in progress")]
    AlreadySubmitting,
    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] ParseDepositAmountError),
    #[error("declining deposit {0} is not supported by the backend")]
    DeclineUnsupported(DepositId),
}

/// The operator's working copy of the selected deposit.
///
/// Edits stay here until they are committed, so the queue row keeps showing
/// the original amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalDraft {
    deposit: Deposit,
    amount_input: String,
}

impl ApprovalDraft {
    fn new(deposit: &Deposit) -> Self {
        Self {
            deposit: deposit.clone(),
            amount_input: deposit.amount.to_string(),
        }
    }

    pub fn deposit(&self) -> &Deposit {
        &self.deposit
    }

    pub fn deposit_id(&self) -> &DepositId {
        &self.deposit.id
    }

    /// Read-only: the coin is fixed to what the user deposited.
    pub fn symbol(&self) -> &CoinSymbol {
        &self.deposit.symbol
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn amount(&self) -> Result<DepositAmount, ParseDepositAmountError> {
        self.amount_input.parse()
    }
}

/// What `begin_submit` hands to [`approve_and_complete`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalRequest {
    pub deposit_id: DepositId,
    pub amount: DepositAmount,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Completed,
    /// Approved but not marked completed. Carries the error message.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalReceipt {
    pub deposit_id: DepositId,
    pub amount: DepositAmount,
    pub completion: Completion,
}

impl ApprovalReceipt {
    pub fn is_completed(&self) -> bool {
        self.completion == Completion::Completed
    }
}

/// State of the approval dialog. At most one deposit is selected at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ApprovalDialog {
    #[default]
    Closed,
    Open(ApprovalDraft),
    Submitting(ApprovalDraft),
}

impl ApprovalDialog {
    /// Selects a deposit, replacing any unsubmitted selection.
    pub fn open(&mut self, deposit: &Deposit) -> Result<(), ApprovalError> {
        if self.is_submitting() {
            return Err(ApprovalError::AlreadySubmitting);
        }
        *self = Self::Open(ApprovalDraft::new(deposit));
        Ok(())
    }

    pub fn edit_amount(&mut self, input: &str) -> Result<(), ApprovalError> {
        match self {
            Self::Open(draft) => {
                draft.amount_input = input.to_string();
                Ok(())
            }
            Self::Submitting(_) => Err(ApprovalError::AlreadySubmitting),
            Self::Closed => Err(ApprovalError::NotOpen),
        }
    }

    /// Discards edits. Not possible while the backend calls are in flight.
    pub fn cancel(&mut self) -> Result<(), ApprovalError> {
        match self {
            Self::Submitting(_) => Err(ApprovalError::AlreadySubmitting),
            _ => {
                *self = Self::Closed;
                Ok(())
            }
        }
    }

    /// Validates the draft and moves to `Submitting`.
    ///
    /// Only one request can be taken per dialog instance; a second call
    /// fails until [`Self::finish`] runs.
    pub fn begin_submit(&mut self) -> Result<ApprovalRequest, ApprovalError> {
        let draft = match self {
            Self::Open(draft) => draft,
            Self::Submitting(_) => return Err(ApprovalError::AlreadySubmitting),
            Self::Closed => return Err(ApprovalError::NotOpen),
        };

        let request = ApprovalRequest {
            deposit_id: draft.deposit_id().clone(),
            amount: draft.amount()?,
        };
        if let Self::Open(draft) = std::mem::take(self) {
            *self = Self::Submitting(draft);
        }
        Ok(request)
    }

    /// Closes on success; on failure returns to `Open` with the edits intact.
    pub fn finish(&mut self, outcome: &Result<ApprovalReceipt, ApiError>) {
        *self = match std::mem::take(self) {
            Self::Submitting(draft) if outcome.is_err() => Self::Open(draft),
            Self::Submitting(_) => Self::Closed,
            other => other,
        };
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    pub fn draft(&self) -> Option<&ApprovalDraft> {
        match self {
            Self::Open(draft) | Self::Submitting(draft) => Some(draft),
            Self::Closed => None,
        }
    }
}

/// Approves a deposit, then marks it completed.
///
/// `on_approved` runs right after the approve call succeeds and before
/// `complete` is attempted; callers use it to drop the deposit from the
/// pending queue. Only an approve failure is returned as `Err`.
pub async fn approve_and_complete<B: DepositBackend>(
    backend: &B,
    request: &ApprovalRequest,
    on_approved: impl FnOnce(&DepositId),
) -> Result<ApprovalReceipt, ApiError> {
    let id = &request.deposit_id;

    backend
        .approve_deposit(id, request.amount)
        .await
        .inspect_err(|e| warn!("failed to approve deposit {id}: {e}"))?;
    on_approved(id);

    let completion = match backend.complete_deposit(id).await {
        Ok(()) => {
            info!("deposit {id} approved and completed");
            Completion::Completed
        }
        Err(e) => {
            error!("deposit {id} was approved but could not be marked completed: {e}");
            Completion::Failed(e.to_string())
        }
    };

    Ok(ApprovalReceipt {
        deposit_id: id.clone(),
        amount: request.amount,
        completion,
    })
}

/// Declining has no backend endpoint, so the request is refused outright
/// rather than routed through the approval dialog.
pub fn decline(id: &DepositId) -> Result<(), ApprovalError> {
    warn!("decline requested for deposit {id}, which is not supported");
    Err(ApprovalError::DeclineUnsupported(id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::amount;
    use crate::backend::mock::deposit;
    use crate::backend::mock::Call;
    use crate::backend::mock::MockBackend;
    use crate::workflow::PendingQueue;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn queue() -> PendingQueue {
        PendingQueue::from_fetch(Ok(vec![
            deposit("d1", "u1", Some("a1")),
            deposit("d2", "u2", Some("a9")),
        ]))
    }

    fn ids(queue: &PendingQueue) -> Vec<&str> {
        queue.all().iter().map(|d| d.id.as_str()).collect()
    }

    /// Opens d1, edits the amount, and runs the full submit sequence.
    async fn submit(
        backend: &MockBackend,
        queue: &mut PendingQueue,
        dialog: &mut ApprovalDialog,
    ) -> Result<ApprovalReceipt, ApiError> {
        let target = queue.get(&DepositId::new("d1")).unwrap().clone();
        dialog.open(&target).unwrap();
        dialog.edit_amount("250").unwrap();

        let request = dialog.begin_submit().unwrap();
        assert!(dialog.is_submitting());

        let outcome = approve_and_complete(backend, &request, |id| {
            queue.remove(id);
        })
        .await;
        dialog.finish(&outcome);
        outcome
    }

    #[tokio::test]
    async fn approve_then_complete_removes_only_target() {
        let backend = MockBackend::default();
        let mut queue = queue();
        let mut dialog = ApprovalDialog::default();

        let receipt = submit(&backend, &mut queue, &mut dialog).await.unwrap();

        assert!(receipt.is_completed());
        assert_eq!(receipt.amount, amount(250.0));
        assert_eq!(ids(&queue), vec!["d2"]);
        assert_eq!(queue.all()[0].amount, amount(100.0));
        assert_eq!(dialog, ApprovalDialog::Closed);
        assert_eq!(
            backend.calls(),
            vec![
                Call::Approve(DepositId::new("d1"), amount(250.0)),
                Call::Complete(DepositId::new("d1")),
            ]
        );
    }

    #[tokio::test]
    async fn failed_completion_still_leaves_queue() {
        let backend = MockBackend {
            fail_complete: true,
            ..Default::default()
        };
        let mut queue = queue();
        let mut dialog = ApprovalDialog::default();

        let receipt = submit(&backend, &mut queue, &mut dialog).await.unwrap();

        assert!(matches!(receipt.completion, Completion::Failed(_)));
        assert_eq!(ids(&queue), vec!["d2"]);
        assert_eq!(dialog, ApprovalDialog::Closed);
    }

    #[tokio::test]
    async fn failed_approval_keeps_deposit_and_edits() {
        let backend = MockBackend {
            fail_approve: true,
            ..Default::default()
        };
        let mut queue = queue();
        let mut dialog = ApprovalDialog::default();

        let outcome = submit(&backend, &mut queue, &mut dialog).await;

        assert!(outcome.is_err());
        assert_eq!(ids(&queue), vec!["d1", "d2"]);
        assert_eq!(dialog.draft().map(ApprovalDraft::amount_input), Some("250"));
        assert!(dialog.is_open() && !dialog.is_submitting());
        // complete is never attempted after a failed approve
        assert_eq!(
            backend.calls(),
            vec![Call::Approve(DepositId::new("d1"), amount(250.0))]
        );
    }

    #[tokio::test]
    async fn completes_after_caller_state_is_dropped() {
        let backend = MockBackend::default();
        let mut dialog = ApprovalDialog::default();
        dialog.open(&deposit("d1", "u1", Some("a1"))).unwrap();
        let request = dialog.begin_submit().unwrap();

        // The screen that owned the queue is gone before approve returns.
        let screen = Rc::new(RefCell::new(queue()));
        let handle = Rc::downgrade(&screen);
        drop(screen);
        drop(dialog);

        let mut removed = None;
        let receipt = approve_and_complete(&backend, &request, |id| {
            removed = handle.upgrade().map(|q| q.borrow_mut().remove(id));
        })
        .await
        .unwrap();

        assert!(removed.is_none());
        assert!(receipt.is_completed());
        assert_eq!(
            backend.calls(),
            vec![
                Call::Approve(DepositId::new("d1"), amount(100.0)),
                Call::Complete(DepositId::new("d1")),
            ]
        );
    }

    #[test]
    fn second_submit_is_rejected() {
        let mut dialog = ApprovalDialog::default();
        dialog.open(&deposit("d1", "u1", None)).unwrap();

        assert!(dialog.begin_submit().is_ok());
        assert_eq!(dialog.begin_submit(), Err(ApprovalError::AlreadySubmitting));
        assert_eq!(dialog.cancel(), Err(ApprovalError::AlreadySubmitting));
        assert_eq!(
            dialog.edit_amount("1"),
            Err(ApprovalError::AlreadySubmitting)
        );
        assert_eq!(
            dialog.open(&deposit("d2", "u2", None)),
            Err(ApprovalError::AlreadySubmitting)
        );
    }

    #[test]
    fn invalid_amount_blocks_submit() {
        let mut dialog = ApprovalDialog::default();
        dialog.open(&deposit("d1", "u1", None)).unwrap();

        dialog.edit_amount("-5").unwrap();
        assert_eq!(
            dialog.begin_submit(),
            Err(ApprovalError::InvalidAmount(ParseDepositAmountError::Negative))
        );
        dialog.edit_amount("").unwrap();
        assert_eq!(
            dialog.begin_submit(),
            Err(ApprovalError::InvalidAmount(ParseDepositAmountError::Empty))
        );
        assert!(dialog.is_open() && !dialog.is_submitting());
    }

    #[test]
    fn cancel_discards_edits() {
        let mut dialog = ApprovalDialog::default();
        let d1 = deposit("d1", "u1", None);
        dialog.open(&d1).unwrap();
        dialog.edit_amount("999").unwrap();
        dialog.cancel().unwrap();
        assert_eq!(dialog, ApprovalDialog::Closed);

        dialog.open(&d1).unwrap();
        let draft = dialog.draft().unwrap();
        assert_eq!(draft.amount_input(), "100");
        assert_eq!(draft.symbol().code(), "USDT");
    }

    #[test]
    fn closed_dialog_rejects_actions() {
        let mut dialog = ApprovalDialog::default();
        assert_eq!(dialog.begin_submit(), Err(ApprovalError::NotOpen));
        assert_eq!(dialog.edit_amount("1"), Err(ApprovalError::NotOpen));
        assert!(dialog.cancel().is_ok());
        dialog.finish(&Err(ApiError::Validation("stray".into())));
        assert_eq!(dialog, ApprovalDialog::Closed);
    }

    #[test]
    fn decline_does_not_open_dialog() {
        let dialog = ApprovalDialog::default();
        let id = DepositId::new("d1");
        assert_eq!(decline(&id), Err(ApprovalError::DeclineUnsupported(id)));
        assert!(!dialog.is_open());
    }
}

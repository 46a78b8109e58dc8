//! Screen state for the admin views, independent of any renderer.

pub mod approval;
pub mod client_directory;
pub mod deposit_history;
pub mod pending_queue;

pub use approval::approve_and_complete;
pub use approval::decline;
pub use approval::ApprovalDialog;
pub use approval::ApprovalDraft;
pub use approval::ApprovalError;
pub use approval::ApprovalReceipt;
pub use approval::ApprovalRequest;
pub use approval::Completion;
pub use client_directory::ClientDirectory;
pub use deposit_history::delete_deposit;
pub use deposit_history::ConfirmedDelete;
pub use deposit_history::DepositHistory;
pub use pending_queue::PendingQueue;

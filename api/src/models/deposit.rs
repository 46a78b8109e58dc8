//! Wire types for deposit (recharge) records.

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::amount::DepositAmount;

/// The backend's internal id for a deposit record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepositId(String);

impl DepositId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DepositId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The coin a deposit was made in, as chosen by the user (e.g. "usdt").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoinSymbol(String);

impl CoinSymbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The symbol exactly as stored by the backend.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The symbol as displayed in tables and dialog titles (e.g. "USDT").
    pub fn code(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for CoinSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of a deposit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DepositStatus {
    #[default]
    Pending,
    Approved,
    Completed,
    Declined,
    /// Any status string this client does not know about.
    #[serde(other)]
    Unknown,
}

/// The populated owner record attached to deposits in the pending list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OwnerProfile {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    /// Identifier of the agent who referred or manages this user.
    #[serde(rename = "agentUID", default)]
    pub agent_uid: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// The `userId` field of a deposit.
///
/// The pending endpoint populates it with the owner's profile; the
/// per-user endpoint may leave it as a bare reference id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepositOwner {
    Profile(OwnerProfile),
    Reference(String),
}

impl DepositOwner {
    pub fn agent_uid(&self) -> Option<&str> {
        match self {
            Self::Profile(profile) => profile.agent_uid.as_deref(),
            Self::Reference(_) => None,
        }
    }
}

/// A user-submitted recharge record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    #[serde(rename = "_id")]
    pub id: DepositId,
    /// The owner's public user identifier.
    #[serde(default)]
    pub uid: String,
    #[serde(rename = "userId", default)]
    pub owner: Option<DepositOwner>,
    pub amount: DepositAmount,
    #[serde(rename = "selectedSymbol")]
    pub symbol: CoinSymbol,
    #[serde(default)]
    pub status: DepositStatus,
    /// URI of the evidence image or document uploaded by the user.
    #[serde(default)]
    pub proof: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Deposit {
    pub fn agent_uid(&self) -> Option<&str> {
        self.owner.as_ref().and_then(DepositOwner::agent_uid)
    }
}

/// Response body of `GET /api/transactions/{userId}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TransactionsResponse {
    #[serde(default)]
    pub deposits: Vec<Deposit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PENDING_JSON: &str = r#"{
        "_id": "d1",
        "uid": "u1",
        "userId": { "_id": "c1", "userId": "u1", "agentUID": "a1" },
        "amount": 50,
        "selectedSymbol": "usdt",
        "status": "pending",
        "proof": "https://cdn.example.com/proof/d1.png",
        "createdAt": "2024-05-01T10:00:00.000Z"
    }"#;

    #[test]
    fn decodes_populated_owner() {
        let deposit: Deposit = serde_json::from_str(PENDING_JSON).unwrap();
        assert_eq!(deposit.id.as_str(), "d1");
        assert_eq!(deposit.agent_uid(), Some("a1"));
        assert_eq!(deposit.symbol.code(), "USDT");
        assert!(deposit.status.is_pending());
        assert_eq!(deposit.amount.value(), 50.0);
    }

    #[test]
    fn decodes_bare_owner_reference() {
        let json = r#"{
            "_id": "d2",
            "uid": "u2",
            "userId": "c2",
            "amount": "12.5",
            "selectedSymbol": "btc",
            "status": "completed",
            "createdAt": "2024-05-02T08:30:00Z"
        }"#;
        let deposit: Deposit = serde_json::from_str(json).unwrap();
        assert_eq!(deposit.owner, Some(DepositOwner::Reference("c2".into())));
        assert_eq!(deposit.agent_uid(), None);
        assert_eq!(deposit.status, DepositStatus::Completed);
        assert_eq!(deposit.proof, None);
    }

    #[test]
    fn unknown_status_does_not_fail_decoding() {
        let json = PENDING_JSON.replace("\"pending\"", "\"on-hold\"");
        let deposit: Deposit = serde_json::from_str(&json).unwrap();
        assert_eq!(deposit.status, DepositStatus::Unknown);
        assert_eq!(deposit.status.to_string(), "unknown");
    }

    #[test]
    fn missing_created_at_is_rejected() {
        let json = PENDING_JSON.replace("\"createdAt\"", "\"updatedAt\"");
        assert!(serde_json::from_str::<Deposit>(&json).is_err());
    }

    #[test]
    fn transactions_response_defaults_to_empty() {
        let response: TransactionsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.deposits.is_empty());
    }
}

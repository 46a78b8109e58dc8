use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// The backend's opaque internal id for a client record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered user of the recharge system, as returned by `GET /api/clients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: ClientId,
    /// The public user identifier shown to operators.
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub email: String,
}

//! Pure selectors that derive the visible rows of a list from a search query.
//!
//! Filtered views are never stored. Each screen keeps the full fetched set
//! and re-derives what to show from it, so removing an item from the full
//! set removes it from every view at once.

use crate::models::Client;
use crate::models::Deposit;

/// Case-insensitive substring match. Whitespace in the query is matched
/// literally; only an empty query matches everything.
pub fn matches_query(field: &str, query: &str) -> bool {
    query.is_empty() || field.to_lowercase().contains(&query.to_lowercase())
}

/// Clients whose user identifier contains `query`.
pub fn filter_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    clients
        .iter()
        .filter(|client| matches_query(&client.user_id, query))
        .collect()
}

/// Deposits whose owner identifier or agent identifier contains `query`.
pub fn filter_pending<'a>(deposits: &'a [Deposit], query: &str) -> Vec<&'a Deposit> {
    deposits
        .iter()
        .filter(|deposit| {
            matches_query(&deposit.uid, query)
                || deposit
                    .agent_uid()
                    .is_some_and(|agent| matches_query(agent, query))
        })
        .collect()
}

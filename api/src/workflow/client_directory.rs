use dioxus_logger::tracing::warn;

use crate::backend::DepositBackend;
use crate::error::ApiError;
use crate::filter::filter_clients;
use crate::models::Client;

/// The full client list plus the active search query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientDirectory {
    clients: Vec<Client>,
    query: String,
    load_error: Option<String>,
}

impl ClientDirectory {
    /// A failed fetch leaves the directory empty and keeps the message for display.
    pub fn from_fetch(result: Result<Vec<Client>, ApiError>) -> Self {
        match result {
            Ok(clients) => Self {
                clients,
                ..Default::default()
            },
            Err(e) => {
                warn!("failed to fetch clients: {e}");
                Self {
                    load_error: Some(e.to_string()),
                    ..Default::default()
                }
            }
        }
    }

    pub async fn fetch<B: DepositBackend>(backend: &B) -> Self {
        Self::from_fetch(backend.list_clients().await)
    }

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

    pub fn all(&self) -> &[Client] {
        &self.clients
    }

    pub fn visible(&self) -> Vec<&Client> {
        filter_clients(&self.clients, &self.query)
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::client;
    use crate::backend::mock::Call;
    use crate::backend::mock::MockBackend;

    #[tokio::test]
    async fn fetches_once_and_searches_locally() {
        let backend = MockBackend {
            clients: vec![client("c1", "alice"), client("c2", "bob")],
            ..Default::default()
        };

        let mut directory = ClientDirectory::fetch(&backend).await;
        assert_eq!(directory.visible().len(), 2);

        directory.search("Al");
        let visible: Vec<_> = directory.visible().iter().map(|c| c.user_id.clone()).collect();
        assert_eq!(visible, vec!["alice"]);
        assert_eq!(directory.all().len(), 2);

        directory.search("");
        assert_eq!(directory.visible().len(), 2);
        assert_eq!(backend.calls(), vec![Call::ListClients]);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_directory_empty() {
        let backend = MockBackend {
            clients: vec![client("c1", "alice")],
            fail_fetch: true,
            ..Default::default()
        };

        let directory = ClientDirectory::fetch(&backend).await;
        assert!(directory.visible().is_empty());
        assert!(directory.load_error().is_some_and(|e| e.contains("500")));
    }

    #[tokio::test]
    async fn reload_keeps_active_query() {
        let backend = MockBackend {
            clients: vec![client("c1", "alice"), client("c2", "bob")],
            ..Default::default()
        };

        let mut directory = ClientDirectory::from_fetch(Err(ApiError::Validation("offline".into())));
        directory.search("bo");
        directory.reload(ClientDirectory::fetch(&backend).await);

        assert_eq!(directory.query(), "bo");
        assert!(directory.load_error().is_none());
        let visible: Vec<_> = directory.visible().iter().map(|c| c.user_id.as_str()).collect();
        assert_eq!(visible, vec!["bob"]);
    }
}

use dioxus_logger::tracing::info;
use reqwest::Response;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::DepositBackend;
use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::models::deposit::TransactionsResponse;
use crate::models::Client;
use crate::models::Deposit;
use crate::models::DepositAmount;
use crate::models::DepositId;

#[derive(Serialize)]
struct ApproveBody {
    amount: DepositAmount,
}

/// A `DepositBackend` that talks to the real REST API over reqwest.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason,
        };

        let base_url = Url::parse(&config.base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("url cannot carry a path".to_string()));
        }

        Ok(Self {
            client: build_client(config)?,
            base_url,
        })
    }

    /// Builds `{base}/api/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base() was rejected in new(), so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self.client.get(url).send().await?;
        Ok(ensure_success(response).await?.json::<T>().await?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &BackendConfig) -> Result<reqwest::Client, ApiError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(ApiError::Network)
}

#[cfg(target_arch = "wasm32")]
fn build_client(_config: &BackendConfig) -> Result<reqwest::Client, ApiError> {
    Ok(reqwest::Client::new())
}

/// Turns a non-2xx response into `ApiError::Server`, keeping the body text.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("no reason given").to_string()
    } else {
        body
    };
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

impl DepositBackend for HttpBackend {
    async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.get_json(self.endpoint(&["clients"])).await
    }

    async fn user_deposits(&self, user_id: &str) -> Result<Vec<Deposit>, ApiError> {
        let response: TransactionsResponse = self
            .get_json(self.endpoint(&["transactions", user_id]))
            .await?;
        Ok(response.deposits)
    }

    async fn delete_deposit(&self, id: &DepositId) -> Result<(), ApiError> {
        let url = self.endpoint(&["deposits", id.as_str()]);
        let response = self.client.delete(url).send().await?;
        ensure_success(response).await?;
        info!("deleted deposit {id}");
        Ok(())
    }

    async fn pending_deposits(&self) -> Result<Vec<Deposit>, ApiError> {
        self.get_json(self.endpoint(&["deposits"])).await
    }

    async fn approve_deposit(
        &self,
        id: &DepositId,
        amount: DepositAmount,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&["deposits", id.as_str(), "approve"]);
        let response = self
            .client
            .post(url)
            .json(&ApproveBody { amount })
            .send()
            .await?;
        ensure_success(response).await?;
        info!("approved deposit {id} for {amount}");
        Ok(())
    }

    async fn complete_deposit(&self, id: &DepositId) -> Result<(), ApiError> {
        let url = self.endpoint(&["deposits", id.as_str(), "complete"]);
        let response = self.client.post(url).send().await?;
        ensure_success(response).await?;
        info!("marked deposit {id} completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(&BackendConfig::new(base)).unwrap()
    }

    #[test]
    fn endpoint_appends_api_segments() {
        let b = backend("https://trcnfx.com");
        assert_eq!(
            b.endpoint(&["deposits", "d1", "approve"]).as_str(),
            "https://trcnfx.com/api/deposits/d1/approve"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_and_encodes_segments() {
        let b = backend("http://localhost:8080/backend/");
        assert_eq!(
            b.endpoint(&["transactions", "a b/c"]).as_str(),
            "http://localhost:8080/backend/api/transactions/a%20b%2Fc"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        for url in ["not a url", "mailto:ops@example.com"] {
            let err = HttpBackend::new(&BackendConfig::new(url)).unwrap_err();
            assert!(matches!(err, ApiError::InvalidBaseUrl { .. }), "{url}: {err}");
        }
    }
}

//! HTTP client for the Stocker server

use async_trait::async_trait;
use log::debug;

use super::types::{PortfolioSummary, PriceSnapshot};
use crate::errors::{Error, Result};

/// Remote operations the sync loop and admin helpers depend on
///
/// The controller only sees this trait, so tests can drive it with a fake
/// source instead of a live server.
#[async_trait]
pub trait StockerApi: Send + Sync {
    /// Fetch the current price mapping for all symbols
    async fn fetch_snapshot(&self) -> Result<PriceSnapshot>;

    /// Fetch the aggregate portfolio value for one account
    async fn fetch_portfolio_value(&self, holder_id: u64) -> Result<f64>;

    /// Delete a user account; resolves Ok only on a 2xx response
    async fn delete_user(&self, user_id: u64) -> Result<()>;

    /// Suspend a user account; resolves Ok only on a 2xx response
    async fn suspend_user(&self, user_id: u64) -> Result<()>;
}

/// reqwest-backed client against a configured base URL
pub struct StockerClient {
    http: reqwest::Client,
    base_url: String,
}

impl StockerClient {
    /// Create a client for the given server, e.g. `http://127.0.0.1:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check_status(endpoint: &str, response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            })
        }
    }

    fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T> {
        Ok(serde_json::from_str(body)?)
    }
}

#[async_trait]
impl StockerApi for StockerClient {
    async fn fetch_snapshot(&self) -> Result<PriceSnapshot> {
        let url = self.url("/api/stocks");
        let response = self.http.get(&url).send().await?;
        Self::check_status("/api/stocks", &response)?;
        let snapshot: PriceSnapshot = Self::parse_body(&response.text().await?)?;
        debug!("fetched snapshot with {} symbols", snapshot.len());
        Ok(snapshot)
    }

    async fn fetch_portfolio_value(&self, holder_id: u64) -> Result<f64> {
        let endpoint = format!("/api/portfolio/{holder_id}");
        let response = self.http.get(self.url(&endpoint)).send().await?;
        Self::check_status(&endpoint, &response)?;
        let summary: PortfolioSummary = Self::parse_body(&response.text().await?)?;
        Ok(summary.portfolio_value)
    }

    async fn delete_user(&self, user_id: u64) -> Result<()> {
        let endpoint = format!("/admin/users/{user_id}");
        let response = self.http.delete(self.url(&endpoint)).send().await?;
        Self::check_status(&endpoint, &response)
    }

    async fn suspend_user(&self, user_id: u64) -> Result<()> {
        let endpoint = format!("/admin/users/{user_id}/suspend");
        let response = self.http.post(self.url(&endpoint)).send().await?;
        Self::check_status(&endpoint, &response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_paths() {
        let client = StockerClient::new("http://localhost:5000");
        assert_eq!(client.url("/api/stocks"), "http://localhost:5000/api/stocks");
    }

    #[test]
    fn test_url_strips_trailing_slash() {
        let client = StockerClient::new("http://localhost:5000/");
        assert_eq!(
            client.url("/api/portfolio/7"),
            "http://localhost:5000/api/portfolio/7"
        );
    }

    #[test]
    fn test_malformed_body_is_a_json_parse_error() {
        let result: Result<PriceSnapshot> = StockerClient::parse_body("<html>not json</html>");
        assert!(matches!(result, Err(Error::JsonParse(_))));
    }
}

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, warn};
use crate::utils::constants::{URL, API_URL_ENV};
use crate::utils::params::Params;
use crate::Error;

/// Handle on the backend script. Cheap to clone, the inner [Client] is shared
#[derive(Debug, Clone)]
pub struct Api {
    client: Client,
    url: String,
}

impl Default for Api {
    fn default() -> Self {
        Self::new()
    }
}

impl Api {
    /// Uses [URL::API] and a fresh [Client]
    pub fn new() -> Self {
        Self::with_url(URL::API)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    /// Reads the endpoint from `SEKOLAH_API_URL`, falls back to [URL::API] if unset
    pub fn from_env() -> Result<Self, Error> {
        match std::env::var(API_URL_ENV) {
            Ok(url) if url.trim().is_empty() => Err(Error::Config(format!("'{}' is set but empty", API_URL_ENV))),
            Ok(url) => Ok(Self::with_url(url.trim())),
            Err(_) => Ok(Self::new()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /**
     *  Posts `action` and `params` form-urlencoded to the backend and returns the parsed JSON <br>
     *  No headers are added besides the form content type, so browsers treat it as a simple request
     */
    pub async fn call_api(&self, action: &str, params: Option<Params>) -> Result<Value, Error> {
        let mut params = params.unwrap_or_default();
        if let Some(overridden) = params.remove("action") {
            warn!(action, overridden = %overridden, "ignoring 'action' field in parameters");
        }
        let data = Params::new().with("action", action).merge(params);

        debug!(action, url = %self.url, fields = data.len(), "calling api");
        match self.send(&data).await {
            Ok(result) => Ok(result),
            Err(e) => {
                error!(action, error = %e, "api error");
                Err(Error::Request(e))
            }
        }
    }

    async fn send(&self, data: &Params) -> Result<Value, reqwest::Error> {
        let response = self.client.post(&self.url).form(data).send().await?;
        response.json::<Value>().await
    }
}

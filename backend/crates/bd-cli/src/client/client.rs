use crate::{CliClientResult, ClientError, SprintInput};

use reqwest::{Client as ReqwestClient, Method, Url};
use serde_json::Value;

/// HTTP client for the bd-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:5000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and turn failure statuses into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let data = serde_json::from_str::<Value>(&text).ok();
            return Err(ClientError::from_response(
                status.as_u16(),
                status.canonical_reason(),
                data,
            ));
        }

        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // Health
    // =========================================================================

    pub async fn health(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/health");
        self.execute(req).await
    }

    // =========================================================================
    // Sprint Operations
    // =========================================================================

    /// Submit a new sprint
    pub async fn create_sprint(&self, input: &SprintInput) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, "/api/sprint")
            .json(&input.to_body()?);
        self.execute(req).await
    }

    /// List all sprints
    pub async fn list_sprints(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/sprints");
        self.execute(req).await
    }

    /// Get a sprint by ID
    pub async fn get_sprint(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/sprint/{}", id));
        self.execute(req).await
    }

    /// Update a sprint
    pub async fn update_sprint(&self, id: &str, input: &SprintInput) -> CliClientResult<Value> {
        let req = self
            .request(Method::PUT, &format!("/api/sprint/{}", id))
            .json(&input.to_body()?);
        self.execute(req).await
    }

    /// Delete a sprint
    pub async fn delete_sprint(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/sprint/{}", id));
        self.execute(req).await
    }

    /// Burndown chart data for a stored sprint
    pub async fn sprint_burndown(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/sprint/{}/burndown", id));
        self.execute(req).await
    }

    // =========================================================================
    // Synthetic Data
    // =========================================================================

    /// Generate sample burndown data. Unset values use the server's defaults.
    pub async fn sample_burndown(
        &self,
        total_points: Option<f64>,
        duration_days: Option<u32>,
        scenario: Option<&str>,
        seed: Option<u64>,
    ) -> CliClientResult<Value> {
        let mut url = Url::parse(&format!("{}/api/burndown/sample", self.base_url))
            .map_err(|e| ClientError::validation(format!("Invalid server URL: {}", e), None))?;

        {
            let mut pairs = url.query_pairs_mut();
            if let Some(total_points) = total_points {
                pairs.append_pair("totalPoints", &total_points.to_string());
            }
            if let Some(duration_days) = duration_days {
                pairs.append_pair("durationDays", &duration_days.to_string());
            }
            if let Some(scenario) = scenario {
                pairs.append_pair("scenario", scenario);
            }
            if let Some(seed) = seed {
                pairs.append_pair("seed", &seed.to_string());
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        let req = self.client.request(Method::GET, url);
        self.execute(req).await
    }
}

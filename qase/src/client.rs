use crate::config::QaseConfig;
use crate::submitter::{QaseError, QaseResult, ResultSubmitter};
use crate::types::{ApiResponse, IdResult, ResultCreateBulk, RunCreate};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

const TOKEN_HEADER: &str = "Token";

pub struct QaseClient {
    http_client: reqwest::Client,
    base_url: String,
    config: QaseConfig,
}

impl QaseClient {
    pub fn new(config: QaseConfig) -> QaseResult<Self> {
        config
            .validate()
            .map_err(|message| QaseError::InvalidConfig { message })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            config,
        })
    }

    pub fn project(&self) -> &str {
        &self.config.project
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        body: Option<&B>,
    ) -> QaseResult<ApiResponse<T>> {
        let url = self.url(path);
        debug!("POST {} ({})", url, operation);

        let mut request = self
            .http_client
            .post(&url)
            .header(TOKEN_HEADER, &self.config.api_token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let http_response = request.send().await?;

        let status = http_response.status();
        if !status.is_success() {
            let body = http_response.text().await.unwrap_or_default();
            return Err(QaseError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let text = http_response.text().await?;
        let response: ApiResponse<T> = serde_json::from_str(&text)?;
        if !response.status {
            return Err(QaseError::Rejected { operation });
        }

        Ok(response)
    }
}

#[async_trait]
impl ResultSubmitter for QaseClient {
    async fn create_run(&self, run: RunCreate) -> QaseResult<i64> {
        let path = format!("run/{}", self.config.project);
        let response: ApiResponse<IdResult> = self.post("run creation", &path, Some(&run)).await?;

        response
            .result
            .map(|result| result.id)
            .ok_or(QaseError::Rejected {
                operation: "run creation",
            })
    }

    async fn create_results_bulk(&self, run_id: i64, bulk: ResultCreateBulk) -> QaseResult<()> {
        let path = format!("result/{}/{}/bulk", self.config.project, run_id);
        let _: ApiResponse<serde_json::Value> =
            self.post("bulk results", &path, Some(&bulk)).await?;
        Ok(())
    }

    async fn complete_run(&self, run_id: i64) -> QaseResult<()> {
        let path = format!("run/{}/{}/complete", self.config.project, run_id);
        let _: ApiResponse<serde_json::Value> =
            self.post::<(), _>("run completion", &path, None).await?;
        Ok(())
    }
}

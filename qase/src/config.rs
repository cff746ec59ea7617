use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.qase.io/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaseConfig {
    pub base_url: String,
    pub api_token: String,
    pub project: String,
    pub timeout: Duration,
}

impl Default for QaseConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: String::new(),
            project: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl QaseConfig {
    pub fn new(project: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self::default()
            .with_project(project)
            .with_api_token(api_token)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = api_token.into();
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Base URL cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("Base URL must start with http:// or https://".to_string());
        }

        if self.api_token.is_empty() {
            return Err("API token cannot be empty".to_string());
        }

        if self.project.is_empty() {
            return Err("Project code cannot be empty".to_string());
        }

        if self.timeout.is_zero() {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

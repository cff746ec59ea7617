//! Command line, environment and config-file layering.
//!
//! Precedence, highest first: flags, `QASE_TESTOPS_*` environment variables,
//! the TOML file passed with `--config`, built-in defaults.

use crate::error::{ReporterError, ReporterResult};
use clap::Parser;
use qase::QaseConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "robot-qase-reporter")]
#[command(about = "Report Robot Framework test results to Qase")]
#[command(
    long_about = "Reads a Robot Framework output.xml file and reports the results to Qase \
as a new test run. Tests are matched to Qase cases through a `Q-<id>` tag."
)]
pub struct Cli {
    /// Robot Framework output.xml file
    pub filename: PathBuf,

    /// Qase project code
    #[arg(short, long, env = "QASE_TESTOPS_PROJECT")]
    pub project: Option<String>,

    /// Qase API token
    #[arg(short = 't', long, env = "QASE_TESTOPS_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Title of the created test run
    #[arg(short, long, env = "QASE_TESTOPS_RUN_TITLE")]
    pub run_title: Option<String>,

    /// Qase API base URL
    #[arg(long, env = "QASE_TESTOPS_BASE_URL")]
    pub base_url: Option<String>,

    /// TOML file with project, api_token, run_title, base_url, timeout_secs
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the parsed results as JSON instead of reporting them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub project: Option<String>,
    pub api_token: Option<String>,
    pub run_title: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> ReporterResult<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| ReporterError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;

        toml::from_str(&contents).map_err(|source| ReporterError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub filename: PathBuf,
    pub run_title: String,
    pub qase: QaseConfig,
    pub dry_run: bool,
}

impl Settings {
    pub fn resolve(cli: Cli) -> ReporterResult<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let mut qase = QaseConfig::default();
        if let Some(base_url) = cli.base_url.or(file.base_url) {
            qase = qase.with_base_url(base_url);
        }
        if let Some(project) = cli.project.or(file.project) {
            qase = qase.with_project(project);
        }
        if let Some(api_token) = cli.api_token.or(file.api_token) {
            qase = qase.with_api_token(api_token);
        }
        if let Some(timeout_secs) = file.timeout_secs {
            qase = qase.with_timeout(Duration::from_secs(timeout_secs));
        }

        let settings = Self {
            filename: cli.filename,
            run_title: cli.run_title.or(file.run_title).unwrap_or_default(),
            qase,
            dry_run: cli.dry_run,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Dry runs never talk to Qase, so they need no credentials.
    pub fn validate(&self) -> ReporterResult<()> {
        if self.dry_run {
            return Ok(());
        }

        if self.run_title.trim().is_empty() {
            return Err(ReporterError::InvalidConfig {
                message: "Run title cannot be empty".to_string(),
            });
        }

        self.qase
            .validate()
            .map_err(|message| ReporterError::InvalidConfig { message })
    }
}

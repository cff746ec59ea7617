pub mod client;
pub mod config;
pub mod submitter;
pub mod types;

pub use client::QaseClient;
pub use config::{QaseConfig, DEFAULT_BASE_URL};
pub use submitter::{submit_run, QaseError, QaseResult, ResultSubmitter};
pub use types::{
    ApiResponse, IdResult, ResultCreate, ResultCreateBulk, ResultStatus, RunCreate, RunSummary,
};

pub mod prelude {
    pub use crate::client::*;
    pub use crate::config::*;
    pub use crate::submitter::*;
    pub use crate::types::*;
}

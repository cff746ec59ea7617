pub mod error;
pub mod run;
pub mod settings;

pub use error::{ReporterError, ReporterResult};
pub use run::{report_results, run, write_results, RunOutcome};
pub use settings::{Cli, FileConfig, Settings};

//! Static-analysis invocation

use serde_json::Value;
use tokio::process::Command;

use crate::error::{ReportError, ReportResult};

/// Runs `radon mi -j` over the given source directory and parses the JSON it
/// prints to stdout.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the process cannot be spawned,
/// [`ReportError::AnalyzerFailed`] on a non-zero exit status, and
/// [`ReportError::Json`] if stdout is not valid JSON.
pub async fn run_analyzer(source_dir: &str) -> ReportResult<Value> {
    let output = Command::new("radon")
        .args(["mi", "-j", source_dir])
        .output()
        .await?;

    if !output.status.success() {
        return Err(ReportError::AnalyzerFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(serde_json::from_slice(&output.stdout)?)
}

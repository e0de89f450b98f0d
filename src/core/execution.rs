//! Client for the remote code-execution service.
//!
//! A run is two steps: [`ExecutionClient::prepare`] validates locally and never
//! touches the network, [`ExecutionClient::submit`] performs the single POST.
//! [`ExecutionClient::run`] chains them.
//!
//! # Wire format
//! Request: `{"language", "version", "files": [{"name", "content"}]}`.
//! Response: `{"run": {"stdout", "stderr", "output", "code"}}`, optionally with a
//! `compile` stage of the same shape for compiled languages.

use crate::core::error::RunError;
use crate::core::file_kind::FileKind;
use crate::core::filter::extract_filename;
use crate::core::http::{error_message, HttpClient};
use crate::core::state::ExecutionResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

/// Validated request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionRequest {
    pub language: String,
    pub version: String,
    pub files: Vec<SourceFile>,
}

#[derive(Debug, Default, Deserialize)]
struct Stage {
    stdout: Option<String>,
    stderr: Option<String>,
    output: Option<String>,
    code: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct ExecutionResponse {
    run: Option<Stage>,
    compile: Option<Stage>,
}

impl ExecutionResponse {
    fn into_result(self) -> Result<ExecutionResult, RunError> {
        let compile_failure = self
            .compile
            .filter(|stage| stage.stderr.as_deref().is_some_and(|s| !s.trim().is_empty()));

        // A failed compile stage is what the user needs to see
        let stage = match (compile_failure, self.run) {
            (Some(compile), _) => compile,
            (None, Some(run)) => run,
            (None, None) => {
                return Err(RunError::MalformedResponse(
                    "response has no run stage".to_string(),
                ))
            }
        };

        Ok(ExecutionResult {
            stdout: stage.stdout,
            stderr: stage.stderr,
            output: stage.output,
            code: stage.code,
        })
    }
}

pub struct ExecutionClient {
    http: Arc<dyn HttpClient>,
    execute_url: String,
}

impl ExecutionClient {
    pub fn new(http: Arc<dyn HttpClient>, execute_url: impl Into<String>) -> Self {
        Self {
            http,
            execute_url: execute_url.into(),
        }
    }

    /// Validate `content` and map the file's language, without any network access
    pub fn prepare(path: &str, content: &str) -> Result<ExecutionRequest, RunError> {
        if content.trim().is_empty() {
            return Err(RunError::EmptyInput);
        }
        let filename = extract_filename(path);
        let kind =
            FileKind::from_path(filename).ok_or_else(|| RunError::unsupported_language(filename))?;

        Ok(ExecutionRequest {
            language: kind.language().to_string(),
            version: kind.runtime_version().to_string(),
            files: vec![SourceFile {
                name: filename.to_string(),
                content: content.to_string(),
            }],
        })
    }

    pub async fn submit(&self, request: &ExecutionRequest) -> Result<ExecutionResult, RunError> {
        log::debug!(
            "Submitting {} ({} {})",
            request.files.first().map_or("<none>", |f| f.name.as_str()),
            request.language,
            request.version
        );
        let body = serde_json::to_value(request)
            .map_err(|e| RunError::MalformedResponse(format!("could not encode request: {e}")))?;
        let response = self.http.post_json(&self.execute_url, &body).await?;

        if !response.is_success() {
            let message = error_message(&response.body).unwrap_or_else(|| response.body.clone());
            return Err(RunError::http(response.status, message));
        }

        let parsed: ExecutionResponse = serde_json::from_str(&response.body)
            .map_err(|e| RunError::MalformedResponse(e.to_string()))?;
        parsed.into_result()
    }

    pub async fn run(&self, path: &str, content: &str) -> Result<ExecutionResult, RunError> {
        let request = Self::prepare(path, content)?;
        self.submit(&request).await
    }
}

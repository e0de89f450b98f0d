//! Orchestration of selection loads and runs.
//!
//! [`SessionController`] is the only owner of the selection state and the only
//! caller of the presenter. Every selection request gets a fresh generation; a
//! load result is committed only if its generation is still the current one, so
//! a slow load can never overwrite a newer selection.
//!
//! Both operations come in two shapes:
//! - `select` / `run` await the whole operation, for one-shot commands;
//! - `begin_select` + `load_task` + `complete_select` and `start_run` +
//!   [`RunJob::execute`] + `finish_run` let an event loop keep several loads in
//!   flight while the controller stays borrowed only between suspension points.

use crate::core::error::{CodeboxError, LoadError, Result, RunError, RunRejected};
use crate::core::execution::{ExecutionClient, ExecutionRequest};
use crate::core::file_kind::editor_mode_for;
use crate::core::filter::extract_filename;
use crate::core::loader::FileLoader;
use crate::core::presentation::{Presenter, Severity};
use crate::core::state::{ExecutionResult, LoadTicket, LoadedFile, SelectionState, SessionPhase};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const NO_INFO_PLACEHOLDER: &str = "No details available for this file.";
pub const RUNNING_TEXT: &str = "Running...";
pub const NO_OUTPUT_TEXT: &str = "No output";
pub const LOADING_TEXT: &str = "Loading...";

/// What happened to a completed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Committed,
    Failed,
    /// A newer selection was made; nothing was applied
    Superseded,
}

/// Shared "a run is executing" flag
#[derive(Debug, Clone, Default)]
pub struct ExecutionGate {
    busy: Arc<AtomicBool>,
}

impl ExecutionGate {
    pub fn try_enter(&self) -> Option<ExecutionGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ExecutionGuard {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_executing(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Clears the executing flag when dropped, whatever the run's outcome
#[derive(Debug)]
pub struct ExecutionGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for ExecutionGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// A validated run holding the executing flag
pub struct RunJob {
    client: Arc<ExecutionClient>,
    request: ExecutionRequest,
    path: String,
    _guard: ExecutionGuard,
}

/// Result of a [`RunJob`], to be handed back to [`SessionController::finish_run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub path: String,
    pub result: std::result::Result<ExecutionResult, RunError>,
}

impl RunJob {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Submit the request. The executing flag is released when this future
    /// completes or is dropped.
    pub async fn execute(self) -> RunReport {
        let result = self.client.submit(&self.request).await;
        RunReport {
            path: self.path,
            result,
        }
    }
}

pub struct SessionController<P: Presenter> {
    presenter: P,
    loader: Arc<FileLoader>,
    executor: Arc<ExecutionClient>,
    selection: SelectionState,
    phase: SessionPhase,
    gate: ExecutionGate,
    info_visible: bool,
}

impl<P: Presenter> SessionController<P> {
    pub fn new(presenter: P, loader: FileLoader, executor: ExecutionClient) -> Self {
        Self {
            presenter,
            loader: Arc::new(loader),
            executor: Arc::new(executor),
            selection: SelectionState::default(),
            phase: SessionPhase::Idle,
            gate: ExecutionGate::default(),
            info_visible: false,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn active_path(&self) -> Option<&str> {
        self.selection.active_path.as_deref()
    }

    pub fn is_executing(&self) -> bool {
        self.gate.is_executing()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Start a new selection, superseding any load still in flight
    pub fn begin_select(&mut self, path: &str) -> LoadTicket {
        if let SessionPhase::Loading { path: pending, .. } = &self.phase {
            log::debug!("Selection of {path} supersedes pending load of {pending}");
        }

        self.selection.load_generation += 1;
        let generation = self.selection.load_generation;
        self.selection.active_path = Some(path.to_string());
        self.phase = SessionPhase::Loading {
            path: path.to_string(),
            generation,
        };
        log::debug!("Selecting {path} (generation {generation})");

        // Nothing of the previous file may stay on screen under the new name
        self.presenter.set_active_path(Some(path));
        self.presenter.set_language_mode(editor_mode_for(path));
        self.presenter.set_content(LOADING_TEXT);
        self.presenter.set_info("");
        self.presenter
            .notify(&format!("Loading {path}..."), Severity::Info);

        LoadTicket {
            path: path.to_string(),
            generation,
        }
    }

    /// Fetch for `ticket`, detached from the controller so it can be spawned
    pub fn load_task(
        &self,
        ticket: LoadTicket,
    ) -> impl Future<Output = (LoadTicket, std::result::Result<LoadedFile, LoadError>)> + Send + 'static
    {
        let loader = Arc::clone(&self.loader);
        async move {
            let result = loader.load_file(&ticket.path).await;
            (ticket, result)
        }
    }

    /// Apply a load result unless a newer selection has been made since
    pub fn complete_select(
        &mut self,
        ticket: LoadTicket,
        result: std::result::Result<LoadedFile, LoadError>,
    ) -> LoadOutcome {
        if ticket.generation != self.selection.load_generation {
            log::debug!(
                "Discarding stale load of {} (generation {}, current {})",
                ticket.path,
                ticket.generation,
                self.selection.load_generation
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(loaded) => {
                self.selection.content = Some(loaded.content);
                self.selection.info_text = loaded.info_text;
                self.phase = SessionPhase::Loaded {
                    path: ticket.path.clone(),
                };
                self.render_selection(&ticket.path);
                self.presenter
                    .notify(&format!("Loaded {}", ticket.path), Severity::Success);
                LoadOutcome::Committed
            }
            Err(e) => {
                log::warn!("Load of {} failed: {e}", ticket.path);
                self.selection.content = None;
                self.selection.info_text = None;
                self.phase = SessionPhase::Failed {
                    path: ticket.path.clone(),
                };
                self.presenter.set_content("");
                self.presenter.set_info(NO_INFO_PLACEHOLDER);
                self.presenter.relayout();
                self.presenter.notify(&e.to_string(), Severity::Error);
                LoadOutcome::Failed
            }
        }
    }

    pub async fn select(&mut self, path: &str) -> LoadOutcome {
        let ticket = self.begin_select(path);
        let (ticket, result) = self.load_task(ticket).await;
        self.complete_select(ticket, result)
    }

    /// Select `path` with content that did not come from the repository
    pub fn open_local(&mut self, path: &str, content: String) -> LoadOutcome {
        let ticket = self.begin_select(path);
        self.complete_select(
            ticket,
            Ok(LoadedFile {
                content,
                info_text: None,
            }),
        )
    }

    /// Replace the displayed content, as an edit in the editor would.
    ///
    /// Refused while a load is pending, since its commit would discard the edit.
    pub fn set_editor_content(&mut self, text: &str) -> Result<()> {
        if let SessionPhase::Loading { path, .. } = &self.phase {
            let err = CodeboxError::EditWhileLoading { path: path.clone() };
            self.presenter.notify(&err.to_string(), Severity::Warning);
            return Err(err);
        }

        self.selection.content = Some(text.to_string());
        self.presenter.set_content(text);
        self.presenter.relayout();
        Ok(())
    }

    /// Draw the current selection again
    pub fn redraw(&mut self) {
        self.presenter.relayout();
    }

    pub fn toggle_info(&mut self) -> bool {
        self.info_visible = !self.info_visible;
        self.presenter.set_info_visible(self.info_visible);
        self.presenter.relayout();
        self.info_visible
    }

    /// Validate the current selection and take the executing flag.
    ///
    /// Every rejection is also reported through the notification sink.
    pub fn start_run(&mut self) -> std::result::Result<RunJob, RunRejected> {
        let rejection = match self.prepare_run() {
            Ok(job) => return Ok(job),
            Err(rejection) => rejection,
        };

        log::debug!("Run rejected: {rejection}");
        if let RunRejected::Invalid(err @ RunError::UnsupportedLanguage { .. }) = &rejection {
            self.presenter.set_output(&err.to_string(), Severity::Error);
        }
        self.presenter.notify(&rejection.to_string(), Severity::Warning);
        Err(rejection)
    }

    fn prepare_run(&mut self) -> std::result::Result<RunJob, RunRejected> {
        let path = self
            .selection
            .active_path
            .clone()
            .ok_or(RunRejected::NoSelection)?;
        if matches!(self.phase, SessionPhase::Loading { .. }) {
            return Err(RunRejected::StillLoading { path });
        }

        let content = self.selection.content.as_deref().unwrap_or_default();
        let request = ExecutionClient::prepare(&path, content)?;
        let guard = self.gate.try_enter().ok_or(RunRejected::AlreadyRunning)?;

        log::debug!("Starting run of {path}");
        self.presenter.set_output(RUNNING_TEXT, Severity::Info);
        Ok(RunJob {
            client: Arc::clone(&self.executor),
            request,
            path,
            _guard: guard,
        })
    }

    /// Surface the outcome of a finished run
    pub fn finish_run(&mut self, report: RunReport) -> std::result::Result<ExecutionResult, RunError> {
        let filename = extract_filename(&report.path).to_string();
        match &report.result {
            Ok(result) if result.is_failure() => {
                let stderr = result.stderr.as_deref().unwrap_or_default();
                self.presenter.set_output(stderr, Severity::Error);
                self.presenter
                    .notify(&format!("{filename} finished with errors"), Severity::Error);
            }
            Ok(result) => {
                let text = result.success_text().unwrap_or(NO_OUTPUT_TEXT);
                self.presenter.set_output(text, Severity::Success);
                self.presenter
                    .notify(&format!("{filename} ran successfully"), Severity::Success);
            }
            Err(e) => {
                log::warn!("Run of {} failed: {e}", report.path);
                self.presenter.set_output(&e.to_string(), Severity::Error);
                self.presenter.notify(&e.to_string(), Severity::Error);
            }
        }
        report.result
    }

    pub async fn run(&mut self) -> Result<ExecutionResult> {
        let job = self.start_run()?;
        let report = job.execute().await;
        self.finish_run(report).map_err(CodeboxError::from)
    }

    fn render_selection(&mut self, path: &str) {
        let content = self.selection.content.as_deref().unwrap_or_default();
        let info = self
            .selection
            .info_text
            .as_deref()
            .unwrap_or(NO_INFO_PLACEHOLDER);

        self.presenter.set_language_mode(editor_mode_for(path));
        self.presenter.set_content(content);
        self.presenter.set_info(info);
        self.presenter.relayout();
    }
}

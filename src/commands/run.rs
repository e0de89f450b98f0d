use crate::core::{
    command_init::{CommandContext, CommandInit},
    error::{CodeboxError, Result},
    filter::extract_filename,
    output::TerminalPresenter,
    presentation::Presenter,
    session::{LoadOutcome, SessionController},
    state::ExecutionResult,
    target::Target,
};
use std::path::Path;

pub async fn execute_run(
    repo: Option<&str>,
    branch: Option<&str>,
    target: &str,
    source: Option<&Path>,
) -> Result<()> {
    let ctx = CommandInit::initialize(repo, branch)?;
    let mut session = ctx.session(TerminalPresenter::quiet());

    match source {
        Some(source) => {
            let content = std::fs::read_to_string(source)?;
            run_local(&mut session, target, content).await?;
        }
        None => {
            run_remote(&ctx, &mut session, target).await?;
        }
    }
    Ok(())
}

/// Load `target` from the repository and run it
pub async fn run_remote<P: Presenter>(
    ctx: &CommandContext,
    session: &mut SessionController<P>,
    target: &str,
) -> Result<ExecutionResult> {
    let index = ctx.load_index().await?;
    let entry = Target::parse(target).resolve(&index)?;

    if session.select(&entry.path).await != LoadOutcome::Committed {
        return Err(CodeboxError::Reported);
    }
    run_selected(session).await
}

/// Run local `content` as if it were the repository file `path`.
///
/// No listing is fetched; only the extension of `path` matters.
pub async fn run_local<P: Presenter>(
    session: &mut SessionController<P>,
    path: &str,
    content: String,
) -> Result<ExecutionResult> {
    session.open_local(path, content);
    run_selected(session).await
}

async fn run_selected<P: Presenter>(session: &mut SessionController<P>) -> Result<ExecutionResult> {
    let result = session.run().await.map_err(|e| match e {
        // Rejections and service errors were already notified
        CodeboxError::RunRejected(_) | CodeboxError::Run(_) => CodeboxError::Reported,
        other => other,
    })?;

    if result.is_failure() {
        let path = session.active_path().unwrap_or_default();
        return Err(CodeboxError::program_failed(extract_filename(path)));
    }
    Ok(result)
}

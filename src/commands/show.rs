use crate::core::{
    command_init::{CommandContext, CommandInit},
    error::{CodeboxError, Result},
    output::TerminalPresenter,
    presentation::Presenter,
    session::{LoadOutcome, SessionController},
    target::Target,
};

pub async fn execute_show(
    repo: Option<&str>,
    branch: Option<&str>,
    target: &str,
    info: bool,
) -> Result<()> {
    let ctx = CommandInit::initialize(repo, branch)?;
    let mut session = ctx.session(TerminalPresenter::quiet());
    show_file(&ctx, &mut session, target, info).await
}

pub async fn show_file<P: Presenter>(
    ctx: &CommandContext,
    session: &mut SessionController<P>,
    target: &str,
    info: bool,
) -> Result<()> {
    let index = ctx.load_index().await?;
    let entry = Target::parse(target).resolve(&index)?;

    if info {
        session.toggle_info();
    }

    match session.select(&entry.path).await {
        LoadOutcome::Committed => Ok(()),
        // The failure was already shown through the notification sink
        LoadOutcome::Failed | LoadOutcome::Superseded => Err(CodeboxError::Reported),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CodeboxConfig;
    use crate::core::http::fake::FakeHttp;
    use crate::core::presentation::recording::RecordingPresenter;
    use std::sync::Arc;

    const TREE: &str =
        "https://api.github.com/repos/vladflore/coding-challenges/git/trees/refactor?recursive=1";
    const RAW: &str = "https://raw.githubusercontent.com/vladflore/coding-challenges/refactor";

    fn context(http: FakeHttp) -> CommandContext {
        let http = http.respond(
            TREE,
            200,
            r#"{"tree": [{"path": "a/Solution.py", "type": "blob"}, {"path": "b/Main.java", "type": "blob"}]}"#,
        );
        CommandContext::new(CodeboxConfig::default(), Arc::new(http))
    }

    #[tokio::test]
    async fn test_show_by_index() -> Result<()> {
        let ctx = context(FakeHttp::new().respond(&format!("{RAW}/b/Main.java"), 200, "class Main {}"));
        let mut session = ctx.session(RecordingPresenter::default());

        show_file(&ctx, &mut session, "2", false).await?;
        assert_eq!(session.active_path(), Some("b/Main.java"));
        assert_eq!(session.presenter().last_content(), Some("class Main {}"));
        Ok(())
    }

    #[tokio::test]
    async fn test_show_missing_content_is_reported() {
        let ctx = context(FakeHttp::new());
        let mut session = ctx.session(RecordingPresenter::default());

        let err = show_file(&ctx, &mut session, "a/Solution.py", true).await.unwrap_err();
        assert!(matches!(err, CodeboxError::Reported));
        assert!(session
            .presenter()
            .notifications()
            .iter()
            .any(|(message, _)| message.contains("a/Solution.py")));
    }

    #[tokio::test]
    async fn test_show_unknown_path() {
        let ctx = context(FakeHttp::new());
        let mut session = ctx.session(RecordingPresenter::default());

        let err = show_file(&ctx, &mut session, "notes.txt", false).await.unwrap_err();
        assert!(matches!(err, CodeboxError::FileNotInIndex { .. }));
    }
}

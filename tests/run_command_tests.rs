use predicates::prelude::*;

mod common;
use common::fixtures::*;

#[cfg(test)]
mod run_command_tests {
    use super::*;

    const ANSWER: &str = r#"{"language": "python", "version": "3.10.0", "run": {"stdout": "42\n", "stderr": "", "output": "42\n", "code": 0}}"#;

    #[test]
    fn test_run_by_index_prints_output() -> anyhow::Result<()> {
        let env = create_sample_env(&[(EXECUTE_PATH, 200, ANSWER)])?;

        env.command()?
            .args(["run", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Output"))
            .stdout(predicate::str::contains("42"))
            .stdout(predicate::str::contains("Solution.py ran successfully"));

        let request = env
            .server
            .requests()
            .into_iter()
            .find(|r| r.path == EXECUTE_PATH)
            .expect("execution request");
        assert_eq!(request.method, "POST");
        let body: serde_json::Value = serde_json::from_str(&request.body)?;
        assert_eq!(body["language"], "python");
        assert_eq!(body["version"], "3.10.0");
        assert_eq!(body["files"][0]["name"], "Solution.py");
        assert_eq!(body["files"][0]["content"], "print(6 * 7)\n");
        Ok(())
    }

    #[test]
    fn test_run_java_uses_java_runtime() -> anyhow::Result<()> {
        let env = create_sample_env(&[(EXECUTE_PATH, 200, r#"{"run": {"stdout": "", "stderr": ""}}"#)])?;

        env.command()?
            .args(["run", "b/Main.java"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No output"));

        let request = env
            .server
            .requests()
            .into_iter()
            .find(|r| r.path == EXECUTE_PATH)
            .expect("execution request");
        let body: serde_json::Value = serde_json::from_str(&request.body)?;
        assert_eq!(body["language"], "java");
        assert_eq!(body["version"], "15.0.2");
        Ok(())
    }

    #[test]
    fn test_run_program_error_fails_with_stderr() -> anyhow::Result<()> {
        let env = create_sample_env(&[(
            EXECUTE_PATH,
            200,
            r#"{"run": {"stdout": "", "stderr": "ZeroDivisionError: division by zero", "code": 1}}"#,
        )])?;

        env.command()?
            .args(["run", "1"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("ZeroDivisionError"))
            .stdout(predicate::str::contains("Solution.py finished with errors"))
            .stdout(predicate::str::contains("ran successfully").not());

        Ok(())
    }

    #[test]
    fn test_run_service_error_fails() -> anyhow::Result<()> {
        let env = create_sample_env(&[(EXECUTE_PATH, 500, r#"{"message": "runtime unavailable"}"#)])?;

        env.command()?
            .args(["run", "1"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("HTTP 500"));

        Ok(())
    }

    #[test]
    fn test_run_local_source_skips_listing() -> anyhow::Result<()> {
        let env = TestEnv::new(&[(EXECUTE_PATH, 200, ANSWER)])?;
        let dir = tempfile::tempdir()?;
        let source = dir.path().join("answer.py");
        std::fs::write(&source, "print(42)")?;

        env.command()?
            .args(["run", "scratch/Answer.py", "--source"])
            .arg(&source)
            .assert()
            .success()
            .stdout(predicate::str::contains("42"));

        assert!(!env.server.was_requested(TREE_PATH));
        assert_eq!(env.server.requests().len(), 1);
        Ok(())
    }

    #[test]
    fn test_run_empty_source_is_rejected() -> anyhow::Result<()> {
        let env = TestEnv::new(&[])?;
        let dir = tempfile::tempdir()?;
        let source = dir.path().join("empty.py");
        std::fs::write(&source, "  \n\t\n")?;

        env.command()?
            .args(["run", "x.py", "--source"])
            .arg(&source)
            .assert()
            .failure()
            .stdout(predicate::str::contains("Nothing to run"));

        assert!(env.server.requests().is_empty());
        Ok(())
    }

    #[test]
    fn test_run_unsupported_extension_is_rejected() -> anyhow::Result<()> {
        let env = TestEnv::new(&[])?;
        let dir = tempfile::tempdir()?;
        let source = dir.path().join("tool.rb");
        std::fs::write(&source, "puts 1")?;

        env.command()?
            .args(["run", "tool.rb", "-s"])
            .arg(&source)
            .assert()
            .failure()
            .stdout(predicate::str::contains("Unsupported file type: 'tool.rb'"));

        assert!(env.server.requests().is_empty());
        Ok(())
    }
}

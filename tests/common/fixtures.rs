//! Test environments and predefined scenarios
//!
//! A [`TestEnv`] owns a canned server and a private config directory whose
//! `config.json` points every codebox endpoint at that server.

#![allow(dead_code)]

use super::server::TestServer;
use assert_cmd::Command;
use tempfile::TempDir;

pub const TREE_PATH: &str = "/repos/o/r/git/trees/main?recursive=1";
pub const EXECUTE_PATH: &str = "/execute";

pub const TREE_BODY: &str = r#"{
    "sha": "abc",
    "tree": [
        {"path": "README.md", "type": "blob"},
        {"path": "a", "type": "tree"},
        {"path": "a/Solution.py", "type": "blob"},
        {"path": "a/Solution.md", "type": "blob"},
        {"path": "b/Main.java", "type": "blob"},
        {"path": "b/notes.txt", "type": "blob"}
    ],
    "truncated": false
}"#;

pub fn raw_path(path: &str) -> String {
    format!("/raw/o/r/main/{path}")
}

pub struct TestEnv {
    pub config_home: TempDir,
    pub server: TestServer,
}

impl TestEnv {
    pub fn new(routes: &[(&str, u16, &str)]) -> anyhow::Result<TestEnv> {
        let server = TestServer::start(routes)?;
        let config_home = tempfile::tempdir()?;
        write_config(&config_home, &server.base_url)?;
        Ok(TestEnv {
            config_home,
            server,
        })
    }

    /// The binary, isolated from the user's config and proxies
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("codebox")?;
        cmd.env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        for proxy in [
            "HTTP_PROXY",
            "http_proxy",
            "HTTPS_PROXY",
            "https_proxy",
            "ALL_PROXY",
            "all_proxy",
        ] {
            cmd.env_remove(proxy);
        }
        Ok(cmd)
    }
}

fn write_config(config_home: &TempDir, base_url: &str) -> anyhow::Result<()> {
    let dir = config_home.path().join("codebox");
    std::fs::create_dir_all(&dir)?;
    let config = serde_json::json!({
        "repository": {"owner": "o", "name": "r", "branch": "main"},
        "endpoints": {
            "tree_api_base": base_url,
            "raw_content_base": format!("{base_url}/raw"),
            "execute_url": format!("{base_url}{EXECUTE_PATH}")
        },
        "request_timeout_secs": 5
    });
    std::fs::write(dir.join("config.json"), serde_json::to_string_pretty(&config)?)?;
    Ok(())
}

/// Scenario: a listing with one Python and one Java file, sources and one info document
pub fn create_sample_env(extra: &[(&str, u16, &str)]) -> anyhow::Result<TestEnv> {
    let solution = raw_path("a/Solution.py");
    let solution_info = raw_path("a/Solution.md");
    let main = raw_path("b/Main.java");

    let mut routes: Vec<(&str, u16, &str)> = vec![
        (TREE_PATH, 200, TREE_BODY),
        (&solution, 200, "print(6 * 7)\n"),
        (&solution_info, 200, "Prints the answer."),
        (&main, 200, "class Main {}\n"),
    ];
    routes.extend_from_slice(extra);
    TestEnv::new(&routes)
}

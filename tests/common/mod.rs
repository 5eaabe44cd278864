//! Shared testing utilities for viaja CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used as the CLI working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `viaja` binary.
    ///
    /// The API key and log filter are cleared so tests never inherit them.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("viaja").expect("Failed to locate viaja binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.root.path())
            .env_remove("GEMINI_API_KEY")
            .env_remove("VIAJA_LOG");
        cmd
    }

    /// Write `viaja.toml` in the working directory pointing at `api_url`.
    pub fn write_config(&self, api_url: &str) -> PathBuf {
        self.write_config_at(self.work_dir.join("viaja.toml"), api_url)
    }

    /// Write a config file at an arbitrary path pointing at `api_url`.
    pub fn write_config_at(&self, path: PathBuf, api_url: &str) -> PathBuf {
        let content = format!(
            r#"[generation]
api_url = "{}"
model = "gemini-test"
timeout_secs = 5
"#,
            api_url
        );
        fs::write(&path, content).expect("Failed to write config");
        path
    }
}

/// Request path served for the `gemini-test` model.
#[allow(dead_code)]
pub const TEST_ENDPOINT: &str = "/models/gemini-test:generateContent";

/// Minimal successful `generateContent` response body.
#[allow(dead_code)]
pub fn candidate_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
    })
    .to_string()
}

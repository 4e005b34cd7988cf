//! Shared testing utilities for promptgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used as the CLI's working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `promptgen` binary within the work directory.
    ///
    /// Ambient config and log settings are cleared so runs are reproducible.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("promptgen").expect("Failed to locate promptgen binary");
        cmd.current_dir(&self.work_dir).env_remove("PROMPTGEN_CONFIG").env_remove("PROMPTGEN_LOG");
        cmd
    }

    /// Write `contents` to `name` inside the work directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the work directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read test file")
    }
}

/// The document rendered for the machine-learning example fields.
#[allow(dead_code)]
pub const PAPER_PROMPT_EN: &str = "\
# <Role>
- You are an expert in machine learning with specialization in {specialization}.

# <Task>
- Your task is to summarize a paper.

# <Context>
- Here is the context you need:
  - {details}
  - {constraints}

## Reasoning
- Let's think step by step.

## Action
- [Search(\"transformer architectures\")]

## Observation
- Based on the action result to generate output.

# <Output Format>
- Return a markdown file; the structure is free.
- Don't jargon";

/// Field values for the machine-learning example, as JSON.
#[allow(dead_code)]
pub const PAPER_FIELDS_JSON: &str = r#"{
  "domain": "machine learning",
  "specificGoal": "summarize a paper",
  "format": "markdown",
  "unwantedResult": "jargon",
  "action": [{"type": "Search", "value": "transformer architectures"}]
}"#;

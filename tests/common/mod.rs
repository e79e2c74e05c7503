//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture with separate output and scratch
//! directories, plus scripted collaborators for driving the library
//! pipeline without `git`, `pod` or `swift`.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.command().assert().success();
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use assert_fs::prelude::*;
use testdrive::drive::DriveOptions;
use testdrive::error::Result;
use testdrive::output::OutputConfig;
use testdrive::repository::{GitOperations, ToolOperations};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{ScriptedGit, ScriptedTools, TestFixture};
}

/// A temporary directory holding an `out/` and a `scratch/` directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new fixture with empty output and scratch directories.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("out")
            .create_dir_all()
            .expect("Failed to create output directory");
        temp_dir
            .child("scratch")
            .create_dir_all()
            .expect("Failed to create scratch directory");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.temp_dir.path().join("out")
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.temp_dir.path().join("scratch")
    }

    /// Names of everything directly inside the output directory.
    #[allow(dead_code)]
    pub fn output_entries(&self) -> Vec<String> {
        entries(&self.output_dir())
    }

    /// Names of everything directly inside the scratch directory.
    #[allow(dead_code)]
    pub fn scratch_entries(&self) -> Vec<String> {
        entries(&self.scratch_dir())
    }

    /// Drive options pointing at this fixture, with opening disabled.
    #[allow(dead_code)]
    pub fn drive_options(&self) -> DriveOptions {
        DriveOptions {
            output_dir: self.output_dir(),
            scratch_parent: self.scratch_dir(),
            open: false,
            output: OutputConfig::silent(),
        }
    }

    /// Create a command that writes into this fixture and never opens
    /// anything.
    #[allow(dead_code)]
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("testdrive");
        cmd.current_dir(self.path())
            .env("TESTDRIVE_OUTPUT_DIR", self.output_dir())
            .env("TESTDRIVE_SCRATCH_DIR", self.scratch_dir())
            .env("TESTDRIVE_NO_OPEN", "1")
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Git collaborator with canned tags and per-repository layouts.
///
/// A clone creates the destination and fills it with the registered layout,
/// or with a single `<name>.xcodeproj` directory. Layout entries ending in
/// `/` are directories, the rest are empty files.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedGit {
    pub checkouts: Arc<Mutex<Vec<String>>>,
    pub tag_requests: Arc<Mutex<Vec<String>>>,
    tags: Vec<String>,
    layouts: HashMap<String, Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_layout(mut self, repository: &str, entries: &[&str]) -> Self {
        self.layouts.insert(
            repository.to_string(),
            entries.iter().map(|e| e.to_string()).collect(),
        );
        self
    }
}

impl GitOperations for ScriptedGit {
    fn clone_repository(&self, _url: &str, destination: &Path) -> Result<()> {
        fs::create_dir_all(destination)?;
        let name = destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let layout = self
            .layouts
            .get(&name)
            .cloned()
            .unwrap_or_else(|| vec![format!("{}.xcodeproj/", name)]);

        for entry in layout {
            let path = destination.join(entry.trim_end_matches('/'));
            if entry.ends_with('/') {
                fs::create_dir_all(&path)?;
            } else {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, "")?;
            }
        }
        Ok(())
    }

    fn checkout(&self, revision: &str, _repository: &Path) -> Result<()> {
        self.checkouts.lock().unwrap().push(revision.to_string());
        Ok(())
    }

    fn update_submodules(&self, _repository: &Path) -> Result<()> {
        Ok(())
    }

    fn list_tags(&self, url: &str) -> Result<Vec<String>> {
        self.tag_requests.lock().unwrap().push(url.to_string());
        Ok(self.tags.clone())
    }
}

/// Tool collaborator answering pod searches from a fixed table.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedTools {
    pub searches: Arc<Mutex<Vec<String>>>,
    pub opened: Arc<Mutex<Vec<PathBuf>>>,
    pods: HashMap<String, String>,
}

#[allow(dead_code)]
impl ScriptedTools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pod, looked up case-insensitively.
    pub fn with_pod(mut self, name: &str, source: &str) -> Self {
        self.pods.insert(name.to_lowercase(), format!(
            "\n-> {name} (1.0.0)\n   pod '{name}', '~> 1.0.0'\n   - Homepage: https://example.com/{name}\n   - Source:   {source}\n   - Versions: 1.0.0 [master repo]\n"
        ));
        self
    }
}

impl ToolOperations for ScriptedTools {
    fn search_pods(&self, name: &str) -> Result<String> {
        self.searches.lock().unwrap().push(name.to_string());
        Ok(self
            .pods
            .get(&name.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    fn generate_project(&self, package_dir: &Path, project_name: &str) -> Result<()> {
        fs::create_dir_all(package_dir.join(project_name))?;
        Ok(())
    }

    fn open(&self, path: &Path) -> Result<()> {
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_output_and_scratch() {
        let fixture = TestFixture::new();
        assert!(fixture.output_dir().is_dir());
        assert!(fixture.scratch_dir().is_dir());
        assert!(fixture.output_entries().is_empty());
    }

    #[test]
    fn test_scripted_git_creates_default_project() {
        let fixture = TestFixture::new();
        let git = ScriptedGit::new();
        let destination = fixture.path().join("Files");

        git.clone_repository("https://example.com/Files.git", &destination)
            .unwrap();

        assert!(destination.join("Files.xcodeproj").is_dir());
    }
}

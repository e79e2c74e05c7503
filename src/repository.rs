//! # External Collaborators
//!
//! Everything `testdrive` does outside its own process goes through one of
//! two traits, so the pipeline can be exercised without a network, a
//! CocoaPods installation or Xcode:
//!
//! - **`GitOperations`**: cloning, checking out a revision, updating
//!   submodules and listing a remote's tags.
//!
//! - **`ToolOperations`**: searching CocoaPods, generating an Xcode project
//!   from a Swift package manifest, and opening the finished workspace.
//!
//! `DefaultGitOperations` and `DefaultToolOperations` wrap the real commands
//! in [`crate::git`] and [`crate::tools`]. Every call blocks until the
//! command exits; a non-zero exit becomes an error that aborts the run.

use std::path::Path;

use crate::error::Result;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Clones `url` into `destination`.
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<()>;

    /// Checks out `revision` inside an existing clone.
    fn checkout(&self, revision: &str, repository: &Path) -> Result<()>;

    /// Initializes and updates all submodules of a clone, recursively.
    fn update_submodules(&self, repository: &Path) -> Result<()>;

    /// Retrieves a list of all tags from a remote repository.
    fn list_tags(&self, url: &str) -> Result<Vec<String>>;
}

/// Trait for the remaining command-line tools - allows mocking in tests
pub trait ToolOperations: Send + Sync {
    /// Runs a pod search and returns its free-text report.
    fn search_pods(&self, name: &str) -> Result<String>;

    /// Generates `project_name` from the manifest in `package_dir`.
    fn generate_project(&self, package_dir: &Path, project_name: &str) -> Result<()>;

    /// Opens `path` in the default application.
    fn open(&self, path: &Path) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command.
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<()> {
        crate::git::clone_repository(url, destination)
    }

    fn checkout(&self, revision: &str, repository: &Path) -> Result<()> {
        crate::git::checkout(revision, repository)
    }

    fn update_submodules(&self, repository: &Path) -> Result<()> {
        crate::git::update_submodules(repository)
    }

    fn list_tags(&self, url: &str) -> Result<Vec<String>> {
        crate::git::list_tags(url)
    }
}

/// The default implementation of `ToolOperations`, which shells out to
/// `pod`, `swift` and the platform's open command.
pub struct DefaultToolOperations;

impl ToolOperations for DefaultToolOperations {
    fn search_pods(&self, name: &str) -> Result<String> {
        crate::tools::search_pods(name)
    }

    fn generate_project(&self, package_dir: &Path, project_name: &str) -> Result<()> {
        crate::tools::generate_project(package_dir, project_name)
    }

    fn open(&self, path: &Path) -> Result<()> {
        crate::tools::open(path)
    }
}

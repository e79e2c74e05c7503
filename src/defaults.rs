//! Default values for testdrive.
//!
//! This module provides centralized constants and default paths used across
//! the pipeline, ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Suffix that marks a clonable repository URL.
pub const REPOSITORY_SUFFIX: &str = ".git";

/// Hosting domains whose web URLs are rewritten to clonable HTTPS URLs.
pub const HOSTING_DOMAINS: [&str; 3] = ["github.com", "gitlab.com", "bitbucket.org"];

/// Branch checked out for `--master`, and when no release can be found.
pub const DEFAULT_BRANCH: &str = "master";

/// Extension of a buildable project unit.
pub const PROJECT_EXTENSION: &str = "xcodeproj";

/// Lowercased substrings that disqualify a project unit.
pub const EXCLUDED_PROJECT_NAMES: [&str; 3] = ["demo", "sample", "example"];

/// Package manifest used to generate a project when none exists.
pub const PACKAGE_MANIFEST: &str = "Package.swift";

/// Prefix of every generated workspace name.
pub const WORKSPACE_PREFIX: &str = "TestDrive-";

/// Extension of a generated workspace.
pub const WORKSPACE_SUFFIX: &str = ".xcworkspace";

/// Folder inside the workspace that receives the staged repositories.
pub const PROJECTS_FOLDER: &str = "Projects";

/// Prefix of the per-run scratch directory.
pub const SCRATCH_PREFIX: &str = "TestDriveTemp-";

/// Returns the default parent directory for the scratch root.
///
/// This is the system temporary directory. It can be overridden by the
/// `--scratch-dir` CLI flag or the `TESTDRIVE_SCRATCH_DIR` environment
/// variable.
pub fn default_scratch_parent() -> PathBuf {
    std::env::temp_dir()
}

/// Returns the default directory the workspace is generated in.
///
/// Falls back to `.` if the current directory cannot be determined. Can be
/// overridden by `--output-dir` or `TESTDRIVE_OUTPUT_DIR`.
pub fn default_output_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

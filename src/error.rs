//! # Error Handling
//!
//! This module defines the centralized error type for `testdrive`. It uses
//! the `thiserror` library to describe every way a run can fail, each with
//! enough context to tell the user what went wrong.
//!
//! There is no recoverable tier: every variant aborts the run at the point
//! where it occurs. The binary catches the error once at the top level and
//! reports it. Reusing an already staged clone is a successful path and never
//! produces an error.
//!
//! The variants fall into three groups:
//!
//! - Argument errors (`InvalidUrl`, `MissingPlatform`, `InvalidPlatform`),
//!   raised before anything touches the network or the filesystem.
//! - Resolution errors (`InvalidPodName`, `InvalidPodSourceUrl`,
//!   `MissingXcodeProject`), raised while locating and staging packages.
//! - Collaborator failures (`GitClone`, `GitCommand`, `ToolCommand`, `Io`),
//!   raised when an external process exits unsuccessfully or a filesystem
//!   operation fails.

use thiserror::Error;

/// Main error type for testdrive operations
#[derive(Error, Debug)]
pub enum Error {
    /// A token that looked like a repository URL could not be parsed.
    #[error("Invalid URL given: '{0}'")]
    InvalidUrl(String),

    /// The platform flag was the last token, with no value after it.
    #[error("Missing platform after flag '-p'")]
    MissingPlatform,

    /// The platform flag named something outside the supported platforms.
    #[error("Invalid platform given: '{0}'")]
    InvalidPlatform(String),

    /// Neither a usable Xcode project nor a package manifest was found in a
    /// staged repository.
    #[error("Xcode project missing at '{0}'")]
    MissingXcodeProject(String),

    /// `pod search` produced no entry matching the requested name.
    #[error("Cannot find a pod named '{0}'")]
    InvalidPodName(String),

    /// The source field of a pod search entry was not a usable URL.
    #[error("Pod source URL is invalid: '{0}'")]
    InvalidPodSourceUrl(String),

    /// An error occurred while cloning a Git repository.
    ///
    /// Includes an optional hint for resolution.
    #[error("Git clone error for {url}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// An error occurred while executing a Git command.
    #[error("Git command failed for {target}: {command} - {stderr}")]
    GitCommand {
        command: String,
        target: String,
        stderr: String,
    },

    /// A non-git external tool (`pod`, `swift`, `open`) failed.
    #[error("Command '{tool}' failed: {command} - {stderr}")]
    ToolCommand {
        tool: String,
        command: String,
        stderr: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_url() {
        let error = Error::InvalidUrl("not a url.git".to_string());
        assert_eq!(error.to_string(), "Invalid URL given: 'not a url.git'");
    }

    #[test]
    fn test_error_display_platform_errors() {
        assert_eq!(
            Error::MissingPlatform.to_string(),
            "Missing platform after flag '-p'"
        );
        assert_eq!(
            Error::InvalidPlatform("watchOS".to_string()).to_string(),
            "Invalid platform given: 'watchOS'"
        );
    }

    #[test]
    fn test_error_display_missing_project() {
        let error = Error::MissingXcodeProject("https://github.com/test/repo.git".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Xcode project missing"));
        assert!(display.contains("https://github.com/test/repo.git"));
    }

    #[test]
    fn test_error_display_pod_errors() {
        let error = Error::InvalidPodName("nosuchpod".to_string());
        assert_eq!(error.to_string(), "Cannot find a pod named 'nosuchpod'");

        let error = Error::InvalidPodSourceUrl("::::".to_string());
        assert!(error.to_string().contains("Pod source URL is invalid"));
    }

    #[test]
    fn test_error_display_git_clone() {
        let error = Error::GitClone {
            url: "https://github.com/test/repo.git".to_string(),
            message: "Authentication failed".to_string(),
            hint: None,
        };
        let display = format!("{}", error);
        assert!(display.contains("Git clone error"));
        assert!(display.contains("https://github.com/test/repo.git"));
        assert!(display.contains("Authentication failed"));
        assert!(!display.contains("hint:"));
    }

    #[test]
    fn test_error_display_git_clone_with_hint() {
        let error = Error::GitClone {
            url: "https://github.com/test/repo.git".to_string(),
            message: "Authentication failed".to_string(),
            hint: Some("Check SSH keys".to_string()),
        };
        let display = format!("{}", error);
        assert!(display.contains("hint:"));
        assert!(display.contains("Check SSH keys"));
    }

    #[test]
    fn test_error_display_git_command() {
        let error = Error::GitCommand {
            command: "checkout 1.2.0".to_string(),
            target: "/tmp/scratch/Unbox".to_string(),
            stderr: "pathspec '1.2.0' did not match".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Git command failed"));
        assert!(display.contains("checkout 1.2.0"));
        assert!(display.contains("did not match"));
    }

    #[test]
    fn test_error_display_tool_command() {
        let error = Error::ToolCommand {
            tool: "pod".to_string(),
            command: "pod search unbox".to_string(),
            stderr: "command not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Command 'pod' failed"));
        assert!(display.contains("command not found"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_regex_error() {
        let regex_error = regex::Error::Syntax("Invalid regex".to_string());
        let error: Error = regex_error.into();
        assert!(error.to_string().contains("Regex error"));
    }
}

//! System implementations of the non-git collaborators: `pod search`,
//! `swift package generate-xcodeproj` and the platform "open" command.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Run `pod search <name> --simple --no-ansi` and return its output.
pub fn search_pods(name: &str) -> Result<String> {
    run_tool("pod", &["search", name, "--simple", "--no-ansi"], None)
}

/// Generate `<project_name>` from the package manifest in `package_dir`.
pub fn generate_project(package_dir: &Path, project_name: &str) -> Result<()> {
    run_tool(
        "swift",
        &["package", "generate-xcodeproj", "--output", project_name],
        Some(package_dir),
    )
    .map(|_| ())
}

/// Open `path` with the platform's default application.
pub fn open(path: &Path) -> Result<()> {
    let path = path.to_string_lossy();
    run_tool(open_command(), &[path.as_ref()], None).map(|_| ())
}

#[cfg(target_os = "macos")]
fn open_command() -> &'static str {
    "open"
}

#[cfg(not(target_os = "macos"))]
fn open_command() -> &'static str {
    "xdg-open"
}

fn run_tool(tool: &str, args: &[&str], dir: Option<&Path>) -> Result<String> {
    let command = format!("{} {}", tool, args.join(" "));
    debug!("{}", command);

    let mut process = Command::new(tool);
    process.args(args);
    if let Some(dir) = dir {
        process.current_dir(dir);
    }

    let output = process.output().map_err(|e| Error::ToolCommand {
        tool: tool.to_string(),
        command: command.clone(),
        stderr: e.to_string(),
    })?;

    if !output.status.success() {
        return Err(Error::ToolCommand {
            tool: tool.to_string(),
            command,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

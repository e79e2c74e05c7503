use std::path::Path;
use std::process::Command;

use log::debug;
use semver::Version;

use crate::error::Error;

/// Clone a repository into `destination`, quietly.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
/// - Any authentication configured in ~/.gitconfig
pub fn clone_repository(url: &str, destination: &Path) -> Result<(), Error> {
    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent)?;
    }

    debug!("git clone {} {}", url, destination.display());
    let output = Command::new("git")
        .args(["clone", "--quiet", url])
        .arg(destination)
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            message: e.to_string(),
            hint: Some("Make sure git is installed and on your PATH".to_string()),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Provide helpful error message for common auth failures
        let hint = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            Some(
                "Make sure you have access to the repository: SSH key added to \
                 ssh-agent, git credentials configured, or a personal access token"
                    .to_string(),
            )
        } else {
            None
        };

        return Err(Error::GitClone {
            url: url.to_string(),
            message: stderr.trim().to_string(),
            hint,
        });
    }

    Ok(())
}

/// Check out `revision` in an existing clone, quietly.
pub fn checkout(revision: &str, repository: &Path) -> Result<(), Error> {
    run_git(&["checkout", "--quiet", revision], repository)
}

/// Initialize and update all submodules, recursively.
pub fn update_submodules(repository: &Path) -> Result<(), Error> {
    run_git(
        &["submodule", "update", "--init", "--recursive", "--quiet"],
        repository,
    )
}

fn run_git(args: &[&str], repository: &Path) -> Result<(), Error> {
    let command = args.join(" ");
    debug!("git {} (in {})", command, repository.display());

    let output = Command::new("git")
        .args(args)
        .current_dir(repository)
        .output()
        .map_err(|e| Error::GitCommand {
            command: command.clone(),
            target: repository.display().to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command,
            target: repository.display().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}

/// List all tags from a remote repository
pub fn list_tags(url: &str) -> Result<Vec<String>, Error> {
    debug!("git ls-remote --tags {}", url);
    let output = Command::new("git")
        .args(["ls-remote", "--tags", url])
        .output()
        .map_err(|e| Error::GitCommand {
            command: "ls-remote --tags".to_string(),
            target: url.to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::GitCommand {
            command: "ls-remote --tags".to_string(),
            target: url.to_string(),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(parse_tag_listing(&String::from_utf8_lossy(&output.stdout)))
}

/// Extract tag names from `git ls-remote --tags` output.
///
/// Each line looks like `<hash>\trefs/tags/<tag>`. Annotated tags also list
/// a peeled `<tag>^{}` entry, which is folded into the plain tag.
pub fn parse_tag_listing(stdout: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for line in stdout.lines() {
        let Some((_, ref_name)) = line.split_once('\t') else {
            continue;
        };
        let Some(tag) = ref_name.trim().strip_prefix("refs/tags/") else {
            continue;
        };
        let tag = tag.strip_suffix("^{}").unwrap_or(tag);
        if !tags.iter().any(|known| known == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Parse a tag string into a semantic version
///
/// Accepts an optional `v` prefix. Tags with only major or major.minor
/// components (`2`, `v1.4`) are padded with zeros, since many pods tag
/// releases that way.
pub fn parse_semver_tag(tag: &str) -> Option<Version> {
    let version_str = tag.strip_prefix('v').unwrap_or(tag);

    if let Ok(version) = Version::parse(version_str) {
        return Some(version);
    }

    let components: Vec<&str> = version_str.split('.').collect();
    if components.len() > 2
        || components
            .iter()
            .any(|c| c.is_empty() || !c.chars().all(|ch| ch.is_ascii_digit()))
    {
        return None;
    }

    let mut numbers = components.iter().map(|c| c.parse::<u64>());
    let major = numbers.next()?.ok()?;
    let minor = numbers.next().transpose().ok()?.unwrap_or(0);
    Some(Version::new(major, minor, 0))
}

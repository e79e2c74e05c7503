//! # Project Discovery
//!
//! Locates the buildable unit inside a staged repository. The layered
//! heuristic is:
//!
//! 1.  Walk the repository depth-first, skipping hidden directories, and
//!     take the first directory with the `.xcodeproj` extension whose name
//!     does not mention a demo, sample or example. The walk stops there.
//! 2.  If nothing qualifies but the root holds a `Package.swift`, generate a
//!     project from the manifest and name it after the repository.
//! 3.  Otherwise the repository cannot be test driven.
//!
//! Siblings are visited in file-name order. When a repository holds several
//! qualifying projects the first one in that order wins; most repositories
//! hold exactly one.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::defaults::{EXCLUDED_PROJECT_NAMES, PACKAGE_MANIFEST, PROJECT_EXTENSION};
use crate::error::{Error, Result};
use crate::repository::ToolOperations;
use crate::stager::StagedRepository;
use crate::target::RepositoryUrl;

/// A staged repository together with the project unit found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredPackage {
    /// Display name: the project name without its extension, or the
    /// repository name for a generated project.
    pub name: String,
    /// The repository this package was found in.
    pub repository: StagedRepository,
    /// Path of the project unit relative to the repository's parent, so it
    /// starts with the repository name.
    pub project_path: PathBuf,
}

/// Whether `path` names a usable project unit.
pub fn is_project_unit(path: &Path) -> bool {
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext == PROJECT_EXTENSION);
    if !has_extension {
        return false;
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    !EXCLUDED_PROJECT_NAMES
        .iter()
        .any(|excluded| name.contains(excluded))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Find the first qualifying project unit below `root`.
pub fn find_project_unit(root: &Path) -> Option<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable entry while looking for a project: {}", err);
                None
            }
        })
        .find(|entry| entry.file_type().is_dir() && is_project_unit(entry.path()))
        .map(|entry| entry.into_path())
}

/// Discover the project unit of a staged repository.
pub fn discover(
    repository: &StagedRepository,
    url: &RepositoryUrl,
    tool_ops: &dyn ToolOperations,
) -> Result<DiscoveredPackage> {
    if let Some(unit) = find_project_unit(&repository.path) {
        let relative = unit.strip_prefix(&repository.path).unwrap_or(unit.as_path());
        let name = unit
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| repository.name.clone());
        info!("Found project {} in {}", relative.display(), repository.name);

        return Ok(DiscoveredPackage {
            name,
            repository: repository.clone(),
            project_path: PathBuf::from(&repository.name).join(relative),
        });
    }

    if repository.path.join(PACKAGE_MANIFEST).is_file() {
        let project_name = format!("{}.{}", repository.name, PROJECT_EXTENSION);
        debug!(
            "No project in {}, generating {} from {}",
            repository.name, project_name, PACKAGE_MANIFEST
        );
        tool_ops.generate_project(&repository.path, &project_name)?;

        return Ok(DiscoveredPackage {
            name: repository.name.clone(),
            repository: repository.clone(),
            project_path: PathBuf::from(&repository.name).join(project_name),
        });
    }

    Err(Error::MissingXcodeProject(url.to_string()))
}

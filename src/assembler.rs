//! # Workspace Assembly
//!
//! Builds the final workspace from the discovered packages. The staged
//! repositories are moved, not copied, into the workspace's `Projects`
//! folder, and each package's project unit becomes a file reference.
//!
//! Assembly is destructive: an existing `Projects` folder in a workspace of
//! the same name is emptied first.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::defaults::PROJECTS_FOLDER;
use crate::discovery::DiscoveredPackage;
use crate::error::Result;
use crate::platform::Platform;
use crate::workspace::Workspace;

/// Assemble `packages`, in order, into a workspace under `output_dir`.
pub fn assemble(
    packages: Vec<DiscoveredPackage>,
    platform: Platform,
    output_dir: &Path,
) -> Result<Workspace> {
    let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
    let mut workspace = Workspace::new(Workspace::name_for(&names), output_dir);

    let projects_dir = workspace.path.join(PROJECTS_FOLDER);
    fs::create_dir_all(&projects_dir)?;
    empty_dir(&projects_dir)?;

    workspace.add_playground(platform);

    for package in packages {
        let destination = projects_dir.join(&package.repository.name);
        move_dir(&package.repository.path, &destination)?;
        info!(
            "Moved {} into {}",
            package.repository.name,
            destination.display()
        );
        workspace.add_project(PathBuf::from(PROJECTS_FOLDER).join(&package.project_path));
    }

    Ok(workspace)
}

/// Remove everything inside `dir`, keeping `dir` itself.
fn empty_dir(dir: &Path) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

/// Move a directory tree, falling back to copy-and-delete when a rename is
/// not possible (for example across filesystems).
pub fn move_dir(from: &Path, to: &Path) -> io::Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) => {
            debug!(
                "Renaming {} failed ({}), copying instead",
                from.display(),
                err
            );
            copy_dir(from, to)?;
            fs::remove_dir_all(from)
        }
    }
}

fn copy_dir(from: &Path, to: &Path) -> io::Result<()> {
    for entry in WalkDir::new(from) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(io::Error::other)?;
        let target = to.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(from)?, to)
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to).map(|_| ())
}

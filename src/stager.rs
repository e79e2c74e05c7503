//! # Package Staging
//!
//! The `PackageStager` owns the scratch root of a run: a fresh
//! `TestDriveTemp-<uuid>` directory that receives every clone. For each
//! target it:
//!
//! 1.  Resolves a pod name to a repository URL through the source locator.
//! 2.  Derives the repository name from the URL.
//! 3.  Returns nothing if a repository of that name was already staged in
//!     this run. The check keys on the name alone, so two different hosts
//!     serving a repository with the same final path segment collide and
//!     only the first is staged.
//! 4.  Clones the repository, resolves and checks out the revision, and
//!     updates submodules.
//! 5.  Runs project discovery on the checkout.
//!
//! The scratch root is acquired with [`PackageStager::acquire`] and must be
//! given back with [`PackageStager::release`] on every exit path; nothing is
//! removed implicitly.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::checkout::{self, ResolvedRevision};
use crate::defaults::SCRATCH_PREFIX;
use crate::discovery::{self, DiscoveredPackage};
use crate::error::{Error, Result};
use crate::locator;
use crate::output::OutputConfig;
use crate::repository::{GitOperations, ToolOperations};
use crate::target::{CheckoutDirective, RepositoryUrl, Target, TargetKind};

/// One cloned and checked-out repository in the scratch root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedRepository {
    pub name: String,
    pub path: PathBuf,
    pub revision: ResolvedRevision,
}

/// Clones targets into a per-run scratch root.
pub struct PackageStager<'a> {
    scratch_root: PathBuf,
    staged: BTreeMap<String, StagedRepository>,
    git_ops: &'a dyn GitOperations,
    tool_ops: &'a dyn ToolOperations,
    output: &'a OutputConfig,
}

impl<'a> PackageStager<'a> {
    /// Create a fresh scratch root under `scratch_parent`.
    pub fn acquire(
        scratch_parent: &Path,
        git_ops: &'a dyn GitOperations,
        tool_ops: &'a dyn ToolOperations,
        output: &'a OutputConfig,
    ) -> Result<Self> {
        let scratch_root =
            scratch_parent.join(format!("{}{}", SCRATCH_PREFIX, uuid::Uuid::new_v4()));
        fs::create_dir_all(&scratch_root)?;
        debug!("Acquired scratch root {}", scratch_root.display());

        Ok(Self {
            scratch_root,
            staged: BTreeMap::new(),
            git_ops,
            tool_ops,
            output,
        })
    }

    /// Remove the scratch root and everything still in it.
    pub fn release(self) -> Result<()> {
        if self.scratch_root.exists() {
            fs::remove_dir_all(&self.scratch_root)?;
        }
        debug!("Released scratch root {}", self.scratch_root.display());
        Ok(())
    }

    pub fn scratch_root(&self) -> &Path {
        &self.scratch_root
    }

    /// Whether a repository of this name was staged in this run.
    pub fn is_staged(&self, name: &str) -> bool {
        self.staged.contains_key(name)
    }

    /// Stage every target in order, skipping repeats.
    pub fn stage_all(&mut self, targets: &[Target]) -> Result<Vec<DiscoveredPackage>> {
        let mut packages = Vec::with_capacity(targets.len());
        for target in targets {
            if let Some(package) = self.stage(target)? {
                packages.push(package);
            }
        }
        Ok(packages)
    }

    /// Stage a single target.
    ///
    /// Returns `None` when the target resolves to a repository that was
    /// already staged; that is a reuse, not an error.
    pub fn stage(&mut self, target: &Target) -> Result<Option<DiscoveredPackage>> {
        let url = match &target.kind {
            TargetKind::Pod(name) => {
                self.output
                    .progress("🕵️‍♀️", "[FIND]", format!("Finding pod '{}'...", name));
                locator::locate(name, self.tool_ops)?
            }
            TargetKind::Repository(url) => url.clone(),
        };

        self.stage_repository(&url, &target.directive)
    }

    fn stage_repository(
        &mut self,
        url: &RepositoryUrl,
        directive: &CheckoutDirective,
    ) -> Result<Option<DiscoveredPackage>> {
        let clone_url = url.clone_url();
        let name = url.repository_name();
        if name.is_empty() || name == "." || name == ".." {
            return Err(Error::InvalidUrl(url.to_string()));
        }

        let path = self.scratch_root.join(&name);
        if self.staged.contains_key(&name) || path.exists() {
            info!("{} already staged, ignoring {}", name, clone_url);
            self.output
                .progress("♻️", "[REUSE]", format!("Reusing clone of {}\n", name));
            return Ok(None);
        }

        self.output
            .progress("📦", "[CLONE]", format!("Cloning {}...", clone_url));
        self.git_ops.clone_repository(&clone_url, &path)?;

        if matches!(directive, CheckoutDirective::LatestRelease) {
            self.output
                .progress("🚢", "[RESOLVE]", "Resolving latest version...");
        }
        let revision = checkout::resolve(directive, &clone_url, self.git_ops)?;

        self.output
            .progress("📋", "[CHECKOUT]", format!("Checking out {}...", revision));
        self.git_ops.checkout(&revision.name, &path)?;
        self.git_ops.update_submodules(&path)?;

        let repository = StagedRepository {
            name: name.clone(),
            path,
            revision,
        };
        self.staged.insert(name, repository.clone());

        let package = discovery::discover(&repository, url, self.tool_ops)?;
        self.output.progress(
            "🚗",
            "[READY]",
            format!("{} is ready for test drive\n", package.name),
        );
        Ok(Some(package))
    }
}

//! # Test Drive Orchestration
//!
//! [`TestDrive`] runs the whole pipeline for one parsed command line:
//!
//! 1.  Acquire a scratch root and stage every target into it.
//! 2.  Assemble the discovered packages into a workspace under the output
//!     directory.
//! 3.  Write the workspace to disk and, unless disabled, open it.
//!
//! The scratch root is released on every exit path. If the run failed, the
//! run's error is the one reported and a failure to release is only logged.

use std::path::PathBuf;

use log::{info, warn};

use crate::assembler;
use crate::args::Arguments;
use crate::defaults;
use crate::discovery::DiscoveredPackage;
use crate::error::Result;
use crate::output::OutputConfig;
use crate::repository::{
    DefaultGitOperations, DefaultToolOperations, GitOperations, ToolOperations,
};
use crate::stager::PackageStager;
use crate::workspace::Workspace;

/// Settings of a single run that do not come from the target list.
#[derive(Debug, Clone)]
pub struct DriveOptions {
    /// Directory the workspace is created in.
    pub output_dir: PathBuf,
    /// Directory the scratch root is created in.
    pub scratch_parent: PathBuf,
    /// Whether to open the finished workspace.
    pub open: bool,
    pub output: OutputConfig,
}

impl Default for DriveOptions {
    fn default() -> Self {
        Self {
            output_dir: defaults::default_output_dir(),
            scratch_parent: defaults::default_scratch_parent(),
            open: true,
            output: OutputConfig::default(),
        }
    }
}

/// Runs test drives against a pair of collaborators.
pub struct TestDrive {
    git_ops: Box<dyn GitOperations>,
    tool_ops: Box<dyn ToolOperations>,
    options: DriveOptions,
}

impl TestDrive {
    /// A test drive backed by the system's `git`, `pod` and `swift`.
    pub fn new(options: DriveOptions) -> Self {
        Self::with_operations(
            options,
            Box::new(DefaultGitOperations),
            Box::new(DefaultToolOperations),
        )
    }

    /// A test drive with custom collaborators (useful for testing).
    pub fn with_operations(
        options: DriveOptions,
        git_ops: Box<dyn GitOperations>,
        tool_ops: Box<dyn ToolOperations>,
    ) -> Self {
        Self {
            git_ops,
            tool_ops,
            options,
        }
    }

    /// Stage, assemble and generate a workspace for `arguments`.
    pub fn run(&self, arguments: &Arguments) -> Result<Workspace> {
        let mut stager = PackageStager::acquire(
            &self.options.scratch_parent,
            self.git_ops.as_ref(),
            self.tool_ops.as_ref(),
            &self.options.output,
        )?;

        let result = stager
            .stage_all(&arguments.targets)
            .and_then(|packages| self.finish(packages, arguments));

        match (result, stager.release()) {
            (Ok(workspace), Ok(())) => Ok(workspace),
            (Ok(_), Err(release_err)) => Err(release_err),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(release_err)) => {
                warn!("Failed to remove scratch root: {}", release_err);
                Err(err)
            }
        }
    }

    fn finish(
        &self,
        packages: Vec<DiscoveredPackage>,
        arguments: &Arguments,
    ) -> Result<Workspace> {
        let names: Vec<String> = packages.iter().map(|p| p.name.clone()).collect();
        let workspace = assembler::assemble(packages, arguments.platform, &self.options.output_dir)?;

        self.options.output.progress(
            "⚡️",
            "[GENERATE]",
            format!("Generating workspace at {}...", workspace.path.display()),
        );
        workspace.generate()?;
        info!(
            "Workspace {} references {} project(s)",
            workspace.name,
            workspace.projects.len()
        );

        if self.options.open {
            self.tool_ops.open(&workspace.path)?;
        }

        self.options.output.progress(
            "🚘",
            "[DONE]",
            format!("Test driving {}", names.join(" + ")),
        );
        Ok(workspace)
    }
}

//! # Workspace Model and Generation
//!
//! An in-memory description of the Xcode workspace a run produces, and the
//! code that writes it to disk.
//!
//! A generated `TestDrive-<names>.xcworkspace` directory contains:
//!
//! ```text
//! contents.xcworkspacedata        file references, in insertion order
//! Playground.playground/
//!     contents.xcplayground       carries the target platform
//!     Contents.swift
//! Projects/                       the staged repositories
//! ```
//!
//! File references use `group:` locations, which Xcode resolves relative to
//! the directory containing the workspace, so every location starts with the
//! workspace name.

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::defaults::{WORKSPACE_PREFIX, WORKSPACE_SUFFIX};
use crate::error::Result;
use crate::platform::Platform;

const CONTENTS_FILE: &str = "contents.xcworkspacedata";
const PLAYGROUND_NAME: &str = "Playground.playground";

/// The playground entry of a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playground {
    pub platform: Platform,
}

/// A workspace that has not necessarily been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Directory name, e.g. `TestDrive-Unbox-Wrap.xcworkspace`.
    pub name: String,
    /// Where the workspace directory lives.
    pub path: PathBuf,
    pub playground: Option<Playground>,
    /// Project references relative to the workspace directory.
    pub projects: Vec<PathBuf>,
}

impl Workspace {
    /// The workspace name for a set of package display names.
    pub fn name_for<S: AsRef<str>>(package_names: &[S]) -> String {
        let joined = package_names
            .iter()
            .map(|name| name.as_ref())
            .collect::<Vec<_>>()
            .join("-");
        format!("{}{}{}", WORKSPACE_PREFIX, joined, WORKSPACE_SUFFIX)
    }

    /// Describe a workspace called `name` inside `parent`.
    pub fn new(name: impl Into<String>, parent: &Path) -> Self {
        let name = name.into();
        Self {
            path: parent.join(&name),
            name,
            playground: None,
            projects: Vec::new(),
        }
    }

    pub fn add_playground(&mut self, platform: Platform) {
        self.playground = Some(Playground { platform });
    }

    /// Reference a project by its path inside the workspace directory.
    pub fn add_project(&mut self, relative_path: impl Into<PathBuf>) {
        self.projects.push(relative_path.into());
    }

    /// The `contents.xcworkspacedata` document.
    pub fn render_contents(&self) -> String {
        let mut locations = Vec::new();
        if self.playground.is_some() {
            locations.push(self.group_location(Path::new(PLAYGROUND_NAME)));
        }
        for project in &self.projects {
            locations.push(self.group_location(project));
        }

        let mut document = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Workspace\n   version = \"1.0\">\n",
        );
        for location in locations {
            document.push_str(&format!(
                "   <FileRef\n      location = \"group:{}\">\n   </FileRef>\n",
                escape_xml(&location)
            ));
        }
        document.push_str("</Workspace>\n");
        document
    }

    fn group_location(&self, relative: &Path) -> String {
        let mut segments = vec![self.name.clone()];
        segments.extend(relative.components().filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        }));
        segments.join("/")
    }

    /// Write the workspace to disk, creating its directory if needed.
    ///
    /// Existing project folders are left alone; the workspace document and
    /// the playground are overwritten.
    pub fn generate(&self) -> Result<()> {
        fs::create_dir_all(&self.path)?;
        fs::write(self.path.join(CONTENTS_FILE), self.render_contents())?;

        if let Some(playground) = &self.playground {
            let playground_dir = self.path.join(PLAYGROUND_NAME);
            fs::create_dir_all(&playground_dir)?;
            fs::write(
                playground_dir.join("contents.xcplayground"),
                render_playground(playground.platform),
            )?;
            fs::write(
                playground_dir.join("Contents.swift"),
                format!("import {}\n\n", playground.platform.framework()),
            )?;
        }

        debug!("Generated workspace at {}", self.path.display());
        Ok(())
    }
}

fn render_playground(platform: Platform) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <playground version='5.0' target-platform='{}'>\n    \
         <timeline fileName='timeline.xctimeline'/>\n\
         </playground>\n",
        platform.identifier()
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

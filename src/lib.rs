//! # TestDrive Library
//!
//! This library builds throwaway Xcode workspaces for trying out Swift
//! packages. Given a list of CocoaPods names or git repository URLs, it
//! clones each one, checks out a suitable revision, finds the Xcode project
//! inside, and assembles everything into a `TestDrive-<names>.xcworkspace`
//! next to a playground for the requested platform.
//!
//! It is designed to be used by the `testdrive` command-line tool, but the
//! pipeline is exposed so it can be driven with custom collaborators.
//!
//! ## Quick Example
//!
//! ```
//! use testdrive::args;
//! use testdrive::platform::Platform;
//! use testdrive::target::{CheckoutDirective, TargetKind};
//!
//! let arguments = args::parse(["Unbox", "-v", "2.3.0", "Wrap", "-p", "tvOS"]).unwrap();
//!
//! assert_eq!(arguments.platform, Platform::Tvos);
//! assert_eq!(arguments.targets.len(), 2);
//! assert_eq!(arguments.targets[0].kind, TargetKind::Pod("Unbox".to_string()));
//! assert_eq!(
//!     arguments.targets[0].directive,
//!     CheckoutDirective::Explicit("2.3.0".to_string())
//! );
//! assert_eq!(arguments.targets[1].directive, CheckoutDirective::LatestRelease);
//! ```
//!
//! ## Core Concepts
//!
//! - **Targets (`target`, `args`)**: What the user asked for, and which
//!   revision of it.
//! - **Collaborators (`repository`, `git`, `tools`)**: Traits over `git`,
//!   `pod`, `swift` and the system's open command, with default
//!   implementations that shell out.
//! - **Staging (`stager`, `locator`, `checkout`, `discovery`)**: Cloning each
//!   target into a per-run scratch root and locating its project.
//! - **Assembly (`assembler`, `workspace`)**: Moving the staged repositories
//!   into the workspace and writing its documents.
//!
//! ## Execution Flow
//!
//! The entry point is [`drive::TestDrive::run`], which executes the
//! following steps:
//!
//! 1.  **Staging**: For every target, resolve a pod to its source
//!     repository, clone it, check out the chosen revision and update
//!     submodules.
//! 2.  **Discovery**: Find the project unit in each clone, generating one
//!     from `Package.swift` when needed.
//! 3.  **Assembly**: Move the clones into the workspace's `Projects` folder.
//! 4.  **Generation**: Write the workspace document and playground, then
//!     open the result.
//!
//! The scratch root is removed whether or not the run succeeds.

pub mod args;
pub mod assembler;
pub mod checkout;
pub mod defaults;
pub mod discovery;
pub mod drive;
pub mod error;
pub mod git;
pub mod locator;
pub mod output;
pub mod platform;
pub mod repository;
pub mod stager;
pub mod target;
pub mod tools;
pub mod workspace;

#[cfg(test)]
mod args_proptest;

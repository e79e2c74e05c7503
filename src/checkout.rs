//! # Checkout Resolution
//!
//! Decides which revision a freshly cloned repository should be checked out
//! at. Precedence is fixed:
//!
//! 1. An explicit ref from `--version` is used verbatim. It is not validated
//!    here; a bad ref fails later, at checkout.
//! 2. `--master` checks out the default branch.
//! 3. Otherwise the remote's tags are listed and the highest semantic
//!    version wins. A repository without any version tags falls back to the
//!    default branch instead of failing.

use std::fmt;

use log::{debug, info};
use semver::Version;

use crate::defaults::DEFAULT_BRANCH;
use crate::error::Result;
use crate::git::parse_semver_tag;
use crate::repository::GitOperations;
use crate::target::CheckoutDirective;

/// How a revision was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionPolicy {
    Explicit,
    DefaultBranch,
    LatestRelease,
    /// No release was found, so the default branch is used.
    BranchFallback,
}

/// The revision to check out, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRevision {
    pub name: String,
    pub policy: RevisionPolicy,
}

impl ResolvedRevision {
    fn new(name: impl Into<String>, policy: RevisionPolicy) -> Self {
        Self {
            name: name.into(),
            policy,
        }
    }
}

impl fmt::Display for ResolvedRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Resolve `directive` against the repository at `url`.
///
/// Only `LatestRelease` talks to the remote.
pub fn resolve(
    directive: &CheckoutDirective,
    url: &str,
    git_ops: &dyn GitOperations,
) -> Result<ResolvedRevision> {
    match directive {
        CheckoutDirective::Explicit(reference) => {
            Ok(ResolvedRevision::new(reference.clone(), RevisionPolicy::Explicit))
        }
        CheckoutDirective::DefaultBranch => Ok(ResolvedRevision::new(
            DEFAULT_BRANCH,
            RevisionPolicy::DefaultBranch,
        )),
        CheckoutDirective::LatestRelease => {
            let tags = git_ops.list_tags(url)?;
            match find_latest_release(&tags) {
                Some(tag) => {
                    info!("Latest release of {} is {}", url, tag);
                    Ok(ResolvedRevision::new(tag, RevisionPolicy::LatestRelease))
                }
                None => {
                    debug!("No releases found for {}, using {}", url, DEFAULT_BRANCH);
                    Ok(ResolvedRevision::new(
                        DEFAULT_BRANCH,
                        RevisionPolicy::BranchFallback,
                    ))
                }
            }
        }
    }
}

/// Find the tag with the highest version, ignoring tags that are not
/// versions. Returns the tag as written, prefix included.
pub fn find_latest_release(tags: &[String]) -> Option<String> {
    let mut releases: Vec<(Version, &String)> = tags
        .iter()
        .filter_map(|tag| parse_semver_tag(tag).map(|version| (version, tag)))
        .collect();

    releases.sort_by(|a, b| a.0.cmp(&b.0));
    releases.last().map(|(_, tag)| (*tag).clone())
}

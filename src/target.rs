//! # Target Model
//!
//! A [`Target`] is one package the user asked to test drive. It is either a
//! CocoaPods name that still has to be looked up, or a repository URL that
//! can be cloned directly, and it carries the [`CheckoutDirective`] saying
//! which revision to check out once the clone exists.
//!
//! Tokens are classified by [`TargetKind::from_token`]:
//!
//! - anything ending in `.git` is a repository URL and must parse as one;
//! - anything containing a known hosting domain followed by a path
//!   (`github.com/owner/repo`) is rewritten to `https://<host>/<path>`;
//! - everything else is a pod name.

use std::fmt;

use regex::Regex;

use crate::defaults::{HOSTING_DOMAINS, REPOSITORY_SUFFIX};
use crate::error::{Error, Result};

/// A validated repository location.
///
/// Accepts anything the `url` crate parses as an absolute URL, plus
/// scp-style remotes such as `git@github.com:owner/repo.git`. The original
/// text is kept as given so it can be handed to `git` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryUrl(String);

impl RepositoryUrl {
    /// Parse a repository location, returning `None` if it is not usable.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || input.chars().any(char::is_whitespace) {
            return None;
        }

        if url::Url::parse(input).is_ok() || is_scp_like(input) {
            Some(Self(input.to_string()))
        } else {
            None
        }
    }

    /// The location exactly as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The location used for cloning, always ending in `.git`.
    pub fn clone_url(&self) -> String {
        let trimmed = self.0.trim_end_matches('/');
        if trimmed.ends_with(REPOSITORY_SUFFIX) {
            trimmed.to_string()
        } else {
            format!("{}{}", trimmed, REPOSITORY_SUFFIX)
        }
    }

    /// The repository name: the last path segment of the clone URL with the
    /// `.git` suffix removed.
    ///
    /// Two different URLs that end in the same segment produce the same
    /// name, which is what staging deduplicates on.
    pub fn repository_name(&self) -> String {
        let clone_url = self.clone_url();
        let last_segment = clone_url.rsplit(['/', ':']).next().unwrap_or_default();
        last_segment
            .strip_suffix(REPOSITORY_SUFFIX)
            .unwrap_or(last_segment)
            .to_string()
    }
}

impl fmt::Display for RepositoryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_scp_like(input: &str) -> bool {
    // user@host:path, without a scheme
    Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9.-]+:[^/].*$")
        .map(|re| re.is_match(input))
        .unwrap_or(false)
}

/// Which revision to check out after cloning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckoutDirective {
    /// The highest released version, or the default branch if there is none.
    #[default]
    LatestRelease,
    /// The repository's default branch.
    DefaultBranch,
    /// A branch, tag or commit named by the user, used verbatim.
    Explicit(String),
}

/// Where a target's source comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind {
    /// A CocoaPods name, resolved to a URL through `pod search`.
    Pod(String),
    /// A repository that can be cloned directly.
    Repository(RepositoryUrl),
}

impl TargetKind {
    /// Classify a command-line token.
    pub fn from_token(token: &str) -> Result<Self> {
        let is_git_url = token.ends_with(REPOSITORY_SUFFIX);
        if is_git_url {
            if let Some(url) = RepositoryUrl::parse(token) {
                return Ok(TargetKind::Repository(url));
            }
        }

        if let Some(hosted) = hosted_url(token) {
            return hosted.map(TargetKind::Repository);
        }

        if is_git_url {
            return Err(Error::InvalidUrl(token.to_string()));
        }
        Ok(TargetKind::Pod(token.to_string()))
    }
}

/// Rewrite a token naming a known hosting domain to `https://<host>/<path>`.
///
/// Returns `None` when no hosting domain is followed by a path separator.
fn hosted_url(token: &str) -> Option<Result<RepositoryUrl>> {
    HOSTING_DOMAINS.iter().find_map(|domain| {
        let marker = format!("{}/", domain);
        let (_, path) = token.split_once(&marker)?;
        let path = path.trim_matches('/');
        if path.is_empty() {
            return Some(Err(Error::InvalidUrl(token.to_string())));
        }

        let canonical = format!("https://{}/{}", domain, path);
        Some(RepositoryUrl::parse(&canonical).ok_or_else(|| Error::InvalidUrl(token.to_string())))
    })
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Pod(name) => write!(f, "pod '{}'", name),
            TargetKind::Repository(url) => write!(f, "{}", url),
        }
    }
}

/// One package requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub kind: TargetKind,
    pub directive: CheckoutDirective,
}

impl Target {
    /// A target that checks out the latest release.
    pub fn new(kind: TargetKind) -> Self {
        Self {
            kind,
            directive: CheckoutDirective::default(),
        }
    }

    pub fn with_directive(mut self, directive: CheckoutDirective) -> Self {
        self.directive = directive;
        self
    }
}

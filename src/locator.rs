//! # Source Locator
//!
//! Finds the source repository of a CocoaPods pod by running `pod search`
//! and reading its report. A `--simple` report lists one entry per pod:
//!
//! ```text
//! -> Unbox (4.0.0)
//!    The easy to use Swift JSON decoder
//!    pod 'Unbox', '~> 4.0.0'
//!    - Homepage: https://github.com/johnsundell/unbox
//!    - Source:   https://github.com/johnsundell/unbox.git
//!    - Versions: 4.0.0, 3.0.0 [master repo]
//! ```
//!
//! The scan is a single pass with two states: first look for the heading
//! whose name matches, then take the first `- Source:` line after it. There
//! is no backtracking; later entries and later source lines are ignored.

use log::{debug, info};
use regex::Regex;

use crate::error::{Error, Result};
use crate::repository::ToolOperations;
use crate::target::RepositoryUrl;

/// Look up the source repository of the pod called `name`.
pub fn locate(name: &str, tool_ops: &dyn ToolOperations) -> Result<RepositoryUrl> {
    let name = name.to_lowercase();
    let report = tool_ops.search_pods(&name)?;
    let url = parse_search_report(&name, &report)?;
    info!("Pod '{}' is hosted at {}", name, url);
    Ok(url)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingHeading,
    SeekingSource,
}

/// Extract the source URL of `name` from a `pod search` report.
pub fn parse_search_report(name: &str, report: &str) -> Result<RepositoryUrl> {
    let ansi = Regex::new(r"\x1b\[[0-9;]*[A-Za-z]")?;
    let heading = Regex::new(r"^\s*->\s*(\S+)(\s|$)")?;
    let source = Regex::new(r"(?i)-\s*source:(.*)$")?;

    let report = ansi.replace_all(report, "");
    let mut state = ScanState::SeekingHeading;

    for line in report.lines() {
        match state {
            ScanState::SeekingHeading => {
                let matches_name = heading
                    .captures(line)
                    .is_some_and(|caps| caps[1].eq_ignore_ascii_case(name));
                if matches_name {
                    debug!("Found search entry for '{}'", name);
                    state = ScanState::SeekingSource;
                }
            }
            ScanState::SeekingSource => {
                if let Some(caps) = source.captures(line) {
                    let url = caps[1].trim();
                    return RepositoryUrl::parse(url)
                        .ok_or_else(|| Error::InvalidPodSourceUrl(url.to_string()));
                }
            }
        }
    }

    Err(Error::InvalidPodName(name.to_string()))
}

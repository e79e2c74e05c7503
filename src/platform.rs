//! Playground platforms.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The platform a generated playground targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    #[default]
    Ios,
    Macos,
    Tvos,
}

impl Platform {
    /// Every supported platform, in the order shown to users.
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Macos, Platform::Tvos];

    /// The identifier written into `contents.xcplayground`.
    pub fn identifier(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Macos => "macos",
            Platform::Tvos => "tvos",
        }
    }

    /// The UI framework a playground on this platform imports.
    pub fn framework(self) -> &'static str {
        match self {
            Platform::Ios | Platform::Tvos => "UIKit",
            Platform::Macos => "Cocoa",
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|platform| platform.identifier() == lowered)
            .ok_or_else(|| Error::InvalidPlatform(s.to_string()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Ios => "iOS",
            Platform::Macos => "macOS",
            Platform::Tvos => "tvOS",
        };
        f.write_str(name)
    }
}

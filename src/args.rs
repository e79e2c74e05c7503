//! # Argument Resolution
//!
//! Turns the raw command-line tokens into an ordered list of [`Target`]s and
//! a playground [`Platform`].
//!
//! Parsing is a small state machine over the token stream:
//!
//! - `Normal`: a token is either a control (`-p`, `-v`, `-m` and their long
//!   forms) or a new target.
//! - `ExpectingPlatform`: the token is a platform name.
//! - `ExpectingCheckout`: the token is an explicit ref for the last target.
//!
//! Checkout modifiers never create a target. They apply to the target
//! declared most recently before them, and are dropped when no target has
//! been declared yet. Later modifiers replace earlier ones.
//!
//! Parsing either succeeds completely or fails before any staging happens.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::target::{CheckoutDirective, Target, TargetKind};

/// The fully parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub targets: Vec<Target>,
    pub platform: Platform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Normal,
    ExpectingPlatform,
    ExpectingCheckout,
}

/// Parse a sequence of tokens, not including the program name.
pub fn parse<I, S>(tokens: I) -> Result<Arguments>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut arguments = Arguments::default();
    let mut state = ParseState::Normal;

    for token in tokens {
        let token = token.as_ref();

        state = match state {
            ParseState::ExpectingPlatform => {
                arguments.platform = token.parse()?;
                ParseState::Normal
            }
            ParseState::ExpectingCheckout => {
                attach_directive(
                    &mut arguments.targets,
                    CheckoutDirective::Explicit(token.to_string()),
                );
                ParseState::Normal
            }
            ParseState::Normal => match token {
                "--platform" | "-p" => ParseState::ExpectingPlatform,
                "--version" | "-v" => ParseState::ExpectingCheckout,
                "--master" | "-m" => {
                    attach_directive(&mut arguments.targets, CheckoutDirective::DefaultBranch);
                    ParseState::Normal
                }
                _ => {
                    let kind = TargetKind::from_token(token)?;
                    arguments.targets.push(Target::new(kind));
                    ParseState::Normal
                }
            },
        };
    }

    match state {
        ParseState::ExpectingPlatform => Err(Error::MissingPlatform),
        ParseState::ExpectingCheckout => {
            warn!("Ignoring '--version' without a value");
            Ok(arguments)
        }
        ParseState::Normal => Ok(arguments),
    }
}

fn attach_directive(targets: &mut [Target], directive: CheckoutDirective) {
    match targets.last_mut() {
        Some(target) => target.directive = directive,
        None => debug!("Dropping {:?}: no target precedes it", directive),
    }
}

//! Property-based tests for argument resolution.
//!
//! These tests use proptest to generate random token streams and verify that
//! the attachment rules for checkout modifiers hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::args::parse;
    use crate::platform::Platform;
    use crate::target::{CheckoutDirective, TargetKind};
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Token {
        Name(String),
        Master,
        Version(String),
        Platform(Platform),
    }

    fn token_strategy() -> impl Strategy<Value = Token> {
        prop_oneof![
            "[A-Z][a-z]{1,8}".prop_map(Token::Name),
            Just(Token::Master),
            "[0-9]\\.[0-9]\\.[0-9]".prop_map(Token::Version),
            prop::sample::select(Platform::ALL.to_vec()).prop_map(Token::Platform),
        ]
    }

    fn flatten(tokens: &[Token]) -> Vec<String> {
        let mut raw = Vec::new();
        for token in tokens {
            match token {
                Token::Name(name) => raw.push(name.clone()),
                Token::Master => raw.push("-m".to_string()),
                Token::Version(version) => {
                    raw.push("-v".to_string());
                    raw.push(version.clone());
                }
                Token::Platform(platform) => {
                    raw.push("-p".to_string());
                    raw.push(platform.to_string());
                }
            }
        }
        raw
    }

    /// The directive each name should end up with: the last modifier that
    /// follows it before the next name.
    fn expected_directives(tokens: &[Token]) -> Vec<CheckoutDirective> {
        let mut expected: Vec<CheckoutDirective> = Vec::new();
        for token in tokens {
            match token {
                Token::Name(_) => expected.push(CheckoutDirective::LatestRelease),
                Token::Master => {
                    if let Some(last) = expected.last_mut() {
                        *last = CheckoutDirective::DefaultBranch;
                    }
                }
                Token::Version(version) => {
                    if let Some(last) = expected.last_mut() {
                        *last = CheckoutDirective::Explicit(version.clone());
                    }
                }
                Token::Platform(_) => {}
            }
        }
        expected
    }

    proptest! {
        /// Property: only name tokens create targets, in input order
        #[test]
        fn modifiers_never_create_targets(tokens in prop::collection::vec(token_strategy(), 0..12)) {
            let args = parse(flatten(&tokens)).unwrap();
            let names: Vec<TargetKind> = tokens
                .iter()
                .filter_map(|t| match t {
                    Token::Name(name) => Some(TargetKind::Pod(name.clone())),
                    _ => None,
                })
                .collect();
            let parsed: Vec<TargetKind> = args.targets.iter().map(|t| t.kind.clone()).collect();
            prop_assert_eq!(parsed, names);
        }

        /// Property: every directive lands on the nearest preceding target
        #[test]
        fn modifiers_attach_to_nearest_preceding_target(tokens in prop::collection::vec(token_strategy(), 0..12)) {
            let args = parse(flatten(&tokens)).unwrap();
            let directives: Vec<CheckoutDirective> =
                args.targets.iter().map(|t| t.directive.clone()).collect();
            prop_assert_eq!(directives, expected_directives(&tokens));
        }

        /// Property: the last platform flag wins, defaulting to the first platform
        #[test]
        fn last_platform_wins(tokens in prop::collection::vec(token_strategy(), 0..12)) {
            let args = parse(flatten(&tokens)).unwrap();
            let expected = tokens
                .iter()
                .filter_map(|t| match t {
                    Token::Platform(p) => Some(*p),
                    _ => None,
                })
                .last()
                .unwrap_or_default();
            prop_assert_eq!(args.platform, expected);
        }
    }
}

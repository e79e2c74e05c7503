//! CLI argument parsing and run dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::debug;

use testdrive::args;
use testdrive::defaults;
use testdrive::drive::{DriveOptions, TestDrive};
use testdrive::output::{emoji, OutputConfig};

const EXAMPLES: &str = "\
Examples:
- testdrive Unbox Wrap Files
- testdrive https://github.com/johnsundell/unbox.git Wrap Files
- testdrive Unbox -p tvOS
- testdrive Unbox -v 2.3.0
- testdrive Unbox -v swift3
- testdrive Unbox -m";

/// Quickly try out any Swift pod or framework in a playground
#[derive(Parser, Debug)]
#[command(name = "testdrive")]
#[command(about, long_about = None, disable_version_flag = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Directory to create the workspace in (defaults to current directory)
    #[arg(long, value_name = "DIR", env = "TESTDRIVE_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Directory to clone into (defaults to the system temp directory)
    #[arg(long, value_name = "DIR", env = "TESTDRIVE_SCRATCH_DIR")]
    scratch_dir: Option<PathBuf>,

    /// Don't open the workspace once it is generated
    #[arg(
        long,
        env = "TESTDRIVE_NO_OPEN",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_open: bool,

    /// Suppress progress output
    #[arg(long)]
    quiet: bool,

    /// Pod names or repository URLs, with -p <PLATFORM>, -v <VERSION> and -m
    #[arg(
        value_name = "TARGETS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

impl Cli {
    /// Execute the test drive described by the command line
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let output = OutputConfig::from_env_and_flag(&self.color).quiet(self.quiet);
        let arguments = args::parse(&self.args)?;

        if arguments.targets.is_empty() {
            print_usage(&output);
            return Ok(());
        }
        debug!(
            "Test driving {} target(s) on {}",
            arguments.targets.len(),
            arguments.platform
        );

        let options = DriveOptions {
            output_dir: self.output_dir.unwrap_or_else(defaults::default_output_dir),
            scratch_parent: self
                .scratch_dir
                .unwrap_or_else(defaults::default_scratch_parent),
            open: !self.no_open,
            output,
        };

        TestDrive::new(options).run(&arguments)?;
        Ok(())
    }
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn print_usage(output: &OutputConfig) {
    println!("{}  Test Drive", emoji(output, "🚘", "[testdrive]"));
    println!("--------------");
    println!("Quickly try out any Swift pod or framework in a playground.");
    println!("\nUsage:");
    println!("- Simply pass a list of pod names or URLs that you want to test drive.");
    println!("- You can also specify a platform (iOS, macOS or tvOS) using the '-p' option");
    println!("- Use '-v' to pick a version, tag or branch, or '-m' to use master");
    println!("\n{}", EXAMPLES);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_targets_and_modifiers_are_collected_raw() {
        let cli = Cli::try_parse_from(["testdrive", "Unbox", "-v", "2.3.0", "-p", "tvOS", "-m"])
            .unwrap();
        assert_eq!(cli.args, vec!["Unbox", "-v", "2.3.0", "-p", "tvOS", "-m"]);
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.no_open);
    }

    #[test]
    fn test_leading_options_are_parsed() {
        let cli = Cli::try_parse_from([
            "testdrive",
            "--no-open",
            "--quiet",
            "--output-dir",
            "/tmp/out",
            "Unbox",
            "--version",
            "2.0.0",
        ])
        .unwrap();
        assert!(cli.no_open);
        assert!(cli.quiet);
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(cli.args, vec!["Unbox", "--version", "2.0.0"]);
    }
}

//! Command line arguments

use crate::error::ExitCode;
use clap::{CommandFactory, Parser, error::ErrorKind};
use std::path::PathBuf;

const EXAMPLE: &str = "Example: hashcheck diskimage.iso md5 d41d8cd98f00b204e9800998ecf8427e";

#[derive(Parser, Debug)]
#[command(name = "hashcheck")]
#[command(author, version, about = "Verify a file against an expected checksum", long_about = None)]
#[command(after_help = EXAMPLE)]
pub struct Cli {
    /// File to check
    pub filename: PathBuf,

    /// Hash algorithm (md5, sha1, sha256, sha512), case-insensitive
    pub algorithm: String,

    /// Expected hash as hex, case-insensitive
    pub expected_hash: String,

    /// Trailing arguments after the expected hash are accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read the file in chunks of this many bytes
    #[arg(short, long, value_name = "BYTES")]
    pub buffer_size: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Short usage text printed when positional arguments are missing
pub fn usage_text() -> String {
    let usage = Cli::command().render_usage();
    format!("{usage}\n{EXAMPLE}")
}

/// Report an argument parsing failure and pick the exit code
///
/// Missing positionals print the usage on stdout. Help and version requests
/// are not failures.
pub fn handle_parse_error(error: clap::Error) -> ExitCode {
    match error.kind() {
        ErrorKind::MissingRequiredArgument => {
            println!("{}", usage_text());
            ExitCode::Misuse
        }
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            ExitCode::Success
        }
        _ => {
            let _ = error.print();
            ExitCode::Misuse
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positionals() {
        let cli = Cli::try_parse_from(["hashcheck", "disk.iso", "SHA256", "ABCDEF"]).unwrap();

        assert_eq!(cli.filename, PathBuf::from("disk.iso"));
        assert_eq!(cli.algorithm, "SHA256");
        assert_eq!(cli.expected_hash, "ABCDEF");
        assert!(!cli.debug);
        assert!(cli.buffer_size.is_none());
    }

    #[test]
    fn test_parses_options() {
        let cli = Cli::try_parse_from([
            "hashcheck",
            "--debug",
            "--buffer-size",
            "4096",
            "--no-color",
            "disk.iso",
            "md5",
            "00",
        ])
        .unwrap();

        assert!(cli.debug);
        assert!(cli.no_color);
        assert_eq!(cli.buffer_size, Some(4096));
    }

    #[test]
    fn test_missing_positionals_is_missing_argument() {
        let error = Cli::try_parse_from(["hashcheck", "disk.iso", "md5"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_positionals_are_ignored() {
        let cli = Cli::try_parse_from(["hashcheck", "disk.iso", "md5", "00", "extra", "more"])
            .unwrap();

        assert_eq!(cli.expected_hash, "00");
        assert_eq!(cli.extra, vec!["extra".to_string(), "more".to_string()]);
    }

    #[test]
    fn test_usage_text_mentions_arguments_and_example() {
        let usage = usage_text();
        assert!(usage.contains("<FILENAME> <ALGORITHM> <EXPECTED_HASH>"));
        assert!(usage.contains("Example: hashcheck diskimage.iso md5"));
    }

    #[test]
    fn test_command_is_consistent() {
        Cli::command().debug_assert();
    }
}

// CLI module for argument parsing
use crate::display::DisplayMode;
use crate::error::{QError, Result};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// q - list a directory inside a colored box table
#[derive(Parser, Debug, Clone)]
#[command(name = "q")]
#[command(author, version, about, long_about = None, disable_help_flag = true)]
pub struct Args {
    /// Directory to list
    ///
    /// If not specified, defaults to the current directory.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Use long listing format (permissions, size, modified, name)
    #[arg(short = 'l', long = "long", action = ArgAction::SetTrue)]
    pub long_format: bool,

    /// Show hidden entries (names starting with .)
    #[arg(short = 'a', long = "all", action = ArgAction::SetTrue)]
    pub all: bool,

    /// Print sizes in 1024-based units (KB, MB, ...)
    #[arg(short = 'h', long = "human-readable", action = ArgAction::SetTrue)]
    pub human_readable: bool,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    /// Parse the process arguments.
    ///
    /// `--help` and `--version` print and exit; anything else clap rejects
    /// becomes a usage error.
    pub fn parse_args() -> Result<Self> {
        Self::try_parse().or_else(|err| {
            if err.use_stderr() {
                Err(QError::Usage(err.to_string()))
            } else {
                err.exit()
            }
        })
    }

    /// Parse an explicit argument list (first item is the program name)
    pub fn parse_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|err| QError::Usage(err.to_string()))
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.long_format {
            DisplayMode::Long
        } else {
            DisplayMode::Compact
        }
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub path: PathBuf,
    pub mode: DisplayMode,
    pub show_hidden: bool,
    pub human_readable: bool,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        AppConfig {
            mode: args.display_mode(),
            path: args.path,
            show_hidden: args.all,
            human_readable: args.human_readable,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            path: PathBuf::from("."),
            mode: DisplayMode::Compact,
            show_hidden: false,
            human_readable: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse_from_args(std::iter::once("q").chain(args.iter().copied()))
    }

    mod args_tests {
        use super::*;

        #[test]
        fn test_no_arguments_defaults() {
            let args = parse(&[]).unwrap();
            assert_eq!(args.path, PathBuf::from("."));
            assert!(!args.long_format);
            assert!(!args.all);
            assert!(!args.human_readable);
        }

        #[test]
        fn test_separate_flags() {
            let args = parse(&["-l", "-a", "-h"]).unwrap();
            assert!(args.long_format);
            assert!(args.all);
            assert!(args.human_readable);
        }

        #[test]
        fn test_combined_flags() {
            let args = parse(&["-la"]).unwrap();
            assert!(args.long_format);
            assert!(args.all);
            assert!(!args.human_readable);

            let args = parse(&["-lah", "/tmp"]).unwrap();
            assert!(args.long_format && args.all && args.human_readable);
            assert_eq!(args.path, PathBuf::from("/tmp"));
        }

        #[test]
        fn test_path_before_flags() {
            let args = parse(&["src", "-h"]).unwrap();
            assert_eq!(args.path, PathBuf::from("src"));
            assert!(args.human_readable);
        }

        #[test]
        fn test_long_flag_names() {
            let args = parse(&["--long", "--all", "--human-readable"]).unwrap();
            assert!(args.long_format && args.all && args.human_readable);
        }

        #[test]
        fn test_unknown_flag_is_usage_error() {
            let result = parse(&["-x"]);
            assert!(matches!(result, Err(QError::Usage(_))));

            let result = parse(&["-lz"]);
            assert!(matches!(result, Err(QError::Usage(_))));
        }

        #[test]
        fn test_multiple_paths_is_usage_error() {
            let result = parse(&["one", "two"]);
            match result {
                Err(QError::Usage(message)) => assert!(message.contains("two")),
                other => panic!("expected usage error, got {:?}", other),
            }
        }

        #[test]
        fn test_display_mode() {
            assert_eq!(parse(&[]).unwrap().display_mode(), DisplayMode::Compact);
            assert_eq!(parse(&["-l"]).unwrap().display_mode(), DisplayMode::Long);
        }
    }

    mod config_tests {
        use super::*;

        #[test]
        fn test_app_config_from_args() {
            let args = parse(&["-lh", "/test/path"]).unwrap();
            let config: AppConfig = args.into();

            assert_eq!(config.path, PathBuf::from("/test/path"));
            assert_eq!(config.mode, DisplayMode::Long);
            assert!(!config.show_hidden);
            assert!(config.human_readable);
        }

        #[test]
        fn test_app_config_default() {
            let from_args: AppConfig = parse(&[]).unwrap().into();
            assert_eq!(AppConfig::default(), from_args);
        }
    }
}

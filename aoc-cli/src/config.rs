//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags every selected solver must carry
    pub tags: Vec<String>,
    /// Directory searched for `{year}_day{dd}.txt`
    pub input_dir: PathBuf,
    /// Explicit input file for the single selected puzzle
    pub input_file: Option<PathBuf>,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.input.is_some() && (args.year.is_none() || args.day.is_none()) {
            return Err(CliError::Config(
                "an input file needs both --year and --day".to_string(),
            ));
        }
        if args.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(CliError::Config("empty tag in --tags".to_string()));
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags.into_iter().map(|t| t.trim().to_string()).collect(),
            input_dir: expand_tilde(&args.input_dir),
            input_file: args.input.as_deref().map(expand_tilde),
            quiet: args.quiet,
        })
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(rest) = path.to_str().and_then(|s| s.strip_prefix('~')) else {
        return path.to_path_buf();
    };
    match (rest.is_empty() || rest.starts_with('/'), dirs::home_dir()) {
        (true, Some(home)) => home.join(rest.trim_start_matches('/')),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use proptest::prelude::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~/inputs")), home.join("inputs"));
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("/tmp/inputs")), PathBuf::from("/tmp/inputs"));
        assert_eq!(expand_tilde(Path::new("~other/x")), PathBuf::from("~other/x"));
    }

    #[test]
    fn test_from_args_resolves_paths() {
        let config = Config::from_args(args(&["--input-dir", "/data/aoc", "-y", "2022", "-p", "2", "-q"])).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/data/aoc"));
        assert_eq!(config.year_filter, Some(2022));
        assert_eq!(config.part_filter, Some(2));
        assert!(config.quiet);
        assert!(config.input_file.is_none());
    }

    #[test]
    fn test_single_file_mode() {
        let config = Config::from_args(args(&["puzzle.txt", "-y", "2024", "-d", "1"])).unwrap();
        assert_eq!(config.input_file, Some(PathBuf::from("puzzle.txt")));
    }

    #[test]
    fn test_blank_tag_rejected() {
        let err = Config::from_args(args(&["-t", "bfs, "])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    proptest! {
        #[test]
        fn prop_paths_without_tilde_unchanged(path in "[a-z/._-]{0,24}") {
            prop_assert_eq!(expand_tilde(Path::new(&path)), PathBuf::from(&path));
        }

        #[test]
        fn prop_trimmed_tags_kept_in_order(tags in prop::collection::vec("[a-z0-9]{1,8}", 1..5)) {
            let joined = tags.iter().map(|t| format!(" {t}")).collect::<Vec<_>>().join(",");
            let config = Config::from_args(args(&["-t", joined.as_str()])).unwrap();
            prop_assert_eq!(config.tags, tags);
        }
    }
}

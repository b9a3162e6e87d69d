//! Input parsing helpers
//!
//! Puzzle parsers build their values with `anyhow` and convert once at the
//! `AocParser::parse` boundary with [`invalid`].

use std::str::FromStr;

use anyhow::{Context, anyhow};
use aoc_solver::ParseError;

/// Converts an `anyhow` chain into [`ParseError::InvalidFormat`].
pub fn invalid(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{err:#}"))
}

/// Parses a single trimmed token.
pub fn number<T>(token: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let token = token.trim();
    token
        .parse()
        .with_context(|| format!("invalid number {token:?}"))
}

/// Parses every token between `separator`s, ignoring empty tokens.
pub fn separated<T>(text: &str, separator: char) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.split(separator)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(number)
        .collect()
}

/// Applies `f` to every non-empty line, tagging failures with the 1-based line number.
pub fn lines_with<'a, T, F>(input: &'a str, mut f: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| f(line.trim_end()).map_err(|e| anyhow!("(line {}) {e:#}", idx + 1)))
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(invalid)
}

/// Fails with [`ParseError::MissingData`] when the input has no content.
pub fn non_empty(input: &str) -> Result<&str, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ParseError::MissingData("input is empty".into()))
    } else {
        Ok(trimmed)
    }
}

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::non_empty;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 9, tags = ["string", "recursion"])]
pub struct Solver;

/// Parses `(AxB)` at the start of `data` into `(span, repeat, marker_len)`.
fn marker(data: &str) -> Option<(usize, u64, usize)> {
    let close = data.find(')')?;
    let (span, repeat) = data[1..close].split_once('x')?;
    Some((span.parse().ok()?, repeat.parse().ok()?, close + 1))
}

/// Length after expanding markers; nested markers expand too when `recursive`.
pub fn decompressed_len(data: &str, recursive: bool) -> u64 {
    let mut len = 0;
    let mut i = 0;
    while i < data.len() {
        let found = if data[i..].starts_with('(') {
            marker(&data[i..])
        } else {
            None
        };
        if let Some((span, repeat, marker_len)) = found {
            let start = i + marker_len;
            let stop = start.saturating_add(span).min(data.len());
            let chunk = &data[start..stop];
            let chunk_len = if recursive {
                decompressed_len(chunk, true)
            } else {
                chunk.len() as u64
            };
            len = repeat.saturating_mul(chunk_len).saturating_add(len);
            i = stop;
        } else {
            len += 1;
            i += 1;
        }
    }
    len
}

impl AocParser for Solver {
    type SharedData<'a> = String;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let data: String = non_empty(input)?.chars().filter(|c| !c.is_whitespace()).collect();
        if !data.is_ascii() {
            return Err(ParseError::InvalidFormat("compressed data must be ASCII".into()));
        }
        Ok(data)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(decompressed_len(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(decompressed_len(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_level() {
        for (input, expected) in [
            ("ADVENT", 6),
            ("A(1x5)BC", 7),
            ("(3x3)XYZ", 9),
            ("A(2x2)BCD(2x2)EFG", 11),
            ("(6x1)(1x3)A", 6),
            ("X(8x2)(3x3)ABCY", 18),
        ] {
            assert_eq!(decompressed_len(input, false), expected, "{input}");
        }
    }

    #[test]
    fn test_recursive() {
        assert_eq!(decompressed_len("(3x3)XYZ", true), 9);
        assert_eq!(decompressed_len("X(8x2)(3x3)ABCY", true), 20);
        assert_eq!(decompressed_len("(27x12)(20x12)(13x14)(7x10)(1x12)A", true), 241920);
        assert_eq!(
            decompressed_len("(25x3)(3x3)ABC(2x3)XY(5x2)PQRSTX(18x9)(3x2)TWO(5x7)SEVEN", true),
            445
        );
    }

    #[test]
    fn test_unclosed_paren_is_literal() {
        assert_eq!(decompressed_len("A(1x", false), 4);
    }

    #[test]
    fn test_oversized_span_clamps_to_end() {
        assert_eq!(decompressed_len("(18446744073709551615x2)AB", false), 4);
        assert_eq!(decompressed_len("(18446744073709551615x2)AB", true), 4);
    }
}

//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use itertools::Itertools;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match &result.answer {
            Ok(_) => println!("{}", self.format_result(result)),
            Err(_) => eprintln!("{}", self.format_result(result)),
        }
    }

    fn format_result(&self, result: &SolverResult) -> String {
        if self.quiet {
            return match &result.answer {
                Ok(answer) => format!("{} {} {} {}", result.year, result.day, result.part, answer),
                Err(e) => format!("{} {} {} error: {}", result.year, result.day, result.part, e),
            };
        }

        let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
        match &result.answer {
            Ok(answer) => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                format!(
                    "{}: {} ({}solve: {})",
                    prefix,
                    answer,
                    parse_timing,
                    format_duration(result.solve_duration)
                )
            }
            Err(e) => format!("{}: Error - {}", prefix, e),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        println!();
        for line in self.summary_lines(results) {
            println!("{line}");
        }
    }

    fn summary_lines(&self, results: &[SolverResult]) -> Vec<String> {
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;

        // Parse time is shared by the parts of a day; count it once.
        let total_parse_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .dedup_by(|a, b| (a.year, a.day) == (b.year, b.day))
            .filter_map(|r| r.parse_duration)
            .sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        let mut lines = vec![
            "--- Summary ---".to_string(),
            format!("Parts: {} solved, {} failed", successes, failures),
        ];
        for (year, group) in &results.iter().chunk_by(|r| r.year) {
            let (ok, total) = group.fold((0, 0), |(ok, total), r| (ok + r.answer.is_ok() as usize, total + 1));
            lines.push(format!("  {year}: {ok}/{total}"));
        }
        lines.push(format!("Total parse time: {}", format_duration(total_parse_time)));
        lines.push(format!("Total solve time: {}", format_duration(total_solve_time)));
        lines.push(format!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        ));
        lines
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    format_micros(micros as u128)
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::{InputStore, read_input};
use aoc_solver::{DynSolver, SolveError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use log::debug;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Result from a single solver part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Parse time of the day's input, when parsing succeeded
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected puzzle in (year, day, part) order on the calling thread
pub struct Executor {
    registry: SolverRegistry,
    store: InputStore,
    input_file: Option<PathBuf>,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            store: InputStore::new(config.input_dir.clone()),
            input_file: config.input_file.clone(),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .filter_map(|info| {
                Some(WorkItem {
                    year: info.year,
                    day: info.day,
                    parts: self.filter_parts(info.parts)?,
                })
            })
            .collect()
    }

    /// An explicit input file must select a registered puzzle and part
    pub fn check_explicit_selection(&self, work_items: &[WorkItem]) -> Result<(), SolverError> {
        if self.input_file.is_none() || !work_items.is_empty() {
            return Ok(());
        }
        let (Some(year), Some(day)) = (self.year_filter, self.day_filter) else {
            return Ok(());
        };
        match (self.registry.storage().get_info(year, day), self.part_filter) {
            (None, _) => Err(SolverError::NotFound(year, day)),
            (Some(_), Some(part)) => Err(SolveError::PartOutOfRange(part).into()),
            (Some(_), None) => Ok(()),
        }
    }

    /// Parts to run given the part filter and the solver's part count
    fn filter_parts(&self, max_parts: u8) -> Option<RangeInclusive<u8>> {
        match self.part_filter {
            Some(p) if p <= max_parts => Some(p..=p),
            Some(_) => None,
            None => Some(1..=max_parts),
        }
    }

    /// Execute all work items, handing each part's result to `sink` as it completes
    pub fn execute<F>(&self, work_items: &[WorkItem], mut sink: F)
    where
        F: FnMut(SolverResult),
    {
        for work in work_items {
            self.run_work_item(work, &mut sink);
        }
    }

    fn load_input(&self, year: u16, day: u8) -> Result<String, ExecutorError> {
        match &self.input_file {
            Some(path) => read_input(year, day, path),
            None => self.store.read(year, day),
        }
    }

    fn run_work_item<F>(&self, work: &WorkItem, sink: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);
        let input = match self.load_input(year, day) {
            Ok(input) => input,
            Err(e) => return fail_all(work, &e.into(), sink),
        };
        debug!("{year} day {day}: read {} bytes of input", input.len());

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => return fail_all(work, &ExecutorError::from(e).into(), sink),
        };
        let parse_duration = solver.parse_duration();
        for part in work.parts.clone() {
            sink(solve_part(year, day, part, parse_duration, &mut *solver));
        }
    }
}

/// Report one shared failure for every selected part of a day
fn fail_all<F>(work: &WorkItem, error: &ArcExecutorError, sink: &mut F)
where
    F: FnMut(SolverResult),
{
    for part in work.parts.clone() {
        sink(SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(error.clone()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        });
    }
}

fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    parse_duration: TimeDelta,
    solver: &mut dyn DynSolver,
) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => (Ok(result.answer.clone()), result.duration()),
        Err(e) => (
            Err(ExecutorError::Solver(e.into()).into()),
            TimeDelta::zero(),
        ),
    };
    SolverResult {
        year,
        day,
        part,
        answer,
        parse_duration: Some(parse_duration),
        solve_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolverRegistryBuilder};
    use std::fs;
    use tempfile::TempDir;

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct Sum;

    impl AocParser for Sum {
        type SharedData<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .split_whitespace()
                .map(|t| t.parse().map_err(|_| ParseError::InvalidFormat(t.into())))
                .collect()
        }
    }

    impl PartSolver<1> for Sum {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.iter().sum::<i64>().to_string())
        }
    }

    impl PartSolver<2> for Sum {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            shared
                .iter()
                .max()
                .map(|m| m.to_string())
                .ok_or_else(|| SolveError::no_solution("no numbers"))
        }
    }

    fn executor(dir: &TempDir, part_filter: Option<u8>) -> Executor {
        let registry = SolverRegistryBuilder::new()
            .register::<Sum>(2020, 1)
            .unwrap()
            .register::<Sum>(2020, 2)
            .unwrap()
            .register::<Sum>(2021, 1)
            .unwrap()
            .build();
        let config = Config {
            year_filter: None,
            day_filter: None,
            part_filter,
            tags: Vec::new(),
            input_dir: dir.path().to_path_buf(),
            input_file: None,
            quiet: false,
        };
        Executor::new(registry, &config)
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let mut results = Vec::new();
        executor.execute(&executor.collect_work_items(), |r| results.push(r));
        results
    }

    #[test]
    fn test_work_items_follow_filters() {
        let dir = TempDir::new().unwrap();
        let mut exec = executor(&dir, Some(2));
        exec.year_filter = Some(2020);
        let items = exec.collect_work_items();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|w| w.year == 2020 && w.parts == (2..=2)));
    }

    #[test]
    fn test_results_in_order() {
        let dir = TempDir::new().unwrap();
        for day in [1, 2] {
            fs::write(dir.path().join(format!("2020_day{day:02}.txt")), "3 4 5").unwrap();
        }
        fs::write(dir.path().join("2021_day01.txt"), "10").unwrap();

        let results = run(&executor(&dir, None));
        let keys: Vec<_> = results.iter().map(|r| (r.year, r.day, r.part)).collect();
        assert_eq!(keys, vec![(2020, 1, 1), (2020, 1, 2), (2020, 2, 1), (2020, 2, 2), (2021, 1, 1), (2021, 1, 2)]);
        assert_eq!(results[0].answer.as_deref().ok(), Some("12"));
        assert_eq!(results[1].answer.as_deref().ok(), Some("5"));
        assert!(results.iter().all(|r| r.parse_duration.is_some()));
    }

    #[test]
    fn test_missing_input_fails_each_part_without_stopping() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("2021_day01.txt"), "7").unwrap();

        let results = run(&executor(&dir, None));
        assert_eq!(results.len(), 6);
        for r in &results[..4] {
            let err = r.answer.as_ref().unwrap_err();
            assert!(matches!(err.inner(), ExecutorError::InputMissing { .. }));
        }
        assert_eq!(results[4].answer.as_deref().ok(), Some("7"));
    }

    #[test]
    fn test_parse_failure_is_shared_between_parts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("2021_day01.txt"), "1 x").unwrap();
        let mut exec = executor(&dir, None);
        exec.year_filter = Some(2021);

        let results = run(&exec);
        assert_eq!(results.len(), 2);
        let errors: Vec<_> = results.iter().map(|r| r.answer.as_ref().unwrap_err().to_string()).collect();
        assert_eq!(errors[0], errors[1]);
        assert!(errors[0].contains("Invalid format: x"));
    }

    #[test]
    fn test_no_solution_reported_per_part() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("2021_day01.txt"), "\n").unwrap();
        let mut exec = executor(&dir, None);
        exec.year_filter = Some(2021);

        let results = run(&exec);
        assert_eq!(results[0].answer.as_deref().ok(), Some("0"));
        assert!(results[1].answer.as_ref().unwrap_err().to_string().contains("No solution"));
    }

    #[test]
    fn test_explicit_input_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("custom.txt");
        fs::write(&file, "1 2").unwrap();
        let mut exec = executor(&dir, Some(1));
        exec.input_file = Some(file);
        exec.year_filter = Some(2020);
        exec.day_filter = Some(2);

        let results = run(&exec);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].answer.as_deref().ok(), Some("3"));
    }

    #[test]
    fn test_explicit_input_for_unknown_puzzle_fails() {
        let dir = TempDir::new().unwrap();
        let mut exec = executor(&dir, None);
        exec.input_file = Some(dir.path().join("in.txt"));
        exec.year_filter = Some(2015);
        exec.day_filter = Some(4);

        let items = exec.collect_work_items();
        assert!(items.is_empty());
        assert!(matches!(
            exec.check_explicit_selection(&items),
            Err(SolverError::NotFound(2015, 4))
        ));
    }

    #[test]
    fn test_explicit_input_for_missing_part_fails() {
        let dir = TempDir::new().unwrap();
        let mut exec = executor(&dir, Some(3));
        exec.input_file = Some(dir.path().join("in.txt"));
        exec.year_filter = Some(2020);
        exec.day_filter = Some(1);

        let items = exec.collect_work_items();
        assert!(matches!(
            exec.check_explicit_selection(&items),
            Err(SolverError::SolveError(SolveError::PartOutOfRange(3)))
        ));
    }

    #[test]
    fn test_empty_filter_without_input_file_is_fine() {
        let dir = TempDir::new().unwrap();
        let mut exec = executor(&dir, None);
        exec.year_filter = Some(2019);
        let items = exec.collect_work_items();
        assert!(items.is_empty());
        assert!(exec.check_explicit_selection(&items).is_ok());
    }
}

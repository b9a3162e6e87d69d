use aoc_solver::{
    AocParser, DynSolver, ParseError, RegistrationError, SolveError, Solver, SolverError,
    SolverRegistryBuilder,
};

struct Lines;

impl AocParser for Lines {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("empty input".into()));
        }
        Ok(input.lines().collect())
    }
}

impl Solver for Lines {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Vec<&str>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.len().to_string()),
            2 => shared
                .iter()
                .find(|l| l.starts_with('#'))
                .map(|l| l.to_string())
                .ok_or_else(|| SolveError::no_solution("no comment line")),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let result = SolverRegistryBuilder::new()
        .register::<Lines>(2016, 3)
        .and_then(|b| b.register::<Lines>(2016, 3));
    assert!(matches!(result, Err(RegistrationError::DuplicateSolver(2016, 3))));
}

#[test]
fn test_out_of_range_registration_is_rejected() {
    let result = SolverRegistryBuilder::new().register::<Lines>(2015, 26);
    assert_eq!(result.err(), Some(RegistrationError::InvalidYearDay(2015, 26)));

    let result = SolverRegistryBuilder::new().register::<Lines>(1999, 1);
    assert_eq!(result.err(), Some(RegistrationError::InvalidYearDay(1999, 1)));
}

#[test]
fn test_lookup_errors() {
    let registry = SolverRegistryBuilder::new()
        .register::<Lines>(2016, 3)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2016, 4, "x"),
        Err(SolverError::NotFound(2016, 4))
    ));
    assert!(matches!(
        registry.create_solver(2016, 0, "x"),
        Err(SolverError::InvalidYearDay(2016, 0))
    ));
    assert!(matches!(
        registry.create_solver(2016, 3, ""),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_instance_reports_metadata_and_timing() {
    let registry = SolverRegistryBuilder::new()
        .register::<Lines>(2016, 3)
        .unwrap()
        .build();
    let mut solver: Box<dyn DynSolver> = registry.create_solver(2016, 3, "a\n# b\nc").unwrap();

    assert_eq!((solver.year(), solver.day(), solver.parts()), (2016, 3, 2));
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let result = solver.solve(1).unwrap();
    assert_eq!(result.answer, "3");
    assert!(result.duration() >= chrono::TimeDelta::zero());
    assert_eq!(solver.solve(2).unwrap().answer, "# b");
}

#[test]
fn test_no_solution_is_distinct_from_an_answer() {
    let registry = SolverRegistryBuilder::new()
        .register::<Lines>(2016, 3)
        .unwrap()
        .build();
    let mut solver = registry.create_solver(2016, 3, "a\nb").unwrap();

    assert!(matches!(solver.solve(2), Err(SolveError::NoSolution(_))));
}

#[test]
fn test_iter_info_is_ordered() {
    let registry = SolverRegistryBuilder::new()
        .register::<Lines>(2020, 1)
        .unwrap()
        .register::<Lines>(2015, 7)
        .unwrap()
        .register::<Lines>(2015, 2)
        .unwrap()
        .build();

    let keys: Vec<_> = registry
        .storage()
        .iter_info()
        .map(|info| (info.year, info.day, info.parts))
        .collect();
    assert_eq!(keys, vec![(2015, 2, 2), (2015, 7, 2), (2020, 1, 2)]);
    assert_eq!(registry.storage().len(), 3);
}

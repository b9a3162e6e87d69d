//! Local store of puzzle inputs

use crate::error::ExecutorError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory of puzzle inputs
///
/// Layout: `{dir}/{year}_day{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the input for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{year}_day{day:02}.txt"))
    }

    /// Read the stored input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, ExecutorError> {
        read_input(year, day, &self.input_path(year, day))
    }
}

/// Read an input file, telling a missing file apart from an unreadable one
pub fn read_input(year: u16, day: u8, path: &Path) -> Result<String, ExecutorError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ExecutorError::InputMissing {
            year,
            day,
            path: path.to_path_buf(),
        },
        _ => ExecutorError::InputRead {
            year,
            day,
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("/inputs"));
        assert_eq!(store.input_path(2024, 1), PathBuf::from("/inputs/2024_day01.txt"));
        assert_eq!(store.input_path(2023, 25), PathBuf::from("/inputs/2023_day25.txt"));
    }

    #[test]
    fn test_read_stored_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::write(store.input_path(2022, 4), "2-4,6-8\n").unwrap();
        assert_eq!(store.read(2022, 4).unwrap(), "2-4,6-8\n");
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        match store.read(2015, 3) {
            Err(ExecutorError::InputMissing { year, day, path }) => {
                assert_eq!((year, day), (2015, 3));
                assert!(path.ends_with("2015_day03.txt"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir(store.input_path(2016, 1)).unwrap();
        assert!(matches!(store.read(2016, 1), Err(ExecutorError::InputRead { .. })));
    }
}

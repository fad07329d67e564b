//! Resolution of command-line arguments to inputs
//!
//! Plain arguments are taken as paths. Arguments containing glob
//! metacharacters are expanded. Problems are collected per argument so the
//! remaining inputs can still be processed.

use crate::error::CliError;
use glob::glob;
use std::fmt;
use std::path::{Path, PathBuf};

/// A source of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// A regular file
    File(PathBuf),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Inputs found for a set of arguments, plus the arguments that failed
#[derive(Debug, Default)]
pub struct Resolution {
    /// Inputs to process, in argument order
    pub inputs: Vec<Input>,
    /// One error per argument that yielded nothing readable
    pub failures: Vec<CliError>,
}

/// Whether an argument should be expanded as a glob pattern
pub fn is_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

/// Resolve arguments to inputs; no arguments means standard input
pub fn resolve_inputs(args: &[String]) -> Resolution {
    let mut resolution = Resolution::default();

    if args.is_empty() {
        resolution.inputs.push(Input::Stdin);
        return resolution;
    }

    for arg in args {
        if is_pattern(arg) && !Path::new(arg).is_file() {
            expand_pattern(arg, &mut resolution);
        } else if Path::new(arg).is_file() {
            resolution.inputs.push(Input::File(PathBuf::from(arg)));
        } else {
            resolution.failures.push(CliError::NotAFile(arg.clone()));
        }
    }

    resolution
}

fn expand_pattern(pattern: &str, resolution: &mut Resolution) {
    let paths = match glob(pattern) {
        Ok(paths) => paths,
        Err(error) => {
            resolution
                .failures
                .push(CliError::InvalidPattern(format!("{pattern} ({error})")));
            return;
        }
    };

    let mut files: Vec<PathBuf> = paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(error) => {
                log::warn!("Error resolving pattern {pattern}: {error}");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    if files.is_empty() {
        resolution.failures.push(CliError::NoMatch(pattern.to_string()));
        return;
    }

    files.sort();
    files.dedup();
    log::debug!("Pattern {pattern} matched {} file(s)", files.len());
    resolution.inputs.extend(files.into_iter().map(Input::File));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_arguments_reads_stdin() {
        let resolution = resolve_inputs(&[]);
        assert_eq!(resolution.inputs, vec![Input::Stdin]);
        assert!(resolution.failures.is_empty());
    }

    #[test]
    fn test_plain_paths_keep_order() {
        let temp_dir = TempDir::new().unwrap();
        let b = temp_dir.path().join("b.txt");
        let a = temp_dir.path().join("a.txt");
        fs::write(&b, "b").unwrap();
        fs::write(&a, "a").unwrap();

        let args = vec![b.display().to_string(), a.display().to_string()];
        let resolution = resolve_inputs(&args);
        assert_eq!(resolution.inputs, vec![Input::File(b), Input::File(a)]);
    }

    #[test]
    fn test_missing_file_and_directory_fail() {
        let temp_dir = TempDir::new().unwrap();
        let args = vec![
            temp_dir.path().join("missing.txt").display().to_string(),
            temp_dir.path().display().to_string(),
        ];

        let resolution = resolve_inputs(&args);
        assert!(resolution.inputs.is_empty());
        assert_eq!(resolution.failures.len(), 2);
        assert!(matches!(resolution.failures[0], CliError::NotAFile(_)));
    }

    #[test]
    fn test_pattern_expansion() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("one.txt"), "1").unwrap();
        fs::write(temp_dir.path().join("two.txt"), "2").unwrap();
        fs::write(temp_dir.path().join("skip.md"), "x").unwrap();

        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let resolution = resolve_inputs(&[pattern]);
        assert_eq!(resolution.inputs.len(), 2);
        assert!(resolution.failures.is_empty());
    }

    #[test]
    fn test_pattern_without_match() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = temp_dir.path().join("*.none").display().to_string();

        let resolution = resolve_inputs(&[pattern]);
        assert!(resolution.inputs.is_empty());
        assert!(matches!(resolution.failures[0], CliError::NoMatch(_)));
    }

    #[test]
    fn test_is_pattern() {
        assert!(is_pattern("*.txt"));
        assert!(is_pattern("file?.txt"));
        assert!(is_pattern("[ab].txt"));
        assert!(!is_pattern("plain.txt"));
    }
}

//! Input pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::fmt;
use std::path::PathBuf;

/// Pattern naming standard input
pub const STDIN_PATTERN: &str = "-";

/// Where words are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve input patterns to sources, in the order given
///
/// `-` stands for standard input. Files matched by one glob pattern are
/// sorted; a pattern that matches nothing is an error.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            sources.push(InputSource::Stdin);
            continue;
        }

        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        let mut files = Vec::new();
        for path_result in paths {
            let path = path_result.map_err(|e| CliError::FileNotFound(e.to_string()))?;
            if path.is_file() {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        files.sort();
        sources.extend(files.into_iter().map(InputSource::File));
    }

    sources.dedup();
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_stdin_marker() {
        let sources = resolve_patterns(&["-".to_string()]).unwrap();
        assert_eq!(sources, vec![InputSource::Stdin]);
        assert_eq!(sources[0].to_string(), "<stdin>");
    }

    #[test]
    fn test_glob_matches_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("c.tsv"), "").unwrap();

        let pattern = dir.path().join("*.txt").display().to_string();
        let sources = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(
            sources,
            vec![
                InputSource::File(dir.path().join("a.txt")),
                InputSource::File(dir.path().join("b.txt")),
            ]
        );
    }

    #[test]
    fn test_unmatched_pattern_is_error() {
        let err = resolve_patterns(&["/nonexistent/*.words".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}

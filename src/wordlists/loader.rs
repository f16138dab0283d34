//! Word list loading utilities

use std::fs;
use std::io;
use std::path::Path;

use crate::core::normalize;

/// Load words from a file, one per line
///
/// Lines are normalized to lowercase letters; blank lines and lines with
/// no letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use lunamini::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let word = normalize(line);
            if word.is_empty() { None } else { Some(word) }
        })
        .collect();

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_and_normalizes_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Garden").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  rained  ").unwrap();
        writeln!(file, "123").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["garden".to_string(), "rained".to_string()]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/no/such/file.txt").is_err());
    }
}

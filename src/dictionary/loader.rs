use std::fs;
use std::path::Path;

use super::error::DictionaryError;

//─────────────────────────────────────────────────────────────────────────────

/// Loads the words of a dictionary file, one word per line.
///
/// Every line is trimmed and lowercased; blank lines are skipped. Duplicates
/// are kept here and collapse later when the graph is built.
pub fn load_words_from_file(file_path: &Path) -> Result<Vec<String>, DictionaryError> {
    let file_content = fs::read_to_string(file_path)
        .map_err(|e| DictionaryError::ReadFile(file_path.display().to_string(), e))?;
    Ok(parse_words(&file_content))
}

/// Splits dictionary text into normalized words.
pub fn parse_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_words_normalizes_lines() {
        let words = parse_words("Cat\n  cot \r\nDOG\n\n   \ncog");
        assert_eq!(words, vec!["cat", "cot", "dog", "cog"]);
    }

    #[test]
    fn test_parse_words_keeps_duplicates() {
        assert_eq!(parse_words("cat\nCAT\ncat"), vec!["cat", "cat", "cat"]);
    }

    #[test]
    fn test_parse_words_empty_input() {
        assert!(parse_words("").is_empty());
        assert!(parse_words("\n\n").is_empty());
    }

    #[test]
    fn test_load_words_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file, "Cot").unwrap();
        writeln!(file, " dog ").unwrap();
        file.flush().unwrap();

        let words = load_words_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["cat", "cot", "dog"]);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = load_words_from_file(&missing).unwrap_err();
        assert!(matches!(err, DictionaryError::ReadFile(ref path, _) if path.ends_with("missing.txt")));
        assert!(err.to_string().starts_with("Failed to read dictionary"));
    }
}

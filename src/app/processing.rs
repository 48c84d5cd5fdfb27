//! The three pipeline stages of a word ladder query: loading the
//! dictionary, building the one-edit graph and enumerating shortest ladders.
//! Each stage reports its progress through the verbose log.

use std::path::Path;

use super::error::AppError;
use super::{verbose_eprintln, verbose_println};
use crate::dictionary;
use crate::graph::WordGraph;
use crate::ladder::{LadderExplorer, Path as Ladder};

/// Loads and normalizes the dictionary words.
///
/// # Errors
/// Returns `AppError::Dictionary` if the file cannot be read.
pub fn load_dictionary(dictionary_path: &Path, quiet_mode: bool) -> Result<Vec<String>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading dictionary...");
    let words = dictionary::load_words_from_file(dictionary_path)?;
    if words.is_empty() {
        verbose_println!(quiet_mode, "   => Dictionary contains no words.");
    } else {
        verbose_println!(quiet_mode, "   => Read {} word(s).", words.len());
    }
    Ok(words)
}

/// Builds the one-edit adjacency graph over `words`.
pub fn build_word_graph(words: &[String], quiet_mode: bool) -> WordGraph {
    verbose_println!(quiet_mode, "\n[STEP 2] Building word graph...");
    let graph = WordGraph::build(words);
    verbose_println!(
        quiet_mode,
        "   => {} distinct word(s), {} edge(s), {} bucket(s).",
        graph.len(),
        graph.edge_count(),
        graph.bucket_count()
    );
    if let Some((key, size)) = graph.largest_bucket() {
        verbose_println!(quiet_mode, "   => Largest bucket: {} ({} words).", key, size);
    }
    graph
}

/// Enumerates every shortest ladder from `start` to `target`.
///
/// A word missing from the dictionary is an ordinary "no solution" outcome:
/// it is logged and an empty list is returned.
///
/// # Errors
/// Returns `AppError::Ladder` only if the search itself rejects a word that
/// passed the presence check.
pub fn find_ladders(
    graph: &WordGraph,
    start: &str,
    target: &str,
    quiet_mode: bool,
) -> Result<Vec<Ladder>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 3] Searching ladders {} --> {}...", start, target);
    for word in [start, target] {
        if !graph.contains(word) {
            verbose_eprintln!(quiet_mode, "   Word '{}' is not in the dictionary.", word);
            return Ok(Vec::new());
        }
    }

    let ladders = LadderExplorer::all_shortest_paths(graph, start, target)?;
    match ladders.first() {
        Some(first) => verbose_println!(
            quiet_mode,
            "   => Found {} ladder(s) of {} step(s).",
            ladders.len(),
            first.len() - 1
        ),
        None => verbose_println!(quiet_mode, "   => {} is unreachable from {}.", target, start),
    }
    Ok(ladders)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every test runs quiet so nothing is written to a shared global logger.

    #[test]
    fn test_pipeline_finds_both_ladders() {
        let words: Vec<String> = ["cat", "cot", "cog", "dog", "dot", "cat"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let graph = build_word_graph(&words, true);
        assert_eq!(graph.len(), 5);
        let ladders = find_ladders(&graph, "cat", "dog", true).unwrap();
        assert_eq!(ladders.len(), 2);
        assert!(ladders.iter().all(|ladder| ladder.len() == 4));
    }

    #[test]
    fn test_missing_words_mean_no_ladder() {
        let graph = build_word_graph(&["cat".to_string(), "cot".to_string()], true);
        assert!(find_ladders(&graph, "cow", "cot", true).unwrap().is_empty());
        assert!(find_ladders(&graph, "cat", "cow", true).unwrap().is_empty());
    }

    #[test]
    fn test_load_dictionary_reports_read_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dictionary(&dir.path().join("missing.txt"), true).unwrap_err();
        assert!(matches!(err, AppError::Dictionary(_)));
    }
}

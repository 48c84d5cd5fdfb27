//! Renders search results as the plain-text report printed by the binary.
//!
//! A solved query looks like:
//!
//! ```text
//! cat --> dog
//! the minimum number of the steps: 3
//! the number of solutions with the minimal steps: 2
//! [cat (0), cot (1), cog (2), dog (3)]
//! [cat (0), cot (1), dot (2), dog (3)]
//! ```
//!
//! and an unsolved one prints the header followed by
//! `There is no solution in this case`.

use std::fmt::Write;

use crate::ladder::Path;

/// Renders `paths` if there are any, the no-solution report otherwise.
pub fn render_outcome(start: &str, target: &str, paths: &[Path]) -> String {
    if paths.is_empty() {
        render_no_solution(start, target)
    } else {
        render_solutions(start, target, paths)
    }
}

/// Renders the report for a solved query. `paths` must all have the same
/// (minimal) length; the step count is taken from the first one.
pub fn render_solutions(start: &str, target: &str, paths: &[Path]) -> String {
    let steps = paths.first().map_or(0, |path| path.len().saturating_sub(1));

    let mut report = String::with_capacity(128 + paths.len() * 64);
    // Writing into a String cannot fail.
    let _ = writeln!(report, "{} --> {}", start, target);
    let _ = writeln!(report, "the minimum number of the steps: {}", steps);
    let _ = writeln!(
        report,
        "the number of solutions with the minimal steps: {}",
        paths.len()
    );
    for path in paths {
        report.push_str(&format_path(path));
        report.push('\n');
    }
    report
}

/// Renders the report for a query without any ladder.
pub fn render_no_solution(start: &str, target: &str) -> String {
    format!("{} --> {}\nThere is no solution in this case\n", start, target)
}

/// Formats one ladder as `[w0 (0), w1 (1), ...]`.
fn format_path(path: &Path) -> String {
    let steps = path
        .iter()
        .enumerate()
        .map(|(i, word)| format!("{} ({})", word, i))
        .collect::<Vec<String>>()
        .join(", ");
    format!("[{}]", steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn ladder(words: &[&str]) -> Path {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_render_solutions() {
        let paths = vec![
            ladder(&["cat", "cot", "cog", "dog"]),
            ladder(&["cat", "cot", "dot", "dog"]),
        ];
        let expected = indoc! {"
            cat --> dog
            the minimum number of the steps: 3
            the number of solutions with the minimal steps: 2
            [cat (0), cot (1), cog (2), dog (3)]
            [cat (0), cot (1), dot (2), dog (3)]
        "};
        assert_eq!(render_solutions("cat", "dog", &paths), expected);
        assert_eq!(render_outcome("cat", "dog", &paths), expected);
    }

    #[test]
    fn test_render_single_word_ladder() {
        let expected = indoc! {"
            cat --> cat
            the minimum number of the steps: 0
            the number of solutions with the minimal steps: 1
            [cat (0)]
        "};
        assert_eq!(render_outcome("cat", "cat", &[ladder(&["cat"])]), expected);
    }

    #[test]
    fn test_render_no_solution() {
        let expected = indoc! {"
            cat --> dog
            There is no solution in this case
        "};
        assert_eq!(render_no_solution("cat", "dog"), expected);
        assert_eq!(render_outcome("cat", "dog", &[]), expected);
    }
}

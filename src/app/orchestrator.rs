//! Main application orchestrator.
//!
//! Coordinates one word ladder query:
//! 1. Initializes verbose logging unless running quiet.
//! 2. Validates the dictionary path.
//! 3. Loads the dictionary and builds the word graph.
//! 4. Enumerates every shortest ladder between the normalized start and
//!    target words. A word missing from the dictionary yields no ladders.
//! 5. Renders the report and prints it, or writes it to `--output`.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use crate::report;

/// Runs the application for parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for unrecoverable failures: an invalid or unreadable
/// dictionary, or a failure writing the output file. An unsolvable query is
/// not an error; it produces the no-solution report.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Keep going without the verbose log.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = run_query(&cli);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }

    // Final flush of the verbose log, on success and on error.
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                cli.log_file.display(),
                e
            );
        }
    }
    result
}

fn run_query(cli: &Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    let start = cli.start_word();
    let target = cli.target_word();

    file_handler::validate_dictionary_file(&cli.dictionary, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Dictionary: {}", cli.dictionary.display());
    verbose_println!(quiet_mode, "Query: {} --> {}", start, target);
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    let words = processing::load_dictionary(&cli.dictionary, quiet_mode)?;
    let graph = processing::build_word_graph(&words, quiet_mode);
    let ladders = processing::find_ladders(&graph, &start, &target, quiet_mode)?;

    let rendered = report::render_outcome(&start, &target, &ladders);
    match &cli.output {
        Some(output_path) => {
            file_handler::write_content_to_file(output_path, &rendered)?;
            verbose_println!(
                quiet_mode,
                "\n[INFO] Result written to {}",
                output_path.display()
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

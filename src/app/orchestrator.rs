//! Main application orchestrator.
//!
//! Coordinates the entire route search process:
//! 1. Initializes logging.
//! 2. Validates the input map file and extracts a map name.
//! 3. Loads the weighted graph from the map file.
//! 4. Initializes a writer for per-pair route details.
//! 5. Iterates over every node pair (each start with every later node as
//!    target, in declaration order), delegating each search to
//!    `processing::process_single_pair`. The main verbose log
//!    (`pathfinder.log`) is flushed after each start node if not in quiet mode.
//! 6. Aggregates the rendered report sections.
//! 7. Prints the final report to stdout and, when requested, writes it to
//!    an output file.
//! 8. Provides summary messages to the user.
//!
//! Adheres to command-line arguments like `quiet_mode` for controlling verbosity.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use std::io::Write; // For BufWriter::flush
use std::path::Path;

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if any unrecoverable error occurs during the process,
/// such as critical I/O failures or a map that fails validation.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let map_file_path = &cli.map_file;
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode.
    // This setup is done once.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger("pathfinder.log") {
            // If logger init fails, print to stderr directly. The application
            // continues, but verbose file logging will be unavailable.
            eprintln!(
                "Warning: Failed to initialize verbose logger (pathfinder.log): {}. Verbose file logging will be unavailable.",
                e
            );
        } else {
            // This message goes to the newly initialized log file.
            verbose_println!(quiet_mode, "Verbose logging initialized to pathfinder.log");
            if let Err(e) = logger::flush_global_logger() {
                verbose_eprintln!(
                    quiet_mode,
                    "[WARNING] Failed to flush pathfinder.log after initialization: {}",
                    e
                );
            }
        }
    }

    // Validate the map file and get its display name. This is an early check.
    let map_name = file_handler::validate_map_file_and_get_name(map_file_path, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Processing Map: {}", map_file_path.display());
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    // Load the graph from the map file.
    let graph = processing::load_map(map_file_path, quiet_mode)?;

    if graph.node_count() < 2 {
        // A single node has no pairs to search.
        if quiet_mode {
            println!("Done. Map '{}' has no node pairs to search.", map_name);
        } else {
            verbose_println!(
                quiet_mode,
                "\n[INFO] Map '{}' has no node pairs to search.",
                map_name
            );
            if let Err(e) = logger::flush_global_logger() {
                eprintln!(
                    "[WARNING] Failed to perform final flush of pathfinder.log: {}",
                    e
                );
            }
        }
        return Ok(());
    }

    // Collected report sections, in pair order.
    let mut report_sections: Vec<String> = Vec::new();

    // Initialize the detail log writer. This writer is passed to each pair's
    // processing call. The `BufWriter` flushes on drop at the end of `run_app`.
    let detail_log_path = Path::new("route_details.log");
    let mut detail_log_writer = file_handler::init_detail_log_writer(detail_log_path).map_err(|e| {
        verbose_eprintln!(
            quiet_mode,
            "[ERROR] Failed to open route detail log (route_details.log): {}. Route details will not be logged.",
            e
        );
        AppError::Io(e)
    })?;

    // Search every pair: each start node against every later node, in
    // declaration order, so each unordered pair is searched exactly once.
    for start in 0..graph.node_count() {
        for target in (start + 1)..graph.node_count() {
            match processing::process_single_pair(
                &graph,
                start,
                target,
                quiet_mode,
                &mut detail_log_writer, // Pass the shared writer for route details.
            ) {
                Ok(Some(section)) => report_sections.push(section),
                Ok(None) => {}
                Err(e) => {
                    verbose_eprintln!(
                        quiet_mode,
                        "[ERROR] During search of pair '{} -> {}': {}",
                        graph.name(start),
                        graph.name(target),
                        e
                    );
                }
            }
        }
        // Flush the global verbose logger after each start node if not in quiet mode.
        if !quiet_mode {
            if let Err(e) = logger::flush_global_logger() {
                // Log to stderr as pathfinder.log itself might be the one failing.
                eprintln!(
                    "[WARNING] Failed to flush pathfinder.log after start node '{}': {}",
                    graph.name(start),
                    e
                );
            }
        }
    }

    // Explicitly flush the detail log writer after all pairs are processed.
    if let Err(e) = detail_log_writer.flush() {
        verbose_eprintln!(
            quiet_mode,
            "[WARNING] Failed to flush route detail log (route_details.log): {}. Some details might be lost.",
            e
        );
    }

    if !quiet_mode {
        verbose_println!(
            quiet_mode,
            "\n------------------------------------------------------------"
        );
        verbose_println!(quiet_mode, "Pair Processing Complete");
        verbose_println!(
            quiet_mode,
            "------------------------------------------------------------"
        );
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to flush pathfinder.log after pair processing complete message: {}",
                e
            );
        }
    }

    let report = report_sections.concat();

    if report.is_empty() {
        verbose_println!(
            quiet_mode,
            "\n[INFO] No routes found between any node pair of '{}'.",
            map_name
        );
    } else {
        print!("{}", report);

        if let Some(output_path) = &cli.output {
            match file_handler::write_content_to_file(output_path, &report) {
                Ok(_) => {
                    verbose_println!(
                        quiet_mode,
                        "\n[INFO] Report written to {}",
                        output_path.display()
                    );
                }
                Err(e) => {
                    verbose_eprintln!(
                        quiet_mode,
                        "[ERROR] Failed to write report file ({}): {}",
                        output_path.display(),
                        e
                    );
                    // Ensure final flush of pathfinder.log before returning the error.
                    if !quiet_mode {
                        if let Err(flush_err) = logger::flush_global_logger() {
                            eprintln!(
                                "[WARNING] Failed to perform final flush of pathfinder.log on error: {}",
                                flush_err
                            );
                        }
                    }
                    return Err(AppError::Io(e));
                }
            }
        }
    }

    // Final flush of pathfinder.log before exiting successfully.
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of pathfinder.log: {}",
                e
            );
        }
    }

    if quiet_mode {
        println!("Done.");
    } else {
        println!(
            "\nRoute search finished. See 'pathfinder.log' for verbose output and 'route_details.log' for per-pair details."
        );
    }

    Ok(())
}

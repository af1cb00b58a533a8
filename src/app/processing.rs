//! Handles the core logic of searching routes for node pairs.
//!
//! This module loads the map into a graph and runs the branch-and-bound
//! search for one (start, target) pair at a time, logging a per-pair
//! summary to the detail log and rendering the pair's report section.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::graph::{NodeId, WeightedGraph};
use crate::map_loader;
use crate::path::RouteExplorer;
use crate::report::RouteReport;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Loads the weighted graph from the map file.
///
/// # Errors
/// Returns an `AppError` on an unrepresentable path or any map validation
/// failure.
pub fn load_map(map_file_path: &PathBuf, quiet_mode: bool) -> Result<WeightedGraph, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading map file...");
    let map_file_str = map_file_path
        .to_str()
        .ok_or_else(|| AppError::InvalidPath(map_file_path.display().to_string()))?;

    let graph = map_loader::load_map_from_file(map_file_str)?;

    verbose_println!(
        quiet_mode,
        "   => Found {} node(s).",
        graph.node_count()
    );
    Ok(graph)
}

/// Searches one (start, target) pair and renders its report section.
///
/// This involves:
/// 1. Running the branch-and-bound search for the pair.
/// 2. Logging a per-pair summary to the detail log (if not in quiet mode).
/// 3. Formatting the pair's minimum-weight routes as a report section.
///
/// # Returns
/// `Ok(Some(section))` with the rendered report text, or `Ok(None)` when the
/// pair has no route. An `AppError` is returned when the search itself
/// fails; that pair's partial results are discarded.
pub fn process_single_pair(
    graph: &WeightedGraph,
    start: NodeId,
    target: NodeId,
    quiet_mode: bool,
    detail_log_writer: &mut BufWriter<File>,
) -> Result<Option<String>, AppError> {
    verbose_println!(
        quiet_mode,
        "\n------------------------------------------------------------"
    );
    verbose_println!(
        quiet_mode,
        "Pair: {} -> {}",
        graph.name(start),
        graph.name(target)
    );
    verbose_println!(
        quiet_mode,
        "------------------------------------------------------------"
    );

    // Step 2: Branch-and-bound route search
    verbose_println!(quiet_mode, "[STEP 2] Searching minimum-weight routes...");
    let routes = RouteExplorer::search(graph, start, target)?;

    // Log pair details if not in quiet mode
    if !quiet_mode {
        if let Err(e) =
            RouteReport::print_routes_to_writer(graph, start, target, &routes, detail_log_writer)
        {
            verbose_eprintln!(
                quiet_mode,
                "   [ERROR] Failed to write route details for {} -> {}: {}",
                graph.name(start),
                graph.name(target),
                e
            );
            // Continue processing even if detail logging fails, as it's non-critical.
        }
    }

    if routes.is_empty() {
        verbose_println!(quiet_mode, "   => No route found.");
        return Ok(None);
    }
    verbose_println!(
        quiet_mode,
        "   => Found {} route(s) of weight {}.",
        routes.len(),
        routes.min_weight().unwrap_or_default()
    );

    // Step 3: Report rendering
    verbose_println!(quiet_mode, "[STEP 3] Rendering report section...");
    Ok(Some(RouteReport::format_pair(graph, &routes)))
}

use std::collections::HashMap;
use std::fs;

use super::error::MapLoaderError;
use crate::graph::{NodeId, WeightedGraph};

//─────────────────────────────────────────────────────────────────────────────

/// Loads a weighted node map from a file.
pub fn load_map_from_file(file_path: &str) -> Result<WeightedGraph, MapLoaderError> {
    let file_content =
        fs::read_to_string(file_path).map_err(|e| MapLoaderError::ReadFile(file_path.into(), e))?;
    parse_map(&file_content)
}

/// Parses map text into a graph.
///
/// The first line declares the node count; every further line declares one
/// bidirectional link as `<name>-<name>,<length>`. Node ids follow the
/// order of first appearance. The distinct names must match the declared
/// count, no pair may be linked twice, and the sum of all lengths must fit
/// `u32` so that no simple route weight can overflow its `u64` total.
pub fn parse_map(content: &str) -> Result<WeightedGraph, MapLoaderError> {
    let mut lines = content.lines().enumerate();

    let declared = match lines.next() {
        Some((_, first)) => first
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&count| count > 0)
            .ok_or_else(|| MapLoaderError::InvalidNodeCount(first.trim().to_string()))?,
        None => return Err(MapLoaderError::InvalidNodeCount(String::new())),
    };

    let mut names: Vec<String> = Vec::new();
    let mut ids: HashMap<String, NodeId> = HashMap::new();
    let mut links: Vec<(usize, NodeId, NodeId, u32)> = Vec::new();
    let mut total_length: u64 = 0;

    for (index, line) in lines {
        let line_number = index + 1;
        let (from, to, length) =
            parse_link(line).ok_or(MapLoaderError::InvalidLine { line: line_number })?;
        let from_id = intern_name(&mut names, &mut ids, from);
        let to_id = intern_name(&mut names, &mut ids, to);
        total_length = total_length.saturating_add(u64::from(length));
        links.push((line_number, from_id, to_id, length));
    }

    if names.len() != declared {
        return Err(MapLoaderError::NodeCountMismatch {
            declared,
            found: names.len(),
        });
    }
    if total_length > u64::from(u32::MAX) {
        return Err(MapLoaderError::LengthOverflow);
    }

    let mut graph = WeightedGraph::with_nodes(names);
    for (line_number, from_id, to_id, length) in links {
        // add_link fills both directions, so a reversed restatement of an
        // earlier link is caught here as well.
        if graph.weight(from_id, to_id).is_some() {
            return Err(MapLoaderError::DuplicateLink { line: line_number });
        }
        graph.add_link(from_id, to_id, length);
    }
    Ok(graph)
}

/// Splits one link line into its node names and length.
/// Returns `None` for anything malformed, including self-links.
fn parse_link(line: &str) -> Option<(&str, &str, u32)> {
    let (names_part, length_part) = line.split_once(',')?;
    let (from, to) = names_part.split_once('-')?;
    if from.is_empty() || to.is_empty() || from == to || to.contains('-') {
        return None;
    }
    let length = length_part.parse::<u32>().ok()?;
    Some((from, to, length))
}

fn intern_name(names: &mut Vec<String>, ids: &mut HashMap<String, NodeId>, name: &str) -> NodeId {
    if let Some(&id) = ids.get(name) {
        return id;
    }
    let id = names.len();
    names.push(name.to_string());
    ids.insert(name.to_string(), id);
    id
}

// graph module
mod graph;

pub use graph::{NodeId, WeightedGraph};

// accumulator module
mod accumulator;
// error module
mod error;
// explorer module
mod explorer;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path modules.
//─────────────────────────────────────────────────────────────────────────────
pub use accumulator::ShortestRoutes;
pub use error::PathError;
pub use explorer::RouteExplorer;

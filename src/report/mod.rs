// report module
mod report;

pub use report::RouteReport;

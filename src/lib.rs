// Library crate exposing modules for integration tests

pub mod config;
pub mod model;
pub mod probe;
pub mod report;
pub mod scan;
pub mod util;

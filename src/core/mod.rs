pub mod error;
pub mod group;
pub mod model;
pub mod outcome;
pub mod report;
pub mod result;
pub mod utils;

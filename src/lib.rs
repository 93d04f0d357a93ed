pub mod manifest;
pub mod merge;
pub mod params;
pub mod resolve;
pub mod types;
pub mod utils;

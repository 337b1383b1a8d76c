//! CLI command implementations

pub mod inspect;
pub mod json_output;
pub mod listen;
pub mod params;
pub mod scales;
pub mod sonify;

mod reporting;

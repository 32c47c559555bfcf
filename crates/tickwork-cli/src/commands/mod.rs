//! CLI command implementations

pub mod clock;
pub mod run;

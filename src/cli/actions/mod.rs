//! Top-level actions selected by the command line

pub mod dump;
pub mod list;
pub mod run;

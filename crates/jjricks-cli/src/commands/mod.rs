pub mod color;
pub mod completions;
pub mod config;
pub mod timer;

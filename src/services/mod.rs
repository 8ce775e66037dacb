//! Services that sit beside the UI: persistence, clocks, terminal and log
//! plumbing.

pub mod log_dirs;
pub mod terminal_modes;
pub mod time_source;
pub mod tracing_setup;
pub mod visitor_store;

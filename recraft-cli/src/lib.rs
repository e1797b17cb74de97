pub mod batch;
pub mod config;
pub mod logging;
pub mod session;
pub mod state;
pub mod utils;

pub mod record;
pub mod sink;
pub mod server;

pub mod config;
pub mod stdout_sink;
pub mod memory_sink;

pub mod cli;
pub mod config;
pub mod mcp;
pub mod serde_utils;
pub mod trello;

#[cfg(test)]
mod config_test;

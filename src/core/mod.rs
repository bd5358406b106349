pub mod alphabet;
pub mod codepoint;
pub mod config;

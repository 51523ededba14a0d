// ABOUTME: Shared types and configuration for hueshift.
// ABOUTME: Defines the canonical color record and config file handling.

pub mod color;
pub mod config;

pub use color::{ChannelError, Color};
pub use config::{Config, ConfigError};

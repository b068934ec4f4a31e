//! MenuMind Core — error taxonomy, data paths, configuration.

pub mod config;
pub mod error;

pub use config::{DataPaths, MenuMindConfig};
pub use error::{Error, Result};

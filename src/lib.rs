pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{engine::MapEngine, pipeline::QuakeMapPipeline};
pub use crate::utils::error::{QuakeMapError, Result};

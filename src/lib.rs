pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{deleter::TeamsApi, engine::SweepEngine};
pub use domain::model::{AppRecord, DeleteOutcome, SweepReport};
pub use domain::ports::DeleteApi;
pub use utils::error::{Result, SweepError};

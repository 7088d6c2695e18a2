pub mod deleter;
pub mod engine;
pub mod lister;
pub mod loader;

pub use crate::domain::model::{AppRecord, DeleteOutcome, SweepReport};
pub use crate::domain::ports::DeleteApi;
pub use crate::utils::error::Result;

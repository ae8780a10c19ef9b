pub mod config;
pub mod error;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod release;
pub mod tag;
pub mod ui;
pub mod version;

pub use error::{NextSemverError, Result};

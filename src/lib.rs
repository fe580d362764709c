pub mod cli;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod ui;

pub use error::{BumpError, Result};

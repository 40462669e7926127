pub mod builder;
pub mod config;
pub mod error;
pub mod fulfill;
pub mod io;
pub mod order;
pub mod paths;
pub mod prompt;
pub mod report;
pub mod session;
pub mod store;

pub use error::{OrderError, Result};

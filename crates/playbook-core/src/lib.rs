pub mod analytics;
pub mod assist;
pub mod config;
pub mod error;
pub mod guide;
pub mod init;
pub mod io;
pub mod lists;
pub mod paths;
pub mod persona;
pub mod render;
pub mod resource;
pub mod search;
pub mod stage;
pub mod store;
pub mod tags;
pub mod types;

pub use error::{PlaybookError, Result};

pub mod analytics;
pub mod assist;
pub mod config;
pub mod events;
pub mod guide;
pub mod init;
pub mod lists;
pub mod personas;
pub mod resources;
pub mod search;
pub mod stages;
pub mod tags;

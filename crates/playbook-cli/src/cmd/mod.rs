pub mod analytics;
pub mod assist;
pub mod config;
pub mod init;
pub mod lists;
pub mod persona;
pub mod render;
pub mod resource;
pub mod search;
pub mod stage;
pub mod suggest;
pub mod ui;
